use thiserror::Error;

/// The one error kind shared by both computations. Every variant is raised
/// before any output is produced.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvalidInput {
    #[error("Sequence must not be empty")]
    EmptySequence,

    #[error("Job {id}: volume must be > 0 (got {volume})")]
    NonPositiveVolume { id: String, volume: f64 },

    #[error("Job {id}: print_time must be > 0 (got {print_time})")]
    NonPositivePrintTime { id: String, print_time: i64 },

    #[error("max_volume must be > 0 (got {0})")]
    NonPositiveMaxVolume(f64),

    #[error("max_items must be > 0 (got {0})")]
    NonPositiveMaxItems(i64),

    #[error("Field `{field}`: cannot convert {raw:?} to {target}")]
    Coercion {
        field: &'static str,
        raw: String,
        target: &'static str,
    },
}
