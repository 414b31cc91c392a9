// Public API exports
pub mod error;
pub mod minmax;
pub mod scheduler;

pub use error::InvalidInput;

pub use minmax::get_min_max;

pub use scheduler::{
    BatchSummary, ConstraintsRecord, DEFAULT_MAX_ITEMS, DEFAULT_MAX_VOLUME, JobRecord, PrintJob,
    PrintPlan, PrinterConstraints, Scalar, batch_records, optimize_printing, plan_batches, schedule,
};
