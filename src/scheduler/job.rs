use crate::error::InvalidInput;
use serde::{Deserialize, Serialize};

/// Printer volume used when no constraints are given
pub const DEFAULT_MAX_VOLUME: f64 = 300.0;

/// Printer item capacity used when no constraints are given
pub const DEFAULT_MAX_ITEMS: usize = 2;

/// A loosely-typed field value, as callers and JSON documents supply it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Integer(i64),
    Real(f64),
    Text(String),
}

impl Scalar {
    /// Render as an identifier. Whole reals keep their trailing `.0`.
    pub fn to_id_string(&self) -> String {
        match self {
            Scalar::Integer(i) => i.to_string(),
            Scalar::Real(r) => format!("{:?}", r),
            Scalar::Text(s) => s.clone(),
        }
    }

    pub fn to_real(&self, field: &'static str) -> Result<f64, InvalidInput> {
        match self {
            Scalar::Integer(i) => Ok(*i as f64),
            Scalar::Real(r) => Ok(*r),
            Scalar::Text(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| self.coercion_error(field, "real")),
        }
    }

    /// Integers pass through, reals truncate toward zero, strings parse
    pub fn to_integer(&self, field: &'static str) -> Result<i64, InvalidInput> {
        match self {
            Scalar::Integer(i) => Ok(*i),
            Scalar::Real(r) => {
                let truncated = r.trunc();
                if !truncated.is_finite()
                    || truncated < i64::MIN as f64
                    || truncated >= i64::MAX as f64
                {
                    return Err(self.coercion_error(field, "integer"));
                }
                Ok(truncated as i64)
            }
            Scalar::Text(s) => s
                .trim()
                .parse::<i64>()
                .map_err(|_| self.coercion_error(field, "integer")),
        }
    }

    fn coercion_error(&self, field: &'static str, target: &'static str) -> InvalidInput {
        InvalidInput::Coercion {
            field,
            raw: self.to_id_string(),
            target,
        }
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Integer(value)
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Scalar::Integer(value.into())
    }
}

impl From<u32> for Scalar {
    fn from(value: u32) -> Self {
        Scalar::Integer(value.into())
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Real(value)
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Text(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::Text(value)
    }
}

/// A print job exactly as the caller handed it over
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRecord {
    pub id: Scalar,
    pub volume: Scalar,
    pub priority: Scalar,
    pub print_time: Scalar,
}

impl JobRecord {
    pub fn new(
        id: impl Into<Scalar>,
        volume: impl Into<Scalar>,
        priority: impl Into<Scalar>,
        print_time: impl Into<Scalar>,
    ) -> Self {
        Self {
            id: id.into(),
            volume: volume.into(),
            priority: priority.into(),
            print_time: print_time.into(),
        }
    }
}

/// Printer limits exactly as the caller handed them over
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstraintsRecord {
    pub max_volume: Scalar,
    pub max_items: Scalar,
}

impl ConstraintsRecord {
    pub fn new(max_volume: impl Into<Scalar>, max_items: impl Into<Scalar>) -> Self {
        Self {
            max_volume: max_volume.into(),
            max_items: max_items.into(),
        }
    }
}

impl Default for ConstraintsRecord {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_VOLUME, DEFAULT_MAX_ITEMS as i64)
    }
}

/// A validated print job. `volume > 0` and `print_time > 0` always hold.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrintJob {
    id: String,
    volume: f64,
    priority: i64,
    print_time: u64,
}

impl PrintJob {
    pub fn new(
        id: impl Into<String>,
        volume: f64,
        priority: i64,
        print_time: i64,
    ) -> Result<Self, InvalidInput> {
        let id = id.into();

        // NaN fails this comparison too
        if !(volume > 0.0) {
            return Err(InvalidInput::NonPositiveVolume { id, volume });
        }
        if print_time <= 0 {
            return Err(InvalidInput::NonPositivePrintTime { id, print_time });
        }

        Ok(Self {
            id,
            volume,
            priority,
            print_time: print_time as u64,
        })
    }

    /// Coerce every field of a raw record, then validate
    pub fn from_record(record: &JobRecord) -> Result<Self, InvalidInput> {
        let id = record.id.to_id_string();
        let volume = record.volume.to_real("volume")?;
        let priority = record.priority.to_integer("priority")?;
        let print_time = record.print_time.to_integer("print_time")?;

        Self::new(id, volume, priority, print_time)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn volume(&self) -> f64 {
        self.volume
    }

    pub fn priority(&self) -> i64 {
        self.priority
    }

    pub fn print_time(&self) -> u64 {
        self.print_time
    }
}

/// Validated printer limits. Both are strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PrinterConstraints {
    max_volume: f64,
    max_items: usize,
}

impl PrinterConstraints {
    pub fn new(max_volume: f64, max_items: usize) -> Result<Self, InvalidInput> {
        Self::checked(max_volume, Ok(max_items))
    }

    pub fn from_record(record: &ConstraintsRecord) -> Result<Self, InvalidInput> {
        let max_volume = record.max_volume.to_real("max_volume")?;
        let max_items = record.max_items.to_integer("max_items")?;

        Self::checked(max_volume, usize::try_from(max_items).map_err(|_| max_items))
    }

    // `Err` carries a negative item count as given. Volume is checked first.
    fn checked(max_volume: f64, max_items: Result<usize, i64>) -> Result<Self, InvalidInput> {
        if !(max_volume > 0.0) {
            return Err(InvalidInput::NonPositiveMaxVolume(max_volume));
        }
        let max_items = match max_items {
            Ok(0) => return Err(InvalidInput::NonPositiveMaxItems(0)),
            Ok(n) => n,
            Err(raw) => return Err(InvalidInput::NonPositiveMaxItems(raw)),
        };

        Ok(Self {
            max_volume,
            max_items,
        })
    }

    pub fn max_volume(&self) -> f64 {
        self.max_volume
    }

    pub fn max_items(&self) -> usize {
        self.max_items
    }
}

impl Default for PrinterConstraints {
    fn default() -> Self {
        Self {
            max_volume: DEFAULT_MAX_VOLUME,
            max_items: DEFAULT_MAX_ITEMS,
        }
    }
}
