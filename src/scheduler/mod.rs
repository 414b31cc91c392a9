mod batch;
mod job;
mod optimizer;


pub use batch::BatchSummary;
pub use job::{
    ConstraintsRecord, DEFAULT_MAX_ITEMS, DEFAULT_MAX_VOLUME, JobRecord, PrintJob,
    PrinterConstraints, Scalar,
};
pub use optimizer::{PrintPlan, batch_records, optimize_printing, plan_batches, schedule};
