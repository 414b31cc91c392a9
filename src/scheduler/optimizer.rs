use super::batch::{Batch, BatchSummary};
use super::job::{ConstraintsRecord, JobRecord, PrintJob, PrinterConstraints};
use crate::error::InvalidInput;
use serde::{Deserialize, Serialize};

/// Execution order and total elapsed time for a set of print jobs.
///
/// `total_time` is wider than a single print time so that summing any
/// number of batches cannot overflow.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PrintPlan {
    pub print_order: Vec<String>,
    pub total_time: u128,
}

impl PrintPlan {
    /// Concatenate batch ids in batch order and sum the batch times
    pub fn from_batches(batches: &[BatchSummary]) -> Self {
        Self {
            print_order: batches
                .iter()
                .flat_map(|b| b.job_ids.iter().cloned())
                .collect(),
            total_time: total_time(batches),
        }
    }
}

/// Validate raw job and constraint records, then schedule them.
///
/// An empty job list returns an empty plan without looking at `constraints`.
/// Otherwise every job is validated (in input order) before the constraints,
/// and nothing is scheduled unless all of them pass.
pub fn optimize_printing(
    jobs: &[JobRecord],
    constraints: &ConstraintsRecord,
) -> Result<PrintPlan, InvalidInput> {
    let batches = batch_records(jobs, constraints)?;
    Ok(PrintPlan::from_batches(&batches))
}

/// Same validation as [`optimize_printing`], returning the flushed batches
pub fn batch_records(
    jobs: &[JobRecord],
    constraints: &ConstraintsRecord,
) -> Result<Vec<BatchSummary>, InvalidInput> {
    if jobs.is_empty() {
        return Ok(Vec::new());
    }

    let jobs = jobs
        .iter()
        .map(PrintJob::from_record)
        .collect::<Result<Vec<_>, _>>()?;
    let constraints = PrinterConstraints::from_record(constraints)?;

    Ok(plan_batches(jobs, &constraints))
}

pub fn schedule(jobs: Vec<PrintJob>, constraints: &PrinterConstraints) -> PrintPlan {
    PrintPlan::from_batches(&plan_batches(jobs, constraints))
}

/// Greedy batching:
/// - Stable sort by ascending priority
/// - Append each job to the current batch while it fits both limits
/// - Otherwise flush and start a fresh batch with that job alone
///
/// A job larger than `max_volume` still gets a batch of its own.
pub fn plan_batches(mut jobs: Vec<PrintJob>, constraints: &PrinterConstraints) -> Vec<BatchSummary> {
    jobs.sort_by_key(PrintJob::priority);

    let mut batches = Vec::new();
    let mut current = Batch::new();

    for job in jobs {
        if current.fits(&job, constraints) {
            tracing::trace!(job = job.id(), "Job fits current batch");
        } else {
            flush_into(&mut current, &mut batches);
        }

        if job.volume() > constraints.max_volume() {
            tracing::warn!(
                job = job.id(),
                volume = job.volume(),
                max_volume = constraints.max_volume(),
                "Job exceeds printer volume, printing it alone"
            );
        }

        current.push(job);
    }

    flush_into(&mut current, &mut batches);

    tracing::debug!(
        batches = batches.len(),
        total_time = total_time(&batches),
        "Scheduling complete"
    );

    batches
}

fn total_time(batches: &[BatchSummary]) -> u128 {
    batches.iter().map(|b| u128::from(b.batch_time)).sum()
}

fn flush_into(batch: &mut Batch, batches: &mut Vec<BatchSummary>) {
    if let Some(summary) = batch.flush() {
        tracing::debug!(
            index = batches.len(),
            jobs = summary.job_ids.len(),
            volume = summary.volume,
            batch_time = summary.batch_time,
            "Flushed batch"
        );
        batches.push(summary);
    }
}
