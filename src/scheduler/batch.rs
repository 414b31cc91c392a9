use super::job::{PrintJob, PrinterConstraints};
use serde::Serialize;

/// A flushed batch: the jobs that print together and what they cost
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchSummary {
    /// Job ids in the order they joined the batch
    pub job_ids: Vec<String>,
    /// Sum of member volumes
    pub volume: f64,
    /// Slowest member's print time
    pub batch_time: u64,
}

/// The batch being filled during one scheduling pass
#[derive(Debug, Default)]
pub(crate) struct Batch {
    jobs: Vec<PrintJob>,
    volume: f64,
}

impl Batch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Both limits must hold with `job` added
    pub fn fits(&self, job: &PrintJob, constraints: &PrinterConstraints) -> bool {
        let fits_items = self.jobs.len() < constraints.max_items();
        let fits_volume = self.volume + job.volume() <= constraints.max_volume();
        fits_items && fits_volume
    }

    pub fn push(&mut self, job: PrintJob) {
        self.volume += job.volume();
        self.jobs.push(job);
    }

    /// Empty the batch and summarize what it held. `None` if it was already empty.
    pub fn flush(&mut self) -> Option<BatchSummary> {
        if self.jobs.is_empty() {
            return None;
        }

        let jobs = std::mem::take(&mut self.jobs);
        let volume = std::mem::replace(&mut self.volume, 0.0);
        let batch_time = jobs.iter().map(PrintJob::print_time).max().unwrap_or(0);

        Some(BatchSummary {
            job_ids: jobs.into_iter().map(|j| j.id().to_string()).collect(),
            volume,
            batch_time,
        })
    }
}
