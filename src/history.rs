use crate::error::QeaResult;
use crate::optimizer::{GenerationReport, ProgressCallback};
use std::path::Path;

/// Keeps every generation report of a run.
#[derive(Debug, Default, Clone)]
pub struct HistoryRecorder {
    reports: Vec<GenerationReport>,
}

impl HistoryRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reports(&self) -> &[GenerationReport] {
        &self.reports
    }

    pub fn into_reports(self) -> Vec<GenerationReport> {
        self.reports
    }

    /// True when the global best cost never increased between consecutive reports.
    pub fn is_monotonic(&self) -> bool {
        self.reports
            .windows(2)
            .all(|w| w[1].global_best_cost <= w[0].global_best_cost)
    }

    pub fn write_csv<P: AsRef<Path>>(&self, path: P) -> QeaResult<()> {
        let mut wtr = csv::Writer::from_path(path)?;
        for report in &self.reports {
            wtr.serialize(report)?;
        }
        wtr.flush()?;
        Ok(())
    }
}

impl ProgressCallback for HistoryRecorder {
    fn on_generation(&mut self, report: &GenerationReport) -> bool {
        self.reports.push(report.clone());
        true
    }
}
