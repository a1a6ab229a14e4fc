use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::pipeline::AnalysisReport;

/// One flat row per pipeline run, appended to the summary CSV.
#[derive(Debug, Default, Serialize)]
pub struct RunSummary {
    pub timestamp: DateTime<Utc>,
    pub input: Option<String>,
    pub students: usize,
    pub subjects: usize,

    // evaluation
    pub pass_mark: f64,
    pub passed: usize,
    pub failed: usize,
    pub topper_id: i64,
    pub topper_average: f64,

    // every mark in the roster
    pub overall_mean: f64,
    pub overall_median: f64,
    pub overall_min: f64,
    pub overall_max: f64,
    pub overall_std: f64,
}

impl RunSummary {
    pub fn from_report(report: &AnalysisReport) -> Self {
        RunSummary {
            timestamp: Utc::now(),
            input: None,
            students: report.students(),
            subjects: report.subjects,
            pass_mark: report.pass_mark,
            passed: report.evaluation.passed_count,
            failed: report.evaluation.failed_count,
            topper_id: report.evaluation.topper.identifier,
            topper_average: report.evaluation.topper.average,
            overall_mean: report.overall.mean,
            overall_median: report.overall.median,
            overall_min: report.overall.min,
            overall_max: report.overall.max,
            overall_std: report.overall.std,
        }
    }

    pub fn pct(part: usize, total: usize) -> f64 {
        if total == 0 {
            0.0
        } else {
            (part as f64 / total as f64) * 100.0
        }
    }

    pub fn pass_rate(&self) -> f64 {
        Self::pct(self.passed, self.students)
    }

    /// Record which file the run was computed from.
    pub fn with_input(mut self, input: &str) -> Self {
        self.input = Some(input.to_string());
        self
    }
}
