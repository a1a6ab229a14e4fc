//! Load → validate → analyze + evaluate, as one call.
//!
//! Nothing here prints or writes files; callers hand the resulting
//! [`AnalysisReport`] to [`crate::output`].

use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::analyzers::analyzer::{analyze, analyze_global};
use crate::analyzers::evaluate::evaluate;
use crate::analyzers::types::{Axis, Evaluation, RosterTable, StatBundle};
use crate::config::PipelineConfig;
use crate::error::RosterResult;
use crate::loader::load_roster;
use crate::validator::validate;

/// Everything the reporter needs from one run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub identifiers: Vec<i64>,
    pub subjects: usize,
    pub pass_mark: f64,
    /// One value per student.
    pub student_stats: StatBundle<Vec<f64>>,
    /// One value per subject.
    pub subject_stats: StatBundle<Vec<f64>>,
    pub overall: StatBundle<f64>,
    pub evaluation: Evaluation,
}

impl AnalysisReport {
    pub fn students(&self) -> usize {
        self.identifiers.len()
    }
}

/// Runs the whole pipeline over the CSV at `path`.
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn run(path: &Path, config: &PipelineConfig) -> RosterResult<AnalysisReport> {
    config.check()?;
    let table = load_roster(path, config)?;
    debug!(
        students = table.identifiers.len(),
        subjects = table.subjects,
        "Roster loaded"
    );
    run_table(&table, config)
}

/// Runs validation and analysis over an already parsed table.
pub fn run_table(table: &RosterTable, config: &PipelineConfig) -> RosterResult<AnalysisReport> {
    config.check()?;
    let marks = validate(table, config.min_mark, config.max_mark)?;

    let report = AnalysisReport {
        identifiers: table.identifiers.clone(),
        subjects: marks.cols(),
        pass_mark: config.pass_mark,
        student_stats: analyze(&marks, Axis::Student),
        subject_stats: analyze(&marks, Axis::Subject),
        overall: analyze_global(&marks),
        evaluation: evaluate(&table.identifiers, &marks, config.pass_mark),
    };

    debug!(
        passed = report.evaluation.passed_count,
        failed = report.evaluation.failed_count,
        topper = report.evaluation.topper.identifier,
        "Roster analyzed"
    );

    Ok(report)
}
