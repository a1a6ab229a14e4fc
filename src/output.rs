//! Report rendering and persistence.
//!
//! Supports the plain-text marksheet report (terminal or file), a JSON dump
//! of the full analysis, and a CSV run-summary log.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Result;
use csv::WriterBuilder;
use tracing::{debug, info};

use crate::pipeline::AnalysisReport;
use crate::stats::RunSummary;

pub const REPORT_FILE_NAME: &str = "report.txt";
pub const SUMMARY_FILE_NAME: &str = "summary.csv";

const RULE_WIDTH: usize = 50;

/// Default location of the text report: `report.txt` next to the input.
pub fn default_report_path(input: &Path) -> PathBuf {
    input.with_file_name(REPORT_FILE_NAME)
}

/// Default location of the summary log: `summary.csv` next to the input.
pub fn default_summary_path(input: &Path) -> PathBuf {
    input.with_file_name(SUMMARY_FILE_NAME)
}

fn section(out: &mut String, title: &str) {
    let rule = "=".repeat(RULE_WIDTH);
    out.push_str(&format!("\n{rule}\n{title}\n{rule}\n"));
}

/// Renders the three-section marksheet report as plain text.
pub fn render_report(report: &AnalysisReport) -> String {
    let mut out = String::new();

    section(&mut out, "STUDENT PERFORMANCE");
    let students = &report.student_stats;
    for (i, id) in report.identifiers.iter().enumerate() {
        out.push_str(&format!(
            "Roll {id} | Mean: {:.2} | Min: {:.0} | Max: {:.0}\n",
            students.mean[i], students.min[i], students.max[i]
        ));
    }

    section(&mut out, "SUBJECT PERFORMANCE");
    let subjects = &report.subject_stats;
    for (j, (mean, std)) in subjects.mean.iter().zip(&subjects.std).enumerate() {
        out.push_str(&format!(
            "Subject {} | Mean: {mean:.2} | Std: {std:.2}\n",
            j + 1
        ));
    }

    section(&mut out, "SUMMARY");
    let evaluation = &report.evaluation;
    out.push_str(&format!("Passed: {}\n", evaluation.passed_count));
    out.push_str(&format!("Failed: {}\n", evaluation.failed_count));
    out.push_str(&format!(
        "Topper: Roll {} (Avg: {:.2})\n",
        evaluation.topper.identifier, evaluation.topper.average
    ));

    out
}

/// Prints the report to stdout.
pub fn print_report(report: &AnalysisReport) -> Result<()> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    handle.write_all(render_report(report).as_bytes())?;
    handle.flush()?;
    Ok(())
}

/// Writes the report to `path`, replacing any existing file.
pub fn write_report(path: &Path, report: &AnalysisReport) -> Result<()> {
    debug!(path = %path.display(), "Writing text report");

    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(render_report(report).as_bytes())?;
    writer.flush()?;

    info!(path = %path.display(), "Text report written");
    Ok(())
}

/// Writes the full analysis as pretty-printed JSON.
pub fn write_json(path: &Path, report: &AnalysisReport) -> Result<()> {
    debug!(path = %path.display(), "Writing JSON report");

    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, report)?;
    writer.write_all(b"\n")?;
    writer.flush()?;

    info!(path = %path.display(), "JSON report written");
    Ok(())
}

/// Appends a [`RunSummary`] record as a row to a CSV file.
///
/// Creates the file with headers if it does not already exist.
pub fn append_summary(path: &Path, summary: &RunSummary) -> Result<()> {
    let file_exists = path.exists();
    debug!(path = %path.display(), file_exists, "Appending summary record");

    let file = OpenOptions::new().append(true).create(true).open(path)?;

    let mut writer = WriterBuilder::new()
        .has_headers(!file_exists)
        .from_writer(file);

    writer.serialize(summary)?;
    writer.flush()?;

    Ok(())
}
