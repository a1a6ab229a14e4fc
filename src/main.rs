//! CLI entry point for the student marks reporter.
//!
//! With no subcommand the interactive menu opens. The other subcommands run
//! the pipeline once and print or save the result.

mod menu;

use crate::menu::{Session, run_menu};
use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use marks_report::config::{
    DEFAULT_MAX_MARK, DEFAULT_MIN_MARK, DEFAULT_PASS_MARK, PipelineConfig,
};
use marks_report::output::{
    append_summary, default_report_path, default_summary_path, print_report, write_json,
    write_report,
};
use marks_report::pipeline::{AnalysisReport, run};
use marks_report::stats::RunSummary;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::{error, info};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

/// Every option has a default, and running with none of them (menu over
/// `student_data.csv`, marks in `[0, 100]`, pass mark 50) is the normal way
/// to use the tool. Flags and `MARKS_*` variables only override those defaults.
#[derive(Parser)]
#[command(name = "marks_report")]
#[command(about = "Validate a CSV of student marks and report on it", long_about = None)]
struct Cli {
    /// CSV with a header row, roll numbers in column 0 and one subject per column after
    #[arg(short, long, env = "MARKS_INPUT", default_value = "student_data.csv", global = true)]
    input: PathBuf,

    /// Field delimiter (single ASCII character)
    #[arg(long, env = "MARKS_DELIMITER", default_value_t = ',', global = true)]
    delimiter: char,

    /// Number of header rows to skip
    #[arg(long, env = "MARKS_SKIP_HEADER", default_value_t = 1, global = true)]
    skip_header: usize,

    /// Lowest acceptable mark (inclusive)
    #[arg(long, env = "MARKS_MIN", default_value_t = DEFAULT_MIN_MARK, global = true)]
    min_mark: f64,

    /// Highest acceptable mark (inclusive)
    #[arg(long, env = "MARKS_MAX", default_value_t = DEFAULT_MAX_MARK, global = true)]
    max_mark: f64,

    /// A student fails if any subject mark is strictly below this
    #[arg(long, env = "MARKS_PASS", default_value_t = DEFAULT_PASS_MARK, global = true)]
    pass_mark: f64,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive menu (default)
    Menu,
    /// Print the report to the terminal
    Show,
    /// Write the text report to a file
    Write {
        /// Defaults to report.txt beside the input
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Write the full analysis as JSON
    Json {
        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,
    },
    /// Append a one-line run summary to a CSV log
    Summary {
        /// Defaults to summary.csv beside the input
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

impl Cli {
    fn pipeline_config(&self) -> Result<PipelineConfig> {
        if !self.delimiter.is_ascii() {
            bail!("delimiter must be a single ASCII character, got '{}'", self.delimiter);
        }
        let config = PipelineConfig {
            delimiter: self.delimiter as u8,
            skip_header: self.skip_header,
            min_mark: self.min_mark,
            max_mark: self.max_mark,
            pass_mark: self.pass_mark,
        };
        config.check()?;
        Ok(config)
    }
}

/// Runs the pipeline once, logging a rejected roster before it propagates.
fn analyze_input(input: &Path, config: &PipelineConfig) -> Result<AnalysisReport> {
    let report = run(input, config).inspect_err(|e| error!(error = %e, "Pipeline failed"))?;
    Ok(report)
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: quiet stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/marks_report.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("marks_report.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    // The menu shares the terminal, so stderr only shows warnings by default.
    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("warn".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();
    let config = cli.pipeline_config()?;
    let input = cli.input.clone();

    info!(input = %input.display(), ?config, "Starting");

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => {
            let session = Session {
                report_path: default_report_path(&input),
                input,
                config,
            };
            let stdin = std::io::stdin();
            run_menu(stdin.lock(), std::io::stdout(), &session)?;
        }
        Commands::Show => {
            let report = analyze_input(&input, &config)?;
            print_report(&report)?;
        }
        Commands::Write { output } => {
            let report = analyze_input(&input, &config)?;
            let path = output.unwrap_or_else(|| default_report_path(&input));
            write_report(&path, &report)?;
            println!("Report written to {}", path.display());
        }
        Commands::Json { output } => {
            let report = analyze_input(&input, &config)?;
            write_json(&output, &report)?;
        }
        Commands::Summary { output } => {
            let report = analyze_input(&input, &config)?;
            let summary =
                RunSummary::from_report(&report).with_input(&input.display().to_string());
            let path = output.unwrap_or_else(|| default_summary_path(&input));
            append_summary(&path, &summary)?;
            info!(
                path = %path.display(),
                pass_rate = summary.pass_rate(),
                "Summary appended"
            );
        }
    }

    Ok(())
}
