//! Interactive text menu around the report pipeline.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use marks_report::config::PipelineConfig;
use marks_report::output::{render_report, write_report};
use marks_report::pipeline::run;
use tracing::{debug, error, info};

const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Show,
    Write,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Show),
            "2" => Some(Self::Write),
            "3" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Where to read the roster from and where the text report goes.
pub struct Session {
    pub input: PathBuf,
    pub report_path: PathBuf,
    pub config: PipelineConfig,
}

fn print_menu<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "===== Student Marks Report =====")?;
    writeln!(out, "1. Show report")?;
    writeln!(out, "2. Write report to text file")?;
    writeln!(out, "3. Exit")?;
    write!(out, "Enter choice: ")?;
    out.flush()?;
    Ok(())
}

/// Runs the menu until the user exits, input ends, or an action fails.
///
/// A failed action is reported on `out` and ends the loop; it is not
/// returned as an error. Only failures writing to `out` itself propagate.
pub fn run_menu<R: BufRead, W: Write>(mut input: R, mut out: W, session: &Session) -> Result<()> {
    let mut line = String::new();

    loop {
        print_menu(&mut out)?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            break;
        }

        let Some(choice) = MenuChoice::parse(&line) else {
            writeln!(out, "Invalid choice '{}'. Please enter 1, 2 or 3.", line.trim())?;
            continue;
        };
        debug!(?choice, "Menu choice");

        let outcome = match choice {
            MenuChoice::Show => show_report(&mut out, session),
            MenuChoice::Write => save_report(&mut out, session),
            MenuChoice::Exit => {
                writeln!(out, "Goodbye.")?;
                break;
            }
        };

        if let Err(e) = outcome {
            error!(error = %e, "Menu action failed");
            writeln!(out, "Error: {e}")?;
            break;
        }
    }

    Ok(())
}

fn show_report<W: Write>(out: &mut W, session: &Session) -> Result<()> {
    let report = run(&session.input, &session.config)?;
    write!(out, "{CLEAR_SCREEN}")?;
    out.write_all(render_report(&report).as_bytes())?;
    out.flush()?;
    Ok(())
}

fn save_report<W: Write>(out: &mut W, session: &Session) -> Result<()> {
    let report = run(&session.input, &session.config)?;
    write_report(&session.report_path, &report)?;
    info!(path = %session.report_path.display(), "Report saved from menu");
    writeln!(out, "Report written to {}", session.report_path.display())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;

    fn session(name: &str, csv: &str) -> Session {
        let dir = env::temp_dir().join(name);
        fs::create_dir_all(&dir).unwrap();
        let input = dir.join("student_data.csv");
        fs::write(&input, csv).unwrap();
        Session {
            report_path: dir.join("report.txt"),
            input,
            config: PipelineConfig::default(),
        }
    }

    fn drive(session: &Session, keys: &str) -> String {
        let mut out = Vec::new();
        run_menu(keys.as_bytes(), &mut out, session).unwrap();
        String::from_utf8(out).unwrap()
    }

    const VALID: &str = "roll,a,b\n1,50,60\n2,70,80\n3,90,40\n";

    #[test]
    fn test_parse_choice() {
        assert_eq!(MenuChoice::parse("1\n"), Some(MenuChoice::Show));
        assert_eq!(MenuChoice::parse(" 2 "), Some(MenuChoice::Write));
        assert_eq!(MenuChoice::parse("3"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("4"), None);
        assert_eq!(MenuChoice::parse(""), None);
    }

    #[test]
    fn test_show_then_exit() {
        let s = session("marks_report_menu_show", VALID);
        let text = drive(&s, "1\n3\n");

        assert!(text.contains(CLEAR_SCREEN));
        assert!(text.contains("Topper: Roll 2 (Avg: 75.00)"));
        assert!(text.contains("Goodbye."));
    }

    #[test]
    fn test_invalid_choice_reprompts() {
        let s = session("marks_report_menu_invalid", VALID);
        let text = drive(&s, "banana\n3\n");

        assert!(text.contains("Invalid choice 'banana'"));
        assert_eq!(text.matches("Enter choice: ").count(), 2);
    }

    #[test]
    fn test_write_creates_report_without_control_sequences() {
        let s = session("marks_report_menu_write", VALID);
        let _ = fs::remove_file(&s.report_path);
        let text = drive(&s, "2\n3\n");

        assert!(text.contains("Report written to"));
        let content = fs::read_to_string(&s.report_path).unwrap();
        assert!(content.contains("SUMMARY"));
        assert!(!content.contains('\x1B'));
    }

    #[test]
    fn test_pipeline_error_ends_loop() {
        let s = session("marks_report_menu_error", "roll,a\n1,105\n");
        let text = drive(&s, "1\n1\n3\n");

        assert!(text.contains("Error: Marks must be between 0 and 100"));
        assert_eq!(text.matches("Enter choice: ").count(), 1);
        assert!(!text.contains("Goodbye."));
    }

    #[test]
    fn test_end_of_input_exits() {
        let s = session("marks_report_menu_eof", VALID);
        let text = drive(&s, "");
        assert_eq!(text.matches("Enter choice: ").count(), 1);
    }
}
