//! CSV loader for student rosters.
//!
//! Column 0 holds the integer student identifier, every following column one
//! subject mark. Header rows are skipped as raw lines, whatever they
//! contain; after the header, blank lines and lines starting with `#` are
//! ignored.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use csv::{ReaderBuilder, Trim};

use crate::analyzers::types::RosterTable;
use crate::config::PipelineConfig;
use crate::error::{RosterError, RosterResult};

/// Opens `path` and parses it with [`parse_roster`].
///
/// # Errors
///
/// Returns [`RosterError::Io`] if the file cannot be opened, otherwise
/// whatever [`parse_roster`] reports.
pub fn load_roster(path: &Path, config: &PipelineConfig) -> RosterResult<RosterTable> {
    let file = File::open(path)?;
    parse_roster(file, config)
}

/// Parses delimited text into a [`RosterTable`].
///
/// Mark cells that are blank or not numeric are kept as `None` so the
/// validator can report them; they are never coerced to a number here.
///
/// # Errors
///
/// * [`RosterError::EmptyInput`] when no data rows remain after the header.
/// * [`RosterError::InvalidIdentifier`] when column 0 is not an integer.
/// * [`RosterError::RaggedRow`] when a row is wider or narrower than the first.
pub fn parse_roster<R: Read>(reader: R, config: &PipelineConfig) -> RosterResult<RosterTable> {
    let mut reader = BufReader::new(reader);
    skip_header_lines(&mut reader, config.skip_header)?;

    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .delimiter(config.delimiter)
        .comment(Some(b'#'))
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut identifiers = Vec::new();
    let mut cells = Vec::new();
    let mut width = None;

    for (idx, result) in rdr.records().enumerate() {
        let record = result?;
        let row = idx + 1;

        let expected = *width.get_or_insert(record.len());
        if record.len() != expected {
            return Err(RosterError::RaggedRow {
                row,
                expected,
                found: record.len(),
            });
        }

        let id_cell = record.get(0).unwrap_or("");
        identifiers.push(parse_identifier(id_cell).ok_or_else(|| {
            RosterError::InvalidIdentifier {
                row,
                value: id_cell.to_string(),
            }
        })?);

        cells.extend(record.iter().skip(1).map(parse_mark));
    }

    if identifiers.is_empty() {
        return Err(RosterError::EmptyInput);
    }

    Ok(RosterTable {
        identifiers,
        subjects: width.unwrap_or(1).saturating_sub(1),
        cells,
    })
}

/// Consumes `count` header lines before any comment handling. Blank lines
/// are not counted as header rows.
fn skip_header_lines<R: BufRead>(reader: &mut R, count: usize) -> RosterResult<()> {
    let mut line = Vec::new();
    let mut skipped = 0;
    while skipped < count {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        if !line.iter().all(u8::is_ascii_whitespace) {
            skipped += 1;
        }
    }
    Ok(())
}

fn parse_identifier(s: &str) -> Option<i64> {
    if let Ok(id) = s.parse::<i64>() {
        return Some(id);
    }
    let value = s.parse::<f64>().ok()?;
    if value.is_finite() && value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        Some(value as i64)
    } else {
        None
    }
}

fn parse_mark(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|v| !v.is_nan())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> RosterResult<RosterTable> {
        parse_roster(text.as_bytes(), &PipelineConfig::default())
    }

    #[test]
    fn test_parse_basic_roster() {
        let table = parse("roll,math,physics\n1,50,60\n2,70,80\n3,90,40\n").unwrap();

        assert_eq!(table.identifiers, vec![1, 2, 3]);
        assert_eq!(table.subjects, 2);
        assert_eq!(table.rows(), 3);
        assert_eq!(table.cells[4], Some(90.0));
    }

    #[test]
    fn test_header_only_is_empty_input() {
        let result = parse("roll,math,physics\n");
        assert!(matches!(result, Err(RosterError::EmptyInput)));
    }

    #[test]
    fn test_completely_empty_file() {
        assert!(matches!(parse(""), Err(RosterError::EmptyInput)));
    }

    #[test]
    fn test_blank_and_text_cells_are_missing() {
        let table = parse("roll,a,b,c\n1,,abc,72.5\n").unwrap();
        assert_eq!(table.cells, vec![None, None, Some(72.5)]);
    }

    #[test]
    fn test_nan_literal_is_missing() {
        let table = parse("roll,a\n1,nan\n").unwrap();
        assert_eq!(table.cells, vec![None]);
    }

    #[test]
    fn test_integral_decimal_identifier() {
        let table = parse("roll,a\n4.0,10\n").unwrap();
        assert_eq!(table.identifiers, vec![4]);
    }

    #[test]
    fn test_invalid_identifier() {
        let result = parse("roll,a\n1,10\nx7,20\n");
        match result {
            Err(RosterError::InvalidIdentifier { row, value }) => {
                assert_eq!(row, 2);
                assert_eq!(value, "x7");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_ragged_row() {
        let result = parse("roll,a,b\n1,10,20\n2,30\n");
        assert!(matches!(
            result,
            Err(RosterError::RaggedRow {
                row: 2,
                expected: 3,
                found: 2
            })
        ));
    }

    #[test]
    fn test_identifier_only_rows_have_no_subjects() {
        let table = parse("roll\n1\n2\n").unwrap();
        assert_eq!(table.identifiers, vec![1, 2]);
        assert_eq!(table.subjects, 0);
        assert!(table.cells.is_empty());
    }

    #[test]
    fn test_comments_blank_lines_and_whitespace() {
        let table = parse("roll,a\n# comment\n\n 1 , 88 \n").unwrap();
        assert_eq!(table.identifiers, vec![1]);
        assert_eq!(table.cells, vec![Some(88.0)]);
    }

    #[test]
    fn test_hash_prefixed_header_keeps_every_student() {
        let table = parse("#roll,math\n1,50\n2,60\n").unwrap();
        assert_eq!(table.identifiers, vec![1, 2]);
        assert_eq!(table.cells, vec![Some(50.0), Some(60.0)]);
    }

    #[test]
    fn test_blank_lines_around_header() {
        assert_eq!(parse("roll,math\n\n1,50\n").unwrap().identifiers, vec![1]);
        assert_eq!(parse("\nroll,math\n1,50\n").unwrap().identifiers, vec![1]);
    }

    #[test]
    fn test_custom_delimiter_and_header_rows() {
        let config = PipelineConfig {
            delimiter: b';',
            skip_header: 2,
            ..Default::default()
        };
        let table = parse_roster("title\nroll;a\n9;75\n".as_bytes(), &config).unwrap();
        assert_eq!(table.identifiers, vec![9]);
        assert_eq!(table.cells, vec![Some(75.0)]);
    }

    #[test]
    fn test_missing_file() {
        let result = load_roster(
            Path::new("/definitely/not/here/student_data.csv"),
            &PipelineConfig::default(),
        );
        assert!(matches!(result, Err(RosterError::Io(_))));
    }
}
