//! Gatekeeper between the loader and the analyzers.
//!
//! Checks run in a fixed order and stop at the first violation:
//! empty marks, shape, duplicate identifiers, missing values, range.

use std::collections::HashSet;

use crate::analyzers::types::{Marks, RosterTable};
use crate::error::{RosterError, RosterResult};

/// Validates `table` and returns its marks as a dense numeric matrix.
///
/// Marks equal to `min_mark` or `max_mark` are accepted. The returned
/// values are exactly the loaded ones, in the same order.
pub fn validate(table: &RosterTable, min_mark: f64, max_mark: f64) -> RosterResult<Marks> {
    if table.cells.is_empty() || table.subjects == 0 {
        return Err(RosterError::EmptyMarks);
    }

    let rows = table.rows();
    if table.identifiers.len() != rows || !table.is_rectangular() {
        return Err(RosterError::ShapeMismatch {
            identifiers: table.identifiers.len(),
            rows,
        });
    }

    let mut seen = HashSet::with_capacity(table.identifiers.len());
    if let Some(dup) = table.identifiers.iter().find(|id| !seen.insert(**id)) {
        return Err(RosterError::DuplicateIdentifier(*dup));
    }

    let position = |idx: usize| (idx / table.subjects + 1, idx % table.subjects + 1);

    let mut values = Vec::with_capacity(table.cells.len());
    for (idx, cell) in table.cells.iter().enumerate() {
        match cell {
            Some(v) => values.push(*v),
            None => {
                let (row, subject) = position(idx);
                return Err(RosterError::MissingValue { row, subject });
            }
        }
    }

    if let Some((idx, &value)) = values
        .iter()
        .enumerate()
        .find(|&(_, &v)| v < min_mark || v > max_mark)
    {
        let (row, subject) = position(idx);
        return Err(RosterError::OutOfRange {
            row,
            subject,
            value,
            min: min_mark,
            max: max_mark,
        });
    }

    Ok(Marks::new(rows, table.subjects, values))
}
