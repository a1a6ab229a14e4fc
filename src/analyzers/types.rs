//! Data types shared by the loader, validator and analyzers.

use serde::Serialize;

/// A parsed roster before validation.
///
/// `cells` is row-major with `subjects` cells per row. A `None` cell is a
/// blank or non-numeric value that the loader could not turn into a mark.
#[derive(Debug, Clone, PartialEq)]
pub struct RosterTable {
    pub identifiers: Vec<i64>,
    pub subjects: usize,
    pub cells: Vec<Option<f64>>,
}

impl RosterTable {
    /// Builds a table from row vectors. The subject count is taken from the
    /// first row; ragged input is left for the validator to reject.
    pub fn from_rows(identifiers: Vec<i64>, rows: Vec<Vec<Option<f64>>>) -> Self {
        let subjects = rows.first().map_or(0, Vec::len);
        Self {
            identifiers,
            subjects,
            cells: rows.into_iter().flatten().collect(),
        }
    }

    /// Number of mark rows, rounding a trailing partial row up.
    pub fn rows(&self) -> usize {
        if self.subjects == 0 {
            0
        } else {
            self.cells.len().div_ceil(self.subjects)
        }
    }

    pub fn is_rectangular(&self) -> bool {
        self.subjects > 0 && self.cells.len() % self.subjects == 0
    }
}

/// A validated, fully numeric N×M matrix of marks (students × subjects).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marks {
    rows: usize,
    cols: usize,
    values: Vec<f64>,
}

impl Marks {
    pub(crate) fn new(rows: usize, cols: usize, values: Vec<f64>) -> Self {
        debug_assert_eq!(rows * cols, values.len());
        Self { rows, cols, values }
    }

    /// Number of students.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of subjects.
    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Marks of one student across every subject.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.values[i * self.cols..(i + 1) * self.cols]
    }

    /// Marks of every student in one subject.
    pub fn column(&self, j: usize) -> Vec<f64> {
        self.values.iter().skip(j).step_by(self.cols).copied().collect()
    }
}

/// Direction of a reduction over [`Marks`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// Reduce across subjects, one value per student.
    Student,
    /// Reduce across students, one value per subject.
    Subject,
}

/// The five descriptive statistics, either scalars (`T = f64`) or one value
/// per student/subject (`T = Vec<f64>`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatBundle<T> {
    pub mean: T,
    pub median: T,
    pub min: T,
    pub max: T,
    pub std: T,
}

/// The student with the highest average mark.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Topper {
    pub identifier: i64,
    pub average: f64,
}

/// Pass/fail counts and the topper for one roster.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub passed_count: usize,
    pub failed_count: usize,
    pub topper: Topper,
}
