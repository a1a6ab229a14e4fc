use crate::analyzers::types::{Evaluation, Marks, Topper};
use crate::analyzers::utility::mean;

/// Finds the student with the highest average mark.
///
/// Ties go to the first student in identifier order. `identifiers` and
/// `marks` must already have passed validation (same length, at least one row).
pub fn find_topper(identifiers: &[i64], marks: &Marks) -> Topper {
    let mut best = 0;
    let mut best_avg = f64::NEG_INFINITY;

    for i in 0..marks.rows() {
        let avg = mean(marks.row(i));
        if avg > best_avg {
            best = i;
            best_avg = avg;
        }
    }

    Topper {
        identifier: identifiers[best],
        average: best_avg,
    }
}

/// Flags each student who scored strictly below `pass_mark` in any subject.
///
/// `true` means failing. A single weak subject fails the student regardless
/// of their average.
pub fn pass_fail_mask(marks: &Marks, pass_mark: f64) -> Vec<bool> {
    (0..marks.rows())
        .map(|i| marks.row(i).iter().any(|&m| m < pass_mark))
        .collect()
}

/// Derives pass/fail counts and the topper for a validated roster.
pub fn evaluate(identifiers: &[i64], marks: &Marks, pass_mark: f64) -> Evaluation {
    let failed_count = pass_fail_mask(marks, pass_mark)
        .into_iter()
        .filter(|&failed| failed)
        .count();

    Evaluation {
        passed_count: marks.rows() - failed_count,
        failed_count,
        topper: find_topper(identifiers, marks),
    }
}
