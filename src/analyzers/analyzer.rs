use crate::analyzers::types::{Axis, Marks, StatBundle};
use crate::analyzers::utility::{max, mean, median, min, stddev};

/// Reduces `marks` along `axis`.
///
/// [`Axis::Student`] yields one value per student (length N), [`Axis::Subject`]
/// one value per subject (length M).
pub fn analyze(marks: &Marks, axis: Axis) -> StatBundle<Vec<f64>> {
    let series: Vec<Vec<f64>> = match axis {
        Axis::Student => (0..marks.rows()).map(|i| marks.row(i).to_vec()).collect(),
        Axis::Subject => (0..marks.cols()).map(|j| marks.column(j)).collect(),
    };

    let reduce = |f: fn(&[f64]) -> f64| {
        series
            .iter()
            .map(|s| f(s.as_slice()))
            .collect::<Vec<f64>>()
    };

    StatBundle {
        mean: reduce(mean),
        median: reduce(median),
        min: reduce(min),
        max: reduce(max),
        std: reduce(stddev),
    }
}

/// Reduces every mark in the matrix to a single scalar per metric.
pub fn analyze_global(marks: &Marks) -> StatBundle<f64> {
    let values = marks.values();
    StatBundle {
        mean: mean(values),
        median: median(values),
        min: min(values),
        max: max(values),
        std: stddev(values),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Marks {
        Marks::new(3, 2, vec![50.0, 60.0, 70.0, 80.0, 90.0, 40.0])
    }

    #[test]
    fn test_student_axis() {
        let stats = analyze(&sample(), Axis::Student);

        assert_eq!(stats.mean, vec![55.0, 75.0, 65.0]);
        assert_eq!(stats.median, vec![55.0, 75.0, 65.0]);
        assert_eq!(stats.min, vec![50.0, 70.0, 40.0]);
        assert_eq!(stats.max, vec![60.0, 80.0, 90.0]);
        assert_eq!(stats.std, vec![5.0, 5.0, 25.0]);
    }

    #[test]
    fn test_subject_axis() {
        let stats = analyze(&sample(), Axis::Subject);

        assert_eq!(stats.mean, vec![70.0, 60.0]);
        assert_eq!(stats.median, vec![70.0, 60.0]);
        assert_eq!(stats.min, vec![50.0, 40.0]);
        assert_eq!(stats.max, vec![90.0, 80.0]);
        assert_eq!(stats.mean.len(), 2);
    }

    #[test]
    fn test_subject_axis_opposite_students() {
        let marks = Marks::new(2, 2, vec![100.0, 0.0, 0.0, 100.0]);
        let stats = analyze(&marks, Axis::Subject);

        assert_eq!(stats.mean, vec![50.0, 50.0]);
        assert_eq!(stats.std, vec![50.0, 50.0]);
    }

    #[test]
    fn test_global() {
        let stats = analyze_global(&sample());

        assert_eq!(stats.mean, 65.0);
        assert_eq!(stats.median, 65.0);
        assert_eq!(stats.min, 40.0);
        assert_eq!(stats.max, 90.0);
        let expected = (1750.0f64 / 6.0).sqrt();
        assert!((stats.std - expected).abs() < 1e-9);
    }
}
