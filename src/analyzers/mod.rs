//! Descriptive statistics and pass/fail evaluation over validated marks.
//!
//! The analyzer reduces the marks matrix along either axis (or globally)
//! into mean, median, min, max and population standard deviation. The
//! evaluator classifies students against the pass mark and picks the topper.

pub mod analyzer;
pub mod evaluate;
pub mod types;
pub mod utility;
