use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::error::{RosterError, RosterResult};

pub const DEFAULT_MIN_MARK: f64 = 0.0;
pub const DEFAULT_MAX_MARK: f64 = 100.0;
pub const DEFAULT_PASS_MARK: f64 = 50.0;

/// Knobs for one run of the pipeline.
///
/// The defaults reproduce the classic marksheet: comma separated, one header
/// row, marks within `[0, 100]`, pass mark `50`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub delimiter: u8,
    pub skip_header: usize,
    pub min_mark: f64,
    pub max_mark: f64,
    pub pass_mark: f64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            skip_header: 1,
            min_mark: DEFAULT_MIN_MARK,
            max_mark: DEFAULT_MAX_MARK,
            pass_mark: DEFAULT_PASS_MARK,
        }
    }
}

impl PipelineConfig {
    /// Rejects bounds that no mark could ever satisfy and a pass mark that
    /// no comparison could act on.
    pub fn check(&self) -> RosterResult<()> {
        if !matches!(
            self.min_mark.partial_cmp(&self.max_mark),
            Some(Ordering::Less | Ordering::Equal)
        ) {
            return Err(RosterError::InvalidBounds {
                min: self.min_mark,
                max: self.max_mark,
            });
        }
        if !self.pass_mark.is_finite() {
            return Err(RosterError::InvalidPassMark(self.pass_mark));
        }
        Ok(())
    }
}
