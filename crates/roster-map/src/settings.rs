//! Tunables for the option merger.

use serde::{Deserialize, Serialize};

use crate::error::{MapError, Result};

pub const DEFAULT_THRESHOLD: f64 = 0.4;
pub const DEFAULT_DISTANCE: usize = 100;
pub const DEFAULT_UNCATEGORIZED_LABEL: &str = "Uncategorized";

/// Settings for fuzzy filtering and synthetic candidates.
///
/// Every field has a default, so a settings file only needs the keys it
/// overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MergerSettings {
    /// Maximum match score, `0.0` exact to `1.0` anything.
    pub threshold: f64,
    /// Offset in the label where a match is expected to start.
    pub location: usize,
    /// How far from `location` a match may drift before it costs a full
    /// score point.
    pub distance: usize,
    /// Display text of the "no category" candidate.
    pub uncategorized_label: String,
}

impl Default for MergerSettings {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            location: 0,
            distance: DEFAULT_DISTANCE,
            uncategorized_label: DEFAULT_UNCATEGORIZED_LABEL.to_string(),
        }
    }
}

impl MergerSettings {
    #[must_use]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    #[must_use]
    pub fn with_uncategorized_label(mut self, label: impl Into<String>) -> Self {
        self.uncategorized_label = label.into();
        self
    }

    /// Checks that the settings are usable.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::InvalidThreshold`] for a threshold outside
    /// `[0, 1]` and [`MapError::EmptyLabel`] for an empty label.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(MapError::InvalidThreshold(self.threshold));
        }
        if self.uncategorized_label.is_empty() {
            return Err(MapError::EmptyLabel);
        }
        Ok(())
    }
}
