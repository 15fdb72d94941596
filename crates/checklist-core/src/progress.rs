//! Progress Derivation
//!
//! Completion counts over a checklist and the color bands used to display them.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Completed/total counts for a checklist at one point in time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
}

impl Progress {
    pub fn new(completed: usize, total: usize) -> Self {
        Self { completed, total }
    }

    pub fn as_tuple(self) -> (usize, usize) {
        (self.completed, self.total)
    }

    pub fn is_empty(self) -> bool {
        self.total == 0
    }

    /// Completed fraction in `0.0..=1.0`, `None` for an empty checklist
    pub fn ratio(self) -> Option<f64> {
        if self.total == 0 {
            return None;
        }
        Some(self.completed as f64 / self.total as f64)
    }

    /// Completed share in `0.0..=100.0`, `None` for an empty checklist
    pub fn percentage(self) -> Option<f64> {
        self.ratio().map(|r| r * 100.0)
    }

    /// Band for the current counts, `None` for an empty checklist
    pub fn band(self, thresholds: &ProgressThresholds) -> Option<ProgressBand> {
        if self.total == 0 {
            return None;
        }
        Some(thresholds.classify_counts(self.completed, self.total))
    }
}

/// Color bucket of a progress percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressBand {
    High,
    Medium,
    Low,
}

impl ProgressBand {
    /// CSS modifier class for this band
    pub fn css_class(self) -> &'static str {
        match self {
            ProgressBand::High => "progress-high",
            ProgressBand::Medium => "progress-medium",
            ProgressBand::Low => "progress-low",
        }
    }
}

const fn default_high() -> f64 {
    75.0
}

const fn default_medium() -> f64 {
    50.0
}

/// Lower bounds (inclusive, in percent) of the High and Medium bands
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ProgressThresholds {
    #[serde(default = "default_high")]
    pub high: f64,
    #[serde(default = "default_medium")]
    pub medium: f64,
}

impl Default for ProgressThresholds {
    fn default() -> Self {
        Self {
            high: default_high(),
            medium: default_medium(),
        }
    }
}

impl ProgressThresholds {
    pub fn classify(&self, percentage: f64) -> ProgressBand {
        if percentage >= self.high {
            ProgressBand::High
        } else if percentage >= self.medium {
            ProgressBand::Medium
        } else {
            ProgressBand::Low
        }
    }

    /// Classify `completed / total` without dividing, so a count landing
    /// exactly on a threshold belongs to that threshold's band.
    pub fn classify_counts(&self, completed: usize, total: usize) -> ProgressBand {
        let scaled = completed as f64 * 100.0;
        let total = total as f64;
        if scaled >= self.high * total {
            ProgressBand::High
        } else if scaled >= self.medium * total {
            ProgressBand::Medium
        } else {
            ProgressBand::Low
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("progress.thresholds.high", self.high),
            ("progress.thresholds.medium", self.medium),
        ] {
            if !(0.0..=100.0).contains(&value) {
                return Err(ConfigError::invalid(field, format!("{} is outside 0..=100", value)));
            }
        }
        if self.medium > self.high {
            return Err(ConfigError::invalid(
                "progress.thresholds.medium",
                format!("{} is above the high threshold {}", self.medium, self.high),
            ));
        }
        Ok(())
    }
}

fn default_high_color() -> String {
    "#4caf50".to_string()
}

fn default_medium_color() -> String {
    "#ff9800".to_string()
}

fn default_low_color() -> String {
    "#f44336".to_string()
}

/// CSS colors per band
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ProgressPalette {
    #[serde(default = "default_high_color")]
    pub high: String,
    #[serde(default = "default_medium_color")]
    pub medium: String,
    #[serde(default = "default_low_color")]
    pub low: String,
}

impl Default for ProgressPalette {
    fn default() -> Self {
        Self {
            high: default_high_color(),
            medium: default_medium_color(),
            low: default_low_color(),
        }
    }
}

impl ProgressPalette {
    pub fn color(&self, band: ProgressBand) -> &str {
        match band {
            ProgressBand::High => &self.high,
            ProgressBand::Medium => &self.medium,
            ProgressBand::Low => &self.low,
        }
    }
}

/// Display settings for the progress indicator
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ProgressConfig {
    #[serde(default)]
    pub thresholds: ProgressThresholds,
    #[serde(default)]
    pub palette: ProgressPalette,
}

impl ProgressConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.thresholds.validate()?;
        for (field, color) in [
            ("progress.palette.high", &self.palette.high),
            ("progress.palette.medium", &self.palette.medium),
            ("progress.palette.low", &self.palette.low),
        ] {
            if color.trim().is_empty() {
                return Err(ConfigError::invalid(field, "color is empty"));
            }
        }
        Ok(())
    }

    /// Color for a progress value, `None` for an empty checklist
    pub fn color_for(&self, progress: Progress) -> Option<&str> {
        progress.band(&self.thresholds).map(|band| self.palette.color(band))
    }
}
