//! Generation settings: weight range, tag-count range and the two policies.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::{WEIGHT_SLIDER_MAX, WEIGHT_SLIDER_MIN, WEIGHT_SLIDER_STEP};

/// Whether the `artist:` marker is prepended to a picked label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum PrefixMode {
    /// Prefix every label
    All,
    /// Never prefix
    None,
    /// Independent coin flip per label
    #[default]
    Random,
}

impl PrefixMode {
    /// All modes in display order.
    pub const ALL: [Self; 3] = [Self::All, Self::None, Self::Random];

    /// Human-readable name for the settings panel.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "Always",
            Self::None => "Never",
            Self::Random => "Random",
        }
    }

    /// Serialized name (as used in config and CLI flags).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::None => "none",
            Self::Random => "random",
        }
    }

    /// Next mode, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        cycle(&Self::ALL, self, 1)
    }

    /// Previous mode, wrapping around.
    #[must_use]
    pub fn previous(self) -> Self {
        cycle(&Self::ALL, self, Self::ALL.len() - 1)
    }
}

impl fmt::Display for PrefixMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PrefixMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Invalid prefix mode '{s}'. Must be 'all', 'none', or 'random'"))
    }
}

/// How a random weight is shaped inside the configured range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum WeightDistribution {
    /// Flat over the range
    #[default]
    Uniform,
    /// Skewed toward the low end
    FavorLow,
    /// Skewed toward the high end
    FavorHigh,
    /// Triangular, peaking mid-range
    Normal,
}

impl WeightDistribution {
    /// All distributions in display order.
    pub const ALL: [Self; 4] = [Self::Uniform, Self::FavorLow, Self::FavorHigh, Self::Normal];

    /// Human-readable name for the settings panel.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Uniform => "Uniform",
            Self::FavorLow => "Favor low",
            Self::FavorHigh => "Favor high",
            Self::Normal => "Favor middle",
        }
    }

    /// Serialized name (as used in config and CLI flags).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Uniform => "uniform",
            Self::FavorLow => "favor-low",
            Self::FavorHigh => "favor-high",
            Self::Normal => "normal",
        }
    }

    /// Next distribution, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        cycle(&Self::ALL, self, 1)
    }

    /// Previous distribution, wrapping around.
    #[must_use]
    pub fn previous(self) -> Self {
        cycle(&Self::ALL, self, Self::ALL.len() - 1)
    }
}

impl fmt::Display for WeightDistribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WeightDistribution {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let wanted = s.trim().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|dist| dist.as_str().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| {
                format!(
                    "Invalid distribution '{s}'. Must be 'uniform', 'favor-low', 'favor-high', or 'normal'"
                )
            })
    }
}

fn cycle<T: Copy + PartialEq>(all: &[T], current: T, offset: usize) -> T {
    let index = all.iter().position(|item| *item == current).unwrap_or(0);
    all[(index + offset) % all.len()]
}

/// Parameters for one generation.
///
/// Inverted ranges (`min > max`) are tolerated here; the engine normalizes
/// them. Only the tag-count setters keep `min_tags <= max_tags`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorSettings {
    /// Lower weight bound
    pub min_weight: f64,
    /// Upper weight bound
    pub max_weight: f64,
    /// Minimum number of tags per result
    pub min_tags: usize,
    /// Maximum number of tags per result
    pub max_tags: usize,
    /// `artist:` prefix policy
    pub prefix: PrefixMode,
    /// Weight shaping policy
    pub distribution: WeightDistribution,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            min_weight: 0.05,
            max_weight: 1.5,
            min_tags: 3,
            max_tags: 7,
            prefix: PrefixMode::Random,
            distribution: WeightDistribution::Uniform,
        }
    }
}

impl GeneratorSettings {
    /// Weight bounds ordered as `(low, high)`.
    #[must_use]
    pub fn weight_bounds(&self) -> (f64, f64) {
        if self.min_weight <= self.max_weight {
            (self.min_weight, self.max_weight)
        } else {
            (self.max_weight, self.min_weight)
        }
    }

    /// Tag-count bounds ordered as `(low, high)`, with `low >= 1`.
    #[must_use]
    pub fn tag_bounds(&self) -> (usize, usize) {
        let (low, high) = if self.min_tags <= self.max_tags {
            (self.min_tags, self.max_tags)
        } else {
            (self.max_tags, self.min_tags)
        };
        (low.max(1), high.max(1))
    }

    /// Sets the minimum tag count, raising the maximum to match if needed.
    pub fn set_min_tags(&mut self, value: usize) {
        let value = value.max(1);
        self.min_tags = value;
        if value > self.max_tags {
            self.max_tags = value;
        }
    }

    /// Sets the maximum tag count, lowering the minimum to match if needed.
    pub fn set_max_tags(&mut self, value: usize) {
        let value = value.max(1);
        self.max_tags = value;
        if value < self.min_tags {
            self.min_tags = value;
        }
    }

    /// Moves the minimum weight by whole slider steps.
    pub fn step_min_weight(&mut self, steps: i32) {
        self.min_weight = step_weight(self.min_weight, steps);
    }

    /// Moves the maximum weight by whole slider steps.
    pub fn step_max_weight(&mut self, steps: i32) {
        self.max_weight = step_weight(self.max_weight, steps);
    }

    /// Checks values that would make generation meaningless.
    pub fn validate(&self) -> Result<()> {
        if !self.min_weight.is_finite() || !self.max_weight.is_finite() {
            anyhow::bail!(
                "Weights must be finite numbers (got {} and {})",
                self.min_weight,
                self.max_weight
            );
        }

        if !(self.max_weight - self.min_weight).is_finite() {
            anyhow::bail!(
                "Weight range is too wide (got {} to {})",
                self.min_weight,
                self.max_weight
            );
        }

        if self.min_tags == 0 || self.max_tags == 0 {
            anyhow::bail!(
                "Tag counts must be at least 1 (got min {} and max {})",
                self.min_tags,
                self.max_tags
            );
        }

        Ok(())
    }
}

/// Snaps to the slider grid after stepping so repeated steps do not drift.
fn step_weight(current: f64, steps: i32) -> f64 {
    let stepped = f64::from(steps).mul_add(WEIGHT_SLIDER_STEP, current);
    let snapped = (stepped / WEIGHT_SLIDER_STEP).round() * WEIGHT_SLIDER_STEP;
    ((snapped * 100.0).round() / 100.0).clamp(WEIGHT_SLIDER_MIN, WEIGHT_SLIDER_MAX)
}
