use std::{fmt, str::FromStr};

use serde::Deserialize;
use thiserror::Error;

/// How the two halves of the probe buffer are compared.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HalfComparison {
    /// Element-by-element equality.
    #[default]
    Exact,
    /// Position-weighted signed sums. Cheaper to reason about as a
    /// checksum, but distinct halves can collide.
    Weighted,
}

impl HalfComparison {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::Weighted => "weighted",
        }
    }
}

impl fmt::Display for HalfComparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown comparison {0:?}; expected \"exact\" or \"weighted\"")]
pub struct UnknownComparison(pub String);

impl FromStr for HalfComparison {
    type Err = UnknownComparison;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "exact" => Ok(Self::Exact),
            "weighted" => Ok(Self::Weighted),
            _ => Err(UnknownComparison(s.to_string())),
        }
    }
}

/// Tuning for [`crate::LengthEstimator`].
///
/// ```toml
/// [engine]
/// min_repeats = 3
/// min_samples = 100
/// probe_limit = 1000000
/// comparison = "exact"
/// ```
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct EstimatorConfig {
    /// Whole periods that must be observed before a candidate is accepted.
    pub min_repeats: usize,
    /// Probes that must be read before a candidate is accepted.
    pub min_samples: usize,
    /// Most probes one search attempt may read before giving up.
    pub probe_limit: usize,
    pub comparison: HalfComparison,
}

impl EstimatorConfig {
    pub const DEFAULT_MIN_REPEATS: usize = 3;
    pub const DEFAULT_MIN_SAMPLES: usize = 100;
    /// Two probes are the least that can be split into halves.
    pub const MIN_PROBE_LIMIT: usize = 2;
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            min_repeats: Self::DEFAULT_MIN_REPEATS,
            min_samples: Self::DEFAULT_MIN_SAMPLES,
            probe_limit: usize::MAX,
            comparison: HalfComparison::Exact,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EstimatorConfigError {
    #[error("probe limit ({limit}) must be at least {min}", min = EstimatorConfig::MIN_PROBE_LIMIT)]
    ProbeLimitTooSmall { limit: usize },
    #[error("min_repeats must be at least 1")]
    NoRepeats,
}
