//! Acceptance harness for ring size inference.
//!
//! Builds rings whose size is known, asks the estimator for the size, and
//! collects every disagreement together with the ring's content so the case
//! can be replayed on a fixed ring later.

#![allow(clippy::missing_errors_doc)]

use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Deserialize;

use ringsize_engine::LengthEstimator;
use ringsize_ring::{RANDOM_SIZE_MAX, Ring, RingError, format_bits, read_cells};

/// Batch settings.
///
/// ```toml
/// [harness]
/// trials = 100
/// exhaustive_sizes = 10
/// max_size = 9999
/// seed = 42
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct HarnessConfig {
    pub trials: usize,
    /// The first trials use sizes `1..=exhaustive_sizes` in order.
    pub exhaustive_sizes: usize,
    /// Upper bound for randomly drawn sizes.
    pub max_size: usize,
    /// Fixed seed for a reproducible batch. Drawn from the OS when absent.
    pub seed: Option<u64>,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            trials: 100,
            exhaustive_sizes: 10,
            max_size: RANDOM_SIZE_MAX,
            seed: None,
        }
    }
}

/// A trial whose inferred size differs from the constructed one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    pub expected: usize,
    pub actual: usize,
    /// Every cell value, read forward from the cursor.
    pub sequence: Vec<bool>,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "expected {}, inferred {}: {}",
            self.expected,
            self.actual,
            format_bits(&self.sequence)
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrialReport {
    pub trials: usize,
    pub failures: Vec<Mismatch>,
}

impl TrialReport {
    #[must_use]
    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    #[must_use]
    pub fn passed(&self) -> usize {
        self.trials - self.failed()
    }

    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

impl fmt::Display for TrialReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_clean() {
            write!(f, "all {} trials inferred the correct size", self.trials)
        } else {
            write!(
                f,
                "{} of {} trials inferred the wrong size",
                self.failed(),
                self.trials
            )
        }
    }
}

/// Size used for trial number `trial` (0-based).
pub fn trial_size<R: Rng>(trial: usize, config: &HarnessConfig, rng: &mut R) -> usize {
    if trial < config.exhaustive_sizes {
        trial + 1
    } else {
        rng.random_range(1..=config.max_size.max(1))
    }
}

/// Run a batch. Mismatches are collected, never fatal.
pub fn run_trials(config: &HarnessConfig, estimator: &LengthEstimator) -> TrialReport {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut report = TrialReport {
        trials: config.trials,
        failures: Vec::new(),
    };

    for trial in 0..config.trials {
        let expected = trial_size(trial, config, &mut rng);
        let mut ring = Ring::with_rng(expected, &mut rng);
        let actual = estimator.infer_count(&mut ring);

        if actual == expected {
            tracing::debug!(trial = trial + 1, of = config.trials, size = expected, "trial passed");
            continue;
        }

        let mismatch = Mismatch {
            expected,
            actual,
            sequence: read_cells(&mut ring, expected),
        };
        tracing::warn!(
            trial = trial + 1,
            failure = report.failures.len() + 1,
            expected,
            actual,
            sequence = %format_bits(&mismatch.sequence),
            "size inference failed"
        );
        report.failures.push(mismatch);
    }

    if report.is_clean() {
        tracing::info!(trials = report.trials, "all trials passed");
    } else {
        tracing::warn!(
            failed = report.failed(),
            trials = report.trials,
            "trials failed"
        );
    }
    report
}

/// Outcome of re-running one dumped sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Replay {
    pub expected: usize,
    pub actual: usize,
}

impl Replay {
    #[must_use]
    pub fn is_match(&self) -> bool {
        self.expected == self.actual
    }
}

/// Rebuild a ring from a dumped sequence and infer its size again.
pub fn replay(sequence: &[bool], estimator: &LengthEstimator) -> Result<Replay, RingError> {
    let mut ring = Ring::from_values(sequence.to_vec())?;
    Ok(Replay {
        expected: sequence.len(),
        actual: estimator.infer_count(&mut ring),
    })
}
