//! Length inference for size-hiding rings.
//!
//! # Architecture
//!
//! The estimator never sees a size or an index. It only reads, writes and
//! steps a [`RingCursor`], and it recovers the cell count from the fact that
//! a cycle of `N` cells repeats every `N` steps.
//!
//! ```text
//! infer() ─┬─ search(None)            as-is pass
//!          ├─ flip current cell
//!          ├─ search(None)            flipped pass
//!          ├─ flip back
//!          └─ max(as_is, flipped)
//! ```
//!
//! A single pass finds the shortest period of the *content*, which can be a
//! proper divisor of the size (`0101` looks like period 2). Flipping one cell
//! breaks any such period in at least one of the two passes, and neither pass
//! can report more than the true size, so the larger answer is the size.
//!
//! # Contract
//!
//! The caller must hold the only cursor for the duration of the call. On
//! return the cursor is back on the cell it started on and every value is
//! unchanged. Concurrent mutation of the ring during inference is outside
//! this contract and produces an unspecified count.

#![allow(clippy::missing_errors_doc)]

mod config;
mod fingerprint;
mod search;

pub use config::{EstimatorConfig, EstimatorConfigError, HalfComparison, UnknownComparison};
pub use fingerprint::Fingerprint;

use ringsize_ring::RingCursor;

use search::{Outcome, search};

/// Result of both passes of one inference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Estimate {
    /// The inferred cell count.
    pub count: usize,
    pub as_is: usize,
    pub flipped: usize,
    /// A pass ran out of probes; `count` is the probe limit, not a size.
    pub saturated: bool,
}

#[derive(Debug, Clone, Default)]
pub struct LengthEstimator {
    config: EstimatorConfig,
}

impl LengthEstimator {
    pub fn new(config: EstimatorConfig) -> Result<Self, EstimatorConfigError> {
        if config.probe_limit < EstimatorConfig::MIN_PROBE_LIMIT {
            return Err(EstimatorConfigError::ProbeLimitTooSmall {
                limit: config.probe_limit,
            });
        }
        if config.min_repeats == 0 {
            return Err(EstimatorConfigError::NoRepeats);
        }
        Ok(Self { config })
    }

    #[must_use]
    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    /// Infer the number of cells behind `cursor`.
    pub fn infer_count<C: RingCursor + ?Sized>(&self, cursor: &mut C) -> usize {
        self.infer(cursor).count
    }

    /// Infer the cell count, keeping both pass results.
    pub fn infer<C: RingCursor + ?Sized>(&self, cursor: &mut C) -> Estimate {
        let as_is = search(cursor, &self.config, None);

        cursor.flip();
        let flipped = search(cursor, &self.config, None);
        cursor.flip();

        let (as_is, as_is_saturated) = resolve(as_is);
        let (flipped, flipped_saturated) = resolve(flipped);
        let estimate = Estimate {
            count: as_is.max(flipped),
            as_is,
            flipped,
            saturated: as_is_saturated || flipped_saturated,
        };

        if estimate.saturated {
            tracing::warn!(
                limit = self.config.probe_limit,
                "probe limit reached before a period was confirmed"
            );
        } else {
            tracing::debug!(
                count = estimate.count,
                as_is,
                flipped,
                "inferred ring size"
            );
        }
        estimate
    }
}

fn resolve(outcome: Outcome) -> (usize, bool) {
    match outcome {
        Outcome::Confirmed(period) => (period, false),
        Outcome::Saturated(limit) => (limit, true),
        // A pass without a candidate only proposes; verification rejects.
        Outcome::Rejected => unreachable!("top-level search cannot reject"),
    }
}

/// Infer the number of cells behind `cursor` with default tuning.
pub fn infer_count<C: RingCursor + ?Sized>(cursor: &mut C) -> usize {
    LengthEstimator::default().infer_count(cursor)
}
