//! Period search over a single cursor.
//!
//! A search reads forward one probe at a time. Whenever the probe count is
//! even, the buffer is split in half and the halves are compared.
//!
//! ```text
//! Searching ──halves match──► rewind, Verifying(half)
//!     ▲                             │
//!     └──Rejected: replay, resume───┤
//!                                   ├──mismatch──────────► rewind, Rejected
//!                                   └──enough repeats────► rewind, Confirmed
//! ```
//!
//! Every exit rewinds the cursor by exactly the number of probes read, so a
//! search never leaves a net displacement. Verification never proposes a new
//! candidate, which caps recursion at one level.

use ringsize_ring::RingCursor;

use crate::EstimatorConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Outcome {
    /// The ring repeats with this period.
    Confirmed(usize),
    /// The candidate failed a split test.
    Rejected,
    /// The probe limit ran out first; carries the limit.
    Saturated(usize),
}

pub(crate) fn search<C>(cursor: &mut C, config: &EstimatorConfig, candidate: Option<usize>) -> Outcome
where
    C: RingCursor + ?Sized,
{
    let mut probes = Vec::new();

    while probes.len() < config.probe_limit {
        probes.push(cursor.value());
        cursor.advance();

        let len = probes.len();
        if len % 2 != 0 {
            continue;
        }

        match candidate {
            None => {
                if !config.comparison.halves_match(&probes) {
                    continue;
                }
                let half = len / 2;
                tracing::trace!(period = half, probes = len, "proposing period");
                cursor.retreat_by(len);
                match search(cursor, config, Some(half)) {
                    Outcome::Rejected => cursor.advance_by(len),
                    found => return found,
                }
            }
            Some(period) => {
                let repeats = len / period;
                if len <= period || len % period != 0 || repeats % 2 != 0 {
                    continue;
                }
                if !config.comparison.halves_match(&probes) {
                    tracing::trace!(period, probes = len, "period rejected");
                    cursor.retreat_by(len);
                    return Outcome::Rejected;
                }
                if repeats >= config.min_repeats && len >= config.min_samples {
                    tracing::debug!(period, probes = len, repeats, "period confirmed");
                    cursor.retreat_by(len);
                    return Outcome::Confirmed(period);
                }
            }
        }
    }

    tracing::debug!(
        limit = config.probe_limit,
        ?candidate,
        "probe limit reached"
    );
    cursor.retreat_by(probes.len());
    Outcome::Saturated(config.probe_limit)
}
