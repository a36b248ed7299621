//! Split tests over the probe buffer.

use crate::HalfComparison;

/// Position-weighted signed sum of a run of probes.
///
/// Each probe contributes its 1-based position within the run, added for
/// `false` and subtracted for `true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fingerprint(i64);

impl Fingerprint {
    #[must_use]
    pub fn of(run: &[bool]) -> Self {
        let sum = run.iter().enumerate().fold(0i64, |acc, (i, &value)| {
            let weight = i as i64 + 1;
            if value {
                acc.wrapping_sub(weight)
            } else {
                acc.wrapping_add(weight)
            }
        });
        Self(sum)
    }

    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl HalfComparison {
    /// Whether the first half of `probes` matches the second.
    ///
    /// `probes` must have even length.
    #[must_use]
    pub fn halves_match(self, probes: &[bool]) -> bool {
        debug_assert!(probes.len() % 2 == 0, "odd probe count {}", probes.len());
        let (first, second) = probes.split_at(probes.len() / 2);
        match self {
            Self::Exact => first == second,
            Self::Weighted => Fingerprint::of(first) == Fingerprint::of(second),
        }
    }
}
