use std::io::Write;

use anyhow::{Context, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;

use ringsize_engine::LengthEstimator;
use ringsize_harness::{HarnessConfig, run_trials};
use ringsize_ring::{Ring, format_bits, parse_bits, read_cells};

pub(crate) fn count(
    out: &mut impl Write,
    estimator: &LengthEstimator,
    size: usize,
    seed: Option<u64>,
    dump: bool,
) -> Result<bool> {
    let mut ring = match seed {
        Some(seed) => Ring::with_rng(size, &mut StdRng::seed_from_u64(seed)),
        None => Ring::new(size),
    };

    let estimate = estimator.infer(&mut ring);
    writeln!(out, "{}", estimate.count)?;
    if dump {
        // A saturated count is not the ring's length; dump only a known size.
        let cells = if size > 0 {
            Some(size)
        } else if estimate.saturated {
            None
        } else {
            Some(estimate.count)
        };
        match cells {
            Some(cells) => writeln!(out, "{}", format_bits(&read_cells(&mut ring, cells)))?,
            None => tracing::warn!("skipping dump: size unknown after saturated search"),
        }
    }

    // A saturated count is the search limit, not a size.
    Ok(!estimate.saturated)
}

pub(crate) fn validate(
    out: &mut impl Write,
    estimator: &LengthEstimator,
    harness: &HarnessConfig,
) -> Result<bool> {
    let report = run_trials(harness, estimator);

    for (i, failure) in report.failures.iter().enumerate() {
        writeln!(out, "#{}: {failure}", i + 1)?;
    }
    writeln!(out, "{report}")?;

    Ok(report.is_clean())
}

pub(crate) fn replay(out: &mut impl Write, estimator: &LengthEstimator, bits: &str) -> Result<bool> {
    let sequence = parse_bits(bits).context("parsing bit-string")?;
    let replayed = ringsize_harness::replay(&sequence, estimator)?;

    writeln!(
        out,
        "expected {}, inferred {}",
        replayed.expected, replayed.actual
    )?;
    Ok(replayed.is_match())
}
