//! Batch harness behaviour

use ringsize_engine::{EstimatorConfig, LengthEstimator};
use ringsize_harness::{HarnessConfig, replay, run_trials};
use ringsize_ring::{format_bits, parse_bits};

#[test]
fn hundred_trial_batch_has_no_failures() {
    let config = HarnessConfig {
        seed: Some(100),
        ..HarnessConfig::default()
    };
    let report = run_trials(&config, &LengthEstimator::default());
    assert_eq!(report.trials, 100);
    assert_eq!(report.failed(), 0, "{:#?}", report.failures);
}

#[test]
fn dumped_failures_reproduce_on_fixed_rings() {
    // Too few probes to confirm anything: every trial fails.
    let starved = LengthEstimator::new(EstimatorConfig {
        probe_limit: 40,
        ..EstimatorConfig::default()
    })
    .unwrap();
    let config = HarnessConfig {
        trials: 8,
        max_size: 60,
        seed: Some(101),
        ..HarnessConfig::default()
    };
    let report = run_trials(&config, &starved);
    assert_eq!(report.failed(), 8);

    for failure in &report.failures {
        // Through the text form, as a user would paste it back.
        let sequence = parse_bits(&format_bits(&failure.sequence)).unwrap();
        let replayed = replay(&sequence, &starved).unwrap();
        assert_eq!(replayed.expected, failure.expected);
        assert_eq!(replayed.actual, failure.actual);

        // A properly tuned estimator gets the same content right.
        assert!(replay(&sequence, &LengthEstimator::default()).unwrap().is_match());
    }
}
