//! End-to-end size recovery through the public crates

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ringsize_engine::{EstimatorConfig, HalfComparison, LengthEstimator, infer_count};
use ringsize_ring::{RANDOM_SIZE_MAX, Ring, RingCursor};

use crate::common::{ring_of, snapshot};

#[test]
fn recovers_sizes_one_through_ten() {
    let mut rng = StdRng::seed_from_u64(10);
    for size in 1..=10 {
        for _ in 0..10 {
            assert_eq!(infer_count(&mut Ring::with_rng(size, &mut rng)), size);
        }
    }
}

#[test]
fn recovers_random_sizes() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..15 {
        let size = rng.random_range(11..=RANDOM_SIZE_MAX);
        let mut ring = Ring::with_rng(size, &mut rng);
        assert_eq!(infer_count(&mut ring), size);
    }
}

#[test]
fn alternating_content_is_size_four() {
    assert_eq!(infer_count(&mut ring_of("0101")), 4);
}

#[test]
fn repeated_triplet_is_size_six() {
    let estimate = LengthEstimator::default().infer(&mut ring_of("011011"));
    assert_eq!(estimate.count, 6);
    assert_ne!(estimate.count, 3);
}

#[test]
fn one_cell_ring() {
    assert_eq!(infer_count(&mut ring_of("0")), 1);
    assert_eq!(infer_count(&mut ring_of("1")), 1);
}

#[test]
fn inference_restores_cursor_and_content() {
    let mut rng = StdRng::seed_from_u64(12);
    for size in [1, 3, 6, 128, 2500] {
        let mut ring = Ring::with_rng(size, &mut rng);
        // Start somewhere other than the first cell.
        ring.advance_by(size / 2);
        let before = snapshot(&mut ring, size);
        infer_count(&mut ring);
        assert_eq!(snapshot(&mut ring, size), before);
    }
}

#[test]
fn random_size_ring_is_recovered_and_in_range() {
    let mut ring = Ring::with_rng(0, &mut StdRng::seed_from_u64(13));
    let count = infer_count(&mut ring);
    assert!((1..=RANDOM_SIZE_MAX).contains(&count));

    // Walking `count` steps must come back to the start.
    let home = ring.cursor_token();
    ring.advance_by(count);
    assert_eq!(ring.cursor_token(), home);
}

#[test]
fn comparisons_agree_on_random_rings() {
    let weighted = LengthEstimator::new(EstimatorConfig {
        comparison: HalfComparison::Weighted,
        ..EstimatorConfig::default()
    })
    .unwrap();
    let mut rng = StdRng::seed_from_u64(14);
    for size in [150, 301, 777] {
        let mut ring = Ring::with_rng(size, &mut rng);
        assert_eq!(infer_count(&mut ring), size);
        assert_eq!(weighted.infer_count(&mut ring), size);
    }
}

#[test]
fn capped_probe_limit_saturates_and_restores() {
    let estimator = LengthEstimator::new(EstimatorConfig {
        probe_limit: 256,
        ..EstimatorConfig::default()
    })
    .unwrap();
    let mut ring = Ring::with_rng(9000, &mut StdRng::seed_from_u64(15));
    let before = snapshot(&mut ring, 9000);

    let estimate = estimator.infer(&mut ring);
    assert!(estimate.saturated);
    assert_eq!(estimate.count, 256);
    assert_eq!(snapshot(&mut ring, 9000), before);
}

#[test]
fn generous_cap_does_not_saturate() {
    let estimator = LengthEstimator::new(EstimatorConfig {
        probe_limit: 1000,
        ..EstimatorConfig::default()
    })
    .unwrap();
    let estimate = estimator.infer(&mut Ring::with_rng(200, &mut StdRng::seed_from_u64(16)));
    assert!(!estimate.saturated);
    assert_eq!(estimate.count, 200);
}
