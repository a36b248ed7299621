//! Config file feeding the engine and harness

use std::fs;

use ringsize_config::RingsizeConfig;
use ringsize_engine::{HalfComparison, LengthEstimator};
use ringsize_harness::run_trials;

#[test]
fn config_file_drives_a_batch() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
[engine]
comparison = "weighted"

[harness]
trials = 20
max_size = 300
seed = 77
"#,
    )
    .unwrap();

    let config = RingsizeConfig::load_from(&path).unwrap().unwrap();
    assert_eq!(config.engine.comparison, HalfComparison::Weighted);

    let estimator = LengthEstimator::new(config.engine).unwrap();
    let report = run_trials(&config.harness, &estimator);
    assert_eq!(report.trials, 20);
    assert!(report.is_clean(), "{:#?}", report.failures);
}

#[test]
fn unusable_engine_settings_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[engine]\nprobe_limit = 1\n").unwrap();

    let config = RingsizeConfig::load_from(&path).unwrap().unwrap();
    assert!(LengthEstimator::new(config.engine).is_err());
}
