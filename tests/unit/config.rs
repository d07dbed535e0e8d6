use super::*;

#[test]
fn defaults_validate() {
    PipelineConfig::default().validate().unwrap();
}

#[test]
fn partial_json_keeps_other_defaults() {
    let cfg = PipelineConfig::from_reader(r#"{ "min_distance": 4.5 }"#.as_bytes()).unwrap();
    assert_eq!(cfg.min_distance, 4.5);
    assert_eq!(cfg.speed_change_threshold, 0.2);
    assert_eq!(cfg.dense_extracted_above, 20);
}

#[test]
fn invalid_values_are_rejected() {
    let err = PipelineConfig::from_reader(r#"{ "speed_floor": 0.0 }"#.as_bytes()).unwrap_err();
    assert!(matches!(err, MotionError::Config(_)));

    let cfg = PipelineConfig {
        min_distance: -1.0,
        ..PipelineConfig::default()
    };
    assert!(cfg.validate().is_err());

    let cfg = PipelineConfig {
        sparse_stride_divisor: 0,
        ..PipelineConfig::default()
    };
    assert!(cfg.validate().is_err());

    let cfg = PipelineConfig {
        sparse_extracted_below: 30,
        ..PipelineConfig::default()
    };
    assert!(cfg.validate().is_err());
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = PipelineConfig::from_reader("{ nope".as_bytes()).unwrap_err();
    assert!(matches!(err, MotionError::Serde(_)));
}

#[test]
fn missing_file_is_a_config_error() {
    let err = PipelineConfig::from_path("target/does-not-exist/config.json").unwrap_err();
    assert!(err.to_string().contains("open pipeline config"));
}
