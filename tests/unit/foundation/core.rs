use super::*;

#[test]
fn sample_rejects_non_finite_components() {
    assert!(Sample::new(0.0, 1.0, 2.0).is_ok());
    assert!(Sample::new(f64::NAN, 1.0, 2.0).is_err());
    assert!(Sample::new(0.0, f64::INFINITY, 2.0).is_err());
    assert!(Sample::new(0.0, 1.0, f64::NEG_INFINITY).is_err());
}

#[test]
fn distance_ignores_time() {
    let a = Sample::new(0.0, 0.0, 0.0).unwrap();
    let b = Sample::new(500.0, 3.0, 4.0).unwrap();
    assert_eq!(a.distance_to(&b), 5.0);
    assert_eq!(b.point(), Point::new(3.0, 4.0));
}

#[test]
fn samples_from_json_parses_and_rejects_missing_fields() {
    let ok = samples_from_json(r#"[{"time":0,"x":1,"y":2},{"time":16,"x":3,"y":4}]"#).unwrap();
    assert_eq!(ok.len(), 2);
    assert_eq!(ok[1], Sample::new(16.0, 3.0, 4.0).unwrap());

    let err = samples_from_json(r#"[{"time":0,"x":1}]"#).unwrap_err();
    assert!(matches!(err, MotionError::Serde(_)));
}
