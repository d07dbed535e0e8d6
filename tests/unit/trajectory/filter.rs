use super::*;

fn s(time: f64, x: f64, y: f64) -> Sample {
    Sample { time, x, y }
}

#[test]
fn empty_and_single_inputs() {
    assert!(filter_by_distance(&[], 1.0).is_empty());
    let one = [s(0.0, 5.0, 5.0)];
    assert_eq!(filter_by_distance(&one, 1.0), one.to_vec());
}

#[test]
fn keeps_samples_beyond_threshold() {
    let raw = [s(0.0, 0.0, 0.0), s(100.0, 1.0, 1.0), s(200.0, 50.0, 50.0)];
    assert_eq!(filter_by_distance(&raw, 1.0), raw.to_vec());
}

#[test]
fn distance_is_measured_from_last_kept_sample() {
    // Each step is 0.6px, so only every second sample clears a 1px threshold.
    let raw: Vec<Sample> = (0..7).map(|i| s(i as f64, i as f64 * 0.6, 0.0)).collect();
    let out = filter_by_distance(&raw, 1.0);
    let times: Vec<f64> = out.iter().map(|p| p.time).collect();
    assert_eq!(times, vec![0.0, 2.0, 4.0, 6.0]);
}

#[test]
fn burst_collapses_to_first_and_forced_last() {
    let raw: Vec<Sample> = (0..12)
        .map(|i| s(i as f64 * 8.0, 10.0 + (i % 3) as f64 * 0.1, 10.0))
        .collect();
    let out = filter_by_distance(&raw, 1.0);
    assert_eq!(out.len(), 2);
    assert_eq!(out[0], raw[0]);
    assert_eq!(out[1], raw[11]);
}

#[test]
fn last_sample_is_not_duplicated_when_already_kept() {
    let raw = [s(0.0, 0.0, 0.0), s(10.0, 0.2, 0.0), s(20.0, 5.0, 0.0)];
    let out = filter_by_distance(&raw, 1.0);
    assert_eq!(out, vec![raw[0], raw[2]]);
}
