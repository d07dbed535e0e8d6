use super::*;

fn s(time: f64, x: f64, y: f64) -> Sample {
    Sample { time, x, y }
}

#[test]
fn fewer_than_two_samples_is_empty() {
    assert!(build_keyframes(&[]).is_empty());
    let track = build_keyframes(&[s(5.0, 1.0, 1.0)]);
    assert!(track.is_empty());
    assert_eq!(track.total_duration, 0.0);
}

#[test]
fn progress_is_time_normalized() {
    let track = build_keyframes(&[s(0.0, 0.0, 0.0), s(100.0, 1.0, 1.0), s(200.0, 50.0, 50.0)]);
    let p: Vec<f64> = track.keyframes.iter().map(|k| k.progress).collect();
    assert_eq!(p, vec![0.0, 0.5, 1.0]);
    assert_eq!(track.total_duration, 200.0);
}

#[test]
fn offset_timestamps_still_span_zero_to_one() {
    let track = build_keyframes(&[s(1013.7, 0.0, 0.0), s(1040.1, 3.0, 0.0), s(1097.3, 9.0, 2.0)]);
    assert_eq!(track.keyframes[0].progress, 0.0);
    assert_eq!(track.keyframes[2].progress, 1.0);
}

#[test]
fn zero_duration_maps_everything_to_zero() {
    let track = build_keyframes(&[s(7.0, 0.0, 0.0), s(7.0, 10.0, 0.0), s(7.0, 20.0, 0.0)]);
    assert_eq!(track.total_duration, 0.0);
    assert!(track.keyframes.iter().all(|k| k.progress == 0.0));
}

#[test]
fn dedup_keeps_first_occurrence() {
    let track = build_keyframes(&[s(0.0, 0.0, 0.0), s(10.0, 5.0, 0.0), s(20.0, 9.0, 0.0)]);
    let k = &track.keyframes;
    let mut list = vec![k[0], k[1], k[1], k[2], k[1]];
    dedup_by_time(&mut list);
    assert_eq!(list, vec![k[0], k[1], k[2]]);
}
