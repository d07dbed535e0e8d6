use super::*;
use crate::foundation::core::Sample;
use crate::trajectory::keyframes::build_keyframes;

fn s(time: f64, x: f64, y: f64) -> Sample {
    Sample { time, x, y }
}

#[test]
fn speed_is_distance_over_time() {
    let track = build_keyframes(&[s(0.0, 0.0, 0.0), s(10.0, 3.0, 4.0), s(20.0, 3.0, 24.0)]);
    let speeds = speed_profile(&track.keyframes);
    assert_eq!(speeds.len(), 2);
    assert_eq!(speeds[0].sample_index, 1);
    assert_eq!(speeds[0].speed, 0.5);
    assert_eq!(speeds[0].progress, 0.5);
    assert_eq!(speeds[1].sample_index, 2);
    assert_eq!(speeds[1].speed, 2.0);
    assert_eq!(speeds[1].progress, 1.0);
}

#[test]
fn non_positive_time_deltas_are_skipped() {
    let track = build_keyframes(&[
        s(0.0, 0.0, 0.0),
        s(10.0, 10.0, 0.0),
        s(10.0, 20.0, 0.0),
        s(5.0, 30.0, 0.0),
        s(30.0, 40.0, 0.0),
    ]);
    let speeds = speed_profile(&track.keyframes);
    let idx: Vec<usize> = speeds.iter().map(|r| r.sample_index).collect();
    assert_eq!(idx, vec![1, 4]);
    assert!(speeds.iter().all(|r| r.speed >= 0.0));
}

#[test]
fn too_few_keyframes_yield_nothing() {
    assert!(speed_profile(&[]).is_empty());
    let track = build_keyframes(&[s(0.0, 0.0, 0.0), s(0.0, 1.0, 0.0)]);
    assert!(speed_profile(&track.keyframes[..1]).is_empty());
    assert!(speed_profile(&track.keyframes).is_empty());
}
