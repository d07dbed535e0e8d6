use super::*;
use crate::foundation::core::Sample;
use crate::trajectory::keyframes::build_keyframes;
use crate::trajectory::speed::speed_profile;

fn run(points: &[(f64, f64)]) -> (Vec<Keyframe>, Vec<Keyframe>) {
    let samples: Vec<Sample> = points
        .iter()
        .map(|&(time, x)| Sample { time, x, y: 0.0 })
        .collect();
    let track = build_keyframes(&samples);
    let speeds = speed_profile(&track.keyframes);
    let out = extract_significant(&track.keyframes, &speeds, &PipelineConfig::default());
    (track.keyframes, out)
}

#[test]
fn constant_speed_keeps_only_endpoints() {
    let points: Vec<(f64, f64)> = (0..20).map(|i| (i as f64 * 16.0, i as f64 * 8.0)).collect();
    let (all, out) = run(&points);
    assert_eq!(out, vec![all[0], all[19]]);
}

#[test]
fn speed_jump_keeps_both_sides_of_the_change() {
    let (all, out) = run(&[
        (0.0, 0.0),
        (10.0, 10.0),
        (20.0, 20.0),
        (30.0, 30.0),
        (40.0, 80.0),
        (50.0, 130.0),
    ]);
    assert_eq!(out, vec![all[0], all[3], all[4], all[5]]);
}

#[test]
fn reference_speed_follows_each_change() {
    // 1 -> 5 -> 1 px/ms: two changes, each measured against the latest speed.
    let (all, out) = run(&[
        (0.0, 0.0),
        (10.0, 10.0),
        (20.0, 60.0),
        (30.0, 110.0),
        (40.0, 120.0),
        (50.0, 130.0),
    ]);
    assert_eq!(out, vec![all[0], all[1], all[2], all[3], all[4], all[5]]);
}

#[test]
fn floor_damps_changes_near_zero_speed() {
    // 0 -> 0.001 px/ms is a 1% change against the 0.1 floor.
    let (all, out) = run(&[(0.0, 0.0), (10.0, 0.0), (20.0, 0.01), (30.0, 0.02)]);
    assert_eq!(out, vec![all[0], all[3]]);
}

#[test]
fn output_is_ordered_without_duplicate_times() {
    let (_, out) = run(&[
        (0.0, 0.0),
        (10.0, 1.0),
        (20.0, 30.0),
        (30.0, 31.0),
        (40.0, 90.0),
        (50.0, 91.0),
        (60.0, 92.0),
    ]);
    assert!(out.windows(2).all(|w| w[0].progress < w[1].progress));
}

#[test]
fn empty_input_is_empty() {
    assert!(extract_significant(&[], &[], &PipelineConfig::default()).is_empty());
}
