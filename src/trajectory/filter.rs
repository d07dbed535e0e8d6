use crate::foundation::core::Sample;

/// Drop samples closer than `min_distance` to the last kept sample.
///
/// The first sample is always kept, and the final input sample is appended even
/// when it falls inside the threshold so the path still ends where the gesture did.
/// Empty input yields empty output.
pub fn filter_by_distance(samples: &[Sample], min_distance: f64) -> Vec<Sample> {
    let Some((first, rest)) = samples.split_first() else {
        return Vec::new();
    };

    let mut kept = Vec::with_capacity(samples.len());
    kept.push(*first);
    let mut last_kept = 0usize;

    for (offset, s) in rest.iter().enumerate() {
        let anchor = &samples[last_kept];
        if s.distance_to(anchor) >= min_distance {
            kept.push(*s);
            last_kept = offset + 1;
        }
    }

    if last_kept != samples.len() - 1 {
        kept.push(samples[samples.len() - 1]);
    }
    kept
}

#[cfg(test)]
#[path = "../../tests/unit/trajectory/filter.rs"]
mod tests;
