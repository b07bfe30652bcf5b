// SPDX-License-Identifier: MPL-2.0
//! Nearest-step snapping.

/// Resolves a continuous value in `[0, 1]` to the index of the nearest
/// step.
///
/// Steps are visited in ascending index order and only a strictly smaller
/// distance replaces the current best, so equidistant steps resolve to the
/// lower index. The function is pure and total: an empty step list yields
/// index 0 (callers uphold the non-empty invariant through
/// [`crate::domain::tariff::TariffList`]).
#[must_use]
pub fn snap(value: f32, steps: &[f32]) -> usize {
    let mut best = 0;
    let mut best_distance = f32::INFINITY;

    for (index, step) in steps.iter().enumerate() {
        let distance = (step - value).abs();
        if distance < best_distance {
            best_distance = distance;
            best = index;
        }
    }

    best
}
