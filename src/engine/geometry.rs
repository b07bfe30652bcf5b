// SPDX-License-Identifier: MPL-2.0
//! Static track geometry: marker positions, marker sizes, and fill extent.
//!
//! Everything here is a pure function of the tariff count and the track
//! length. Geometry is recomputed whenever either input changes and is
//! never mutated by gestures.

use crate::config::defaults::{MAX_MARKER_SIZE, MIN_MARKER_SIZE};
use crate::domain::newtypes::{TrackFraction, TrackLength};
use crate::domain::tariff::TariffList;

/// Normalized marker fractions for `count` tariffs.
///
/// Tariff `i` sits at `i / (count - 1)`; a single tariff sits at the left
/// end of the track.
#[must_use]
pub fn step_fractions(count: usize) -> Vec<f32> {
    match count {
        0 => Vec::new(),
        1 => vec![0.0],
        _ => (0..count)
            .map(|i| i as f32 / (count - 1) as f32)
            .collect(),
    }
}

/// Marker diameters for `count` tariffs.
///
/// Sizes grow linearly from [`MIN_MARKER_SIZE`] to [`MAX_MARKER_SIZE`] with
/// the index, signaling increasing tariff emphasis. A single marker takes
/// the maximum size.
#[must_use]
pub fn marker_sizes(count: usize) -> Vec<f32> {
    if count < 2 {
        return vec![MAX_MARKER_SIZE; count];
    }

    (0..count)
        .map(|index| {
            let scale = index as f32 / (count - 1) as f32;
            MIN_MARKER_SIZE + (MAX_MARKER_SIZE - MIN_MARKER_SIZE) * scale
        })
        .collect()
}

/// Length of the filled track portion for a handle at `fraction`.
///
/// The left end is exactly empty: a fraction within float rounding of zero
/// yields `0.0`, never a visually non-empty "zero" state.
#[must_use]
pub fn fill_extent(fraction: TrackFraction, length: TrackLength) -> f32 {
    let value = fraction.value();
    if value <= f32::EPSILON {
        return 0.0;
    }
    (value * length.value()).clamp(0.0, length.value())
}

/// Derived track layout for one tariff list and track length.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackGeometry {
    length: TrackLength,
    steps: Vec<f32>,
}

impl TrackGeometry {
    /// Computes the geometry for a validated tariff list.
    #[must_use]
    pub fn new(tariffs: &TariffList, length: TrackLength) -> Self {
        Self {
            length,
            steps: step_fractions(tariffs.len()),
        }
    }

    /// Normalized marker fractions, ascending.
    #[must_use]
    pub fn steps(&self) -> &[f32] {
        &self.steps
    }

    #[must_use]
    pub fn marker_count(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub fn length(&self) -> TrackLength {
        self.length
    }

    /// Normalized fraction of the marker at `index` (left end for an
    /// out-of-range index).
    #[must_use]
    pub fn fraction_of(&self, index: usize) -> TrackFraction {
        TrackFraction::new(self.steps.get(index).copied().unwrap_or(0.0))
    }

    /// Absolute marker position in track units.
    #[must_use]
    pub fn position_of(&self, index: usize) -> f32 {
        self.fraction_of(index).scaled(self.length)
    }

    /// Absolute marker positions in track units, ascending.
    #[must_use]
    pub fn positions(&self) -> Vec<f32> {
        self.steps
            .iter()
            .map(|step| step * self.length.value())
            .collect()
    }

    /// Clamps a track-local coordinate into a normalized fraction.
    #[must_use]
    pub fn normalize(&self, position: f32) -> TrackFraction {
        self.length.normalize(position)
    }
}
