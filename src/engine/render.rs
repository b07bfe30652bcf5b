// SPDX-License-Identifier: MPL-2.0
//! Render description derived from engine state.
//!
//! The engine emits this value model; a rendering collaborator (the Iced
//! canvas in `ui/slider_canvas.rs`, or a test) draws it. Nothing here
//! carries framework types.

/// One marker on the track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    /// Center position in track units.
    pub position: f32,
    /// Diameter in track units.
    pub size: f32,
    /// Whether this marker (and its label) renders emphasized. During a
    /// drag this tracks the snapped index, not the committed one.
    pub selected: bool,
}

/// Full visual state of the slider for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderDescription {
    /// Track length the positions below are expressed in.
    pub track_length: f32,
    /// Length of the filled track portion.
    pub fill_extent: f32,
    /// Handle center in track units; continuous while dragging, snapped
    /// otherwise.
    pub handle_position: f32,
    /// Markers in tariff order.
    pub markers: Vec<Marker>,
}

impl RenderDescription {
    /// Index of the emphasized marker.
    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.markers.iter().position(|marker| marker.selected)
    }
}
