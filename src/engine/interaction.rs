// SPDX-License-Identifier: MPL-2.0
//! Gesture state for the slider.
//!
//! [`SliderState`] holds the committed selection plus the transient drag
//! position. It is mutated only by [`crate::engine::SliderEngine`] in
//! response to pointer events, one event at a time.

use crate::domain::newtypes::TrackFraction;

/// Pointer events in track-local space, produced by the rendering
/// collaborator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Press on the handle; starts a drag. The coordinate is the press
    /// location used by the widget for hit-testing; the handle does not
    /// jump to it.
    Press { x: f32 },
    /// Pointer moved while a drag may be active.
    Move { x: f32 },
    /// Pointer released; resolves an active drag.
    Release { x: f32 },
    /// Discrete tap on marker `index` or its label.
    TapMarker { index: usize },
    /// Gesture interrupted (e.g. the pointer left the interactive
    /// surface); resolves like a release at the last known drag position.
    Cancel,
}

/// Committed selection plus transient drag position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderState {
    selected_index: usize,
    drag_position: Option<TrackFraction>,
}

impl SliderState {
    /// Creates an idle state with `selected_index` committed.
    #[must_use]
    pub fn new(selected_index: usize) -> Self {
        Self {
            selected_index,
            drag_position: None,
        }
    }

    /// Committed discrete selection.
    #[must_use]
    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    /// Uncommitted continuous pointer position, present only during a
    /// drag.
    #[must_use]
    pub fn drag_position(&self) -> Option<TrackFraction> {
        self.drag_position
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag_position.is_some()
    }

    /// Enters the dragging state at `position`.
    pub fn start_drag(&mut self, position: TrackFraction) {
        self.drag_position = Some(position);
    }

    /// Updates the continuous drag position. Ignored while idle.
    pub fn drag_to(&mut self, position: TrackFraction) {
        if self.drag_position.is_some() {
            self.drag_position = Some(position);
        }
    }

    /// Commits `index` and leaves any active drag.
    pub fn select(&mut self, index: usize) {
        self.selected_index = index;
        self.drag_position = None;
    }
}
