// SPDX-License-Identifier: MPL-2.0
//! Slider interaction engine.
//!
//! The engine owns the [`SliderState`] and the derived [`TrackGeometry`],
//! consumes pointer events, and reports commits through the [`Event`]
//! facade. It runs single-threaded on the UI event loop: each event is
//! processed to completion before the next one, so no locking is needed.
//!
//! Commits happen only on release, tap, or gesture interruption, never on
//! intermediate drag moves. The rendered handle tracks the continuous drag
//! position while marker emphasis tracks its snapped index; the two are
//! intentionally decoupled so drags feel smooth but resolve discretely.

use crate::domain::newtypes::{TrackFraction, TrackLength};
use crate::domain::tariff::{Tariff, TariffList};
use crate::error::SliderError;

pub mod geometry;
pub mod interaction;
pub mod render;
pub mod snap;

pub use geometry::{fill_extent, marker_sizes, step_fractions, TrackGeometry};
pub use interaction::{PointerEvent, SliderState};
pub use render::{Marker, RenderDescription};
pub use snap::snap;

/// Outcome of handling one pointer event.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Nothing to report; intermediate moves and ignored input end here.
    None,
    /// A selection was finalized. Forward the tariff to the
    /// [`crate::application::port::SelectionNotifier`].
    Committed(Tariff),
}

/// The stepped slider core: tariffs, geometry, and gesture state.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderEngine {
    tariffs: TariffList,
    geometry: TrackGeometry,
    state: SliderState,
}

impl SliderEngine {
    /// Creates an engine with the first tariff selected.
    ///
    /// # Errors
    ///
    /// Returns [`SliderError::NonPositiveTrackLength`] for an unusable
    /// track measurement. An empty tariff list is unrepresentable here;
    /// [`TariffList`] construction already rejects it.
    pub fn new(tariffs: TariffList, track_length: f32) -> Result<Self, SliderError> {
        let length = TrackLength::new(track_length)?;
        let geometry = TrackGeometry::new(&tariffs, length);
        Ok(Self {
            tariffs,
            geometry,
            state: SliderState::new(0),
        })
    }

    /// Creates an engine with the initial selection snapped from a
    /// fractional default position.
    ///
    /// # Errors
    ///
    /// Same as [`SliderEngine::new`].
    pub fn with_initial_fraction(
        tariffs: TariffList,
        track_length: f32,
        fraction: f32,
    ) -> Result<Self, SliderError> {
        let mut engine = Self::new(tariffs, track_length)?;
        let index = snap(TrackFraction::new(fraction).value(), engine.geometry.steps());
        engine.state = SliderState::new(index);
        Ok(engine)
    }

    /// Updates the track length after a layout change. Selection and any
    /// active drag are preserved: positions are normalized, so they stay
    /// valid under the new length.
    ///
    /// # Errors
    ///
    /// Returns [`SliderError::NonPositiveTrackLength`] and leaves the
    /// previous geometry untouched.
    pub fn set_track_length(&mut self, track_length: f32) -> Result<(), SliderError> {
        let length = TrackLength::new(track_length)?;
        self.geometry = TrackGeometry::new(&self.tariffs, length);
        Ok(())
    }

    /// Replaces the tariff list, resetting the gesture state to its
    /// default selection.
    pub fn replace_tariffs(&mut self, tariffs: TariffList) {
        self.geometry = TrackGeometry::new(&tariffs, self.geometry.length());
        self.tariffs = tariffs;
        self.state = SliderState::new(0);
    }

    /// Processes one pointer event and returns the resulting [`Event`].
    ///
    /// Out-of-range coordinates are clamped to the track; an out-of-range
    /// marker index is a stale message and is ignored.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> Event {
        match event {
            PointerEvent::Press { .. } => {
                let handle = self.geometry.fraction_of(self.state.selected_index());
                self.state.start_drag(handle);
                Event::None
            }
            PointerEvent::Move { x } => {
                if self.state.is_dragging() {
                    self.state.drag_to(self.geometry.normalize(x));
                }
                Event::None
            }
            PointerEvent::Release { x } => {
                if !self.state.is_dragging() {
                    return Event::None;
                }
                self.state.drag_to(self.geometry.normalize(x));
                self.resolve_drag()
            }
            PointerEvent::Cancel => {
                if !self.state.is_dragging() {
                    return Event::None;
                }
                self.resolve_drag()
            }
            PointerEvent::TapMarker { index } => {
                if index >= self.tariffs.len() {
                    return Event::None;
                }
                self.state.select(index);
                self.commit_selected()
            }
        }
    }

    /// Snaps the drag position to its tariff, commits it, and returns to
    /// idle.
    fn resolve_drag(&mut self) -> Event {
        let Some(position) = self.state.drag_position() else {
            return Event::None;
        };
        let index = snap(position.value(), self.geometry.steps());
        self.state.select(index);
        self.commit_selected()
    }

    fn commit_selected(&self) -> Event {
        match self.tariffs.get(self.state.selected_index()) {
            Some(tariff) => Event::Committed(tariff.clone()),
            None => Event::None,
        }
    }

    /// Index emphasized in the UI: the snapped drag position while
    /// dragging, the committed selection otherwise.
    #[must_use]
    pub fn highlighted_index(&self) -> usize {
        match self.state.drag_position() {
            Some(position) => snap(position.value(), self.geometry.steps()),
            None => self.state.selected_index(),
        }
    }

    /// Handle position as a normalized fraction; continuous while
    /// dragging.
    #[must_use]
    pub fn handle_fraction(&self) -> TrackFraction {
        match self.state.drag_position() {
            Some(position) => position,
            None => self.geometry.fraction_of(self.state.selected_index()),
        }
    }

    /// Builds the visual state consumed by the rendering collaborator.
    #[must_use]
    pub fn render(&self) -> RenderDescription {
        let highlighted = self.highlighted_index();
        let sizes = marker_sizes(self.tariffs.len());
        let markers = self
            .geometry
            .positions()
            .into_iter()
            .zip(sizes)
            .enumerate()
            .map(|(index, (position, size))| Marker {
                position,
                size,
                selected: index == highlighted,
            })
            .collect();

        RenderDescription {
            track_length: self.geometry.length().value(),
            fill_extent: fill_extent(self.handle_fraction(), self.geometry.length()),
            handle_position: self.handle_fraction().scaled(self.geometry.length()),
            markers,
        }
    }

    #[must_use]
    pub fn selected(&self) -> &Tariff {
        // selected_index is maintained within bounds by every transition
        self.tariffs
            .get(self.state.selected_index())
            .unwrap_or_else(|| &self.tariffs.as_slice()[0])
    }

    #[must_use]
    pub fn selected_index(&self) -> usize {
        self.state.selected_index()
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging()
    }

    #[must_use]
    pub fn tariffs(&self) -> &TariffList {
        &self.tariffs
    }

    #[must_use]
    pub fn track_length(&self) -> f32 {
        self.geometry.length().value()
    }
}
