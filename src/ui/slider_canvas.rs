// SPDX-License-Identifier: MPL-2.0
//! Canvas program drawing the slider and translating mouse input into
//! slider messages.
//!
//! The canvas is a pure rendering collaborator: it owns a snapshot of the
//! engine's [`RenderDescription`] plus label texts, hit-tests presses
//! against the handle and the marker columns, and publishes
//! [`SliderMessage`] values for the application update loop. The cursor
//! leaving the canvas ends any drag, so the state machine can never get
//! stuck mid-gesture.

use crate::engine::{RenderDescription, SliderEngine};
use crate::ui::design_tokens::{palette, sizing, typography};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::canvas::{Frame, Path, Stroke, Text};

/// Messages published by the slider canvas. Coordinates are in
/// track-local space (the engine's units).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SliderMessage {
    /// The handle was pressed; a drag begins.
    HandlePressed { x: f32 },
    /// The pointer moved over the canvas.
    PointerMoved { x: f32 },
    /// The pointer was released over the canvas.
    PointerReleased { x: f32 },
    /// A marker or its label column was tapped.
    MarkerTapped { index: usize },
    /// The pointer left the canvas mid-gesture.
    PointerLeft,
    /// The canvas was laid out with a new usable track length.
    TrackResized { length: f32 },
}

/// Per-tariff label content.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeedLabel {
    pub text: String,
    pub selected: bool,
}

/// Canvas program rendering one frame of the slider.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderCanvas {
    description: RenderDescription,
    labels: Vec<SpeedLabel>,
    unit: String,
}

impl SliderCanvas {
    /// Snapshots the engine state for rendering.
    #[must_use]
    pub fn from_engine(engine: &SliderEngine, unit: &str) -> Self {
        let description = engine.render();
        let labels = engine
            .tariffs()
            .iter()
            .zip(description.markers.iter())
            .map(|(tariff, marker)| SpeedLabel {
                text: tariff.speed.to_string(),
                selected: marker.selected,
            })
            .collect();

        Self {
            description,
            labels,
            unit: unit.to_string(),
        }
    }

    fn inner_width(bounds_width: f32) -> f32 {
        (bounds_width - 2.0 * sizing::EDGE_PADDING).max(1.0)
    }

    /// Converts a canvas x coordinate into track-local units.
    fn to_track_x(&self, canvas_x: f32, bounds_width: f32) -> f32 {
        let inner = Self::inner_width(bounds_width);
        (canvas_x - sizing::EDGE_PADDING) / inner * self.description.track_length
    }

    /// Converts a track-local position into a canvas x coordinate.
    fn to_canvas_x(&self, track_x: f32, bounds_width: f32) -> f32 {
        let inner = Self::inner_width(bounds_width);
        sizing::EDGE_PADDING + track_x / self.description.track_length * inner
    }

    fn track_center_y() -> f32 {
        sizing::TRACK_TOP_MARGIN + sizing::TRACK_HEIGHT / 2.0
    }

    /// The engine's track length lags the canvas width until a resize
    /// message round-trips through the update loop.
    fn needs_resize(&self, bounds_width: f32) -> bool {
        (Self::inner_width(bounds_width) - self.description.track_length).abs() > 0.5
    }

    /// Classifies a press position: handle first, then marker columns.
    fn hit_test(&self, position: iced::Point, bounds_width: f32) -> Option<SliderMessage> {
        let center_y = Self::track_center_y();

        let handle_x = self.to_canvas_x(self.description.handle_position, bounds_width);
        let handle_radius = sizing::HANDLE_DIAMETER / 2.0 + sizing::HANDLE_HIT_SLOP;
        let dx = position.x - handle_x;
        let dy = position.y - center_y;
        if dx * dx + dy * dy <= handle_radius * handle_radius {
            return Some(SliderMessage::HandlePressed {
                x: self.to_track_x(position.x, bounds_width),
            });
        }

        for (index, marker) in self.description.markers.iter().enumerate() {
            let marker_x = self.to_canvas_x(marker.position, bounds_width);
            let half_column = sizing::LABEL_COLUMN_WIDTH / 2.0;
            if (position.x - marker_x).abs() <= half_column
                && position.y >= sizing::TRACK_TOP_MARGIN
            {
                return Some(SliderMessage::MarkerTapped { index });
            }
        }

        None
    }
}

impl iced::widget::canvas::Program<SliderMessage> for SliderCanvas {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: &iced::Event,
        bounds: iced::Rectangle,
        cursor: iced::mouse::Cursor,
    ) -> Option<iced::widget::Action<SliderMessage>> {
        use iced::widget::Action;

        match event {
            iced::Event::Mouse(iced::mouse::Event::CursorLeft) => {
                return Some(Action::publish(SliderMessage::PointerLeft).and_capture());
            }
            iced::Event::Mouse(iced::mouse::Event::ButtonPressed(iced::mouse::Button::Left)) => {
                if let Some(position) = cursor.position_in(bounds) {
                    if self.needs_resize(bounds.width) {
                        return Some(
                            Action::publish(SliderMessage::TrackResized {
                                length: Self::inner_width(bounds.width),
                            })
                            .and_capture(),
                        );
                    }
                    if let Some(message) = self.hit_test(position, bounds.width) {
                        return Some(Action::publish(message).and_capture());
                    }
                }
            }
            iced::Event::Mouse(iced::mouse::Event::CursorMoved { .. }) => {
                // A move outside the canvas during a drag ends the gesture.
                let Some(position) = cursor.position_in(bounds) else {
                    return Some(Action::publish(SliderMessage::PointerLeft).and_capture());
                };

                if self.needs_resize(bounds.width) {
                    return Some(
                        Action::publish(SliderMessage::TrackResized {
                            length: Self::inner_width(bounds.width),
                        })
                        .and_capture(),
                    );
                }

                return Some(
                    Action::publish(SliderMessage::PointerMoved {
                        x: self.to_track_x(position.x, bounds.width),
                    })
                    .and_capture(),
                );
            }
            iced::Event::Mouse(iced::mouse::Event::ButtonReleased(iced::mouse::Button::Left)) => {
                let x = cursor
                    .position_in(bounds)
                    .map(|position| self.to_track_x(position.x, bounds.width))
                    .unwrap_or(self.description.handle_position);
                return Some(
                    Action::publish(SliderMessage::PointerReleased { x }).and_capture(),
                );
            }
            _ => {}
        }

        None
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &iced::Theme,
        bounds: iced::Rectangle,
        _cursor: iced::mouse::Cursor,
    ) -> Vec<iced::widget::canvas::Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let inner = Self::inner_width(bounds.width);
        let center_y = Self::track_center_y();

        // Track background
        let track = Path::rounded_rectangle(
            iced::Point::new(sizing::EDGE_PADDING, sizing::TRACK_TOP_MARGIN),
            iced::Size::new(inner, sizing::TRACK_HEIGHT),
            sizing::TRACK_CORNER_RADIUS.into(),
        );
        frame.fill(&track, palette::TRACK);

        // Filled portion up to the handle
        if self.description.fill_extent > 0.0 {
            let fill_width =
                self.description.fill_extent / self.description.track_length * inner;
            let fill = Path::rounded_rectangle(
                iced::Point::new(sizing::EDGE_PADDING, sizing::TRACK_TOP_MARGIN),
                iced::Size::new(fill_width, sizing::TRACK_HEIGHT),
                sizing::TRACK_CORNER_RADIUS.into(),
            );
            frame.fill(&fill, palette::FILL);
        }

        // Markers the handle has not passed yet
        for marker in &self.description.markers {
            if marker.position <= self.description.handle_position {
                continue;
            }
            let marker_x = self.to_canvas_x(marker.position, bounds.width);
            let dot = Path::circle(iced::Point::new(marker_x, center_y), marker.size / 2.0);
            frame.fill(&dot, palette::MARKER);
        }

        // Handle
        let handle_x = self.to_canvas_x(self.description.handle_position, bounds.width);
        let handle = Path::circle(
            iced::Point::new(handle_x, center_y),
            sizing::HANDLE_DIAMETER / 2.0,
        );
        frame.fill(&handle, palette::HANDLE_FILL);
        frame.stroke(
            &handle,
            Stroke::default()
                .with_width(sizing::HANDLE_RING_WIDTH)
                .with_color(palette::HANDLE_RING),
        );

        // Speed and unit labels
        let speed_y = sizing::TRACK_TOP_MARGIN + sizing::TRACK_HEIGHT + sizing::SPEED_LABEL_OFFSET;
        let unit_y = speed_y + sizing::UNIT_LABEL_GAP;
        for (label, marker) in self.labels.iter().zip(&self.description.markers) {
            let label_x = self.to_canvas_x(marker.position, bounds.width);
            let color = if label.selected {
                palette::LABEL_SELECTED
            } else {
                palette::LABEL
            };

            frame.fill_text(Text {
                content: label.text.clone(),
                position: iced::Point::new(label_x, speed_y),
                color,
                size: typography::SPEED_LABEL.into(),
                align_x: Horizontal::Center.into(),
                align_y: Vertical::Center.into(),
                ..Text::default()
            });
            frame.fill_text(Text {
                content: self.unit.clone(),
                position: iced::Point::new(label_x, unit_y),
                color,
                size: typography::UNIT_LABEL.into(),
                align_x: Horizontal::Center.into(),
                align_y: Vertical::Center.into(),
                ..Text::default()
            });
        }

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, five_tariffs};

    fn canvas() -> SliderCanvas {
        let engine = SliderEngine::new(five_tariffs(), 300.0).expect("valid configuration");
        SliderCanvas::from_engine(&engine, "Mbit/s")
    }

    #[test]
    fn labels_match_tariff_speeds() {
        let canvas = canvas();
        let texts: Vec<&str> = canvas.labels.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["100", "250", "500", "750", "1000"]);
        assert!(canvas.labels[0].selected);
    }

    #[test]
    fn coordinate_conversion_round_trips() {
        let canvas = canvas();
        // A synced canvas: inner width == track length.
        let bounds_width = 300.0 + 2.0 * sizing::EDGE_PADDING;

        let canvas_x = canvas.to_canvas_x(150.0, bounds_width);
        assert_abs_diff_eq!(canvas.to_track_x(canvas_x, bounds_width), 150.0);
    }

    #[test]
    fn press_on_handle_starts_a_drag() {
        let canvas = canvas();
        let bounds_width = 300.0 + 2.0 * sizing::EDGE_PADDING;
        let handle_x = canvas.to_canvas_x(0.0, bounds_width);

        let message = canvas.hit_test(
            iced::Point::new(handle_x, SliderCanvas::track_center_y()),
            bounds_width,
        );
        assert!(matches!(message, Some(SliderMessage::HandlePressed { .. })));
    }

    #[test]
    fn press_on_marker_column_taps_it() {
        let canvas = canvas();
        let bounds_width = 300.0 + 2.0 * sizing::EDGE_PADDING;
        let marker_x = canvas.to_canvas_x(150.0, bounds_width);

        let message = canvas.hit_test(
            iced::Point::new(marker_x, SliderCanvas::track_center_y()),
            bounds_width,
        );
        assert_eq!(message, Some(SliderMessage::MarkerTapped { index: 2 }));
    }

    #[test]
    fn press_on_label_row_taps_the_marker() {
        let canvas = canvas();
        let bounds_width = 300.0 + 2.0 * sizing::EDGE_PADDING;
        let marker_x = canvas.to_canvas_x(225.0, bounds_width);
        let label_y =
            sizing::TRACK_TOP_MARGIN + sizing::TRACK_HEIGHT + sizing::SPEED_LABEL_OFFSET;

        let message = canvas.hit_test(iced::Point::new(marker_x, label_y), bounds_width);
        assert_eq!(message, Some(SliderMessage::MarkerTapped { index: 3 }));
    }

    #[test]
    fn press_between_columns_is_ignored() {
        let canvas = canvas();
        let bounds_width = 300.0 + 2.0 * sizing::EDGE_PADDING;
        // Halfway between markers 0 and 1 (37.5 track units from either),
        // outside both 20-unit columns and away from the handle.
        let gap_x = canvas.to_canvas_x(112.0, bounds_width);

        let message = canvas.hit_test(
            iced::Point::new(gap_x, SliderCanvas::track_center_y()),
            bounds_width,
        );
        assert_eq!(message, None);
    }

    #[test]
    fn resize_is_detected_when_track_length_lags() {
        let canvas = canvas();
        assert!(canvas.needs_resize(500.0));
        assert!(!canvas.needs_resize(300.0 + 2.0 * sizing::EDGE_PADDING));
    }
}
