// SPDX-License-Identifier: MPL-2.0
//! Design tokens for the slider widget.
//!
//! ## Organization
//!
//! - **Palette**: base colors
//! - **Sizing**: track, handle, and hit-region dimensions
//! - **Typography**: label font sizes

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    /// Widget background.
    pub const BACKGROUND: Color = Color::from_rgb(0.96, 0.96, 0.97);
    /// Unfilled track surface.
    pub const TRACK: Color = Color::WHITE;
    /// Filled track portion behind the handle.
    pub const FILL: Color = Color::from_rgba(0.86, 0.20, 0.18, 0.25);
    /// Handle ring stroke.
    pub const HANDLE_RING: Color = Color::from_rgb(0.86, 0.20, 0.18);
    /// Handle interior.
    pub const HANDLE_FILL: Color = Color::from_rgb(0.96, 0.96, 0.97);
    /// Markers not yet reached by the handle.
    pub const MARKER: Color = Color::from_rgb(0.78, 0.78, 0.80);
    /// Speed/unit labels.
    pub const LABEL: Color = Color::from_rgb(0.45, 0.45, 0.47);
    /// Label of the emphasized tariff.
    pub const LABEL_SELECTED: Color = Color::from_rgb(0.13, 0.13, 0.15);
}

// ============================================================================
// Sizing
// ============================================================================

pub mod sizing {
    /// Track bar height.
    pub const TRACK_HEIGHT: f32 = 24.0;
    /// Track corner rounding.
    pub const TRACK_CORNER_RADIUS: f32 = 12.0;
    /// Top margin above the track inside the canvas.
    pub const TRACK_TOP_MARGIN: f32 = 8.0;
    /// Horizontal inset keeping the handle and end markers inside the
    /// canvas.
    pub const EDGE_PADDING: f32 = 20.0;
    /// Handle diameter.
    pub const HANDLE_DIAMETER: f32 = 24.0;
    /// Handle ring stroke width.
    pub const HANDLE_RING_WIDTH: f32 = 6.0;
    /// Extra radius accepted around the handle when hit-testing a press.
    pub const HANDLE_HIT_SLOP: f32 = 4.0;
    /// Width of the tappable column around each marker and its labels.
    pub const LABEL_COLUMN_WIDTH: f32 = 40.0;
    /// Vertical offset from the track bottom to the speed label baseline.
    pub const SPEED_LABEL_OFFSET: f32 = 18.0;
    /// Vertical gap between the speed and unit labels.
    pub const UNIT_LABEL_GAP: f32 = 13.0;
    /// Total canvas height covering track and label rows.
    pub const CANVAS_HEIGHT: f32 = 80.0;
}

// ============================================================================
// Typography
// ============================================================================

pub mod typography {
    /// Speed value label size.
    pub const SPEED_LABEL: f32 = 12.0;
    /// Unit label size.
    pub const UNIT_LABEL: f32 = 9.0;
}

const _: () = {
    assert!(sizing::TRACK_HEIGHT > 0.0);
    assert!(sizing::CANVAS_HEIGHT >= sizing::TRACK_TOP_MARGIN + sizing::TRACK_HEIGHT);
};
