// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Marker**: marker (dot) size bounds used by the geometry mapper
//! - **Track**: fallback track length before the layout collaborator sizes
//!   the widget
//! - **Selection**: initial handle position and default tariff data

use crate::domain::tariff::Tariff;

// ==========================================================================
// Marker Defaults
// ==========================================================================

/// Smallest marker diameter, used for the leftmost (cheapest) tariff.
pub const MIN_MARKER_SIZE: f32 = 8.0;

/// Largest marker diameter, used for the rightmost (fastest) tariff.
pub const MAX_MARKER_SIZE: f32 = 18.0;

// ==========================================================================
// Track Defaults
// ==========================================================================

/// Track length assumed until the rendering collaborator reports a real
/// measurement.
pub const DEFAULT_TRACK_LENGTH: f32 = 300.0;

// ==========================================================================
// Selection Defaults
// ==========================================================================

/// Initial handle position as a fraction of the track, snapped to the
/// nearest tariff at startup.
pub const DEFAULT_POSITION_FRACTION: f32 = 0.0;

/// Unit label rendered under each speed value.
pub const DEFAULT_SPEED_UNIT: &str = "Mbit/s";

/// Built-in tariff set used when the config file supplies none.
#[must_use]
pub fn default_tariffs() -> Vec<Tariff> {
    vec![
        Tariff::new("1", 100),
        Tariff::new("2", 250),
        Tariff::new("3", 500),
        Tariff::new("4", 750),
        Tariff::new("5", 1000),
        Tariff::new("6", 2000),
    ]
}

const _: () = {
    assert!(MIN_MARKER_SIZE > 0.0);
    assert!(MAX_MARKER_SIZE >= MIN_MARKER_SIZE);
    assert!(DEFAULT_TRACK_LENGTH > 0.0);
};
