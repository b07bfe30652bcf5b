// SPDX-License-Identifier: MPL-2.0
//! Domain types for the slider: tariffs and validated track measurements.

pub mod newtypes;
pub mod tariff;

pub use newtypes::{TrackFraction, TrackLength};
pub use tariff::{Tariff, TariffList};
