// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons and shared fixtures.
//!
//! This module re-exports the `approx` crate's assertion macros for float
//! comparison, which properly handle floating-point precision issues that
//! `assert_eq!` cannot.

pub use approx::assert_abs_diff_eq;

use crate::domain::tariff::{Tariff, TariffList};

/// The five-tariff set used throughout the interaction tests
/// (speeds 100/250/500/750/1000).
pub fn five_tariffs() -> TariffList {
    TariffList::new(vec![
        Tariff::new("1", 100),
        Tariff::new("2", 250),
        Tariff::new("3", 500),
        Tariff::new("4", 750),
        Tariff::new("5", 1000),
    ])
    .expect("fixture list is valid")
}

/// Builds a list of `count` distinct tariffs for geometry tests.
pub fn sample_tariffs(count: usize) -> TariffList {
    let tariffs = (0..count.max(1))
        .map(|i| Tariff::new(format!("{}", i + 1), (i as u32 + 1) * 100))
        .collect();
    TariffList::new(tariffs).expect("generated ids are unique")
}
