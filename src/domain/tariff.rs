// SPDX-License-Identifier: MPL-2.0
//! Tariff data model.
//!
//! A tariff is one selectable option on the slider track. The list of
//! tariffs is supplied once per widget lifecycle and its order defines the
//! position along the track (index 0 = leftmost).

use crate::error::SliderError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One selectable network speed tariff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tariff {
    /// Unique identifier, used as the identity in commit notifications.
    pub id: String,
    /// Display/ordering speed value.
    pub speed: u32,
}

impl Tariff {
    #[must_use]
    pub fn new(id: impl Into<String>, speed: u32) -> Self {
        Self {
            id: id.into(),
            speed,
        }
    }
}

/// Ordered, validated tariff list.
///
/// Construction guarantees the list is non-empty and that tariff ids are
/// unique, so downstream geometry and snapping never have to handle a
/// zero-marker track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TariffList(Vec<Tariff>);

impl TariffList {
    /// Validates and wraps an ordered tariff sequence.
    ///
    /// # Errors
    ///
    /// Returns [`SliderError::EmptyTariffList`] for an empty sequence and
    /// [`SliderError::DuplicateTariffId`] when two entries share an id.
    pub fn new(tariffs: Vec<Tariff>) -> Result<Self, SliderError> {
        if tariffs.is_empty() {
            return Err(SliderError::EmptyTariffList);
        }

        let mut seen = HashSet::new();
        for tariff in &tariffs {
            if !seen.insert(tariff.id.as_str()) {
                return Err(SliderError::DuplicateTariffId(tariff.id.clone()));
            }
        }

        Ok(Self(tariffs))
    }

    /// Number of tariffs on the track (always at least 1).
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; present for slice-like ergonomics.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the tariff at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Tariff> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Tariff> {
        self.0.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Tariff] {
        &self.0
    }
}
