// SPDX-License-Identifier: MPL-2.0
//! Port definitions implemented by infrastructure adapters.

pub mod notifier;

pub use notifier::{NullNotifier, SelectionNotifier};
