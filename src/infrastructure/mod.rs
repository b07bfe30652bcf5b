// SPDX-License-Identifier: MPL-2.0
//! Infrastructure adapters implementing the application ports.

pub mod http;

pub use http::HttpSelectionNotifier;
