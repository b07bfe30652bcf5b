// SPDX-License-Identifier: MPL-2.0
//! `tariff_slider` is a stepped tariff-selection slider built with the
//! Iced GUI toolkit.
//!
//! The interaction/geometry engine (`engine`) is framework-free and fully
//! deterministic: pointer events map through pure geometry and snapping
//! onto a discrete selection, and each completed gesture emits exactly one
//! commit. The Iced canvas, the HTTP selection notifier, and the demo
//! application live in separate layers around it.

#![doc(html_root_url = "https://docs.rs/tariff_slider/0.1.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod engine;
pub mod error;
pub mod infrastructure;
pub mod ui;

#[cfg(test)]
mod test_utils;
