// SPDX-License-Identifier: MPL-2.0
//! Application message and launch flag types.

use crate::ui::SliderMessage;
use std::path::PathBuf;

/// Launch options parsed by `main.rs`.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Overrides the configured notification endpoint.
    pub endpoint: Option<String>,
    /// Loads `settings.toml` from an explicit path instead of the user
    /// config directory.
    pub config_path: Option<PathBuf>,
}

/// Messages handled by the application update loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    Slider(SliderMessage),
}
