// SPDX-License-Identifier: MPL-2.0
//! Iced rendering collaborators for the slider engine.

pub mod design_tokens;
pub mod slider_canvas;

pub use slider_canvas::{SliderCanvas, SliderMessage};
