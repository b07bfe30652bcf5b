// SPDX-License-Identifier: MPL-2.0
//! Demo application wiring the slider engine to Iced.
//!
//! `App` owns one [`SliderEngine`], forwards its commit events to the
//! configured [`SelectionNotifier`], and renders through the slider
//! canvas. Configuration (tariffs, endpoint, unit) is resolved once at
//! boot and construction fails fast on an invalid setup, so the update
//! loop only ever sees a valid track.

mod message;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::application::port::{NullNotifier, SelectionNotifier};
use crate::config;
use crate::diagnostics::EventLog;
use crate::engine::SliderEngine;
use crate::error::Result;
use crate::infrastructure::HttpSelectionNotifier;
use iced::{window, Task};
use std::sync::Arc;

pub const WINDOW_DEFAULT_WIDTH: u32 = 480;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 220;

/// Root Iced application state.
pub struct App {
    pub(crate) engine: SliderEngine,
    pub(crate) notifier: Arc<dyn SelectionNotifier>,
    pub(crate) unit: String,
    /// Notifier outcome log, inspectable for troubleshooting.
    pub notifier_log: EventLog,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("selected_index", &self.engine.selected_index())
            .field("is_dragging", &self.engine.is_dragging())
            .finish()
    }
}

impl App {
    /// Builds the application from launch flags and the config file.
    ///
    /// # Errors
    ///
    /// Fails fast on an unreadable config file, an invalid tariff list,
    /// or an unconstructible HTTP client. Nothing is rendered from an
    /// invalid configuration.
    pub fn from_flags(flags: &Flags) -> Result<Self> {
        let config = match &flags.config_path {
            Some(path) => config::load_from_path(path)?,
            None => config::load()?,
        };

        let tariffs = config.tariff_list()?;
        let engine = SliderEngine::with_initial_fraction(
            tariffs,
            config::DEFAULT_TRACK_LENGTH,
            config.initial_fraction(),
        )?;

        let notifier_log = EventLog::new();
        let endpoint = flags.endpoint.clone().or_else(|| config.endpoint.clone());
        let notifier: Arc<dyn SelectionNotifier> = match endpoint {
            Some(endpoint) => Arc::new(HttpSelectionNotifier::new(
                endpoint,
                notifier_log.clone(),
            )?),
            None => Arc::new(NullNotifier),
        };

        Ok(Self {
            engine,
            notifier,
            unit: config.unit_label(),
            notifier_log,
        })
    }

    /// Assembles an application from prebuilt parts.
    pub fn with_parts(
        engine: SliderEngine,
        notifier: Arc<dyn SelectionNotifier>,
        unit: String,
    ) -> Self {
        Self {
            engine,
            notifier,
            unit,
            notifier_log: EventLog::new(),
        }
    }

    fn title(&self) -> String {
        "Tariff Slider".to_string()
    }

    fn view(&self) -> iced::Element<'_, Message> {
        view::view(self)
    }
}

/// Builds the window settings.
#[must_use]
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            WINDOW_DEFAULT_WIDTH as f32 / 2.0,
            WINDOW_DEFAULT_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(app: App) -> iced::Result {
    use std::cell::RefCell;

    // Wrap the prebuilt state in RefCell<Option<_>> to satisfy the Fn
    // trait requirement while only consuming it once (iced 0.14 requires
    // Fn, not FnOnce)
    let boot_state = RefCell::new(Some(app));
    let boot = move || {
        let app = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        (app, Task::none())
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .window(window_settings())
        .run()
}
