// SPDX-License-Identifier: MPL-2.0
//! Message handling for the demo application.

use super::{App, Message};
use crate::engine::{Event, PointerEvent};
use crate::ui::SliderMessage;
use iced::Task;

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Slider(slider_message) => self.handle_slider_message(slider_message),
        }
    }

    fn handle_slider_message(&mut self, message: SliderMessage) -> Task<Message> {
        let event = match message {
            SliderMessage::HandlePressed { x } => {
                self.engine.handle_pointer(PointerEvent::Press { x })
            }
            SliderMessage::PointerMoved { x } => {
                self.engine.handle_pointer(PointerEvent::Move { x })
            }
            SliderMessage::PointerReleased { x } => {
                self.engine.handle_pointer(PointerEvent::Release { x })
            }
            SliderMessage::MarkerTapped { index } => {
                self.engine.handle_pointer(PointerEvent::TapMarker { index })
            }
            SliderMessage::PointerLeft => self.engine.handle_pointer(PointerEvent::Cancel),
            SliderMessage::TrackResized { length } => {
                // A zero-width layout pass has no usable track; keep the
                // previous geometry until a real measurement arrives.
                let _ = self.engine.set_track_length(length);
                Event::None
            }
        };

        if let Event::Committed(tariff) = event {
            self.notifier.notify(&tariff);
        }

        Task::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::SelectionNotifier;
    use crate::domain::tariff::Tariff;
    use crate::test_utils::five_tariffs;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct RecordingNotifier {
        seen: Mutex<Vec<Tariff>>,
    }

    impl SelectionNotifier for RecordingNotifier {
        fn notify(&self, tariff: &Tariff) {
            if let Ok(mut seen) = self.seen.lock() {
                seen.push(tariff.clone());
            }
        }
    }

    fn app_with_recorder() -> (App, Arc<RecordingNotifier>) {
        let recorder = Arc::new(RecordingNotifier::default());
        let engine =
            crate::engine::SliderEngine::new(five_tariffs(), 300.0).expect("valid configuration");
        let app = App::with_parts(engine, recorder.clone(), "Mbit/s".to_string());
        (app, recorder)
    }

    #[test]
    fn completed_drag_notifies_once() {
        let (mut app, recorder) = app_with_recorder();

        app.update(Message::Slider(SliderMessage::HandlePressed { x: 0.0 }));
        for step in 1..=10 {
            app.update(Message::Slider(SliderMessage::PointerMoved {
                x: step as f32 * 15.0,
            }));
        }
        app.update(Message::Slider(SliderMessage::PointerReleased { x: 150.0 }));

        let seen = recorder.seen.lock().expect("not poisoned");
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].id, "3");
        assert_eq!(seen[0].speed, 500);
    }

    #[test]
    fn marker_tap_notifies_immediately() {
        let (mut app, recorder) = app_with_recorder();

        app.update(Message::Slider(SliderMessage::MarkerTapped { index: 4 }));

        let seen = recorder.seen.lock().expect("not poisoned");
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].speed, 1000);
    }

    #[test]
    fn pointer_leaving_mid_drag_still_notifies() {
        let (mut app, recorder) = app_with_recorder();

        app.update(Message::Slider(SliderMessage::HandlePressed { x: 0.0 }));
        app.update(Message::Slider(SliderMessage::PointerMoved { x: 290.0 }));
        app.update(Message::Slider(SliderMessage::PointerLeft));

        let seen = recorder.seen.lock().expect("not poisoned");
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].speed, 1000);
    }

    #[test]
    fn resize_keeps_selection_and_stays_silent() {
        let (mut app, recorder) = app_with_recorder();
        app.update(Message::Slider(SliderMessage::MarkerTapped { index: 2 }));

        app.update(Message::Slider(SliderMessage::TrackResized { length: 600.0 }));

        assert_eq!(app.engine.selected_index(), 2);
        assert_eq!(recorder.seen.lock().expect("not poisoned").len(), 1);
    }

    #[test]
    fn invalid_resize_is_ignored() {
        let (mut app, _) = app_with_recorder();
        app.update(Message::Slider(SliderMessage::TrackResized { length: 0.0 }));
        assert_eq!(app.engine.track_length(), 300.0);
    }
}
