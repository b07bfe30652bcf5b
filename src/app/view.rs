// SPDX-License-Identifier: MPL-2.0
//! View composition for the demo application.

use super::{App, Message};
use crate::ui::design_tokens::sizing;
use crate::ui::{SliderCanvas, SliderMessage};
use iced::widget::{column, container, text, Canvas};
use iced::{Element, Length};

pub fn view(app: &App) -> Element<'_, Message> {
    let slider: Element<'_, SliderMessage> =
        Canvas::new(SliderCanvas::from_engine(&app.engine, &app.unit))
            .width(Length::Fill)
            .height(Length::Fixed(sizing::CANVAS_HEIGHT))
            .into();

    let selected = app.engine.selected();
    let status = text(format!("Selected: {} {}", selected.speed, app.unit)).size(14);

    let content = column![slider.map(Message::Slider), status]
        .spacing(12)
        .padding(16);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_y(Length::Fill)
        .into()
}
