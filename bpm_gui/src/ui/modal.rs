//! Modal dialog component
//!
//! Blocking error dialog used by validation failures (currently only the
//! empty project name). Rendered as a stack layer: a semi-transparent
//! backdrop that swallows clicks, with the dialog box centered on top.

use iced::widget::{button, column, container, row, text, Space};
use iced::{Alignment, Element, Length, Padding};

use crate::Message;

/// Render the modal backdrop (semi-transparent overlay that catches clicks)
pub fn view_backdrop() -> Element<'static, Message> {
    button(Space::new())
        .on_press(Message::ModalDismissed)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_, _| {
            iced::widget::button::Style::default()
                .with_background(iced::Color::from_rgba(0.0, 0.0, 0.0, 0.5))
        })
        .into()
}

/// Render the error dialog
pub fn view_error_modal(message: &str) -> Element<'_, Message> {
    let title = text("Error").size(18);

    let body = text(message).size(12);

    let buttons = row![button(text("OK").size(11))
        .on_press(Message::ModalDismissed)
        .padding(Padding::from([6, 16]))
        .style(button::primary)]
    .align_y(Alignment::Center);

    let content = column![
        title,
        Space::new().height(12),
        body,
        Space::new().height(20),
        container(buttons)
            .align_x(iced::alignment::Horizontal::Right)
            .width(Length::Fill),
    ]
    .width(Length::Fixed(360.0));

    let modal_box = container(content)
        .padding(20)
        .style(container::bordered_box);

    // Center the dialog in the window
    container(modal_box)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(iced::alignment::Horizontal::Center)
        .align_y(iced::alignment::Vertical::Center)
        .into()
}
