//! Toolbar component
//!
//! App header plus the tab bar (Projects / Paths / Dates) and the global
//! actions (Refresh, Export JSON).

use iced::widget::{button, row, text, Space};
use iced::{Alignment, Element, Length, Padding};

use crate::{Message, Tab};

/// Render the application header with title
pub fn view_header() -> Element<'static, Message> {
    row![text("Blender Projects Manager").size(24)]
        .align_y(Alignment::Center)
        .into()
}

/// Render the tab bar and global actions
pub fn view_toolbar(active_tab: Tab) -> Element<'static, Message> {
    let mut tabs = row![].spacing(4);
    for tab in Tab::ALL {
        let style = if *tab == active_tab {
            button::primary
        } else {
            button::secondary
        };
        tabs = tabs.push(
            button(text(tab.display_name()).size(11))
                .on_press(Message::TabSelected(*tab))
                .padding(Padding::from([4, 12]))
                .style(style),
        );
    }

    let actions = row![
        button(text("Refresh").size(11))
            .on_press(Message::RefreshAll)
            .padding(Padding::from([4, 8]))
            .style(button::secondary),
        button(text("Export JSON").size(11))
            .on_press(Message::ExportSnapshot)
            .padding(Padding::from([4, 8]))
            .style(button::secondary),
    ]
    .spacing(4);

    row![tabs, Space::new().width(Length::Fill), actions]
        .padding(Padding::from([4, 0]))
        .align_y(Alignment::Center)
        .into()
}
