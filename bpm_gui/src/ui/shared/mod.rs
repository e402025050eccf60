//! Form and list-table helpers shared by the three entity panels.

use iced::widget::{button, column, row, text, text_input, Column, Row};
use iced::{Alignment, Element, Length, Padding};

use crate::Message;

/// Create a labeled text input row
pub fn labeled_input<'a>(
    label: &'a str,
    value: &'a str,
    on_change: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message> {
    row![
        text(label).size(11).width(Length::Fixed(90.0)),
        text_input("", value)
            .on_input(on_change)
            .width(Length::Fill)
            .padding(4)
            .size(11),
    ]
    .align_y(Alignment::Center)
    .into()
}

/// Column header for a list table
pub fn header_cell(label: &str, width: f32) -> Element<'_, Message> {
    text(label)
        .size(10)
        .color([0.6, 0.6, 0.6])
        .width(cell_width(width))
        .into()
}

/// One cell of a list row
pub fn row_cell(value: String, width: f32) -> Element<'static, Message> {
    text(value).size(10).width(cell_width(width)).into()
}

/// A selectable list row: a full-width button wrapping the cells, primary
/// style while selected
pub fn list_row(
    cells: Row<'static, Message>,
    selected: bool,
    on_press: Message,
) -> Element<'static, Message> {
    let style = if selected {
        button::primary
    } else {
        button::secondary
    };
    button(cells.align_y(Alignment::Center))
        .on_press(on_press)
        .padding(Padding::from([3, 6]))
        .style(style)
        .width(Length::Fill)
        .into()
}

/// Placeholder shown under the headers while the table is empty
pub fn empty_list_hint(entity: &str) -> Column<'_, Message> {
    column![text(format!("(no {entity} yet)"))
        .size(10)
        .color([0.5, 0.5, 0.5])]
    .padding(Padding::from([6, 4]))
}

/// Fixed width for id-like columns, fill for 0.0
fn cell_width(width: f32) -> Length {
    if width == 0.0 {
        Length::Fill
    } else {
        Length::Fixed(width)
    }
}
