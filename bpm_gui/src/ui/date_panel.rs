//! Dates tab
//!
//! Start/finish bookkeeping per project. Dates are free text on purpose -
//! entries like "mid March" are valid - so no calendar or ordering checks
//! happen here or in storage. Structurally this panel mirrors the Paths tab.

use iced::widget::{button, column, container, row, rule, scrollable, text, Column};
use iced::{Element, Length, Padding};

use crate::ui::shared::{empty_list_hint, header_cell, labeled_input, list_row, row_cell};
use crate::{App, Message};

/// Render the Dates panel
pub fn view(app: &App) -> Element<'_, Message> {
    column![
        view_list(app),
        rule::horizontal(1),
        view_form(app),
        view_actions(app),
    ]
    .spacing(8)
    .height(Length::Fill)
    .into()
}

fn view_list(app: &App) -> Element<'_, Message> {
    let header = row![
        header_cell("ID", 50.0),
        header_cell("Start Date", 0.0),
        header_cell("Finish Date", 0.0),
        header_cell("Project ID", 80.0),
    ]
    .spacing(4)
    .padding(Padding::from([0, 6]));

    let mut rows: Column<'_, Message> = column![].spacing(2);
    for entry in &app.dates {
        let project_ref = entry
            .project_id
            .map(|id| id.to_string())
            .unwrap_or_else(|| "-".to_string());

        let cells = row![
            row_cell(entry.id.to_string(), 50.0),
            row_cell(entry.start_date.clone(), 0.0),
            row_cell(entry.finish_date.clone(), 0.0),
            row_cell(project_ref, 80.0),
        ]
        .spacing(4);

        rows = rows.push(list_row(
            cells,
            app.selected_date == Some(entry.id),
            Message::SelectDate(entry.id),
        ));
    }

    if app.dates.is_empty() {
        rows = rows.push(empty_list_hint("dates"));
    }

    container(column![header, scrollable(rows).height(Length::Fill)].spacing(4))
        .height(Length::Fill)
        .style(container::bordered_box)
        .padding(6)
        .into()
}

fn view_form(app: &App) -> Element<'_, Message> {
    column![
        labeled_input("Start Date:", &app.date_start, Message::DateStartChanged),
        labeled_input("Finish Date:", &app.date_finish, Message::DateFinishChanged),
        labeled_input(
            "Project ID:",
            &app.date_project_id,
            Message::DateProjectIdChanged,
        ),
    ]
    .spacing(6)
    .into()
}

fn view_actions(app: &App) -> Element<'_, Message> {
    let has_selection = app.selected_date.is_some();

    let add = button(text("Add Date").size(11))
        .on_press(Message::AddDate)
        .padding(Padding::from([6, 12]))
        .style(button::primary);

    let mut update = button(text("Update Date").size(11))
        .padding(Padding::from([6, 12]))
        .style(button::secondary);
    let mut delete = button(text("Delete Date").size(11))
        .padding(Padding::from([6, 12]))
        .style(button::secondary);
    if has_selection {
        update = update.on_press(Message::UpdateDate);
        delete = delete.on_press(Message::DeleteDate);
    }

    row![add, update, delete].spacing(6).into()
}
