//! Paths tab
//!
//! List of file-system locations with the edit form underneath. Nothing is
//! required here: empty fields are stored as typed, and the project id is a
//! plain number that is never checked against existing projects. A blank
//! project id leaves the path unowned.

use iced::widget::{button, column, container, row, rule, scrollable, text, Column};
use iced::{Element, Length, Padding};

use crate::ui::shared::{empty_list_hint, header_cell, labeled_input, list_row, row_cell};
use crate::{App, Message};

/// Render the Paths panel
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
        header_cell("File Name", 180.0),
        header_cell("Path", 0.0),
        header_cell("Project ID", 80.0),
    ]
    .spacing(4)
    .padding(Padding::from([0, 6]));

    let mut rows: Column<'_, Message> = column![].spacing(2);
    for entry in &app.paths {
        let project_ref = entry
            .project_id
            .map(|id| id.to_string())
            .unwrap_or_else(|| "-".to_string());

        let cells = row![
            row_cell(entry.id.to_string(), 50.0),
            row_cell(entry.file_name.clone(), 180.0),
            row_cell(entry.path.clone(), 0.0),
            row_cell(project_ref, 80.0),
        ]
        .spacing(4);

        rows = rows.push(list_row(
            cells,
            app.selected_path == Some(entry.id),
            Message::SelectPath(entry.id),
        ));
    }

    if app.paths.is_empty() {
        rows = rows.push(empty_list_hint("paths"));
    }

    container(column![header, scrollable(rows).height(Length::Fill)].spacing(4))
        .height(Length::Fill)
        .style(container::bordered_box)
        .padding(6)
        .into()
}

fn view_form(app: &App) -> Element<'_, Message> {
    column![
        labeled_input(
            "File Name:",
            &app.path_file_name,
            Message::PathFileNameChanged,
        ),
        labeled_input("Path:", &app.path_location, Message::PathLocationChanged),
        labeled_input(
            "Project ID:",
            &app.path_project_id,
            Message::PathProjectIdChanged,
        ),
    ]
    .spacing(6)
    .into()
}

fn view_actions(app: &App) -> Element<'_, Message> {
    let has_selection = app.selected_path.is_some();

    let add = button(text("Add Path").size(11))
        .on_press(Message::AddPath)
        .padding(Padding::from([6, 12]))
        .style(button::primary);

    let mut update = button(text("Update Path").size(11))
        .padding(Padding::from([6, 12]))
        .style(button::secondary);
    let mut delete = button(text("Delete Path").size(11))
        .padding(Padding::from([6, 12]))
        .style(button::secondary);
    if has_selection {
        update = update.on_press(Message::UpdatePath);
        delete = delete.on_press(Message::DeletePath);
    }

    row![add, update, delete].spacing(6).into()
}
