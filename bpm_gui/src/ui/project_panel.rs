//! Projects tab
//!
//! List of all project records with the edit form underneath. Add refuses an
//! empty name (the storage layer raises it, the error modal shows it); Update
//! and Delete stay disabled until a row is selected. Deleting a project also
//! removes its paths and dates.

use iced::widget::{button, checkbox, column, container, row, rule, scrollable, text, Column};
use iced::{Element, Length, Padding};

use crate::ui::shared::{empty_list_hint, header_cell, labeled_input, list_row, row_cell};
use crate::{App, Message};

/// Render the Projects panel
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
        header_cell("Name", 200.0),
        header_cell("Description", 0.0),
        header_cell("Finished", 70.0),
    ]
    .spacing(4)
    .padding(Padding::from([0, 6]));

    let mut rows: Column<'_, Message> = column![].spacing(2);
    for project in &app.projects {
        let cells = row![
            row_cell(project.id.to_string(), 50.0),
            row_cell(project.name.clone(), 200.0),
            row_cell(project.description.clone(), 0.0),
            row_cell(
                if project.is_finished { "yes" } else { "no" }.to_string(),
                70.0
            ),
        ]
        .spacing(4);

        rows = rows.push(list_row(
            cells,
            app.selected_project == Some(project.id),
            Message::SelectProject(project.id),
        ));
    }

    if app.projects.is_empty() {
        rows = rows.push(empty_list_hint("projects"));
    }

    container(column![header, scrollable(rows).height(Length::Fill)].spacing(4))
        .height(Length::Fill)
        .style(container::bordered_box)
        .padding(6)
        .into()
}

fn view_form(app: &App) -> Element<'_, Message> {
    column![
        labeled_input("Name:", &app.project_name, Message::ProjectNameChanged),
        labeled_input(
            "Description:",
            &app.project_description,
            Message::ProjectDescriptionChanged,
        ),
        checkbox(app.project_is_finished)
            .label("Finished")
            .on_toggle(Message::ProjectFinishedToggled)
            .text_size(11),
    ]
    .spacing(6)
    .into()
}

fn view_actions(app: &App) -> Element<'_, Message> {
    let has_selection = app.selected_project.is_some();

    let add = button(text("Add Project").size(11))
        .on_press(Message::AddProject)
        .padding(Padding::from([6, 12]))
        .style(button::primary);

    let mut update = button(text("Update Project").size(11))
        .padding(Padding::from([6, 12]))
        .style(button::secondary);
    let mut delete = button(text("Delete Project").size(11))
        .padding(Padding::from([6, 12]))
        .style(button::secondary);
    if has_selection {
        update = update.on_press(Message::UpdateProject);
        delete = delete.on_press(Message::DeleteProject);
    }

    row![add, update, delete].spacing(6).into()
}
