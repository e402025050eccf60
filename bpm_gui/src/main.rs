//! # BPM GUI Application
//!
//! Desktop manager for Blender project records: one window, three tabs
//! (Projects, Paths, Dates), each a list view over its table plus an edit
//! form with Add/Update/Delete actions. Built with Iced.
//!
//! Every user action is a synchronous pass-through: read the form fields,
//! issue one storage call, re-read the lists. The [`Database`] is opened once
//! at startup and lives in [`App`] for the whole process.

use iced::widget::{column, stack};
use iced::{Element, Task, Theme};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use bpm_core::db::Database;
use bpm_core::models::{DateEntry, PathEntry, Project};
use bpm_core::{export, paths, StoreError};

mod ui;

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window_size((960.0, 680.0))
        .centered()
        .run()
}

/// The three panels of the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Projects,
    Paths,
    Dates,
}

impl Tab {
    pub const ALL: &'static [Tab] = &[Tab::Projects, Tab::Paths, Tab::Dates];

    pub fn display_name(&self) -> &'static str {
        match self {
            Tab::Projects => "Projects",
            Tab::Paths => "Paths",
            Tab::Dates => "Dates",
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    TabSelected(Tab),

    // Project form
    ProjectNameChanged(String),
    ProjectDescriptionChanged(String),
    ProjectFinishedToggled(bool),
    AddProject,
    UpdateProject,
    DeleteProject,
    SelectProject(i64),

    // Path form
    PathFileNameChanged(String),
    PathLocationChanged(String),
    PathProjectIdChanged(String),
    AddPath,
    UpdatePath,
    DeletePath,
    SelectPath(i64),

    // Date form
    DateStartChanged(String),
    DateFinishChanged(String),
    DateProjectIdChanged(String),
    AddDate,
    UpdateDate,
    DeleteDate,
    SelectDate(i64),

    // Toolbar
    RefreshAll,
    ExportSnapshot,

    // Error modal
    ModalDismissed,
}

/// Application state: the storage handle, the cached table contents, one
/// selection per tab, and the raw form field values.
pub struct App {
    db: Database,
    pub db_label: String,

    pub active_tab: Tab,

    pub projects: Vec<Project>,
    pub paths: Vec<PathEntry>,
    pub dates: Vec<DateEntry>,

    pub selected_project: Option<i64>,
    pub selected_path: Option<i64>,
    pub selected_date: Option<i64>,

    // Project form fields
    pub project_name: String,
    pub project_description: String,
    pub project_is_finished: bool,

    // Path form fields (project id kept as raw text until submit)
    pub path_file_name: String,
    pub path_location: String,
    pub path_project_id: String,

    // Date form fields
    pub date_start: String,
    pub date_finish: String,
    pub date_project_id: String,

    /// Blocking error dialog, `Some` while shown
    pub modal: Option<String>,

    /// Last status line, shown in the status bar
    pub status: String,
}

impl App {
    fn new() -> (Self, Task<Message>) {
        let db = match paths::database_path().and_then(|p| Database::open(&p)) {
            Ok(db) => db,
            Err(e) => {
                error!(error = %e, "failed to open database");
                eprintln!("Failed to open database: {e}");
                std::process::exit(1);
            }
        };

        let db_label = db
            .path()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "in-memory".to_string());
        info!(db = %db_label, "database ready");

        let mut app = App {
            db,
            db_label,
            active_tab: Tab::Projects,
            projects: Vec::new(),
            paths: Vec::new(),
            dates: Vec::new(),
            selected_project: None,
            selected_path: None,
            selected_date: None,
            project_name: String::new(),
            project_description: String::new(),
            project_is_finished: false,
            path_file_name: String::new(),
            path_location: String::new(),
            path_project_id: String::new(),
            date_start: String::new(),
            date_finish: String::new(),
            date_project_id: String::new(),
            modal: None,
            status: "Ready".to_string(),
        };
        app.refresh_lists();

        (app, Task::none())
    }

    fn title(&self) -> String {
        "Blender Projects Manager".to_string()
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::TabSelected(tab) => {
                self.active_tab = tab;
            }

            // --- Project panel ---
            Message::ProjectNameChanged(value) => self.project_name = value,
            Message::ProjectDescriptionChanged(value) => self.project_description = value,
            Message::ProjectFinishedToggled(value) => self.project_is_finished = value,
            Message::AddProject => {
                match self.db.add_project(
                    &self.project_name,
                    &self.project_description,
                    self.project_is_finished,
                ) {
                    Ok(project) => {
                        self.status = format!("Added project \"{}\"", project.name);
                        self.refresh_lists();
                    }
                    Err(StoreError::MissingField { .. }) => {
                        self.modal = Some("Name cannot be empty".to_string());
                    }
                    Err(e) => self.report_error("add project", &e),
                }
            }
            Message::UpdateProject => {
                if let Some(id) = self.selected_project {
                    let edited = Project {
                        id,
                        name: self.project_name.clone(),
                        description: self.project_description.clone(),
                        is_finished: self.project_is_finished,
                    };
                    match self.db.update_project(&edited) {
                        Ok(()) => {
                            self.status = format!("Updated project {id}");
                            self.refresh_lists();
                        }
                        Err(e) => self.report_error("update project", &e),
                    }
                }
            }
            Message::DeleteProject => {
                if let Some(id) = self.selected_project {
                    match self.db.delete_project(id) {
                        Ok(()) => {
                            self.status = format!("Deleted project {id} and its paths/dates");
                            // The cascade may have removed rows shown on the
                            // other two tabs.
                            self.refresh_lists();
                        }
                        Err(e) => self.report_error("delete project", &e),
                    }
                }
            }
            Message::SelectProject(id) => {
                if let Some(project) = self.projects.iter().find(|p| p.id == id) {
                    self.selected_project = Some(id);
                    self.project_name = project.name.clone();
                    self.project_description = project.description.clone();
                    self.project_is_finished = project.is_finished;
                }
            }

            // --- Path panel ---
            Message::PathFileNameChanged(value) => self.path_file_name = value,
            Message::PathLocationChanged(value) => self.path_location = value,
            Message::PathProjectIdChanged(value) => self.path_project_id = value,
            Message::AddPath => match parse_project_ref(&self.path_project_id) {
                Ok(project_id) => {
                    match self
                        .db
                        .add_path(&self.path_file_name, &self.path_location, project_id)
                    {
                        Ok(entry) => {
                            self.status = format!("Added path {}", entry.id);
                            self.refresh_lists();
                        }
                        Err(e) => self.report_error("add path", &e),
                    }
                }
                Err(reason) => self.status = reason,
            },
            Message::UpdatePath => {
                if let Some(id) = self.selected_path {
                    match parse_project_ref(&self.path_project_id) {
                        Ok(project_id) => {
                            let edited = PathEntry {
                                id,
                                file_name: self.path_file_name.clone(),
                                path: self.path_location.clone(),
                                project_id,
                            };
                            match self.db.update_path(&edited) {
                                Ok(()) => {
                                    self.status = format!("Updated path {id}");
                                    self.refresh_lists();
                                }
                                Err(e) => self.report_error("update path", &e),
                            }
                        }
                        Err(reason) => self.status = reason,
                    }
                }
            }
            Message::DeletePath => {
                if let Some(id) = self.selected_path {
                    match self.db.delete_path(id) {
                        Ok(()) => {
                            self.status = format!("Deleted path {id}");
                            self.refresh_lists();
                        }
                        Err(e) => self.report_error("delete path", &e),
                    }
                }
            }
            Message::SelectPath(id) => {
                if let Some(entry) = self.paths.iter().find(|p| p.id == id) {
                    self.selected_path = Some(id);
                    self.path_file_name = entry.file_name.clone();
                    self.path_location = entry.path.clone();
                    self.path_project_id = project_ref_text(entry.project_id);
                }
            }

            // --- Date panel ---
            Message::DateStartChanged(value) => self.date_start = value,
            Message::DateFinishChanged(value) => self.date_finish = value,
            Message::DateProjectIdChanged(value) => self.date_project_id = value,
            Message::AddDate => match parse_project_ref(&self.date_project_id) {
                Ok(project_id) => {
                    match self
                        .db
                        .add_date(&self.date_start, &self.date_finish, project_id)
                    {
                        Ok(entry) => {
                            self.status = format!("Added date {}", entry.id);
                            self.refresh_lists();
                        }
                        Err(e) => self.report_error("add date", &e),
                    }
                }
                Err(reason) => self.status = reason,
            },
            Message::UpdateDate => {
                if let Some(id) = self.selected_date {
                    match parse_project_ref(&self.date_project_id) {
                        Ok(project_id) => {
                            let edited = DateEntry {
                                id,
                                start_date: self.date_start.clone(),
                                finish_date: self.date_finish.clone(),
                                project_id,
                            };
                            match self.db.update_date(&edited) {
                                Ok(()) => {
                                    self.status = format!("Updated date {id}");
                                    self.refresh_lists();
                                }
                                Err(e) => self.report_error("update date", &e),
                            }
                        }
                        Err(reason) => self.status = reason,
                    }
                }
            }
            Message::DeleteDate => {
                if let Some(id) = self.selected_date {
                    match self.db.delete_date(id) {
                        Ok(()) => {
                            self.status = format!("Deleted date {id}");
                            self.refresh_lists();
                        }
                        Err(e) => self.report_error("delete date", &e),
                    }
                }
            }
            Message::SelectDate(id) => {
                if let Some(entry) = self.dates.iter().find(|d| d.id == id) {
                    self.selected_date = Some(id);
                    self.date_start = entry.start_date.clone();
                    self.date_finish = entry.finish_date.clone();
                    self.date_project_id = project_ref_text(entry.project_id);
                }
            }

            // --- Toolbar ---
            Message::RefreshAll => {
                self.refresh_lists();
                self.status = "Reloaded all tables".to_string();
            }
            Message::ExportSnapshot => {
                let chosen = rfd::FileDialog::new()
                    .set_title("Export snapshot")
                    .set_file_name("bpm-snapshot.json")
                    .save_file();
                if let Some(path) = chosen {
                    match export::write_snapshot(&self.db, &path) {
                        Ok(snapshot) => {
                            self.status = format!(
                                "Exported {} records to {}",
                                snapshot.record_count(),
                                path.display()
                            );
                        }
                        Err(e) => self.report_error("export snapshot", &e),
                    }
                }
            }

            Message::ModalDismissed => {
                self.modal = None;
            }
        }

        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        let panel = match self.active_tab {
            Tab::Projects => ui::project_panel::view(self),
            Tab::Paths => ui::path_panel::view(self),
            Tab::Dates => ui::date_panel::view(self),
        };

        let content = column![
            ui::toolbar::view_header(),
            ui::toolbar::view_toolbar(self.active_tab),
            panel,
            ui::status_bar::view_status_bar(self),
        ]
        .spacing(6)
        .padding(10);

        match &self.modal {
            Some(message) => stack![
                content,
                ui::modal::view_backdrop(),
                ui::modal::view_error_modal(message),
            ]
            .into(),
            None => content.into(),
        }
    }

    /// Re-read all three tables and drop selections whose rows vanished.
    fn refresh_lists(&mut self) {
        match self.db.list_projects() {
            Ok(projects) => self.projects = projects,
            Err(e) => self.report_error("load projects", &e),
        }
        match self.db.list_paths() {
            Ok(paths) => self.paths = paths,
            Err(e) => self.report_error("load paths", &e),
        }
        match self.db.list_dates() {
            Ok(dates) => self.dates = dates,
            Err(e) => self.report_error("load dates", &e),
        }

        if let Some(id) = self.selected_project {
            if !self.projects.iter().any(|p| p.id == id) {
                self.selected_project = None;
            }
        }
        if let Some(id) = self.selected_path {
            if !self.paths.iter().any(|p| p.id == id) {
                self.selected_path = None;
            }
        }
        if let Some(id) = self.selected_date {
            if !self.dates.iter().any(|d| d.id == id) {
                self.selected_date = None;
            }
        }
    }

    fn report_error(&mut self, operation: &str, error: &StoreError) {
        warn!(operation, error = %error, "storage operation failed");
        self.status = format!("Failed to {operation}: {error}");
    }
}

/// Parse the free-text project id field: empty means "no project", anything
/// else must be a whole number.
fn parse_project_ref(input: &str) -> Result<Option<i64>, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<i64>()
        .map(Some)
        .map_err(|_| format!("Project ID must be a number, got \"{trimmed}\""))
}

/// Inverse of [`parse_project_ref`], for pre-filling the form on select.
fn project_ref_text(project_id: Option<i64>) -> String {
    project_id.map(|id| id.to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_project_ref() {
        assert_eq!(parse_project_ref(""), Ok(None));
        assert_eq!(parse_project_ref("  "), Ok(None));
        assert_eq!(parse_project_ref("7"), Ok(Some(7)));
        assert_eq!(parse_project_ref(" 42 "), Ok(Some(42)));
        assert!(parse_project_ref("donut").is_err());
    }

    #[test]
    fn test_project_ref_text_roundtrip() {
        assert_eq!(project_ref_text(None), "");
        assert_eq!(project_ref_text(Some(7)), "7");
        assert_eq!(parse_project_ref(&project_ref_text(Some(7))), Ok(Some(7)));
    }
}
