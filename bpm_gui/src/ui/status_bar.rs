//! Status Bar (Bottom)
//!
//! Displays:
//! - Database file path
//! - Record counts per table
//! - Last status message

use iced::widget::{row, text, Space};
use iced::{Element, Length, Padding};

use crate::{App, Message};

/// Render the status bar
pub fn view_status_bar(app: &App) -> Element<'_, Message> {
    let counts = format!(
        "projects: {} | paths: {} | dates: {}",
        app.projects.len(),
        app.paths.len(),
        app.dates.len()
    );

    row![
        text(&app.db_label).size(10).color([0.6, 0.6, 0.6]),
        Space::new().width(12),
        text(counts).size(10),
        Space::new().width(Length::Fill),
        text(&app.status).size(10),
    ]
    .padding(Padding::from([4, 0]))
    .into()
}
