//! UI module for the BPM GUI
//!
//! # Panel Structure
//! - `toolbar` - App header, tab bar, Refresh / Export JSON actions
//! - `project_panel` - Projects tab: list view + name/description/finished form
//! - `path_panel` - Paths tab: list view + file name/path/project id form
//! - `date_panel` - Dates tab: list view + start/finish/project id form
//! - `status_bar` - Bottom line: database path, record counts, last status
//! - `modal` - Blocking error dialog with backdrop overlay
//!
//! # Shared Components
//! - `shared` - Labeled form inputs and list-table cells used by all panels
//!
//! Each panel renders the same three-part layout: a scrollable list of rows
//! (click to select), the edit form, and the Add/Update/Delete button row.
//! Update and Delete only get an `on_press` while a row is selected, so they
//! render disabled without a selection.

pub mod date_panel;
pub mod modal;
pub mod path_panel;
pub mod project_panel;
pub mod status_bar;
pub mod toolbar;

pub mod shared;
