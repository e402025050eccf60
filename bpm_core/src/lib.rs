//! # bpm_core - Blender Project Records Engine
//!
//! `bpm_core` is the storage layer of BPM, a small desktop manager for
//! personal Blender projects, the file-system paths they live at, and their
//! start/finish dates. Everything is backed by one local SQLite file through
//! a single long-lived connection.
//!
//! ## Design Philosophy
//!
//! - **Thin**: every operation is one statement (plus the cascade delete's
//!   transaction); no caching, no background work
//! - **JSON-First**: all record types implement Serialize/Deserialize, so
//!   whole-database snapshots export cleanly
//! - **Rich Errors**: structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use bpm_core::db::Database;
//!
//! let db = Database::open_in_memory().unwrap();
//! let project = db.add_project("Donut", "tutorial scene", false).unwrap();
//! assert_eq!(db.list_projects().unwrap()[0].name, "Donut");
//! # let _ = project;
//! ```
//!
//! ## Modules
//!
//! - [`models`] - The three record types (projects, paths, dates)
//! - [`db`] - SQLite connection wrapper with per-entity CRUD
//! - [`errors`] - Structured error types
//! - [`export`] - JSON snapshot export with atomic writes
//! - [`paths`] - Database file location resolution

pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod paths;

// Re-export commonly used types at crate root for convenience
pub use db::{Database, RecordCounts};
pub use errors::{StoreError, StoreResult};
pub use models::{DateEntry, PathEntry, Project};
