//! # BPM CLI Companion
//!
//! Terminal view over the same database the GUI uses: prints the project
//! inventory (every project with its paths and dates, plus orphaned rows),
//! and can add a project from line-oriented prompts.
//!
//! ```text
//! bpm_cli          # print the inventory report
//! bpm_cli add      # prompt for a new project
//! ```

use std::io::{self, BufRead, Write};

use bpm_core::db::Database;
use bpm_core::errors::StoreResult;
use bpm_core::models::Project;
use bpm_core::paths;
use tracing_subscriber::EnvFilter;

fn prompt_str(prompt: &str) -> String {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return String::new();
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return String::new();
    }

    input.trim_end_matches(['\r', '\n']).to_string()
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let command = std::env::args().nth(1);

    let result = match command.as_deref() {
        None => run_inventory(),
        Some("add") => run_add(),
        Some(other) => {
            eprintln!("Unknown command: {}", other);
            eprintln!("Usage: bpm_cli [add]");
            std::process::exit(2);
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        if let Ok(json) = serde_json::to_string_pretty(&e) {
            eprintln!();
            eprintln!("Error JSON:");
            eprintln!("{}", json);
        }
        std::process::exit(1);
    }
}

fn open_database() -> StoreResult<Database> {
    let path = paths::database_path()?;
    Database::open(&path)
}

fn run_inventory() -> StoreResult<()> {
    let db = open_database()?;

    let projects = db.list_projects()?;
    let all_paths = db.list_paths()?;
    let all_dates = db.list_dates()?;

    println!("═══════════════════════════════════════");
    println!("  BLENDER PROJECT INVENTORY");
    println!("═══════════════════════════════════════");
    println!();

    if projects.is_empty() {
        println!("No projects recorded yet.");
    }

    for project in &projects {
        print_project(&db, project)?;
    }

    // Rows whose project_id points at nothing are still valid records;
    // surface them so they don't silently disappear from view.
    let known = |id: Option<i64>| id.is_some_and(|id| projects.iter().any(|p| p.id == id));
    let orphan_paths: Vec<_> = all_paths.iter().filter(|p| !known(p.project_id)).collect();
    let orphan_dates: Vec<_> = all_dates.iter().filter(|d| !known(d.project_id)).collect();

    if !orphan_paths.is_empty() || !orphan_dates.is_empty() {
        println!("---------------------------------------");
        println!("Unowned records:");
        for entry in orphan_paths {
            println!(
                "  path {}: {} ({}) -> project {:?}",
                entry.id, entry.file_name, entry.path, entry.project_id
            );
        }
        for entry in orphan_dates {
            println!(
                "  date {}: {} .. {} -> project {:?}",
                entry.id, entry.start_date, entry.finish_date, entry.project_id
            );
        }
        println!();
    }

    let counts = db.counts()?;
    println!("═══════════════════════════════════════");
    println!(
        "  {} projects, {} paths, {} dates",
        counts.projects, counts.paths, counts.dates
    );
    println!("═══════════════════════════════════════");

    Ok(())
}

fn print_project(db: &Database, project: &Project) -> StoreResult<()> {
    let flag = if project.is_finished { "[done]" } else { "[wip]" };
    println!("#{} {} {}", project.id, project.name, flag);
    if !project.description.is_empty() {
        println!("    {}", project.description);
    }

    for entry in db.list_paths_for_project(project.id)? {
        println!("    path: {} ({})", entry.file_name, entry.path);
    }
    for entry in db.list_dates_for_project(project.id)? {
        println!("    dates: {} .. {}", entry.start_date, entry.finish_date);
    }
    println!();

    Ok(())
}

fn run_add() -> StoreResult<()> {
    let db = open_database()?;

    let name = prompt_str("Project name: ");
    let description = prompt_str("Description (optional): ");
    let finished = prompt_str("Finished? [y/N]: ");
    let is_finished = matches!(finished.as_str(), "y" | "Y" | "yes");

    let project = db.add_project(&name, &description, is_finished)?;
    println!();
    println!("Added project #{}: {}", project.id, project.name);

    Ok(())
}
