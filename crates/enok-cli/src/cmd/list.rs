use crate::output::{print_json, print_table};
use anyhow::Context;
use enok_core::paths;
use std::path::Path;

pub fn run(root: &Path, limit: usize, search: Option<&str>, json: bool) -> anyhow::Result<()> {
    let archive = paths::archive_dir(root);
    if !archive.is_dir() {
        println!("No archived specs found.");
        return Ok(());
    }

    let mut files: Vec<String> = std::fs::read_dir(&archive)
        .context("failed to read archive directory")?
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect();

    if let Some(term) = search {
        let term = term.to_lowercase();
        files.retain(|f| f.to_lowercase().contains(&term));
    }

    // Newest first: the fixed-width timestamp prefix makes lexicographic
    // order chronological.
    files.sort();
    files.reverse();
    files.truncate(limit);

    if files.is_empty() {
        println!("No specs found.");
        return Ok(());
    }

    if json {
        let entries: Vec<_> = files
            .iter()
            .map(|f| match paths::parse_archive_filename(f) {
                Some(e) => serde_json::json!({
                    "file": f,
                    "name": e.name,
                    "date": e.date,
                    "time": e.time,
                }),
                None => serde_json::json!({ "file": f }),
            })
            .collect();
        return print_json(&entries);
    }

    println!("Archived Specs ({})\n", files.len());

    let rows: Vec<Vec<String>> = files
        .iter()
        .enumerate()
        .map(|(i, f)| match paths::parse_archive_filename(f) {
            Some(e) => vec![
                format!("{}.", i + 1),
                e.name,
                format!("{} {}", e.date, e.time),
            ],
            None => vec![format!("{}.", i + 1), f.clone(), String::new()],
        })
        .collect();
    print_table(&["#", "NAME", "COMPLETED"], rows);

    Ok(())
}
