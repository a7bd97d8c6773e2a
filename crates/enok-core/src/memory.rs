use crate::error::{EnokError, Result};
use crate::io;
use crate::paths;
use chrono::{DateTime, Local};
use std::path::Path;

/// Line prefix that marks a completion entry in the memory log.
pub const ENTRY_PREFIX: &str = "- [";

/// Append one timestamped completion line to the memory log.
/// The log is append-only; nothing above the new line is touched.
pub fn append_completion(root: &Path, name: &str, timestamp: &DateTime<Local>) -> Result<()> {
    let path = paths::memory_path(root);
    if !path.exists() {
        return Err(EnokError::FileNotFound(paths::MEMORY_FILE.to_string()));
    }
    let line = format!(
        "\n- [{}] Completed: {}\n",
        timestamp.format("%Y-%m-%d %H:%M"),
        name
    );
    io::append_text(&path, &line)
}

/// The most recent `limit` completion entries, newest first.
pub fn recent_entries(root: &Path, limit: usize) -> Result<Vec<String>> {
    let path = paths::memory_path(root);
    if !path.exists() {
        return Ok(Vec::new());
    }
    let content = std::fs::read_to_string(&path)?;
    let mut entries: Vec<String> = content
        .lines()
        .filter(|l| l.trim_start().starts_with(ENTRY_PREFIX))
        .map(|l| l.trim().to_string())
        .collect();
    entries.reverse();
    entries.truncate(limit);
    Ok(entries)
}

/// All completion entries in file order (oldest first).
pub fn all_entries(root: &Path) -> Result<Vec<String>> {
    let mut entries = recent_entries(root, usize::MAX)?;
    entries.reverse();
    Ok(entries)
}

/// Rewrite the body of the `## 1. Active Focus` section to `focus`.
///
/// Replaces everything between the heading and the next `## ` heading (or
/// EOF). Returns `false` without touching the file when the heading is
/// missing or the body already matches.
pub fn refresh_active_focus(root: &Path, focus: &str) -> Result<bool> {
    let path = paths::memory_path(root);
    if !path.exists() {
        return Err(EnokError::FileNotFound(paths::MEMORY_FILE.to_string()));
    }
    let content = std::fs::read_to_string(&path)?;

    let heading = "## 1. Active Focus";
    let Some(heading_pos) = content.find(heading) else {
        return Ok(false);
    };

    let body_start = heading_pos + heading.len();
    let body_end = content[body_start..]
        .find("\n## ")
        .map(|i| body_start + i)
        .unwrap_or(content.len());

    let new_body = format!("\n\n{focus}\n");
    if content[body_start..body_end] == new_body {
        return Ok(false);
    }

    let mut updated = String::with_capacity(content.len());
    updated.push_str(&content[..body_start]);
    updated.push_str(&new_body);
    updated.push_str(&content[body_end..]);

    io::atomic_write(&path, updated.as_bytes())?;
    Ok(true)
}
