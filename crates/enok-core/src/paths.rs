use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

// ---------------------------------------------------------------------------
// Directory and file constants
// ---------------------------------------------------------------------------

pub const ENOK_DIR: &str = ".enokMethod";
pub const ARCHIVE_DIR: &str = ".enokMethod/archive";
pub const PROMPTS_DIR: &str = ".enokMethod/prompts";

pub const CONTEXT_FILE: &str = ".enokMethod/CONTEXT.md";
pub const MEMORY_FILE: &str = ".enokMethod/MEMORY.md";

pub const SPEC_FILE: &str = "CURRENT_SPEC.md";
pub const PRD_FILE: &str = "CURRENT_PRD.md";

pub const README_FILE: &str = "README.md";
pub const CHANGELOG_FILE: &str = "CHANGELOG.md";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn enok_dir(root: &Path) -> PathBuf {
    root.join(ENOK_DIR)
}

pub fn archive_dir(root: &Path) -> PathBuf {
    root.join(ARCHIVE_DIR)
}

pub fn prompts_dir(root: &Path) -> PathBuf {
    root.join(PROMPTS_DIR)
}

pub fn prompt_path(root: &Path, name: &str) -> PathBuf {
    prompts_dir(root).join(format!("{name}.md"))
}

pub fn context_path(root: &Path) -> PathBuf {
    root.join(CONTEXT_FILE)
}

pub fn memory_path(root: &Path) -> PathBuf {
    root.join(MEMORY_FILE)
}

pub fn spec_path(root: &Path) -> PathBuf {
    root.join(SPEC_FILE)
}

pub fn prd_path(root: &Path) -> PathBuf {
    root.join(PRD_FILE)
}

pub fn is_initialized(root: &Path) -> bool {
    enok_dir(root).is_dir()
}

// ---------------------------------------------------------------------------
// Archive naming
// ---------------------------------------------------------------------------

static WHITESPACE_RE: OnceLock<Regex> = OnceLock::new();

fn whitespace_re() -> &'static Regex {
    WHITESPACE_RE.get_or_init(|| Regex::new(r"\s+").unwrap())
}

/// Collapse whitespace runs in `name` into single hyphens.
pub fn archive_slug(name: &str) -> String {
    whitespace_re().replace_all(name.trim(), "-").into_owned()
}

/// Archive entry filename: `YYYY-MM-DD_HH-MM-<slug>.md`.
/// The fixed-width timestamp prefix makes lexicographic order chronological.
pub fn archive_filename(timestamp: &chrono::DateTime<chrono::Local>, name: &str) -> String {
    format!(
        "{}-{}.md",
        timestamp.format("%Y-%m-%d_%H-%M"),
        archive_slug(name)
    )
}

static ARCHIVE_NAME_RE: OnceLock<Regex> = OnceLock::new();

fn archive_name_re() -> &'static Regex {
    ARCHIVE_NAME_RE
        .get_or_init(|| Regex::new(r"^(\d{4}-\d{2}-\d{2})_(\d{2}-\d{2})-(.+)\.md$").unwrap())
}

/// A parsed archive entry filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    pub date: String,
    pub time: String,
    pub name: String,
}

/// Parse an archive filename back into its date, time, and display name.
/// Returns `None` for files that don't match the timestamp-slug pattern.
pub fn parse_archive_filename(filename: &str) -> Option<ArchiveEntry> {
    let caps = archive_name_re().captures(filename)?;
    Some(ArchiveEntry {
        date: caps[1].to_string(),
        time: caps[2].replace('-', ":"),
        name: caps[3].replace('-', " "),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
