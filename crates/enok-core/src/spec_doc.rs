use crate::error::{EnokError, Result};
use crate::paths;
use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;

// ---------------------------------------------------------------------------
// SpecDocument
// ---------------------------------------------------------------------------

/// Structured view of the active specification document.
///
/// Every command that needs the goal line or the requirement checklist goes
/// through this one parser instead of pattern-matching the markdown ad hoc.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpecDocument {
    pub goal: Option<String>,
    pub items: Vec<ChecklistItem>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistItem {
    pub text: String,
    pub done: bool,
}

static GOAL_RE: OnceLock<Regex> = OnceLock::new();
static CHECKLIST_RE: OnceLock<Regex> = OnceLock::new();

fn goal_re() -> &'static Regex {
    GOAL_RE.get_or_init(|| Regex::new(r"\*\*Goal\*\*:\s*(.+)").unwrap())
}

fn checklist_re() -> &'static Regex {
    CHECKLIST_RE.get_or_init(|| Regex::new(r"(?m)^- \[([ x])\] (.+)$").unwrap())
}

impl SpecDocument {
    /// Parse a specification document body.
    pub fn parse(content: &str) -> Self {
        let goal = goal_re()
            .captures(content)
            .map(|c| c[1].trim().to_string());

        let items = checklist_re()
            .captures_iter(content)
            .map(|c| ChecklistItem {
                done: &c[1] == "x",
                text: c[2].trim().to_string(),
            })
            .collect();

        Self { goal, items }
    }

    /// Load and parse `CURRENT_SPEC.md` at the project root.
    pub fn load(root: &Path) -> Result<Self> {
        let path = paths::spec_path(root);
        if !path.exists() {
            return Err(EnokError::SpecNotFound);
        }
        let content = std::fs::read_to_string(&path)?;
        Ok(Self::parse(&content))
    }

    /// Load `CURRENT_SPEC.md` if it exists, `None` otherwise.
    pub fn load_if_present(root: &Path) -> Result<Option<Self>> {
        match Self::load(root) {
            Ok(doc) => Ok(Some(doc)),
            Err(EnokError::SpecNotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub fn completed(&self) -> impl Iterator<Item = &ChecklistItem> {
        self.items.iter().filter(|i| i.done)
    }

    pub fn pending(&self) -> impl Iterator<Item = &ChecklistItem> {
        self.items.iter().filter(|i| !i.done)
    }

    /// Checklist completion as a whole percentage; `None` with no items.
    pub fn progress_percent(&self) -> Option<u32> {
        if self.items.is_empty() {
            return None;
        }
        let done = self.completed().count();
        Some((done * 100 / self.items.len()) as u32)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
