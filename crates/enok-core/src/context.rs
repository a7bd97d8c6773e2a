use crate::detector::StackProfile;
use crate::error::Result;
use crate::io;
use crate::paths;
use regex::{NoExpand, Regex};
use std::path::Path;
use std::sync::OnceLock;

/// Section headers every context document must carry.
pub const REQUIRED_SECTIONS: &[&str] = &[
    "## 1. Project Overview",
    "## 2. Tech Stack",
    "## 3. Core Architecture",
    "## 4. Coding Conventions",
    "## 5. Rules of Engagement",
];

/// Labels of the tech-stack lines, in document order.
const LABELS: &[&str] = &[
    "Language",
    "Framework",
    "Styling",
    "Database",
    "State Mgmt",
    "Testing",
];

struct LabelRules {
    /// Matches the label line's trailing content, whatever it currently is.
    any: Vec<Regex>,
    /// Matches only when the trailing content is still a `[...]` placeholder.
    placeholder: Vec<Regex>,
}

static LABEL_RULES: OnceLock<LabelRules> = OnceLock::new();

fn label_rules() -> &'static LabelRules {
    LABEL_RULES.get_or_init(|| LabelRules {
        any: LABELS
            .iter()
            .map(|l| Regex::new(&format!(r"(?m){}\*\*:.*$", regex::escape(l))).unwrap())
            .collect(),
        placeholder: LABELS
            .iter()
            .map(|l| {
                Regex::new(&format!(r"(?m){}\*\*:\s*\[[^\]]*\]\s*$", regex::escape(l))).unwrap()
            })
            .collect(),
    })
}

fn fields(profile: &StackProfile) -> [&Option<String>; 6] {
    [
        &profile.language,
        &profile.framework,
        &profile.styling,
        &profile.database,
        &profile.state,
        &profile.testing,
    ]
}

/// Splice non-empty profile fields into the labeled tech-stack lines.
///
/// Each substitution rewrites the trailing content of its label line; a
/// label line that does not exist in the document is a no-op. When
/// `only_placeholders` is set, lines already holding a real value are
/// left alone (the stale-field refresh used by the `context` command).
pub fn apply_profile(content: &str, profile: &StackProfile, only_placeholders: bool) -> String {
    let rules = label_rules();
    let mut out = content.to_string();

    for (i, field) in fields(profile).into_iter().enumerate() {
        let Some(value) = field else { continue };
        let re = if only_placeholders {
            &rules.placeholder[i]
        } else {
            &rules.any[i]
        };
        let replacement = format!("{}**: {}", LABELS[i], value);
        out = re.replace_all(&out, NoExpand(&replacement)).into_owned();
    }

    out
}

/// Apply a profile to the context document on disk.
/// Returns `true` if the file changed.
pub fn patch_context_file(
    root: &Path,
    profile: &StackProfile,
    only_placeholders: bool,
) -> Result<bool> {
    let path = paths::context_path(root);
    if !path.exists() || profile.is_empty() {
        return Ok(false);
    }
    let content = std::fs::read_to_string(&path)?;
    let updated = apply_profile(&content, profile, only_placeholders);
    if updated == content {
        return Ok(false);
    }
    io::atomic_write(&path, updated.as_bytes())?;
    Ok(true)
}

/// Required section headers missing from `content`.
pub fn missing_sections(content: &str) -> Vec<&'static str> {
    REQUIRED_SECTIONS
        .iter()
        .copied()
        .filter(|s| !content.contains(s))
        .collect()
}
