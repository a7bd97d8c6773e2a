use anyhow::Context;
use enok_core::spec_doc::SpecDocument;
use enok_core::EnokError;
use std::path::Path;

/// `(keyword, type)` pairs. The goal is lower-cased and the first matching
/// keyword decides the conventional-commit type; `feat` is the default.
const TYPE_RULES: &[(&str, &str)] = &[
    ("fix", "fix"),
    ("doc", "docs"),
    ("refactor", "refactor"),
];

pub fn run(root: &Path, message: Option<String>, no_verify: bool) -> anyhow::Result<()> {
    let doc = SpecDocument::load_if_present(root).context("failed to read active spec")?;

    let subject = match message {
        Some(m) => m,
        None => {
            let doc = doc.as_ref().ok_or(EnokError::SpecNotFound).context(
                "no active spec to derive a message from. Usage: enok commit -m \"<message>\"",
            )?;
            let goal = doc
                .goal
                .as_deref()
                .context("active spec has no goal line")?;
            format!("{}: {}", commit_type(goal), goal)
        }
    };

    let completed: Vec<&str> = doc
        .as_ref()
        .map(|d| d.completed().map(|i| i.text.as_str()).collect())
        .unwrap_or_default();

    println!("Proposed Commit Message\n");
    println!("{subject}");
    if !completed.is_empty() {
        println!();
        for item in &completed {
            println!("- {item}");
        }
    }

    let verify_flag = if no_verify { " --no-verify" } else { "" };
    println!("\nRun:");
    println!("  git commit -m \"{subject}\"{verify_flag}");
    Ok(())
}

fn commit_type(goal: &str) -> &'static str {
    let goal = goal.to_lowercase();
    TYPE_RULES
        .iter()
        .find(|(keyword, _)| goal.contains(keyword))
        .map(|(_, ty)| *ty)
        .unwrap_or("feat")
}
