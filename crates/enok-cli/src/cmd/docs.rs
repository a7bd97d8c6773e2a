use anyhow::Context;
use enok_core::{io, memory, paths, EnokError};
use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;

pub fn run(root: &Path, readme: bool, changelog: bool) -> anyhow::Result<()> {
    // Both targets are seeded from the workflow documents.
    if !paths::is_initialized(root) {
        return Err(EnokError::NotInitialized.into());
    }

    // No flags means both targets.
    let all = !readme && !changelog;

    if readme || all {
        write_readme(root)?;
    }
    if changelog || all {
        write_changelog(root)?;
    }
    Ok(())
}

static STACK_LINE_RE: OnceLock<Regex> = OnceLock::new();

fn stack_line_re() -> &'static Regex {
    STACK_LINE_RE.get_or_init(|| {
        Regex::new(r"(?m)^- \*\*(Language|Framework|Styling|Database|State Mgmt|Testing)\*\*: (.+)$")
            .unwrap()
    })
}

fn write_readme(root: &Path) -> anyhow::Result<()> {
    let path = root.join(paths::README_FILE);
    if path.exists() {
        return Err(EnokError::TargetExists(paths::README_FILE.to_string()).into());
    }

    let project_name = root
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "project".to_string());

    // Seed the stack section from context-document lines that hold a real
    // value (placeholders are skipped).
    let mut stack_lines = Vec::new();
    if let Ok(context) = std::fs::read_to_string(paths::context_path(root)) {
        for caps in stack_line_re().captures_iter(&context) {
            let value = caps[2].trim();
            if !value.starts_with('[') {
                stack_lines.push(format!("- **{}**: {}", &caps[1], value));
            }
        }
    }

    let stack_section = if stack_lines.is_empty() {
        "[Describe the tech stack]".to_string()
    } else {
        stack_lines.join("\n")
    };

    let content = format!(
        "# {project_name}\n\n\
        [One paragraph: what this project does]\n\n\
        ## Tech Stack\n\n\
        {stack_section}\n\n\
        ## Getting Started\n\n\
        [Installation and first-run instructions]\n\n\
        ## Development\n\n\
        This project uses the EnokMethod spec-driven workflow:\n\n\
        - `enok spec \"<title>\"` — start a task\n\
        - `enok status` — see the active goal\n\
        - `enok done \"<name>\"` — archive the finished task\n"
    );

    io::atomic_write(&path, content.as_bytes()).context("failed to write README.md")?;
    println!("Generated {}", paths::README_FILE);
    Ok(())
}

fn write_changelog(root: &Path) -> anyhow::Result<()> {
    let path = root.join(paths::CHANGELOG_FILE);
    if path.exists() {
        return Err(EnokError::TargetExists(paths::CHANGELOG_FILE.to_string()).into());
    }

    let mut entries = memory::all_entries(root).context("failed to read memory log")?;
    entries.reverse(); // newest first

    let mut content = String::from("# Changelog\n\n## Unreleased\n\n");
    if entries.is_empty() {
        content.push_str("No completed work logged yet.\n");
    } else {
        for entry in &entries {
            content.push_str(entry);
            content.push('\n');
        }
    }

    io::atomic_write(&path, content.as_bytes()).context("failed to write CHANGELOG.md")?;
    println!("Generated {}", paths::CHANGELOG_FILE);
    Ok(())
}
