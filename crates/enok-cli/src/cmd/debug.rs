use anyhow::Context;
use enok_core::{paths, spec_doc::SpecDocument, templates};
use std::path::Path;

pub fn run(root: &Path, issue: &str) -> anyhow::Result<()> {
    println!("Debugging Briefing\n");
    println!("Issue: {issue}\n");

    if let Some(doc) = SpecDocument::load_if_present(root).context("failed to read active spec")? {
        if let Some(goal) = &doc.goal {
            println!("Active goal: {goal}\n");
        }
    }

    println!("Core context: {}\n", paths::CONTEXT_FILE);
    println!("{}", debugger_prompt(root)?);
    Ok(())
}

/// The project's debugger prompt if it has been initialized (and possibly
/// customized), the embedded one otherwise.
fn debugger_prompt(root: &Path) -> anyhow::Result<String> {
    let path = paths::prompt_path(root, "debugger");
    if path.is_file() {
        return std::fs::read_to_string(&path).context("failed to read debugger prompt");
    }
    Ok(templates::DEBUGGER_PROMPT.to_string())
}
