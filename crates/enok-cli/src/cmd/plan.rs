use anyhow::Context;
use enok_core::spec_doc::SpecDocument;
use std::path::Path;

pub fn run(root: &Path) -> anyhow::Result<()> {
    let Some(doc) = SpecDocument::load_if_present(root).context("failed to read active spec")?
    else {
        println!("No active spec.");
        println!("Run: enok spec \"Your idea\"");
        return Ok(());
    };

    println!("Implementation Progress\n");
    println!("Goal: {}\n", doc.goal.as_deref().unwrap_or("Unknown"));

    if doc.items.is_empty() {
        println!("No requirements listed yet.");
        println!("Add checklist lines (- [ ] ...) to CURRENT_SPEC.md.");
        return Ok(());
    }

    for item in &doc.items {
        let marker = if item.done { "x" } else { " " };
        println!("  [{marker}] {}", item.text);
    }

    let done = doc.completed().count();
    let percent = doc.progress_percent().unwrap_or(0);
    println!("\n{done}/{} requirements done ({percent}%)", doc.items.len());
    Ok(())
}
