use anyhow::Context;
use enok_core::{paths, spec_doc::SpecDocument};
use std::path::Path;

pub fn run(root: &Path) -> anyhow::Result<()> {
    let Some(doc) = SpecDocument::load_if_present(root).context("failed to read active spec")?
    else {
        println!("No active spec.");
        println!("Run: enok spec \"Your idea\"");
        return Ok(());
    };

    println!("Developer Briefing\n");
    println!("Goal: {}\n", doc.goal.as_deref().unwrap_or("Unknown"));

    let pending: Vec<_> = doc.pending().collect();
    if pending.is_empty() {
        println!("All requirements are done.");
        println!("Finish up with: enok done \"<name>\"");
    } else {
        println!("Pending requirements:");
        for item in pending {
            println!("  - [ ] {}", item.text);
        }
    }

    println!("\nBefore coding, read: {}", paths::CONTEXT_FILE);
    Ok(())
}
