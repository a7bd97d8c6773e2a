use crate::output::print_json;
use anyhow::Context;
use enok_core::{memory, paths, spec_doc::SpecDocument};
use std::path::Path;

pub fn run(root: &Path, json: bool) -> anyhow::Result<()> {
    if !paths::is_initialized(root) {
        if json {
            return print_json(&serde_json::json!({ "initialized": false }));
        }
        println!("EnokMethod is not initialized in this directory.");
        println!("Run: enok init");
        return Ok(());
    }

    let spec = SpecDocument::load_if_present(root).context("failed to read active spec")?;
    let recent = memory::recent_entries(root, 3).context("failed to read memory log")?;
    let archived = archive_count(root);

    if json {
        return print_json(&serde_json::json!({
            "initialized": true,
            "active_spec": spec.as_ref().map(|s| serde_json::json!({
                "goal": s.goal,
                "requirements_done": s.completed().count(),
                "requirements_total": s.items.len(),
            })),
            "recent_activity": recent,
            "archived": archived,
        }));
    }

    println!("EnokMethod Status\n");
    println!("EnokMethod initialized\n");

    match &spec {
        Some(doc) => {
            println!("Active Spec:");
            println!("  {}\n", doc.goal.as_deref().unwrap_or("Unknown"));
        }
        None => {
            println!("No active spec");
            println!("  Run: enok spec \"Your idea\"\n");
        }
    }

    if !recent.is_empty() {
        println!("Recent Activity:");
        for line in &recent {
            println!("  {line}");
        }
        println!();
    }

    println!("Completed Specs: {archived}");
    Ok(())
}

fn archive_count(root: &Path) -> usize {
    std::fs::read_dir(paths::archive_dir(root))
        .map(|entries| entries.filter_map(|e| e.ok()).count())
        .unwrap_or(0)
}
