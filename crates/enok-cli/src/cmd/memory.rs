use anyhow::Context;
use enok_core::{memory, paths, spec_doc::SpecDocument, EnokError};
use std::path::Path;

pub fn run(root: &Path) -> anyhow::Result<()> {
    let path = paths::memory_path(root);
    if !path.exists() {
        return Err(EnokError::FileNotFound(paths::MEMORY_FILE.to_string()).into());
    }

    // Opportunistic stale-field refresh: point Active Focus at the goal of
    // the spec currently in flight.
    if let Some(doc) = SpecDocument::load_if_present(root)? {
        if let Some(goal) = &doc.goal {
            memory::refresh_active_focus(root, goal)
                .context("failed to refresh active focus")?;
        }
    }

    let content = std::fs::read_to_string(&path).context("failed to read MEMORY.md")?;
    println!("Project Memory\n");
    println!("{content}");
    Ok(())
}
