use anyhow::Context;
use enok_core::{context, detector, paths, EnokError};
use std::path::Path;

pub fn run(root: &Path) -> anyhow::Result<()> {
    let path = paths::context_path(root);
    if !path.exists() {
        return Err(EnokError::FileNotFound(paths::CONTEXT_FILE.to_string()).into());
    }

    // Opportunistic stale-field refresh: re-run the detector and patch
    // label lines still holding the template placeholder. Hand-edited
    // values are never overwritten here.
    let profile = detector::detect_stack(root);
    let refreshed = context::patch_context_file(root, &profile, true)
        .context("failed to refresh detected stack fields")?;
    if refreshed {
        println!("Refreshed detected tech-stack fields.\n");
    }

    let content = std::fs::read_to_string(&path).context("failed to read CONTEXT.md")?;
    println!("Project Context\n");
    println!("{content}");
    Ok(())
}
