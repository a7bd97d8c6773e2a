use anyhow::Context;
use chrono::Local;
use enok_core::{io, memory, paths, EnokError};
use std::path::Path;

pub fn run(root: &Path, name: &str) -> anyhow::Result<()> {
    let spec = paths::spec_path(root);
    if !spec.exists() {
        return Err(EnokError::SpecNotFound.into());
    }

    let now = Local::now();
    let archive_dir = paths::archive_dir(root);
    io::ensure_dir(&archive_dir).context("failed to create archive directory")?;

    let filename = paths::archive_filename(&now, name);
    let dest = archive_dir.join(&filename);
    std::fs::rename(&spec, &dest)
        .with_context(|| format!("failed to move {} into the archive", paths::SPEC_FILE))?;
    tracing::debug!(archive = %dest.display(), "archived spec");
    println!("Archived spec to: {}/{filename}", paths::ARCHIVE_DIR);

    // The memory log only gains an entry when the project carries one;
    // archiving still succeeds in a tree initialized without it.
    if paths::memory_path(root).exists() {
        memory::append_completion(root, name, &now).context("failed to update memory log")?;
        println!("Updated {}", paths::MEMORY_FILE);
    }

    Ok(())
}
