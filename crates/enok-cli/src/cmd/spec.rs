use enok_core::{io, paths, templates, EnokError};
use std::path::Path;

pub fn run(root: &Path, title: &str) -> anyhow::Result<()> {
    let path = paths::spec_path(root);
    if path.exists() {
        // The existing file is left byte-for-byte untouched.
        return Err(EnokError::SpecExists.into());
    }

    let content = templates::SPEC_TEMPLATE.replace(templates::GOAL_PLACEHOLDER, title);
    io::atomic_write(&path, content.as_bytes())?;

    println!("Created new spec: {}", paths::SPEC_FILE);
    println!("Next: fill in the requirements, then track progress with 'enok plan'");
    Ok(())
}
