use enok_core::{io, paths, templates, EnokError};
use std::path::Path;

pub fn run(root: &Path, title: Option<&str>) -> anyhow::Result<()> {
    let path = paths::prd_path(root);
    if path.exists() {
        return Err(EnokError::PrdExists.into());
    }

    let title = title.unwrap_or("Untitled Product");
    let content = templates::PRD_TEMPLATE.replace(templates::PRD_TITLE_PLACEHOLDER, title);
    io::atomic_write(&path, content.as_bytes())?;

    println!("Created product requirements: {}", paths::PRD_FILE);
    println!("Next: fill in the problem and features, then hand off to the architect");
    Ok(())
}
