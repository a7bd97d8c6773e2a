use crate::adapters::AdapterKind;
use anyhow::Context;
use enok_core::{context, detector, io, paths, templates};
use std::path::Path;

pub fn run(root: &Path, adapter: AdapterKind) -> anyhow::Result<()> {
    println!("Initializing EnokMethod in: {}", root.display());

    if !paths::is_initialized(root) {
        init_core_structure(root)?;
    } else {
        println!("EnokMethod core is already initialized.");
    }

    // Adapter scaffolding is NOT guarded by the core check: it runs on
    // every invocation and overwrites the files it owns.
    let tool = adapter.adapter();
    tool.install(root)
        .with_context(|| format!("failed to install {} adapter", tool.name()))?;

    println!("\nEnokMethod initialized successfully.");
    println!("Next steps:");
    println!("  1. Fill out .enokMethod/CONTEXT.md with your tech stack.");
    println!("  2. Start your first feature: enok spec \"My idea\"");

    Ok(())
}

/// Create the core directory tree, seed the template documents, and splice
/// the detected stack into the context document. Called only when
/// `.enokMethod/` does not exist yet; a second `init` never touches these
/// files again.
fn init_core_structure(root: &Path) -> anyhow::Result<()> {
    let dirs = [paths::ENOK_DIR, paths::ARCHIVE_DIR, paths::PROMPTS_DIR];
    for dir in dirs {
        let p = root.join(dir);
        io::ensure_dir(&p).with_context(|| format!("failed to create {}", p.display()))?;
        println!("  created: {dir}/");
    }

    io::atomic_write(
        &paths::context_path(root),
        templates::CONTEXT_TEMPLATE.as_bytes(),
    )
    .context("failed to write CONTEXT.md")?;
    println!("  created: {}", paths::CONTEXT_FILE);

    io::atomic_write(
        &paths::memory_path(root),
        templates::MEMORY_TEMPLATE.as_bytes(),
    )
    .context("failed to write MEMORY.md")?;
    println!("  created: {}", paths::MEMORY_FILE);

    for &(name, body) in templates::PROMPT_FILES {
        let p = paths::prompt_path(root, name);
        io::atomic_write(&p, body.as_bytes())
            .with_context(|| format!("failed to write prompt '{name}'"))?;
        println!("  created: {}/{name}.md", paths::PROMPTS_DIR);
    }

    println!("\nAuto-detecting tech stack...");
    let profile = detector::detect_stack(root);
    tracing::debug!(?profile, "stack detection result");
    if profile.is_empty() {
        println!("  no manifest files recognized; edit the Tech Stack section by hand");
    } else {
        context::patch_context_file(root, &profile, false)
            .context("failed to patch CONTEXT.md with detected stack")?;
        for (label, value) in [
            ("language", &profile.language),
            ("framework", &profile.framework),
            ("styling", &profile.styling),
            ("database", &profile.database),
            ("state", &profile.state),
            ("testing", &profile.testing),
        ] {
            if let Some(v) = value {
                println!("  detected {label}: {v}");
            }
        }
    }

    Ok(())
}
