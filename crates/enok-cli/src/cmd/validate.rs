use anyhow::Context;
use enok_core::{context, paths};
use std::path::Path;

pub fn run(root: &Path) -> anyhow::Result<()> {
    println!("Validating EnokMethod Structure\n");

    let checks: [(&str, std::path::PathBuf, bool); 5] = [
        (".enokMethod directory", paths::enok_dir(root), true),
        ("CONTEXT.md", paths::context_path(root), false),
        ("MEMORY.md", paths::memory_path(root), false),
        ("archive directory", paths::archive_dir(root), true),
        ("prompts directory", paths::prompts_dir(root), true),
    ];

    let mut all_valid = true;
    for (name, path, want_dir) in &checks {
        let ok = if *want_dir {
            path.is_dir()
        } else {
            path.is_file()
        };
        if ok {
            println!("  ok       {name}");
        } else {
            println!("  MISSING  {name}");
            all_valid = false;
        }
    }

    let context_path = paths::context_path(root);
    if context_path.is_file() {
        let content =
            std::fs::read_to_string(&context_path).context("failed to read CONTEXT.md")?;
        let missing = context::missing_sections(&content);

        println!("\nCONTEXT.md sections:");
        for section in context::REQUIRED_SECTIONS {
            if missing.contains(section) {
                println!("  MISSING  {section}");
            } else {
                println!("  ok       {section}");
            }
        }
    }

    println!();
    if all_valid {
        println!("Structure is valid.");
    } else {
        println!("Some files are missing. Run: enok init");
    }
    Ok(())
}
