use super::{cursor, ToolAdapter};
use anyhow::Context;
use enok_core::io;
use std::path::Path;

pub struct CopilotAdapter;

impl ToolAdapter for CopilotAdapter {
    fn name(&self) -> &'static str {
        "copilot"
    }

    fn install(&self, root: &Path) -> anyhow::Result<()> {
        // Same rules body as Cursor, reframed under Copilot's expected header.
        let content =
            cursor::CURSOR_RULES.replace("# Cursor Rules", "# GitHub Copilot Instructions");

        let dir = root.join(".github");
        io::ensure_dir(&dir).context("failed to create .github")?;
        io::atomic_write(&dir.join("copilot-instructions.md"), content.as_bytes())
            .context("failed to write copilot-instructions.md")?;

        println!("Installed GitHub Copilot config (.github/copilot-instructions.md)");
        Ok(())
    }
}
