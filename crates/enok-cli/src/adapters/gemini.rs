use super::ToolAdapter;
use anyhow::Context;
use enok_core::io;
use std::path::Path;

pub struct GeminiAdapter;

const GEMINI_GUIDE: &str = r#"# GEMINI.md

This project uses EnokMethod: context-first, spec-driven development.

## Core Context (ALWAYS READ FIRST)

- `.enokMethod/CONTEXT.md` — tech stack, architecture, and conventions
- `CURRENT_SPEC.md` — the single active specification
- `.enokMethod/MEMORY.md` — past decisions and completed work

## Workflow

1. `enok spec "<title>"` creates the active specification.
2. Implement only requirements listed in `CURRENT_SPEC.md`, marking each
   `- [x]` as it is finished and tested.
3. `enok done "<name>"` archives the spec and logs the completion.

## Rules of Engagement

- Never work without an active specification.
- Never silently expand scope beyond the spec.
- Keep `.enokMethod/CONTEXT.md` current when the stack changes.
"#;

impl ToolAdapter for GeminiAdapter {
    fn name(&self) -> &'static str {
        "gemini"
    }

    fn install(&self, root: &Path) -> anyhow::Result<()> {
        io::atomic_write(&root.join("GEMINI.md"), GEMINI_GUIDE.as_bytes())
            .context("failed to write GEMINI.md")?;
        println!("Installed Gemini config (GEMINI.md)");
        Ok(())
    }
}
