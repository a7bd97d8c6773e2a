use super::ToolAdapter;
use anyhow::Context;
use enok_core::io;
use std::path::Path;

pub struct AntigravityAdapter;

const AGENT_GUIDE: &str = r#"# AGENT.md

General AI-assistant instructions for this project. The project uses
EnokMethod: context-first, spec-driven development.

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

impl ToolAdapter for AntigravityAdapter {
    fn name(&self) -> &'static str {
        "antigravity"
    }

    fn install(&self, root: &Path) -> anyhow::Result<()> {
        io::atomic_write(&root.join("AGENT.md"), AGENT_GUIDE.as_bytes())
            .context("failed to write AGENT.md")?;
        println!("Installed general AI instructions (AGENT.md)");
        Ok(())
    }
}
