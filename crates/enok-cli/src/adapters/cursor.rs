use super::ToolAdapter;
use anyhow::Context;
use enok_core::io;
use std::path::Path;

pub struct CursorAdapter;

/// Shared workflow rules body. The Copilot adapter reuses this with a
/// different header.
pub(crate) const CURSOR_RULES: &str = r#"# Cursor Rules

You are an expert AI developer following the EnokMethod workflow:
context-first, spec-driven development.

## Core Context (ALWAYS READ FIRST)

- `.enokMethod/CONTEXT.md` — tech stack, architecture, and conventions
- `CURRENT_SPEC.md` — the single active specification
- `.enokMethod/MEMORY.md` — past decisions and completed work

## Workflow

1. Before writing any code, read the context document and the active spec.
2. Work only on requirements listed in `CURRENT_SPEC.md`.
3. Mark a requirement `- [x]` only after it is implemented and tested.
4. When everything is checked, archive with `enok done "<name>"`.

## EnokMethod Commands

- `enok spec "<title>"` — start a new specification
- `enok done "<name>"` — archive the finished specification
- `enok status` — show the active goal and recent activity
- `enok plan` — show checklist progress

## Rules of Engagement

- Never work without an active specification.
- Never silently expand scope beyond the spec.
- Keep `.enokMethod/CONTEXT.md` current when the stack changes.
"#;

impl ToolAdapter for CursorAdapter {
    fn name(&self) -> &'static str {
        "cursor"
    }

    fn install(&self, root: &Path) -> anyhow::Result<()> {
        io::atomic_write(&root.join(".cursorrules"), CURSOR_RULES.as_bytes())
            .context("failed to write .cursorrules")?;
        println!("Installed Cursor rules (.cursorrules)");
        Ok(())
    }
}
