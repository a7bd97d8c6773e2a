//! Output-format adapters for third-party AI coding assistants.
//!
//! Every adapter renders the same role prompts into its tool's file and
//! folder conventions. Adapter files are owned by the adapter: they are
//! rewritten on every `init` run, unlike the core `.enokMethod/` structure.

mod aider;
mod antigravity;
mod claude;
mod copilot;
mod cursor;
mod gemini;
mod windsurf;

use clap::ValueEnum;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AdapterKind {
    Cursor,
    Claude,
    Windsurf,
    Aider,
    Copilot,
    Gemini,
    Antigravity,
}

impl AdapterKind {
    pub fn adapter(self) -> Box<dyn ToolAdapter> {
        match self {
            AdapterKind::Cursor => Box::new(cursor::CursorAdapter),
            AdapterKind::Claude => Box::new(claude::ClaudeAdapter),
            AdapterKind::Windsurf => Box::new(windsurf::WindsurfAdapter),
            AdapterKind::Aider => Box::new(aider::AiderAdapter),
            AdapterKind::Copilot => Box::new(copilot::CopilotAdapter),
            AdapterKind::Gemini => Box::new(gemini::GeminiAdapter),
            AdapterKind::Antigravity => Box::new(antigravity::AntigravityAdapter),
        }
    }
}

pub trait ToolAdapter {
    fn name(&self) -> &'static str;

    /// Write this tool's scaffolding under `root`, overwriting any files
    /// the adapter wrote on a previous run.
    fn install(&self, root: &Path) -> anyhow::Result<()>;
}

/// A role prompt body: the project's copy under `.enokMethod/prompts/`
/// when present (it may have been customized), the embedded template
/// otherwise.
pub(crate) fn role_prompt_body(root: &Path, role: &str) -> anyhow::Result<String> {
    let path = enok_core::paths::prompt_path(root, role);
    if path.is_file() {
        return Ok(std::fs::read_to_string(&path)?);
    }
    match enok_core::templates::role_prompt(role) {
        Some(body) => Ok(body.to_string()),
        None => Err(enok_core::EnokError::UnknownRole(role.to_string()).into()),
    }
}

/// "tech-lead" -> "Tech-lead", the form role names take in headings.
pub(crate) fn role_heading(role: &str) -> String {
    let mut chars = role.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
