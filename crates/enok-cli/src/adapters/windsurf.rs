use super::{role_heading, role_prompt_body, ToolAdapter};
use anyhow::Context;
use enok_core::{io, templates};
use std::path::Path;

pub struct WindsurfAdapter;

const WINDSURF_RULES: &str = r#"# Windsurf Rules

This project uses EnokMethod: context-first, spec-driven development.
Role-specific rules live in `.windsurf/rules/`.

- Read `.enokMethod/CONTEXT.md` before writing any code.
- Work only on requirements in `CURRENT_SPEC.md`.
- Archive finished work with `enok done "<name>"`.
"#;

const WINDSURF_README: &str = r#"# Windsurf + EnokMethod

Role rules for the Windsurf editor, generated by `enok init --adapter windsurf`.

## Workflow

1. Pick the role rule matching your current activity in `.windsurf/rules/`.
2. Start a task with `enok spec "<title>"`.
3. Implement the checklist in `CURRENT_SPEC.md`, marking items `- [x]`.
4. Finish with `enok done "<name>"` and check `enok status`.

Regenerate these files any time with `enok init --adapter windsurf`.
"#;

fn wrap_rule(role: &str, body: &str) -> String {
    format!(
        "# Windsurf Rules - {heading} Role\n\n\
         You are an expert AI developer acting as the **{role}** for this project.\n\n\
         ## Core Context (ALWAYS READ FIRST)\n\n\
         - `.enokMethod/CONTEXT.md` — tech stack, architecture, and conventions\n\
         - `CURRENT_SPEC.md` — the single active specification\n\n\
         ## Your Role\n\n\
         {body}\n\
         ## EnokMethod Commands\n\n\
         - `enok spec \"<title>\"` — start a new specification\n\
         - `enok done \"<name>\"` — archive the finished specification\n\
         - `enok status` — show the active goal and recent activity\n\n\
         ## Rules of Engagement\n\n\
         - Never work without an active specification.\n\
         - Never silently expand scope beyond the spec.\n\
         - Keep `.enokMethod/CONTEXT.md` current when the stack changes.\n",
        heading = role_heading(role),
    )
}

impl ToolAdapter for WindsurfAdapter {
    fn name(&self) -> &'static str {
        "windsurf"
    }

    fn install(&self, root: &Path) -> anyhow::Result<()> {
        let windsurf_dir = root.join(".windsurf");
        let rules_dir = windsurf_dir.join("rules");
        io::ensure_dir(&rules_dir).context("failed to create .windsurf/rules")?;

        io::atomic_write(&root.join(".windsurfrules"), WINDSURF_RULES.as_bytes())
            .context("failed to write .windsurfrules")?;

        for &role in templates::ROLES {
            let body = role_prompt_body(root, role)?;
            let rule = wrap_rule(role, &body);
            io::atomic_write(&rules_dir.join(format!("{role}.md")), rule.as_bytes())
                .with_context(|| format!("failed to write rule '{role}'"))?;
        }

        io::atomic_write(&windsurf_dir.join("README.md"), WINDSURF_README.as_bytes())
            .context("failed to write .windsurf/README.md")?;

        println!("Installed Windsurf config (.windsurfrules and .windsurf/)");
        Ok(())
    }
}
