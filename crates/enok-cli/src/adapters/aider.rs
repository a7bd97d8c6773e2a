use super::{role_heading, role_prompt_body, ToolAdapter};
use anyhow::Context;
use enok_core::{io, templates};
use std::path::Path;

pub struct AiderAdapter;

const AIDER_CONF: &str = r#"# Aider configuration generated by enok init --adapter aider
# Load the workflow context into every session.
read:
  - .enokMethod/CONTEXT.md
  - CURRENT_SPEC.md
auto-commits: false
"#;

const AIDER_README: &str = r#"# Aider + EnokMethod

Role prompts for aider, generated by `enok init --adapter aider`.

## Quick Start

1. Start a task: `enok spec "<title>"`.
2. Launch aider with a role prompt, e.g.:
   `aider --message-file .aider/prompts/developer.md`
3. Implement the checklist in `CURRENT_SPEC.md`, marking items `- [x]`.
4. Finish with `enok done "<name>"`.

`.aider.conf.yml` preloads the context document and the active spec into
every session. Regenerate these files any time with
`enok init --adapter aider`.
"#;

fn wrap_prompt(role: &str, body: &str) -> String {
    format!(
        "# EnokMethod {heading} Role\n\n\
         You are acting as the **{role}** for this project.\n\n\
         ## Context Files\n\n\
         - `.enokMethod/CONTEXT.md` — tech stack, architecture, and conventions\n\
         - `CURRENT_SPEC.md` — the single active specification\n\n\
         ## Your Role\n\n\
         {body}\n\
         ## Workflow\n\n\
         1. Read the context files above before changing anything.\n\
         2. Work only on requirements in `CURRENT_SPEC.md`, marking items `- [x]`.\n\
         3. Finish with `enok done \"<name>\"`.\n",
        heading = role_heading(role),
    )
}

impl ToolAdapter for AiderAdapter {
    fn name(&self) -> &'static str {
        "aider"
    }

    fn install(&self, root: &Path) -> anyhow::Result<()> {
        let aider_dir = root.join(".aider");
        let prompts_dir = aider_dir.join("prompts");
        io::ensure_dir(&prompts_dir).context("failed to create .aider/prompts")?;

        for &role in templates::ROLES {
            let body = role_prompt_body(root, role)?;
            let prompt = wrap_prompt(role, &body);
            io::atomic_write(&prompts_dir.join(format!("{role}.md")), prompt.as_bytes())
                .with_context(|| format!("failed to write prompt '{role}'"))?;
        }

        io::atomic_write(&root.join(".aider.conf.yml"), AIDER_CONF.as_bytes())
            .context("failed to write .aider.conf.yml")?;
        io::atomic_write(&aider_dir.join("README.md"), AIDER_README.as_bytes())
            .context("failed to write .aider/README.md")?;

        println!("Installed Aider config (.aider/ and .aider.conf.yml)");
        Ok(())
    }
}
