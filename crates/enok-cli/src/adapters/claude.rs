use super::{role_prompt_body, ToolAdapter};
use anyhow::Context;
use enok_core::{io, templates};
use std::path::Path;

pub struct ClaudeAdapter;

/// Slash commands generated under `.claude/commands/enokMethod/`:
/// `(name, description, body)`.
const COMMANDS: &[(&str, &str, &str)] = &[
    (
        "spec",
        "Create a new specification using EnokMethod",
        "# Enok Spec\nRun the following command to create a spec:\n`enok spec \"$1\"`\n",
    ),
    (
        "done",
        "Complete the current specification",
        "# Enok Done\nRun the following command to finish the spec:\n`enok done \"$1\"`\n",
    ),
    (
        "status",
        "Show the EnokMethod project status",
        "# Enok Status\nRun: `enok status`\n",
    ),
    (
        "validate",
        "Validate the EnokMethod structure",
        "# Enok Validate\nRun: `enok validate`\n",
    ),
    (
        "context",
        "Show the project context document",
        "# Enok Context\nRun: `enok context`\n",
    ),
    (
        "memory",
        "Show the project memory log",
        "# Enok Memory\nRun: `enok memory`\n",
    ),
    (
        "list",
        "List archived specifications",
        "# Enok List\nRun: `enok list`\n",
    ),
    (
        "commit",
        "Propose a commit message from the active spec",
        "# Enok Commit\nRun: `enok commit`\n",
    ),
    (
        "dev",
        "Show the developer briefing for the active spec",
        "# Enok Dev\nRun: `enok dev`\n",
    ),
];

const CLAUDE_GUIDE: &str = r#"# CLAUDE.md

This project uses EnokMethod: context-first, spec-driven development.

## Core Context (ALWAYS READ FIRST)

- `.enokMethod/CONTEXT.md` — tech stack, architecture, and conventions
- `CURRENT_SPEC.md` — the single active specification
- `.enokMethod/MEMORY.md` — past decisions and completed work

## Agents

Role agents live in `.claude/agents/`: architect, tech-lead, developer,
reviewer, documenter, debugger. Each reads the core context before acting.

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

impl ToolAdapter for ClaudeAdapter {
    fn name(&self) -> &'static str {
        "claude"
    }

    fn install(&self, root: &Path) -> anyhow::Result<()> {
        let claude_dir = root.join(".claude");
        let agents_dir = claude_dir.join("agents");
        let commands_dir = claude_dir.join("commands").join("enokMethod");
        io::ensure_dir(&agents_dir).context("failed to create .claude/agents")?;
        io::ensure_dir(&commands_dir).context("failed to create .claude/commands/enokMethod")?;

        io::atomic_write(&root.join("CLAUDE.md"), CLAUDE_GUIDE.as_bytes())
            .context("failed to write CLAUDE.md")?;

        // One agent wrapper per role: frontmatter + the role prompt body.
        for &role in templates::ROLES {
            let body = role_prompt_body(root, role)?;
            let agent = format!(
                "---\n\
                 description: EnokMethod {role} agent\n\
                 tools: [\"bash\", \"grep_glob\", \"edit\", \"read_file\"]\n\
                 ---\n\n\
                 {body}"
            );
            io::atomic_write(&agents_dir.join(format!("{role}.md")), agent.as_bytes())
                .with_context(|| format!("failed to write agent '{role}'"))?;
        }

        for &(name, description, body) in COMMANDS {
            let command = format!("---\ndescription: {description}\n---\n\n{body}");
            io::atomic_write(&commands_dir.join(format!("{name}.md")), command.as_bytes())
                .with_context(|| format!("failed to write command '{name}'"))?;
        }

        println!("Installed Claude Code config (.claude/ and CLAUDE.md)");
        Ok(())
    }
}
