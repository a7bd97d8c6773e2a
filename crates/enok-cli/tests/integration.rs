use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn enok(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("enok").unwrap();
    cmd.current_dir(dir.path()).env("ENOK_ROOT", dir.path());
    cmd
}

fn init_project(dir: &TempDir) {
    enok(dir).arg("init").assert().success();
}

fn read(dir: &TempDir, rel: &str) -> String {
    std::fs::read_to_string(dir.path().join(rel)).unwrap()
}

// ---------------------------------------------------------------------------
// enok init
// ---------------------------------------------------------------------------

#[test]
fn init_creates_core_structure() {
    let dir = TempDir::new().unwrap();
    enok(&dir).arg("init").assert().success();

    assert!(dir.path().join(".enokMethod").is_dir());
    assert!(dir.path().join(".enokMethod/CONTEXT.md").is_file());
    assert!(dir.path().join(".enokMethod/MEMORY.md").is_file());
    assert!(dir.path().join(".enokMethod/archive").is_dir());
    assert!(dir.path().join(".enokMethod/prompts").is_dir());
}

#[test]
fn init_seeds_seven_prompt_files() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);

    let prompts: Vec<_> = std::fs::read_dir(dir.path().join(".enokMethod/prompts"))
        .unwrap()
        .filter_map(|e| e.ok())
        .collect();
    assert_eq!(prompts.len(), 7);
}

#[test]
fn init_installs_cursor_adapter_by_default() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);

    assert!(dir.path().join(".cursorrules").is_file());
    assert!(read(&dir, ".cursorrules").contains("# Cursor Rules"));
}

#[test]
fn init_detects_stack_from_package_json() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("package.json"),
        r#"{"dependencies": {"next": "^14.0.0", "typescript": "^5.0.0", "tailwindcss": "^3.0.0"}}"#,
    )
    .unwrap();

    init_project(&dir);

    let context = read(&dir, ".enokMethod/CONTEXT.md");
    assert!(context.contains("Language**: TypeScript"));
    assert!(context.contains("Framework**: Next.js"));
    assert!(context.contains("Styling**: Tailwind CSS"));
}

#[test]
fn init_does_not_overwrite_core_structure() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);

    std::fs::write(dir.path().join(".enokMethod/CONTEXT.md"), "MODIFIED CONTENT").unwrap();

    enok(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already initialized"));

    assert_eq!(read(&dir, ".enokMethod/CONTEXT.md"), "MODIFIED CONTENT");
}

#[test]
fn init_overwrites_adapter_files_on_rerun() {
    // The asymmetry: core structure is guarded, adapter scaffolding is not.
    let dir = TempDir::new().unwrap();
    init_project(&dir);

    std::fs::write(dir.path().join(".cursorrules"), "tampered").unwrap();
    std::fs::write(dir.path().join(".enokMethod/CONTEXT.md"), "MODIFIED CONTENT").unwrap();

    enok(&dir).arg("init").assert().success();

    assert!(read(&dir, ".cursorrules").contains("# Cursor Rules"));
    assert_eq!(read(&dir, ".enokMethod/CONTEXT.md"), "MODIFIED CONTENT");
}

// ---------------------------------------------------------------------------
// enok spec
// ---------------------------------------------------------------------------

#[test]
fn spec_creates_document_with_title() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);

    enok(&dir)
        .args(["spec", "Add dark mode toggle"])
        .assert()
        .success();

    let content = read(&dir, "CURRENT_SPEC.md");
    assert!(content.contains("**Goal**: Add dark mode toggle"));
    assert!(content.contains("## 1. Objective"));
    assert!(content.contains("## 2. Detailed Requirements"));
    assert!(content.contains("## 3. Technical Impact"));
    assert!(content.contains("## 4. Acceptance Criteria"));
    assert!(content.contains("## 5. Implementation Plan"));
}

#[test]
fn spec_refuses_to_overwrite_existing() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);

    enok(&dir).args(["spec", "First spec"]).assert().success();
    let first = read(&dir, "CURRENT_SPEC.md");

    enok(&dir)
        .args(["spec", "Second spec"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    // Byte-for-byte unchanged.
    assert_eq!(read(&dir, "CURRENT_SPEC.md"), first);
}

// ---------------------------------------------------------------------------
// enok done
// ---------------------------------------------------------------------------

#[test]
fn done_archives_spec_and_updates_memory() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);
    enok(&dir).args(["spec", "Add dark mode"]).assert().success();

    enok(&dir).args(["done", "Add dark mode"]).assert().success();

    assert!(!dir.path().join("CURRENT_SPEC.md").exists());

    let archive: Vec<_> = std::fs::read_dir(dir.path().join(".enokMethod/archive"))
        .unwrap()
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(archive.len(), 1);
    assert!(archive[0].contains("Add-dark-mode"));

    let memory = read(&dir, ".enokMethod/MEMORY.md");
    assert_eq!(
        memory
            .lines()
            .filter(|l| l.contains("Completed: Add dark mode"))
            .count(),
        1
    );
}

#[test]
fn done_archive_filename_matches_timestamp_pattern() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);
    enok(&dir).args(["spec", "Anything"]).assert().success();

    enok(&dir)
        .args(["done", "My Feature Name"])
        .assert()
        .success();

    let archive: Vec<_> = std::fs::read_dir(dir.path().join(".enokMethod/archive"))
        .unwrap()
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect();
    let re = regex::Regex::new(r"^\d{4}-\d{2}-\d{2}_\d{2}-\d{2}-My-Feature-Name\.md$").unwrap();
    assert!(re.is_match(&archive[0]), "bad name: {}", archive[0]);
}

#[test]
fn done_without_spec_fails() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);

    enok(&dir)
        .args(["done", "Nothing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

// ---------------------------------------------------------------------------
// enok status
// ---------------------------------------------------------------------------

#[test]
fn status_reports_uninitialized_directory() {
    let dir = TempDir::new().unwrap();

    enok(&dir)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("not initialized"));
}

#[test]
fn status_shows_active_spec_goal() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);
    enok(&dir).args(["spec", "Test Feature"]).assert().success();

    enok(&dir)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Active Spec"))
        .stdout(predicate::str::contains("Test Feature"));
}

#[test]
fn status_without_spec_and_with_history() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);
    enok(&dir).args(["spec", "Feature 1"]).assert().success();
    enok(&dir).args(["done", "Feature 1"]).assert().success();

    enok(&dir)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("No active spec"))
        .stdout(predicate::str::contains("Recent Activity"))
        .stdout(predicate::str::contains("Completed: Feature 1"))
        .stdout(predicate::str::contains("Completed Specs: 1"));
}

#[test]
fn status_json_output() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);
    enok(&dir).args(["spec", "Test Feature"]).assert().success();

    let output = enok(&dir).args(["status", "--json"]).output().unwrap();
    let v: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(v["initialized"], true);
    assert_eq!(v["active_spec"]["goal"], "Test Feature");
}

// ---------------------------------------------------------------------------
// enok list
// ---------------------------------------------------------------------------

fn archive_three(dir: &TempDir) {
    for name in ["Feature A", "Feature B", "Feature C"] {
        enok(dir).args(["spec", name]).assert().success();
        enok(dir).args(["done", name]).assert().success();
    }
}

#[test]
fn list_shows_all_archived_specs() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);
    archive_three(&dir);

    enok(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Archived Specs (3)"))
        .stdout(predicate::str::contains("Feature A"))
        .stdout(predicate::str::contains("Feature B"))
        .stdout(predicate::str::contains("Feature C"));
}

#[test]
fn list_newest_first() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);
    archive_three(&dir);

    let output = enok(&dir).arg("list").output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let index_a = stdout.find("Feature A").unwrap();
    let index_c = stdout.find("Feature C").unwrap();
    // Feature C was archived last, so it lists first.
    assert!(index_c < index_a);
}

#[test]
fn list_respects_limit() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);
    archive_three(&dir);

    enok(&dir)
        .args(["list", "--limit", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Archived Specs (2)"));
}

#[test]
fn list_filters_by_search_term() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);
    archive_three(&dir);

    enok(&dir)
        .args(["list", "--search", "feature-b"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Archived Specs (1)"))
        .stdout(predicate::str::contains("Feature B"));
}

#[test]
fn list_without_archive_directory() {
    let dir = TempDir::new().unwrap();

    enok(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No archived specs found"));
}

// ---------------------------------------------------------------------------
// enok context / memory
// ---------------------------------------------------------------------------

#[test]
fn context_displays_document() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);

    enok(&dir)
        .arg("context")
        .assert()
        .success()
        .stdout(predicate::str::contains("Project Context"))
        .stdout(predicate::str::contains("## 1. Project Overview"))
        .stdout(predicate::str::contains("## 2. Tech Stack"));
}

#[test]
fn context_fails_when_missing() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);
    std::fs::remove_file(dir.path().join(".enokMethod/CONTEXT.md")).unwrap();

    enok(&dir)
        .arg("context")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn context_refreshes_stale_placeholder_fields() {
    // A manifest added after init is picked up on the next `context` run.
    let dir = TempDir::new().unwrap();
    init_project(&dir);
    std::fs::write(
        dir.path().join("package.json"),
        r#"{"dependencies": {"react": "^18.0.0"}}"#,
    )
    .unwrap();

    enok(&dir)
        .arg("context")
        .assert()
        .success()
        .stdout(predicate::str::contains("Framework**: React"));

    let context = read(&dir, ".enokMethod/CONTEXT.md");
    assert!(context.contains("Framework**: React"));
}

#[test]
fn memory_displays_document_and_completions() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);
    enok(&dir).args(["spec", "Test Task"]).assert().success();
    enok(&dir).args(["done", "Test Task"]).assert().success();

    enok(&dir)
        .arg("memory")
        .assert()
        .success()
        .stdout(predicate::str::contains("Project Memory"))
        .stdout(predicate::str::contains("## 1. Active Focus"))
        .stdout(predicate::str::contains("Completed: Test Task"));
}

#[test]
fn memory_refreshes_active_focus_from_spec() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);
    enok(&dir).args(["spec", "Ship the login page"]).assert().success();

    enok(&dir).arg("memory").assert().success();

    let memory = read(&dir, ".enokMethod/MEMORY.md");
    assert!(memory.contains("## 1. Active Focus\n\nShip the login page"));
}

#[test]
fn memory_fails_when_missing() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);
    std::fs::remove_file(dir.path().join(".enokMethod/MEMORY.md")).unwrap();

    enok(&dir)
        .arg("memory")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

// ---------------------------------------------------------------------------
// enok validate
// ---------------------------------------------------------------------------

#[test]
fn validate_passes_on_complete_structure() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);

    enok(&dir)
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Validating EnokMethod Structure"))
        .stdout(predicate::str::contains("## 1. Project Overview"))
        .stdout(predicate::str::contains("## 5. Rules of Engagement"))
        .stdout(predicate::str::contains("Structure is valid"));
}

#[test]
fn validate_reports_missing_files() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);
    std::fs::remove_file(dir.path().join(".enokMethod/CONTEXT.md")).unwrap();

    enok(&dir)
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("MISSING  CONTEXT.md"))
        .stdout(predicate::str::contains("Some files are missing"));
}

#[test]
fn validate_reports_missing_context_sections() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);
    std::fs::write(
        dir.path().join(".enokMethod/CONTEXT.md"),
        "# Incomplete Context\n\n## 1. Project Overview\n",
    )
    .unwrap();

    enok(&dir)
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("MISSING  ## 2. Tech Stack"));
}

// ---------------------------------------------------------------------------
// enok commit
// ---------------------------------------------------------------------------

#[test]
fn commit_proposes_feat_message_from_goal() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);
    enok(&dir)
        .args(["spec", "Implement login feature"])
        .assert()
        .success();

    enok(&dir)
        .arg("commit")
        .assert()
        .success()
        .stdout(predicate::str::contains("Proposed Commit Message"))
        .stdout(predicate::str::contains("feat: Implement login feature"))
        .stdout(predicate::str::contains(
            "git commit -m \"feat: Implement login feature\"",
        ));
}

#[test]
fn commit_detects_type_from_goal_keywords() {
    for (title, expected) in [
        ("Fix login bug", "fix: Fix login bug"),
        ("Update documentation", "docs: Update documentation"),
        ("Refactor auth module", "refactor: Refactor auth module"),
    ] {
        let dir = TempDir::new().unwrap();
        init_project(&dir);
        enok(&dir).args(["spec", title]).assert().success();

        enok(&dir)
            .arg("commit")
            .assert()
            .success()
            .stdout(predicate::str::contains(expected));
    }
}

#[test]
fn commit_uses_explicit_message() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);

    enok(&dir)
        .args(["commit", "-m", "chore: initial commit"])
        .assert()
        .success()
        .stdout(predicate::str::contains("chore: initial commit"))
        .stdout(predicate::str::contains(
            "git commit -m \"chore: initial commit\"",
        ));
}

#[test]
fn commit_includes_completed_requirements_in_body() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);
    enok(&dir)
        .args(["spec", "Complex detailed feature"])
        .assert()
        .success();

    let spec_path = dir.path().join("CURRENT_SPEC.md");
    let mut content = std::fs::read_to_string(&spec_path).unwrap();
    content.push_str("\n- [x] Create API endpoint\n- [x] Create frontend component\n- [ ] Write tests\n");
    std::fs::write(&spec_path, content).unwrap();

    enok(&dir)
        .arg("commit")
        .assert()
        .success()
        .stdout(predicate::str::contains("feat: Complex detailed feature"))
        .stdout(predicate::str::contains("Create API endpoint"))
        .stdout(predicate::str::contains("Create frontend component"))
        .stdout(predicate::str::contains("Write tests").not());
}

#[test]
fn commit_without_spec_or_message_fails_with_usage() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);

    enok(&dir)
        .arg("commit")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage: enok commit -m"));
}

#[test]
fn commit_supports_no_verify_flag() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);
    enok(&dir)
        .args(["spec", "Skip hooks feature"])
        .assert()
        .success();

    enok(&dir)
        .args(["commit", "--no-verify"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--no-verify"));
}

// ---------------------------------------------------------------------------
// enok dev / plan / debug
// ---------------------------------------------------------------------------

#[test]
fn dev_shows_goal_and_pending_requirements() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);
    enok(&dir).args(["spec", "Build the API"]).assert().success();

    enok(&dir)
        .arg("dev")
        .assert()
        .success()
        .stdout(predicate::str::contains("Developer Briefing"))
        .stdout(predicate::str::contains("Goal: Build the API"))
        .stdout(predicate::str::contains("Pending requirements"));
}

#[test]
fn dev_without_spec_prints_notice() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);

    enok(&dir)
        .arg("dev")
        .assert()
        .success()
        .stdout(predicate::str::contains("No active spec"));
}

#[test]
fn plan_shows_checklist_progress() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);
    enok(&dir).args(["spec", "Build the API"]).assert().success();

    let spec_path = dir.path().join("CURRENT_SPEC.md");
    std::fs::write(
        &spec_path,
        "# Specification\n\n**Goal**: Build the API\n\n- [x] Define routes\n- [ ] Add handlers\n",
    )
    .unwrap();

    enok(&dir)
        .arg("plan")
        .assert()
        .success()
        .stdout(predicate::str::contains("Implementation Progress"))
        .stdout(predicate::str::contains("[x] Define routes"))
        .stdout(predicate::str::contains("[ ] Add handlers"))
        .stdout(predicate::str::contains("1/2 requirements done (50%)"));
}

#[test]
fn debug_frames_the_issue() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);
    enok(&dir).args(["spec", "Build the API"]).assert().success();

    enok(&dir)
        .args(["debug", "Login returns 500"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Debugging Briefing"))
        .stdout(predicate::str::contains("Issue: Login returns 500"))
        .stdout(predicate::str::contains("Active goal: Build the API"))
        .stdout(predicate::str::contains("Debugger"));
}

// ---------------------------------------------------------------------------
// enok docs / prd
// ---------------------------------------------------------------------------

#[test]
fn docs_generates_readme_and_changelog() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);
    enok(&dir).args(["spec", "Ship feature"]).assert().success();
    enok(&dir).args(["done", "Ship feature"]).assert().success();

    enok(&dir).arg("docs").assert().success();

    assert!(read(&dir, "README.md").contains("## Tech Stack"));
    assert!(read(&dir, "CHANGELOG.md").contains("Completed: Ship feature"));
}

#[test]
fn docs_readme_flag_narrows_output() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);

    enok(&dir).args(["docs", "--readme"]).assert().success();

    assert!(dir.path().join("README.md").is_file());
    assert!(!dir.path().join("CHANGELOG.md").exists());
}

#[test]
fn docs_refuses_to_overwrite() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);
    std::fs::write(dir.path().join("README.md"), "hand-written").unwrap();

    enok(&dir)
        .args(["docs", "--readme"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    assert_eq!(read(&dir, "README.md"), "hand-written");
}

#[test]
fn prd_creates_document_once() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);

    enok(&dir).args(["prd", "My Product"]).assert().success();
    assert!(read(&dir, "CURRENT_PRD.md").contains("**Product**: My Product"));

    enok(&dir)
        .args(["prd", "Other Product"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn prd_defaults_title_when_omitted() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);

    enok(&dir).arg("prd").assert().success();
    assert!(read(&dir, "CURRENT_PRD.md").contains("**Product**: Untitled Product"));
}

// ---------------------------------------------------------------------------
// Adapter generation
// ---------------------------------------------------------------------------

#[test]
fn claude_adapter_generates_agents_and_commands() {
    let dir = TempDir::new().unwrap();
    enok(&dir)
        .args(["init", "--adapter", "claude"])
        .assert()
        .success();

    assert!(dir.path().join("CLAUDE.md").is_file());

    let agents: Vec<_> = std::fs::read_dir(dir.path().join(".claude/agents"))
        .unwrap()
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(agents.len(), 6);
    for role in [
        "architect.md",
        "tech-lead.md",
        "developer.md",
        "reviewer.md",
        "documenter.md",
        "debugger.md",
    ] {
        assert!(agents.contains(&role.to_string()), "missing {role}");
    }

    let commands: Vec<_> = std::fs::read_dir(dir.path().join(".claude/commands/enokMethod"))
        .unwrap()
        .filter_map(|e| e.ok())
        .collect();
    assert_eq!(commands.len(), 9);
}

#[test]
fn claude_agent_files_carry_frontmatter_and_prompt_body() {
    let dir = TempDir::new().unwrap();
    enok(&dir)
        .args(["init", "--adapter", "claude"])
        .assert()
        .success();

    let agent = read(&dir, ".claude/agents/architect.md");
    assert!(agent.contains("description: EnokMethod architect agent"));
    assert!(agent.contains("tools: [\"bash\", \"grep_glob\", \"edit\", \"read_file\"]"));

    // The generated wrapper embeds the seeded role prompt.
    let original = read(&dir, ".enokMethod/prompts/architect.md");
    assert!(agent.contains(original.trim()));
}

#[test]
fn aider_adapter_generates_prompts_and_config() {
    let dir = TempDir::new().unwrap();
    enok(&dir)
        .args(["init", "--adapter", "aider"])
        .assert()
        .success();

    let prompts: Vec<_> = std::fs::read_dir(dir.path().join(".aider/prompts"))
        .unwrap()
        .filter_map(|e| e.ok())
        .collect();
    assert_eq!(prompts.len(), 6);
    assert!(dir.path().join(".aider.conf.yml").is_file());

    let readme = read(&dir, ".aider/README.md");
    assert!(readme.contains("Aider + EnokMethod"));
    assert!(readme.contains("Quick Start"));

    let developer = read(&dir, ".aider/prompts/developer.md");
    assert!(developer.contains("# EnokMethod Developer Role"));
    assert!(developer.contains("You are acting as the **developer**"));
    assert!(developer.contains(".enokMethod/CONTEXT.md"));
    assert!(developer.contains("## Context Files"));
    assert!(developer.contains("## Your Role"));
    assert!(developer.contains("## Workflow"));
}

#[test]
fn windsurf_adapter_generates_rules() {
    let dir = TempDir::new().unwrap();
    enok(&dir)
        .args(["init", "--adapter", "windsurf"])
        .assert()
        .success();

    let rules: Vec<_> = std::fs::read_dir(dir.path().join(".windsurf/rules"))
        .unwrap()
        .filter_map(|e| e.ok())
        .collect();
    assert_eq!(rules.len(), 6);
    assert!(dir.path().join(".windsurfrules").is_file());

    let readme = read(&dir, ".windsurf/README.md");
    assert!(readme.contains("Windsurf + EnokMethod"));
    assert!(readme.contains("Workflow"));

    let reviewer = read(&dir, ".windsurf/rules/reviewer.md");
    assert!(reviewer.contains("# Windsurf Rules - Reviewer Role"));
    assert!(reviewer.contains("## Core Context (ALWAYS READ FIRST)"));
    assert!(reviewer.contains("## Your Role"));
    assert!(reviewer.contains("## EnokMethod Commands"));
    assert!(reviewer.contains("## Rules of Engagement"));

    let tech_lead = read(&dir, ".windsurf/rules/tech-lead.md");
    assert!(tech_lead.contains("acting as the **tech-lead**"));
    assert!(tech_lead.contains("enok spec"));
}

#[test]
fn copilot_adapter_reframes_cursor_rules() {
    let dir = TempDir::new().unwrap();
    enok(&dir)
        .args(["init", "--adapter", "copilot"])
        .assert()
        .success();

    let instructions = read(&dir, ".github/copilot-instructions.md");
    assert!(instructions.contains("# GitHub Copilot Instructions"));
    assert!(!instructions.contains("# Cursor Rules"));
}

#[test]
fn gemini_and_antigravity_adapters_write_root_guides() {
    let dir = TempDir::new().unwrap();
    enok(&dir)
        .args(["init", "--adapter", "gemini"])
        .assert()
        .success();
    assert!(dir.path().join("GEMINI.md").is_file());

    let dir = TempDir::new().unwrap();
    enok(&dir)
        .args(["init", "--adapter", "antigravity"])
        .assert()
        .success();
    assert!(dir.path().join("AGENT.md").is_file());
}

#[test]
fn every_adapter_gets_the_core_structure() {
    for adapter in [
        "claude",
        "aider",
        "windsurf",
        "cursor",
        "copilot",
        "gemini",
        "antigravity",
    ] {
        let dir = TempDir::new().unwrap();
        enok(&dir)
            .args(["init", "--adapter", adapter])
            .assert()
            .success();

        assert!(dir.path().join(".enokMethod/CONTEXT.md").is_file());
        assert!(dir.path().join(".enokMethod/MEMORY.md").is_file());
        assert!(dir.path().join(".enokMethod/archive").is_dir());

        let prompts: Vec<_> = std::fs::read_dir(dir.path().join(".enokMethod/prompts"))
            .unwrap()
            .filter_map(|e| e.ok())
            .collect();
        assert_eq!(prompts.len(), 7, "adapter {adapter}");
    }
}

#[test]
fn unknown_adapter_is_rejected() {
    let dir = TempDir::new().unwrap();
    enok(&dir)
        .args(["init", "--adapter", "emacs"])
        .assert()
        .failure();
}

// ---------------------------------------------------------------------------
// version and help
// ---------------------------------------------------------------------------

#[test]
fn version_and_help() {
    let dir = TempDir::new().unwrap();
    enok(&dir).arg("--version").assert().success();

    enok(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("spec"))
        .stdout(predicate::str::contains("done"));
}
