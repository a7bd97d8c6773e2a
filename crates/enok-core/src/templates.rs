//! Embedded markdown templates.
//!
//! All scaffolding content ships inside the binary; nothing is loaded from
//! an installation directory at runtime.

/// The goal placeholder replaced by the `spec` command.
pub const GOAL_PLACEHOLDER: &str = "[Clear, one-sentence goal of this task]";

/// The title placeholder replaced by the `prd` command.
pub const PRD_TITLE_PLACEHOLDER: &str = "[Product name]";

/// The six workflow roles, in the order adapters generate them.
pub const ROLES: &[&str] = &[
    "architect",
    "tech-lead",
    "developer",
    "reviewer",
    "documenter",
    "debugger",
];

/// Prompt files seeded into `.enokMethod/prompts/` at init: the six role
/// prompts plus the product-requirements prompt.
pub const PROMPT_FILES: &[(&str, &str)] = &[
    ("architect", ARCHITECT_PROMPT),
    ("tech-lead", TECH_LEAD_PROMPT),
    ("developer", DEVELOPER_PROMPT),
    ("reviewer", REVIEWER_PROMPT),
    ("documenter", DOCUMENTER_PROMPT),
    ("debugger", DEBUGGER_PROMPT),
    ("prd", PRD_PROMPT),
];

/// Look up a role prompt body by role name.
pub fn role_prompt(name: &str) -> Option<&'static str> {
    PROMPT_FILES
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, body)| *body)
}

// ---------------------------------------------------------------------------
// Core documents
// ---------------------------------------------------------------------------

pub const CONTEXT_TEMPLATE: &str = r#"# Project Context

Single source of truth for how this project is built. Keep it short and
current — every role prompt reads this file first.

## 1. Project Overview

[One paragraph: what this project is and who it is for]

## 2. Tech Stack

- **Language**: [Not detected]
- **Framework**: [Not detected]
- **Styling**: [Not detected]
- **Database**: [Not detected]
- **State Mgmt**: [Not detected]
- **Testing**: [Not detected]

## 3. Core Architecture

[Key components and how data flows between them]

## 4. Coding Conventions

[Naming, file layout, formatting, and style rules to follow]

## 5. Rules of Engagement

- Read this file and CURRENT_SPEC.md before writing any code.
- Work only on requirements listed in the active specification.
- Mark a requirement done (`- [x]`) only after it is implemented and tested.
- Finish a task with `enok done "<name>"` so it is archived and logged.
"#;

pub const MEMORY_TEMPLATE: &str = r#"# Project Memory

Long-term memory for this project: what is in flight, what was decided,
and what has shipped. Completion entries are appended automatically.

## 1. Active Focus

[What is being worked on right now]

## 2. Key Decisions

[Record important technical decisions and their reasoning here]

## 3. Completed Work
"#;

pub const SPEC_TEMPLATE: &str = r#"# Specification

## 1. Objective

**Goal**: [Clear, one-sentence goal of this task]

## 2. Detailed Requirements

- [ ] [Requirement 1]
- [ ] [Requirement 2]

## 3. Technical Impact

[Files, modules, and data structures this task will touch]

## 4. Acceptance Criteria

[How we know this task is finished]

## 5. Implementation Plan

[Ordered steps to get from here to done]
"#;

pub const PRD_TEMPLATE: &str = r#"# Product Requirements

**Product**: [Product name]

## 1. Problem

[What user problem this product solves]

## 2. Target Users

[Who will use this and in what situation]

## 3. Core Features

- [ ] [Feature 1]
- [ ] [Feature 2]

## 4. Out of Scope

[What this product deliberately does not do]

## 5. Success Metrics

[How we measure whether the product works]
"#;

// ---------------------------------------------------------------------------
// Role prompts
// ---------------------------------------------------------------------------

const ARCHITECT_PROMPT: &str = r#"# Architect

You design the solution before any code is written.

## Context Files

Read `.enokMethod/CONTEXT.md` for the tech stack and conventions, and
`.enokMethod/MEMORY.md` for past decisions, before proposing anything.

## Your Role

- Turn a rough idea into a concrete specification with clear requirements.
- Choose the simplest design that fits the existing architecture.
- Call out technical risks and open questions explicitly.

## Workflow

1. Start a task with `enok spec "<title>"`.
2. Fill in CURRENT_SPEC.md: goal, requirements, technical impact.
3. Hand off to the tech-lead for planning.
"#;

const TECH_LEAD_PROMPT: &str = r#"# Tech Lead

You turn an approved specification into an ordered implementation plan.

## Context Files

Read `.enokMethod/CONTEXT.md` and the active `CURRENT_SPEC.md` first.

## Your Role

- Break requirements into small, independently verifiable steps.
- Order the steps so the project builds and tests pass after each one.
- Keep the plan inside the Implementation Plan section of the spec.

## Workflow

1. Review the requirements checklist in CURRENT_SPEC.md.
2. Write the implementation plan as ordered steps.
3. Hand off to the developer; check progress with `enok plan`.
"#;

const DEVELOPER_PROMPT: &str = r#"# Developer

You implement the active specification, one requirement at a time.

## Context Files

Read `.enokMethod/CONTEXT.md` for conventions and `CURRENT_SPEC.md` for
the requirements before touching code.

## Your Role

- Implement exactly what the active specification asks for, nothing more.
- Follow the coding conventions in the context document.
- Mark each requirement `- [x]` in CURRENT_SPEC.md as you finish it.

## Workflow

1. Run `enok dev` to see the goal and pending requirements.
2. Implement the next unchecked requirement and its tests.
3. When everything is checked, run `enok done "<name>"`.
"#;

const REVIEWER_PROMPT: &str = r#"# Reviewer

You review finished work against the specification before it is archived.

## Context Files

Read `CURRENT_SPEC.md` for what was promised and `.enokMethod/CONTEXT.md`
for the conventions the code must follow.

## Your Role

- Verify every checked requirement is actually implemented and tested.
- Flag deviations from the context document's conventions.
- Reject work that silently expands scope beyond the specification.

## Workflow

1. Run `enok status` to see the active goal.
2. Compare the diff against the requirements checklist.
3. Approve, or list concrete findings for the developer.
"#;

const DOCUMENTER_PROMPT: &str = r#"# Documenter

You keep the project's written knowledge current.

## Context Files

Read `.enokMethod/CONTEXT.md` and `.enokMethod/MEMORY.md`; both are
documents you maintain.

## Your Role

- Update the context document when the stack or architecture changes.
- Record significant decisions in the Key Decisions section of memory.
- Generate user-facing docs with `enok docs` and keep them accurate.

## Workflow

1. After each completed task, check whether CONTEXT.md is still true.
2. Refresh README and changelog with `enok docs`.
3. Keep entries short; link to code instead of duplicating it.
"#;

pub const DEBUGGER_PROMPT: &str = r#"# Debugger

You find root causes; you do not patch symptoms.

## Context Files

Read `.enokMethod/CONTEXT.md` for the architecture and `CURRENT_SPEC.md`
for what the code is supposed to do.

## Your Role

- Reproduce the issue before changing anything.
- Trace the failure to its root cause; explain the chain of events.
- Propose the smallest fix that addresses the cause, plus a regression test.

## Workflow

1. Run `enok debug "<issue>"` to frame the investigation.
2. Reproduce, bisect, and identify the faulty component.
3. Document the root cause in the fix description.
"#;

const PRD_PROMPT: &str = r#"# Product Requirements

You define what to build before anyone decides how to build it.

## Context Files

Read `.enokMethod/CONTEXT.md` for what already exists and
`.enokMethod/MEMORY.md` for what has shipped.

## Your Role

- Describe the user problem, not the implementation.
- Keep the feature list small enough to ship.
- Make the out-of-scope section as explicit as the feature list.

## Workflow

1. Run `enok prd "<title>"` to create CURRENT_PRD.md.
2. Fill in problem, users, features, and success metrics.
3. Hand off to the architect to turn features into specifications.
"#;
