use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

// ---------------------------------------------------------------------------
// StackProfile
// ---------------------------------------------------------------------------

/// The technology choices inferred from a project's manifest files.
/// Every field is optional; an absent field means no rule matched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StackProfile {
    pub language: Option<String>,
    pub framework: Option<String>,
    pub styling: Option<String>,
    pub database: Option<String>,
    pub state: Option<String>,
    pub testing: Option<String>,
}

impl StackProfile {
    pub fn is_empty(&self) -> bool {
        self.language.is_none()
            && self.framework.is_none()
            && self.styling.is_none()
            && self.database.is_none()
            && self.state.is_none()
            && self.testing.is_none()
    }
}

// ---------------------------------------------------------------------------
// Rule tables
// ---------------------------------------------------------------------------

/// `(probe, label)` pairs. Probes are dependency keys for package.json
/// and content substrings for the other manifests. Tables are scanned in
/// order and the first match wins; later rules in the same category are
/// not evaluated once one matches.
type Rule = (&'static str, &'static str);

const JS_FRAMEWORKS: &[Rule] = &[
    ("next", "Next.js"),
    ("react", "React"),
    ("vue", "Vue.js"),
    ("nuxt", "Nuxt.js"),
    ("express", "Express.js"),
    ("nest", "NestJS"),
    ("@angular/core", "Angular"),
    ("svelte", "Svelte"),
];

const JS_STYLING: &[Rule] = &[
    ("tailwindcss", "Tailwind CSS"),
    ("bootstrap", "Bootstrap"),
    ("styled-components", "Styled Components"),
    ("sass", "Sass"),
    ("scss", "Sass"),
];

const JS_DATABASES: &[Rule] = &[
    ("prisma", "Prisma"),
    ("mongoose", "Mongoose (MongoDB)"),
    ("pg", "PostgreSQL (pg)"),
    ("firebase", "Firebase"),
    ("@supabase/supabase-js", "Supabase"),
];

const JS_STATE: &[Rule] = &[
    ("redux", "Redux"),
    ("@reduxjs/toolkit", "Redux"),
    ("zustand", "Zustand"),
    ("pinia", "Pinia"),
    ("recoil", "Recoil"),
];

const JS_TESTING: &[Rule] = &[
    ("jest", "Jest"),
    ("vitest", "Vitest"),
    ("cypress", "Cypress"),
    ("playwright", "Playwright"),
];

const PY_FRAMEWORKS: &[Rule] = &[
    ("django", "Django"),
    ("fastapi", "FastAPI"),
    ("flask", "Flask"),
];

const PY_DATABASES: &[Rule] = &[("sqlalchemy", "SQLAlchemy")];

const PY_TESTING: &[Rule] = &[("pytest", "pytest")];

const GO_FRAMEWORKS: &[Rule] = &[
    ("gin-gonic", "Gin"),
    ("gofiber", "Fiber"),
    ("echo", "Echo"),
];

const GO_DATABASES: &[Rule] = &[("gorm", "GORM"), ("sqlx", "sqlx")];

const JAVA_FRAMEWORKS: &[Rule] = &[("spring-boot", "Spring Boot")];

const JAVA_DATABASES: &[Rule] = &[("hibernate", "Hibernate")];

const JAVA_TESTING: &[Rule] = &[("junit", "JUnit")];

// ---------------------------------------------------------------------------
// Detection
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
struct PackageManifest {
    #[serde(default)]
    dependencies: BTreeMap<String, String>,
    #[serde(default, rename = "devDependencies")]
    dev_dependencies: BTreeMap<String, String>,
}

/// Inspect manifest files under `dir` and return the inferred stack.
///
/// Never fails: read and parse errors abort detection and return whatever
/// was accumulated so far. Ecosystems are mutually exclusive; the first
/// manifest type found short-circuits the rest, even when several
/// manifest types coexist in the directory.
pub fn detect_stack(dir: &Path) -> StackProfile {
    let mut profile = StackProfile::default();

    if dir.join("package.json").is_file() {
        detect_node(dir, &mut profile);
    } else if dir.join("requirements.txt").is_file() || dir.join("pyproject.toml").is_file() {
        detect_python(dir, &mut profile);
    } else if dir.join("go.mod").is_file() {
        detect_go(dir, &mut profile);
    } else if dir.join("pom.xml").is_file() || dir.join("build.gradle").is_file() {
        detect_java(dir, &mut profile);
    }

    profile
}

fn detect_node(dir: &Path, profile: &mut StackProfile) {
    // A malformed manifest aborts the whole detection: the JS branch was
    // already selected, so other ecosystems are not consulted.
    let Ok(raw) = std::fs::read_to_string(dir.join("package.json")) else {
        return;
    };
    let Ok(manifest) = serde_json::from_str::<PackageManifest>(&raw) else {
        return;
    };

    // Production entries first, dev entries merged on top.
    let mut deps = manifest.dependencies;
    deps.extend(manifest.dev_dependencies);

    profile.language = Some(if deps.contains_key("typescript") {
        "TypeScript".to_string()
    } else {
        "JavaScript".to_string()
    });

    let has_key = |key: &str| deps.contains_key(key);
    profile.framework = first_match(JS_FRAMEWORKS, has_key);
    profile.styling = first_match(JS_STYLING, has_key);
    profile.database = first_match(JS_DATABASES, has_key);
    profile.state = first_match(JS_STATE, has_key);
    profile.testing = first_match(JS_TESTING, has_key);
}

fn detect_python(dir: &Path, profile: &mut StackProfile) {
    profile.language = Some("Python".to_string());

    // requirements.txt is preferred over pyproject.toml.
    let manifest = if dir.join("requirements.txt").is_file() {
        dir.join("requirements.txt")
    } else {
        dir.join("pyproject.toml")
    };
    let Ok(content) = std::fs::read_to_string(&manifest) else {
        return;
    };
    let content = content.to_lowercase();

    let has_substr = |probe: &str| content.contains(probe);
    profile.framework = first_match(PY_FRAMEWORKS, has_substr);
    profile.database = first_match(PY_DATABASES, has_substr);
    profile.testing = first_match(PY_TESTING, has_substr);
}

fn detect_go(dir: &Path, profile: &mut StackProfile) {
    profile.language = Some("Go".to_string());

    let Ok(content) = std::fs::read_to_string(dir.join("go.mod")) else {
        return;
    };

    let has_substr = |probe: &str| content.contains(probe);
    profile.framework = first_match(GO_FRAMEWORKS, has_substr);
    profile.database = first_match(GO_DATABASES, has_substr);
}

fn detect_java(dir: &Path, profile: &mut StackProfile) {
    profile.language = Some("Java".to_string());

    // pom.xml is preferred over build.gradle.
    let manifest = if dir.join("pom.xml").is_file() {
        dir.join("pom.xml")
    } else {
        dir.join("build.gradle")
    };
    let Ok(content) = std::fs::read_to_string(&manifest) else {
        return;
    };

    let has_substr = |probe: &str| content.contains(probe);
    profile.framework = first_match(JAVA_FRAMEWORKS, has_substr);
    profile.database = first_match(JAVA_DATABASES, has_substr);
    profile.testing = first_match(JAVA_TESTING, has_substr);
}

fn first_match(rules: &[Rule], mut probe: impl FnMut(&str) -> bool) -> Option<String> {
    rules
        .iter()
        .find(|&&(key, _)| probe(key))
        .map(|&(_, label)| label.to_string())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
