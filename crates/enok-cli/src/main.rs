mod adapters;
mod cmd;
mod output;
mod root;

use adapters::AdapterKind;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "enok",
    about = "Context-first spec-driven development: scaffold the workflow, track one spec at a time",
    version,
    propagate_version = true
)]
struct Cli {
    /// Project root (default: auto-detect from .enokMethod/ or .git/)
    #[arg(long, global = true, env = "ENOK_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the workflow in the current project
    Init {
        /// Assistant-tool adapter to scaffold
        #[arg(long, short = 'a', value_enum, default_value = "cursor")]
        adapter: AdapterKind,
    },

    /// Create a new specification
    Spec { title: String },

    /// Finish the active specification and archive it
    Done { name: String },

    /// Show project status
    Status,

    /// List archived specifications
    List {
        /// Limit number of results
        #[arg(long, short = 'l', default_value_t = 10)]
        limit: usize,

        /// Search in spec names
        #[arg(long, short = 's')]
        search: Option<String>,
    },

    /// Show the project context document
    Context,

    /// Show the project memory log
    Memory,

    /// Validate the workflow structure
    Validate,

    /// Propose a conventional commit message from the active spec
    Commit {
        /// Use this message instead of deriving one from the spec
        #[arg(long, short = 'm')]
        message: Option<String>,

        /// Append --no-verify to the proposed git command
        #[arg(long)]
        no_verify: bool,
    },

    /// Show the developer briefing for the active spec
    Dev,

    /// Show checklist progress for the active spec
    Plan,

    /// Frame a debugging session for an issue
    Debug { issue: String },

    /// Generate README and changelog from context and memory
    Docs {
        /// Generate README.md only
        #[arg(long)]
        readme: bool,

        /// Generate CHANGELOG.md only
        #[arg(long)]
        changelog: bool,
    },

    /// Create a product requirements document
    Prd { title: Option<String> },
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .init();

    let root = root::resolve_root(cli.root.as_deref());

    let result = match cli.command {
        Commands::Init { adapter } => cmd::init::run(&root, adapter),
        Commands::Spec { title } => cmd::spec::run(&root, &title),
        Commands::Done { name } => cmd::done::run(&root, &name),
        Commands::Status => cmd::status::run(&root, cli.json),
        Commands::List { limit, search } => cmd::list::run(&root, limit, search.as_deref(), cli.json),
        Commands::Context => cmd::context::run(&root),
        Commands::Memory => cmd::memory::run(&root),
        Commands::Validate => cmd::validate::run(&root),
        Commands::Commit { message, no_verify } => cmd::commit::run(&root, message, no_verify),
        Commands::Dev => cmd::dev::run(&root),
        Commands::Plan => cmd::plan::run(&root),
        Commands::Debug { issue } => cmd::debug::run(&root, &issue),
        Commands::Docs { readme, changelog } => cmd::docs::run(&root, readme, changelog),
        Commands::Prd { title } => cmd::prd::run(&root, title.as_deref()),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
