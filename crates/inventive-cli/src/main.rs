//! inventive CLI - create projects from inventive starter templates

use clap::{ArgAction, CommandFactory, FromArgMatches, Parser, Subcommand};
use colored::Colorize;
use inventive_core::tui::CreateArgs;
use inventive_core::{ProductConfig, ProjectKind, ScaffoldError};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding the tracing filter
const LOG_ENV: &str = "INVENTIVE_LOG";

/// inventive product configuration
#[derive(Clone)]
pub struct InventiveConfig;

impl ProductConfig for InventiveConfig {
    fn name(&self) -> &'static str {
        "inventive"
    }

    fn display_name(&self) -> &'static str {
        "inventive"
    }

    fn default_catalog_url(&self) -> &'static str {
        "https://api.github.com/users/inventiveliu/repos"
    }

    fn catalog_url_env(&self) -> &'static str {
        "INVENTIVE_CATALOG_URL"
    }

    // GitHub requires a user agent; this is the one the catalog has always been queried with
    fn user_agent(&self) -> &'static str {
        "nodejs"
    }

    fn commit_message(&self) -> &'static str {
        inventive_core::DEFAULT_COMMIT_MESSAGE
    }

    fn cli_description(&self) -> &'static str {
        "create a new project from an inventive template"
    }

    fn next_steps(&self, dir: &Path) -> Vec<String> {
        let mut steps = Vec::new();
        let current = std::env::current_dir().ok();

        if current.as_deref() != Some(dir) {
            steps.push(format!("cd {}", dir.display()));
        }

        steps.push("Open README.md to see how to start coding".to_string());

        steps
    }
}

#[derive(Parser, Debug)]
#[command(name = "inventive")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// create a new project
    Create(CliCreateArgs),
}

#[derive(Parser, Debug)]
pub struct CliCreateArgs {
    /// Name of the project directory to create
    #[arg(value_name = "PROJECT_NAME")]
    pub project_name: String,

    /// overwrite directory if exist
    #[arg(short, long)]
    pub force: bool,

    /// do not commit when re-init git
    #[arg(long = "no-commit", action = ArgAction::SetFalse)]
    pub commit: bool,

    /// Local JSON catalog to use instead of querying GitHub (for development use)
    #[arg(long = "catalog-file")]
    pub catalog_file: Option<PathBuf>,

    /// Project kind (application or library)
    #[arg(short, long)]
    pub kind: Option<ProjectKind>,

    /// Template repository name to use (e.g. application-react)
    #[arg(short, long)]
    pub template: Option<String>,

    /// Answer yes to the TypeScript question
    #[arg(long, conflicts_with = "no_typescript")]
    pub typescript: bool,

    /// Answer no to the TypeScript question
    #[arg(long = "no-typescript")]
    pub no_typescript: bool,

    /// Accept the default answer of every prompt (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,
}

impl From<CliCreateArgs> for CreateArgs {
    fn from(args: CliCreateArgs) -> Self {
        let typescript = match (args.typescript, args.no_typescript) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        };
        CreateArgs {
            project_name: args.project_name,
            force: args.force,
            commit: args.commit,
            catalog_file: args.catalog_file,
            kind: args.kind,
            template: args.template,
            typescript,
            yes: args.yes,
        }
    }
}

/// Command definition with the product's description attached
fn cli<C: ProductConfig>(config: &C) -> clap::Command {
    Args::command().about(config.cli_description())
}

fn init_logging() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var(LOG_ENV).unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Print a failure the way the operator should see it
fn report(err: &ScaffoldError) {
    if err.is_warning() {
        eprintln!("{}", err.to_string().yellow());
    } else {
        eprintln!("{}", err.to_string().red());
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let config = InventiveConfig;
    let args = Args::from_arg_matches(&cli(&config).get_matches()).unwrap_or_else(|e| e.exit());
    init_logging();

    let result = match args.command {
        Command::Create(create_args) => inventive_core::run(&config, create_args.into()).await,
    };

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            report(&e);
            ExitCode::FAILURE
        }
    }
}
