//! Charm-style CLI prompts using cliclack

use super::spinner::SpinnerProgress;
use crate::catalog::{CatalogFetcher, ProjectKind};
use crate::error::{Result, ScaffoldError};
use crate::git::ShellGit;
use crate::product::ProductConfig;
use crate::prompt::{Choice, PromptOverrides, Prompter};
use crate::workflow::{ScaffoldOutcome, ScaffoldRequest, Scaffolder};
use colored::Colorize;
use std::io;
use std::path::PathBuf;

/// CLI arguments for the create command
#[derive(Debug, Clone)]
pub struct CreateArgs {
    /// Name of the project directory, relative to the working directory
    pub project_name: String,

    /// Overwrite the project directory if it exists
    pub force: bool,

    /// Commit the template files after re-initializing git
    pub commit: bool,

    /// Local catalog file to use instead of querying GitHub
    pub catalog_file: Option<PathBuf>,

    pub kind: Option<ProjectKind>,

    /// Template repository name to use
    pub template: Option<String>,

    pub typescript: Option<bool>,

    /// Accept the default answer of every prompt (non-interactive mode)
    pub yes: bool,
}

impl CreateArgs {
    pub fn new(project_name: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
            force: false,
            commit: true,
            catalog_file: None,
            kind: None,
            template: None,
            typescript: None,
            yes: false,
        }
    }

    fn overrides(&self) -> PromptOverrides {
        PromptOverrides {
            kind: self.kind,
            template: self.template.clone(),
            typescript: self.typescript,
            accept_defaults: self.yes,
        }
    }
}

/// Map terminal failures; Ctrl+C or Esc inside a prompt means cancel
fn prompt_error(e: io::Error) -> ScaffoldError {
    if e.kind() == io::ErrorKind::Interrupted {
        ScaffoldError::Cancelled
    } else {
        ScaffoldError::io("Terminal prompt failed", e)
    }
}

/// `Prompter` rendering cliclack select and confirm prompts
#[derive(Debug, Default, Clone, Copy)]
pub struct CliclackPrompter;

impl Prompter for CliclackPrompter {
    fn select(&mut self, message: &str, choices: &[Choice], default: usize) -> Result<usize> {
        // Use indices so values stay cheap to compare
        let mut select = cliclack::select(message);
        for (idx, choice) in choices.iter().enumerate() {
            select = select.item(idx, &choice.label, &choice.hint);
        }
        select.initial_value(default).interact().map_err(prompt_error)
    }

    fn confirm(&mut self, message: &str, default: bool) -> Result<bool> {
        cliclack::confirm(message)
            .initial_value(default)
            .interact()
            .map_err(prompt_error)
    }
}

/// Run the CLI with interactive prompts
pub async fn run<C: ProductConfig>(config: &C, args: CreateArgs) -> Result<ScaffoldOutcome> {
    cliclack::intro(config.display_name()).map_err(prompt_error)?;

    let cwd = std::env::current_dir()
        .map_err(|e| ScaffoldError::io("Failed to read the current directory", e))?;
    let request = ScaffoldRequest::new(&args.project_name, &cwd, args.force, args.commit)?;

    let git = ShellGit::default();
    let fetcher = setup_fetcher(config, &args.catalog_file)?;
    let mut prompter = CliclackPrompter;
    let progress = SpinnerProgress::default();

    let outcome = Scaffolder::new(&fetcher, &git, config.commit_message())
        .run(&request, &mut prompter, &args.overrides(), &progress)
        .await?;

    report_outcome(&outcome)?;
    print_next_steps(config, &outcome)?;

    Ok(outcome)
}

fn setup_fetcher<C: ProductConfig>(
    config: &C,
    catalog_file: &Option<PathBuf>,
) -> Result<CatalogFetcher> {
    let fetcher = match catalog_file {
        Some(path) => {
            cliclack::log::info(format!("Using local catalog from {}", path.display()))
                .map_err(prompt_error)?;
            CatalogFetcher::from_local(path.clone(), config)
        }
        None => CatalogFetcher::from_config(config)?,
    };

    Ok(fetcher)
}

fn report_outcome(outcome: &ScaffoldOutcome) -> Result<()> {
    let answers = &outcome.answers;
    cliclack::log::info(format!(
        "Created {} from {}",
        answers.project_kind, answers.clone_url
    ))
    .map_err(prompt_error)?;

    if answers.use_typescript {
        cliclack::log::info("TypeScript preferred: see the template README for its setup")
            .map_err(prompt_error)?;
    }

    if !outcome.committed {
        cliclack::log::info("Skipped the initial commit (--no-commit)").map_err(prompt_error)?;
    }

    Ok(())
}

fn print_next_steps<C: ProductConfig>(config: &C, outcome: &ScaffoldOutcome) -> Result<()> {
    let steps = config.next_steps(&outcome.target_dir);

    println!();
    println!("  Next steps");
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    cliclack::outro(
        "All done! Open your project and read README.md to see how to start coding".green(),
    )
    .map_err(prompt_error)?;

    Ok(())
}
