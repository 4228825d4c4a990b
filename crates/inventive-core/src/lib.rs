//! Inventive Core - scaffolding projects from GitHub-hosted templates
//!
//! Given a project name, the library fetches the template catalog from a
//! GitHub repository listing, lets the operator pick a template, clones it,
//! strips its history and optionally commits a fresh start.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - catalog fetching, the question sequence,
//!   git operations and materialization
//! - **Layer 2: Workflow Orchestration** - `ProductConfig` trait and `Scaffolder`
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use inventive_core::{CatalogFetcher, ScaffoldRequest, Scaffolder, ShellGit};
//!
//! let fetcher = CatalogFetcher::from_config(&MyConfig)?;
//! let git = ShellGit::default();
//! let request = ScaffoldRequest::new("my-app", &cwd, false, true)?;
//! let outcome = Scaffolder::new(&fetcher, &git, "initial commit")
//!     .run(&request, &mut my_prompter, &PromptOverrides::default(), &())
//!     .await?;
//! ```

pub mod catalog;
pub mod error;
pub mod git;
pub mod materialize;
pub mod product;
pub mod progress;
pub mod prompt;
pub mod workflow;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use catalog::{
    Catalog, CatalogFetcher, CatalogProvider, CatalogSource, ProjectKind, TemplateEntry,
};
pub use error::{Result, ScaffoldError};
pub use git::{GitClient, ShellGit};
pub use materialize::{materialize, MaterializeOptions, DEFAULT_COMMIT_MESSAGE};
pub use product::ProductConfig;
pub use progress::{Progress, Step};
pub use prompt::{collect_answers, AnswerSet, Choice, PromptOverrides, Prompter};
pub use workflow::{check_target, prepare_target, ScaffoldOutcome, ScaffoldRequest, Scaffolder};

#[cfg(feature = "tui")]
pub use tui::run;
