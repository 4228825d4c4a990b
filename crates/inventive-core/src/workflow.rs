//! Scaffolding workflow: validate the target, fetch, select, materialize
//!
//! Every step returns a typed error to the caller; only the binary decides
//! what exit code a failure maps to.

use crate::catalog::CatalogProvider;
use crate::error::{Result, ScaffoldError};
use crate::git::GitClient;
use crate::materialize::{materialize, MaterializeOptions};
use crate::progress::{track, Progress, Step};
use crate::prompt::{collect_answers, AnswerSet, PromptOverrides, Prompter};
use std::path::{Component, Path, PathBuf};
use tracing::{debug, info};

/// What the operator asked for on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldRequest {
    pub project_name: String,
    /// Absolute path of the project directory
    pub target_dir: PathBuf,
    /// Delete an existing target directory instead of refusing
    pub force: bool,
    /// Create a fresh initial commit after re-init
    pub commit: bool,
}

impl ScaffoldRequest {
    /// Resolve `project_name` against `cwd`
    ///
    /// The name must stay below `cwd`: absolute paths and `..` are rejected,
    /// since `--force` deletes whatever the target resolves to.
    pub fn new(project_name: &str, cwd: &Path, force: bool, commit: bool) -> Result<Self> {
        let trimmed = project_name.trim();
        if trimmed.is_empty() {
            return Err(ScaffoldError::Validation(
                "Project name must not be empty".to_string(),
            ));
        }

        let relative = Path::new(trimmed);
        let escapes = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if escapes || !relative.components().any(|c| matches!(c, Component::Normal(_))) {
            return Err(ScaffoldError::Validation(format!(
                "Project name '{}' must be a directory name inside the current directory",
                trimmed
            )));
        }

        Ok(Self {
            project_name: trimmed.to_string(),
            target_dir: cwd.join(trimmed),
            force,
            commit,
        })
    }
}

/// Result of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldOutcome {
    pub target_dir: PathBuf,
    pub answers: AnswerSet,
    pub committed: bool,
}

/// Check the target without touching it
///
/// Returns whether it exists; an existing target without `force` is a
/// `TargetExists` conflict.
pub async fn check_target(request: &ScaffoldRequest) -> Result<bool> {
    let target = &request.target_dir;
    let exists = tokio::fs::try_exists(target)
        .await
        .map_err(|e| ScaffoldError::io(format!("Failed to inspect {}", target.display()), e))?;

    if exists && !request.force {
        return Err(ScaffoldError::TargetExists {
            path: target.clone(),
        });
    }
    Ok(exists)
}

/// Make sure cloning can start
///
/// Returns whether an existing directory was removed. Without `force` an
/// existing target is left untouched and reported as `TargetExists`.
pub async fn prepare_target(request: &ScaffoldRequest) -> Result<bool> {
    if !check_target(request).await? {
        return Ok(false);
    }
    remove_target(&request.target_dir).await?;
    Ok(true)
}

async fn remove_target(target: &Path) -> Result<()> {
    info!(path = %target.display(), "removing existing target directory");
    let removal = if tokio::fs::metadata(target)
        .await
        .map(|m| m.is_dir())
        .unwrap_or(false)
    {
        tokio::fs::remove_dir_all(target).await
    } else {
        tokio::fs::remove_file(target).await
    };
    removal.map_err(|e| ScaffoldError::io(format!("Failed to remove {}", target.display()), e))
}

/// Ties the collaborators of one run together
pub struct Scaffolder<'a, C: ?Sized, G: ?Sized> {
    pub catalog: &'a C,
    pub git: &'a G,
    pub commit_message: &'a str,
}

impl<'a, C, G> Scaffolder<'a, C, G>
where
    C: CatalogProvider + ?Sized,
    G: GitClient + ?Sized,
{
    pub fn new(catalog: &'a C, git: &'a G, commit_message: &'a str) -> Self {
        Self {
            catalog,
            git,
            commit_message,
        }
    }

    /// Run the whole flow for `request`
    ///
    /// The target directory is checked before anything else, so a conflict
    /// never reaches the network. A forced target is only removed once the
    /// git client is known to work.
    pub async fn run<P: Prompter + ?Sized>(
        &self,
        request: &ScaffoldRequest,
        prompter: &mut P,
        overrides: &PromptOverrides,
        progress: &dyn Progress,
    ) -> Result<ScaffoldOutcome> {
        let exists = check_target(request).await?;
        self.git.ensure_available().await?;

        if exists {
            debug!(path = %request.target_dir.display(), "overwriting existing directory");
            remove_target(&request.target_dir).await?;
        }

        let catalog = track(progress, Step::FetchCatalog, self.catalog.fetch_catalog()).await?;
        debug!(templates = catalog.len(), "catalog loaded");

        let answers = collect_answers(&catalog, prompter, overrides)?;

        let options = MaterializeOptions {
            create_commit: request.commit,
            commit_message: self.commit_message,
        };
        materialize(
            self.git,
            &answers.clone_url,
            &request.target_dir,
            options,
            progress,
        )
        .await?;

        Ok(ScaffoldOutcome {
            target_dir: request.target_dir.clone(),
            answers,
            committed: request.commit,
        })
    }
}
