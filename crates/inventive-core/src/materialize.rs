//! Turn a selected template into a fresh, history-less project directory
//!
//! The steps run strictly in order: clone, strip `.git`, re-init, and an
//! optional initial commit. Nothing is rolled back when a later step fails,
//! so a failed re-init leaves a clone without history behind.

use crate::error::{Result, ScaffoldError};
use crate::git::GitClient;
use crate::progress::{track, Progress, Step};
use std::path::Path;
use tracing::{debug, info};

/// Commit message used when the product does not configure its own
pub const DEFAULT_COMMIT_MESSAGE: &str = "init project using inventive-cli";

#[derive(Debug, Clone, Copy)]
pub struct MaterializeOptions<'a> {
    /// Create one commit containing every file of the template
    pub create_commit: bool,
    pub commit_message: &'a str,
}

impl Default for MaterializeOptions<'_> {
    fn default() -> Self {
        Self {
            create_commit: true,
            commit_message: DEFAULT_COMMIT_MESSAGE,
        }
    }
}

pub async fn materialize<G: GitClient + ?Sized>(
    git: &G,
    clone_url: &str,
    target_dir: &Path,
    options: MaterializeOptions<'_>,
    progress: &dyn Progress,
) -> Result<()> {
    info!(url = clone_url, target = %target_dir.display(), "materializing template");

    track(progress, Step::Clone, git.clone_repo(clone_url, target_dir)).await?;

    track(progress, Step::Reinit, async {
        strip_history(target_dir).await?;
        git.init_repo(target_dir).await?;

        if options.create_commit {
            git.stage_all(target_dir).await?;
            git.commit(target_dir, options.commit_message).await?;
            debug!(message = options.commit_message, "created initial commit");
        }
        Ok::<(), ScaffoldError>(())
    })
    .await
}

/// Remove the template's version-control metadata
async fn strip_history(target_dir: &Path) -> Result<()> {
    let git_dir = target_dir.join(".git");
    match tokio::fs::remove_dir_all(&git_dir).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %git_dir.display(), "no history to strip");
            Ok(())
        }
        Err(e) => Err(ScaffoldError::Git(format!(
            "failed to remove {}: {}",
            git_dir.display(),
            e
        ))),
    }
}
