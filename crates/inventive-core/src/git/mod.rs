//! Version-control operations needed to materialize a template
//!
//! `GitClient` is the capability the materializer depends on. `ShellGit`
//! runs the `git` binary found on `PATH`; tests use an in-memory fake.

mod shell;

#[cfg(test)]
pub(crate) mod fake;

pub use shell::ShellGit;

use crate::error::Result;
use async_trait::async_trait;
use std::path::Path;

#[async_trait]
pub trait GitClient: Send + Sync {
    /// Fail with `ScaffoldError::Git` when the client cannot run at all
    async fn ensure_available(&self) -> Result<()> {
        Ok(())
    }

    /// Clone `url` into `dest`, which must not exist yet
    async fn clone_repo(&self, url: &str, dest: &Path) -> Result<()>;

    /// Create an empty repository in `dir`
    async fn init_repo(&self, dir: &Path) -> Result<()>;

    /// Stage every file in the working tree
    async fn stage_all(&self, dir: &Path) -> Result<()>;

    async fn commit(&self, dir: &Path, message: &str) -> Result<()>;
}
