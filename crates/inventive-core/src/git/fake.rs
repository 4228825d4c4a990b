//! In-memory `GitClient` for tests
//!
//! Clones write a small working tree (plus a `.git` directory) to disk so the
//! materializer's filesystem steps run for real; history lives in memory.

use super::GitClient;
use crate::error::{Result, ScaffoldError};
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GitCall {
    Clone { url: String, dest: PathBuf },
    Init(PathBuf),
    StageAll(PathBuf),
    Commit { dir: PathBuf, message: String },
}

#[derive(Debug, Default)]
struct FakeRepo {
    staged: bool,
    commits: Vec<String>,
}

#[derive(Debug, Default)]
struct FakeState {
    calls: Vec<GitCall>,
    repos: HashMap<PathBuf, FakeRepo>,
}

#[derive(Debug, Default)]
pub struct FakeGit {
    state: Mutex<FakeState>,
    missing: bool,
    fail_clone: Option<String>,
    fail_init: Option<String>,
    fail_commit: Option<String>,
}

impl FakeGit {
    pub fn new() -> Self {
        Self::default()
    }

    /// A client whose binary is not installed
    pub fn unavailable() -> Self {
        Self {
            missing: true,
            ..Self::default()
        }
    }

    pub fn failing_clone(message: &str) -> Self {
        Self {
            fail_clone: Some(message.to_string()),
            ..Self::default()
        }
    }

    pub fn failing_init(message: &str) -> Self {
        Self {
            fail_init: Some(message.to_string()),
            ..Self::default()
        }
    }

    pub fn failing_commit(message: &str) -> Self {
        Self {
            fail_commit: Some(message.to_string()),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<GitCall> {
        self.state.lock().unwrap().calls.clone()
    }

    /// Commit messages of the repository at `dir`, or `None` if never initialized
    pub fn commits(&self, dir: &Path) -> Option<Vec<String>> {
        self.state
            .lock()
            .unwrap()
            .repos
            .get(dir)
            .map(|repo| repo.commits.clone())
    }

    fn record(&self, call: GitCall) {
        self.state.lock().unwrap().calls.push(call);
    }
}

#[async_trait]
impl GitClient for FakeGit {
    async fn ensure_available(&self) -> Result<()> {
        if self.missing {
            return Err(ScaffoldError::Git("git is not installed".to_string()));
        }
        Ok(())
    }

    async fn clone_repo(&self, url: &str, dest: &Path) -> Result<()> {
        self.record(GitCall::Clone {
            url: url.to_string(),
            dest: dest.to_path_buf(),
        });
        if let Some(message) = &self.fail_clone {
            return Err(ScaffoldError::Clone(message.clone()));
        }

        let git_dir = dest.join(".git");
        std::fs::create_dir_all(&git_dir)
            .and_then(|_| std::fs::write(git_dir.join("HEAD"), "ref: refs/heads/main\n"))
            .and_then(|_| std::fs::write(dest.join("README.md"), format!("cloned from {url}\n")))
            .map_err(|e| ScaffoldError::Clone(e.to_string()))
    }

    async fn init_repo(&self, dir: &Path) -> Result<()> {
        self.record(GitCall::Init(dir.to_path_buf()));
        if let Some(message) = &self.fail_init {
            return Err(ScaffoldError::Git(message.clone()));
        }

        std::fs::create_dir_all(dir.join(".git"))
            .map_err(|e| ScaffoldError::Git(e.to_string()))?;
        self.state
            .lock()
            .unwrap()
            .repos
            .insert(dir.to_path_buf(), FakeRepo::default());
        Ok(())
    }

    async fn stage_all(&self, dir: &Path) -> Result<()> {
        self.record(GitCall::StageAll(dir.to_path_buf()));
        let mut state = self.state.lock().unwrap();
        let repo = state
            .repos
            .get_mut(dir)
            .ok_or_else(|| ScaffoldError::Git("not a git repository".to_string()))?;
        repo.staged = true;
        Ok(())
    }

    async fn commit(&self, dir: &Path, message: &str) -> Result<()> {
        self.record(GitCall::Commit {
            dir: dir.to_path_buf(),
            message: message.to_string(),
        });
        if let Some(message) = &self.fail_commit {
            return Err(ScaffoldError::Git(message.clone()));
        }

        let mut state = self.state.lock().unwrap();
        let repo = state
            .repos
            .get_mut(dir)
            .ok_or_else(|| ScaffoldError::Git("not a git repository".to_string()))?;
        if !repo.staged {
            return Err(ScaffoldError::Git("nothing added to commit".to_string()));
        }
        repo.staged = false;
        repo.commits.push(message.to_string());
        Ok(())
    }
}
