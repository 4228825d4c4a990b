//! `GitClient` backed by the `git` command-line client

use super::GitClient;
use crate::error::{Result, ScaffoldError};
use async_trait::async_trait;
use std::path::Path;
use std::process::{Output, Stdio};
use tokio::process::Command;
use tracing::debug;

/// Runs `git` as a subprocess, capturing its output
#[derive(Debug, Clone)]
pub struct ShellGit {
    program: String,
    /// `-c key=value` pairs passed before every subcommand
    config: Vec<(String, String)>,
}

impl Default for ShellGit {
    fn default() -> Self {
        Self::new("git")
    }
}

impl ShellGit {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            config: Vec::new(),
        }
    }

    /// Override a git configuration value for every command this client runs
    pub fn with_config(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.push((key.into(), value.into()));
        self
    }

    /// Check if the client is installed and runnable
    pub fn is_available(&self) -> bool {
        std::process::Command::new(&self.program)
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|status| status.success())
            .unwrap_or(false)
    }

    /// Get the installed client version (if available)
    pub fn version(&self) -> Option<String> {
        std::process::Command::new(&self.program)
            .arg("--version")
            .output()
            .ok()
            .filter(|output| output.status.success())
            .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    async fn run(&self, dir: Option<&Path>, args: &[&str]) -> std::io::Result<Output> {
        let mut cmd = Command::new(&self.program);
        if let Some(dir) = dir {
            cmd.current_dir(dir);
        }
        for (key, value) in &self.config {
            cmd.arg("-c").arg(format!("{}={}", key, value));
        }
        cmd.args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        debug!(program = %self.program, ?args, "running");
        cmd.output().await
    }

    /// Run a command inside `dir`, mapping every failure to `ScaffoldError::Git`
    async fn run_in(&self, dir: &Path, args: &[&str]) -> Result<()> {
        let output = self
            .run(Some(dir), args)
            .await
            .map_err(|e| ScaffoldError::Git(format!("failed to run {}: {}", self.program, e)))?;
        check_status(&output).map_err(|detail| {
            ScaffoldError::Git(format!("{} {} failed: {}", self.program, args[0], detail))
        })
    }
}

/// Turn a non-zero exit into the client's diagnostic text
fn check_status(output: &Output) -> std::result::Result<(), String> {
    if output.status.success() {
        return Ok(());
    }

    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
    if !stderr.is_empty() {
        return Err(stderr);
    }
    let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if !stdout.is_empty() {
        return Err(stdout);
    }
    Err(format!("exit code {}", output.status.code().unwrap_or(-1)))
}

#[async_trait]
impl GitClient for ShellGit {
    async fn ensure_available(&self) -> Result<()> {
        match self.version() {
            Some(version) => {
                debug!(%version, "git available");
                Ok(())
            }
            None => Err(ScaffoldError::Git(format!(
                "{} is not installed or not on PATH. Install it from https://git-scm.com",
                self.program
            ))),
        }
    }

    async fn clone_repo(&self, url: &str, dest: &Path) -> Result<()> {
        let dest_str = dest.to_string_lossy().into_owned();
        let output = self
            .run(None, &["clone", url, dest_str.as_str()])
            .await
            .map_err(|e| ScaffoldError::Clone(format!("failed to run {}: {}", self.program, e)))?;
        check_status(&output).map_err(ScaffoldError::Clone)
    }

    async fn init_repo(&self, dir: &Path) -> Result<()> {
        self.run_in(dir, &["init"]).await
    }

    async fn stage_all(&self, dir: &Path) -> Result<()> {
        self.run_in(dir, &["add", "-A"]).await
    }

    async fn commit(&self, dir: &Path, message: &str) -> Result<()> {
        self.run_in(dir, &["commit", "-m", message]).await
    }
}
