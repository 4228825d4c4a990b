//! Error type shared by every scaffolding step

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the scaffolding workflow.
///
/// Every variant is terminal for the current invocation; the binary maps all
/// of them to exit status 1.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// Transport failure, non-200 status or non-JSON content type while
    /// fetching the template catalog
    #[error("fetch template failed: {0}")]
    Network(String),

    /// The catalog response body could not be parsed
    #[error("failed to parse template catalog: {source}")]
    Parse {
        #[source]
        source: serde_json::Error,
    },

    /// Invalid input or an unsatisfiable selection
    #[error("{0}")]
    Validation(String),

    /// Target directory exists and overwrite was not requested
    #[error("target dir {} exist, you may use create -f or --force to overwrite it", .path.display())]
    TargetExists { path: PathBuf },

    /// `git clone` exited unsuccessfully
    #[error("clone template failed: {0}")]
    Clone(String),

    /// `git init`, `git add` or `git commit` exited unsuccessfully
    #[error("git re-init failed: {0}")]
    Git(String),

    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    /// The operator aborted an interactive prompt
    #[error("Setup cancelled.")]
    Cancelled,
}

impl ScaffoldError {
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Whether this error should be shown as a warning rather than a failure
    pub fn is_warning(&self) -> bool {
        matches!(self, Self::TargetExists { .. })
    }
}

pub type Result<T, E = ScaffoldError> = std::result::Result<T, E>;
