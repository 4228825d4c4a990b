//! Progress reporting hooks for long-running steps

use crate::error::ScaffoldError;

/// Steps that block on the network or a subprocess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    FetchCatalog,
    Clone,
    Reinit,
}

impl Step {
    pub fn pending_message(&self) -> &'static str {
        match self {
            Step::FetchCatalog => "fetching templates...",
            Step::Clone => "clone template...",
            Step::Reinit => "re-init git history...",
        }
    }

    pub fn done_message(&self) -> &'static str {
        match self {
            Step::FetchCatalog => "fetch template success",
            Step::Clone => "clone template succeed",
            Step::Reinit => "git history re-initialized",
        }
    }

    pub fn failed_message(&self) -> &'static str {
        match self {
            Step::FetchCatalog => "fetch template failed with error message",
            Step::Clone => "clone template failed with error message",
            Step::Reinit => "git re-init failed with error message",
        }
    }
}

/// Observer notified around each `Step`; all hooks default to no-ops
pub trait Progress {
    fn started(&self, _step: Step) {}

    fn finished(&self, _step: Step) {}

    fn failed(&self, _step: Step, _error: &ScaffoldError) {}
}

impl Progress for () {}

/// Run `fut` as `step`, reporting its outcome to `progress`
pub(crate) async fn track<T, F>(
    progress: &dyn Progress,
    step: Step,
    fut: F,
) -> Result<T, ScaffoldError>
where
    F: std::future::Future<Output = Result<T, ScaffoldError>>,
{
    progress.started(step);
    match fut.await {
        Ok(value) => {
            progress.finished(step);
            Ok(value)
        }
        Err(e) => {
            progress.failed(step, &e);
            Err(e)
        }
    }
}
