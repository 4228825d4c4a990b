//! Spinner-backed progress reporting

use crate::error::ScaffoldError;
use crate::progress::{Progress, Step};
use std::cell::RefCell;

/// Shows one cliclack spinner per running step
#[derive(Default)]
pub struct SpinnerProgress {
    active: RefCell<Option<cliclack::ProgressBar>>,
}

impl Progress for SpinnerProgress {
    fn started(&self, step: Step) {
        let spinner = cliclack::spinner();
        spinner.start(step.pending_message());
        *self.active.borrow_mut() = Some(spinner);
    }

    fn finished(&self, step: Step) {
        if let Some(spinner) = self.active.borrow_mut().take() {
            spinner.stop(step.done_message());
        }
    }

    fn failed(&self, step: Step, _error: &ScaffoldError) {
        if let Some(spinner) = self.active.borrow_mut().take() {
            spinner.error(step.failed_message());
        }
    }
}
