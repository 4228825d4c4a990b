//! Interactive template selection
//!
//! The question sequence is data (`questions::questions`); each question
//! derives its options and default from the answers given so far. A
//! `Prompter` renders them. The cliclack implementation lives in `tui`.

pub mod collect;
pub mod questions;

pub use collect::{collect_answers, PromptOverrides};
pub use questions::{questions, PartialAnswers, PromptShape, Question, QuestionId};

use crate::catalog::ProjectKind;
use crate::error::Result;

/// One option of a select prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    /// Text shown to the operator
    pub label: String,
    /// Value recorded when the choice is picked
    pub value: String,
    pub hint: String,
}

impl Choice {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            hint: String::new(),
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = hint.into();
        self
    }
}

/// Renders prompts and waits for the operator
pub trait Prompter {
    /// Returns the index of the picked choice
    fn select(&mut self, message: &str, choices: &[Choice], default: usize) -> Result<usize>;

    fn confirm(&mut self, message: &str, default: bool) -> Result<bool>;
}

/// Everything the operator decided
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerSet {
    pub project_kind: ProjectKind,
    pub clone_url: String,
    /// Recorded and reported, but no step acts on it yet
    pub use_typescript: bool,
}
