//! Walk the question sequence and collect an `AnswerSet`

use super::questions::{questions, PartialAnswers, PromptShape, QuestionId};
use super::{AnswerSet, Choice, Prompter};
use crate::catalog::{Catalog, ProjectKind};
use crate::error::{Result, ScaffoldError};
use tracing::debug;

/// Answers supplied up front (command-line flags)
///
/// A preset answers its question without prompting. With `accept_defaults`
/// every remaining question takes its default.
#[derive(Debug, Clone, Default)]
pub struct PromptOverrides {
    pub kind: Option<ProjectKind>,
    /// Repository name of the template
    pub template: Option<String>,
    pub typescript: Option<bool>,
    pub accept_defaults: bool,
}

impl PromptOverrides {
    /// Check presets against the catalog, deriving the kind from the template
    fn reconcile(&self, catalog: &Catalog) -> Result<Self> {
        let mut resolved = self.clone();
        let Some(name) = &self.template else {
            return Ok(resolved);
        };

        let Some((kind, _)) = catalog.find(name) else {
            let available: Vec<&str> = catalog
                .application_templates
                .iter()
                .chain(&catalog.library_templates)
                .map(|t| t.short_name.as_str())
                .collect();
            return Err(ScaffoldError::Validation(format!(
                "Template '{}' not found. Available templates: {}",
                name,
                available.join(", ")
            )));
        };

        match self.kind {
            Some(requested) if requested != kind => Err(ScaffoldError::Validation(format!(
                "Template '{}' is a {} template, not a {} template",
                name, kind, requested
            ))),
            _ => {
                resolved.kind = Some(kind);
                Ok(resolved)
            }
        }
    }

    /// Index of the preset choice for a select question, if any
    fn preset_choice(&self, id: QuestionId, choices: &[Choice]) -> Option<usize> {
        match id {
            QuestionId::Kind => {
                let kind = self.kind?;
                choices.iter().position(|c| c.value == kind.as_str())
            }
            QuestionId::Template => {
                let name = self.template.as_deref()?;
                choices.iter().position(|c| c.hint == name)
            }
            QuestionId::TypeScript => None,
        }
    }

    fn preset_confirm(&self, id: QuestionId) -> Option<bool> {
        match id {
            QuestionId::TypeScript => self.typescript,
            _ => None,
        }
    }
}

/// Ask every question in order, honoring presets
///
/// Fails with `ScaffoldError::Validation` when the chosen kind has no
/// templates to offer.
pub fn collect_answers<P: Prompter + ?Sized>(
    catalog: &Catalog,
    prompter: &mut P,
    overrides: &PromptOverrides,
) -> Result<AnswerSet> {
    let overrides = overrides.reconcile(catalog)?;
    let mut answers = PartialAnswers::default();

    for question in questions() {
        match question.resolve(&answers, catalog)? {
            PromptShape::Select { choices, default } => {
                let index = match overrides.preset_choice(question.id, &choices) {
                    Some(index) => index,
                    None if overrides.accept_defaults => default,
                    None => prompter.select(question.message, &choices, default)?,
                };
                let choice = choices.get(index).ok_or_else(|| {
                    ScaffoldError::Validation(format!("choice {} is out of range", index))
                })?;
                debug!(question = ?question.id, value = %choice.value, "answered");
                answers.record_choice(question.id, choice)?;
            }
            PromptShape::Confirm { default } => {
                let value = match overrides.preset_confirm(question.id) {
                    Some(value) => value,
                    None if overrides.accept_defaults => default,
                    None => prompter.confirm(question.message, default)?,
                };
                debug!(question = ?question.id, value, "answered");
                answers.record_confirm(question.id, value)?;
            }
        }
    }

    answers.finish()
}
