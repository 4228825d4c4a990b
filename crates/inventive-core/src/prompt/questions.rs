//! The ordered question sequence
//!
//! Each question carries a pure resolver from the partial answers to its
//! options and default, so later questions can depend on earlier answers
//! without any hidden control flow.

use super::{AnswerSet, Choice};
use crate::catalog::{Catalog, ProjectKind};
use crate::error::{Result, ScaffoldError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionId {
    Kind,
    Template,
    TypeScript,
}

/// What to render for a question, given the answers so far
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptShape {
    Select { choices: Vec<Choice>, default: usize },
    Confirm { default: bool },
}

/// Answers collected so far
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialAnswers {
    pub project_kind: Option<ProjectKind>,
    pub clone_url: Option<String>,
    pub use_typescript: Option<bool>,
}

impl PartialAnswers {
    /// Record the answer to a select question
    pub fn record_choice(&mut self, id: QuestionId, choice: &Choice) -> Result<()> {
        match id {
            QuestionId::Kind => self.project_kind = Some(choice.value.parse()?),
            QuestionId::Template => self.clone_url = Some(choice.value.clone()),
            QuestionId::TypeScript => {
                return Err(ScaffoldError::Validation(
                    "typescript is a yes/no question".to_string(),
                ))
            }
        }
        Ok(())
    }

    /// Record the answer to a yes/no question
    pub fn record_confirm(&mut self, id: QuestionId, value: bool) -> Result<()> {
        match id {
            QuestionId::TypeScript => {
                self.use_typescript = Some(value);
                Ok(())
            }
            other => Err(ScaffoldError::Validation(format!(
                "{:?} is not a yes/no question",
                other
            ))),
        }
    }

    fn kind(&self) -> Result<ProjectKind> {
        self.project_kind.ok_or_else(|| {
            ScaffoldError::Validation("project kind must be chosen first".to_string())
        })
    }

    pub fn finish(self) -> Result<AnswerSet> {
        let missing = |what: &str| ScaffoldError::Validation(format!("no {} was chosen", what));
        Ok(AnswerSet {
            project_kind: self.project_kind.ok_or_else(|| missing("project kind"))?,
            clone_url: self.clone_url.ok_or_else(|| missing("template"))?,
            use_typescript: self.use_typescript.ok_or_else(|| missing("language"))?,
        })
    }
}

type Resolver = fn(&PartialAnswers, &Catalog) -> Result<PromptShape>;

pub struct Question {
    pub id: QuestionId,
    pub message: &'static str,
    resolver: Resolver,
}

impl Question {
    pub fn resolve(&self, answers: &PartialAnswers, catalog: &Catalog) -> Result<PromptShape> {
        (self.resolver)(answers, catalog)
    }
}

/// Questions in the order they are asked
pub fn questions() -> [Question; 3] {
    [
        Question {
            id: QuestionId::Kind,
            message: "new application or library? they have different bundler and babel config",
            resolver: kind_shape,
        },
        Question {
            id: QuestionId::Template,
            message: "choose a template for you",
            resolver: template_shape,
        },
        Question {
            id: QuestionId::TypeScript,
            message: "do you use typescript? strongly recommend for library",
            resolver: typescript_shape,
        },
    ]
}

fn kind_shape(_answers: &PartialAnswers, _catalog: &Catalog) -> Result<PromptShape> {
    let choices = ProjectKind::ALL
        .iter()
        .map(|kind| Choice::new(kind.as_str(), kind.as_str()))
        .collect();
    Ok(PromptShape::Select {
        choices,
        default: 0,
    })
}

fn template_shape(answers: &PartialAnswers, catalog: &Catalog) -> Result<PromptShape> {
    let kind = answers.kind()?;
    let templates = catalog.templates(kind);
    if templates.is_empty() {
        return Err(ScaffoldError::Validation(format!(
            "No {} templates available.",
            kind
        )));
    }

    let choices = templates
        .iter()
        .map(|t| Choice::new(&t.display_label, &t.clone_url).with_hint(&t.short_name))
        .collect();
    Ok(PromptShape::Select {
        choices,
        default: 0,
    })
}

fn typescript_shape(answers: &PartialAnswers, _catalog: &Catalog) -> Result<PromptShape> {
    Ok(PromptShape::Confirm {
        default: answers.kind()? == ProjectKind::Library,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::TemplateEntry;

    fn entry(label: &str, short: &str) -> TemplateEntry {
        TemplateEntry {
            display_label: label.to_string(),
            clone_url: format!("https://example.com/{}.git", short),
            short_name: short.to_string(),
        }
    }

    fn catalog() -> Catalog {
        Catalog {
            application_templates: vec![
                entry("React App", "application-react"),
                entry("Vue App", "application-vue"),
            ],
            library_templates: vec![entry("TS Library", "library-ts")],
        }
    }

    fn answered(kind: ProjectKind) -> PartialAnswers {
        PartialAnswers {
            project_kind: Some(kind),
            ..Default::default()
        }
    }

    #[test]
    fn test_order_is_kind_template_typescript() {
        let ids: Vec<_> = questions().iter().map(|q| q.id).collect();
        assert_eq!(
            ids,
            vec![QuestionId::Kind, QuestionId::Template, QuestionId::TypeScript]
        );
    }

    #[test]
    fn test_kind_defaults_to_application() {
        let shape = kind_shape(&PartialAnswers::default(), &catalog()).unwrap();
        match shape {
            PromptShape::Select { choices, default } => {
                let labels: Vec<_> = choices.iter().map(|c| c.label.as_str()).collect();
                assert_eq!(labels, vec!["application", "library"]);
                assert_eq!(default, 0);
            }
            other => panic!("expected select, got {:?}", other),
        }
    }

    #[test]
    fn test_template_options_follow_kind() {
        let shape = template_shape(&answered(ProjectKind::Library), &catalog()).unwrap();
        assert_eq!(
            shape,
            PromptShape::Select {
                choices: vec![Choice::new("TS Library", "https://example.com/library-ts.git")
                    .with_hint("library-ts")],
                default: 0,
            }
        );

        match template_shape(&answered(ProjectKind::Application), &catalog()).unwrap() {
            PromptShape::Select { choices, .. } => assert_eq!(choices.len(), 2),
            other => panic!("expected select, got {:?}", other),
        }
    }

    #[test]
    fn test_template_requires_kind() {
        let err = template_shape(&PartialAnswers::default(), &catalog()).unwrap_err();
        assert!(matches!(err, ScaffoldError::Validation(_)));
    }

    #[test]
    fn test_empty_group_is_validation_error() {
        let catalog = Catalog {
            application_templates: vec![entry("React App", "application-react")],
            library_templates: vec![],
        };
        let err = template_shape(&answered(ProjectKind::Library), &catalog).unwrap_err();
        assert!(matches!(err, ScaffoldError::Validation(ref m) if m.contains("library")));
    }

    #[test]
    fn test_typescript_default_depends_on_kind() {
        assert_eq!(
            typescript_shape(&answered(ProjectKind::Library), &catalog()).unwrap(),
            PromptShape::Confirm { default: true }
        );
        assert_eq!(
            typescript_shape(&answered(ProjectKind::Application), &catalog()).unwrap(),
            PromptShape::Confirm { default: false }
        );
    }

    #[test]
    fn test_finish_requires_every_answer() {
        let mut answers = answered(ProjectKind::Application);
        answers.clone_url = Some("https://example.com/a.git".to_string());
        assert!(answers.clone().finish().is_err());

        answers.record_confirm(QuestionId::TypeScript, false).unwrap();
        let set = answers.finish().unwrap();
        assert_eq!(set.clone_url, "https://example.com/a.git");
        assert!(!set.use_typescript);
    }

    #[test]
    fn test_record_rejects_mismatched_answer_type() {
        let mut answers = PartialAnswers::default();
        assert!(answers.record_confirm(QuestionId::Kind, true).is_err());
        assert!(answers
            .record_choice(QuestionId::TypeScript, &Choice::new("yes", "yes"))
            .is_err());
    }
}
