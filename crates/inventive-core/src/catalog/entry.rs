//! Catalog types and classification of repository records

use crate::error::{Result, ScaffoldError};
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::str::FromStr;

/// Topic tag that marks a repository as a template
pub const TEMPLATE_TOPIC: &str = "template";

/// Repository record as returned by the GitHub repository listing
#[derive(Debug, Clone, Deserialize)]
pub struct RepoRecord {
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    pub clone_url: String,

    /// Only present when the mercy preview media type is requested; may be null
    #[serde(default, deserialize_with = "null_as_empty")]
    pub topics: Vec<String>,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

impl RepoRecord {
    pub fn is_template(&self) -> bool {
        self.topics.iter().any(|t| t == TEMPLATE_TOPIC)
    }
}

/// Kind of project a template produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProjectKind {
    #[default]
    Application,
    Library,
}

impl ProjectKind {
    pub const ALL: [ProjectKind; 2] = [ProjectKind::Application, ProjectKind::Library];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectKind::Application => "application",
            ProjectKind::Library => "library",
        }
    }

    /// Classify a repository short name by its prefix
    pub fn from_short_name(short_name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| short_name.starts_with(kind.as_str()))
    }
}

impl fmt::Display for ProjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectKind {
    type Err = ScaffoldError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "application" | "app" => Ok(ProjectKind::Application),
            "library" | "lib" => Ok(ProjectKind::Library),
            other => Err(ScaffoldError::Validation(format!(
                "Unknown project kind '{}'. Expected application or library",
                other
            ))),
        }
    }
}

/// A template the operator can pick
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateEntry {
    /// Human description shown in the prompt
    pub display_label: String,
    pub clone_url: String,
    /// Repository name, only used for classification and `--template`
    pub short_name: String,
}

impl From<RepoRecord> for TemplateEntry {
    fn from(record: RepoRecord) -> Self {
        let display_label = record
            .description
            .filter(|d| !d.trim().is_empty())
            .unwrap_or_else(|| record.name.clone());
        Self {
            display_label,
            clone_url: record.clone_url,
            short_name: record.name,
        }
    }
}

/// Templates available in one invocation, grouped by project kind
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    pub application_templates: Vec<TemplateEntry>,
    pub library_templates: Vec<TemplateEntry>,
}

impl Catalog {
    /// Build a catalog from raw repository records
    ///
    /// Records without the template topic are skipped, as are templates whose
    /// name matches neither kind prefix. Order is preserved.
    pub fn from_records(records: impl IntoIterator<Item = RepoRecord>) -> Self {
        let mut catalog = Catalog::default();
        for record in records.into_iter().filter(RepoRecord::is_template) {
            match ProjectKind::from_short_name(&record.name) {
                Some(ProjectKind::Application) => {
                    catalog.application_templates.push(record.into())
                }
                Some(ProjectKind::Library) => catalog.library_templates.push(record.into()),
                None => {
                    tracing::debug!(name = %record.name, "skipping unclassified template");
                }
            }
        }
        catalog
    }

    /// Parse a repository listing body
    pub fn from_json(body: &str) -> Result<Self> {
        let records: Vec<RepoRecord> =
            serde_json::from_str(body).map_err(|source| ScaffoldError::Parse { source })?;
        Ok(Self::from_records(records))
    }

    pub fn templates(&self, kind: ProjectKind) -> &[TemplateEntry] {
        match kind {
            ProjectKind::Application => &self.application_templates,
            ProjectKind::Library => &self.library_templates,
        }
    }

    /// Look up a template by repository name across both groups
    pub fn find(&self, short_name: &str) -> Option<(ProjectKind, &TemplateEntry)> {
        ProjectKind::ALL.into_iter().find_map(|kind| {
            self.templates(kind)
                .iter()
                .find(|t| t.short_name == short_name)
                .map(|t| (kind, t))
        })
    }

    pub fn is_empty(&self) -> bool {
        self.application_templates.is_empty() && self.library_templates.is_empty()
    }

    pub fn len(&self) -> usize {
        self.application_templates.len() + self.library_templates.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, topics: &[&str]) -> RepoRecord {
        RepoRecord {
            name: name.to_string(),
            description: Some(format!("{} description", name)),
            clone_url: format!("https://github.com/someone/{}.git", name),
            topics: topics.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn test_no_template_topic_yields_empty_catalog() {
        let catalog = Catalog::from_records(vec![
            record("application-react", &["react"]),
            record("library-ts", &[]),
        ]);
        assert!(catalog.is_empty());
        assert_eq!(catalog, Catalog::default());
    }

    #[test]
    fn test_partitions_by_prefix() {
        let catalog = Catalog::from_records(vec![
            record("application-react", &["template"]),
            record("library-ts", &["template", "typescript"]),
            record("application-vue", &["template"]),
            record("dotfiles", &["template"]),
        ]);

        let apps: Vec<_> = catalog
            .application_templates
            .iter()
            .map(|t| t.short_name.as_str())
            .collect();
        let libs: Vec<_> = catalog
            .library_templates
            .iter()
            .map(|t| t.short_name.as_str())
            .collect();

        assert_eq!(apps, vec!["application-react", "application-vue"]);
        assert_eq!(libs, vec!["library-ts"]);
        assert!(catalog.find("dotfiles").is_none());
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn test_entry_maps_description_and_clone_url() {
        let catalog = Catalog::from_records(vec![record("library-ts", &["template"])]);
        let entry = &catalog.library_templates[0];
        assert_eq!(entry.display_label, "library-ts description");
        assert_eq!(entry.clone_url, "https://github.com/someone/library-ts.git");
        assert_eq!(entry.short_name, "library-ts");
    }

    #[test]
    fn test_missing_description_falls_back_to_name() {
        let mut rec = record("application-bare", &["template"]);
        rec.description = None;
        let entry = TemplateEntry::from(rec);
        assert_eq!(entry.display_label, "application-bare");
    }

    #[test]
    fn test_from_json_github_shape() {
        let body = r#"[
            {"name": "application-react", "description": "React App",
             "clone_url": "https://example.com/a.git", "topics": ["template"], "stargazers_count": 3},
            {"name": "library-rollup", "description": null,
             "clone_url": "https://example.com/l.git", "topics": ["template"]},
            {"name": "blog", "description": "my blog", "clone_url": "https://example.com/b.git"}
        ]"#;
        let catalog = Catalog::from_json(body).unwrap();
        assert_eq!(catalog.application_templates.len(), 1);
        assert_eq!(catalog.application_templates[0].display_label, "React App");
        assert_eq!(catalog.library_templates[0].display_label, "library-rollup");
    }

    #[test]
    fn test_null_topics_record_is_skipped() {
        let body = r#"[
            {"name": "application-react", "description": "React App",
             "clone_url": "https://example.com/a.git", "topics": ["template"]},
            {"name": "notes", "description": "scratch notes",
             "clone_url": "https://example.com/n.git", "topics": null}
        ]"#;
        let catalog = Catalog::from_json(body).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.application_templates[0].short_name, "application-react");
    }

    #[test]
    fn test_from_json_rejects_non_array() {
        let err = Catalog::from_json(r#"{"message": "API rate limit exceeded"}"#).unwrap_err();
        assert!(matches!(err, ScaffoldError::Parse { .. }));
    }

    #[test]
    fn test_find_reports_kind() {
        let catalog = Catalog::from_records(vec![record("library-ts", &["template"])]);
        let (kind, entry) = catalog.find("library-ts").unwrap();
        assert_eq!(kind, ProjectKind::Library);
        assert_eq!(entry.short_name, "library-ts");
    }

    #[test]
    fn test_project_kind_parsing() {
        assert_eq!("app".parse::<ProjectKind>().unwrap(), ProjectKind::Application);
        assert_eq!("Library".parse::<ProjectKind>().unwrap(), ProjectKind::Library);
        assert!("plugin".parse::<ProjectKind>().is_err());
        assert_eq!(
            ProjectKind::from_short_name("library-vue-components"),
            Some(ProjectKind::Library)
        );
        assert_eq!(ProjectKind::from_short_name("my-application"), None);
    }
}
