//! Template catalog: fetching the repository listing and classifying it
//!
//! This module provides:
//! - Catalog types (Catalog, TemplateEntry, ProjectKind)
//! - Catalog fetching from the GitHub API or a local JSON file

pub mod entry;
pub mod fetcher;

pub use entry::{Catalog, ProjectKind, RepoRecord, TemplateEntry, TEMPLATE_TOPIC};
pub use fetcher::{CatalogFetcher, CatalogProvider, CatalogSource};
