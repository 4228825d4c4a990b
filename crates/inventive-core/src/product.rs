//! Product configuration trait for CLI binaries
//!
//! The binary implements this trait to define where templates come from,
//! how the catalog request identifies itself and what the operator is told
//! once the project is ready.

use std::path::Path;

/// Configuration trait for a scaffolding CLI product
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Internal product name (used for CLI command, env vars)
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// Default repository-listing endpoint for the template catalog
    fn default_catalog_url(&self) -> &'static str;

    /// Environment variable name for overriding the catalog URL
    fn catalog_url_env(&self) -> &'static str;

    /// Accept header sent with the catalog request
    ///
    /// The mercy preview media type makes GitHub include repository topics.
    fn accept_header(&self) -> &'static str {
        "application/vnd.github.mercy-preview+json"
    }

    /// User agent string for HTTP requests (GitHub rejects requests without one)
    fn user_agent(&self) -> &'static str {
        self.name()
    }

    /// Message of the fresh initial commit
    fn commit_message(&self) -> &'static str;

    /// Generate the "next steps" instructions after project creation
    fn next_steps(&self, dir: &Path) -> Vec<String>;

    /// CLI description shown in help text
    fn cli_description(&self) -> &'static str;
}
