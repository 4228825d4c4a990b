//! Catalog fetching from the GitHub API or a local JSON file
//!
//! The remote source performs exactly one GET against a repository-listing
//! endpoint. The local source reads a file with the same JSON shape, which
//! keeps development and offline runs on the same parsing path.

use super::entry::Catalog;
use crate::error::{Result, ScaffoldError};
use crate::product::ProductConfig;
use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::StatusCode;
use std::path::PathBuf;
use tokio::fs;
use tracing::{debug, info};
use url::Url;

/// Catalog source - either remote URL or local JSON file
#[derive(Debug, Clone)]
pub enum CatalogSource {
    Remote(Url),
    Local(PathBuf),
}

impl CatalogSource {
    /// Create a remote catalog source from a product config
    ///
    /// The product's URL environment variable takes precedence over the
    /// built-in endpoint.
    pub fn from_config<C: ProductConfig>(config: &C) -> Result<Self> {
        let url_str = std::env::var(config.catalog_url_env())
            .unwrap_or_else(|_| config.default_catalog_url().to_string());
        let url = Url::parse(&url_str).map_err(|e| {
            ScaffoldError::Validation(format!("Invalid catalog URL {}: {}", url_str, e))
        })?;
        Ok(Self::Remote(url))
    }

    /// Create a local catalog source from a path
    pub fn local(path: PathBuf) -> Self {
        Self::Local(path)
    }
}

/// Anything that can produce the template catalog
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    async fn fetch_catalog(&self) -> Result<Catalog>;
}

/// Catalog fetcher - retrieves the repository listing from remote or local sources
pub struct CatalogFetcher {
    source: CatalogSource,
    client: reqwest::Client,
    accept: &'static str,
}

impl CatalogFetcher {
    /// Create a new fetcher with a custom user agent and accept header
    pub fn new(source: CatalogSource, user_agent: &str, accept: &'static str) -> Self {
        Self {
            source,
            client: reqwest::Client::builder()
                .user_agent(user_agent)
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
            accept,
        }
    }

    /// Create a fetcher from a product config
    pub fn from_config<C: ProductConfig>(config: &C) -> Result<Self> {
        let source = CatalogSource::from_config(config)?;
        Ok(Self::new(source, config.user_agent(), config.accept_header()))
    }

    /// Create a fetcher for a local catalog file
    pub fn from_local<C: ProductConfig>(path: PathBuf, config: &C) -> Self {
        Self::new(
            CatalogSource::local(path),
            config.user_agent(),
            config.accept_header(),
        )
    }

    /// Get the catalog source
    pub fn source(&self) -> &CatalogSource {
        &self.source
    }

    async fn fetch_remote(&self, url: &Url) -> Result<Catalog> {
        info!(%url, "fetching template catalog");
        let response = self
            .client
            .get(url.clone())
            .header(ACCEPT, self.accept)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|e| ScaffoldError::Network(format!("request to {} failed: {}", url, e)))?;

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        check_response(response.status(), content_type.as_deref())?;

        let body = response
            .text()
            .await
            .map_err(|e| ScaffoldError::Network(format!("failed to read response: {}", e)))?;
        debug!(bytes = body.len(), "catalog response received");

        Catalog::from_json(&body)
    }
}

#[async_trait]
impl CatalogProvider for CatalogFetcher {
    async fn fetch_catalog(&self) -> Result<Catalog> {
        match &self.source {
            CatalogSource::Remote(url) => self.fetch_remote(url).await,
            CatalogSource::Local(path) => {
                debug!(path = %path.display(), "reading local template catalog");
                let content = fs::read_to_string(path).await.map_err(|e| {
                    ScaffoldError::io(format!("Failed to read {}", path.display()), e)
                })?;
                Catalog::from_json(&content)
            }
        }
    }
}

/// Reject anything but a 200 JSON response
fn check_response(status: StatusCode, content_type: Option<&str>) -> Result<()> {
    if status != StatusCode::OK {
        return Err(ScaffoldError::Network(format!(
            "Request Failed. Status Code: {}",
            status.as_u16()
        )));
    }

    match content_type {
        Some(ct) if ct.starts_with("application/json") => Ok(()),
        other => Err(ScaffoldError::Network(format!(
            "Invalid content-type. Expected application/json but received {}",
            other.unwrap_or("none")
        ))),
    }
}
