//! Wiring shared by the commands that need content.

use anyhow::{Context, Result};
use devfolio_content::{ContentResolver, DocumentStore, HttpDocuments, LocalDocuments};
use devfolio_core::traits::DocumentSource;
use devfolio_core::{ContentConfig, ProjectCatalog, SiteConfig};
use devfolio_workbench::Session;
use std::sync::Arc;
use tracing::{debug, warn};

/// Picks the fixed document source: the deployed API when
/// `api_base_url` is set, the local data directory otherwise.
///
/// # Examples
///
/// ```
/// use devfolio_cli::commands::common::document_source;
/// use devfolio_core::ContentConfig;
///
/// let source = document_source(&ContentConfig::default())?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn document_source(config: &ContentConfig) -> Result<Arc<dyn DocumentSource>> {
    if let Some(base_url) = &config.api_base_url {
        debug!(%base_url, "serving fixed documents over HTTP");
        let documents = HttpDocuments::with_timeout(base_url.as_str(), config.request_timeout())
            .context("failed to build HTTP client")?;
        return Ok(Arc::new(documents));
    }

    debug!(data_dir = %config.data_dir.display(), "serving fixed documents from disk");
    Ok(Arc::new(LocalDocuments::new(DocumentStore::new(
        &config.data_dir,
    ))))
}

/// Loads the project catalog. A missing or malformed file yields an empty
/// catalog so the rest of the site keeps working.
pub async fn load_catalog(config: &ContentConfig) -> ProjectCatalog {
    match ProjectCatalog::load(&config.projects_file).await {
        Ok(catalog) => catalog,
        Err(e) => {
            warn!(
                path = %config.projects_file.display(),
                error = %e,
                "failed to load project catalog, continuing without projects"
            );
            ProjectCatalog::default()
        }
    }
}

/// Builds a content resolver from configuration.
pub async fn build_resolver(config: &SiteConfig) -> Result<ContentResolver> {
    let documents = document_source(&config.content)?;
    let catalog = load_catalog(&config.content).await;
    ContentResolver::from_config(&config.content, documents, catalog)
        .context("failed to build content resolver")
}

/// Builds a fresh visitor session from configuration.
pub async fn build_session(config: &SiteConfig) -> Result<Session> {
    let resolver = build_resolver(config).await?;
    Ok(Session::new(resolver, &config.workbench))
}
