//! Project README retrieval.
//!
//! The repository URL is rewritten onto the raw-content host and the README
//! is probed on each configured branch in order. Failures never propagate;
//! they become a short synthesized document built from the project record.

use devfolio_core::traits::TextFetcher;
use devfolio_core::{ContentConfig, Error, Project};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

/// Result of a README fetch: what to display and what edit mode would see.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadmeDocument {
    /// Markdown to render
    pub text: String,
    /// Fetched body, empty when the fetch failed
    pub raw: String,
}

/// Fetches READMEs for catalog projects.
#[derive(Clone)]
pub struct ReadmeFetcher {
    fetcher: Arc<dyn TextFetcher>,
    repository_host: String,
    raw_host: String,
    branches: Vec<String>,
}

impl fmt::Debug for ReadmeFetcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReadmeFetcher")
            .field("repository_host", &self.repository_host)
            .field("raw_host", &self.raw_host)
            .field("branches", &self.branches)
            .finish_non_exhaustive()
    }
}

impl ReadmeFetcher {
    /// Creates a fetcher using the hosts and branches from `config`.
    #[must_use]
    pub fn new(fetcher: Arc<dyn TextFetcher>, config: &ContentConfig) -> Self {
        Self {
            fetcher,
            repository_host: config.repository_host.clone(),
            raw_host: config.raw_content_host.clone(),
            branches: config.readme_branches.clone(),
        }
    }

    /// Raw README URLs for `repository`, one per branch, in probe order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use devfolio_content::ReadmeFetcher;
    /// # use devfolio_core::ContentConfig;
    /// # use std::sync::Arc;
    /// # let fetcher = ReadmeFetcher::new(
    /// #     Arc::new(devfolio_content::HttpFetcher::new(std::time::Duration::from_secs(1)).unwrap()),
    /// #     &ContentConfig::default(),
    /// # );
    /// assert_eq!(
    ///     fetcher.raw_readme_urls("https://github.com/alqavi/chess"),
    ///     [
    ///         "https://raw.githubusercontent.com/alqavi/chess/main/README.md",
    ///         "https://raw.githubusercontent.com/alqavi/chess/master/README.md",
    ///     ]
    /// );
    /// ```
    #[must_use]
    pub fn raw_readme_urls(&self, repository: &str) -> Vec<String> {
        let raw_base = repository
            .trim()
            .trim_end_matches('/')
            .replacen(&self.repository_host, &self.raw_host, 1);
        self.branches
            .iter()
            .map(|branch| format!("{raw_base}/{branch}/README.md"))
            .collect()
    }

    /// Fetches the README of `project`.
    ///
    /// The first branch whose response is a success wins, even when its body
    /// is empty. If every branch answers with an error status the "could not
    /// fetch" note is shown; a transport failure stops probing and shows the
    /// error message.
    pub async fn fetch(&self, project: &Project) -> ReadmeDocument {
        let Some(repository) = project.repository() else {
            return ReadmeDocument {
                text: unavailable(project),
                raw: String::new(),
            };
        };

        for url in self.raw_readme_urls(repository) {
            match self.fetcher.fetch_text(&url).await {
                Ok(body) => {
                    debug!(project = %project.id, %url, "fetched README");
                    let text = if body.trim().is_empty() {
                        heading(project, "No README content.")
                    } else {
                        body.clone()
                    };
                    return ReadmeDocument { text, raw: body };
                }
                Err(Error::HttpStatus { status, .. }) => {
                    debug!(project = %project.id, %url, status, "README not on branch");
                }
                Err(e) => {
                    warn!(project = %project.id, %url, error = %e, "README fetch failed");
                    return ReadmeDocument {
                        text: format!(
                            "{}\n\n**Error**: {e}",
                            heading(project, "Failed to load README from GitHub.")
                        ),
                        raw: String::new(),
                    };
                }
            }
        }

        warn!(project = %project.id, "README not found on any branch");
        ReadmeDocument {
            text: unavailable(project),
            raw: String::new(),
        }
    }
}

fn heading(project: &Project, fallback: &str) -> String {
    let description = project
        .description
        .as_deref()
        .filter(|d| !d.trim().is_empty())
        .unwrap_or(fallback);
    format!("# {}\n\n{description}", project.display_name)
}

fn unavailable(project: &Project) -> String {
    format!(
        "{}\n\n**Note**: Could not fetch README from GitHub. Please check the repository URL.",
        heading(project, "No README available.")
    )
}
