//! Turning a [`FileRef`] into displayable content.

use crate::demo::FrameTarget;
use crate::file_ref::{self, FileRef};
use crate::http::HttpFetcher;
use crate::readme::{ReadmeDocument, ReadmeFetcher};
use devfolio_core::traits::DocumentSource;
use devfolio_core::{ContentConfig, FixedDocument, ProjectCatalog, ProjectId, Result};
use devfolio_files::FileRegistry;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

/// Markdown shown for identifiers with no content source.
pub const UNKNOWN_DOCUMENT: &str = "# Unknown File\n\nNo content available for this file.";

/// How resolved content is presented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentView {
    /// Markdown rendered as a document
    Document(String),
    /// Demo embedded in a frame
    Frame(FrameTarget),
}

impl ContentView {
    /// Markdown text, if this is a document view.
    #[must_use]
    pub fn as_document(&self) -> Option<&str> {
        match self {
            Self::Document(text) => Some(text),
            Self::Frame(_) => None,
        }
    }
}

/// Outcome of resolving an identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    /// What to display
    pub view: ContentView,
    /// Raw text backing the view; empty for frames and failed loads
    pub raw: String,
}

impl Resolved {
    fn document(text: impl Into<String>, raw: impl Into<String>) -> Self {
        Self {
            view: ContentView::Document(text.into()),
            raw: raw.into(),
        }
    }

    fn unknown() -> Self {
        Self::document(UNKNOWN_DOCUMENT, "")
    }
}

/// Resolves identifiers against the documents, the registry and the
/// project catalog.
#[derive(Clone)]
pub struct ContentResolver {
    documents: Arc<dyn DocumentSource>,
    readme: ReadmeFetcher,
    catalog: Arc<ProjectCatalog>,
}

impl fmt::Debug for ContentResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContentResolver")
            .field("documents", &self.documents)
            .field("readme", &self.readme)
            .field("projects", &self.catalog.len())
            .finish()
    }
}

impl ContentResolver {
    /// Creates a resolver from its parts.
    #[must_use]
    pub fn new(
        documents: Arc<dyn DocumentSource>,
        readme: ReadmeFetcher,
        catalog: ProjectCatalog,
    ) -> Self {
        Self {
            documents,
            readme,
            catalog: Arc::new(catalog),
        }
    }

    /// Creates a resolver that fetches READMEs over HTTP.
    ///
    /// # Errors
    ///
    /// Returns `Error::ConfigError` if the HTTP client cannot be built.
    pub fn from_config(
        config: &ContentConfig,
        documents: Arc<dyn DocumentSource>,
        catalog: ProjectCatalog,
    ) -> Result<Self> {
        let fetcher = Arc::new(HttpFetcher::new(config.request_timeout())?);
        Ok(Self::new(
            documents,
            ReadmeFetcher::new(fetcher, config),
            catalog,
        ))
    }

    /// Project catalog in use.
    #[must_use]
    pub fn catalog(&self) -> &ProjectCatalog {
        &self.catalog
    }

    /// Classifies `id`.
    #[must_use]
    pub fn classify(&self, id: &str, registry: &FileRegistry) -> FileRef {
        FileRef::parse(id, registry, &self.catalog)
    }

    /// Returns `true` if `id` may enter edit mode.
    #[must_use]
    pub fn is_editable(&self, id: &str, registry: &FileRegistry) -> bool {
        self.classify(id, registry).is_editable()
    }

    /// Tab label for `id`.
    #[must_use]
    pub fn display_name(&self, id: &str, registry: &FileRegistry) -> String {
        file_ref::display_name(id, registry)
    }

    /// Resolves `file_ref` to displayable content. Never fails.
    pub async fn resolve(&self, file_ref: &FileRef, registry: &FileRegistry) -> Resolved {
        debug!(%file_ref, "resolving");
        match file_ref {
            FileRef::Fixed(doc) => self.resolve_fixed(*doc).await,
            FileRef::Registry(id) => registry
                .get_file(id.as_str())
                .map_or_else(Resolved::unknown, |file| {
                    Resolved::document(file.content.clone(), file.content.clone())
                }),
            FileRef::ProjectReadme(id) => self.resolve_readme(id).await,
            FileRef::ProjectDemo(id) => self.resolve_demo(id),
            FileRef::Unknown(_) => Resolved::unknown(),
        }
    }

    /// Text placed in the edit buffer when `file_ref` enters edit mode.
    ///
    /// Fixed documents are fetched again; a failed fetch yields an empty
    /// buffer. Registry files use their stored content. Anything else is
    /// not editable and yields `None`.
    pub async fn load_edit_buffer(
        &self,
        file_ref: &FileRef,
        registry: &FileRegistry,
    ) -> Option<String> {
        match file_ref {
            FileRef::Fixed(doc) => Some(match self.documents.fetch_document(*doc).await {
                Ok(text) => text,
                Err(e) => {
                    warn!(document = %doc, error = %e, "edit buffer fetch failed");
                    String::new()
                }
            }),
            FileRef::Registry(id) => registry.get_file(id.as_str()).map(|f| f.content.clone()),
            FileRef::ProjectReadme(_) | FileRef::ProjectDemo(_) | FileRef::Unknown(_) => None,
        }
    }

    async fn resolve_fixed(&self, doc: FixedDocument) -> Resolved {
        match self.documents.fetch_document(doc).await {
            Ok(text) => Resolved::document(text.clone(), text),
            Err(e) => {
                warn!(document = %doc, error = %e, "failed to load document");
                Resolved::document(format!("# Error\n\nFailed to load {}", doc.file_name()), "")
            }
        }
    }

    async fn resolve_readme(&self, id: &ProjectId) -> Resolved {
        let Some(project) = self.catalog.get(id.as_str()) else {
            return Resolved::unknown();
        };
        let ReadmeDocument { text, raw } = self.readme.fetch(project).await;
        Resolved::document(text, raw)
    }

    fn resolve_demo(&self, id: &ProjectId) -> Resolved {
        match self.catalog.get(id.as_str()).and_then(|p| p.demo()) {
            Some(url) => Resolved {
                view: ContentView::Frame(FrameTarget::new(url)),
                raw: String::new(),
            },
            None => Resolved::unknown(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use devfolio_core::Error;
    use devfolio_core::traits::TextFetcher;

    #[derive(Debug)]
    struct StaticDocuments(Option<&'static str>);

    #[async_trait]
    impl DocumentSource for StaticDocuments {
        async fn fetch_document(&self, doc: FixedDocument) -> Result<String> {
            self.0.map(str::to_string).ok_or_else(|| Error::ResourceNotFound {
                resource: format!("Failed to load {}", doc.file_name()),
            })
        }
    }

    #[derive(Debug)]
    struct OfflineFetcher;

    #[async_trait]
    impl TextFetcher for OfflineFetcher {
        async fn fetch_text(&self, url: &str) -> Result<String> {
            Err(Error::HttpStatus {
                url: url.to_string(),
                status: 404,
            })
        }
    }

    fn resolver(documents: Option<&'static str>) -> ContentResolver {
        let catalog = ProjectCatalog::from_json_str(
            r#"[{"id": "site", "name": "site", "displayName": "Site", "demoUrl": "http://alqavi.dev"},
                {"id": "chess", "name": "chess", "displayName": "Chess",
                 "githubUrl": "https://github.com/alqavi/chess"}]"#,
        )
        .unwrap();
        ContentResolver::new(
            Arc::new(StaticDocuments(documents)),
            ReadmeFetcher::new(Arc::new(OfflineFetcher), &ContentConfig::default()),
            catalog,
        )
    }

    #[tokio::test]
    async fn test_fixed_document() {
        let resolver = resolver(Some("# Hi"));
        let resolved = resolver
            .resolve(&FileRef::Fixed(FixedDocument::About), &FileRegistry::new())
            .await;
        assert_eq!(resolved, Resolved::document("# Hi", "# Hi"));
    }

    #[tokio::test]
    async fn test_fixed_document_failure() {
        let resolver = resolver(None);
        let resolved = resolver
            .resolve(&FileRef::Fixed(FixedDocument::Contact), &FileRegistry::new())
            .await;
        assert_eq!(
            resolved.view.as_document(),
            Some("# Error\n\nFailed to load contact.md")
        );
        assert!(resolved.raw.is_empty());
    }

    #[tokio::test]
    async fn test_demo_frame_is_https() {
        let resolver = resolver(None);
        let file_ref = resolver.classify("projects/site/site", &FileRegistry::new());
        let resolved = resolver.resolve(&file_ref, &FileRegistry::new()).await;
        assert_eq!(
            resolved.view,
            ContentView::Frame(FrameTarget::new("https://alqavi.dev"))
        );
    }

    #[tokio::test]
    async fn test_unknown_placeholder() {
        let resolver = resolver(None);
        let resolved = resolver
            .resolve(&FileRef::Unknown("x".into()), &FileRegistry::new())
            .await;
        assert_eq!(resolved.view.as_document(), Some(UNKNOWN_DOCUMENT));
    }

    #[tokio::test]
    async fn test_stale_registry_ref_is_unknown() {
        let resolver = resolver(None);
        let mut registry = FileRegistry::new();
        let file = registry.create_file("a.md", "a");
        let file_ref = resolver.classify(file.id.as_str(), &registry);
        registry.delete_file(file.id.as_str());
        let resolved = resolver.resolve(&file_ref, &registry).await;
        assert_eq!(resolved.view.as_document(), Some(UNKNOWN_DOCUMENT));
    }

    #[tokio::test]
    async fn test_edit_buffer() {
        let mut registry = FileRegistry::new();
        let file = registry.create_file("a.md", "body");

        let failing = resolver(None);
        assert_eq!(
            failing
                .load_edit_buffer(&FileRef::Fixed(FixedDocument::About), &registry)
                .await,
            Some(String::new())
        );
        assert_eq!(
            failing
                .load_edit_buffer(&FileRef::Registry(file.id), &registry)
                .await,
            Some("body".to_string())
        );
        assert_eq!(
            failing
                .load_edit_buffer(&FileRef::ProjectDemo(ProjectId::new("site")), &registry)
                .await,
            None
        );
    }
}
