//! Resolves one identifier the way opening its tab would.

use crate::formatters::{format_output, pretty};
use anyhow::Result;
use colored::Colorize;
use devfolio_content::{ContentResolver, ContentView, FileRef};
use devfolio_core::cli::{ExitCode, OutputFormat};
use devfolio_files::FileRegistry;
use serde::Serialize;
use tracing::info;

/// What an identifier resolved to.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Resolution {
    /// The identifier asked for
    pub id: String,
    /// Classification, e.g. `fixed:alqavi.md` or `demo:chess`
    pub source: String,
    /// Tab label
    pub label: String,
    /// Whether the tab may enter edit mode
    pub editable: bool,
    /// Markdown for document views
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<String>,
    /// URL for frame views
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame: Option<String>,
}

/// Resolves `id` against an empty registry.
pub async fn resolve(resolver: &ContentResolver, id: &str) -> (FileRef, Resolution) {
    let registry = FileRegistry::new();
    let file_ref = resolver.classify(id, &registry);
    let resolved = resolver.resolve(&file_ref, &registry).await;
    let (document, frame) = match resolved.view {
        ContentView::Document(text) => (Some(text), None),
        ContentView::Frame(target) => (None, Some(target.url().to_string())),
    };

    let resolution = Resolution {
        id: id.to_string(),
        source: file_ref.to_string(),
        label: resolver.display_name(id, &registry),
        editable: file_ref.is_editable(),
        document,
        frame,
    };
    (file_ref, resolution)
}

/// Prints the resolution of `id`. Unknown identifiers still print the
/// placeholder document but exit with `INVALID_INPUT`.
pub async fn run(
    resolver: &ContentResolver,
    id: &str,
    output_format: OutputFormat,
) -> Result<ExitCode> {
    info!("Resolving {id}");
    let (file_ref, resolution) = resolve(resolver, id).await;

    match output_format {
        OutputFormat::Pretty => {
            println!("{} {}", resolution.label.bold(), resolution.source.dimmed());
            if let Some(url) = &resolution.frame {
                println!("Demo: {}", url.underline());
            }
            if let Some(text) = &resolution.document {
                println!("{}", pretty::markdown(text));
            }
        }
        format => println!("{}", format_output(&resolution, format)?),
    }

    Ok(match file_ref {
        FileRef::Unknown(_) => ExitCode::INVALID_INPUT,
        _ => ExitCode::SUCCESS,
    })
}
