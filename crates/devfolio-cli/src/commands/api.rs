//! Serves one content endpoint from the local data directory.

use crate::actions::DocumentArg;
use crate::formatters::format_output;
use anyhow::Result;
use devfolio_content::DocumentStore;
use devfolio_core::cli::{ExitCode, OutputFormat};
use devfolio_core::{ContentConfig, FixedDocument};
use tracing::info;

/// Prints the endpoint response for `document` and maps its HTTP status
/// to the exit code.
///
/// JSON and text output print the body exactly as the endpoint sends it;
/// pretty output also shows the status.
pub async fn run(
    document: DocumentArg,
    config: &ContentConfig,
    output_format: OutputFormat,
) -> Result<ExitCode> {
    let doc = FixedDocument::from(document);
    info!("Serving {} from {}", doc.endpoint(), config.data_dir.display());

    let response = DocumentStore::new(&config.data_dir).handle(doc).await;
    let output = match output_format {
        OutputFormat::Pretty => format_output(&response, output_format)?,
        OutputFormat::Json | OutputFormat::Text => response.body_json()?,
    };
    println!("{output}");

    Ok(ExitCode::from_http_status(response.status))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn config(dir: &TempDir) -> ContentConfig {
        ContentConfig {
            data_dir: dir.path().to_path_buf(),
            ..ContentConfig::default()
        }
    }

    #[tokio::test]
    async fn test_existing_document_succeeds() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("contact.md"), "# Contact").unwrap();

        let code = run(DocumentArg::Contact, &config(&dir), OutputFormat::Json)
            .await
            .unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
    }

    #[tokio::test]
    async fn test_missing_document_is_content_error() {
        let dir = TempDir::new().unwrap();

        let code = run(DocumentArg::About, &config(&dir), OutputFormat::Text)
            .await
            .unwrap();
        assert_eq!(code, ExitCode::CONTENT_ERROR);
    }
}
