//! Lists the project catalog.

use crate::formatters::format_output;
use anyhow::Result;
use colored::Colorize;
use devfolio_content::normalize_demo_url;
use devfolio_core::cli::{ExitCode, OutputFormat};
use devfolio_core::{Project, ProjectCatalog};
use serde::Serialize;

/// One catalog entry with the identifiers it contributes to the explorer.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectEntry {
    /// Project id
    pub id: String,
    /// Display name
    pub display_name: String,
    /// Description, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Identifier of the README tab
    #[serde(skip_serializing_if = "Option::is_none")]
    pub readme: Option<String>,
    /// Identifier of the demo tab
    #[serde(skip_serializing_if = "Option::is_none")]
    pub demo: Option<String>,
    /// Normalized demo URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub demo_url: Option<String>,
}

impl From<&Project> for ProjectEntry {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id.to_string(),
            display_name: project.display_name.clone(),
            description: project.description.clone(),
            readme: project.repository().map(|_| project.id.readme_path()),
            demo: project.demo().map(|_| project.id.demo_path(&project.name)),
            demo_url: project.demo().map(normalize_demo_url),
        }
    }
}

/// Prints every project in catalog order.
pub async fn run(catalog: &ProjectCatalog, output_format: OutputFormat) -> Result<ExitCode> {
    let entries: Vec<ProjectEntry> = catalog.iter().map(ProjectEntry::from).collect();

    match output_format {
        OutputFormat::Pretty => {
            if entries.is_empty() {
                println!("{}", "No projects in the catalog.".dimmed());
            }
            for entry in &entries {
                println!("{} {}", entry.display_name.bold(), entry.id.dimmed());
                if let Some(description) = &entry.description {
                    println!("  {description}");
                }
                for id in [&entry.readme, &entry.demo].into_iter().flatten() {
                    println!("  {}", id.cyan());
                }
            }
        }
        format => println!("{}", format_output(&entries, format)?),
    }

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_identifiers() {
        let catalog = ProjectCatalog::from_json_str(
            r#"[
                {"id": "chess", "name": "chess", "displayName": "Chess",
                 "githubUrl": "https://github.com/alqavi/chess", "demoUrl": "chess.dev"},
                {"id": "notes", "name": "notes", "displayName": "Notes", "githubUrl": " "}
            ]"#,
        )
        .unwrap();
        let entries: Vec<ProjectEntry> = catalog.iter().map(ProjectEntry::from).collect();

        assert_eq!(entries[0].readme.as_deref(), Some("projects/chess/README.md"));
        assert_eq!(entries[0].demo.as_deref(), Some("projects/chess/chess"));
        assert_eq!(entries[0].demo_url.as_deref(), Some("https://chess.dev"));
        assert_eq!(entries[1].readme, None);
        assert_eq!(entries[1].demo, None);
    }
}
