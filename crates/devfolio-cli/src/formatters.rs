//! Output formatters for CLI commands.
//!
//! Every command that prints structured data goes through
//! [`format_output`], so `--format` behaves the same everywhere.

use anyhow::Result;
use colored::Colorize;
use devfolio_core::cli::OutputFormat;
use serde::Serialize;

/// Formats `data` according to `format`.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
///
/// # Examples
///
/// ```
/// use devfolio_cli::formatters::format_output;
/// use devfolio_core::cli::OutputFormat;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Tab {
///     id: String,
///     active: bool,
/// }
///
/// let tab = Tab { id: "alqavi.md".to_string(), active: true };
///
/// let output = format_output(&tab, OutputFormat::Json)?;
/// assert!(output.contains("\"id\""));
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn format_output<T: Serialize>(data: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json::format(data),
        OutputFormat::Text => text::format(data),
        OutputFormat::Pretty => pretty::format(data),
    }
}

/// JSON output formatting.
pub mod json {
    use super::{Result, Serialize};

    /// Formats data as JSON with 2-space indentation.
    pub fn format<T: Serialize>(data: &T) -> Result<String> {
        Ok(serde_json::to_string_pretty(data)?)
    }

    /// Formats data as single-line JSON.
    pub fn format_compact<T: Serialize>(data: &T) -> Result<String> {
        Ok(serde_json::to_string(data)?)
    }
}

/// Plain text output formatting.
pub mod text {
    use super::{Result, Serialize, json};

    /// Formats data for scripts: single-line JSON, no colors.
    pub fn format<T: Serialize>(data: &T) -> Result<String> {
        json::format_compact(data)
    }
}

/// Pretty (human-readable) output formatting.
pub mod pretty {
    use super::{Colorize, Result, Serialize};
    use serde_json::Value;

    /// Formats data as colorized, indented output.
    pub fn format<T: Serialize>(data: &T) -> Result<String> {
        let value = serde_json::to_value(data)?;
        Ok(format_value(&value, 0))
    }

    /// Colors markdown headings; other lines are left as they are.
    #[must_use]
    pub fn markdown(text: &str) -> String {
        text.lines()
            .map(|line| {
                if line.starts_with('#') {
                    line.bold().cyan().to_string()
                } else if line.starts_with("**Error**") || line.starts_with("**Note**") {
                    line.yellow().to_string()
                } else {
                    line.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn format_value(value: &Value, indent: usize) -> String {
        let indent_str = "  ".repeat(indent);
        let next_indent_str = "  ".repeat(indent + 1);

        match value {
            Value::Null => "null".dimmed().to_string(),
            Value::Bool(b) => b.to_string().yellow().to_string(),
            Value::Number(n) => n.to_string().cyan().to_string(),
            // Multi-line strings (document bodies) read better unquoted
            Value::String(s) if s.contains('\n') => {
                let body = s
                    .lines()
                    .map(|line| format!("{next_indent_str}{}", line.green()))
                    .collect::<Vec<_>>()
                    .join("\n");
                format!("|\n{body}")
            }
            Value::String(s) => format!("\"{}\"", s.green()),
            Value::Array(items) => {
                if items.is_empty() {
                    return "[]".to_string();
                }
                let body = items
                    .iter()
                    .map(|item| format!("{next_indent_str}{}", format_value(item, indent + 1)))
                    .collect::<Vec<_>>()
                    .join(",\n");
                format!("[\n{body}\n{indent_str}]")
            }
            Value::Object(fields) => {
                if fields.is_empty() {
                    return "{}".to_string();
                }
                let body = fields
                    .iter()
                    .map(|(key, val)| {
                        format!(
                            "{next_indent_str}\"{}\": {}",
                            key.blue().bold(),
                            format_value(val, indent + 1)
                        )
                    })
                    .collect::<Vec<_>>()
                    .join(",\n");
                format!("{{\n{body}\n{indent_str}}}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct TabData {
        id: String,
        position: u32,
        active: bool,
        body: Option<String>,
    }

    fn tab() -> TabData {
        TabData {
            id: "contact.md".to_string(),
            position: 2,
            active: true,
            body: Some("# Contact\n\nmail me".to_string()),
        }
    }

    #[test]
    fn test_json_format() {
        let output = json::format(&tab()).unwrap();
        assert!(output.contains("\"id\": \"contact.md\""));
        assert!(output.contains("\"position\": 2"));
        assert!(output.contains('\n'));
    }

    #[test]
    fn test_text_format_is_single_line() {
        let output = format_output(&tab(), OutputFormat::Text).unwrap();
        assert!(!output.contains('\n'));
        assert!(output.contains("\"id\":\"contact.md\""));
        assert!(output.contains("\\n\\nmail me"));
    }

    #[test]
    fn test_pretty_format() {
        colored::control::set_override(false);
        let output = format_output(&tab(), OutputFormat::Pretty).unwrap();
        assert!(output.contains("\"id\": \"contact.md\""));
        assert!(output.contains("\"active\": true"));
        // multi-line body is printed as a block
        assert!(output.contains("|\n    # Contact"));
        assert!(output.contains("    mail me"));
    }

    #[test]
    fn test_pretty_empty_collections() {
        colored::control::set_override(false);
        assert_eq!(pretty::format(&Vec::<u8>::new()).unwrap(), "[]");
        assert_eq!(
            pretty::format(&serde_json::Map::new()).unwrap(),
            "{}"
        );
    }

    #[test]
    fn test_markdown_keeps_text() {
        colored::control::set_override(false);
        let text = "# Title\n\nbody\n**Note**: x";
        assert_eq!(pretty::markdown(text), "# Title\n\nbody\n**Note**: x");
    }
}
