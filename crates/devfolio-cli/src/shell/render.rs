//! Human-readable rendering of workbench state.

use crate::formatters::pretty;
use colored::Colorize;
use devfolio_files::VirtualFile;
use devfolio_workbench::{
    EditorSnapshot, Layout, Line, MENU_BAR, MenuEntry, Notification, TabInfo, Theme, TreeNode,
};

/// Tab strip, active tab in brackets.
#[must_use]
pub fn tab_strip(tabs: &[TabInfo]) -> String {
    if tabs.is_empty() {
        return "(no open tabs)".dimmed().to_string();
    }
    tabs.iter()
        .map(|tab| {
            let label = if tab.editable {
                tab.label.clone()
            } else {
                format!("{} (read-only)", tab.label)
            };
            if tab.active {
                format!("[{label}]").bold().to_string()
            } else {
                label
            }
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Editor area: tabs, mode and the document or frame.
#[must_use]
pub fn editor(snapshot: &EditorSnapshot) -> Vec<String> {
    let mut out = vec![tab_strip(&snapshot.tabs)];
    if snapshot.active.is_none() {
        out.push("No file open. Use :open or the explorer (:tree).".dimmed().to_string());
        return out;
    }

    if snapshot.mode == "edit" {
        out.push("-- EDIT -- (:edit to preview, :save to save)".yellow().to_string());
        out.push(snapshot.text.clone().unwrap_or_default());
        return out;
    }

    if let Some(url) = &snapshot.frame_url {
        out.push(format!("Demo: {}", url.underline()));
        if snapshot.frame_loading {
            out.push("Loading demo...".dimmed().to_string());
        }
        if let Some(fallback) = &snapshot.frame_fallback {
            out.push(format!(
                "{} Open in a new tab: {fallback}",
                "Unable to load demo.".red()
            ));
        }
        return out;
    }

    if let Some(text) = &snapshot.text {
        out.push(pretty::markdown(text));
    }
    out
}

/// Explorer tree, one entry per line.
#[must_use]
pub fn tree(root: &TreeNode) -> Vec<String> {
    root.flatten()
        .into_iter()
        .map(|(depth, node)| {
            let indent = "  ".repeat(depth);
            match node {
                TreeNode::Folder {
                    key,
                    label,
                    expanded,
                    ..
                } => {
                    let marker = if *expanded { "v" } else { ">" };
                    format!("{indent}{marker} {}  {}", label.bold(), key.dimmed())
                }
                TreeNode::File { id, label } if id == label => format!("{indent}  {label}"),
                TreeNode::File { id, label } => format!("{indent}  {label}  {}", id.dimmed()),
            }
        })
        .collect()
}

/// Registry listing.
#[must_use]
pub fn files(files: &[&VirtualFile]) -> Vec<String> {
    if files.is_empty() {
        return vec!["(no files; create one with :new or :upload)".dimmed().to_string()];
    }
    files
        .iter()
        .map(|file| {
            format!(
                "{:<8} {:<24} {:>6} B  {}",
                file.id.as_str().cyan(),
                file.name,
                file.size(),
                file.modified_at.format("%Y-%m-%d %H:%M:%S").to_string().dimmed()
            )
        })
        .collect()
}

/// Terminal scrollback lines.
#[must_use]
pub fn terminal(lines: &[Line]) -> Vec<String> {
    lines
        .iter()
        .map(|line| match line {
            Line::Input(text) => text.bold().to_string(),
            Line::Output(text) => text.clone(),
            Line::Error(text) => text.red().to_string(),
        })
        .collect()
}

/// A notification, colored by kind.
#[must_use]
pub fn notification(notification: &Notification) -> String {
    let text = notification.to_string();
    match notification {
        Notification::Error { .. } => text.red().to_string(),
        Notification::Saved { .. } | Notification::Exported { .. } => text.green().to_string(),
        Notification::Info { .. } => text,
    }
}

/// Menu bar with shortcuts.
#[must_use]
pub fn menu_bar() -> Vec<String> {
    let mut out = Vec::new();
    for menu in MENU_BAR {
        out.push(menu.label.bold().to_string());
        for entry in menu.items {
            match entry {
                MenuEntry::Item {
                    label,
                    shortcut,
                    command,
                } => {
                    let line = format!("  {label:<28} {}", shortcut.unwrap_or_default());
                    out.push(if command.is_some() {
                        line
                    } else {
                        line.dimmed().to_string()
                    });
                }
                MenuEntry::Divider => out.push(format!("  {}", "-".repeat(36).dimmed())),
            }
        }
    }
    out
}

/// Numbered theme list.
#[must_use]
pub fn themes() -> Vec<String> {
    Theme::ALL
        .iter()
        .enumerate()
        .map(|(i, theme)| format!("{}. {theme}", i + 1))
        .collect()
}

/// Layout summary.
#[must_use]
pub fn layout(layout: &Layout) -> Vec<String> {
    let view = layout
        .active_view()
        .map_or_else(|| "(sidebar hidden)".to_string(), |view| view.to_string());
    vec![
        format!("sidebar:  {view}, {} px", layout.sidebar_width()),
        format!(
            "terminal: {}, {} px",
            if layout.terminal_collapsed() {
                "collapsed"
            } else {
                "open"
            },
            layout.terminal_height()
        ),
        format!(
            "mobile:   menu {}, sidebar {}",
            open_closed(layout.mobile_menu_open()),
            open_closed(layout.mobile_sidebar_open())
        ),
    ]
}

const fn open_closed(open: bool) -> &'static str {
    if open { "open" } else { "closed" }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tab(label: &str, active: bool, editable: bool) -> TabInfo {
        TabInfo {
            id: label.to_string(),
            label: label.to_string(),
            active,
            editable,
        }
    }

    fn snapshot() -> EditorSnapshot {
        EditorSnapshot {
            tabs: vec![tab("alqavi.md", true, true)],
            active: Some("alqavi.md".into()),
            mode: "view",
            text: Some("# About\n\nhello".into()),
            frame_url: None,
            frame_loading: false,
            frame_fallback: None,
        }
    }

    #[test]
    fn test_tab_strip() {
        colored::control::set_override(false);
        let tabs = [tab("alqavi.md", false, true), tab("README.md", true, false)];
        assert_eq!(tab_strip(&tabs), "alqavi.md | [README.md (read-only)]");
        assert_eq!(tab_strip(&[]), "(no open tabs)");
    }

    #[test]
    fn test_editor_document_and_edit() {
        colored::control::set_override(false);
        assert_eq!(editor(&snapshot()), ["[alqavi.md]", "# About\n\nhello"]);

        let mut editing = snapshot();
        editing.mode = "edit";
        editing.text = Some("draft".into());
        let lines = editor(&editing);
        assert!(lines[1].starts_with("-- EDIT --"));
        assert_eq!(lines[2], "draft");
    }

    #[test]
    fn test_editor_frame_states() {
        colored::control::set_override(false);
        let mut frame = snapshot();
        frame.text = None;
        frame.frame_url = Some("https://chess.dev".into());
        frame.frame_loading = true;
        let lines = editor(&frame);
        assert_eq!(lines[1], "Demo: https://chess.dev");
        assert_eq!(lines[2], "Loading demo...");

        frame.frame_loading = false;
        frame.frame_fallback = Some("https://chess.dev".into());
        let lines = editor(&frame);
        assert!(lines[2].contains("Unable to load demo."));
    }

    #[test]
    fn test_editor_without_tabs() {
        colored::control::set_override(false);
        let empty = EditorSnapshot {
            tabs: Vec::new(),
            active: None,
            mode: "view",
            text: None,
            frame_url: None,
            frame_loading: false,
            frame_fallback: None,
        };
        assert_eq!(editor(&empty).len(), 2);
    }

    #[test]
    fn test_themes_numbered() {
        assert_eq!(themes()[0], "1. Catppuccin Mocha (Current)");
        assert_eq!(themes().len(), 4);
    }

    #[test]
    fn test_layout_summary() {
        colored::control::set_override(false);
        let lines = layout(&Layout::default());
        assert_eq!(lines[0], "sidebar:  Explorer, 256 px");
        assert_eq!(lines[1], "terminal: open, 256 px");
    }
}
