//! Simulated PowerShell terminal.
//!
//! Only `cls`/`clear` and `cd` are understood; every other command is
//! answered with the shell's "not recognized" error.
//!
//! # Examples
//!
//! ```
//! use devfolio_workbench::{Line, TerminalSimulator};
//!
//! let mut terminal = TerminalSimulator::default();
//! terminal.submit(r"cd C:\temp");
//! terminal.submit("cd");
//!
//! assert_eq!(terminal.path(), r"C:\temp");
//! assert_eq!(terminal.lines().last(), Some(&Line::Output(r"C:\temp".to_string())));
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Working path of a fresh terminal.
pub const DEFAULT_PATH: &str = r"C:\Users\alqavi";

/// Lines shown at startup and after `cls`.
pub const BANNER: [&str; 2] = [
    "Windows PowerShell",
    "Copyright (C) Microsoft Corporation. All rights reserved.",
];

/// One scrollback line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "text", rename_all = "lowercase")]
pub enum Line {
    /// Echoed prompt and input
    Input(String),
    /// Command output
    Output(String),
    /// Command error
    Error(String),
}

impl Line {
    /// Text of the line.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Input(text) | Self::Output(text) | Self::Error(text) => text,
        }
    }
}

/// Scrollback, working path and pending input of the terminal panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalSimulator {
    lines: Vec<Line>,
    path: String,
    input: String,
}

impl Default for TerminalSimulator {
    fn default() -> Self {
        Self::new(DEFAULT_PATH)
    }
}

impl TerminalSimulator {
    /// Creates a terminal showing the banner at `path`.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            lines: banner(),
            path: path.into(),
            input: String::new(),
        }
    }

    /// Scrollback, oldest first.
    #[must_use]
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Current working path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Prompt prefix, `<path>> `.
    #[must_use]
    pub fn prompt(&self) -> String {
        format!("{}> ", self.path)
    }

    /// Text typed but not yet submitted.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Replaces the pending input.
    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    /// Discards the pending input (Escape).
    pub fn clear_input(&mut self) {
        self.input.clear();
    }

    /// Submits the pending input and clears it (Enter).
    pub fn submit_input(&mut self) {
        let input = std::mem::take(&mut self.input);
        self.submit(&input);
    }

    /// Runs one command line.
    pub fn submit(&mut self, input: &str) {
        let command = input.trim();
        if command.is_empty() {
            self.lines.push(Line::Input(self.prompt()));
            return;
        }

        self.lines.push(Line::Input(format!("{}{input}", self.prompt())));

        let lowered = command.to_lowercase();
        if lowered == "cls" || lowered == "clear" {
            self.lines = banner();
            return;
        }

        if lowered == "cd" {
            self.lines.push(Line::Output(self.path.clone()));
            return;
        }

        if lowered.starts_with("cd ") {
            // `cd ` is ASCII, so byte offset 3 is a char boundary in `command`.
            let target = command[3..].trim();
            debug!(from = %self.path, to = target, "changed directory");
            self.path = target.to_string();
            self.lines.push(Line::Output(String::new()));
            return;
        }

        let token = command.split_whitespace().next().unwrap_or(command);
        self.lines.push(Line::Error(format!(
            "'{token}' is not recognized as an internal or external command,\noperable program or batch file."
        )));
    }
}

fn banner() -> Vec<Line> {
    BANNER.iter().map(|line| Line::Output((*line).to_string())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_with_banner() {
        let terminal = TerminalSimulator::default();
        assert_eq!(terminal.lines(), banner().as_slice());
        assert_eq!(terminal.path(), DEFAULT_PATH);
    }

    #[test]
    fn test_empty_input_only_prompts() {
        let mut terminal = TerminalSimulator::default();
        terminal.submit("   ");
        assert_eq!(
            terminal.lines().last(),
            Some(&Line::Input(r"C:\Users\alqavi> ".to_string()))
        );
        assert_eq!(terminal.lines().len(), 3);
    }

    #[test]
    fn test_cls_resets_to_banner() {
        let mut terminal = TerminalSimulator::default();
        terminal.submit("foo");
        terminal.submit(r"cd D:\work");
        terminal.submit("CLS");
        assert_eq!(terminal.lines(), banner().as_slice());
        assert_eq!(terminal.path(), r"D:\work");

        terminal.submit("clear");
        assert_eq!(terminal.lines().len(), 2);
    }

    #[test]
    fn test_unknown_command_names_first_token() {
        let mut terminal = TerminalSimulator::default();
        terminal.submit("foo bar");
        assert_eq!(
            terminal.lines()[2],
            Line::Input(r"C:\Users\alqavi> foo bar".to_string())
        );
        assert_eq!(
            terminal.lines()[3],
            Line::Error(
                "'foo' is not recognized as an internal or external command,\noperable program or batch file."
                    .to_string()
            )
        );
    }

    #[test]
    fn test_cd_without_argument_echoes_path() {
        let mut terminal = TerminalSimulator::default();
        terminal.submit("cd");
        assert_eq!(
            terminal.lines().last(),
            Some(&Line::Output(DEFAULT_PATH.to_string()))
        );
    }

    #[test]
    fn test_cd_replaces_path_wholesale() {
        let mut terminal = TerminalSimulator::default();
        terminal.submit(r"CD C:\temp");
        assert_eq!(terminal.lines().last(), Some(&Line::Output(String::new())));

        terminal.submit("cd ../relative   ");
        assert_eq!(terminal.path(), "../relative");
        assert_eq!(
            terminal.lines()[terminal.lines().len() - 2],
            Line::Input(r"C:\temp> cd ../relative   ".to_string())
        );
    }

    #[test]
    fn test_cdx_is_not_cd() {
        let mut terminal = TerminalSimulator::default();
        terminal.submit("cdx");
        assert!(matches!(terminal.lines().last(), Some(Line::Error(text)) if text.starts_with("'cdx'")));
    }

    #[test]
    fn test_input_buffer() {
        let mut terminal = TerminalSimulator::default();
        terminal.set_input("dir");
        terminal.clear_input();
        assert_eq!(terminal.input(), "");

        terminal.set_input("dir");
        terminal.submit_input();
        assert_eq!(terminal.input(), "");
        assert!(matches!(terminal.lines().last(), Some(Line::Error(_))));
    }

    #[test]
    fn test_line_serializes_tagged() {
        let json = serde_json::to_string(&Line::Error("x".into())).unwrap();
        assert_eq!(json, r#"{"type":"error","text":"x"}"#);
    }
}
