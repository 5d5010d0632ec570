//! Panel sizes and visibility of the shell chrome.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Allowed sidebar widths in pixels.
pub const SIDEBAR_WIDTH: RangeInclusive<u32> = 150..=500;
/// Allowed terminal heights in pixels.
pub const TERMINAL_HEIGHT: RangeInclusive<u32> = 100..=600;
/// Initial sidebar width and terminal height.
pub const DEFAULT_PANEL_SIZE: u32 = 256;

/// Activity bar entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActivityView {
    /// File explorer
    Explorer,
    /// Search
    Search,
    /// Source control
    SourceControl,
    /// Run and debug
    RunDebug,
    /// Extensions
    Extensions,
}

impl ActivityView {
    /// Every view in activity bar order.
    pub const ALL: [Self; 5] = [
        Self::Explorer,
        Self::Search,
        Self::SourceControl,
        Self::RunDebug,
        Self::Extensions,
    ];

    /// Label shown on hover.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Explorer => "Explorer",
            Self::Search => "Search",
            Self::SourceControl => "Source Control",
            Self::RunDebug => "Run and Debug",
            Self::Extensions => "Extensions",
        }
    }
}

impl fmt::Display for ActivityView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ActivityView {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "explorer" => Ok(Self::Explorer),
            "search" => Ok(Self::Search),
            "git" | "scm" | "source-control" => Ok(Self::SourceControl),
            "debug" | "run" | "run-debug" => Ok(Self::RunDebug),
            "extensions" => Ok(Self::Extensions),
            _ => Err(format!("unknown view: {s}")),
        }
    }
}

/// Chrome layout state.
///
/// # Examples
///
/// ```
/// use devfolio_workbench::Layout;
///
/// let mut layout = Layout::default();
/// layout.resize_sidebar(9000);
/// layout.resize_terminal(0);
///
/// assert_eq!(layout.sidebar_width(), 500);
/// assert_eq!(layout.terminal_height(), 100);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    sidebar_width: u32,
    terminal_height: u32,
    terminal_collapsed: bool,
    mobile_menu_open: bool,
    mobile_sidebar_open: bool,
    active_view: Option<ActivityView>,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            sidebar_width: DEFAULT_PANEL_SIZE,
            terminal_height: DEFAULT_PANEL_SIZE,
            terminal_collapsed: false,
            mobile_menu_open: false,
            mobile_sidebar_open: false,
            active_view: Some(ActivityView::Explorer),
        }
    }
}

impl Layout {
    /// Sidebar width in pixels.
    #[must_use]
    pub const fn sidebar_width(&self) -> u32 {
        self.sidebar_width
    }

    /// Terminal height in pixels.
    #[must_use]
    pub const fn terminal_height(&self) -> u32 {
        self.terminal_height
    }

    /// Returns `true` when the terminal shows only its title bar.
    #[must_use]
    pub const fn terminal_collapsed(&self) -> bool {
        self.terminal_collapsed
    }

    /// Returns `true` when the mobile menu is open.
    #[must_use]
    pub const fn mobile_menu_open(&self) -> bool {
        self.mobile_menu_open
    }

    /// Returns `true` when the mobile sidebar overlay is open.
    #[must_use]
    pub const fn mobile_sidebar_open(&self) -> bool {
        self.mobile_sidebar_open
    }

    /// Selected activity view, if the sidebar is showing one.
    #[must_use]
    pub const fn active_view(&self) -> Option<ActivityView> {
        self.active_view
    }

    /// Sets the sidebar width, clamped to [`SIDEBAR_WIDTH`].
    pub fn resize_sidebar(&mut self, width: u32) {
        self.sidebar_width = width.clamp(*SIDEBAR_WIDTH.start(), *SIDEBAR_WIDTH.end());
    }

    /// Sets the terminal height, clamped to [`TERMINAL_HEIGHT`].
    pub fn resize_terminal(&mut self, height: u32) {
        self.terminal_height = height.clamp(*TERMINAL_HEIGHT.start(), *TERMINAL_HEIGHT.end());
    }

    /// Collapses or expands the terminal.
    pub const fn toggle_terminal(&mut self) {
        self.terminal_collapsed = !self.terminal_collapsed;
    }

    /// Shows or hides the explorer; also flips the mobile sidebar.
    pub const fn toggle_explorer(&mut self) {
        self.active_view = match self.active_view {
            Some(ActivityView::Explorer) => None,
            _ => Some(ActivityView::Explorer),
        };
        self.mobile_sidebar_open = !self.mobile_sidebar_open;
    }

    /// Selects an activity view.
    pub const fn select_view(&mut self, view: ActivityView) {
        self.active_view = Some(view);
    }

    /// Opens or closes the mobile menu.
    pub const fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    /// Opens or closes the mobile sidebar.
    pub const fn toggle_mobile_sidebar(&mut self) {
        self.mobile_sidebar_open = !self.mobile_sidebar_open;
    }

    /// Closes the mobile sidebar (tap on the overlay).
    pub const fn close_mobile_sidebar(&mut self) {
        self.mobile_sidebar_open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let layout = Layout::default();
        assert_eq!(layout.sidebar_width(), 256);
        assert_eq!(layout.terminal_height(), 256);
        assert!(!layout.terminal_collapsed());
        assert_eq!(layout.active_view(), Some(ActivityView::Explorer));
    }

    #[test]
    fn test_clamps_hold_for_all_inputs() {
        let mut layout = Layout::default();
        for value in [0, 99, 100, 149, 150, 320, 500, 501, 600, 601, u32::MAX] {
            layout.resize_sidebar(value);
            layout.resize_terminal(value);
            assert!(SIDEBAR_WIDTH.contains(&layout.sidebar_width()));
            assert!(TERMINAL_HEIGHT.contains(&layout.terminal_height()));
        }
        layout.resize_sidebar(320);
        assert_eq!(layout.sidebar_width(), 320);
    }

    #[test]
    fn test_toggle_explorer() {
        let mut layout = Layout::default();
        layout.toggle_explorer();
        assert_eq!(layout.active_view(), None);
        assert!(layout.mobile_sidebar_open());

        layout.select_view(ActivityView::Search);
        layout.toggle_explorer();
        assert_eq!(layout.active_view(), Some(ActivityView::Explorer));
        assert!(!layout.mobile_sidebar_open());
    }

    #[test]
    fn test_toggle_terminal_and_mobile() {
        let mut layout = Layout::default();
        layout.toggle_terminal();
        assert!(layout.terminal_collapsed());
        layout.toggle_mobile_menu();
        assert!(layout.mobile_menu_open());
        layout.toggle_mobile_sidebar();
        layout.close_mobile_sidebar();
        assert!(!layout.mobile_sidebar_open());
    }

    #[test]
    fn test_view_from_str() {
        assert_eq!("git".parse(), Ok(ActivityView::SourceControl));
        assert_eq!("Explorer".parse(), Ok(ActivityView::Explorer));
        assert!("terminal".parse::<ActivityView>().is_err());
    }
}
