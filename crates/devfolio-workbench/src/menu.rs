//! Menu bar, keyboard shortcuts and themes.
//!
//! Most entries are decorative. The ones carrying a [`MenuCommand`] are the
//! only ones that do anything.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Commands reachable from the menu bar or a shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MenuCommand {
    /// Prompt for a name and create a registry file
    NewFile,
    /// Pick a local file to upload
    OpenFile,
    /// Save the active tab
    Save,
    /// Export the active buffer under a new name
    SaveAs,
    /// Show or hide the explorer
    ToggleExplorer,
    /// Collapse or expand the terminal
    ToggleTerminal,
    /// Choose a theme
    Appearance,
}

/// One menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum MenuEntry {
    /// Clickable item
    Item {
        /// Label
        label: &'static str,
        /// Shortcut label
        #[serde(skip_serializing_if = "Option::is_none")]
        shortcut: Option<&'static str>,
        /// Command run on click
        #[serde(skip_serializing_if = "Option::is_none")]
        command: Option<MenuCommand>,
    },
    /// Separator
    Divider,
}

/// A top-level menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Menu {
    /// Menu title
    pub label: &'static str,
    /// Entries in display order
    pub items: &'static [MenuEntry],
}

const fn item(label: &'static str, shortcut: &'static str) -> MenuEntry {
    MenuEntry::Item {
        label,
        shortcut: Some(shortcut),
        command: None,
    }
}

const fn bare(label: &'static str) -> MenuEntry {
    MenuEntry::Item {
        label,
        shortcut: None,
        command: None,
    }
}

const fn action(label: &'static str, shortcut: Option<&'static str>, command: MenuCommand) -> MenuEntry {
    MenuEntry::Item {
        label,
        shortcut,
        command: Some(command),
    }
}

const DIVIDER: MenuEntry = MenuEntry::Divider;

/// The menu bar, left to right.
pub const MENU_BAR: &[Menu] = &[
    Menu {
        label: "File",
        items: &[
            action("New File", Some("Ctrl+N"), MenuCommand::NewFile),
            item("New Window", "Ctrl+Shift+N"),
            DIVIDER,
            action("Open File...", Some("Ctrl+O"), MenuCommand::OpenFile),
            item("Open Folder...", "Ctrl+K Ctrl+O"),
            DIVIDER,
            action("Save", Some("Ctrl+S"), MenuCommand::Save),
            action("Save As...", Some("Ctrl+Shift+S"), MenuCommand::SaveAs),
            DIVIDER,
            bare("Exit"),
        ],
    },
    Menu {
        label: "Edit",
        items: &[
            item("Undo", "Ctrl+Z"),
            item("Redo", "Ctrl+Y"),
            DIVIDER,
            item("Cut", "Ctrl+X"),
            item("Copy", "Ctrl+C"),
            item("Paste", "Ctrl+V"),
            DIVIDER,
            item("Find", "Ctrl+F"),
            item("Replace", "Ctrl+H"),
        ],
    },
    Menu {
        label: "Selection",
        items: &[
            item("Select All", "Ctrl+A"),
            item("Expand Selection", "Shift+Alt+Right"),
            item("Shrink Selection", "Shift+Alt+Left"),
            DIVIDER,
            item("Copy Line Up", "Shift+Alt+Up"),
            item("Copy Line Down", "Shift+Alt+Down"),
        ],
    },
    Menu {
        label: "View",
        items: &[
            item("Command Palette...", "Ctrl+Shift+P"),
            DIVIDER,
            action("Explorer", Some("Ctrl+Shift+E"), MenuCommand::ToggleExplorer),
            item("Search", "Ctrl+Shift+F"),
            item("Source Control", "Ctrl+Shift+G"),
            DIVIDER,
            action("Terminal", Some("Ctrl+`"), MenuCommand::ToggleTerminal),
            DIVIDER,
            action("Appearance", None, MenuCommand::Appearance),
            bare("Editor Layout"),
        ],
    },
    Menu {
        label: "Go",
        items: &[
            item("Back", "Alt+Left"),
            item("Forward", "Alt+Right"),
            DIVIDER,
            item("Go to File...", "Ctrl+P"),
            item("Go to Symbol...", "Ctrl+Shift+O"),
            item("Go to Line/Column...", "Ctrl+G"),
        ],
    },
    Menu {
        label: "Run",
        items: &[
            item("Start Debugging", "F5"),
            item("Run Without Debugging", "Ctrl+F5"),
            DIVIDER,
            item("Stop", "Shift+F5"),
            DIVIDER,
            item("Step Over", "F10"),
            item("Step Into", "F11"),
            item("Step Out", "Shift+F11"),
        ],
    },
    Menu {
        label: "Terminal",
        items: &[
            item("New Terminal", "Ctrl+Shift+`"),
            bare("Split Terminal"),
            DIVIDER,
            bare("Run Task..."),
            item("Run Build Task...", "Ctrl+Shift+B"),
        ],
    },
    Menu {
        label: "Help",
        items: &[
            bare("Welcome"),
            bare("Documentation"),
            DIVIDER,
            bare("Keyboard Shortcuts Reference"),
            DIVIDER,
            bare("About"),
        ],
    },
];

/// Finds the command bound to a shortcut label such as `ctrl+shift+s`.
///
/// Matching ignores case and spaces around `+`.
///
/// # Examples
///
/// ```
/// use devfolio_workbench::{MenuCommand, command_for_shortcut};
///
/// assert_eq!(command_for_shortcut("Ctrl+S"), Some(MenuCommand::Save));
/// assert_eq!(command_for_shortcut("ctrl + shift + s"), Some(MenuCommand::SaveAs));
/// assert_eq!(command_for_shortcut("Ctrl+Z"), None);
/// ```
#[must_use]
pub fn command_for_shortcut(shortcut: &str) -> Option<MenuCommand> {
    let wanted = normalize_shortcut(shortcut);
    MENU_BAR
        .iter()
        .flat_map(|menu| menu.items)
        .find_map(|entry| match entry {
            MenuEntry::Item {
                shortcut: Some(bound),
                command: Some(command),
                ..
            } if normalize_shortcut(bound) == wanted => Some(*command),
            _ => None,
        })
}

/// Finds the command behind a menu item, e.g. `("File", "Save As...")`.
#[must_use]
pub fn command_for_item(menu: &str, label: &str) -> Option<MenuCommand> {
    let label = label.trim().trim_end_matches("...");
    MENU_BAR
        .iter()
        .find(|m| m.label.eq_ignore_ascii_case(menu.trim()))?
        .items
        .iter()
        .find_map(|entry| match entry {
            MenuEntry::Item {
                label: item_label,
                command,
                ..
            } if item_label.trim_end_matches("...").eq_ignore_ascii_case(label) => *command,
            _ => None,
        })
}

fn normalize_shortcut(shortcut: &str) -> String {
    shortcut
        .split('+')
        .map(|part| part.trim().to_lowercase())
        .collect::<Vec<_>>()
        .join("+")
}

/// Color themes offered by the Appearance dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Theme {
    /// Dark theme, the only one implemented
    Mocha,
    /// Light theme
    Latte,
    /// Low-contrast dark theme
    Frappe,
    /// Medium dark theme
    Macchiato,
}

impl Theme {
    /// Themes in the order the dialog numbers them.
    pub const ALL: [Self; 4] = [Self::Mocha, Self::Latte, Self::Frappe, Self::Macchiato];

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mocha => "Catppuccin Mocha",
            Self::Latte => "Catppuccin Latte",
            Self::Frappe => "Catppuccin Frappé",
            Self::Macchiato => "Catppuccin Macchiato",
        }
    }

    /// Returns `true` for the theme actually applied.
    #[must_use]
    pub const fn is_implemented(self) -> bool {
        matches!(self, Self::Mocha)
    }

    /// Looks up a theme by its 1-based number in the dialog.
    #[must_use]
    pub fn from_choice(choice: usize) -> Option<Self> {
        choice.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }

    /// Confirmation shown after choosing this theme.
    #[must_use]
    pub fn selection_message(self) -> String {
        format!(
            "Theme \"{self}\" selected!\n\nNote: Currently only {} is implemented. Other themes coming soon!",
            Self::Mocha.name()
        )
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_implemented() {
            write!(f, "{} (Current)", self.name())
        } else {
            f.write_str(self.name())
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(choice) = s.parse::<usize>() {
            return Self::from_choice(choice).ok_or_else(|| format!("no theme numbered {choice}"));
        }
        let lowered = s.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|theme| {
                let name = theme.name().to_lowercase();
                name == lowered || name.ends_with(&format!(" {lowered}"))
            })
            .ok_or_else(|| format!("unknown theme: {s}"))
    }
}
