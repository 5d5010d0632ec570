//! Parsing of shell input lines.

use anyhow::{Result, anyhow, bail};
use devfolio_workbench::ActivityView;
use std::path::PathBuf;

/// Separates a command from the answer to its prompt, e.g.
/// `:key ctrl+n -- notes.md`.
const ANSWER_SEPARATOR: &str = " -- ";

/// One line of shell input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// `:`-prefixed workbench command
    Command(ShellCommand),
    /// `>`-prefixed replacement for the edit buffer; `\n` becomes a newline
    Buffer(String),
    /// Anything else goes to the terminal
    Terminal(String),
}

/// Workbench commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    /// Open or focus a tab
    Open(String),
    /// Focus an open tab
    Select(String),
    /// Close a tab, the active one when omitted
    Close(Option<String>),
    /// Toggle view/edit mode
    Edit,
    /// Save the active tab
    Save,
    /// Export the active text under a name
    SaveAs(String),
    /// Create a registry file
    New(String),
    /// Register a local file
    Upload(PathBuf),
    /// Delete a registry file
    Delete(String),
    /// Rename a registry file
    Rename {
        /// Registry id
        id: String,
        /// New name
        name: String,
    },
    /// List open tabs
    Tabs,
    /// Print the explorer, toggling a folder first when a key is given
    Tree(Option<String>),
    /// List registry files
    Files,
    /// Run the command bound to a shortcut
    Key {
        /// Shortcut label
        shortcut: String,
        /// Answer to the command's prompt
        answer: Option<String>,
    },
    /// List the menu bar, or run a menu item
    Menu(Option<MenuPick>),
    /// List themes, or choose one
    Theme(Option<String>),
    /// Show the layout, or change it
    Layout(Option<LayoutChange>),
    /// Feed a signal to the embedded frame
    Frame(FrameSignal),
    /// Redraw the editor area
    Show,
    /// List commands
    Help,
    /// Leave the shell
    Quit,
}

/// A menu item to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuPick {
    /// Menu title
    pub menu: String,
    /// Item label
    pub item: String,
    /// Answer to the item's prompt
    pub answer: Option<String>,
}

/// Layout changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutChange {
    /// Resize the sidebar
    Sidebar(u32),
    /// Resize the terminal
    Terminal(u32),
    /// Collapse or expand the terminal
    ToggleTerminal,
    /// Show or hide the explorer
    ToggleExplorer,
    /// Select an activity view
    View(ActivityView),
    /// Open or close the mobile menu
    MobileMenu,
    /// Open or close the mobile sidebar
    MobileSidebar,
}

/// Frame signals a user can simulate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameSignal {
    /// The frame loaded
    Load,
    /// The frame failed
    Error,
    /// Wait out the loading delay
    Wait,
}

/// Help text, one command per line.
pub const HELP: &[(&str, &str)] = &[
    (":open <id>", "open a file in a tab"),
    (":select <id>", "focus an open tab"),
    (":close [id]", "close a tab (default: active)"),
    (":edit", "toggle edit mode"),
    ("> <text>", "replace the edit buffer (\\n for newlines)"),
    (":save", "save the active tab"),
    (":saveas <name>", "download the active text as <name>"),
    (":new <name>", "create a file"),
    (":upload <path>", "open a local .md or .txt file"),
    (":delete <id>", "delete a file"),
    (":rename <id> <name>", "rename a file"),
    (":tabs", "list open tabs"),
    (":tree [folder]", "show the explorer, toggling a folder"),
    (":files", "list created files"),
    (":key <shortcut> [-- answer]", "press a keyboard shortcut"),
    (":menu [menu item [-- answer]]", "show the menu bar or click an item"),
    (":theme [n|name]", "list or choose a theme"),
    (":layout [change]", "show or change the layout"),
    (":frame load|error|wait", "signal the demo frame"),
    (":show", "redraw the editor"),
    (":quit", "leave"),
];

impl Input {
    /// Parses one line.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown `:` commands and missing arguments.
    ///
    /// # Examples
    ///
    /// ```
    /// use devfolio_cli::shell::{Input, ShellCommand};
    ///
    /// assert_eq!(
    ///     Input::parse(":open contact.md")?,
    ///     Input::Command(ShellCommand::Open("contact.md".into())),
    /// );
    /// assert_eq!(Input::parse("> # Hi\\nthere")?, Input::Buffer("# Hi\nthere".into()));
    /// assert_eq!(Input::parse("cd ..")?, Input::Terminal("cd ..".into()));
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn parse(line: &str) -> Result<Self> {
        if let Some(rest) = line.strip_prefix(':') {
            return ShellCommand::parse(rest).map(Self::Command);
        }
        if let Some(rest) = line.strip_prefix('>') {
            let rest = rest.strip_prefix(' ').unwrap_or(rest);
            return Ok(Self::Buffer(rest.replace("\\n", "\n")));
        }
        Ok(Self::Terminal(line.to_string()))
    }
}

impl ShellCommand {
    fn parse(line: &str) -> Result<Self> {
        let line = line.trim();
        let (name, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(name, rest)| (name, rest.trim()));
        let arg = || -> Result<String> {
            if rest.is_empty() {
                bail!(":{name} needs an argument");
            }
            Ok(rest.to_string())
        };
        let optional = || (!rest.is_empty()).then(|| rest.to_string());

        let command = match name.to_lowercase().as_str() {
            "open" | "o" => Self::Open(arg()?),
            "select" => Self::Select(arg()?),
            "close" => Self::Close(optional()),
            "edit" | "e" => Self::Edit,
            "save" | "w" => Self::Save,
            "saveas" => Self::SaveAs(arg()?),
            "new" => Self::New(arg()?),
            "upload" => Self::Upload(PathBuf::from(arg()?)),
            "delete" | "rm" => Self::Delete(arg()?),
            "rename" | "mv" => {
                let (id, name) = rest
                    .split_once(char::is_whitespace)
                    .ok_or_else(|| anyhow!(":rename needs an id and a name"))?;
                Self::Rename {
                    id: id.to_string(),
                    name: name.trim().to_string(),
                }
            }
            "tabs" => Self::Tabs,
            "tree" => Self::Tree(optional()),
            "files" | "ls" => Self::Files,
            "key" => {
                let (shortcut, answer) = split_answer(&arg()?);
                Self::Key { shortcut, answer }
            }
            "menu" => Self::Menu(optional().map(|pick| parse_menu_pick(&pick)).transpose()?),
            "theme" => Self::Theme(optional()),
            "layout" => Self::Layout(optional().map(|c| parse_layout(&c)).transpose()?),
            "frame" => Self::Frame(match rest.to_lowercase().as_str() {
                "load" => FrameSignal::Load,
                "error" => FrameSignal::Error,
                "wait" | "" => FrameSignal::Wait,
                other => bail!("unknown frame signal: {other}"),
            }),
            "show" => Self::Show,
            "help" | "h" | "?" => Self::Help,
            "quit" | "q" | "exit" => Self::Quit,
            "" => bail!("empty command, try :help"),
            other => bail!("unknown command :{other}, try :help"),
        };
        Ok(command)
    }
}

fn split_answer(text: &str) -> (String, Option<String>) {
    match text.split_once(ANSWER_SEPARATOR) {
        Some((head, answer)) => (head.trim().to_string(), Some(answer.to_string())),
        None => (text.trim().to_string(), None),
    }
}

fn parse_menu_pick(text: &str) -> Result<MenuPick> {
    let (head, answer) = split_answer(text);
    let (menu, item) = head
        .split_once(char::is_whitespace)
        .ok_or_else(|| anyhow!(":menu needs a menu and an item, e.g. :menu File Save"))?;
    Ok(MenuPick {
        menu: menu.to_string(),
        item: item.trim().to_string(),
        answer,
    })
}

fn parse_layout(text: &str) -> Result<LayoutChange> {
    let mut words = text.split_whitespace();
    let what = words.next().unwrap_or_default().to_lowercase();
    let value = words.next();
    let pixels = || -> Result<u32> {
        value
            .ok_or_else(|| anyhow!("{what} needs a size in pixels"))?
            .parse()
            .map_err(|_| anyhow!("invalid size for {what}"))
    };

    Ok(match what.as_str() {
        "sidebar" => LayoutChange::Sidebar(pixels()?),
        "terminal" => match value {
            Some("toggle") => LayoutChange::ToggleTerminal,
            _ => LayoutChange::Terminal(pixels()?),
        },
        "explorer" => LayoutChange::ToggleExplorer,
        "view" => LayoutChange::View(
            value
                .ok_or_else(|| anyhow!("view needs a name"))?
                .parse()
                .map_err(|e: String| anyhow!(e))?,
        ),
        "mobile-menu" => LayoutChange::MobileMenu,
        "mobile-sidebar" => LayoutChange::MobileSidebar,
        other => bail!("unknown layout change: {other}"),
    })
}
