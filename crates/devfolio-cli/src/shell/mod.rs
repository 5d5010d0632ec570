//! Interactive shell over a workbench session.
//!
//! `:` lines drive the workbench, `>` lines replace the edit buffer and
//! everything else is typed into the simulated terminal.

mod command;
pub mod render;

pub use command::{FrameSignal, HELP, Input, LayoutChange, MenuPick, ShellCommand};

use crate::formatters::format_output;
use anyhow::{Context, Result};
use colored::Colorize;
use devfolio_core::cli::OutputFormat;
use devfolio_workbench::{
    Action, FrameEvent, MenuCommand, Notification, Session, command_for_item,
    command_for_shortcut,
};
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

/// What the shell prints after one line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reply {
    /// Lines to print
    pub lines: Vec<String>,
    /// Whether the shell should exit
    pub quit: bool,
}

impl Reply {
    fn lines(lines: Vec<String>) -> Self {
        Self { lines, quit: false }
    }

    fn error(message: impl std::fmt::Display) -> Self {
        Self::lines(vec![format!("error: {message}").red().to_string()])
    }
}

/// Line-oriented front end for one [`Session`].
#[derive(Debug)]
pub struct Shell {
    session: Session,
    format: OutputFormat,
}

impl Shell {
    /// Wraps a session; `format` applies to structured output.
    #[must_use]
    pub const fn new(session: Session, format: OutputFormat) -> Self {
        Self { session, format }
    }

    /// The underlying session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Loads the initial tab and returns the welcome screen.
    pub async fn start(&mut self) -> Result<Reply> {
        let notifications = self.session.start().await;
        let mut lines = render::terminal(self.session.terminal().lines());
        lines.push(String::new());
        lines.extend(notifications.iter().map(render::notification));
        lines.extend(self.editor()?);
        lines.push("Type :help for workbench commands.".dimmed().to_string());
        Ok(Reply::lines(lines))
    }

    /// Handles one input line. Parse and upload errors become error lines;
    /// only output formatting failures are returned as errors.
    pub async fn handle_line(&mut self, line: &str) -> Result<Reply> {
        match Input::parse(line) {
            Ok(input) => self.execute(input).await,
            Err(e) => Ok(Reply::error(e)),
        }
    }

    /// Executes parsed input.
    pub async fn execute(&mut self, input: Input) -> Result<Reply> {
        debug!(?input, "shell input");
        match input {
            Input::Terminal(text) => Ok(Reply::lines(self.type_into_terminal(&text))),
            Input::Buffer(text) => {
                if !self.session.workbench().editor().is_editing() {
                    return Ok(Reply::error("not editing; use :edit first"));
                }
                self.dispatch(Action::EditBuffer(text)).await
            }
            Input::Command(command) => self.command(command).await,
        }
    }

    async fn command(&mut self, command: ShellCommand) -> Result<Reply> {
        match command {
            ShellCommand::Open(id) => self.dispatch(Action::Open(id)).await,
            ShellCommand::Select(id) => self.dispatch(Action::Select(id)).await,
            ShellCommand::Close(id) => {
                let Some(id) = id.or_else(|| self.session.workbench().active().map(str::to_string))
                else {
                    return Ok(Reply::error("no tab to close"));
                };
                self.dispatch(Action::Close(id)).await
            }
            ShellCommand::Edit => self.dispatch(Action::ToggleEdit).await,
            ShellCommand::Save => self.dispatch(Action::Save).await,
            ShellCommand::SaveAs(name) => self.dispatch(Action::SaveAs(name)).await,
            ShellCommand::New(name) => self.dispatch(Action::New(name)).await,
            ShellCommand::Upload(path) => self.dispatch(Action::Upload(path)).await,
            ShellCommand::Delete(id) => self.dispatch(Action::Delete(id)).await,
            ShellCommand::Rename { id, name } => self.dispatch(Action::Rename { id, name }).await,
            ShellCommand::Tabs => {
                let tabs = self.session.snapshot().tabs;
                match self.format {
                    OutputFormat::Pretty => Ok(Reply::lines(vec![render::tab_strip(&tabs)])),
                    format => Ok(Reply::lines(vec![format_output(&tabs, format)?])),
                }
            }
            ShellCommand::Tree(key) => {
                if let Some(key) = key {
                    self.session.explorer_mut().toggle(&key);
                }
                let tree = self.session.tree();
                match self.format {
                    OutputFormat::Pretty => Ok(Reply::lines(render::tree(&tree))),
                    format => Ok(Reply::lines(vec![format_output(&tree, format)?])),
                }
            }
            ShellCommand::Files => {
                let files = self.session.registry().list_files();
                match self.format {
                    OutputFormat::Pretty => Ok(Reply::lines(render::files(&files))),
                    format => Ok(Reply::lines(vec![format_output(&files, format)?])),
                }
            }
            ShellCommand::Key { shortcut, answer } => match command_for_shortcut(&shortcut) {
                Some(command) => self.menu(command, answer.as_deref()).await,
                None => Ok(Reply::lines(vec![format!("{shortcut} is not bound")])),
            },
            ShellCommand::Menu(None) => Ok(Reply::lines(render::menu_bar())),
            ShellCommand::Menu(Some(pick)) => match command_for_item(&pick.menu, &pick.item) {
                Some(command) => self.menu(command, pick.answer.as_deref()).await,
                None => Ok(Reply::lines(vec![
                    format!("{} > {} does nothing", pick.menu, pick.item)
                        .dimmed()
                        .to_string(),
                ])),
            },
            ShellCommand::Theme(None) => Ok(Reply::lines(render::themes())),
            ShellCommand::Theme(Some(choice)) => {
                let reply = self.menu(MenuCommand::Appearance, Some(&choice)).await?;
                if reply.lines.is_empty() {
                    return Ok(Reply::error(format!("unknown theme: {choice}")));
                }
                Ok(reply)
            }
            ShellCommand::Layout(change) => {
                if let Some(change) = change {
                    self.change_layout(change);
                }
                match self.format {
                    OutputFormat::Pretty => Ok(Reply::lines(render::layout(self.session.layout()))),
                    format => Ok(Reply::lines(vec![format_output(
                        self.session.layout(),
                        format,
                    )?])),
                }
            }
            ShellCommand::Frame(signal) => {
                if self.session.frame().is_none() {
                    return Ok(Reply::error("no demo is shown"));
                }
                match signal {
                    FrameSignal::Load => self.session.frame_event(FrameEvent::Load),
                    FrameSignal::Error => self.session.frame_event(FrameEvent::Error),
                    FrameSignal::Wait => self.session.settle_frame().await,
                }
                Ok(Reply::lines(self.editor()?))
            }
            ShellCommand::Show => Ok(Reply::lines(self.editor()?)),
            ShellCommand::Help => Ok(Reply::lines(
                HELP.iter()
                    .map(|(usage, what)| format!("{:<32} {what}", usage.cyan()))
                    .collect(),
            )),
            ShellCommand::Quit => Ok(Reply {
                lines: Vec::new(),
                quit: true,
            }),
        }
    }

    async fn dispatch(&mut self, action: Action) -> Result<Reply> {
        match self.session.dispatch(action).await {
            Ok(notifications) => self.after(&notifications),
            Err(e) => Ok(Reply::error(e)),
        }
    }

    async fn menu(&mut self, command: MenuCommand, answer: Option<&str>) -> Result<Reply> {
        match command {
            MenuCommand::ToggleExplorer | MenuCommand::ToggleTerminal => {
                self.session.menu(command, answer).await?;
                Ok(Reply::lines(render::layout(self.session.layout())))
            }
            MenuCommand::Appearance => {
                let notifications = self.session.menu(command, answer).await?;
                Ok(Reply::lines(
                    notifications.iter().map(render::notification).collect(),
                ))
            }
            MenuCommand::NewFile | MenuCommand::OpenFile | MenuCommand::SaveAs
                if answer.is_none() =>
            {
                Ok(Reply::error(format!(
                    "{command:?} needs an answer, e.g. -- notes.md"
                )))
            }
            MenuCommand::NewFile | MenuCommand::OpenFile | MenuCommand::Save | MenuCommand::SaveAs => {
                match self.session.menu(command, answer).await {
                    Ok(notifications) => self.after(&notifications),
                    Err(e) => Ok(Reply::error(e)),
                }
            }
        }
    }

    fn change_layout(&mut self, change: LayoutChange) {
        let layout = self.session.layout_mut();
        match change {
            LayoutChange::Sidebar(width) => layout.resize_sidebar(width),
            LayoutChange::Terminal(height) => layout.resize_terminal(height),
            LayoutChange::ToggleTerminal => layout.toggle_terminal(),
            LayoutChange::ToggleExplorer => layout.toggle_explorer(),
            LayoutChange::View(view) => layout.select_view(view),
            LayoutChange::MobileMenu => layout.toggle_mobile_menu(),
            LayoutChange::MobileSidebar => layout.toggle_mobile_sidebar(),
        }
    }

    fn type_into_terminal(&mut self, text: &str) -> Vec<String> {
        let terminal = self.session.terminal_mut();
        let before = terminal.lines().len();
        terminal.submit(text);
        let lines = terminal.lines();
        // `cls` shrinks the scrollback; show all of it then
        let fresh = if lines.len() > before {
            &lines[before..]
        } else {
            lines
        };
        render::terminal(fresh)
    }

    fn after(&self, notifications: &[Notification]) -> Result<Reply> {
        let mut lines: Vec<String> = notifications.iter().map(render::notification).collect();
        lines.extend(self.editor()?);
        Ok(Reply::lines(lines))
    }

    fn editor(&self) -> Result<Vec<String>> {
        let snapshot = self.session.snapshot();
        match self.format {
            OutputFormat::Pretty => Ok(render::editor(&snapshot)),
            format => Ok(vec![format_output(&snapshot, format)?]),
        }
    }

    /// Reads lines from stdin until `:quit` or end of input.
    ///
    /// While a demo is loading, the wait for input also watches the frame
    /// deadline and redraws the editor when it passes.
    pub async fn run(mut self) -> Result<()> {
        print_lines(&self.start().await?.lines);

        let mut input = BufReader::new(tokio::io::stdin()).lines();
        loop {
            self.prompt()?;

            let line = loop {
                let Some(deadline) = self.session.frame_deadline() else {
                    break input.next_line().await;
                };
                tokio::select! {
                    line = input.next_line() => break line,
                    () = tokio::time::sleep_until(deadline) => {
                        if self.session.expire_frame() {
                            println!();
                            print_lines(&self.editor()?);
                            self.prompt()?;
                        }
                    }
                }
            };

            let Some(line) = line.context("failed to read input")? else {
                break;
            };
            let reply = self.handle_line(&line).await?;
            print_lines(&reply.lines);
            if reply.quit {
                break;
            }
        }
        Ok(())
    }

    fn prompt(&self) -> Result<()> {
        print!("{}", self.session.terminal().prompt().bold());
        std::io::stdout().flush().context("failed to flush stdout")
    }
}

fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{line}");
    }
}
