//! One visitor session.
//!
//! `Session` owns every piece of mutable state and runs the effects the
//! [`Workbench`] asks for, one at a time. Loads are awaited in order; a
//! result that lost its ticket race is discarded by the workbench. File
//! reads and writes run on the blocking pool.

use crate::explorer::{ExplorerTree, TreeNode};
use crate::layout::Layout;
use crate::menu::{MenuCommand, Theme};
use crate::terminal::TerminalSimulator;
use crate::workbench::{Action, Effect, Notification, Result, Workbench};
use devfolio_content::{ContentResolver, ContentView, FrameLoad, FrameTarget, Resolved};
use devfolio_core::WorkbenchConfig;
use devfolio_files::{Exporter, FileRegistry, FilesError, Result as FilesResult, read_upload};
use serde::Serialize;
use std::collections::VecDeque;
use std::path::PathBuf;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, info, warn};

/// Label of the explorer root folder.
pub const WORKSPACE_LABEL: &str = "portfolio";

/// Signals from an embedded frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameEvent {
    /// The frame finished loading
    Load,
    /// The frame failed to load
    Error,
    /// The heuristic delay expired
    Timeout,
}

/// One tab as shown in the tab strip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TabInfo {
    /// Identifier
    pub id: String,
    /// Label
    pub label: String,
    /// Whether this is the active tab
    pub active: bool,
    /// Whether the tab may enter edit mode
    pub editable: bool,
}

/// Everything a front end needs to draw the editor area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorSnapshot {
    /// Tabs in order
    pub tabs: Vec<TabInfo>,
    /// Active identifier
    pub active: Option<String>,
    /// `view` or `edit`
    pub mode: &'static str,
    /// Edit buffer in edit mode, rendered markdown in view mode
    pub text: Option<String>,
    /// Demo URL when the active tab is a frame
    pub frame_url: Option<String>,
    /// Whether the frame loading indicator is shown
    pub frame_loading: bool,
    /// Fallback link when the frame failed
    pub frame_fallback: Option<String>,
}

/// Session state and effect runner.
#[derive(Debug)]
pub struct Session {
    registry: FileRegistry,
    resolver: ContentResolver,
    exporter: Exporter,
    workbench: Workbench,
    terminal: TerminalSimulator,
    layout: Layout,
    explorer: ExplorerTree,
    frame: Option<FrameLoad>,
    frame_timeout: Duration,
}

impl Session {
    /// Creates a session with an empty registry.
    #[must_use]
    pub fn new(resolver: ContentResolver, config: &WorkbenchConfig) -> Self {
        Self {
            registry: FileRegistry::new(),
            resolver,
            exporter: Exporter::new(&config.export_dir),
            workbench: Workbench::new(),
            terminal: TerminalSimulator::new(config.terminal_path.clone()),
            layout: Layout::default(),
            explorer: ExplorerTree::default(),
            frame: None,
            frame_timeout: config.frame_timeout(),
        }
    }

    /// Replaces the exporter.
    #[must_use]
    pub fn with_exporter(mut self, exporter: Exporter) -> Self {
        self.exporter = exporter;
        self
    }

    /// Loads the initially active tab.
    pub async fn start(&mut self) -> Vec<Notification> {
        let effects = self.workbench.initial_load();
        match self.run(effects).await {
            Ok(notifications) => notifications,
            Err(e) => {
                warn!(error = %e, "initial load failed");
                Vec::new()
            }
        }
    }

    /// Applies `action` and runs its effects.
    ///
    /// # Errors
    ///
    /// Returns `WorkbenchError::Upload` if an upload cannot be read. The
    /// session remains usable and unchanged.
    pub async fn dispatch(&mut self, action: Action) -> Result<Vec<Notification>> {
        self.expire_frame();
        let effects = self
            .workbench
            .apply(action, &mut self.registry, self.resolver.catalog());
        self.drop_hidden_frame();
        self.run(effects).await
    }

    /// Runs a menu command. `input` answers the command's prompt, if any.
    ///
    /// A missing answer cancels the command, like dismissing the prompt.
    ///
    /// # Errors
    ///
    /// Returns `WorkbenchError::Upload` if Open File cannot register the file.
    pub async fn menu(
        &mut self,
        command: MenuCommand,
        input: Option<&str>,
    ) -> Result<Vec<Notification>> {
        debug!(?command, "menu command");
        match (command, input) {
            (MenuCommand::NewFile, Some(name)) => self.dispatch(Action::New(name.into())).await,
            (MenuCommand::OpenFile, Some(path)) => {
                self.dispatch(Action::Upload(PathBuf::from(path.trim()))).await
            }
            (MenuCommand::Save, _) => self.dispatch(Action::Save).await,
            (MenuCommand::SaveAs, Some(name)) => self.dispatch(Action::SaveAs(name.into())).await,
            (MenuCommand::ToggleExplorer, _) => {
                self.layout.toggle_explorer();
                Ok(Vec::new())
            }
            (MenuCommand::ToggleTerminal, _) => {
                self.layout.toggle_terminal();
                Ok(Vec::new())
            }
            (MenuCommand::Appearance, Some(choice)) => Ok(choice
                .parse::<Theme>()
                .map(|theme| {
                    vec![Notification::Info {
                        message: theme.selection_message(),
                    }]
                })
                .unwrap_or_default()),
            (
                MenuCommand::NewFile
                | MenuCommand::OpenFile
                | MenuCommand::SaveAs
                | MenuCommand::Appearance,
                None,
            ) => Ok(Vec::new()),
        }
    }

    /// Feeds a frame signal into the current frame load.
    pub fn frame_event(&mut self, event: FrameEvent) {
        self.expire_frame();
        let Some(frame) = self.frame.as_mut() else {
            return;
        };
        match event {
            FrameEvent::Load => frame.on_load(),
            FrameEvent::Error => frame.on_error(),
            FrameEvent::Timeout => frame.on_timeout(),
        }
    }

    /// Deadline of the frame loading indicator, while it is shown.
    #[must_use]
    pub fn frame_deadline(&self) -> Option<Instant> {
        self.frame
            .as_ref()
            .filter(|frame| frame.is_loading())
            .map(FrameLoad::deadline)
    }

    /// Ends the frame loading phase if its deadline has passed. Returns
    /// `true` if the indicator was dropped.
    pub fn expire_frame(&mut self) -> bool {
        self.frame
            .as_mut()
            .is_some_and(|frame| frame.expire(Instant::now()))
    }

    /// Sleeps until the frame deadline, then applies it.
    pub async fn settle_frame(&mut self) {
        if let Some(deadline) = self.frame_deadline() {
            tokio::time::sleep_until(deadline).await;
            self.expire_frame();
        }
    }

    async fn run(&mut self, effects: Vec<Effect>) -> Result<Vec<Notification>> {
        let mut queue = VecDeque::from(effects);
        let mut notifications = Vec::new();
        while let Some(effect) = queue.pop_front() {
            match effect {
                Effect::LoadContent(ticket) => {
                    let file_ref = self.resolver.classify(&ticket.id, &self.registry);
                    let resolved = self.resolver.resolve(&file_ref, &self.registry).await;
                    let frame = frame_target(&resolved);
                    if self.workbench.complete_content(&ticket, resolved) {
                        self.frame = frame.map(|target| FrameLoad::new(target, self.frame_timeout));
                    }
                }
                Effect::LoadEditBuffer(ticket) => {
                    let file_ref = self.resolver.classify(&ticket.id, &self.registry);
                    let text = self
                        .resolver
                        .load_edit_buffer(&file_ref, &self.registry)
                        .await
                        .unwrap_or_default();
                    self.workbench.complete_edit_buffer(&ticket, text);
                }
                Effect::ReadUpload(path) => {
                    let upload = off_thread(path.clone(), move || read_upload(&path)).await?;
                    queue.extend(self.workbench.complete_upload(upload, &mut self.registry));
                    self.drop_hidden_frame();
                }
                Effect::Export { name, content } => match self.export(&name, content).await {
                    Ok(path) => notifications.push(Notification::Exported { name, path }),
                    Err(e) => {
                        warn!(%name, error = %e, "export failed");
                        notifications.push(Notification::Error {
                            message: e.to_string(),
                        });
                    }
                },
                Effect::Notify(notification) => {
                    info!(%notification, "notification");
                    notifications.push(notification);
                }
            }
        }
        Ok(notifications)
    }

    async fn export(&self, name: &str, content: String) -> FilesResult<PathBuf> {
        let exporter = self.exporter.clone();
        let name = name.to_string();
        off_thread(self.exporter.dir().to_path_buf(), move || {
            exporter.export(&name, &content)
        })
        .await
    }

    fn drop_hidden_frame(&mut self) {
        if self.workbench.content().is_none() {
            self.frame = None;
        }
    }

    /// Tabs, mode and displayed text.
    #[must_use]
    pub fn snapshot(&self) -> EditorSnapshot {
        let active = self.workbench.active().map(str::to_string);
        let tabs = self
            .workbench
            .open_files()
            .iter()
            .map(|id| TabInfo {
                id: id.to_string(),
                label: self.resolver.display_name(id, &self.registry),
                active: active.as_deref() == Some(id),
                editable: self.resolver.is_editable(id, &self.registry),
            })
            .collect();

        let editor = self.workbench.editor();
        let text = editor.buffer().map(str::to_string).or_else(|| {
            self.workbench
                .content()
                .and_then(|c| c.view.as_document())
                .map(str::to_string)
        });

        let frame = self.frame.as_ref().filter(|_| !editor.is_editing());
        EditorSnapshot {
            tabs,
            active,
            mode: if editor.is_editing() { "edit" } else { "view" },
            text,
            frame_url: frame.map(|f| f.external_link().to_string()),
            frame_loading: frame.is_some_and(|f| f.is_loading_at(Instant::now())),
            frame_fallback: frame.and_then(|f| f.fallback_link().map(str::to_string)),
        }
    }

    /// Explorer tree as currently expanded.
    #[must_use]
    pub fn tree(&self) -> TreeNode {
        self.explorer
            .build(WORKSPACE_LABEL, &self.registry, self.resolver.catalog())
    }

    /// Virtual file registry.
    #[must_use]
    pub const fn registry(&self) -> &FileRegistry {
        &self.registry
    }

    /// Content resolver.
    #[must_use]
    pub const fn resolver(&self) -> &ContentResolver {
        &self.resolver
    }

    /// Tab state machine.
    #[must_use]
    pub const fn workbench(&self) -> &Workbench {
        &self.workbench
    }

    /// Current frame load, if a demo is shown.
    #[must_use]
    pub const fn frame(&self) -> Option<&FrameLoad> {
        self.frame.as_ref()
    }

    /// Terminal panel.
    #[must_use]
    pub const fn terminal(&self) -> &TerminalSimulator {
        &self.terminal
    }

    /// Terminal panel, mutably.
    pub const fn terminal_mut(&mut self) -> &mut TerminalSimulator {
        &mut self.terminal
    }

    /// Chrome layout.
    #[must_use]
    pub const fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Chrome layout, mutably.
    pub const fn layout_mut(&mut self) -> &mut Layout {
        &mut self.layout
    }

    /// Explorer expansion state, mutably.
    pub const fn explorer_mut(&mut self) -> &mut ExplorerTree {
        &mut self.explorer
    }
}

/// Runs blocking file I/O on the blocking pool.
async fn off_thread<T, F>(path: PathBuf, work: F) -> FilesResult<T>
where
    T: Send + 'static,
    F: FnOnce() -> FilesResult<T> + Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|e| FilesError::Io {
            path,
            source: std::io::Error::other(e),
        })?
}

fn frame_target(resolved: &Resolved) -> Option<FrameTarget> {
    match &resolved.view {
        ContentView::Frame(target) => Some(target.clone()),
        ContentView::Document(_) => None,
    }
}
