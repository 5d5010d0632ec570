//! Tab and editor state machine.
//!
//! [`Workbench::apply`] is synchronous and does no I/O: it updates tabs, the
//! editor mode and the registry, then returns the [`Effect`]s that need I/O. The caller runs
//! the effects and feeds load results back through
//! [`Workbench::complete_content`] and [`Workbench::complete_edit_buffer`].
//! Every load carries a [`LoadTicket`]; results for a ticket that is no
//! longer the latest, or for a tab that is no longer active, are dropped.

use crate::editor::EditorState;
use crate::tabs::OpenFileSet;
use devfolio_content::{FileRef, Resolved};
use devfolio_core::{FixedDocument, ProjectCatalog};
use devfolio_files::{FileRegistry, FilesError, Upload, VirtualFile};
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;
use tracing::debug;

/// Errors from workbench actions.
#[derive(Error, Debug)]
pub enum WorkbenchError {
    /// An upload could not be registered.
    #[error("Upload failed: {0}")]
    Upload(#[from] FilesError),
}

impl WorkbenchError {
    /// Returns `true` if this is an upload failure.
    #[must_use]
    pub const fn is_upload_error(&self) -> bool {
        matches!(self, Self::Upload(_))
    }
}

/// Result type for workbench actions.
pub type Result<T> = std::result::Result<T, WorkbenchError>;

/// User intents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Open a tab (or focus it) and load its content
    Open(String),
    /// Focus an already open tab
    Select(String),
    /// Close a tab
    Close(String),
    /// Switch the active tab between view and edit
    ToggleEdit,
    /// Save the active tab
    Save,
    /// Export the active text under another name
    SaveAs(String),
    /// Create an empty registry file and edit it
    New(String),
    /// Register a local file and edit it
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
    /// Replace the edit buffer
    EditBuffer(String),
}

/// What a ticket loads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LoadPurpose {
    /// Content to display
    Content,
    /// Text to seed the edit buffer
    EditBuffer,
}

/// Identifies one load request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct LoadTicket {
    /// Monotonic request number
    pub generation: u64,
    /// Identifier being loaded
    pub id: String,
    /// What the result is for
    pub purpose: LoadPurpose,
}

impl fmt::Display for LoadTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {} ({:?})", self.generation, self.id, self.purpose)
    }
}

/// User-visible messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Notification {
    /// A registry file was saved
    Saved {
        /// File name
        name: String,
    },
    /// A document was exported
    Exported {
        /// Requested name
        name: String,
        /// Written path
        path: PathBuf,
    },
    /// Informational message
    Info {
        /// Message text
        message: String,
    },
    /// A recovered failure
    Error {
        /// Message text
        message: String,
    },
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Saved { name } => write!(f, "File saved! ({name})"),
            Self::Exported { path, .. } => write!(f, "Downloaded {}", path.display()),
            Self::Info { message } | Self::Error { message } => f.write_str(message),
        }
    }
}

/// Work requested by an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Resolve the ticket's identifier for display
    LoadContent(LoadTicket),
    /// Read a local file for upload, then hand it to
    /// [`Workbench::complete_upload`]
    ReadUpload(PathBuf),
    /// Fetch the text that seeds the edit buffer
    LoadEditBuffer(LoadTicket),
    /// Write `content` into the export directory as `name`
    Export {
        /// File name
        name: String,
        /// Document text
        content: String,
    },
    /// Show a message
    Notify(Notification),
}

/// Tabs, active tab, editor mode and displayed content.
///
/// # Examples
///
/// ```
/// use devfolio_core::ProjectCatalog;
/// use devfolio_files::FileRegistry;
/// use devfolio_workbench::{Action, Effect, Workbench};
///
/// let mut registry = FileRegistry::new();
/// let catalog = ProjectCatalog::default();
/// let mut workbench = Workbench::new();
///
/// let effects = workbench
///     .apply(Action::Open("contact.md".into()), &mut registry, &catalog);
///
/// assert_eq!(workbench.active(), Some("contact.md"));
/// assert!(matches!(&effects[..], [Effect::LoadContent(t)] if t.id == "contact.md"));
/// ```
#[derive(Debug, Clone)]
pub struct Workbench {
    open: OpenFileSet,
    active: Option<String>,
    editor: EditorState,
    content: Option<Resolved>,
    generation: u64,
    latest_content: Option<LoadTicket>,
    latest_edit: Option<LoadTicket>,
}

impl Default for Workbench {
    fn default() -> Self {
        Self::new()
    }
}

impl Workbench {
    /// Initial state: the about document open, active and in view mode.
    #[must_use]
    pub fn new() -> Self {
        let about = FixedDocument::About.file_name();
        let mut open = OpenFileSet::new();
        open.open(about);
        Self {
            open,
            active: Some(about.to_string()),
            editor: EditorState::View,
            content: None,
            generation: 0,
            latest_content: None,
            latest_edit: None,
        }
    }

    /// Open tabs.
    #[must_use]
    pub const fn open_files(&self) -> &OpenFileSet {
        &self.open
    }

    /// Active tab.
    #[must_use]
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Editor mode.
    #[must_use]
    pub const fn editor(&self) -> &EditorState {
        &self.editor
    }

    /// Last content accepted for the active tab.
    #[must_use]
    pub const fn content(&self) -> Option<&Resolved> {
        self.content.as_ref()
    }

    /// Content load for the active tab, used once at startup.
    pub fn initial_load(&mut self) -> Vec<Effect> {
        self.load_active()
    }

    /// Applies `action`.
    ///
    /// An upload only asks for the file to be read; the state changes once
    /// the read completes.
    pub fn apply(
        &mut self,
        action: Action,
        registry: &mut FileRegistry,
        catalog: &ProjectCatalog,
    ) -> Vec<Effect> {
        debug!(?action, "applying action");
        match action {
            Action::Open(id) => self.open(&id),
            Action::Select(id) => self.select(&id),
            Action::Close(id) => self.close(&id),
            Action::ToggleEdit => self.toggle_edit(registry, catalog),
            Action::Save => self.save(registry, catalog),
            Action::SaveAs(name) => self.save_as(&name),
            Action::New(name) => {
                let name = name.trim();
                if name.is_empty() {
                    Vec::new()
                } else {
                    let file = registry.create_file(name, "");
                    self.open_created(&file)
                }
            }
            Action::Upload(path) => vec![Effect::ReadUpload(path)],
            Action::Delete(id) => {
                if registry.delete_file(&id) && self.open.contains(&id) {
                    self.close(&id)
                } else {
                    Vec::new()
                }
            }
            Action::Rename { id, name } => {
                let name = name.trim();
                if !name.is_empty() {
                    registry.rename_file(&id, name);
                }
                Vec::new()
            }
            Action::EditBuffer(text) => {
                self.editor.set_buffer(text);
                Vec::new()
            }
        }
    }

    /// Registers a read upload, opens it and enters edit mode.
    pub fn complete_upload(&mut self, upload: Upload, registry: &mut FileRegistry) -> Vec<Effect> {
        let file = registry.register_upload(upload);
        self.open_created(&file)
    }

    /// Accepts a content load result. Returns `false` if it was stale.
    pub fn complete_content(&mut self, ticket: &LoadTicket, resolved: Resolved) -> bool {
        if !self.is_current(ticket, self.latest_content.as_ref()) {
            debug!(%ticket, "dropping stale content");
            return false;
        }
        self.latest_content = None;
        self.content = Some(resolved);
        true
    }

    /// Accepts an edit buffer load result. Returns `false` if it was stale
    /// or the editor already left edit mode.
    pub fn complete_edit_buffer(&mut self, ticket: &LoadTicket, text: String) -> bool {
        if !self.is_current(ticket, self.latest_edit.as_ref()) || !self.editor.is_editing() {
            debug!(%ticket, "dropping stale edit buffer");
            return false;
        }
        self.latest_edit = None;
        self.editor.set_buffer(text)
    }

    fn is_current(&self, ticket: &LoadTicket, latest: Option<&LoadTicket>) -> bool {
        latest == Some(ticket) && self.active.as_deref() == Some(ticket.id.as_str())
    }

    fn issue(&mut self, id: &str, purpose: LoadPurpose) -> LoadTicket {
        self.generation += 1;
        let ticket = LoadTicket {
            generation: self.generation,
            id: id.to_string(),
            purpose,
        };
        match purpose {
            LoadPurpose::Content => self.latest_content = Some(ticket.clone()),
            LoadPurpose::EditBuffer => self.latest_edit = Some(ticket.clone()),
        }
        ticket
    }

    fn load_active(&mut self) -> Vec<Effect> {
        match self.active.clone() {
            Some(id) => vec![Effect::LoadContent(self.issue(&id, LoadPurpose::Content))],
            None => Vec::new(),
        }
    }

    fn activate(&mut self, id: &str) -> Vec<Effect> {
        if self.active.as_deref() != Some(id) {
            self.editor = EditorState::View;
            self.content = None;
            self.latest_edit = None;
            self.active = Some(id.to_string());
        }
        self.load_active()
    }

    fn open(&mut self, id: &str) -> Vec<Effect> {
        self.open.open(id);
        self.activate(id)
    }

    fn select(&mut self, id: &str) -> Vec<Effect> {
        if !self.open.contains(id) {
            return Vec::new();
        }
        self.editor = EditorState::View;
        self.latest_edit = None;
        self.activate(id)
    }

    fn close(&mut self, id: &str) -> Vec<Effect> {
        if !self.open.close(id) || self.active.as_deref() != Some(id) {
            return Vec::new();
        }
        match self.open.last().map(str::to_string) {
            Some(next) => self.activate(&next),
            None => {
                self.active = None;
                self.editor = EditorState::View;
                self.content = None;
                self.latest_content = None;
                self.latest_edit = None;
                Vec::new()
            }
        }
    }

    fn open_created(&mut self, file: &VirtualFile) -> Vec<Effect> {
        let effects = self.open(file.id.as_str());
        self.editor = EditorState::Edit {
            buffer: file.content.clone(),
        };
        effects
    }

    fn active_ref(&self, registry: &FileRegistry, catalog: &ProjectCatalog) -> Option<FileRef> {
        self.active
            .as_deref()
            .map(|id| FileRef::parse(id, registry, catalog))
    }

    /// Edit buffer when editing, otherwise the raw body of the displayed
    /// content.
    fn current_text(&self) -> String {
        self.editor
            .buffer()
            .or_else(|| self.content.as_ref().map(|c| c.raw.as_str()))
            .unwrap_or_default()
            .to_string()
    }

    fn toggle_edit(&mut self, registry: &FileRegistry, catalog: &ProjectCatalog) -> Vec<Effect> {
        let Some(file_ref) = self.active_ref(registry, catalog) else {
            return Vec::new();
        };
        if !file_ref.is_editable() {
            return Vec::new();
        }

        if self.editor.is_editing() {
            self.editor = EditorState::View;
            self.latest_edit = None;
            return self.load_active();
        }

        match file_ref {
            FileRef::Registry(id) => {
                let buffer = registry
                    .get_file(id.as_str())
                    .map(|f| f.content.clone())
                    .unwrap_or_default();
                self.editor = EditorState::Edit { buffer };
                Vec::new()
            }
            FileRef::Fixed(doc) => {
                self.editor = EditorState::Edit {
                    buffer: String::new(),
                };
                vec![Effect::LoadEditBuffer(
                    self.issue(doc.file_name(), LoadPurpose::EditBuffer),
                )]
            }
            FileRef::ProjectReadme(_) | FileRef::ProjectDemo(_) | FileRef::Unknown(_) => Vec::new(),
        }
    }

    fn save(&mut self, registry: &mut FileRegistry, catalog: &ProjectCatalog) -> Vec<Effect> {
        let Some(file_ref) = self.active_ref(registry, catalog) else {
            return Vec::new();
        };
        let text = self.current_text();

        match file_ref {
            FileRef::Registry(id) => {
                if !registry.update_file(id.as_str(), text) {
                    return Vec::new();
                }
                let name = registry
                    .get_file(id.as_str())
                    .map(|f| f.name.clone())
                    .unwrap_or_else(|| id.to_string());
                self.editor = EditorState::View;
                self.latest_edit = None;
                let mut effects = vec![Effect::Notify(Notification::Saved { name })];
                effects.extend(self.load_active());
                effects
            }
            FileRef::Fixed(doc) => vec![Effect::Export {
                name: doc.file_name().to_string(),
                content: text,
            }],
            FileRef::ProjectReadme(_) | FileRef::ProjectDemo(_) | FileRef::Unknown(_) => Vec::new(),
        }
    }

    fn save_as(&self, name: &str) -> Vec<Effect> {
        let name = name.trim();
        if self.active.is_none() || name.is_empty() {
            return Vec::new();
        }
        vec![Effect::Export {
            name: name.to_string(),
            content: self.current_text(),
        }]
    }
}
