//! Interactive state of the devfolio workbench.
//!
//! The workbench mimics a code editor: tabs over portfolio documents, a
//! view/edit mode per tab, an explorer sidebar, a menu bar and a simulated
//! terminal. Everything here is plain state plus explicit transitions;
//! [`Session`] ties it to the content resolver and runs the I/O.
//!
//! # Examples
//!
//! ```no_run
//! use devfolio_content::{ContentResolver, DocumentStore, LocalDocuments};
//! use devfolio_core::{ProjectCatalog, SiteConfig};
//! use devfolio_workbench::{Action, Session};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = SiteConfig::default();
//! let documents = Arc::new(LocalDocuments::new(DocumentStore::new(&config.content.data_dir)));
//! let resolver = ContentResolver::from_config(&config.content, documents, ProjectCatalog::default())?;
//!
//! let mut session = Session::new(resolver, &config.workbench);
//! session.start().await;
//! session.dispatch(Action::Open("contact.md".into())).await?;
//!
//! println!("{:?}", session.snapshot().text);
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod editor;
pub mod explorer;
pub mod layout;
pub mod menu;
pub mod session;
pub mod tabs;
pub mod terminal;
pub mod workbench;

pub use editor::EditorState;
pub use explorer::{ExplorerTree, TreeNode};
pub use layout::{ActivityView, Layout};
pub use menu::{MENU_BAR, Menu, MenuCommand, MenuEntry, Theme, command_for_item, command_for_shortcut};
pub use session::{EditorSnapshot, FrameEvent, Session, TabInfo};
pub use tabs::OpenFileSet;
pub use terminal::{Line, TerminalSimulator};
pub use workbench::{
    Action, Effect, LoadPurpose, LoadTicket, Notification, Result, Workbench, WorkbenchError,
};
