//! Editor mode.

use serde::Serialize;

/// Whether the active tab is rendered or edited.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum EditorState {
    /// Rendering resolved content
    #[default]
    View,
    /// Editing a text buffer
    Edit {
        /// Text being edited
        buffer: String,
    },
}

impl EditorState {
    /// Returns `true` in edit mode.
    #[must_use]
    pub const fn is_editing(&self) -> bool {
        matches!(self, Self::Edit { .. })
    }

    /// Edit buffer, if editing.
    #[must_use]
    pub fn buffer(&self) -> Option<&str> {
        match self {
            Self::View => None,
            Self::Edit { buffer } => Some(buffer),
        }
    }

    /// Replaces the buffer. Returns `false` and does nothing in view mode.
    pub fn set_buffer(&mut self, text: impl Into<String>) -> bool {
        match self {
            Self::View => false,
            Self::Edit { buffer } => {
                *buffer = text.into();
                true
            }
        }
    }
}
