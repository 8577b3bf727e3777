//! Error taxonomy for navigation and rendering.
//!
//! Both variants signal wiring or configuration bugs rather than transient
//! conditions. A failed action never changes navigation state.

use std::fmt;

use thiserror::Error;

use crate::ids::{ContentKey, TabId, ViewId};

/// Which selector rejected a selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionScope {
    View,
    Tab(ViewId),
}

impl fmt::Display for SelectionScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionScope::View => write!(f, "view"),
            SelectionScope::Tab(view) => write!(f, "tab of view '{view}'"),
        }
    }
}

/// Errors raised by selectors and the panel renderer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavError {
    #[error("invalid selection: unknown {scope} '{id}'")]
    InvalidSelection { scope: SelectionScope, id: String },

    #[error("content missing: '{key}' referenced by {view}/{tab} is not in the registry")]
    ContentMissing {
        key: ContentKey,
        view: ViewId,
        tab: TabId,
    },
}

impl NavError {
    pub fn invalid_view(id: impl Into<String>) -> Self {
        NavError::InvalidSelection {
            scope: SelectionScope::View,
            id: id.into(),
        }
    }

    pub fn invalid_tab(view: &ViewId, id: impl Into<String>) -> Self {
        NavError::InvalidSelection {
            scope: SelectionScope::Tab(view.clone()),
            id: id.into(),
        }
    }
}
