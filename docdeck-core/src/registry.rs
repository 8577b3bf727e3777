//! Content registry: immutable mapping from content key to static payload.
//!
//! Payloads are opaque to navigation. The renderer only copies references to
//! them into the content tree; layout and styling belong to the front end.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::ids::ContentKey;

/// A static block of documentation content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContentPayload {
    /// Free-form paragraph.
    Text {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        body: String,
    },
    /// Bulleted list.
    List {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        items: Vec<String>,
    },
    /// Table with a header row; rows may be ragged.
    Table {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        columns: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    /// Preformatted diagram or code listing, shown verbatim.
    Diagram {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        source: String,
    },
    /// Ordered name/value pairs (tech stacks, endpoint listings).
    Fields {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        fields: Vec<(String, String)>,
    },
}

impl ContentPayload {
    pub fn title(&self) -> Option<&str> {
        match self {
            ContentPayload::Text { title, .. }
            | ContentPayload::List { title, .. }
            | ContentPayload::Table { title, .. }
            | ContentPayload::Diagram { title, .. }
            | ContentPayload::Fields { title, .. } => title.as_deref(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ContentPayload::Text { .. } => "text",
            ContentPayload::List { .. } => "list",
            ContentPayload::Table { .. } => "table",
            ContentPayload::Diagram { .. } => "diagram",
            ContentPayload::Fields { .. } => "fields",
        }
    }
}

/// Read-only content store, fixed once the catalog is loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentRegistry {
    entries: BTreeMap<ContentKey, ContentPayload>,
}

impl ContentRegistry {
    pub fn get(&self, key: &str) -> Option<&ContentPayload> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &ContentKey> {
        self.entries.keys()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(ContentKey, ContentPayload)> for ContentRegistry {
    fn from_iter<I: IntoIterator<Item = (ContentKey, ContentPayload)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
