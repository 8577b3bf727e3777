//! Catalog: the startup configuration of views, tabs, layouts and content.
//!
//! A catalog is loaded once from TOML and never mutated. Every constructor
//! runs the integrity check, so holding a `Catalog` means its layouts only
//! reference content that exists and its ids are unique where they must be.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::error::NavError;
use crate::ids::{ContentKey, SectionId, TabId, ViewId};
use crate::integrity::{self, IntegrityReport};
use crate::registry::ContentRegistry;

/// Errors from loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("read catalog {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse catalog TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("catalog failed integrity check: {0}")]
    Integrity(IntegrityReport),
}

/// One element of a tab's layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// Static heading line.
    Heading { text: String },
    /// Always-visible payload.
    Content { key: ContentKey },
    /// Collapsible region: `summary` is always shown, `key` only when expanded.
    Section {
        id: SectionId,
        summary: String,
        key: ContentKey,
    },
}

impl Block {
    pub fn content_key(&self) -> Option<&ContentKey> {
        match self {
            Block::Heading { .. } => None,
            Block::Content { key } | Block::Section { key, .. } => Some(key),
        }
    }
}

/// A disclosure section declared in a tab layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionRef<'a> {
    pub id: &'a SectionId,
    pub summary: &'a str,
    pub key: &'a ContentKey,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabSpec {
    pub id: TabId,
    pub label: String,
    #[serde(default)]
    pub blocks: Vec<Block>,
}

impl TabSpec {
    /// Disclosure sections in layout order.
    pub fn sections(&self) -> impl Iterator<Item = SectionRef<'_>> {
        self.blocks.iter().filter_map(|block| match block {
            Block::Section { id, summary, key } => Some(SectionRef { id, summary, key }),
            _ => None,
        })
    }

    pub fn has_section(&self, id: &str) -> bool {
        self.sections().any(|s| s.id == id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewSpec {
    pub id: ViewId,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_tab: Option<TabId>,
    pub tabs: Vec<TabSpec>,
}

impl ViewSpec {
    pub fn tab(&self, id: &str) -> Option<&TabSpec> {
        self.tabs.iter().find(|t| t.id == id)
    }

    pub fn tab_ids(&self) -> Vec<TabId> {
        self.tabs.iter().map(|t| t.id.clone()).collect()
    }
}

/// The complete, validated startup configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    default_view: Option<ViewId>,
    views: Vec<ViewSpec>,
    #[serde(default)]
    content: ContentRegistry,
}

impl Catalog {
    /// Assemble a catalog in code. Fails if the integrity check reports errors.
    pub fn new(
        title: impl Into<String>,
        views: Vec<ViewSpec>,
        content: ContentRegistry,
    ) -> Result<Self, CatalogError> {
        Self {
            title: title.into(),
            subtitle: None,
            default_view: None,
            views,
            content,
        }
        .validated()
    }

    /// Load a catalog from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Parse a catalog from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = toml::from_str(content)?;
        catalog.validated()
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Set the initial view. Fails if `view` is not configured.
    pub fn with_default_view(mut self, view: impl Into<ViewId>) -> Result<Self, CatalogError> {
        self.default_view = Some(view.into());
        self.validated()
    }

    fn validated(self) -> Result<Self, CatalogError> {
        let report = integrity::check(&self);
        if report.has_errors() {
            return Err(CatalogError::Integrity(report));
        }
        for warning in report.warnings() {
            tracing::warn!(%warning, "catalog integrity");
        }
        Ok(self)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn subtitle(&self) -> Option<&str> {
        self.subtitle.as_deref()
    }

    pub fn default_view(&self) -> Option<&ViewId> {
        self.default_view.as_ref()
    }

    pub fn views(&self) -> &[ViewSpec] {
        &self.views
    }

    pub fn view(&self, id: &str) -> Option<&ViewSpec> {
        self.views.iter().find(|v| v.id == id)
    }

    pub fn registry(&self) -> &ContentRegistry {
        &self.content
    }

    /// Resolve a (view, tab) pair, reporting which level was unknown.
    pub fn resolve(&self, view: &str, tab: &str) -> Result<(&ViewSpec, &TabSpec), NavError> {
        let view_spec = self.view(view).ok_or_else(|| NavError::invalid_view(view))?;
        let tab_spec = view_spec
            .tab(tab)
            .ok_or_else(|| NavError::invalid_tab(&view_spec.id, tab))?;
        Ok((view_spec, tab_spec))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integrity::Issue;

    const MINIMAL: &str = r#"
        title = "Docs"
        default_view = "b"

        [[views]]
        id = "a"
        label = "View A"

        [[views.tabs]]
        id = "one"
        label = "One"
        blocks = [
            { type = "heading", text = "Hello" },
            { type = "content", key = "intro" },
            { type = "section", id = "more", summary = "More", key = "more" },
        ]

        [[views]]
        id = "b"
        label = "View B"
        default_tab = "two"

        [[views.tabs]]
        id = "one"
        label = "One"

        [[views.tabs]]
        id = "two"
        label = "Two"

        [content.intro]
        kind = "text"
        body = "Intro text"

        [content.more]
        kind = "list"
        items = ["x", "y"]
    "#;

    #[test]
    fn parses_views_tabs_and_blocks() {
        let catalog = Catalog::from_toml(MINIMAL).unwrap();
        assert_eq!(catalog.title(), "Docs");
        assert_eq!(catalog.views().len(), 2);
        assert_eq!(catalog.default_view().map(|v| v.as_str()), Some("b"));

        let view = catalog.view("a").unwrap();
        let tab = view.tab("one").unwrap();
        assert_eq!(tab.blocks.len(), 3);
        let sections: Vec<_> = tab.sections().collect();
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].id, "more");
        assert!(tab.has_section("more"));
        assert!(!tab.has_section("intro"));

        assert_eq!(catalog.view("b").unwrap().default_tab.as_ref().unwrap(), "two");
    }

    #[test]
    fn resolve_reports_level() {
        let catalog = Catalog::from_toml(MINIMAL).unwrap();
        assert!(catalog.resolve("a", "one").is_ok());
        assert_eq!(
            catalog.resolve("zzz", "one").unwrap_err(),
            NavError::invalid_view("zzz")
        );
        assert_eq!(
            catalog.resolve("a", "two").unwrap_err(),
            NavError::invalid_tab(&ViewId::new("a"), "two")
        );
    }

    #[test]
    fn missing_content_fails_integrity() {
        let broken = MINIMAL.replace("[content.more]", "[content.other]");
        match Catalog::from_toml(&broken) {
            Err(CatalogError::Integrity(report)) => {
                assert!(report.errors().any(|issue| matches!(
                    issue,
                    Issue::MissingContent { key, .. } if key == "more"
                )));
            }
            other => panic!("expected integrity error, got {other:?}"),
        }
    }

    #[test]
    fn invalid_toml_is_parse_error() {
        assert!(matches!(
            Catalog::from_toml("title = "),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn unreadable_file_is_read_error() {
        let err = Catalog::from_file(Path::new("/nonexistent/docdeck/catalog.toml")).unwrap_err();
        assert!(matches!(err, CatalogError::Read { .. }));
        assert!(err.to_string().contains("/nonexistent/docdeck/catalog.toml"));
    }

    #[test]
    fn built_in_code() {
        let tab = TabSpec {
            id: "t".into(),
            label: "T".into(),
            blocks: vec![Block::Heading { text: "h".into() }],
        };
        let view = ViewSpec {
            id: "v".into(),
            label: "V".into(),
            default_tab: None,
            tabs: vec![tab],
        };
        let catalog = Catalog::new("Title", vec![view], ContentRegistry::default())
            .unwrap()
            .with_subtitle("Sub");
        assert_eq!(catalog.subtitle(), Some("Sub"));
        assert!(catalog.clone().with_default_view("v").is_ok());
        assert!(catalog.with_default_view("w").is_err());
    }
}
