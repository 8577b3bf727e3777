//! Panel renderer: pure projection of navigation state onto a content tree.
//!
//! `render` owns no state and performs no I/O. Given the same view, tab,
//! disclosure flags and registry it returns an identical tree, which the
//! front end is free to lay out however it likes.

use serde::Serialize;

use crate::catalog::{Block, TabSpec, ViewSpec};
use crate::disclosure::DisclosureState;
use crate::error::NavError;
use crate::ids::{ContentKey, SectionId, TabId, ViewId};
use crate::registry::{ContentPayload, ContentRegistry};

/// One renderable element of the active panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "node", rename_all = "snake_case")]
pub enum ContentNode<'a> {
    Heading {
        text: &'a str,
    },
    Block {
        key: &'a ContentKey,
        payload: &'a ContentPayload,
    },
    /// A collapsed section carries only its summary; `body` is set iff expanded.
    Section {
        id: &'a SectionId,
        summary: &'a str,
        expanded: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        body: Option<&'a ContentPayload>,
    },
}

/// The composed panel for one (view, tab, disclosure) combination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentTree<'a> {
    pub view: &'a ViewId,
    pub view_label: &'a str,
    pub tab: &'a TabId,
    pub tab_label: &'a str,
    pub nodes: Vec<ContentNode<'a>>,
}

impl<'a> ContentTree<'a> {
    /// Section nodes in layout order as `(id, expanded)`.
    pub fn sections(&self) -> impl Iterator<Item = (&'a SectionId, bool)> + '_ {
        self.nodes.iter().filter_map(|node| match node {
            ContentNode::Section { id, expanded, .. } => Some((*id, *expanded)),
            _ => None,
        })
    }

    /// Stable BLAKE3 fingerprint of the tree's canonical JSON form.
    pub fn fingerprint(&self) -> String {
        // Serializing borrowed strings and ordered vectors cannot fail.
        let canonical = serde_json::to_string(self).unwrap_or_default();
        blake3::hash(canonical.as_bytes()).to_hex().to_string()
    }
}

/// Compose `tab` of `view`, expanding sections per `disclosure`.
///
/// Every content key in the layout must resolve, whether or not its section
/// is expanded, so a broken layout fails the same way in every state.
pub fn render<'a>(
    view: &'a ViewSpec,
    tab: &'a TabSpec,
    disclosure: &DisclosureState,
    registry: &'a ContentRegistry,
) -> Result<ContentTree<'a>, NavError> {
    let lookup = |key: &ContentKey| {
        registry.get(key.as_str()).ok_or_else(|| NavError::ContentMissing {
            key: key.clone(),
            view: view.id.clone(),
            tab: tab.id.clone(),
        })
    };

    let mut nodes = Vec::with_capacity(tab.blocks.len());
    for block in &tab.blocks {
        let node = match block {
            Block::Heading { text } => ContentNode::Heading { text },
            Block::Content { key } => ContentNode::Block {
                key,
                payload: lookup(key)?,
            },
            Block::Section { id, summary, key } => {
                let payload = lookup(key)?;
                let expanded = disclosure.is_expanded(id.as_str());
                ContentNode::Section {
                    id,
                    summary,
                    expanded,
                    body: expanded.then_some(payload),
                }
            }
        };
        nodes.push(node);
    }

    Ok(ContentTree {
        view: &view.id,
        view_label: &view.label,
        tab: &tab.id,
        tab_label: &tab.label,
        nodes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> (ViewSpec, ContentRegistry) {
        let tab = TabSpec {
            id: "database".into(),
            label: "Database".into(),
            blocks: vec![
                Block::Heading {
                    text: "Schema".into(),
                },
                Block::Content { key: "db.intro".into() },
                Block::Section {
                    id: "users".into(),
                    summary: "Users".into(),
                    key: "db.users".into(),
                },
                Block::Section {
                    id: "jobs".into(),
                    summary: "Jobs".into(),
                    key: "db.jobs".into(),
                },
            ],
        };
        let view = ViewSpec {
            id: "spec".into(),
            label: "System Specification".into(),
            default_tab: None,
            tabs: vec![tab],
        };
        let registry = [
            ("db.intro", "UUID keys everywhere."),
            ("db.users", "CREATE TABLE users (id uuid);"),
            ("db.jobs", "CREATE TABLE jobs (id uuid);"),
        ]
        .into_iter()
        .map(|(k, body)| {
            (
                ContentKey::new(k),
                ContentPayload::Text {
                    title: None,
                    body: body.into(),
                },
            )
        })
        .collect();
        (view, registry)
    }

    #[test]
    fn collapsed_sections_have_no_body() {
        let (view, registry) = fixture();
        let tree = render(&view, &view.tabs[0], &DisclosureState::new(), &registry).unwrap();
        assert_eq!(tree.nodes.len(), 4);
        assert_eq!(tree.tab_label, "Database");
        for node in &tree.nodes {
            if let ContentNode::Section { expanded, body, .. } = node {
                assert!(!expanded);
                assert!(body.is_none());
            }
        }
    }

    #[test]
    fn expanded_section_includes_payload() {
        let (view, registry) = fixture();
        let mut disclosure = DisclosureState::new();
        disclosure.toggle("users");
        let tree = render(&view, &view.tabs[0], &disclosure, &registry).unwrap();
        let sections: Vec<_> = tree.sections().map(|(id, e)| (id.as_str(), e)).collect();
        assert_eq!(sections, vec![("users", true), ("jobs", false)]);
        match &tree.nodes[2] {
            ContentNode::Section { body: Some(payload), .. } => {
                assert_eq!(*payload, registry.get("db.users").unwrap());
            }
            other => panic!("expected expanded users section, got {other:?}"),
        }
    }

    #[test]
    fn same_inputs_same_output() {
        let (view, registry) = fixture();
        let mut disclosure = DisclosureState::new();
        disclosure.toggle("jobs");
        let a = render(&view, &view.tabs[0], &disclosure, &registry).unwrap();
        let b = render(&view, &view.tabs[0], &disclosure.clone(), &registry).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.fingerprint(), b.fingerprint());
    }

    #[test]
    fn fingerprint_tracks_disclosure() {
        let (view, registry) = fixture();
        let mut disclosure = DisclosureState::new();
        let before = render(&view, &view.tabs[0], &disclosure, &registry)
            .unwrap()
            .fingerprint();
        disclosure.toggle("users");
        let during = render(&view, &view.tabs[0], &disclosure, &registry)
            .unwrap()
            .fingerprint();
        disclosure.toggle("users");
        let after = render(&view, &view.tabs[0], &disclosure, &registry)
            .unwrap()
            .fingerprint();
        assert_ne!(before, during);
        assert_eq!(before, after);
    }

    #[test]
    fn missing_key_even_when_collapsed() {
        let (view, _) = fixture();
        let registry: ContentRegistry = std::iter::once((
            ContentKey::new("db.intro"),
            ContentPayload::Text {
                title: None,
                body: "x".into(),
            },
        ))
        .collect();
        let err = render(&view, &view.tabs[0], &DisclosureState::new(), &registry).unwrap_err();
        assert_eq!(
            err,
            NavError::ContentMissing {
                key: "db.users".into(),
                view: "spec".into(),
                tab: "database".into(),
            }
        );
    }

    #[test]
    fn json_omits_collapsed_body() {
        let (view, registry) = fixture();
        let tree = render(&view, &view.tabs[0], &DisclosureState::new(), &registry).unwrap();
        let json = serde_json::to_value(&tree).unwrap();
        let users = &json["nodes"][2];
        assert_eq!(users["node"], "section");
        assert_eq!(users["expanded"], false);
        assert!(users.get("body").is_none());
    }
}
