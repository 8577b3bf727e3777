//! Catalog integrity check.
//!
//! Catches drift between layouts and content before anything is shown:
//! duplicate ids, defaults that point nowhere, layout keys with no payload,
//! and payloads that no layout ever reaches.

use std::collections::BTreeSet;
use std::fmt;

use thiserror::Error;

use crate::catalog::Catalog;
use crate::ids::{ContentKey, SectionId, TabId, ViewId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Issue {
    #[error("catalog defines no views")]
    NoViews,
    #[error("view '{view}' defines no tabs")]
    NoTabs { view: ViewId },
    #[error("view '{view}' is defined more than once")]
    DuplicateView { view: ViewId },
    #[error("tab '{view}/{tab}' is defined more than once")]
    DuplicateTab { view: ViewId, tab: TabId },
    #[error("section '{section}' appears more than once in '{view}/{tab}'")]
    DuplicateSection {
        view: ViewId,
        tab: TabId,
        section: SectionId,
    },
    #[error("default view '{view}' is not configured")]
    UnknownDefaultView { view: ViewId },
    #[error("default tab '{tab}' of view '{view}' is not configured")]
    UnknownDefaultTab { view: ViewId, tab: TabId },
    #[error("'{view}/{tab}' references content '{key}' which is not in the registry")]
    MissingContent {
        view: ViewId,
        tab: TabId,
        key: ContentKey,
    },
    #[error("section '{section}' in '{view}/{tab}' has an empty summary")]
    EmptySummary {
        view: ViewId,
        tab: TabId,
        section: SectionId,
    },
    #[error("content '{key}' is not referenced by any tab")]
    UnreferencedContent { key: ContentKey },
}

impl Issue {
    pub fn severity(&self) -> Severity {
        match self {
            Issue::EmptySummary { .. } | Issue::UnreferencedContent { .. } => Severity::Warning,
            _ => Severity::Error,
        }
    }
}

/// All issues found in one catalog, in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntegrityReport {
    issues: Vec<Issue>,
}

impl IntegrityReport {
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    pub fn errors(&self) -> impl Iterator<Item = &Issue> {
        self.issues
            .iter()
            .filter(|i| i.severity() == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Issue> {
        self.issues
            .iter()
            .filter(|i| i.severity() == Severity::Warning)
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

impl From<Vec<Issue>> for IntegrityReport {
    fn from(issues: Vec<Issue>) -> Self {
        Self { issues }
    }
}

impl fmt::Display for IntegrityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let errors = self.errors().count();
        let warnings = self.issues.len() - errors;
        write!(f, "{errors} error(s), {warnings} warning(s)")?;
        for issue in self.errors() {
            write!(f, "; {issue}")?;
        }
        Ok(())
    }
}

/// Run every check against `catalog`.
pub fn check(catalog: &Catalog) -> IntegrityReport {
    let mut issues = Vec::new();
    let registry = catalog.registry();
    let mut referenced: BTreeSet<&str> = BTreeSet::new();

    if catalog.views().is_empty() {
        issues.push(Issue::NoViews);
    }

    let mut seen_views = BTreeSet::new();
    for view in catalog.views() {
        if !seen_views.insert(view.id.as_str()) {
            issues.push(Issue::DuplicateView {
                view: view.id.clone(),
            });
        }
        if view.tabs.is_empty() {
            issues.push(Issue::NoTabs {
                view: view.id.clone(),
            });
        }
        if let Some(tab) = &view.default_tab {
            if view.tab(tab.as_str()).is_none() {
                issues.push(Issue::UnknownDefaultTab {
                    view: view.id.clone(),
                    tab: tab.clone(),
                });
            }
        }

        let mut seen_tabs = BTreeSet::new();
        for tab in &view.tabs {
            if !seen_tabs.insert(tab.id.as_str()) {
                issues.push(Issue::DuplicateTab {
                    view: view.id.clone(),
                    tab: tab.id.clone(),
                });
            }

            for key in tab.blocks.iter().filter_map(|b| b.content_key()) {
                referenced.insert(key.as_str());
                if !registry.contains(key.as_str()) {
                    issues.push(Issue::MissingContent {
                        view: view.id.clone(),
                        tab: tab.id.clone(),
                        key: key.clone(),
                    });
                }
            }

            let mut seen_sections = BTreeSet::new();
            for section in tab.sections() {
                if !seen_sections.insert(section.id.as_str()) {
                    issues.push(Issue::DuplicateSection {
                        view: view.id.clone(),
                        tab: tab.id.clone(),
                        section: section.id.clone(),
                    });
                }
                if section.summary.trim().is_empty() {
                    issues.push(Issue::EmptySummary {
                        view: view.id.clone(),
                        tab: tab.id.clone(),
                        section: section.id.clone(),
                    });
                }
            }
        }
    }

    if let Some(view) = catalog.default_view() {
        if catalog.view(view.as_str()).is_none() {
            issues.push(Issue::UnknownDefaultView { view: view.clone() });
        }
    }

    for key in registry.keys() {
        if !referenced.contains(key.as_str()) {
            issues.push(Issue::UnreferencedContent { key: key.clone() });
        }
    }

    IntegrityReport { issues }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogError;

    fn report_for(toml_src: &str) -> IntegrityReport {
        match Catalog::from_toml(toml_src) {
            Ok(catalog) => check(&catalog),
            Err(CatalogError::Integrity(report)) => report,
            Err(other) => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_catalog_has_no_views() {
        let report = report_for("title = \"x\"\nviews = []\n");
        assert_eq!(report.issues(), &[Issue::NoViews]);
        assert!(report.has_errors());
    }

    #[test]
    fn duplicates_and_bad_defaults() {
        let report = report_for(
            r#"
            title = "x"
            default_view = "nope"

            [[views]]
            id = "a"
            label = "A"
            default_tab = "missing"

            [[views.tabs]]
            id = "t"
            label = "T"
            blocks = [
                { type = "section", id = "s", summary = "S", key = "k" },
                { type = "section", id = "s", summary = " ", key = "k" },
            ]

            [[views.tabs]]
            id = "t"
            label = "T again"

            [[views]]
            id = "a"
            label = "A again"
            tabs = []

            [content.k]
            kind = "text"
            body = "body"
            "#,
        );
        let issues = report.issues();
        assert!(issues.contains(&Issue::DuplicateView { view: "a".into() }));
        assert!(issues.contains(&Issue::NoTabs { view: "a".into() }));
        assert!(issues.contains(&Issue::DuplicateTab {
            view: "a".into(),
            tab: "t".into()
        }));
        assert!(issues.contains(&Issue::DuplicateSection {
            view: "a".into(),
            tab: "t".into(),
            section: "s".into()
        }));
        assert!(issues.contains(&Issue::EmptySummary {
            view: "a".into(),
            tab: "t".into(),
            section: "s".into()
        }));
        assert!(issues.contains(&Issue::UnknownDefaultTab {
            view: "a".into(),
            tab: "missing".into()
        }));
        assert!(issues.contains(&Issue::UnknownDefaultView { view: "nope".into() }));
    }

    #[test]
    fn same_section_id_in_two_tabs_is_fine() {
        let report = report_for(
            r#"
            title = "x"

            [[views]]
            id = "tech"
            label = "Tech"

            [[views.tabs]]
            id = "api"
            label = "API"
            blocks = [{ type = "section", id = "connectors", summary = "Connectors", key = "a" }]

            [[views.tabs]]
            id = "database"
            label = "DB"
            blocks = [{ type = "section", id = "connectors", summary = "connectors table", key = "b" }]

            [content.a]
            kind = "text"
            body = "endpoints"

            [content.b]
            kind = "diagram"
            source = "CREATE TABLE connectors ();"
            "#,
        );
        assert!(report.is_clean(), "{report}");
    }

    #[test]
    fn unreferenced_content_is_a_warning() {
        let report = report_for(
            r#"
            title = "x"

            [[views]]
            id = "a"
            label = "A"

            [[views.tabs]]
            id = "t"
            label = "T"

            [content.orphan]
            kind = "text"
            body = "never shown"
            "#,
        );
        assert!(!report.has_errors());
        let warnings: Vec<_> = report.warnings().collect();
        assert_eq!(
            warnings,
            vec![&Issue::UnreferencedContent {
                key: "orphan".into()
            }]
        );
    }

    #[test]
    fn display_summarises_counts() {
        let report = IntegrityReport {
            issues: vec![
                Issue::NoViews,
                Issue::UnreferencedContent { key: "k".into() },
            ],
        };
        assert_eq!(
            report.to_string(),
            "1 error(s), 1 warning(s); catalog defines no views"
        );
    }
}
