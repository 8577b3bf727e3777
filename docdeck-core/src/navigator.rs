//! Navigator: owns the catalog and every scope's navigation state.
//!
//! The hierarchy is three independent state machines:
//! - one `ViewSelector` for the whole session
//! - one `TabSelector` per view
//! - one `DisclosureState` per (view, tab)
//!
//! Nothing is reset when navigating away, so returning to a view or tab
//! shows it exactly as it was left. Failed actions change nothing.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::catalog::{Catalog, CatalogError, TabSpec, ViewSpec};
use crate::disclosure::DisclosureState;
use crate::error::NavError;
use crate::ids::{TabId, ViewId};
use crate::integrity::{IntegrityReport, Issue};
use crate::render::{self, ContentTree};
use crate::selector::{TabSelector, ViewSelector};

/// State owned by a single view.
#[derive(Debug, Clone)]
pub struct ViewState {
    tabs: TabSelector,
    disclosures: BTreeMap<TabId, DisclosureState>,
}

impl ViewState {
    fn new(view: &ViewSpec) -> Option<Self> {
        let tabs = TabSelector::new(
            view.id.clone(),
            view.tab_ids(),
            view.default_tab.as_ref().map(|t| t.as_str()),
        )?;
        let disclosures = view
            .tabs
            .iter()
            .map(|t| (t.id.clone(), DisclosureState::new()))
            .collect();
        Some(Self { tabs, disclosures })
    }

    pub fn tabs(&self) -> &TabSelector {
        &self.tabs
    }

    pub fn current_tab(&self) -> &TabId {
        self.tabs.current()
    }

    pub fn disclosure(&self, tab: &str) -> Option<&DisclosureState> {
        self.disclosures.get(tab)
    }

    fn active_disclosure(&self) -> Option<&DisclosureState> {
        self.disclosures.get(self.tabs.current().as_str())
    }

    fn active_disclosure_mut(&mut self) -> &mut DisclosureState {
        self.disclosures
            .entry(self.tabs.current().clone())
            .or_default()
    }
}

/// Session navigation state over a validated catalog.
#[derive(Debug, Clone)]
pub struct Navigator {
    catalog: Catalog,
    views: ViewSelector,
    states: BTreeMap<ViewId, ViewState>,
    revision: u64,
}

impl Navigator {
    pub fn new(catalog: Catalog) -> Result<Self, CatalogError> {
        let ids: Vec<ViewId> = catalog.views().iter().map(|v| v.id.clone()).collect();
        let views = ViewSelector::new(ids, catalog.default_view().map(|v| v.as_str()))
            .ok_or_else(|| structural(Issue::NoViews))?;

        let mut states = BTreeMap::new();
        for view in catalog.views() {
            let state = ViewState::new(view).ok_or_else(|| {
                structural(Issue::NoTabs {
                    view: view.id.clone(),
                })
            })?;
            states.insert(view.id.clone(), state);
        }

        debug!(
            view = %views.current(),
            views = states.len(),
            "navigator ready"
        );
        Ok(Self {
            catalog,
            views,
            states,
            revision: 0,
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Bumped on every successful state change; front ends redraw on change.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn view_selector(&self) -> &ViewSelector {
        &self.views
    }

    pub fn current_view(&self) -> &ViewId {
        self.views.current()
    }

    pub fn current_view_spec(&self) -> Option<&ViewSpec> {
        self.catalog.view(self.views.current().as_str())
    }

    pub fn view_state(&self, view: &str) -> Option<&ViewState> {
        self.states.get(view)
    }

    /// Active tab of the active view.
    pub fn current_tab(&self) -> Option<&TabId> {
        self.active_state().map(|s| s.current_tab())
    }

    pub fn current_tab_spec(&self) -> Option<&TabSpec> {
        let tab = self.current_tab()?;
        self.current_view_spec()?.tab(tab.as_str())
    }

    /// Active tab of any view, whether or not that view is active.
    pub fn tab_of(&self, view: &str) -> Option<&TabId> {
        self.states.get(view).map(|s| s.current_tab())
    }

    /// Disclosure flags of any (view, tab) scope.
    pub fn disclosure(&self, view: &str, tab: &str) -> Option<&DisclosureState> {
        self.states.get(view)?.disclosure(tab)
    }

    /// Whether `section` is expanded in the active tab.
    pub fn is_expanded(&self, section: &str) -> bool {
        self.active_state()
            .and_then(|s| s.active_disclosure())
            .is_some_and(|d| d.is_expanded(section))
    }

    /// Number of expanded sections in the active tab.
    pub fn expanded_count(&self) -> usize {
        self.active_state()
            .and_then(|s| s.active_disclosure())
            .map_or(0, |d| d.expanded().count())
    }

    pub fn choose_view(&mut self, id: &str) -> Result<(), NavError> {
        if let Err(err) = self.views.select(id) {
            warn!(view = id, "rejected view selection");
            return Err(err);
        }
        self.touch("view selected");
        Ok(())
    }

    pub fn choose_tab(&mut self, id: &str) -> Result<(), NavError> {
        let view = self.views.current().clone();
        let state = self
            .states
            .get_mut(view.as_str())
            .ok_or_else(|| NavError::invalid_view(view.as_str()))?;
        if let Err(err) = state.tabs.select(id) {
            warn!(%view, tab = id, "rejected tab selection");
            return Err(err);
        }
        self.touch("tab selected");
        Ok(())
    }

    /// Flip `section` in the active (view, tab) scope and return its new
    /// state. Any id is accepted; ids the layout doesn't declare are logged.
    pub fn toggle_section(&mut self, section: &str) -> bool {
        if !self
            .current_tab_spec()
            .is_some_and(|tab| tab.has_section(section))
        {
            warn!(
                view = %self.views.current(),
                section,
                "toggled a section the active tab does not declare"
            );
        }
        let view = self.views.current().clone();
        let expanded = self
            .states
            .get_mut(view.as_str())
            .map(|s| s.active_disclosure_mut().toggle(section))
            .unwrap_or(false);
        self.touch("section toggled");
        expanded
    }

    pub fn next_view(&mut self) {
        let before = self.views.index();
        self.views.select_next();
        if self.views.index() != before {
            self.touch("view selected");
        }
    }

    pub fn prev_view(&mut self) {
        let before = self.views.index();
        self.views.select_prev();
        if self.views.index() != before {
            self.touch("view selected");
        }
    }

    pub fn next_tab(&mut self) {
        self.cycle_tab(TabSelector::select_next);
    }

    pub fn prev_tab(&mut self) {
        self.cycle_tab(TabSelector::select_prev);
    }

    /// Move the active view's tab selector; a single-tab view stays put.
    fn cycle_tab(&mut self, step: fn(&mut TabSelector)) {
        let Some(state) = self.states.get_mut(self.views.current().as_str()) else {
            return;
        };
        let before = state.tabs.index();
        step(&mut state.tabs);
        if state.tabs.index() != before {
            self.touch("tab selected");
        }
    }

    /// Render the active view's active tab.
    pub fn render(&self) -> Result<ContentTree<'_>, NavError> {
        let view = self.views.current();
        let tab = self
            .current_tab()
            .ok_or_else(|| NavError::invalid_view(view.as_str()))?;
        self.render_scope(view.as_str(), tab.as_str())
    }

    /// Render any (view, tab) with that scope's own disclosure flags.
    pub fn render_scope(&self, view: &str, tab: &str) -> Result<ContentTree<'_>, NavError> {
        let (view_spec, tab_spec) = self.catalog.resolve(view, tab)?;
        let disclosure = self
            .disclosure(view, tab)
            .ok_or_else(|| NavError::invalid_tab(&view_spec.id, tab))?;
        render::render(view_spec, tab_spec, disclosure, self.catalog.registry())
    }

    fn active_state(&self) -> Option<&ViewState> {
        self.states.get(self.views.current().as_str())
    }

    fn touch(&mut self, what: &'static str) {
        self.revision += 1;
        debug!(
            view = %self.views.current(),
            tab = ?self.current_tab().map(|t| t.as_str()),
            revision = self.revision,
            "{what}"
        );
    }
}

fn structural(issue: Issue) -> CatalogError {
    CatalogError::Integrity(IntegrityReport::from(vec![issue]))
}
