//! Application state: single-owner, main-thread only.
//!
//! Navigation state lives in the core `Navigator`; this layer adds what only
//! the terminal needs: which section control has focus, the last status
//! message, and which overlay is open.

use std::collections::BTreeMap;

use docdeck_core::{NavError, Navigator, SectionId, TabId, ViewId};

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

/// Which overlay (if any) is shown on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    Help,
}

/// Top-level application state.
pub struct AppState {
    pub nav: Navigator,
    pub running: bool,
    pub overlay: Overlay,
    pub status_message: Option<(String, StatusLevel)>,

    /// Focused section index per (view, tab), restored on return.
    cursors: BTreeMap<(ViewId, TabId), usize>,
}

impl AppState {
    pub fn new(nav: Navigator) -> Self {
        Self {
            nav,
            running: true,
            overlay: Overlay::None,
            status_message: None,
            cursors: BTreeMap::new(),
        }
    }

    fn scope(&self) -> Option<(ViewId, TabId)> {
        let tab = self.nav.current_tab()?.clone();
        Some((self.nav.current_view().clone(), tab))
    }

    fn section_count(&self) -> usize {
        self.nav
            .current_tab_spec()
            .map_or(0, |tab| tab.sections().count())
    }

    /// Focused section index in the active tab.
    pub fn cursor(&self) -> usize {
        self.scope()
            .and_then(|scope| self.cursors.get(&scope).copied())
            .unwrap_or(0)
    }

    /// Id of the focused section, if the active tab has any sections.
    pub fn focused_section(&self) -> Option<SectionId> {
        let idx = self.cursor();
        self.nav
            .current_tab_spec()?
            .sections()
            .nth(idx)
            .map(|s| s.id.clone())
    }

    fn set_cursor(&mut self, idx: usize) {
        if let Some(scope) = self.scope() {
            self.cursors.insert(scope, idx);
        }
    }

    pub fn cursor_down(&mut self) {
        let count = self.section_count();
        let idx = self.cursor();
        if idx + 1 < count {
            self.set_cursor(idx + 1);
        }
    }

    pub fn cursor_up(&mut self) {
        let idx = self.cursor();
        self.set_cursor(idx.saturating_sub(1));
    }

    pub fn cursor_first(&mut self) {
        self.set_cursor(0);
    }

    pub fn cursor_last(&mut self) {
        let count = self.section_count();
        self.set_cursor(count.saturating_sub(1));
    }

    /// Expand or collapse the focused section.
    pub fn toggle_focused(&mut self) {
        let Some(section) = self.focused_section() else {
            self.set_warning("This tab has no collapsible sections");
            return;
        };
        let expanded = self.nav.toggle_section(section.as_str());
        let summary = self
            .nav
            .current_tab_spec()
            .and_then(|tab| tab.sections().find(|s| *s.id == section))
            .map_or_else(|| section.to_string(), |s| s.summary.to_string());
        let verb = if expanded { "Expanded" } else { "Collapsed" };
        self.set_status(format!("{verb} {summary}"));
    }

    /// Jump to the view at `idx` in display order.
    pub fn choose_view_at(&mut self, idx: usize) {
        let Some(id) = self.nav.view_selector().views().get(idx).cloned() else {
            self.set_warning(format!("No view {}", idx + 1));
            return;
        };
        let result = self.nav.choose_view(id.as_str());
        self.report(result);
    }

    pub fn next_view(&mut self) {
        self.nav.next_view();
        self.announce();
    }

    pub fn prev_view(&mut self) {
        self.nav.prev_view();
        self.announce();
    }

    pub fn next_tab(&mut self) {
        self.nav.next_tab();
        self.announce();
    }

    pub fn prev_tab(&mut self) {
        self.nav.prev_tab();
        self.announce();
    }

    fn report(&mut self, result: Result<(), NavError>) {
        match result {
            Ok(()) => self.announce(),
            Err(err) => self.set_error(err.to_string()),
        }
    }

    /// Describe the active (view, tab) in the status bar.
    fn announce(&mut self) {
        let label = match (self.nav.current_view_spec(), self.nav.current_tab_spec()) {
            (Some(view), Some(tab)) => format!("{} › {}", view.label, tab.label),
            _ => self.nav.current_view().to_string(),
        };
        self.set_status(label);
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Error));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docdeck_core::builtin;

    fn app() -> AppState {
        AppState::new(Navigator::new(builtin::autoapply().unwrap()).unwrap())
    }

    #[test]
    fn cursor_is_clamped_to_sections() {
        let mut app = app();
        app.nav.choose_tab("architecture").unwrap();
        assert_eq!(app.focused_section().unwrap(), "communication");
        for _ in 0..10 {
            app.cursor_down();
        }
        assert_eq!(app.cursor(), 1);
        assert_eq!(app.focused_section().unwrap(), "plugins");
        app.cursor_up();
        app.cursor_up();
        assert_eq!(app.cursor(), 0);
    }

    #[test]
    fn cursor_is_remembered_per_tab() {
        let mut app = app();
        app.nav.choose_tab("database").unwrap();
        app.cursor_last();
        let last = app.cursor();
        assert!(last > 0);

        app.next_tab();
        assert_eq!(app.cursor(), 0);
        app.prev_tab();
        assert_eq!(app.cursor(), last);
    }

    #[test]
    fn toggle_without_sections_warns() {
        let mut app = app();
        let revision = app.nav.revision();
        app.toggle_focused();
        assert_eq!(app.nav.revision(), revision);
        assert!(matches!(app.status_message, Some((_, StatusLevel::Warning))));
    }

    #[test]
    fn toggle_reports_summary() {
        let mut app = app();
        app.nav.choose_tab("database").unwrap();
        app.toggle_focused();
        assert!(app.nav.is_expanded("users"));
        assert_eq!(
            app.status_message,
            Some(("Expanded USERS".to_string(), StatusLevel::Info))
        );
    }

    #[test]
    fn unknown_view_number_is_a_warning() {
        let mut app = app();
        app.choose_view_at(8);
        assert_eq!(app.nav.current_view(), "spec");
        assert_eq!(
            app.status_message,
            Some(("No view 9".to_string(), StatusLevel::Warning))
        );
        app.choose_view_at(1);
        assert_eq!(app.nav.current_view(), "tech");
    }
}
