//! Single-choice selectors over fixed, ordered option lists.
//!
//! `ViewSelector` is the root of the navigation hierarchy; each view owns a
//! `TabSelector`. Both reject unknown ids without touching the active choice.

use std::borrow::Borrow;

use crate::error::NavError;
use crate::ids::{TabId, ViewId};

/// Exactly one of `options` is active; the list never changes after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector<Id> {
    options: Vec<Id>,
    active: usize,
}

impl<Id: Borrow<str>> Selector<Id> {
    /// Build a selector starting on `default`, or on the first option when no
    /// default is given. Returns `None` for an empty list or an unknown default.
    pub fn new(options: Vec<Id>, default: Option<&str>) -> Option<Self> {
        if options.is_empty() {
            return None;
        }
        let active = match default {
            Some(id) => position(&options, id)?,
            None => 0,
        };
        Some(Self { options, active })
    }

    pub fn current(&self) -> &Id {
        &self.options[self.active]
    }

    pub fn index(&self) -> usize {
        self.active
    }

    pub fn options(&self) -> &[Id] {
        &self.options
    }

    pub fn contains(&self, id: &str) -> bool {
        position(&self.options, id).is_some()
    }

    /// Activate `id`. Returns false, leaving the selection alone, if `id` is
    /// not one of the options.
    pub fn select(&mut self, id: &str) -> bool {
        match position(&self.options, id) {
            Some(idx) => {
                self.active = idx;
                true
            }
            None => false,
        }
    }

    pub fn select_next(&mut self) {
        self.active = (self.active + 1) % self.options.len();
    }

    pub fn select_prev(&mut self) {
        self.active = (self.active + self.options.len() - 1) % self.options.len();
    }
}

fn position<Id: Borrow<str>>(options: &[Id], id: &str) -> Option<usize> {
    options.iter().position(|o| Borrow::<str>::borrow(o) == id)
}

/// Active top-level view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewSelector {
    inner: Selector<ViewId>,
}

impl ViewSelector {
    pub fn new(views: Vec<ViewId>, default: Option<&str>) -> Option<Self> {
        Selector::new(views, default).map(|inner| Self { inner })
    }

    pub fn current(&self) -> &ViewId {
        self.inner.current()
    }

    pub fn index(&self) -> usize {
        self.inner.index()
    }

    pub fn views(&self) -> &[ViewId] {
        self.inner.options()
    }

    pub fn select(&mut self, id: &str) -> Result<(), NavError> {
        if self.inner.select(id) {
            Ok(())
        } else {
            Err(NavError::invalid_view(id))
        }
    }

    pub fn select_next(&mut self) {
        self.inner.select_next();
    }

    pub fn select_prev(&mut self) {
        self.inner.select_prev();
    }
}

/// Active tab within one view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabSelector {
    view: ViewId,
    inner: Selector<TabId>,
}

impl TabSelector {
    pub fn new(view: ViewId, tabs: Vec<TabId>, default: Option<&str>) -> Option<Self> {
        Selector::new(tabs, default).map(|inner| Self { view, inner })
    }

    pub fn current(&self) -> &TabId {
        self.inner.current()
    }

    pub fn index(&self) -> usize {
        self.inner.index()
    }

    pub fn tabs(&self) -> &[TabId] {
        self.inner.options()
    }

    pub fn select(&mut self, id: &str) -> Result<(), NavError> {
        if self.inner.select(id) {
            Ok(())
        } else {
            Err(NavError::invalid_tab(&self.view, id))
        }
    }

    pub fn select_next(&mut self) {
        self.inner.select_next();
    }

    pub fn select_prev(&mut self) {
        self.inner.select_prev();
    }
}
