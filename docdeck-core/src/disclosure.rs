//! Disclosure state: expand/collapse flags for one tab's sections.
//!
//! Keys are permissive: any section id may be toggled, and keys never seen
//! read as collapsed. One instance exists per (view, tab) scope, so two tabs
//! that happen to reuse a section id never share a flag.

use std::collections::BTreeMap;

use crate::ids::SectionId;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisclosureState {
    flags: BTreeMap<SectionId, bool>,
}

impl DisclosureState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip a section and return its new state.
    pub fn toggle(&mut self, section: &str) -> bool {
        let flag = self
            .flags
            .entry(SectionId::new(section))
            .or_insert(false);
        *flag = !*flag;
        *flag
    }

    pub fn is_expanded(&self, section: &str) -> bool {
        self.flags.get(section).copied().unwrap_or(false)
    }

    /// Sections currently expanded, in key order.
    pub fn expanded(&self) -> impl Iterator<Item = &SectionId> {
        self.flags
            .iter()
            .filter(|(_, expanded)| **expanded)
            .map(|(id, _)| id)
    }
}
