//! docdeck core: navigation model for a static documentation browser.
//!
//! Content is fixed at build time; the only moving parts are which view is
//! active, which tab each view shows, and which disclosure sections each tab
//! has expanded:
//! - `catalog` / `registry`: startup configuration and static payloads
//! - `selector`: single-choice view and tab selectors
//! - `disclosure`: expand/collapse flags per (view, tab)
//! - `render`: pure projection of that state onto a `ContentTree`
//! - `navigator`: owns all of the above for one session

pub mod builtin;
pub mod catalog;
pub mod disclosure;
pub mod error;
pub mod ids;
pub mod integrity;
pub mod navigator;
pub mod registry;
pub mod render;
pub mod selector;

pub use catalog::{Block, Catalog, CatalogError, SectionRef, TabSpec, ViewSpec};
pub use disclosure::DisclosureState;
pub use error::{NavError, SelectionScope};
pub use ids::{ContentKey, SectionId, TabId, ViewId};
pub use integrity::{IntegrityReport, Issue, Severity};
pub use navigator::{Navigator, ViewState};
pub use registry::{ContentPayload, ContentRegistry};
pub use render::{render, ContentNode, ContentTree};
pub use selector::{Selector, TabSelector, ViewSelector};
