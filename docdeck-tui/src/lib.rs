//! docdeck TUI - terminal front end for the documentation navigator
//!
//! Screen layout:
//! - Header: catalog title, view bar, tab bar of the active view
//! - Content: the active panel, with collapsible sections
//! - Status bar: key hints and the outcome of the last action

pub mod app;
pub mod input;
pub mod logging;
pub mod theme;
pub mod ui;

pub use app::AppState;
pub use input::handle_key;
pub use theme::Theme;
