//! The AutoApply documentation set, embedded at compile time.

use crate::catalog::{Catalog, CatalogError};

/// Source of the built-in catalog.
pub const AUTOAPPLY_TOML: &str = include_str!("../catalog/autoapply.toml");

/// Parse and validate the built-in catalog.
pub fn autoapply() -> Result<Catalog, CatalogError> {
    Catalog::from_toml(AUTOAPPLY_TOML)
}
