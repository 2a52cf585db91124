//! Feature Schema Module
//!
//! Provides the closed, ordered catalog of recognized feature names. The
//! catalog is the single source of truth for spec validity: every name a
//! feature spec may select lives here, and nothing else in the crate invents
//! feature names.
//!
//! # Design Philosophy
//!
//! - **Closed**: `FeatureKind` is an exhaustive enum; the engine's dispatch
//!   `match` fails to compile if the two drift apart
//! - **Explicit**: a [`FeatureCatalog`] value is passed to the parser and
//!   the engine, no process-global registry
//! - **Ordered**: catalog order is stable and documented; downstream
//!   schemas depend on it
//!
//! # Example
//!
//! ```
//! use screenplay_feature_extractor::schema::{FeatureCatalog, FeatureKind};
//!
//! let catalog = FeatureCatalog::default();
//! assert!(catalog.contains("ln_count_of_brackets"));
//! assert_eq!(
//!     catalog.kind_of("sc_count_of_lines"),
//!     Some(FeatureKind::ScCountOfLines)
//! );
//! ```

mod feature_def;

pub use feature_def::{FeatureCatalog, FeatureCategory, FeatureDef, FeatureKind};

/// Current schema version, recorded in export metadata.
pub const SCHEMA_VERSION: &str = "1.0.0";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_version() {
        assert!(!SCHEMA_VERSION.is_empty());
    }

    #[test]
    fn test_catalog_is_closed_over_kinds() {
        let catalog = FeatureCatalog::default();
        for kind in FeatureKind::all() {
            assert!(catalog.contains(kind.name()));
        }
    }
}
