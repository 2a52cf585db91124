//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types for ergonomic usage
//! of the feature extraction library.
//!
//! # Usage
//!
//! ```
//! use screenplay_feature_extractor::prelude::*;
//!
//! let catalog = FeatureCatalog::default();
//! let spec = FeatureSpec::parse("ln_count_of_words\n", &catalog).spec;
//! let script = Script::from_json_str("[]").unwrap();
//! let extractor = FeatureExtractor::new(&script, &spec);
//! assert_eq!(extractor.extract_all().count(), 0);
//! ```

// Data model
pub use crate::script::{Indent, Line, PartOfSpeech, Script, Token};

// Catalog and spec
pub use crate::config::{FeatureSpec, FeatureSpecEntry, ParseOutcome, SpecWarning};
pub use crate::schema::{FeatureCatalog, FeatureCategory, FeatureDef, FeatureKind};

// Engine
pub use crate::features::{FeatureExtractor, FeatureVector};

// Labels
pub use crate::labels::{split_class_tag, LineClass};

// Pipeline and export
pub use crate::export::{feature_matrix, write_csv, ExportMetadata};
pub use crate::pipeline::{run_pipeline, PipelineOutput};

// Errors
pub use crate::error::{Error, Result};
