//! Screenplay Feature Extractor
//!
//! Feature extraction from morphologically tokenized screenplay lines for
//! line-role classification (title, character name, dialogue, direction, ...).
//!
//! # Overview
//!
//! A screenplay arrives already split into lines and tokenized by an
//! external morphological analyzer. This library turns each line into a
//! fixed-order numeric feature vector according to a small declarative
//! feature spec; a downstream neural classifier consumes the vectors. The
//! tokenizer, the trainer, and all file handling live outside this crate.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                 Screenplay Feature Extractor                    │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  script/    - tokenized data model (Token, Line, Script)        │
//! │  schema/    - closed catalog of recognized feature names        │
//! │  config/    - feature spec parsing (name, weight per line)      │
//! │  features/  - the extraction engine and its memo caches         │
//! │  labels/    - line-role catalog and class-tag splitting         │
//! │  export/    - CSV rows, matrix assembly, metadata sidecar       │
//! │  pipeline/  - parse + extract convenience over readers          │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use screenplay_feature_extractor::prelude::*;
//!
//! let json = r#"[{
//!     "indent_chars": "",
//!     "tokenized_words": [
//!         { "surface": "「", "part_of_speech": "記号,括弧開,*,*",
//!           "infl_type": "*", "infl_form": "*", "base_form": "「",
//!           "reading": "「", "phonetic": "「" }
//!     ]
//! }]"#;
//!
//! let catalog = FeatureCatalog::default();
//! let outcome = FeatureSpec::parse("ln_count_of_brackets\n", &catalog);
//! let script = Script::from_json_str(json).unwrap();
//!
//! let extractor = FeatureExtractor::new(&script, &outcome.spec);
//! let vectors: Vec<_> = extractor.extract_all().collect();
//! assert_eq!(vectors, vec![vec![1.0]]);
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod features;
pub mod labels;
pub mod pipeline;
pub mod prelude;
pub mod schema;
pub mod script;

// Re-exports - Data model
pub use script::{Indent, Line, PartOfSpeech, Script, Token};

// Re-exports - Schema
pub use schema::{FeatureCatalog, FeatureCategory, FeatureDef, FeatureKind, SCHEMA_VERSION};

// Re-exports - Config
pub use config::{FeatureSpec, FeatureSpecEntry, ParseOutcome, SpecWarning};

// Re-exports - Engine
pub use features::{FeatureExtractor, FeatureVector};

// Re-exports - Labels
pub use labels::{split_class_tag, LineClass};

// Re-exports - Export
pub use export::{feature_matrix, write_csv, ExportMetadata};

// Re-exports - Pipeline
pub use pipeline::{run_pipeline, PipelineOutput};

// Re-exports - Errors
pub use error::{Error, Result};
