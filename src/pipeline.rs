//! Unified pipeline for script feature extraction.
//!
//! This module connects the components for the common one-script flow:
//!
//! ```text
//! tokenized JSON → Script ─┐
//!                          ├─ FeatureExtractor → Vec<FeatureVector>
//! spec source → FeatureSpec┘
//! ```
//!
//! It stays deliberately thin: no file paths, no CLI, no tokenizer. The
//! caller opens whatever produces the tokenized JSON and decides where the
//! vectors go ([`crate::export`] handles the formats).
//!
//! # Example
//!
//! ```
//! use screenplay_feature_extractor::pipeline::run_pipeline;
//! use screenplay_feature_extractor::schema::FeatureCatalog;
//!
//! let json = r#"[{ "indent_chars": "", "tokenized_words": [] }]"#;
//! let catalog = FeatureCatalog::default();
//! let output = run_pipeline(json.as_bytes(), "sc_count_of_lines\n", &catalog).unwrap();
//! assert_eq!(output.vectors, vec![vec![1.0]]);
//! ```

use std::io::Read;

use crate::config::{FeatureSpec, SpecWarning};
use crate::error::Result;
use crate::features::{FeatureExtractor, FeatureVector};
use crate::schema::FeatureCatalog;
use crate::script::Script;

/// Output from one pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    /// One feature vector per line, in script order.
    pub vectors: Vec<FeatureVector>,

    /// Non-fatal spec warnings encountered while parsing.
    pub warnings: Vec<SpecWarning>,

    /// Number of lines processed.
    pub lines_processed: usize,

    /// Number of features per line (the vector length).
    pub features_per_line: usize,
}

/// Deserialize a tokenized script, parse a feature spec, extract all lines.
///
/// Spec problems are non-fatal and surface in
/// [`PipelineOutput::warnings`]; only a malformed script JSON (or a read
/// failure) errors.
pub fn run_pipeline<R: Read>(
    script_json: R,
    spec_source: &str,
    catalog: &FeatureCatalog,
) -> Result<PipelineOutput> {
    let script = Script::from_json_reader(script_json)?;
    let outcome = FeatureSpec::parse(spec_source, catalog);

    let extractor = FeatureExtractor::new(&script, &outcome.spec);
    let vectors: Vec<FeatureVector> = extractor.extract_all().collect();

    log::debug!(
        "extracted {} features per line over {} lines",
        outcome.spec.len(),
        vectors.len()
    );

    Ok(PipelineOutput {
        lines_processed: vectors.len(),
        features_per_line: outcome.spec.len(),
        vectors,
        warnings: outcome.warnings,
    })
}
