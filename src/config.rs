//! Feature spec configuration.
//!
//! A feature spec is a small declarative text format selecting which
//! features to compute and in what column order:
//!
//! ```text
//! # script-level
//! sc_count_of_lines
//! sc_count_of_lines_with_bracket
//! # line-level, with a hyperparameter
//! ln_count_of_brackets, 2
//! ```
//!
//! One `name[, weight]` declaration per line; `#` starts a trailing comment;
//! blank lines are ignored. Parsing is deliberately forgiving: unknown names
//! and duplicates produce non-fatal warnings, malformed weights silently
//! default to 1.0, and a malformed or empty source yields an empty spec
//! rather than an error. Downstream consumers rely on the resulting column
//! order, so entries are never re-sorted.
//!
//! # Example
//!
//! ```
//! use screenplay_feature_extractor::config::FeatureSpec;
//! use screenplay_feature_extractor::schema::FeatureCatalog;
//!
//! let catalog = FeatureCatalog::default();
//! let outcome = FeatureSpec::parse("ln_count_of_words\nln_count_of_brackets,2\n", &catalog);
//! assert!(outcome.warnings.is_empty());
//! assert_eq!(outcome.spec.len(), 2);
//! ```

use crate::schema::{FeatureCatalog, FeatureKind};
use serde::{Deserialize, Serialize};

/// One selected feature with its hyperparameter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureSpecEntry {
    /// The selected feature.
    pub kind: FeatureKind,

    /// Hyperparameter parsed from the spec source.
    ///
    /// Reserved as a scaling hook: the value is parsed, stored, and
    /// serialized, but no dispatch rule currently applies it to a computed
    /// feature. Applying it would rescale columns under already-trained
    /// models.
    pub weight: f64,
}

impl FeatureSpecEntry {
    /// Feature name as written in spec sources.
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }
}

/// Non-fatal problem found while parsing a spec source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecWarning {
    /// A requested name is not in the catalog; the entry was dropped.
    UnknownFeature {
        /// The unrecognized name as written.
        name: String,
    },

    /// A catalog name appeared more than once; only the first occurrence
    /// is kept.
    DuplicateFeature {
        /// The duplicated feature.
        kind: FeatureKind,
    },
}

impl std::fmt::Display for SpecWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpecWarning::UnknownFeature { name } => {
                write!(f, "{name} is in the feature spec but not defined")
            }
            SpecWarning::DuplicateFeature { kind } => {
                write!(f, "{kind} is duplicated in the feature spec")
            }
        }
    }
}

/// Result of parsing a spec source: the spec plus any warnings.
///
/// Warnings are also emitted through the `log` facade; this struct exists so
/// callers without a logger still see them.
#[derive(Debug, Clone)]
pub struct ParseOutcome {
    /// The parsed spec (possibly empty).
    pub spec: FeatureSpec,

    /// Warnings in emission order: unknown names in source order, then
    /// duplicates in catalog order.
    pub warnings: Vec<SpecWarning>,
}

impl ParseOutcome {
    /// Whether parsing produced any warnings.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Ordered list of selected features.
///
/// Order is first-seen order in the spec source and fixes the positional
/// meaning of every extracted feature vector.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FeatureSpec {
    entries: Vec<FeatureSpecEntry>,
}

impl FeatureSpec {
    /// Build a spec directly from entries (no validation or dedup).
    pub fn from_entries(entries: Vec<FeatureSpecEntry>) -> Self {
        Self { entries }
    }

    /// Build a spec selecting every catalog feature with weight 1.0.
    pub fn full_catalog(catalog: &FeatureCatalog) -> Self {
        Self {
            entries: catalog
                .defs()
                .iter()
                .map(|d| FeatureSpecEntry {
                    kind: d.kind,
                    weight: 1.0,
                })
                .collect(),
        }
    }

    /// Parse a spec source against a catalog.
    ///
    /// Per source line: everything from `#` onward is a comment; the rest is
    /// trimmed and skipped if empty, else split on commas. A missing weight
    /// component defaults to `1`. Unknown non-empty names warn and are
    /// dropped; duplicates warn and collapse to the first occurrence; a
    /// weight that does not parse as `f64` silently becomes 1.0.
    pub fn parse(source: &str, catalog: &FeatureCatalog) -> ParseOutcome {
        let mut recorded: Vec<(FeatureKind, String)> = Vec::new();
        let mut warnings = Vec::new();

        for raw in source.lines() {
            let line = raw.split('#').next().unwrap_or("").trim();
            if line.is_empty() {
                continue;
            }
            let mut components: Vec<&str> = line.split(',').map(str::trim).collect();
            if components.len() < 2 {
                components.push("1");
            }
            let name = components[0];
            if let Some(kind) = catalog.kind_of(name) {
                recorded.push((kind, components[1].to_string()));
            } else if !name.is_empty() {
                log::warn!("{name} is in the feature spec but not defined");
                warnings.push(SpecWarning::UnknownFeature {
                    name: name.to_string(),
                });
            }
        }

        for def in catalog.defs() {
            if recorded.iter().filter(|(k, _)| *k == def.kind).count() > 1 {
                log::warn!("{} is duplicated in the feature spec", def.name());
                warnings.push(SpecWarning::DuplicateFeature { kind: def.kind });
            }
        }

        let mut entries: Vec<FeatureSpecEntry> = Vec::new();
        for (kind, raw_weight) in recorded {
            if entries.iter().any(|e| e.kind == kind) {
                continue;
            }
            // Malformed weights fall back silently; only names warn.
            let weight = raw_weight.parse::<f64>().unwrap_or(1.0);
            entries.push(FeatureSpecEntry { kind, weight });
        }

        ParseOutcome {
            spec: Self { entries },
            warnings,
        }
    }

    /// Number of selected features.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no features are selected.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in column order.
    pub fn entries(&self) -> &[FeatureSpecEntry] {
        &self.entries
    }

    /// Selected kinds in column order.
    pub fn kinds(&self) -> impl Iterator<Item = FeatureKind> + '_ {
        self.entries.iter().map(|e| e.kind)
    }

    /// Column names in order.
    pub fn column_names(&self) -> Vec<&'static str> {
        self.entries.iter().map(|e| e.name()).collect()
    }

    /// Canonical re-serialization, one `name,weight` declaration per line.
    ///
    /// Parsing the result against the same catalog reproduces this spec.
    pub fn to_source(&self) -> String {
        let mut out = String::new();
        for entry in &self.entries {
            out.push_str(entry.name());
            out.push(',');
            out.push_str(&entry.weight.to_string());
            out.push('\n');
        }
        out
    }
}
