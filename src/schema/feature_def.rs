//! Feature definitions and catalog types.
//!
//! This module defines the core types for feature metadata:
//! - `FeatureCategory`: script-level vs line-level features
//! - `FeatureKind`: closed enumeration of recognized feature names
//! - `FeatureDef`: metadata for a single feature
//! - `FeatureCatalog`: ordered registry with name lookup

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Scope of a feature value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeatureCategory {
    /// Constant across every line of one script.
    Script,

    /// Varies per line.
    Line,
}

impl FeatureCategory {
    /// Get all categories in standard order.
    pub fn all() -> &'static [FeatureCategory] {
        &[FeatureCategory::Script, FeatureCategory::Line]
    }

    /// Get the display name for this category.
    pub fn name(&self) -> &'static str {
        match self {
            FeatureCategory::Script => "Script",
            FeatureCategory::Line => "Line",
        }
    }
}

/// Recognized feature names, as a closed enumeration.
///
/// This is the single source of truth for feature validity: the spec parser
/// accepts only these names, and the engine dispatches on this enum with an
/// exhaustive `match`, so adding a feature here without teaching the engine
/// about it fails to compile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeatureKind {
    /// Total number of lines in the script.
    ScCountOfLines,

    /// Number of lines containing at least one bracket token.
    ScCountOfLinesWithBracket,

    /// Number of tokens in the line.
    LnCountOfWords,

    /// Number of bracket tokens in the line.
    LnCountOfBrackets,

    /// Length in tokens of the longest line-head prefix shared with a later line.
    LnLengthOfCommonHead,

    /// Decay score of the first open bracket.
    LnFirstOpenBracketPos,

    /// Decay score of the first close bracket.
    LnFirstCloseBracketPos,

    /// Decay score of the first space character.
    LnFirstSpacePos,

    /// Decay score of the first comma.
    LnFirstCommaPos,

    /// Decay score of the first period.
    LnFirstPeriodPos,

    /// Indent length in characters.
    LnLengthOfIndent,

    /// Cumulative noun / proper-noun / person-name score of the first token.
    LnBeginsWithName,

    /// Whether the last token is a close bracket.
    LnEndsWithCloseBracket,
}

impl FeatureKind {
    /// All recognized features in catalog order.
    pub fn all() -> &'static [FeatureKind] {
        &[
            FeatureKind::ScCountOfLines,
            FeatureKind::ScCountOfLinesWithBracket,
            FeatureKind::LnCountOfWords,
            FeatureKind::LnCountOfBrackets,
            FeatureKind::LnLengthOfCommonHead,
            FeatureKind::LnFirstOpenBracketPos,
            FeatureKind::LnFirstCloseBracketPos,
            FeatureKind::LnFirstSpacePos,
            FeatureKind::LnFirstCommaPos,
            FeatureKind::LnFirstPeriodPos,
            FeatureKind::LnLengthOfIndent,
            FeatureKind::LnBeginsWithName,
            FeatureKind::LnEndsWithCloseBracket,
        ]
    }

    /// Feature name as written in spec sources.
    pub fn name(self) -> &'static str {
        match self {
            FeatureKind::ScCountOfLines => "sc_count_of_lines",
            FeatureKind::ScCountOfLinesWithBracket => "sc_count_of_lines_with_bracket",
            FeatureKind::LnCountOfWords => "ln_count_of_words",
            FeatureKind::LnCountOfBrackets => "ln_count_of_brackets",
            FeatureKind::LnLengthOfCommonHead => "ln_length_of_common_head",
            FeatureKind::LnFirstOpenBracketPos => "ln_first_open_bracket_pos",
            FeatureKind::LnFirstCloseBracketPos => "ln_first_close_bracket_pos",
            FeatureKind::LnFirstSpacePos => "ln_first_space_pos",
            FeatureKind::LnFirstCommaPos => "ln_first_comma_pos",
            FeatureKind::LnFirstPeriodPos => "ln_first_period_pos",
            FeatureKind::LnLengthOfIndent => "ln_length_of_indent",
            FeatureKind::LnBeginsWithName => "ln_begins_with_name",
            FeatureKind::LnEndsWithCloseBracket => "ln_ends_with_close_bracket",
        }
    }

    /// Look up a feature by name.
    pub fn from_name(name: &str) -> Option<FeatureKind> {
        FeatureKind::all().iter().copied().find(|k| k.name() == name)
    }

    /// Scope of this feature.
    pub fn category(self) -> FeatureCategory {
        match self {
            FeatureKind::ScCountOfLines | FeatureKind::ScCountOfLinesWithBracket => {
                FeatureCategory::Script
            }
            _ => FeatureCategory::Line,
        }
    }

    /// Human-readable description.
    pub fn description(self) -> &'static str {
        match self {
            FeatureKind::ScCountOfLines => "Total number of lines in the script",
            FeatureKind::ScCountOfLinesWithBracket => {
                "Number of lines containing at least one bracket token"
            }
            FeatureKind::LnCountOfWords => "Number of tokens in the line",
            FeatureKind::LnCountOfBrackets => "Number of bracket tokens in the line",
            FeatureKind::LnLengthOfCommonHead => {
                "Tokens of line-head prefix shared with at least one later line"
            }
            FeatureKind::LnFirstOpenBracketPos => "How early the first open bracket appears",
            FeatureKind::LnFirstCloseBracketPos => "How early the first close bracket appears",
            FeatureKind::LnFirstSpacePos => "How early the first space appears",
            FeatureKind::LnFirstCommaPos => "How early the first comma appears",
            FeatureKind::LnFirstPeriodPos => "How early the first period appears",
            FeatureKind::LnLengthOfIndent => "Indent length in characters",
            FeatureKind::LnBeginsWithName => {
                "Noun / proper-noun / person-name score of the first token"
            }
            FeatureKind::LnEndsWithCloseBracket => "Whether the line ends with a close bracket",
        }
    }
}

impl std::fmt::Display for FeatureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Definition of a single feature: its kind plus its catalog position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureDef {
    /// The feature.
    pub kind: FeatureKind,

    /// Position in catalog order.
    pub index: usize,
}

impl FeatureDef {
    /// Feature name as written in spec sources.
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// Scope of this feature.
    pub fn category(&self) -> FeatureCategory {
        self.kind.category()
    }

    /// Human-readable description.
    pub fn description(&self) -> &'static str {
        self.kind.description()
    }
}

/// Ordered registry of recognized features with name lookup.
///
/// An explicit value rather than process-global state: the spec parser and
/// the engine both receive a catalog at construction time. `Default` yields
/// the full catalog, which is what production callers want; a narrowed
/// catalog is occasionally useful in tests.
#[derive(Debug, Clone)]
pub struct FeatureCatalog {
    defs: Vec<FeatureDef>,
    name_index: HashMap<&'static str, usize>,
}

impl FeatureCatalog {
    /// Build a catalog from the given kinds, in the given order.
    pub fn from_kinds(kinds: &[FeatureKind]) -> Self {
        let defs: Vec<FeatureDef> = kinds
            .iter()
            .enumerate()
            .map(|(index, &kind)| FeatureDef { kind, index })
            .collect();
        let name_index = defs.iter().map(|d| (d.name(), d.index)).collect();
        Self { defs, name_index }
    }

    /// Number of recognized features.
    pub fn len(&self) -> usize {
        self.defs.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    /// Check whether a name is recognized.
    pub fn contains(&self, name: &str) -> bool {
        self.name_index.contains_key(name)
    }

    /// Get a definition by name.
    pub fn get(&self, name: &str) -> Option<&FeatureDef> {
        self.name_index.get(name).map(|&i| &self.defs[i])
    }

    /// Get the kind for a name.
    pub fn kind_of(&self, name: &str) -> Option<FeatureKind> {
        self.get(name).map(|d| d.kind)
    }

    /// All definitions in catalog order.
    pub fn defs(&self) -> &[FeatureDef] {
        &self.defs
    }

    /// All definitions in a category.
    pub fn defs_by_category(&self, category: FeatureCategory) -> Vec<&FeatureDef> {
        self.defs
            .iter()
            .filter(|d| d.category() == category)
            .collect()
    }
}

impl Default for FeatureCatalog {
    fn default() -> Self {
        Self::from_kinds(FeatureKind::all())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_name_round_trip() {
        for kind in FeatureKind::all() {
            assert_eq!(FeatureKind::from_name(kind.name()), Some(*kind));
        }
        assert_eq!(FeatureKind::from_name("ln_bogus_feature"), None);
    }

    #[test]
    fn test_kind_categories() {
        assert_eq!(
            FeatureKind::ScCountOfLines.category(),
            FeatureCategory::Script
        );
        assert_eq!(
            FeatureKind::ScCountOfLinesWithBracket.category(),
            FeatureCategory::Script
        );
        assert_eq!(FeatureKind::LnCountOfWords.category(), FeatureCategory::Line);
        assert_eq!(
            FeatureKind::LnEndsWithCloseBracket.category(),
            FeatureCategory::Line
        );
    }

    #[test]
    fn test_default_catalog_covers_all_kinds() {
        let catalog = FeatureCatalog::default();
        assert_eq!(catalog.len(), FeatureKind::all().len());
        assert!(catalog.contains("ln_length_of_common_head"));
        assert!(!catalog.contains("ln_bogus_feature"));
    }

    #[test]
    fn test_catalog_lookup() {
        let catalog = FeatureCatalog::default();
        let def = catalog.get("ln_count_of_words").unwrap();
        assert_eq!(def.kind, FeatureKind::LnCountOfWords);
        assert_eq!(def.index, 2);
        assert_eq!(
            catalog.kind_of("sc_count_of_lines"),
            Some(FeatureKind::ScCountOfLines)
        );
    }

    #[test]
    fn test_catalog_category_partition() {
        let catalog = FeatureCatalog::default();
        let script = catalog.defs_by_category(FeatureCategory::Script);
        let line = catalog.defs_by_category(FeatureCategory::Line);
        assert_eq!(script.len(), 2);
        assert_eq!(line.len(), 11);
        assert_eq!(script.len() + line.len(), catalog.len());
    }

    #[test]
    fn test_narrowed_catalog() {
        let catalog = FeatureCatalog::from_kinds(&[
            FeatureKind::LnCountOfWords,
            FeatureKind::LnCountOfBrackets,
        ]);
        assert_eq!(catalog.len(), 2);
        assert!(catalog.contains("ln_count_of_words"));
        assert!(!catalog.contains("sc_count_of_lines"));
    }
}
