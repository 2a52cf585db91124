//! Feature extraction for screenplay line classification.
//!
//! This module is the computational core of the crate: given one tokenized
//! [`Script`] and one parsed [`FeatureSpec`], it produces one numeric vector
//! per line, with values in spec column order.
//!
//! # Architecture
//!
//! The extraction is organized into:
//! - `charset`: bracket/space/comma/period surface sets and POS tags
//! - `positional`: first-occurrence decay scoring
//! - `common_head`: shared line-head detection with its memo cache
//! - this file: the [`FeatureExtractor`] engine and its dispatch
//!
//! # Usage
//!
//! ```
//! use screenplay_feature_extractor::config::FeatureSpec;
//! use screenplay_feature_extractor::features::FeatureExtractor;
//! use screenplay_feature_extractor::schema::FeatureCatalog;
//! use screenplay_feature_extractor::script::Script;
//!
//! let catalog = FeatureCatalog::default();
//! let spec = FeatureSpec::parse("sc_count_of_lines\nln_count_of_words\n", &catalog).spec;
//! let script = Script::from_json_str("[]").unwrap();
//!
//! let extractor = FeatureExtractor::new(&script, &spec);
//! assert_eq!(extractor.extract_all().count(), 0);
//! ```
//!
//! # Sessions and caches
//!
//! One extractor instance is one extraction session over one immutable
//! script. Two memo caches amortize cross-line work: the common-head cache
//! and the lazily computed count of bracket-carrying lines. Both are
//! write-once-per-key behind interior mutability, so extraction methods take
//! `&self` and `extract_all` can be restarted freely; the `RefCell` keeps
//! the type `!Sync`, which matches the one-engine-one-caller design. Run
//! independent extractors for independent scripts.

pub mod charset;
pub mod common_head;
pub mod positional;

use std::cell::{OnceCell, RefCell};

use crate::config::FeatureSpec;
use crate::error::{Error, Result};
use crate::schema::FeatureKind;
use crate::script::{Line, Script};

use self::common_head::HeadCache;

/// One extracted feature vector: spec-length values in spec column order.
pub type FeatureVector = Vec<f64>;

/// The feature extraction engine.
///
/// Borrows a script and a spec for the lifetime of one session. All
/// computation is synchronous, deterministic, and free of I/O; repeated
/// calls for the same line return identical vectors regardless of cache
/// state.
pub struct FeatureExtractor<'a> {
    script: &'a Script,
    spec: &'a FeatureSpec,

    /// Recurring line heads discovered so far.
    head_cache: RefCell<HeadCache>,

    /// Lines containing at least one bracket token, computed on first use.
    bracket_line_count: OnceCell<usize>,
}

impl<'a> FeatureExtractor<'a> {
    /// Create an extraction session over one script and one spec.
    pub fn new(script: &'a Script, spec: &'a FeatureSpec) -> Self {
        Self {
            script,
            spec,
            head_cache: RefCell::new(HeadCache::new()),
            bracket_line_count: OnceCell::new(),
        }
    }

    /// The script this session extracts from.
    pub fn script(&self) -> &Script {
        self.script
    }

    /// The spec fixing column order.
    pub fn spec(&self) -> &FeatureSpec {
        self.spec
    }

    /// Length of every produced vector.
    pub fn feature_count(&self) -> usize {
        self.spec.len()
    }

    /// Extract vectors for every line, lazily, in script order.
    ///
    /// The iterator borrows the session; dropping it and calling again
    /// restarts from the first line (memo caches carry over, results do
    /// not change).
    pub fn extract_all(&self) -> impl Iterator<Item = FeatureVector> + '_ {
        self.script
            .lines()
            .iter()
            .enumerate()
            .map(|(lnum, line)| self.extract_line_inner(lnum, line))
    }

    /// Extract the vector for one line.
    ///
    /// An out-of-range index is a caller contract violation and fails with
    /// [`Error::LineOutOfRange`].
    pub fn extract_line(&self, lnum: usize) -> Result<FeatureVector> {
        let line = self.script.line(lnum).ok_or(Error::LineOutOfRange {
            index: lnum,
            line_count: self.script.line_count(),
        })?;
        Ok(self.extract_line_inner(lnum, line))
    }

    fn extract_line_inner(&self, lnum: usize, line: &Line) -> FeatureVector {
        // The spec weight is carried but not applied; see FeatureSpecEntry.
        self.spec
            .entries()
            .iter()
            .map(|entry| self.compute(entry.kind, lnum, line))
            .collect()
    }

    fn compute(&self, kind: FeatureKind, lnum: usize, line: &Line) -> f64 {
        match kind {
            FeatureKind::ScCountOfLines => self.script.line_count() as f64,

            FeatureKind::ScCountOfLinesWithBracket => self.bracket_line_count() as f64,

            FeatureKind::LnCountOfWords => line.token_count() as f64,

            FeatureKind::LnCountOfBrackets => line
                .tokens()
                .iter()
                .filter(|t| charset::is_bracket(&t.surface))
                .count() as f64,

            FeatureKind::LnLengthOfCommonHead => {
                common_head::common_head_length(self.script, lnum, &mut self.head_cache.borrow_mut())
                    as f64
            }

            FeatureKind::LnFirstOpenBracketPos => {
                positional::first_match_decay(line, &charset::OPEN_BRACKETS)
            }

            FeatureKind::LnFirstCloseBracketPos => {
                positional::first_match_decay(line, &charset::CLOSE_BRACKETS)
            }

            FeatureKind::LnFirstSpacePos => positional::first_match_decay(line, &charset::SPACES),

            FeatureKind::LnFirstCommaPos => positional::first_match_decay(line, &charset::COMMAS),

            FeatureKind::LnFirstPeriodPos => positional::first_match_decay(line, &charset::PERIODS),

            FeatureKind::LnLengthOfIndent => line.indent_width() as f64,

            FeatureKind::LnBeginsWithName => begins_with_name_score(line) as f64,

            FeatureKind::LnEndsWithCloseBracket => match line.last_token() {
                Some(t) if charset::is_close_bracket(&t.surface) => 1.0,
                _ => 0.0,
            },
        }
    }

    fn bracket_line_count(&self) -> usize {
        *self.bracket_line_count.get_or_init(|| {
            self.script
                .lines()
                .iter()
                .filter(|l| l.tokens().iter().any(|t| charset::is_bracket(&t.surface)))
                .count()
        })
    }
}

/// Cumulative noun / proper-noun / person-name score of the first token.
///
/// Scores are {0, 1, 3, 7}: +1 for a noun, +2 more when the noun is proper,
/// +4 more when the proper noun is a person name. Each step requires the
/// previous one; the tag hierarchy is cumulative, so the tiers nest rather
/// than exclude each other. An empty line scores 0.
fn begins_with_name_score(line: &Line) -> u32 {
    let Some(first) = line.first_token() else {
        return 0;
    };
    let pos = &first.part_of_speech;

    let mut score = 0;
    if pos.level(0) == Some(charset::POS_NOUN) {
        score += 1;
        if pos.level(1) == Some(charset::POS_PROPER_NOUN) {
            score += 2;
            if pos.level(2) == Some(charset::POS_PERSON_NAME) {
                score += 4;
            }
        }
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FeatureSpec;
    use crate::schema::FeatureCatalog;
    use crate::script::{Indent, PartOfSpeech, Token};

    fn generic_pos() -> PartOfSpeech {
        PartOfSpeech::parse("記号,一般,*,*")
    }

    fn line_of(surfaces: &[&str]) -> Line {
        Line::from_tokens(
            surfaces
                .iter()
                .map(|s| Token::new(*s, generic_pos()))
                .collect(),
        )
    }

    fn spec_of(source: &str) -> FeatureSpec {
        FeatureSpec::parse(source, &FeatureCatalog::default()).spec
    }

    #[test]
    fn test_vector_shape_follows_spec() {
        let script = Script::from_lines(vec![line_of(&["a"]), line_of(&["b", "c"])]);
        let spec = spec_of("sc_count_of_lines\nln_count_of_words\nln_count_of_brackets\n");
        let extractor = FeatureExtractor::new(&script, &spec);

        let vectors: Vec<_> = extractor.extract_all().collect();
        assert_eq!(vectors.len(), 2);
        assert!(vectors.iter().all(|v| v.len() == 3));
    }

    #[test]
    fn test_script_level_features_constant_across_lines() {
        let script = Script::from_lines(vec![
            line_of(&["「", "a", "」"]),
            line_of(&["b"]),
            line_of(&["『", "c"]),
        ]);
        let spec = spec_of("sc_count_of_lines\nsc_count_of_lines_with_bracket\n");
        let extractor = FeatureExtractor::new(&script, &spec);

        for vector in extractor.extract_all() {
            assert_eq!(vector, vec![3.0, 2.0]);
        }
    }

    #[test]
    fn test_bracket_count_in_line() {
        let script = Script::from_lines(vec![line_of(&["「", "こんにちは", "」"])]);
        let spec = spec_of("ln_count_of_brackets\n");
        let extractor = FeatureExtractor::new(&script, &spec);
        assert_eq!(extractor.extract_line(0).unwrap(), vec![2.0]);
    }

    #[test]
    fn test_indent_length() {
        let script = Script::from_lines(vec![Line::new(
            vec![Token::new("a", generic_pos())],
            Indent::Chars("　　　".to_string()),
        )]);
        let spec = spec_of("ln_length_of_indent\n");
        let extractor = FeatureExtractor::new(&script, &spec);
        assert_eq!(extractor.extract_line(0).unwrap(), vec![3.0]);
    }

    #[test]
    fn test_begins_with_name_tiers() {
        let cases = [
            ("動詞,自立,*,*", 0.0),
            ("名詞,一般,*,*", 1.0),
            ("名詞,固有名詞,組織,*", 3.0),
            ("名詞,固有名詞,人名,名", 7.0),
            // Person-name tag without the proper-noun tier does not count.
            ("名詞,一般,人名,*", 1.0),
        ];
        for (tag, expected) in cases {
            let script = Script::from_lines(vec![Line::from_tokens(vec![Token::new(
                "太郎",
                PartOfSpeech::parse(tag),
            )])]);
            let spec = spec_of("ln_begins_with_name\n");
            let extractor = FeatureExtractor::new(&script, &spec);
            assert_eq!(extractor.extract_line(0).unwrap(), vec![expected], "tag {tag}");
        }
    }

    #[test]
    fn test_begins_with_name_empty_line() {
        let script = Script::from_lines(vec![line_of(&[])]);
        let spec = spec_of("ln_begins_with_name\nln_ends_with_close_bracket\n");
        let extractor = FeatureExtractor::new(&script, &spec);
        assert_eq!(extractor.extract_line(0).unwrap(), vec![0.0, 0.0]);
    }

    #[test]
    fn test_ends_with_close_bracket() {
        let spec = spec_of("ln_ends_with_close_bracket\n");

        let script = Script::from_lines(vec![line_of(&["「", "a", "」"])]);
        let extractor = FeatureExtractor::new(&script, &spec);
        assert_eq!(extractor.extract_line(0).unwrap(), vec![1.0]);

        let script = Script::from_lines(vec![line_of(&["」", "a"])]);
        let extractor = FeatureExtractor::new(&script, &spec);
        assert_eq!(extractor.extract_line(0).unwrap(), vec![0.0]);
    }

    #[test]
    fn test_empty_spec_yields_empty_vectors() {
        let script = Script::from_lines(vec![line_of(&["a"])]);
        let spec = spec_of("");
        let extractor = FeatureExtractor::new(&script, &spec);
        assert_eq!(extractor.extract_line(0).unwrap(), Vec::<f64>::new());
    }

    #[test]
    fn test_empty_script() {
        let script = Script::from_lines(vec![]);
        let spec = spec_of("sc_count_of_lines\nsc_count_of_lines_with_bracket\n");
        let extractor = FeatureExtractor::new(&script, &spec);
        assert_eq!(extractor.extract_all().count(), 0);
        assert!(matches!(
            extractor.extract_line(0),
            Err(Error::LineOutOfRange { index: 0, line_count: 0 })
        ));
    }

    #[test]
    fn test_extract_line_idempotent() {
        let script = Script::from_lines(vec![
            line_of(&["太郎", "「", "おはよう", "」"]),
            line_of(&["太郎", "「", "やあ", "」"]),
        ]);
        let spec = spec_of("ln_length_of_common_head\nln_first_open_bracket_pos\n");
        let extractor = FeatureExtractor::new(&script, &spec);

        let first = extractor.extract_line(0).unwrap();
        let second = extractor.extract_line(0).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_extract_all_restartable() {
        let script = Script::from_lines(vec![line_of(&["a"]), line_of(&["a"])]);
        let spec = spec_of("ln_length_of_common_head\n");
        let extractor = FeatureExtractor::new(&script, &spec);

        let pass1: Vec<_> = extractor.extract_all().collect();
        let pass2: Vec<_> = extractor.extract_all().collect();
        assert_eq!(pass1, pass2);
    }

    #[test]
    fn test_weight_not_applied_to_values() {
        let script = Script::from_lines(vec![line_of(&["a", "b", "c"])]);
        let unweighted = spec_of("ln_count_of_words\n");
        let weighted = spec_of("ln_count_of_words,10\n");

        let plain = FeatureExtractor::new(&script, &unweighted)
            .extract_line(0)
            .unwrap();
        let scaled = FeatureExtractor::new(&script, &weighted)
            .extract_line(0)
            .unwrap();
        assert_eq!(plain, scaled);
    }

    #[test]
    fn test_column_order_matches_spec_order() {
        let script = Script::from_lines(vec![line_of(&["「", "a"])]);
        let forward = spec_of("ln_count_of_words\nln_count_of_brackets\n");
        let reversed = spec_of("ln_count_of_brackets\nln_count_of_words\n");

        let f = FeatureExtractor::new(&script, &forward)
            .extract_line(0)
            .unwrap();
        let r = FeatureExtractor::new(&script, &reversed)
            .extract_line(0)
            .unwrap();
        assert_eq!(f, vec![2.0, 1.0]);
        assert_eq!(r, vec![1.0, 2.0]);
    }
}
