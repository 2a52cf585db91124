//! Common line-head detection.
//!
//! Screenplays repeat templated line openings, character-name prefixes
//! before dialogue being the classic case. The `ln_length_of_common_head`
//! feature measures, for one line, how many leading tokens it shares with at
//! least one other line from that line onward, comparing tokens pairwise by
//! surface AND part-of-speech.
//!
//! Recomputing that naively rescans the script for every prefix of every
//! line. Instead, every head found to recur (count > 1) is memoized in an
//! append-only cache keyed by the canonical head sequence; lines sharing a
//! long opening then grow through cache hits without touching the script.
//! Heads that occur only once are never cached, so cache membership itself
//! is the "recurs" signal. Worst case remains O(lines² · tokens) when
//! little is shared.

use ahash::AHashMap;

use crate::script::{Line, PartOfSpeech, Script};

/// One element of a head: the token fields that participate in matching.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HeadToken {
    /// Literal text form.
    pub surface: String,

    /// Hierarchical grammatical tag.
    pub part_of_speech: PartOfSpeech,
}

impl HeadToken {
    fn of(token: &crate::script::Token) -> Self {
        Self {
            surface: token.surface.clone(),
            part_of_speech: token.part_of_speech.clone(),
        }
    }
}

/// Append-only memo of recurring heads.
///
/// A head is present iff at least two lines (from the line that discovered
/// it onward) share it. Entries are written once and never evicted or
/// invalidated; the backing script is immutable for the session.
#[derive(Debug, Default)]
pub struct HeadCache {
    map: AHashMap<Vec<HeadToken>, usize>,
}

impl HeadCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored recurrence count for a head, if the head recurs.
    pub fn count(&self, head: &[HeadToken]) -> Option<usize> {
        self.map.get(head).copied()
    }

    /// Number of cached heads.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    fn insert(&mut self, head: Vec<HeadToken>, count: usize) {
        self.map.insert(head, count);
    }
}

/// Whether `line` begins with exactly the tokens of `head`.
fn line_has_head(line: &Line, head: &[HeadToken]) -> bool {
    if line.token_count() < head.len() {
        return false;
    }
    head.iter()
        .zip(line.tokens())
        .all(|(h, t)| h.surface == t.surface && h.part_of_speech == t.part_of_speech)
}

/// Count lines from index `from` to the end (inclusive of the queried line)
/// that begin with `head`.
fn count_lines_with_head(script: &Script, head: &[HeadToken], from: usize) -> usize {
    script.lines()[from..]
        .iter()
        .filter(|line| line_has_head(line, head))
        .count()
}

/// Length in tokens of the longest head of line `lnum` shared with at least
/// one other line from `lnum` onward.
///
/// Grows the head one token at a time. A cache hit counts as a completed
/// step without rescanning; a miss scans `lnum..` and caches the head only
/// when it recurs. The first non-recurring head stops growth.
pub fn common_head_length(script: &Script, lnum: usize, cache: &mut HeadCache) -> usize {
    let line = &script.lines()[lnum];
    let mut head: Vec<HeadToken> = Vec::with_capacity(line.token_count());
    let mut length = 0;

    for token in line.tokens() {
        head.push(HeadToken::of(token));

        if cache.count(&head).is_some() {
            length += 1;
            continue;
        }

        let count = count_lines_with_head(script, &head, lnum);
        if count > 1 {
            cache.insert(head.clone(), count);
            length += 1;
        } else {
            break;
        }
    }

    length
}
