//! Script data model.
//!
//! A screenplay arrives here already split into lines and run through an
//! external morphological tokenizer. The types in this module mirror the
//! tokenizer's JSON output one-to-one:
//!
//! ```text
//! [
//!   {
//!     "indent_chars": "　　",
//!     "tokenized_words": [
//!       { "surface": "こんにちは", "part_of_speech": "感動詞,*,*,*", ... }
//!     ]
//!   }
//! ]
//! ```
//!
//! Everything is immutable once constructed; the extraction engine borrows a
//! [`Script`] for the lifetime of one pass and never mutates it. Line index
//! position within a script is a stable identity used by cross-line features.

use serde::{Deserialize, Serialize};

/// Hierarchical part-of-speech tag, most general category first.
///
/// The external tokenizer emits tags as a comma-joined string such as
/// `"名詞,固有名詞,人名,一般"`; this type keeps the categories as an ordered
/// sequence so individual levels can be inspected, and bridges back to the
/// wire form for (de)serialization.
///
/// Equality and hashing cover the full sequence, which makes the type usable
/// directly inside common-head cache keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct PartOfSpeech(Vec<String>);

impl PartOfSpeech {
    /// Build a tag from its ordered categories.
    pub fn new<I, S>(levels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(levels.into_iter().map(Into::into).collect())
    }

    /// Parse the tokenizer's comma-joined form.
    pub fn parse(tag: &str) -> Self {
        Self(tag.split(',').map(str::to_string).collect())
    }

    /// Category at the given level, if present.
    pub fn level(&self, n: usize) -> Option<&str> {
        self.0.get(n).map(String::as_str)
    }

    /// All categories, most general first.
    pub fn levels(&self) -> &[String] {
        &self.0
    }
}

impl From<String> for PartOfSpeech {
    fn from(tag: String) -> Self {
        Self::parse(&tag)
    }
}

impl From<PartOfSpeech> for String {
    fn from(pos: PartOfSpeech) -> Self {
        pos.0.join(",")
    }
}

impl std::fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.join(","))
    }
}

/// One morpheme produced by the external tokenizer.
///
/// The engine consumes only `surface` and `part_of_speech`; the remaining
/// fields are carried through unchanged so a script can round-trip the
/// tokenizer's records. Field names on the wire follow the tokenizer output
/// (`infl_type`, `infl_form`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// Literal text form.
    pub surface: String,

    /// Hierarchical grammatical tag.
    pub part_of_speech: PartOfSpeech,

    /// Inflection type (`*` when not applicable).
    #[serde(rename = "infl_type", default)]
    pub inflection_type: String,

    /// Inflection form (`*` when not applicable).
    #[serde(rename = "infl_form", default)]
    pub inflection_form: String,

    /// Dictionary base form.
    #[serde(default)]
    pub base_form: String,

    /// Reading in katakana.
    #[serde(default)]
    pub reading: String,

    /// Phonetic rendering.
    #[serde(default)]
    pub phonetic: String,
}

impl Token {
    /// Build a token from surface and tag, leaving the carried fields empty.
    pub fn new(surface: impl Into<String>, part_of_speech: PartOfSpeech) -> Self {
        Self {
            surface: surface.into(),
            part_of_speech,
            inflection_type: String::new(),
            inflection_form: String::new(),
            base_form: String::new(),
            reading: String::new(),
            phonetic: String::new(),
        }
    }
}

/// Leading whitespace of a line.
///
/// Some producers keep the literal whitespace substring, others only its
/// character count; both occur in stored tokenized scripts, and the engine
/// needs nothing beyond the width. The untagged representation accepts
/// either JSON form (string or number).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Indent {
    /// The literal leading-whitespace substring.
    Chars(String),
    /// A pre-computed character count.
    Width(usize),
}

impl Indent {
    /// Indent length in characters.
    pub fn width(&self) -> usize {
        match self {
            Indent::Chars(s) => s.chars().count(),
            Indent::Width(n) => *n,
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Indent::Chars(String::new())
    }
}

/// One tokenized screenplay line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    /// Leading whitespace, kept separate from the tokenized body.
    #[serde(rename = "indent_chars", default)]
    indent: Indent,

    /// Tokens in line order.
    #[serde(rename = "tokenized_words")]
    tokens: Vec<Token>,
}

impl Line {
    /// Build a line from tokens and an indent.
    pub fn new(tokens: Vec<Token>, indent: Indent) -> Self {
        Self { indent, tokens }
    }

    /// Build a line with no indentation.
    pub fn from_tokens(tokens: Vec<Token>) -> Self {
        Self::new(tokens, Indent::default())
    }

    /// Tokens in line order.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Number of tokens.
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the line has no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// First token, if any.
    pub fn first_token(&self) -> Option<&Token> {
        self.tokens.first()
    }

    /// Last token, if any.
    pub fn last_token(&self) -> Option<&Token> {
        self.tokens.last()
    }

    /// Indent length in characters.
    pub fn indent_width(&self) -> usize {
        self.indent.width()
    }
}

/// A full screenplay: ordered tokenized lines.
///
/// Immutable for the lifetime of one extraction pass. A line's index within
/// the script is its line number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Script {
    lines: Vec<Line>,
}

impl Script {
    /// Build a script from lines.
    pub fn from_lines(lines: Vec<Line>) -> Self {
        Self { lines }
    }

    /// Deserialize a script from the tokenizer's JSON array.
    pub fn from_json_str(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Deserialize a script from a reader producing the tokenizer's JSON.
    pub fn from_json_reader<R: std::io::Read>(reader: R) -> crate::Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Number of lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Whether the script has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Line at the given index, if in range.
    pub fn line(&self, index: usize) -> Option<&Line> {
        self.lines.get(index)
    }

    /// All lines in order.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }
}
