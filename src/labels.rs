//! Line-role label catalog and class-tag splitting.
//!
//! Training scripts carry an optional leading tag on each raw text line,
//! `CLASS,body...`, naming the line's structural role. This module provides
//! the closed catalog of roles and the splitter that separates the tag from
//! the body before tokenization.
//!
//! The extraction engine itself is label-agnostic; the catalog matters only
//! because its ordering fixes the class-index mapping used by the downstream
//! trainer's softmax output. Reordering the catalog changes trained models.
//!
//! # Example
//!
//! ```
//! use screenplay_feature_extractor::labels::{split_class_tag, LineClass};
//!
//! let (class, body) = split_class_tag("DIALOGUE,「おはよう」");
//! assert_eq!(class, Some(LineClass::Dialogue));
//! assert_eq!(body, "「おはよう」");
//!
//! // Unknown uppercase prefixes are body text, not tags.
//! let (class, body) = split_class_tag("ABC,def");
//! assert_eq!(class, None);
//! assert_eq!(body, "ABC,def");
//! ```

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Structural role of one screenplay line.
///
/// Closed, ordered catalog; [`LineClass::class_index`] is the position in
/// this ordering and is the integer class fed to the trainer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineClass {
    /// Work title.
    Title,
    /// Author credit.
    Author,
    /// Heading of the character list.
    CharsHeadline,
    /// Character list entry.
    Character,
    /// Top-level heading.
    H1,
    /// Second-level heading.
    H2,
    /// Third-level heading.
    H3,
    /// Stage direction.
    Direction,
    /// Spoken dialogue.
    Dialogue,
    /// End-of-script marker.
    EndMark,
    /// Comment line.
    Comment,
    /// Empty line.
    Empty,
    /// Continuation of a character list entry.
    CharacterContinued,
    /// Continuation of a stage direction.
    DirectionContinued,
    /// Continuation of dialogue.
    DialogueContinued,
    /// Continuation of a comment.
    CommentContinued,
}

impl LineClass {
    /// All classes in catalog order.
    pub fn all() -> &'static [LineClass] {
        &[
            LineClass::Title,
            LineClass::Author,
            LineClass::CharsHeadline,
            LineClass::Character,
            LineClass::H1,
            LineClass::H2,
            LineClass::H3,
            LineClass::Direction,
            LineClass::Dialogue,
            LineClass::EndMark,
            LineClass::Comment,
            LineClass::Empty,
            LineClass::CharacterContinued,
            LineClass::DirectionContinued,
            LineClass::DialogueContinued,
            LineClass::CommentContinued,
        ]
    }

    /// Tag string as written in training data.
    pub fn name(self) -> &'static str {
        match self {
            LineClass::Title => "TITLE",
            LineClass::Author => "AUTHOR",
            LineClass::CharsHeadline => "CHARSHEADLINE",
            LineClass::Character => "CHARACTER",
            LineClass::H1 => "H1",
            LineClass::H2 => "H2",
            LineClass::H3 => "H3",
            LineClass::Direction => "DIRECTION",
            LineClass::Dialogue => "DIALOGUE",
            LineClass::EndMark => "ENDMARK",
            LineClass::Comment => "COMMENT",
            LineClass::Empty => "EMPTY",
            LineClass::CharacterContinued => "CHARACTER_CONTINUED",
            LineClass::DirectionContinued => "DIRECTION_CONTINUED",
            LineClass::DialogueContinued => "DIALOGUE_CONTINUED",
            LineClass::CommentContinued => "COMMENT_CONTINUED",
        }
    }

    /// Look up a class by its tag string.
    pub fn from_name(name: &str) -> Option<LineClass> {
        LineClass::all().iter().copied().find(|c| c.name() == name)
    }

    /// Position in catalog order; the trainer's integer class.
    pub fn class_index(self) -> usize {
        LineClass::all()
            .iter()
            .position(|c| *c == self)
            .unwrap_or(usize::MAX)
    }
}

impl std::fmt::Display for LineClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

static CLASS_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Z0-9_]+),(.*)").expect("valid regex"));

/// Split an optional leading class tag from a raw text line.
///
/// Returns the recognized class (if the prefix matches a catalog tag) and
/// the remaining body. A prefix that looks tag-shaped but is not in the
/// catalog is left in place: the whole input is the body.
pub fn split_class_tag(raw: &str) -> (Option<LineClass>, &str) {
    if let Some(caps) = CLASS_TAG.captures(raw) {
        let tag = caps.get(1).map(|m| m.as_str()).unwrap_or("");
        if let Some(class) = LineClass::from_name(tag) {
            let body = caps.get(2).map(|m| m.as_str()).unwrap_or("");
            return (Some(class), body);
        }
    }
    (None, raw)
}
