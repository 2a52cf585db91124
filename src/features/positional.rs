//! Positional decay scoring.
//!
//! Several dispatch rules reward a target character appearing early in the
//! line: the first matching token index `x` maps to `exp(-x/4)`, so a match
//! at position 0 scores 1.0 and later matches decay toward 0 while staying
//! positive. Absence scores exactly 0, which keeps "never occurs" separable
//! from "occurs late".

use crate::script::Line;

/// Decay rate divisor for the exponent.
const DECAY_DIVISOR: f64 = 4.0;

/// Decay score of the first token whose surface is in `targets`.
///
/// Returns `exp(-x/4)` for the first matching token index `x`, or `0.0` when
/// no token matches. Earlier matches always score strictly higher than later
/// ones.
pub fn first_match_decay(line: &Line, targets: &[&str]) -> f64 {
    line.tokens()
        .iter()
        .position(|t| targets.contains(&t.surface.as_str()))
        .map(|x| (-(x as f64) / DECAY_DIVISOR).exp())
        .unwrap_or(0.0)
}
