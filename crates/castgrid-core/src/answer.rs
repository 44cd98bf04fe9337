//! Pure answer validation. No state, no side effects.

use crate::catalog::Actor;

/// Normalize text for comparison: trim surrounding whitespace and
/// lowercase. Matching is case-insensitive on purpose; actor names are
/// typed from memory.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// True iff `answer` equals one member of `valid` under normalization.
/// Exact equality only; no fuzzy or partial matching.
pub fn is_valid(valid: &[Actor], answer: &str) -> bool {
    let answer = normalize(answer);
    valid.iter().any(|candidate| normalize(candidate) == answer)
}
