use crate::constants::{BLOCK_KEYWORDS, MIN_NAME_TOKENS, NAME_STOPLIST};
use crate::pipeline::normalize::normalize_whitespace;
use once_cell::sync::Lazy;
use regex::Regex;

static DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d").expect("valid digit regex"));
static NAME_TOKEN_SEPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[-,\s]+").expect("valid name token regex"));

/// Why a name cell was not taken as a doctor's name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    Empty,
    Placeholder,
    BlockKeyword(&'static str),
    ContainsDigit,
    TooFewTokens,
}

/// Run the name heuristics in order and report the first rule that fails.
pub fn classify_name(name: &str) -> Result<(), Rejection> {
    if name.is_empty() {
        return Err(Rejection::Empty);
    }
    let normalized = normalize_whitespace(name);
    let lower = normalized.to_lowercase();

    if NAME_STOPLIST.contains(&lower.as_str()) {
        return Err(Rejection::Placeholder);
    }
    if let Some(keyword) = BLOCK_KEYWORDS.iter().find(|kw| lower.contains(*kw)) {
        return Err(Rejection::BlockKeyword(*keyword));
    }
    if DIGIT.is_match(&normalized) {
        return Err(Rejection::ContainsDigit);
    }

    let tokens = NAME_TOKEN_SEPARATOR
        .split(&normalized)
        .filter(|token| !token.is_empty())
        .count();
    if tokens < MIN_NAME_TOKENS {
        return Err(Rejection::TooFewTokens);
    }
    Ok(())
}

/// True iff the name cell looks like a person rather than an organization,
/// drug, or document artifact.
pub fn looks_like_doctor(name: &str) -> bool {
    classify_name(name).is_ok()
}
