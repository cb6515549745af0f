//! Token classification for the constrained expression document.
//!
//! A token is structural only when it carries the base ink *and* its text
//! matches the structural pattern. Text alone is never trusted: a user can
//! type a literal `+`, and that run arrives without an ink attribute.

use std::sync::OnceLock;

use regex::Regex;

use super::token::{Ink, Token, TokenKind};

/// Texts the core itself authors: an optionally padded leading operator,
/// pure whitespace, a capitalized function name with opening parenthesis,
/// a lone closing parenthesis, or a padded argument separator.
const STRUCTURAL_PATTERN: &str = r"^(\s*[+\-/]|\s+|\s*[A-Z][a-z]+\s*\(|\s*\)|\s*,\s*)$";

fn structural_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(STRUCTURAL_PATTERN).expect("structural pattern is valid"))
}

/// Check whether a text matches the structural contract, ignoring ink
pub fn is_structural_text(text: &str) -> bool {
    structural_regex().is_match(text)
}

/// Classify a token from its ink attribute and text.
///
/// Tokens with neither a recognized ink nor structural base-ink text are
/// free text, including base-ink runs of plain alphabetic characters.
pub fn classify(token: &Token) -> TokenKind {
    match token.ink {
        Some(Ink::Accent) => TokenKind::Property,
        Some(Ink::Base) if is_structural_text(&token.text) => TokenKind::Structural,
        _ => TokenKind::Free,
    }
}
