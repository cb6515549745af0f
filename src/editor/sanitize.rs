//! Sanitization pass restoring the no-alphabetic-free-text invariant.
//!
//! The surface cannot fully prevent paste, IME input, or drag-drop, so every
//! user-sourced mutation is re-derived through this pass. It filters rather
//! than validates: disallowed text is silently removed, never rejected.

use std::borrow::Cow;
use std::sync::OnceLock;

use regex::Regex;

use super::classify::classify;
use super::token::{Token, TokenKind};

fn alpha_runs() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new("[A-Za-z]+").expect("alpha pattern is valid"))
}

/// Strip all alphabetic runs from a text, leaving digits, punctuation, and
/// whitespace intact. Returns `None` when nothing was removed.
fn strip_alphabetic(text: &str) -> Option<String> {
    match alpha_runs().replace_all(text, "") {
        Cow::Borrowed(_) => None,
        Cow::Owned(stripped) => Some(stripped),
    }
}

/// Clean a token list: free tokens lose their alphabetic runs, and tokens
/// emptied by stripping are dropped. Property and structural tokens are
/// never touched.
///
/// Returns `None` when no token changed, so callers can skip the corrective
/// rewrite entirely and avoid re-entrant change notifications.
pub fn sanitize_tokens(tokens: &[Token]) -> Option<Vec<Token>> {
    let mut changed = false;
    let cleaned: Vec<Token> = tokens
        .iter()
        .map(|token| {
            if classify(token) == TokenKind::Free {
                if let Some(stripped) = strip_alphabetic(&token.text) {
                    changed = true;
                    return Token {
                        text: stripped,
                        ink: token.ink,
                    };
                }
            }
            token.clone()
        })
        .filter(|token| !token.is_empty())
        .collect();

    changed.then_some(cleaned)
}
