//! Token types for the constrained expression document.

use serde::Serialize;

/// Color attribute carried by a formatted run.
///
/// Classification is attribute-aware: only runs the core itself authored
/// carry an ink, so a user typing a literal `+` produces an un-inked run
/// that is never trusted as structural.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Ink {
    /// Accent color, marks a property reference
    Accent,
    /// Base ink color, marks core-authored structural text
    Base,
}

/// Derived classification of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TokenKind {
    /// A single property reference inserted by the property picker
    Property,
    /// Operator, parenthesis, separator, or core-generated whitespace
    Structural,
    /// Anything else, typically user-typed text subject to filtering
    Free,
}

/// One formatted run of text plus its color attribute.
///
/// The kind is never stored; it is derived from the ink and the text by
/// [`classify`](super::classify::classify).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub text: String,
    pub ink: Option<Ink>,
}

impl Token {
    /// Create an accent-inked property token
    pub fn property(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ink: Some(Ink::Accent),
        }
    }

    /// Create a base-inked structural token
    pub fn structural(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ink: Some(Ink::Base),
        }
    }

    /// Create an un-inked free token (user-typed text)
    pub fn free(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ink: None,
        }
    }

    /// Length in characters (offsets are char-based throughout)
    pub fn len_chars(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Copy of this token carrying only the given character range of its text
    pub fn clipped(&self, start: usize, end: usize) -> Self {
        let text: String = self
            .text
            .chars()
            .skip(start)
            .take(end.saturating_sub(start))
            .collect();
        Self {
            text,
            ink: self.ink,
        }
    }
}
