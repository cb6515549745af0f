//! The editing core: single arbiter of what the document may contain.
//!
//! All external stimuli funnel through here. Raw surface mutations go
//! through the sanitization gate, selection signals feed the focus tracker,
//! and the property picker and toolbar collaborators call the three
//! structured insertion operations. Every write the core issues is
//! api-origin and exempt from sanitization.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::classify::classify;
use super::document::Document;
use super::events::{Origin, SurfaceEvent};
use super::focus::FocusState;
use super::sanitize::sanitize_tokens;
use super::selection::Selection;
use super::surface::Surface;
use super::token::{Ink, Token, TokenKind};

/// The arithmetic operators the toolbar offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Minus,
    Plus,
    Divide,
}

impl Operator {
    pub const fn as_str(self) -> &'static str {
        match self {
            Operator::Minus => "-",
            Operator::Plus => "+",
            Operator::Divide => "/",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "-" => Ok(Operator::Minus),
            "+" => Ok(Operator::Plus),
            "/" => Ok(Operator::Divide),
            other => Err(format!("unknown operator: {other:?}")),
        }
    }
}

/// The constrained expression editor.
///
/// Owns the document and the focus tracker; drives the host surface through
/// the [`Surface`] seam. Collaborators depend only on the narrow
/// `insert_property` / `insert_operator` / `insert_function` contract.
#[derive(Debug)]
pub struct ExpressionEditor<S: Surface> {
    document: Document,
    focus: FocusState,
    /// The host surface this core drives
    pub surface: S,
    /// Number of sanitization passes run, for diagnostics and re-entrancy tests
    sanitize_passes: u64,
}

impl<S: Surface> ExpressionEditor<S> {
    pub fn new(surface: S) -> Self {
        Self {
            document: Document::new(),
            focus: FocusState::new(),
            surface,
            sanitize_passes: 0,
        }
    }

    /// Initial setup when the surface mounts: take focus, caret at 0
    pub fn mount(&mut self) {
        self.surface.request_focus();
        self.surface.set_selection(Selection::caret(0));
        self.focus.note_selection(Selection::caret(0));
    }

    // ------------------------------------------------------------------
    // Inbound events
    // ------------------------------------------------------------------

    /// Handle a notification from the host surface
    pub fn handle_event(&mut self, event: SurfaceEvent) {
        match event {
            SurfaceEvent::DocumentChanged { tokens, origin } => {
                self.document = Document::from_tokens(tokens);
                // An edit can shrink the document without a selection signal;
                // the remembered range must not dangle past the end
                if let Some(range) = self.focus.last_range {
                    self.focus.last_range = Some(range.clamp(self.document.len_chars()));
                }
                if origin == Origin::User {
                    self.sanitize();
                }
            }
            SurfaceEvent::SelectionChanged(Some(range)) => {
                let clamped = range.clamp(self.document.len_chars());
                self.focus.note_selection(clamped);
            }
            SurfaceEvent::SelectionChanged(None) => {
                self.focus.note_blur();
            }
            SurfaceEvent::FocusGained => {
                self.focus.note_focus();
                // Restore the remembered range so insertions after a refocus
                // land where the user left off
                if let Some(range) = self.focus.last_range {
                    let clamped = range.clamp(self.document.len_chars());
                    self.surface.set_selection(clamped);
                    self.focus.last_range = Some(clamped);
                }
            }
            SurfaceEvent::FocusLost => {
                self.focus.note_blur();
            }
        }
    }

    /// Run the cleaning pass and, when anything changed, rewrite the surface
    /// content and restore the caret near its previous position.
    fn sanitize(&mut self) {
        self.sanitize_passes += 1;
        let Some(cleaned) = sanitize_tokens(self.document.tokens()) else {
            return;
        };

        // Capture before the rewrite moves it
        let selection = self.surface.live_selection(false);
        self.document = Document::from_tokens(cleaned);
        self.surface.replace_document(self.document.tokens());
        tracing::debug!(
            passes = self.sanitize_passes,
            text = %self.document.plain_text(),
            "sanitized user edit"
        );

        if let Some(selection) = selection {
            let new_len = self.document.len_chars();
            let caret = Selection::caret(selection.index.min(new_len.saturating_sub(1)));
            self.surface.set_selection(caret);
            self.focus.last_range = Some(caret);
        }
    }

    // ------------------------------------------------------------------
    // Structured insertions
    // ------------------------------------------------------------------

    /// Insert a property reference at the effective selection, followed by a
    /// single structural space. Repeated names are not deduplicated.
    pub fn insert_property(&mut self, name: &str) {
        let selection = self.effective_selection();
        let index = selection.index;
        let name_len = name.chars().count();
        tracing::debug!(property = name, index, "inserting property");

        self.document.insert_at(index, Token::property(name));
        self.document.insert_at(index + name_len, Token::structural(" "));
        self.commit(Selection::caret(index + name_len + 1));
    }

    /// Insert an operator padded by one space on each side
    pub fn insert_operator(&mut self, op: Operator) {
        let selection = self.effective_selection();
        let index = selection.index;
        let text = format!(" {op} ");
        let advance = text.chars().count();
        tracing::debug!(operator = %op, index, "inserting operator");

        self.document.insert_at(index, Token::structural(text));
        self.commit(Selection::caret(index + advance));
    }

    /// Insert a function call, wrapping any property tokens in the selection.
    ///
    /// A range selection containing properties is deleted and rebuilt as
    /// `name(prop, prop, …)` with the connective tissue dropped. A range
    /// without properties is left in place and gets an empty `name()` at its
    /// start index; the asymmetry is a fixed contract.
    pub fn insert_function(&mut self, name: &str) {
        let selection = self.effective_selection();

        if selection.is_caret() {
            self.insert_empty_call(name, selection.index);
            return;
        }

        let properties: Vec<String> = self
            .document
            .slice(selection.range())
            .iter()
            .filter(|token| classify(token) == TokenKind::Property)
            .map(|token| token.text.trim().to_string())
            .collect();

        if properties.is_empty() {
            self.insert_empty_call(name, selection.index);
            return;
        }

        tracing::debug!(function = name, count = properties.len(), "wrapping properties");
        self.document.delete_range(selection.range());

        let mut cursor = selection.index;
        self.document
            .insert_at(cursor, Token::structural(format!("{name}(")));
        cursor += name.chars().count() + 1;

        let last = properties.len() - 1;
        for (i, property) in properties.into_iter().enumerate() {
            let len = property.chars().count();
            self.document.insert_at(cursor, Token::property(property));
            cursor += len;
            if i < last {
                self.document.insert_at(cursor, Token::structural(", "));
                cursor += 2;
            }
        }

        self.document.insert_at(cursor, Token::structural(")"));
        self.commit(Selection::caret(cursor + 1));
    }

    /// `name()` with the caret left between the parentheses
    fn insert_empty_call(&mut self, name: &str, index: usize) {
        tracing::debug!(function = name, index, "inserting empty call");
        self.document
            .insert_at(index, Token::structural(format!("{name}()")));
        self.commit(Selection::caret(index + name.chars().count() + 1));
    }

    /// Resolve the selection an insertion should use: a freshly forced live
    /// selection, else the remembered range, else append at end.
    fn effective_selection(&mut self) -> Selection {
        if !self.focus.focused {
            self.surface.request_focus();
            self.focus.note_focus();
        }

        let len = self.document.len_chars();
        if let Some(live) = self.surface.live_selection(true) {
            return live.clamp(len);
        }
        if let Some(remembered) = self.focus.last_range {
            return remembered.clamp(len);
        }
        Selection::caret(len)
    }

    /// Push the mutated document to the surface and settle the caret
    fn commit(&mut self, caret: Selection) {
        self.surface.replace_document(self.document.tokens());
        let caret = caret.clamp(self.document.len_chars());
        self.surface.set_selection(caret);
        self.surface.scroll_selection_into_view();
        self.focus.note_selection(caret);
    }

    // ------------------------------------------------------------------
    // Read-only projections
    // ------------------------------------------------------------------

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Full visible expression text
    pub fn plain_text(&self) -> String {
        self.document.plain_text()
    }

    /// Rendered-markup projection with the given theme's ink colors
    pub fn rendered_markup(&self, theme: &crate::theme::Theme) -> String {
        super::markup::render_markup(&self.document, theme)
    }

    pub fn has_focus(&self) -> bool {
        self.focus.focused
    }

    pub fn focus_state(&self) -> &FocusState {
        &self.focus
    }

    /// Number of sanitization passes run so far
    pub fn sanitize_passes(&self) -> u64 {
        self.sanitize_passes
    }

    /// JSON snapshot of the core's state for diagnostics
    pub fn state_dump(&self) -> serde_json::Value {
        #[derive(Serialize)]
        struct TokenDump<'a> {
            text: &'a str,
            ink: Option<Ink>,
            kind: TokenKind,
        }

        #[derive(Serialize)]
        struct StateDump<'a> {
            text: String,
            len_chars: usize,
            tokens: Vec<TokenDump<'a>>,
            focus: &'a FocusState,
            sanitize_passes: u64,
        }

        let dump = StateDump {
            text: self.document.plain_text(),
            len_chars: self.document.len_chars(),
            tokens: self
                .document
                .tokens()
                .iter()
                .map(|token| TokenDump {
                    text: &token.text,
                    ink: token.ink,
                    kind: classify(token),
                })
                .collect(),
            focus: &self.focus,
            sanitize_passes: self.sanitize_passes,
        };
        serde_json::to_value(&dump).unwrap_or(serde_json::Value::Null)
    }
}
