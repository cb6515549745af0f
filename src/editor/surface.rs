//! The seam between the editing core and the host surface it drives.
//!
//! The core never talks to a concrete widget: everything it needs from the
//! host goes through [`Surface`]. [`HeadlessSurface`] is the in-memory
//! implementation used by the demo shell and the test suites; it mirrors the
//! document, plays the widget's focus/selection behavior, and records every
//! outbound call.

use super::document::Document;
use super::events::{Origin, SurfaceEvent};
use super::selection::Selection;
use super::token::Token;

/// Outbound interface the host surface implements for the core.
pub trait Surface {
    /// Current selection as the surface reports it. With `force_focus` the
    /// surface should focus itself first and report whatever selection it
    /// can, mirroring a rich-text widget's forced selection query.
    fn live_selection(&mut self, force_focus: bool) -> Option<Selection>;

    /// Replace the entire rendered content with this token list.
    /// Always a programmatic write; the surface must report it back with
    /// [`Origin::Api`], never as user input.
    fn replace_document(&mut self, tokens: &[Token]);

    /// Move the caret or selection
    fn set_selection(&mut self, selection: Selection);

    /// Give the surface keyboard focus
    fn request_focus(&mut self);

    /// Bring the caret into the visible area
    fn scroll_selection_into_view(&mut self);
}

/// One recorded outbound call, for assertions and demo diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCall {
    ReplaceDocument(Vec<Token>),
    SetSelection(Selection),
    RequestFocus,
    ScrollSelectionIntoView,
}

/// In-memory surface standing in for the rich-text widget.
///
/// Behaves like the real thing where it matters: blurring drops the live
/// selection (the remembered range lives in the core, not here), forcing a
/// selection query focuses the surface, and programmatic writes are mirrored
/// so user edits can be simulated on top of them.
#[derive(Debug, Clone, Default)]
pub struct HeadlessSurface {
    focused: bool,
    selection: Option<Selection>,
    document: Document,
    calls: Vec<SurfaceCall>,
}

impl HeadlessSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }

    /// Outbound calls recorded since the last [`clear_calls`](Self::clear_calls)
    pub fn calls(&self) -> &[SurfaceCall] {
        &self.calls
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    // ------------------------------------------------------------------
    // Host-side simulation: these produce the events a real widget would
    // raise, for the demo shell and tests to feed into the core.
    // ------------------------------------------------------------------

    /// Simulate the user typing (or pasting) text at the current selection.
    /// A range selection is replaced, as a real surface would.
    pub fn user_types(&mut self, text: &str) -> SurfaceEvent {
        self.focused = true;
        let caret = match self.selection {
            Some(sel) => {
                if !sel.is_caret() {
                    self.document.delete_range(sel.range());
                }
                sel.index
            }
            None => self.document.len_chars(),
        };
        self.document.insert_at(caret, Token::free(text));
        self.selection = Some(Selection::caret(caret + text.chars().count()));
        SurfaceEvent::DocumentChanged {
            tokens: self.document.tokens().to_vec(),
            origin: Origin::User,
        }
    }

    /// Simulate the user moving the selection
    pub fn user_selects(&mut self, selection: Selection) -> SurfaceEvent {
        self.focused = true;
        let clamped = selection.clamp(self.document.len_chars());
        self.selection = Some(clamped);
        SurfaceEvent::SelectionChanged(Some(clamped))
    }

    /// Simulate focus moving away: the live selection is gone
    pub fn user_blurs(&mut self) -> SurfaceEvent {
        self.focused = false;
        self.selection = None;
        SurfaceEvent::SelectionChanged(None)
    }

    /// Simulate focus returning to the surface
    pub fn user_focuses(&mut self) -> SurfaceEvent {
        self.focused = true;
        SurfaceEvent::FocusGained
    }

    /// The change notification a programmatic write raises: same content,
    /// tagged as api-sourced
    pub fn api_echo(&self) -> SurfaceEvent {
        SurfaceEvent::DocumentChanged {
            tokens: self.document.tokens().to_vec(),
            origin: Origin::Api,
        }
    }
}

impl Surface for HeadlessSurface {
    fn live_selection(&mut self, force_focus: bool) -> Option<Selection> {
        if force_focus {
            self.focused = true;
        }
        if self.focused {
            self.selection
        } else {
            None
        }
    }

    fn replace_document(&mut self, tokens: &[Token]) {
        self.document = Document::from_tokens(tokens.to_vec());
        if let Some(sel) = self.selection {
            self.selection = Some(sel.clamp(self.document.len_chars()));
        }
        self.calls.push(SurfaceCall::ReplaceDocument(tokens.to_vec()));
    }

    fn set_selection(&mut self, selection: Selection) {
        self.focused = true;
        self.selection = Some(selection.clamp(self.document.len_chars()));
        self.calls.push(SurfaceCall::SetSelection(selection));
    }

    fn request_focus(&mut self) {
        self.focused = true;
        self.calls.push(SurfaceCall::RequestFocus);
    }

    fn scroll_selection_into_view(&mut self) {
        self.calls.push(SurfaceCall::ScrollSelectionIntoView);
    }
}
