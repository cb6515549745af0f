//! Inbound events from the host surface.

use super::selection::Selection;
use super::token::Token;

/// Who originated a document mutation.
///
/// The sanitizer is gated on `User`; the core's own corrective rewrites and
/// structured insertions arrive back as `Api` and must never re-enter it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// Direct user input: keystroke, paste, IME, drag-drop
    User,
    /// A programmatic write issued by this core
    Api,
}

/// Notification from the host surface to the editing core.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceEvent {
    /// The document content changed; carries the full new token list
    DocumentChanged {
        tokens: Vec<Token>,
        origin: Origin,
    },
    /// The selection changed; `None` means the surface lost its selection
    /// (focus moved away)
    SelectionChanged(Option<Selection>),
    /// The surface gained focus
    FocusGained,
    /// The surface lost focus
    FocusLost,
}

impl SurfaceEvent {
    /// Check if this event can trigger a sanitization pass
    pub fn is_user_edit(&self) -> bool {
        matches!(
            self,
            SurfaceEvent::DocumentChanged {
                origin: Origin::User,
                ..
            }
        )
    }
}
