//! Focus and remembered-selection tracking.
//!
//! Toolbar interactions routinely blur the editing surface before the
//! insertion handler runs, so the last known range is retained across blur
//! and used as the fallback when no live selection can be resolved.

use serde::Serialize;

use super::selection::Selection;

/// Last known focus and selection of the editing surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FocusState {
    /// Whether the surface currently holds focus
    pub focused: bool,
    /// Most recent selection observed while focused, kept across blur
    pub last_range: Option<Selection>,
}

impl FocusState {
    pub fn new() -> Self {
        Self::default()
    }

    /// A selection signal with a live range: the surface is focused
    pub fn note_selection(&mut self, range: Selection) {
        self.focused = true;
        self.last_range = Some(range);
    }

    /// A selection signal with no range: focus was lost, range retained
    pub fn note_blur(&mut self) {
        self.focused = false;
    }

    pub fn note_focus(&mut self) {
        self.focused = true;
    }
}
