//! Selection over the flattened character offsets of the document.

use std::ops::Range;

use serde::Serialize;

/// A caret or range selection in flat character offsets.
///
/// `length == 0` denotes a caret. Out-of-range selections are clamped at the
/// document boundary rather than rejected; selection drift is expected after
/// asynchronous rewrites and must self-heal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub index: usize,
    pub length: usize,
}

impl Selection {
    pub const fn new(index: usize, length: usize) -> Self {
        Self { index, length }
    }

    /// Create a collapsed selection (caret)
    pub const fn caret(index: usize) -> Self {
        Self { index, length: 0 }
    }

    pub const fn is_caret(&self) -> bool {
        self.length == 0
    }

    /// Offset one past the last selected character
    pub const fn end(&self) -> usize {
        self.index + self.length
    }

    pub const fn range(&self) -> Range<usize> {
        self.index..self.index + self.length
    }

    /// Clamp into a document of `len` characters so that
    /// `index <= len` and `index + length <= len`.
    pub fn clamp(self, len: usize) -> Self {
        let index = self.index.min(len);
        let length = self.length.min(len - index);
        Self { index, length }
    }
}
