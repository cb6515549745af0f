//! Constrained expression-editing core.
//!
//! A live token-classification and sanitization pipeline over a rich-text
//! style token document. The core is the single arbiter of document content:
//! raw user mutations are filtered so only well-formed tokens survive, caret
//! and focus are preserved across corrective rewrites, and the property
//! picker and toolbar mutate the document exclusively through the structured
//! insertion operations.
//!
//! # Architecture
//!
//! - [`Token`] / [`Ink`] / [`TokenKind`]: a formatted run and its attribute
//! - [`classify`]: attribute-aware classification (structural text is only
//!   trusted when it carries the base ink)
//! - [`Document`]: ordered token list addressed by flat char offsets
//! - [`sanitize_tokens`]: the cleaning pass behind the sanitization gate
//! - [`FocusState`]: remembered selection across blur
//! - [`Surface`]: seam to the host widget; [`HeadlessSurface`] for tests
//!   and the demo shell
//! - [`ExpressionEditor`]: event handling, effective-selection resolution,
//!   and the three insertion operations
//!
//! # Example
//!
//! ```
//! use exprpad::editor::{ExpressionEditor, HeadlessSurface, Operator};
//!
//! let mut editor = ExpressionEditor::new(HeadlessSurface::new());
//! editor.mount();
//! editor.insert_property("speed");
//! editor.insert_operator(Operator::Plus);
//! editor.insert_property("pressure");
//!
//! // The property's trailing space plus the operator's own padding
//! assert_eq!(editor.plain_text(), "speed  + pressure ");
//! ```

mod classify;
mod document;
mod engine;
mod events;
mod focus;
mod markup;
mod sanitize;
mod selection;
mod surface;
mod token;

// Re-export main types
pub use classify::{classify, is_structural_text};
pub use document::Document;
pub use engine::{ExpressionEditor, Operator};
pub use events::{Origin, SurfaceEvent};
pub use focus::FocusState;
pub use markup::render_markup;
pub use sanitize::sanitize_tokens;
pub use selection::Selection;
pub use surface::{HeadlessSurface, Surface, SurfaceCall};
pub use token::{Ink, Token, TokenKind};
