//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use exprpad::editor::{ExpressionEditor, HeadlessSurface, Selection, Surface, Token};

/// Editor mounted on a fresh headless surface
pub fn mounted_editor() -> ExpressionEditor<HeadlessSurface> {
    let mut editor = ExpressionEditor::new(HeadlessSurface::new());
    editor.mount();
    editor
}

/// Put a known token list into both the surface and the core, as if the
/// core had authored it earlier, and drop the recorded calls.
pub fn seed_document(editor: &mut ExpressionEditor<HeadlessSurface>, tokens: Vec<Token>) {
    editor.surface.replace_document(&tokens);
    let echo = editor.surface.api_echo();
    editor.handle_event(echo);
    editor.surface.clear_calls();
}

/// Move the surface selection and let the core observe it
pub fn select(editor: &mut ExpressionEditor<HeadlessSurface>, index: usize, length: usize) {
    let event = editor.surface.user_selects(Selection::new(index, length));
    editor.handle_event(event);
}

/// Simulate the user typing text at the current surface selection
pub fn type_text(editor: &mut ExpressionEditor<HeadlessSurface>, text: &str) {
    let event = editor.surface.user_types(text);
    editor.handle_event(event);
}

/// Simulate focus leaving the surface
pub fn blur(editor: &mut ExpressionEditor<HeadlessSurface>) {
    let event = editor.surface.user_blurs();
    editor.handle_event(event);
}
