//! Sanitization pipeline tests: alphabetic exclusion, caret restoration,
//! and re-entrancy protection.

mod common;

use common::{blur, mounted_editor, seed_document, select, type_text};
use exprpad::editor::{Origin, Selection, SurfaceCall, SurfaceEvent, Token, TokenKind};

#[test]
fn test_typed_letters_are_stripped() {
    let mut editor = mounted_editor();
    type_text(&mut editor, "abc");

    assert_eq!(editor.plain_text(), "");
    assert_eq!(editor.sanitize_passes(), 1);
    // The corrective rewrite reached the surface too
    assert_eq!(editor.surface.document().plain_text(), "");
}

#[test]
fn test_digits_and_punctuation_survive_untouched() {
    let mut editor = mounted_editor();
    editor.surface.clear_calls();
    type_text(&mut editor, "12 + (3.5)");

    assert_eq!(editor.plain_text(), "12 + (3.5)");
    // No-op pass: no corrective rewrite was issued
    assert!(!editor
        .surface
        .calls()
        .iter()
        .any(|call| matches!(call, SurfaceCall::ReplaceDocument(_))));
}

#[test]
fn test_mixed_typing_keeps_non_alpha_and_restores_caret() {
    let mut editor = mounted_editor();
    seed_document(
        &mut editor,
        vec![Token::property("speed"), Token::structural(" ")],
    );
    select(&mut editor, 6, 0);
    type_text(&mut editor, "4abc2");

    assert_eq!(editor.plain_text(), "speed 42");
    // Caret restores at min(original, new length - 1): drift by one is the
    // accepted contract, not exact fidelity
    assert_eq!(
        editor.focus_state().last_range,
        Some(Selection::caret(7))
    );
    assert_eq!(editor.surface.selection(), Some(Selection::caret(7)));
}

#[test]
fn test_inked_tokens_are_never_mutated() {
    let mut editor = mounted_editor();
    editor.handle_event(SurfaceEvent::DocumentChanged {
        tokens: vec![
            Token::property("speed"),
            Token::structural("Avg("),
            Token::free("letters"),
        ],
        origin: Origin::User,
    });

    let tokens = editor.document().tokens();
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].text, "speed");
    assert_eq!(tokens[1].text, "Avg(");
}

#[test]
fn test_base_ink_free_text_is_filtered() {
    // Base ink does not shield text that fails the structural pattern
    let mut editor = mounted_editor();
    editor.handle_event(SurfaceEvent::DocumentChanged {
        tokens: vec![Token::structural("impostor")],
        origin: Origin::User,
    });
    assert_eq!(editor.plain_text(), "");
}

#[test]
fn test_no_reentrant_sanitization() {
    let mut editor = mounted_editor();
    type_text(&mut editor, "abc123");
    assert_eq!(editor.sanitize_passes(), 1);

    // The surface reports the corrective rewrite back, tagged as api
    let echo = editor.surface.api_echo();
    editor.handle_event(echo);
    assert_eq!(editor.sanitize_passes(), 1);
    assert_eq!(editor.plain_text(), "123");
}

#[test]
fn test_settled_document_sanitizes_to_itself() {
    let mut editor = mounted_editor();
    type_text(&mut editor, "1abc2");
    let settled = editor.plain_text();

    editor.surface.clear_calls();
    let tokens = editor.document().tokens().to_vec();
    editor.handle_event(SurfaceEvent::DocumentChanged {
        tokens,
        origin: Origin::User,
    });

    assert_eq!(editor.plain_text(), settled);
    assert!(!editor
        .surface
        .calls()
        .iter()
        .any(|call| matches!(call, SurfaceCall::ReplaceDocument(_))));
}

#[test]
fn test_no_alpha_outside_inked_tokens_after_settling() {
    let mut editor = mounted_editor();
    editor.insert_property("speed");
    select(&mut editor, 3, 0);
    type_text(&mut editor, "paste with words 99");
    blur(&mut editor);
    type_text(&mut editor, "more");

    for token in editor.document().tokens() {
        if exprpad::editor::classify(token) == TokenKind::Free {
            assert!(
                !token.text.chars().any(|c| c.is_ascii_alphabetic()),
                "free token {:?} kept alphabetic text",
                token.text
            );
        }
    }
}

#[test]
fn test_selection_signal_is_clamped() {
    let mut editor = mounted_editor();
    seed_document(&mut editor, vec![Token::free("123456")]);
    editor.handle_event(SurfaceEvent::SelectionChanged(Some(Selection::new(50, 10))));
    assert_eq!(editor.focus_state().last_range, Some(Selection::caret(6)));
}
