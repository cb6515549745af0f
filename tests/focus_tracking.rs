//! Focus and selection tracking tests: the remembered-range fallback chain
//! and focus restoration.

mod common;

use common::{blur, mounted_editor, seed_document, select};
use exprpad::editor::{Operator, Selection, SurfaceCall, SurfaceEvent, Token};

#[test]
fn test_mount_takes_focus_with_caret_at_start() {
    let editor = mounted_editor();
    assert!(editor.has_focus());
    assert_eq!(editor.focus_state().last_range, Some(Selection::caret(0)));
    assert!(editor.surface.calls().contains(&SurfaceCall::RequestFocus));
    assert!(editor
        .surface
        .calls()
        .contains(&SurfaceCall::SetSelection(Selection::caret(0))));
}

#[test]
fn test_selection_signal_updates_tracker() {
    let mut editor = mounted_editor();
    seed_document(&mut editor, vec![Token::free("123456")]);
    select(&mut editor, 2, 3);

    assert!(editor.has_focus());
    assert_eq!(editor.focus_state().last_range, Some(Selection::new(2, 3)));
}

#[test]
fn test_null_selection_blurs_but_remembers() {
    let mut editor = mounted_editor();
    seed_document(&mut editor, vec![Token::free("123456")]);
    select(&mut editor, 4, 0);
    blur(&mut editor);

    assert!(!editor.has_focus());
    assert_eq!(editor.focus_state().last_range, Some(Selection::caret(4)));
}

#[test]
fn test_focus_gained_restores_remembered_selection() {
    let mut editor = mounted_editor();
    seed_document(&mut editor, vec![Token::free("123456")]);
    select(&mut editor, 4, 2);
    blur(&mut editor);

    editor.surface.clear_calls();
    let event = editor.surface.user_focuses();
    editor.handle_event(event);

    assert!(editor.has_focus());
    assert!(editor
        .surface
        .calls()
        .contains(&SurfaceCall::SetSelection(Selection::new(4, 2))));
    assert_eq!(editor.surface.selection(), Some(Selection::new(4, 2)));
}

#[test]
fn test_focus_lost_event_blurs_tracker() {
    let mut editor = mounted_editor();
    editor.handle_event(SurfaceEvent::FocusLost);
    assert!(!editor.has_focus());
}

#[test]
fn test_live_selection_wins_over_remembered_range() {
    let mut editor = mounted_editor();
    seed_document(&mut editor, vec![Token::free("123456")]);
    select(&mut editor, 1, 0);

    // The surface moves its selection without the core hearing about it
    editor.surface.user_selects(Selection::caret(5));
    editor.insert_operator(Operator::Plus);

    assert_eq!(editor.plain_text(), "12345 + 6");
}

#[test]
fn test_remembered_range_clamped_after_shrink() {
    let mut editor = mounted_editor();
    seed_document(&mut editor, vec![Token::free("123456")]);
    select(&mut editor, 6, 0);
    blur(&mut editor);

    // The document shrinks while unfocused
    seed_document(&mut editor, vec![Token::free("12")]);
    editor.insert_operator(Operator::Plus);

    assert_eq!(editor.plain_text(), "12 + ");
}
