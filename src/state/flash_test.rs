use super::*;

// =============================================================
// push
// =============================================================

#[test]
fn push_appends_in_order_with_distinct_ids() {
    let mut state = FlashState::default();
    let first = state.push("Komentar berhasil ditambahkan!".to_owned(), FlashLevel::Success);
    let second = state.push("Terjadi kesalahan".to_owned(), FlashLevel::Error);

    assert_ne!(first, second);
    assert_eq!(state.messages.len(), 2);
    assert_eq!(state.messages[0].id, first);
    assert_eq!(state.messages[1].id, second);
    assert!(!state.messages[0].leaving);
}

#[test]
fn push_ids_are_not_reused_after_removal() {
    let mut state = FlashState::default();
    let first = state.push("a".to_owned(), FlashLevel::Info);
    assert!(state.remove(first));
    let second = state.push("b".to_owned(), FlashLevel::Info);
    assert_ne!(first, second);
}

// =============================================================
// begin_dismiss
// =============================================================

#[test]
fn begin_dismiss_marks_message_leaving() {
    let mut state = FlashState::default();
    let id = state.push("a".to_owned(), FlashLevel::Info);

    assert!(state.begin_dismiss(id));
    assert!(state.messages[0].leaving);
}

#[test]
fn begin_dismiss_twice_reports_false() {
    let mut state = FlashState::default();
    let id = state.push("a".to_owned(), FlashLevel::Info);

    assert!(state.begin_dismiss(id));
    assert!(!state.begin_dismiss(id));
}

#[test]
fn begin_dismiss_unknown_id_reports_false() {
    let mut state = FlashState::default();
    assert!(!state.begin_dismiss(42));
}

// =============================================================
// remove
// =============================================================

#[test]
fn remove_drops_only_the_target() {
    let mut state = FlashState::default();
    let first = state.push("a".to_owned(), FlashLevel::Info);
    let second = state.push("b".to_owned(), FlashLevel::Error);

    assert!(state.remove(first));
    assert_eq!(state.messages.len(), 1);
    assert_eq!(state.messages[0].id, second);
}

#[test]
fn remove_unknown_id_reports_false() {
    let mut state = FlashState::default();
    assert!(!state.remove(42));
}

// =============================================================
// FlashLevel
// =============================================================

#[test]
fn level_class_suffixes() {
    assert_eq!(FlashLevel::Info.as_str(), "info");
    assert_eq!(FlashLevel::Success.as_str(), "success");
    assert_eq!(FlashLevel::Error.as_str(), "error");
}
