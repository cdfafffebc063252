use super::*;

#[test]
fn toast_state_default_is_empty() {
    let state = ToastState::default();
    assert!(state.items.is_empty());
}

#[test]
fn push_assigns_increasing_ids() {
    let mut state = ToastState::default();
    let a = state.push(Notice::success("one"));
    let b = state.push(Notice::error("two"));
    assert!(b > a);
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.items[1].notice.kind, ToastKind::Error);
}

#[test]
fn dismiss_removes_only_matching_toast() {
    let mut state = ToastState::default();
    let a = state.push(Notice::info("one"));
    let b = state.push(Notice::info("two"));
    state.dismiss(a);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, b);
    state.dismiss(999);
    assert_eq!(state.items.len(), 1);
}

#[test]
fn push_drops_oldest_beyond_limit() {
    let mut state = ToastState::default();
    for i in 0..(MAX_VISIBLE_TOASTS + 2) {
        state.push(Notice::info(format!("n{i}")));
    }
    assert_eq!(state.items.len(), MAX_VISIBLE_TOASTS);
    assert_eq!(state.items[0].notice.message, "n2");
}

#[test]
fn kind_css_modifiers_are_distinct() {
    assert_eq!(ToastKind::Success.css_modifier(), "toast--success");
    assert_ne!(ToastKind::Error.css_modifier(), ToastKind::Info.css_modifier());
}
