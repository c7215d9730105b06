use super::*;

#[test]
fn push_assigns_increasing_ids_in_order() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Info, "one");
    let b = state.push(ToastKind::Error, "two");
    assert!(b > a);
    let messages: Vec<_> = state.items.iter().map(|t| t.message.as_str()).collect();
    assert_eq!(messages, vec!["one", "two"]);
}

#[test]
fn dismiss_removes_only_matching_toast() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Info, "one");
    let b = state.push(ToastKind::Success, "two");
    state.dismiss(a);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, b);
}

#[test]
fn dismiss_unknown_id_is_noop() {
    let mut state = ToastState::default();
    state.push(ToastKind::Info, "one");
    state.dismiss(999);
    assert_eq!(state.items.len(), 1);
}

#[test]
fn ids_are_not_reused_after_dismiss() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Info, "one");
    state.dismiss(a);
    let b = state.push(ToastKind::Info, "two");
    assert_ne!(a, b);
}

#[test]
fn kind_classes_are_distinct() {
    assert_ne!(ToastKind::Info.class(), ToastKind::Error.class());
    assert_ne!(ToastKind::Success.class(), ToastKind::Error.class());
}
