use super::*;

#[test]
fn notice_state_default_empty() {
    assert!(NoticeState::default().items.is_empty());
}

#[test]
fn push_returns_unique_ids() {
    let mut state = NoticeState::default();
    let a = state.push(NoticeKind::Success, "Logged in successfully");
    let b = state.push(NoticeKind::Error, "Login failed");
    assert_ne!(a, b);
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.items[0].message, "Logged in successfully");
    assert_eq!(state.items[1].kind, NoticeKind::Error);
}

#[test]
fn push_drops_oldest_past_cap() {
    let mut state = NoticeState::default();
    for i in 0..(MAX_NOTICES + 2) {
        state.push(NoticeKind::Success, format!("n{i}"));
    }
    assert_eq!(state.items.len(), MAX_NOTICES);
    assert_eq!(state.items[0].message, "n2");
    assert_eq!(state.items.last().unwrap().message, format!("n{}", MAX_NOTICES + 1));
}

#[test]
fn dismiss_removes_only_matching_id() {
    let mut state = NoticeState::default();
    let keep = state.push(NoticeKind::Success, "keep");
    let drop = state.push(NoticeKind::Error, "drop");
    state.dismiss(&drop);
    state.dismiss("unknown");
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, keep);
}

#[test]
fn css_modifier_per_kind() {
    assert_eq!(NoticeKind::Success.css_modifier(), "toast--success");
    assert_eq!(NoticeKind::Error.css_modifier(), "toast--error");
}
