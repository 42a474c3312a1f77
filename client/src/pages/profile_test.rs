use super::*;

fn user() -> User {
    User {
        id: "u1".to_owned(),
        display_name: "Ada Lovelace".to_owned(),
        email: "ada@example.com".to_owned(),
        avatar: None,
        preferences: Preferences { currency: "EUR".to_owned(), reminder_lead_days: 14, theme: "dark".to_owned() },
    }
}

// =============================================================
// ProfileDraft
// =============================================================

#[test]
fn draft_prefills_from_user() {
    assert_eq!(
        ProfileDraft::from_user(&user()),
        ProfileDraft {
            name: "Ada Lovelace".to_owned(),
            currency: "EUR".to_owned(),
            reminder_days: "14".to_owned(),
            theme: "dark".to_owned(),
        }
    );
}

#[test]
fn draft_builds_multipart_text_parts() {
    let current = user().preferences;
    let draft = ProfileDraft { reminder_days: " 7 ".to_owned(), ..ProfileDraft::from_user(&user()) };
    let update = draft.into_update(&current);
    assert_eq!(
        update.text_parts(),
        [
            ("name", "Ada Lovelace".to_owned()),
            ("currency", "EUR".to_owned()),
            ("reminderDaysBefore", "7".to_owned()),
            ("theme", "dark".to_owned()),
        ]
    );
}

#[test]
fn invalid_reminder_days_keep_current_value() {
    let current = user().preferences;
    for raw in ["", "abc", "-3", "2.5"] {
        let draft = ProfileDraft { reminder_days: raw.to_owned(), ..ProfileDraft::from_user(&user()) };
        assert_eq!(draft.into_update(&current).reminder_lead_days, 14, "input {raw:?}");
    }
}

#[test]
fn saved_avatar_triggers_reseed() {
    let before = user();
    let after = User { avatar: Some("/uploads/ada.png".to_owned()), ..user() };
    assert!(needs_reseed(Some(&before), Some(&after)));
}

#[test]
fn unchanged_user_does_not_reseed() {
    assert!(!needs_reseed(Some(&user()), Some(&user())));
    assert!(!needs_reseed(None, None));
}

#[test]
fn first_load_and_sign_out_reseed() {
    assert!(needs_reseed(None, Some(&user())));
    assert!(needs_reseed(Some(&user()), None));
}

// =============================================================
// Helpers
// =============================================================

#[test]
fn parse_reminder_days_accepts_zero() {
    assert_eq!(parse_reminder_days("0"), Some(0));
    assert_eq!(parse_reminder_days(" 30\n"), Some(30));
    assert_eq!(parse_reminder_days("-1"), None);
}

#[test]
fn avatar_initials_takes_two_words() {
    assert_eq!(avatar_initials("ada byron lovelace"), "AB");
    assert_eq!(avatar_initials("Ada"), "A");
    assert_eq!(avatar_initials("  "), "");
}

#[test]
fn select_options_keeps_unknown_current_value() {
    let options = select_options(THEMES, "sepia");
    assert_eq!(options.last().map(String::as_str), Some("sepia"));
    assert_eq!(options.len(), THEMES.len() + 1);
}

#[test]
fn select_options_does_not_duplicate_known_value() {
    assert_eq!(select_options(CURRENCIES, "USD").len(), CURRENCIES.len());
    assert_eq!(select_options(CURRENCIES, "").len(), CURRENCIES.len());
}
