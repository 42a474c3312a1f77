use super::*;

// =============================================================
// User
// =============================================================

#[test]
fn user_deserializes_api_shape() {
    let user: User = serde_json::from_value(serde_json::json!({
        "_id": "64f0c2",
        "name": "Ada",
        "email": "ada@example.com",
        "avatar": "/uploads/ada.png",
        "preferences": { "currency": "EUR", "reminderDaysBefore": 14, "theme": "dark" }
    }))
    .unwrap();

    assert_eq!(user.id, "64f0c2");
    assert_eq!(user.display_name, "Ada");
    assert_eq!(user.avatar.as_deref(), Some("/uploads/ada.png"));
    assert_eq!(user.preferences.currency, "EUR");
    assert_eq!(user.preferences.reminder_lead_days, 14);
    assert_eq!(user.preferences.theme, "dark");
}

#[test]
fn user_accepts_plain_id_and_missing_optionals() {
    let user: User = serde_json::from_value(serde_json::json!({
        "id": "u-1",
        "name": "Bob",
        "email": "bob@example.com"
    }))
    .unwrap();

    assert_eq!(user.id, "u-1");
    assert!(user.avatar.is_none());
    assert_eq!(user.preferences, Preferences::default());
}

#[test]
fn user_accepts_both_id_spellings_together() {
    let user: User = serde_json::from_value(serde_json::json!({
        "_id": "64f0",
        "id": "64f0",
        "name": "Ada",
        "email": "a@b.c"
    }))
    .unwrap();
    assert_eq!(user.id, "64f0");
}

#[test]
fn user_without_any_id_is_rejected() {
    let result = serde_json::from_value::<User>(serde_json::json!({ "name": "Ada", "email": "a@b.c" }));
    assert!(result.is_err());
}

#[test]
fn partial_preferences_fill_in_defaults() {
    let user: User = serde_json::from_value(serde_json::json!({
        "_id": "64f0",
        "id": "64f0",
        "name": "Ada",
        "email": "a@b.c",
        "preferences": { "currency": "EUR" }
    }))
    .unwrap();
    assert_eq!(user.preferences.currency, "EUR");
    assert_eq!(user.preferences.reminder_lead_days, 30);
    assert_eq!(user.preferences.theme, "light");
}

#[test]
fn user_serializes_name_field() {
    let user: User = serde_json::from_value(serde_json::json!({
        "id": "u-1",
        "name": "Bob",
        "email": "bob@example.com"
    }))
    .unwrap();
    let json = serde_json::to_value(&user).unwrap();
    assert_eq!(json["name"], "Bob");
    assert!(json.get("avatar").is_none());
    assert_eq!(json["preferences"]["reminderDaysBefore"], 30);
    assert_eq!(json["id"], "u-1");
}

#[test]
fn reminder_days_accepts_integral_float() {
    let prefs: Preferences =
        serde_json::from_value(serde_json::json!({ "currency": "USD", "reminderDaysBefore": 7.0, "theme": "light" }))
            .unwrap();
    assert_eq!(prefs.reminder_lead_days, 7);
}

#[test]
fn reminder_days_rejects_negative_and_fractional() {
    let negative = serde_json::from_value::<Preferences>(serde_json::json!({
        "currency": "USD", "reminderDaysBefore": -1, "theme": "light"
    }));
    assert!(negative.is_err());

    let fractional = serde_json::from_value::<Preferences>(serde_json::json!({
        "currency": "USD", "reminderDaysBefore": 2.5, "theme": "light"
    }));
    assert!(fractional.is_err());
}

// =============================================================
// WarrantyRecord
// =============================================================

#[test]
fn warranty_record_deserializes_without_purchase_date() {
    let record: WarrantyRecord = serde_json::from_value(serde_json::json!({
        "_id": "w-1",
        "productName": "Fridge",
        "expirationDate": "2025-06-01",
        "category": "Appliance"
    }))
    .unwrap();

    assert_eq!(record.id, "w-1");
    assert_eq!(record.product_name, "Fridge");
    assert!(record.purchase_date.is_none());
}

#[test]
fn warranty_record_accepts_both_id_spellings_together() {
    let record: WarrantyRecord = serde_json::from_value(serde_json::json!({
        "_id": "w-1",
        "id": "w-1",
        "productName": "Fridge",
        "expirationDate": "2025-06-01",
        "category": "Appliance",
        "purchaseDate": "2023-06-01"
    }))
    .unwrap();

    assert_eq!(record.id, "w-1");
    assert_eq!(record.purchase_date.as_deref(), Some("2023-06-01"));
    assert_eq!(serde_json::to_value(&record).unwrap()["_id"], "w-1");
}

// =============================================================
// Auth payloads
// =============================================================

#[test]
fn auth_response_deserializes_token_and_user() {
    let resp: AuthResponse = serde_json::from_value(serde_json::json!({
        "token": "jwt-abc",
        "user": { "id": "u-1", "name": "Bob", "email": "bob@example.com" }
    }))
    .unwrap();
    assert_eq!(resp.token, "jwt-abc");
    assert_eq!(resp.user.display_name, "Bob");
}

#[test]
fn register_request_serializes_expected_keys() {
    let req = RegisterRequest { name: "Bob".into(), email: "bob@example.com".into(), password: "secret1".into() };
    assert_eq!(
        serde_json::to_value(&req).unwrap(),
        serde_json::json!({ "name": "Bob", "email": "bob@example.com", "password": "secret1" })
    );
}

#[test]
fn error_body_tolerates_missing_message() {
    let body: ErrorBody = serde_json::from_str("{}").unwrap();
    assert!(body.message.is_none());
    let body: ErrorBody = serde_json::from_str(r#"{"message":"Email taken","code":11000}"#).unwrap();
    assert_eq!(body.message.as_deref(), Some("Email taken"));
}
