//! Wire DTOs for the SmartSpend REST API.
//!
//! DESIGN
//! ======
//! Field names follow the upstream JSON (`camelCase`, Mongo-style `_id`)
//! through serde attributes so the Rust side can keep descriptive names.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// The authenticated account as returned by `/api/auth/*`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UserWire")]
pub struct User {
    /// Account identifier.
    pub id: String,
    /// Display name chosen at registration.
    #[serde(rename = "name")]
    pub display_name: String,
    pub email: String,
    /// Avatar image reference (URL or upload path), if one was set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default)]
    pub preferences: Preferences,
}

/// Per-user display and reminder settings. Missing fields take their defaults.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    /// ISO currency code used when rendering amounts.
    pub currency: String,
    /// Days before a warranty expires at which a reminder is sent.
    #[serde(rename = "reminderDaysBefore", deserialize_with = "deserialize_u32_from_number")]
    pub reminder_lead_days: u32,
    /// UI theme name (`light`, `dark`, `system`).
    pub theme: String,
}

impl Default for Preferences {
    fn default() -> Self {
        Self { currency: "USD".to_owned(), reminder_lead_days: 30, theme: "light".to_owned() }
    }
}

/// A warranty record shown by the detail modal. Owned by the warranty list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "WarrantyWire")]
pub struct WarrantyRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub product_name: String,
    /// ISO-8601 date or timestamp.
    pub expiration_date: String,
    pub category: String,
    /// ISO-8601 date or timestamp, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_date: Option<String>,
}

/// `POST /api/auth/login` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// `POST /api/auth/register` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Successful login/register response: a fresh credential plus the account.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

/// Envelope returned by the profile endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct UserEnvelope {
    pub user: User,
}

/// Error payload the API attaches to rejected requests.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

// =============================================================================
// ID SHIMS
// =============================================================================

/// Record identifier from `id`, `_id`, or both (Mongo documents serialized
/// with virtuals carry the two side by side). `id` wins when both are set.
fn merge_ids(id: Option<String>, mongo_id: Option<String>) -> Result<String, String> {
    id.or(mongo_id).ok_or_else(|| "missing field `id` or `_id`".to_owned())
}

#[derive(Deserialize)]
struct UserWire {
    #[serde(default)]
    id: Option<String>,
    #[serde(default, rename = "_id")]
    mongo_id: Option<String>,
    name: String,
    email: String,
    #[serde(default)]
    avatar: Option<String>,
    #[serde(default)]
    preferences: Preferences,
}

impl TryFrom<UserWire> for User {
    type Error = String;

    fn try_from(wire: UserWire) -> Result<Self, Self::Error> {
        Ok(Self {
            id: merge_ids(wire.id, wire.mongo_id)?,
            display_name: wire.name,
            email: wire.email,
            avatar: wire.avatar,
            preferences: wire.preferences,
        })
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WarrantyWire {
    #[serde(default)]
    id: Option<String>,
    #[serde(default, rename = "_id")]
    mongo_id: Option<String>,
    product_name: String,
    expiration_date: String,
    category: String,
    #[serde(default)]
    purchase_date: Option<String>,
}

impl TryFrom<WarrantyWire> for WarrantyRecord {
    type Error = String;

    fn try_from(wire: WarrantyWire) -> Result<Self, Self::Error> {
        Ok(Self {
            id: merge_ids(wire.id, wire.mongo_id)?,
            product_name: wire.product_name,
            expiration_date: wire.expiration_date,
            category: wire.category,
            purchase_date: wire.purchase_date,
        })
    }
}

fn deserialize_u32_from_number<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_u64() {
                return u32::try_from(int).map_err(|_| D::Error::custom("number out of range"));
            }
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= 0.0
                && float <= f64::from(u32::MAX)
            {
                return Ok(float as u32);
            }
            Err(D::Error::custom("expected non-negative integer"))
        }
        _ => Err(D::Error::custom("expected number")),
    }
}
