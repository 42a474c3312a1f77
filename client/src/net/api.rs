//! REST calls against the SmartSpend auth endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! DESIGN
//! ======
//! [`AuthApi`] carries only the base URL. The credential is passed to every
//! call explicitly, so clearing it on logout cannot leave a stale header on a
//! shared client.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{AuthResponse, LoginRequest, RegisterRequest, User};
#[cfg(feature = "hydrate")]
use super::types::UserEnvelope;
use crate::config::ClientConfig;

pub const ME_PATH: &str = "/api/auth/me";
pub const LOGIN_PATH: &str = "/api/auth/login";
pub const REGISTER_PATH: &str = "/api/auth/register";
pub const PROFILE_PATH: &str = "/api/auth/profile";
pub const AVATAR_PATH: &str = "/api/auth/profile/avatar";

/// `Authorization` header value for `credential`, or `None` when no
/// credential is held. An empty credential never produces a header.
pub fn authorization_header(credential: Option<&str>) -> Option<String> {
    credential.filter(|c| !c.is_empty()).map(|c| format!("Bearer {c}"))
}

/// Reject login/register responses that would leave an empty credential.
#[cfg(any(test, feature = "hydrate"))]
fn checked_auth_response(resp: AuthResponse) -> Result<AuthResponse, ApiError> {
    if resp.token.trim().is_empty() {
        return Err(ApiError::Decode("auth response carried an empty token".to_owned()));
    }
    Ok(resp)
}

/// Multipart payload for `PUT /api/auth/profile`.
#[derive(Clone, Debug, Default)]
pub struct ProfileUpdate {
    pub name: String,
    pub currency: String,
    pub reminder_lead_days: u32,
    pub theme: String,
    /// New avatar image picked in the file input.
    #[cfg(feature = "hydrate")]
    pub avatar: Option<web_sys::File>,
}

impl ProfileUpdate {
    pub fn new(name: String, currency: String, reminder_lead_days: u32, theme: String) -> Self {
        Self { name, currency, reminder_lead_days, theme, ..Self::default() }
    }

    #[cfg(feature = "hydrate")]
    #[must_use]
    pub fn with_avatar(mut self, avatar: Option<web_sys::File>) -> Self {
        self.avatar = avatar;
        self
    }

    /// Text parts of the multipart form, in submission order.
    pub fn text_parts(&self) -> [(&'static str, String); 4] {
        [
            ("name", self.name.trim().to_owned()),
            ("currency", self.currency.clone()),
            ("reminderDaysBefore", self.reminder_lead_days.to_string()),
            ("theme", self.theme.clone()),
        ]
    }
}

/// HTTP client for the auth endpoints, scoped to one session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthApi {
    base: String,
}

impl AuthApi {
    pub fn new(config: &ClientConfig) -> Self {
        Self { base: config.api_base.clone() }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }

    /// Validate `credential` via `GET /api/auth/me`.
    ///
    /// # Errors
    ///
    /// Any non-2xx answer, transport failure, or malformed user.
    pub async fn current_user(&self, credential: &str) -> Result<User, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let request = authorized(gloo_net::http::Request::get(&self.url(ME_PATH)), Some(credential))
                .build()
                .map_err(|e| ApiError::Request(e.to_string()))?;
            read_json::<User>(request).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (self.url(ME_PATH), credential);
            Err(ApiError::Unavailable)
        }
    }

    /// `POST /api/auth/login`.
    ///
    /// # Errors
    ///
    /// Rejected credentials, server faults, transport failures, or an empty token.
    pub async fn login(&self, credential: Option<&str>, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let request = authorized(gloo_net::http::Request::post(&self.url(LOGIN_PATH)), credential)
                .json(request)
                .map_err(|e| ApiError::Request(e.to_string()))?;
            read_json::<AuthResponse>(request).await.and_then(checked_auth_response)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (self.url(LOGIN_PATH), credential, request);
            Err(ApiError::Unavailable)
        }
    }

    /// `POST /api/auth/register`.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`AuthApi::login`].
    pub async fn register(
        &self,
        credential: Option<&str>,
        request: &RegisterRequest,
    ) -> Result<AuthResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let request = authorized(gloo_net::http::Request::post(&self.url(REGISTER_PATH)), credential)
                .json(request)
                .map_err(|e| ApiError::Request(e.to_string()))?;
            read_json::<AuthResponse>(request).await.and_then(checked_auth_response)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (self.url(REGISTER_PATH), credential, request);
            Err(ApiError::Unavailable)
        }
    }

    /// `PUT /api/auth/profile` with a multipart body.
    ///
    /// The browser sets the multipart `Content-Type` (with boundary) itself.
    ///
    /// # Errors
    ///
    /// Form assembly failures, rejected data, server faults, transport failures.
    pub async fn update_profile(&self, credential: Option<&str>, update: &ProfileUpdate) -> Result<User, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let form = web_sys::FormData::new().map_err(|e| ApiError::Request(format!("{e:?}")))?;
            for (key, value) in update.text_parts() {
                form.append_with_str(key, &value).map_err(|e| ApiError::Request(format!("{e:?}")))?;
            }
            if let Some(file) = &update.avatar {
                form.append_with_blob_and_filename("avatar", file, &file.name())
                    .map_err(|e| ApiError::Request(format!("{e:?}")))?;
            }
            let request = authorized(gloo_net::http::Request::put(&self.url(PROFILE_PATH)), credential)
                .body(form)
                .map_err(|e| ApiError::Request(e.to_string()))?;
            read_json::<UserEnvelope>(request).await.map(|envelope| envelope.user)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (self.url(PROFILE_PATH), credential, update);
            Err(ApiError::Unavailable)
        }
    }

    /// `DELETE /api/auth/profile/avatar`.
    ///
    /// # Errors
    ///
    /// Server faults, rejected requests, transport failures.
    pub async fn remove_avatar(&self, credential: Option<&str>) -> Result<User, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let request = authorized(gloo_net::http::Request::delete(&self.url(AVATAR_PATH)), credential)
                .build()
                .map_err(|e| ApiError::Request(e.to_string()))?;
            read_json::<UserEnvelope>(request).await.map(|envelope| envelope.user)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (self.url(AVATAR_PATH), credential);
            Err(ApiError::Unavailable)
        }
    }
}

#[cfg(feature = "hydrate")]
fn authorized(
    builder: gloo_net::http::RequestBuilder,
    credential: Option<&str>,
) -> gloo_net::http::RequestBuilder {
    match authorization_header(credential) {
        Some(value) => builder.header("Authorization", &value),
        None => builder,
    }
}

#[cfg(feature = "hydrate")]
async fn read_json<T: serde::de::DeserializeOwned>(request: gloo_net::http::Request) -> Result<T, ApiError> {
    let resp = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
    if !resp.ok() {
        let body = resp.text().await.unwrap_or_default();
        return Err(ApiError::from_response(resp.status(), &body));
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}
