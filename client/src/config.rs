//! Client configuration resolved from build-time environment variables.
//!
//! The browser bundle has no process environment, so values are captured with
//! `option_env!` when the crate is compiled and validated once at startup.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::error::ClientError;

pub const DEFAULT_CREDENTIAL_KEY: &str = "token";
pub const DEFAULT_NOTICE_TTL_MS: u32 = 4000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Prefix prepended to every `/api/...` path. Empty means same-origin.
    pub api_base: String,
    /// `localStorage` key holding the persisted credential.
    pub credential_key: String,
    /// How long a toast notice stays visible.
    pub notice_ttl_ms: u32,
    pub log_level: log::Level,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            credential_key: DEFAULT_CREDENTIAL_KEY.to_owned(),
            notice_ttl_ms: DEFAULT_NOTICE_TTL_MS,
            log_level: log::Level::Info,
        }
    }
}

impl ClientConfig {
    /// Build config from variables present when the crate was compiled.
    ///
    /// Optional:
    /// - `SMARTSPEND_API_BASE`: origin of the API, default same-origin
    /// - `SMARTSPEND_TOKEN_KEY`: credential storage key, default `token`
    /// - `SMARTSPEND_NOTICE_TTL_MS`: default 4000
    /// - `SMARTSPEND_LOG_LEVEL`: `error`..`trace`, default `info`
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::ConfigParse`] when a value is present but invalid.
    pub fn from_build_env() -> Result<Self, ClientError> {
        Self::from_values(
            option_env!("SMARTSPEND_API_BASE"),
            option_env!("SMARTSPEND_TOKEN_KEY"),
            option_env!("SMARTSPEND_NOTICE_TTL_MS"),
            option_env!("SMARTSPEND_LOG_LEVEL"),
        )
    }

    fn from_values(
        api_base: Option<&str>,
        credential_key: Option<&str>,
        notice_ttl_ms: Option<&str>,
        log_level: Option<&str>,
    ) -> Result<Self, ClientError> {
        let defaults = Self::default();

        let api_base = api_base.map_or(defaults.api_base, |raw| raw.trim().trim_end_matches('/').to_owned());

        let credential_key = match credential_key.map(str::trim) {
            None => defaults.credential_key,
            Some("") => return Err(ClientError::ConfigParse("SMARTSPEND_TOKEN_KEY is empty".into())),
            Some(key) => key.to_owned(),
        };

        let notice_ttl_ms = match notice_ttl_ms {
            None => defaults.notice_ttl_ms,
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .map_err(|_| ClientError::ConfigParse(format!("invalid SMARTSPEND_NOTICE_TTL_MS: {raw}")))?,
        };

        let log_level = match log_level {
            None => defaults.log_level,
            Some(raw) => raw
                .trim()
                .parse::<log::Level>()
                .map_err(|_| ClientError::ConfigParse(format!("invalid SMARTSPEND_LOG_LEVEL: {raw}")))?,
        };

        Ok(Self { api_base, credential_key, notice_ttl_ms, log_level })
    }
}
