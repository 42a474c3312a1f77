//! Host configuration parsed from environment variables.

use crate::error::ConfigError;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_UPSTREAM_CONNECT_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpstreamTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Base URL of the REST API that `/api/*` is forwarded to, without a trailing `/`.
    pub upstream_url: String,
    pub timeouts: UpstreamTimeouts,
}

impl ServerConfig {
    /// Build typed config from environment variables.
    ///
    /// Required:
    /// - `UPSTREAM_API_URL` (`http://` or `https://`)
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `UPSTREAM_TIMEOUT_SECS`: default 30
    /// - `UPSTREAM_CONNECT_TIMEOUT_SECS`: default 5
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] over an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid { var: "PORT", value: raw })?,
            None => DEFAULT_PORT,
        };

        let raw_url = lookup("UPSTREAM_API_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing { var: "UPSTREAM_API_URL" })?;
        let upstream_url = raw_url.trim().trim_end_matches('/').to_owned();
        if !(upstream_url.starts_with("http://") || upstream_url.starts_with("https://")) {
            return Err(ConfigError::Invalid { var: "UPSTREAM_API_URL", value: raw_url });
        }

        let timeouts = UpstreamTimeouts {
            request_secs: parse_u64_or(lookup("UPSTREAM_TIMEOUT_SECS"), DEFAULT_UPSTREAM_TIMEOUT_SECS),
            connect_secs: parse_u64_or(lookup("UPSTREAM_CONNECT_TIMEOUT_SECS"), DEFAULT_UPSTREAM_CONNECT_TIMEOUT_SECS),
        };

        Ok(Self { port, upstream_url, timeouts })
    }
}

fn parse_u64_or(raw: Option<String>, default: u64) -> u64 {
    raw.and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|v| *v > 0)
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
