//! Client configuration.
//!
//! Values come from the environment (`TUTORLINK_*`). Parsing goes through a
//! lookup closure so it can be exercised without touching process env.

use std::collections::HashMap;
use std::env;
use std::time::Duration;

use crate::contact::DEFAULT_MESSAGING_BASE_URL;
use crate::error::{Error, Result};
use crate::util::{is_http_url, normalize_text_option};

pub const API_URL_VAR: &str = "TUTORLINK_API_URL";
pub const HTTP_TIMEOUT_VAR: &str = "TUTORLINK_HTTP_TIMEOUT_SECS";
pub const MESSAGING_BASE_URL_VAR: &str = "TUTORLINK_MESSAGING_BASE_URL";

const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

/// Settings shared by every client of the directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the directory backend, without trailing slash
    pub api_base_url: Option<String>,
    /// Per-request timeout for backend calls
    pub request_timeout: Duration,
    /// Base URL of the messaging service used for contact links
    pub messaging_base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: None,
            request_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
            messaging_base_url: DEFAULT_MESSAGING_BASE_URL.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Result<Self> {
        let values: HashMap<String, String> = env::vars().collect();
        Self::from_lookup(|name| values.get(name).cloned())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_base_url = lookup(API_URL_VAR)
            .and_then(|value| normalize_text_option(Some(value)))
            .map(|value| normalize_base_url(&value, API_URL_VAR))
            .transpose()?;

        let request_timeout = match lookup(HTTP_TIMEOUT_VAR)
            .and_then(|value| normalize_text_option(Some(value)))
        {
            Some(raw) => {
                let secs = raw.parse::<u64>().map_err(|_| {
                    Error::Config(format!("{HTTP_TIMEOUT_VAR} must be an integer in [1, 120]"))
                })?;
                if !(1..=120).contains(&secs) {
                    return Err(Error::Config(format!(
                        "{HTTP_TIMEOUT_VAR} must be in [1, 120]"
                    )));
                }
                Duration::from_secs(secs)
            }
            None => Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        };

        let messaging_base_url = match lookup(MESSAGING_BASE_URL_VAR)
            .and_then(|value| normalize_text_option(Some(value)))
        {
            Some(raw) => normalize_base_url(&raw, MESSAGING_BASE_URL_VAR)?,
            None => DEFAULT_MESSAGING_BASE_URL.to_string(),
        };

        Ok(Self {
            api_base_url,
            request_timeout,
            messaging_base_url,
        })
    }

    /// Replace the backend URL, validating it the same way as the env value
    pub fn with_api_base_url(mut self, url: &str) -> Result<Self> {
        self.api_base_url = Some(normalize_base_url(url, "api base URL")?);
        Ok(self)
    }
}

/// Trim and strip trailing slashes; require an http(s) scheme
pub fn normalize_base_url(raw: &str, field: &str) -> Result<String> {
    let value = raw.trim();
    if !is_http_url(value) {
        return Err(Error::Config(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(value.trim_end_matches('/').to_string())
}
