/******************************************************************************
   Author: portainer-client contributors
   Project: portainer-client
   Date: 16/10/26
******************************************************************************/
use crate::constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use crate::utils::config::{get_env_flag, get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default)]
/// Credentials for the Portainer API
///
/// Password and token are never serialized, so the pretty/simple renderings used in
/// logs cannot leak them.
pub struct Credentials {
    /// Portainer username
    pub username: String,
    /// Portainer password
    #[serde(skip_serializing, default)]
    pub password: String,
    /// Previously obtained bearer token, injected instead of logging in
    #[serde(skip_serializing, default)]
    pub token: Option<String>,
}

impl Credentials {
    /// True when both username and password are present
    #[must_use]
    pub fn has_login(&self) -> bool {
        !self.username.is_empty() && !self.password.is_empty()
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL of the Portainer API, e.g. `https://portainer.local:9443/api`
    pub base_url: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
    /// Accept self-signed or otherwise invalid TLS certificates
    pub accept_invalid_certs: bool,
}

impl Default for RestApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT_SECS,
            accept_invalid_certs: false,
        }
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default)]
/// Main configuration for the Portainer API client
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
}

impl Config {
    /// Builds the configuration from the environment (and a `.env` file when present)
    ///
    /// Recognised variables: `PORTAINER_URL`, `PORTAINER_USERNAME`, `PORTAINER_PASSWORD`,
    /// `PORTAINER_TOKEN`, `PORTAINER_TIMEOUT`, `PORTAINER_ACCEPT_INVALID_CERTS`.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let credentials = Credentials {
            username: get_env_or_default("PORTAINER_USERNAME", String::new()),
            password: get_env_or_default("PORTAINER_PASSWORD", String::new()),
            token: get_env_or_none("PORTAINER_TOKEN"),
        };

        if !credentials.has_login() && credentials.token.is_none() {
            warn!("Neither PORTAINER_USERNAME/PORTAINER_PASSWORD nor PORTAINER_TOKEN are set");
        }

        Config {
            credentials,
            rest_api: RestApiConfig {
                base_url: get_env_or_default("PORTAINER_URL", String::from(DEFAULT_BASE_URL)),
                timeout: get_env_or_default("PORTAINER_TIMEOUT", DEFAULT_TIMEOUT_SECS),
                accept_invalid_certs: get_env_flag("PORTAINER_ACCEPT_INVALID_CERTS", false),
            },
        }
    }

    /// Builds a configuration for an explicit base URL without touching the environment
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Config {
            credentials: Credentials::default(),
            rest_api: RestApiConfig {
                base_url: base_url.into(),
                ..RestApiConfig::default()
            },
        }
    }
}
