/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::constants::{
    DEFAULT_BASE_URL, DEFAULT_ORGANIZATION_HEADER, DEFAULT_TIMEOUT_SECS,
    DEFAULT_TOKEN_SKEW_SECS, DEFAULT_TOKEN_VALIDITY_SECS,
};
use crate::error::AppError;
use crate::utils::config::get_env_or_default;
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use reqwest::header::HeaderName;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Login credentials for the Maestro API
pub struct Credentials {
    /// Maestro login
    pub login: String,
    /// Maestro key; never serialized or printed
    #[serde(skip_serializing, default)]
    pub key: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the Maestro API client
pub struct Config {
    /// Login credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Token cache and header configuration
    pub session: SessionConfig,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL, without the `/api/v2` prefix
    pub base_url: String,
    /// Timeout in seconds for every network call, login included
    pub timeout: u64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the cached session
pub struct SessionConfig {
    /// Seconds subtracted from the token expiry before it is considered stale
    pub token_skew: u64,
    /// Assumed token lifetime in seconds when the server does not report one
    pub token_validity: u64,
    /// Name of the header carrying the organization label
    pub organization_header: String,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for RestApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            token_skew: DEFAULT_TOKEN_SKEW_SECS,
            token_validity: DEFAULT_TOKEN_VALIDITY_SECS,
            organization_header: DEFAULT_ORGANIZATION_HEADER.to_string(),
        }
    }
}

impl Config {
    /// Creates a configuration from the environment
    ///
    /// Loads a `.env` file when present, then reads `MAESTRO_LOGIN`, `MAESTRO_KEY`,
    /// `MAESTRO_BASE_URL`, `MAESTRO_TIMEOUT`, `MAESTRO_TOKEN_SKEW`,
    /// `MAESTRO_TOKEN_VALIDITY` and `MAESTRO_ORG_HEADER`.
    ///
    /// Missing credentials are reported with `error!` and left empty; the first
    /// login then fails with an authentication error.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let login = get_env_or_default("MAESTRO_LOGIN", String::new());
        let key = get_env_or_default("MAESTRO_KEY", String::new());

        if login.is_empty() {
            error!("MAESTRO_LOGIN not found in environment variables or .env file");
        }
        if key.is_empty() {
            error!("MAESTRO_KEY not found in environment variables or .env file");
        }

        Config {
            credentials: Credentials { login, key },
            rest_api: RestApiConfig {
                base_url: get_env_or_default("MAESTRO_BASE_URL", DEFAULT_BASE_URL.to_string()),
                timeout: get_env_or_default("MAESTRO_TIMEOUT", DEFAULT_TIMEOUT_SECS),
            },
            session: SessionConfig {
                token_skew: get_env_or_default("MAESTRO_TOKEN_SKEW", DEFAULT_TOKEN_SKEW_SECS),
                token_validity: get_env_or_default(
                    "MAESTRO_TOKEN_VALIDITY",
                    DEFAULT_TOKEN_VALIDITY_SECS,
                ),
                organization_header: get_env_or_default(
                    "MAESTRO_ORG_HEADER",
                    DEFAULT_ORGANIZATION_HEADER.to_string(),
                ),
            },
        }
    }

    /// Creates a configuration with explicit credentials and default settings
    ///
    /// Does not read the environment.
    pub fn with_credentials(login: impl Into<String>, key: impl Into<String>) -> Self {
        Config {
            credentials: Credentials {
                login: login.into(),
                key: key.into(),
            },
            rest_api: RestApiConfig::default(),
            session: SessionConfig::default(),
        }
    }

    /// Overrides the base URL
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.rest_api.base_url = base_url.into();
        self
    }

    /// Overrides the request timeout, in seconds
    #[must_use]
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.rest_api.timeout = timeout_secs;
        self
    }

    /// Overrides the token skew, in seconds
    #[must_use]
    pub fn with_token_skew(mut self, skew_secs: u64) -> Self {
        self.session.token_skew = skew_secs;
        self
    }

    /// Overrides the assumed token validity, in seconds
    #[must_use]
    pub fn with_token_validity(mut self, validity_secs: u64) -> Self {
        self.session.token_validity = validity_secs;
        self
    }

    /// Overrides the organization header name
    #[must_use]
    pub fn with_organization_header(mut self, header: impl Into<String>) -> Self {
        self.session.organization_header = header.into();
        self
    }

    /// Base URL with any trailing slash removed
    pub fn base_url(&self) -> &str {
        self.rest_api.base_url.trim_end_matches('/')
    }

    /// Request timeout as a [`Duration`]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.rest_api.timeout)
    }

    /// Checks the configuration for values the client cannot work with
    pub fn validate(&self) -> Result<(), AppError> {
        if self.base_url().is_empty() {
            return Err(AppError::Config("base_url must not be empty".to_string()));
        }
        if self.rest_api.timeout == 0 {
            return Err(AppError::Config("timeout must be greater than zero".to_string()));
        }
        HeaderName::from_bytes(self.session.organization_header.as_bytes()).map_err(|_| {
            AppError::Config(format!(
                "invalid organization header name: {:?}",
                self.session.organization_header
            ))
        })?;
        Ok(())
    }
}
