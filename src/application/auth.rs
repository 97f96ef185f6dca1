/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Authentication module for the Maestro API
//!
//! This module owns the only shared mutable state of the client, the cached
//! [`Session`], and handles:
//! - Login with `{login, key}` credentials
//! - Token validity checks with a safety skew
//! - Re-authentication on expiry or after a rejected token
//! - Manual organization override and logout
//!
//! # Locking
//!
//! A single [`tokio::sync::Mutex`] guards the session. It is held for the whole
//! check → login → read sequence, login request included, so concurrent callers
//! that find a stale token queue behind one login instead of each sending their
//! own. It is never held while a regular API request is in flight.

use crate::application::config::Config;
use crate::error::{AppError, AuthError};
use crate::model::auth::{LoginRequest, LoginResponse, seconds};
use crate::model::http::login_url;
use chrono::{DateTime, Duration, Utc};
use reqwest::Client;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

/// Authenticated session returned by the login endpoint
///
/// Token and organization always come together; a session is replaced as a
/// whole on every successful login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Bearer token
    pub token: String,
    /// Organization label sent in the organization header
    pub organization: String,
    /// When the login that produced this session completed
    pub issued_at: DateTime<Utc>,
    /// Nominal expiry, before skew
    pub expires_at: DateTime<Utc>,
}

impl Session {
    /// Creates a session issued at `issued_at` and valid for `validity`
    pub fn new(
        token: String,
        organization: String,
        issued_at: DateTime<Utc>,
        validity: Duration,
    ) -> Self {
        Self {
            token,
            organization,
            issued_at,
            expires_at: issued_at + validity,
        }
    }

    /// Checks whether the token can still be used at `now`
    ///
    /// Valid iff `issued_at <= now < expires_at - skew`.
    #[must_use]
    pub fn is_valid_at(&self, now: DateTime<Utc>, skew: Duration) -> bool {
        now >= self.issued_at && now < self.expires_at - skew
    }

    /// Checks whether the token can still be used now
    #[must_use]
    pub fn is_valid(&self, skew: Duration) -> bool {
        self.is_valid_at(Utc::now(), skew)
    }

    /// Seconds left before the nominal expiry; negative once expired
    #[must_use]
    pub fn seconds_until_expiry(&self) -> i64 {
        (self.expires_at - Utc::now()).num_seconds()
    }
}

#[derive(Default)]
struct AuthState {
    session: Option<Session>,
    organization_override: Option<String>,
}

impl AuthState {
    // Copy handed to a request, with the organization override applied.
    fn snapshot(&self, session: &Session) -> Session {
        match &self.organization_override {
            Some(org) => Session {
                organization: org.clone(),
                ..session.clone()
            },
            None => session.clone(),
        }
    }
}

/// Authentication manager for the Maestro API
pub struct Auth {
    config: Arc<Config>,
    client: Client,
    state: Mutex<AuthState>,
}

impl Auth {
    /// Creates a new Auth instance without logging in
    ///
    /// # Arguments
    /// * `config` - Configuration containing credentials and API settings
    /// * `client` - HTTP client used for the login call; its timeout applies
    pub fn new(config: Arc<Config>, client: Client) -> Self {
        Self {
            config,
            client,
            state: Mutex::new(AuthState::default()),
        }
    }

    fn skew(&self) -> Duration {
        seconds(self.config.session.token_skew)
    }

    fn validity(&self) -> Duration {
        seconds(self.config.session.token_validity)
    }

    /// Returns a session whose token is valid, logging in first if needed
    ///
    /// The lock is held across the login call, so callers that arrive while a
    /// login is running wait for it and then reuse its token.
    pub async fn get_session(&self) -> Result<Session, AppError> {
        let mut state = self.state.lock().await;

        let cached = state
            .session
            .as_ref()
            .filter(|sess| sess.is_valid(self.skew()))
            .cloned();

        let session = match cached {
            Some(sess) => sess,
            None => {
                if state.session.is_some() {
                    debug!("Cached token expired, logging in again");
                } else {
                    info!("No active session, logging in");
                }
                self.login_locked(&mut state).await?
            }
        };

        Ok(state.snapshot(&session))
    }

    /// Performs a login unconditionally and replaces the cached session
    ///
    /// On failure the previous session, if any, is left untouched.
    pub async fn login(&self) -> Result<Session, AppError> {
        let mut state = self.state.lock().await;
        let session = self.login_locked(&mut state).await?;
        Ok(state.snapshot(&session))
    }

    /// Replaces a token the server rejected with a fresh one
    ///
    /// If another caller already replaced `rejected_token` while this one waited
    /// for the lock, the newer session is reused instead of logging in again.
    pub async fn refresh_after_rejection(&self, rejected_token: &str) -> Result<Session, AppError> {
        let mut state = self.state.lock().await;

        if let Some(sess) = &state.session {
            if sess.token != rejected_token && sess.is_valid(self.skew()) {
                debug!("Rejected token already replaced by a concurrent login");
                let sess = sess.clone();
                return Ok(state.snapshot(&sess));
            }
        }

        warn!("Token rejected by the server, forcing a new login");
        let session = self.login_locked(&mut state).await?;
        Ok(state.snapshot(&session))
    }

    // Caller holds the lock for the whole exchange.
    async fn login_locked(&self, state: &mut AuthState) -> Result<Session, AppError> {
        let url = login_url(self.config.base_url());
        let body = LoginRequest {
            login: &self.config.credentials.login,
            key: &self.config.credentials.key,
        };

        debug!("Sending login request to: {}", url);

        let response = self.client.post(&url).json(&body).send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            error!("Login failed with status {}: {}", status, text);
            return Err(AuthError::Rejected {
                status: status.as_u16(),
                body: text,
            }
            .into());
        }

        let session = LoginResponse::parse(&text)
            .into_session(Utc::now(), self.validity(), &text)
            .inspect_err(|_| error!("Login response missing accessToken or organizationLabel"))?;

        state.session = Some(session.clone());

        info!("✓ Login successful, organization: {}", session.organization);
        Ok(session)
    }

    /// Whether a cached token exists and is still valid
    pub async fn is_valid(&self) -> bool {
        let state = self.state.lock().await;
        state
            .session
            .as_ref()
            .is_some_and(|sess| sess.is_valid(self.skew()))
    }

    /// Cached session, without triggering a login
    ///
    /// The organization override, if any, is applied.
    pub async fn current_session(&self) -> Option<Session> {
        let state = self.state.lock().await;
        state.session.as_ref().map(|sess| state.snapshot(sess))
    }

    /// Sends `organization` instead of the login organization on every request
    pub async fn set_organization(&self, organization: impl Into<String>) {
        let organization = organization.into();
        info!("Overriding organization with: {}", organization);
        let mut state = self.state.lock().await;
        state.organization_override = Some(organization);
    }

    /// Goes back to the organization returned by the login endpoint
    pub async fn clear_organization_override(&self) {
        let mut state = self.state.lock().await;
        state.organization_override = None;
    }

    /// Drops the cached session; the next call logs in again
    pub async fn logout(&self) {
        info!("Logging out");

        let mut state = self.state.lock().await;
        state.session = None;

        info!("✓ Logged out successfully");
    }
}
