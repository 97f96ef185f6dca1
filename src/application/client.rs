/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Client for the BotCity Maestro API
//!
//! This module provides the entry point of the crate. The client handles:
//! - Automatic login and token caching
//! - Re-authentication when the cached token expires
//! - A single retry with a fresh token when the server answers 401
//! - Resource helpers grouped by API resource
//!
//! # Example
//! ```ignore
//! use maestro_client::prelude::*;
//!
//! let client = Client::new(Config::new()).await?;
//!
//! // Resource helpers
//! let tasks = client.tasks().list(&ListOptions::new().filter("state", "RUNNING")).await?;
//!
//! // Arbitrary routes
//! let response = client.execute(RequestSpec::get("/maestro/api/runners")).await?;
//! if !response.ok {
//!     warn!("runners failed with status {}", response.status_code);
//! }
//! ```

use crate::application::auth::{Auth, Session};
use crate::application::config::Config;
use crate::application::interfaces::MaestroTransport;
use crate::application::services::{
    AutomationsApi, BotsApi, CredentialsApi, DatapoolsApi, ErrorsApi, LogsApi, ResultFilesApi,
    RunnersApi, SchedulesApi, TasksApi, WorkspacesApi,
};
use crate::constants::USER_AGENT;
use crate::error::AppError;
use crate::model::http::{build_headers, make_http_request, normalize_url};
use crate::model::request::RequestSpec;
use crate::model::response::ResponseEnvelope;
use crate::utils::id::request_id;
use async_trait::async_trait;
use reqwest::{Client as HttpInternalClient, Response, StatusCode};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

/// Maestro API client with automatic authentication
///
/// Cheap to share behind an [`Arc`]; every method takes `&self` and the cached
/// session is guarded internally.
pub struct Client {
    auth: Arc<Auth>,
    http_client: HttpInternalClient,
    config: Arc<Config>,
}

impl Client {
    /// Creates a new client and performs the initial login
    ///
    /// # Returns
    /// * `Ok(Client)` - Authenticated client ready to use
    /// * `Err(AppError)` - If the configuration is invalid or the login fails
    pub async fn new(config: Config) -> Result<Self, AppError> {
        let client = Self::new_lazy(config)?;
        client.auth.login().await?;
        Ok(client)
    }

    /// Creates a new client without logging in
    ///
    /// The login happens on the first request.
    pub fn new_lazy(config: Config) -> Result<Self, AppError> {
        config.validate()?;
        let config = Arc::new(config);

        let http_client = HttpInternalClient::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout())
            .build()?;

        let auth = Arc::new(Auth::new(config.clone(), http_client.clone()));

        Ok(Self {
            auth,
            http_client,
            config,
        })
    }

    /// Runs a request through the authenticated pipeline
    ///
    /// 1. resolves the URL against the base URL;
    /// 2. takes a valid session, logging in under the session lock if needed;
    /// 3. dispatches with the lock released;
    /// 4. on 401, when `spec.retry_on_401` is set, replaces the token and
    ///    dispatches exactly once more; a second 401 is returned as is;
    /// 5. decodes the body into a [`ResponseEnvelope`].
    ///
    /// # Errors
    /// Only authentication failures and transport failures (timeouts included).
    /// 4xx/5xx responses are returned as envelopes with `ok == false`.
    pub async fn execute(&self, spec: RequestSpec) -> Result<ResponseEnvelope, AppError> {
        let url = normalize_url(self.config.base_url(), &spec.path);
        let request_id = request_id();
        debug!(request_id = %request_id, "{} {}", spec.method, url);

        let session = self.auth.get_session().await?;
        let mut response = self.dispatch(&spec, &url, &session).await?;

        if response.status() == StatusCode::UNAUTHORIZED && spec.retry_on_401 {
            warn!(request_id = %request_id, "Unauthorized, re-authenticating and retrying once");
            let session = self.auth.refresh_after_rejection(&session.token).await?;
            response = self.dispatch(&spec, &url, &session).await?;
            if response.status() == StatusCode::UNAUTHORIZED {
                warn!(request_id = %request_id, "Still unauthorized after re-authentication");
            }
        }

        debug!(request_id = %request_id, "Response status: {}", response.status());
        ResponseEnvelope::from_response(response, spec.stream).await
    }

    async fn dispatch(
        &self,
        spec: &RequestSpec,
        url: &str,
        session: &Session,
    ) -> Result<Response, AppError> {
        let headers = build_headers(
            session,
            &self.config.session.organization_header,
            &spec.payload,
            &spec.headers,
        )?;
        make_http_request(&self.http_client, spec, url, headers).await
    }

    /// Makes a GET request
    pub async fn get(&self, path: &str) -> Result<ResponseEnvelope, AppError> {
        self.execute(RequestSpec::get(path)).await
    }

    /// Makes a POST request with a JSON body
    pub async fn post(&self, path: &str, body: Value) -> Result<ResponseEnvelope, AppError> {
        self.execute(RequestSpec::post(path).json(body)).await
    }

    /// Makes a PUT request with a JSON body
    pub async fn put(&self, path: &str, body: Value) -> Result<ResponseEnvelope, AppError> {
        self.execute(RequestSpec::put(path).json(body)).await
    }

    /// Makes a PATCH request with a JSON body
    pub async fn patch(&self, path: &str, body: Value) -> Result<ResponseEnvelope, AppError> {
        self.execute(RequestSpec::patch(path).json(body)).await
    }

    /// Makes a DELETE request
    pub async fn delete(&self, path: &str) -> Result<ResponseEnvelope, AppError> {
        self.execute(RequestSpec::delete(path)).await
    }

    /// Logs in now, replacing any cached session
    ///
    /// On failure the previous session stays in place.
    pub async fn authenticate(&self) -> Result<Session, AppError> {
        self.auth.login().await
    }

    /// Cached session, without logging in
    pub async fn session(&self) -> Option<Session> {
        self.auth.current_session().await
    }

    /// Cached token, if any
    pub async fn token(&self) -> Option<String> {
        self.session().await.map(|s| s.token)
    }

    /// Organization sent with requests, if a session exists
    pub async fn organization(&self) -> Option<String> {
        self.session().await.map(|s| s.organization)
    }

    /// Whether a cached token exists and is still valid
    pub async fn is_authenticated(&self) -> bool {
        self.auth.is_valid().await
    }

    /// Overrides the organization header value without logging in again
    pub async fn set_organization(&self, organization: impl Into<String>) {
        self.auth.set_organization(organization).await;
    }

    /// Goes back to the organization returned at login
    pub async fn clear_organization_override(&self) {
        self.auth.clear_organization_override().await;
    }

    /// Drops the cached session
    pub async fn logout(&self) {
        self.auth.logout().await;
    }

    /// Gets Auth reference
    pub fn auth(&self) -> &Auth {
        &self.auth
    }

    /// Gets the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Task routes
    pub fn tasks(&self) -> TasksApi<'_> {
        TasksApi::new(self)
    }

    /// Automation (activity) routes
    pub fn automations(&self) -> AutomationsApi<'_> {
        AutomationsApi::new(self)
    }

    /// Bot routes
    pub fn bots(&self) -> BotsApi<'_> {
        BotsApi::new(self)
    }

    /// Runner routes
    pub fn runners(&self) -> RunnersApi<'_> {
        RunnersApi::new(self)
    }

    /// Log routes
    pub fn logs(&self) -> LogsApi<'_> {
        LogsApi::new(self)
    }

    /// Credential routes
    pub fn credentials(&self) -> CredentialsApi<'_> {
        CredentialsApi::new(self)
    }

    /// Datapool routes
    pub fn datapools(&self) -> DatapoolsApi<'_> {
        DatapoolsApi::new(self)
    }

    /// Result file (artifact) routes
    pub fn result_files(&self) -> ResultFilesApi<'_> {
        ResultFilesApi::new(self)
    }

    /// Error routes
    pub fn errors(&self) -> ErrorsApi<'_> {
        ErrorsApi::new(self)
    }

    /// Schedule routes
    pub fn schedules(&self) -> SchedulesApi<'_> {
        SchedulesApi::new(self)
    }

    /// Workspace routes
    pub fn workspaces(&self) -> WorkspacesApi<'_> {
        WorkspacesApi::new(self)
    }
}

#[async_trait]
impl MaestroTransport for Client {
    async fn execute(&self, spec: RequestSpec) -> Result<ResponseEnvelope, AppError> {
        Client::execute(self, spec).await
    }
}
