/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # Maestro Client Prelude
//!
//! Brings the client, its configuration, the request and response models and
//! the facade argument types into scope.
//!
//! ```rust
//! use maestro_client::prelude::*;
//!
//! let config = Config::with_credentials("login", "key").with_timeout(10);
//! assert_eq!(config.rest_api.timeout, 10);
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the Maestro API client
pub use crate::application::config::{Config, Credentials, RestApiConfig, SessionConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Error types of the library
pub use crate::error::{AppError, AuthError, MaestroResult};

// ============================================================================
// CLIENT AND AUTHENTICATION
// ============================================================================

/// Authenticated client
pub use crate::application::client::Client;

/// Session cache
pub use crate::application::auth::{Auth, Session};

/// Transport trait implemented by the client
pub use crate::application::interfaces::MaestroTransport;

// ============================================================================
// RESOURCE FACADES
// ============================================================================

pub use crate::application::services::{
    ArtifactUpload, AutomationsApi, BotsApi, CredentialsApi, DatapoolsApi, ErrorsApi,
    ListOptions, LogsApi, NewBot, NewCredential, NewLog, NewTask, ResultFilesApi, RunnersApi,
    SchedulesApi, TasksApi, WorkspacesApi,
};

// ============================================================================
// REQUEST AND RESPONSE MODELS
// ============================================================================

pub use crate::model::request::{
    HeaderOverride, MultipartForm, MultipartPart, Payload, Query, RequestSpec,
};
pub use crate::model::response::{ResponseData, ResponseEnvelope};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use serde_json::{Value, json};
pub use std::sync::Arc;
pub use tokio;
pub use tracing::{debug, error, info, warn};

/// Re-export chrono for date/time handling
pub use chrono::{DateTime, Utc};

/// Re-export reqwest for custom requests and streaming bodies
pub use reqwest::Method;
