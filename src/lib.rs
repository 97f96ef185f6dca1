/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # Maestro Client
//!
//! Authenticated async client for the BotCity Maestro API.
//!
//! ## Features
//!
//! - Credential login with a cached bearer token and organization label
//! - Transparent re-authentication when the token is about to expire
//! - One retry with a fresh token when a request is answered with 401
//! - A single login shared by concurrent callers that find a stale token
//! - Uniform [`model::response::ResponseEnvelope`] for every response;
//!   4xx/5xx never raise
//! - Facades for tasks, automations, bots, runners, logs, credentials,
//!   datapools, result files, errors, schedules and workspaces
//!
//! ## Configuration
//!
//! | Variable                 | Default                          |
//! |--------------------------|----------------------------------|
//! | `MAESTRO_LOGIN`          | (required)                       |
//! | `MAESTRO_KEY`            | (required)                       |
//! | `MAESTRO_BASE_URL`       | `https://developers.botcity.dev` |
//! | `MAESTRO_TIMEOUT`        | `30`                             |
//! | `MAESTRO_TOKEN_SKEW`     | `10`                             |
//! | `MAESTRO_TOKEN_VALIDITY` | `3600`                           |
//! | `MAESTRO_ORG_HEADER`     | `X-Organization`                 |
//! | `LOGLEVEL`               | `INFO`                           |
//!
//! ## Usage
//!
//! ```ignore
//! use maestro_client::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     setup_logger();
//!     let client = Client::new(Config::new()).await?;
//!
//!     let task = client
//!         .tasks()
//!         .create(&NewTask::new("invoice-bot", json!({"month": "2026-10"})))
//!         .await?;
//!     info!("task created: {}", task.ok);
//!     Ok(())
//! }
//! ```

/// Application layer: client, authentication, configuration and facades
pub mod application;

/// Constants used throughout the library
pub mod constants;

/// Error types
pub mod error;

/// Request and response models
pub mod model;

/// Commonly used types, one import away
pub mod prelude;

/// Environment, logging and id helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
pub fn version() -> &'static str {
    VERSION
}
