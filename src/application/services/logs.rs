/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Log routes under `/maestro/api/logs`

use crate::application::interfaces::MaestroTransport;
use crate::application::services::types::{ListOptions, NewLog, to_body};
use crate::constants::DEFAULT_PAGE_SIZE;
use crate::error::AppError;
use crate::model::request::RequestSpec;
use crate::model::response::ResponseEnvelope;
use std::fmt::Display;

/// Log operations
pub struct LogsApi<'a> {
    transport: &'a dyn MaestroTransport,
}

impl<'a> LogsApi<'a> {
    /// Binds the facade to a transport
    pub fn new(transport: &'a dyn MaestroTransport) -> Self {
        Self { transport }
    }

    /// `POST /maestro/api/logs`
    pub async fn create(&self, entry: &NewLog) -> Result<ResponseEnvelope, AppError> {
        let spec = RequestSpec::post("/maestro/api/logs").json(to_body(entry)?);
        self.transport.execute(spec).await
    }

    /// `GET /maestro/api/logs`
    pub async fn list(&self, options: &ListOptions) -> Result<ResponseEnvelope, AppError> {
        let spec = RequestSpec::get("/maestro/api/logs")
            .with_query(options.paged_query(DEFAULT_PAGE_SIZE));
        self.transport.execute(spec).await
    }

    /// `GET /maestro/api/logs/{id}`
    pub async fn get(&self, log_id: impl Display) -> Result<ResponseEnvelope, AppError> {
        self.transport
            .execute(RequestSpec::get(format!("/maestro/api/logs/{log_id}")))
            .await
    }

    /// `DELETE /maestro/api/logs/{id}`
    pub async fn delete(&self, log_id: impl Display) -> Result<ResponseEnvelope, AppError> {
        self.transport
            .execute(RequestSpec::delete(format!("/maestro/api/logs/{log_id}")))
            .await
    }

    /// `GET /maestro/api/logs/{id}/download`
    ///
    /// The body is left unread; take it with
    /// [`ResponseEnvelope::into_raw`] and consume it in chunks.
    pub async fn download(&self, log_id: impl Display) -> Result<ResponseEnvelope, AppError> {
        let spec = RequestSpec::get(format!("/maestro/api/logs/{log_id}/download")).stream(true);
        self.transport.execute(spec).await
    }
}
