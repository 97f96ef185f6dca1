/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::application::interfaces::MaestroTransport;
use crate::application::services::types::ListOptions;
use crate::constants::DEFAULT_PAGE_SIZE;
use crate::error::AppError;
use crate::model::request::RequestSpec;
use crate::model::response::ResponseEnvelope;
use serde_json::Value;
use std::fmt::Display;

/// Schedule routes under `/maestro/api/schedules`
///
/// Schedule bodies are passed through as given.
pub struct SchedulesApi<'a> {
    transport: &'a dyn MaestroTransport,
}

impl<'a> SchedulesApi<'a> {
    /// Binds the facade to a transport
    pub fn new(transport: &'a dyn MaestroTransport) -> Self {
        Self { transport }
    }

    /// `GET /maestro/api/schedules`
    pub async fn list(&self, options: &ListOptions) -> Result<ResponseEnvelope, AppError> {
        let spec = RequestSpec::get("/maestro/api/schedules")
            .with_query(options.paged_query(DEFAULT_PAGE_SIZE));
        self.transport.execute(spec).await
    }

    /// `GET /maestro/api/schedules/{id}`
    pub async fn get(&self, schedule_id: impl Display) -> Result<ResponseEnvelope, AppError> {
        self.transport
            .execute(RequestSpec::get(format!("/maestro/api/schedules/{schedule_id}")))
            .await
    }

    /// `POST /maestro/api/schedules`
    pub async fn create(&self, fields: Value) -> Result<ResponseEnvelope, AppError> {
        self.transport
            .execute(RequestSpec::post("/maestro/api/schedules").json(fields))
            .await
    }

    /// `PUT /maestro/api/schedules/{id}`
    pub async fn update(
        &self,
        schedule_id: impl Display,
        fields: Value,
    ) -> Result<ResponseEnvelope, AppError> {
        let spec = RequestSpec::put(format!("/maestro/api/schedules/{schedule_id}")).json(fields);
        self.transport.execute(spec).await
    }

    /// `DELETE /maestro/api/schedules/{id}`
    pub async fn delete(&self, schedule_id: impl Display) -> Result<ResponseEnvelope, AppError> {
        self.transport
            .execute(RequestSpec::delete(format!("/maestro/api/schedules/{schedule_id}")))
            .await
    }
}
