/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Bot routes under `/api/v2/bot`

use crate::application::interfaces::MaestroTransport;
use crate::application::services::types::{ListOptions, NewBot, to_body};
use crate::constants::DEFAULT_PAGE_SIZE;
use crate::error::AppError;
use crate::model::request::RequestSpec;
use crate::model::response::ResponseEnvelope;
use serde_json::Value;
use std::fmt::Display;

/// Bot operations
pub struct BotsApi<'a> {
    transport: &'a dyn MaestroTransport,
}

impl<'a> BotsApi<'a> {
    /// Binds the facade to a transport
    pub fn new(transport: &'a dyn MaestroTransport) -> Self {
        Self { transport }
    }

    /// `GET /api/v2/bot`
    pub async fn list(&self, options: &ListOptions) -> Result<ResponseEnvelope, AppError> {
        let spec =
            RequestSpec::get("/api/v2/bot").with_query(options.paged_query(DEFAULT_PAGE_SIZE));
        self.transport.execute(spec).await
    }

    /// `GET /api/v2/bot/{id}/version/{version}`
    pub async fn get(
        &self,
        bot_id: impl Display,
        version: impl Display,
    ) -> Result<ResponseEnvelope, AppError> {
        self.transport
            .execute(RequestSpec::get(format!("/api/v2/bot/{bot_id}/version/{version}")))
            .await
    }

    /// `POST /api/v2/bot`
    pub async fn create(&self, bot: &NewBot) -> Result<ResponseEnvelope, AppError> {
        let spec = RequestSpec::post("/api/v2/bot").json(to_body(bot)?);
        self.transport.execute(spec).await
    }

    /// `PUT /api/v2/bot/{id}` with `fields` as the body
    pub async fn update(
        &self,
        bot_id: impl Display,
        fields: Value,
    ) -> Result<ResponseEnvelope, AppError> {
        self.transport
            .execute(RequestSpec::put(format!("/api/v2/bot/{bot_id}")).json(fields))
            .await
    }

    /// `POST /api/v2/bot/{id}/release` with `fields` as the body
    pub async fn release(
        &self,
        bot_id: impl Display,
        fields: Value,
    ) -> Result<ResponseEnvelope, AppError> {
        self.transport
            .execute(RequestSpec::post(format!("/api/v2/bot/{bot_id}/release")).json(fields))
            .await
    }
}
