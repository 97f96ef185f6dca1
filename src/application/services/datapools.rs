/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Datapool routes under `/maestro/api/datapools`
//!
//! Items are addressed by the datapool label and the item id.

use crate::application::interfaces::MaestroTransport;
use crate::application::services::types::ListOptions;
use crate::constants::{DEFAULT_DATAPOOL_PAGE_SIZE, DEFAULT_PAGE_SIZE};
use crate::error::AppError;
use crate::model::request::RequestSpec;
use crate::model::response::ResponseEnvelope;
use serde_json::Value;
use std::fmt::Display;

/// Datapool operations
pub struct DatapoolsApi<'a> {
    transport: &'a dyn MaestroTransport,
}

impl<'a> DatapoolsApi<'a> {
    /// Binds the facade to a transport
    pub fn new(transport: &'a dyn MaestroTransport) -> Self {
        Self { transport }
    }

    /// `GET /maestro/api/datapools`
    pub async fn list(&self, options: &ListOptions) -> Result<ResponseEnvelope, AppError> {
        let spec = RequestSpec::get("/maestro/api/datapools")
            .with_query(options.paged_query(DEFAULT_PAGE_SIZE));
        self.transport.execute(spec).await
    }

    /// `GET /maestro/api/datapools/{label}/items`, 100 items per page by default
    pub async fn items(
        &self,
        label: &str,
        options: &ListOptions,
    ) -> Result<ResponseEnvelope, AppError> {
        let spec = RequestSpec::get(format!("/maestro/api/datapools/{label}/items"))
            .with_query(options.paged_query(DEFAULT_DATAPOOL_PAGE_SIZE));
        self.transport.execute(spec).await
    }

    /// `POST /maestro/api/datapools/{label}/items`
    pub async fn add_item(&self, label: &str, item: Value) -> Result<ResponseEnvelope, AppError> {
        let spec = RequestSpec::post(format!("/maestro/api/datapools/{label}/items")).json(item);
        self.transport.execute(spec).await
    }

    /// `PUT /maestro/api/datapools/{label}/items/{id}`
    pub async fn update_item(
        &self,
        label: &str,
        item_id: impl Display,
        fields: Value,
    ) -> Result<ResponseEnvelope, AppError> {
        let spec = RequestSpec::put(format!("/maestro/api/datapools/{label}/items/{item_id}"))
            .json(fields);
        self.transport.execute(spec).await
    }

    /// `DELETE /maestro/api/datapools/{label}/items/{id}`
    pub async fn delete_item(
        &self,
        label: &str,
        item_id: impl Display,
    ) -> Result<ResponseEnvelope, AppError> {
        let spec = RequestSpec::delete(format!("/maestro/api/datapools/{label}/items/{item_id}"));
        self.transport.execute(spec).await
    }
}
