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
use std::fmt::Display;

/// Error report routes under `/maestro/api/errors`
pub struct ErrorsApi<'a> {
    transport: &'a dyn MaestroTransport,
}

impl<'a> ErrorsApi<'a> {
    /// Binds the facade to a transport
    pub fn new(transport: &'a dyn MaestroTransport) -> Self {
        Self { transport }
    }

    /// `GET /maestro/api/errors`
    pub async fn list(&self, options: &ListOptions) -> Result<ResponseEnvelope, AppError> {
        let spec = RequestSpec::get("/maestro/api/errors")
            .with_query(options.paged_query(DEFAULT_PAGE_SIZE));
        self.transport.execute(spec).await
    }

    /// `GET /maestro/api/errors/{id}`
    pub async fn get(&self, error_id: impl Display) -> Result<ResponseEnvelope, AppError> {
        self.transport
            .execute(RequestSpec::get(format!("/maestro/api/errors/{error_id}")))
            .await
    }

    /// `DELETE /maestro/api/errors/{id}`
    pub async fn delete(&self, error_id: impl Display) -> Result<ResponseEnvelope, AppError> {
        self.transport
            .execute(RequestSpec::delete(format!("/maestro/api/errors/{error_id}")))
            .await
    }
}
