/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Result file routes, served as `artifacts` by the API

use crate::application::interfaces::MaestroTransport;
use crate::application::services::types::{ArtifactUpload, ListOptions};
use crate::constants::DEFAULT_PAGE_SIZE;
use crate::error::AppError;
use crate::model::request::RequestSpec;
use crate::model::response::ResponseEnvelope;
use std::fmt::Display;
use tracing::debug;

/// Result file operations
pub struct ResultFilesApi<'a> {
    transport: &'a dyn MaestroTransport,
}

impl<'a> ResultFilesApi<'a> {
    /// Binds the facade to a transport
    pub fn new(transport: &'a dyn MaestroTransport) -> Self {
        Self { transport }
    }

    /// `GET /maestro/api/artifacts`
    pub async fn list(&self, options: &ListOptions) -> Result<ResponseEnvelope, AppError> {
        let spec = RequestSpec::get("/maestro/api/artifacts")
            .with_query(options.paged_query(DEFAULT_PAGE_SIZE));
        self.transport.execute(spec).await
    }

    /// `GET /maestro/api/artifacts/{id}`
    pub async fn get(&self, artifact_id: impl Display) -> Result<ResponseEnvelope, AppError> {
        self.transport
            .execute(RequestSpec::get(format!("/maestro/api/artifacts/{artifact_id}")))
            .await
    }

    /// `GET /maestro/api/artifacts/{id}/download`, as a streaming response
    pub async fn download(&self, artifact_id: impl Display) -> Result<ResponseEnvelope, AppError> {
        let spec =
            RequestSpec::get(format!("/maestro/api/artifacts/{artifact_id}/download")).stream(true);
        self.transport.execute(spec).await
    }

    /// `POST /maestro/api/artifacts` as a multipart form
    ///
    /// The JSON `Content-Type` default is not sent; the transport sets the
    /// multipart boundary header.
    pub async fn upload(&self, upload: ArtifactUpload) -> Result<ResponseEnvelope, AppError> {
        debug!(
            "Uploading {} ({} bytes)",
            upload.file_name,
            upload.bytes.len()
        );
        let spec = RequestSpec::post("/maestro/api/artifacts").multipart(upload.into_form());
        self.transport.execute(spec).await
    }

    /// `DELETE /maestro/api/artifacts/{id}`
    pub async fn delete(&self, artifact_id: impl Display) -> Result<ResponseEnvelope, AppError> {
        self.transport
            .execute(RequestSpec::delete(format!("/maestro/api/artifacts/{artifact_id}")))
            .await
    }
}
