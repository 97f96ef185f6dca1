/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::application::interfaces::MaestroTransport;
use crate::application::services::types::{ListOptions, NewCredential, to_body};
use crate::constants::DEFAULT_PAGE_SIZE;
use crate::error::AppError;
use crate::model::request::RequestSpec;
use crate::model::response::ResponseEnvelope;
use serde_json::Value;
use std::fmt::Display;

/// Credential routes under `/maestro/api/credentials`
pub struct CredentialsApi<'a> {
    transport: &'a dyn MaestroTransport,
}

impl<'a> CredentialsApi<'a> {
    /// Binds the facade to a transport
    pub fn new(transport: &'a dyn MaestroTransport) -> Self {
        Self { transport }
    }

    /// `GET /maestro/api/credentials`
    pub async fn list(&self, options: &ListOptions) -> Result<ResponseEnvelope, AppError> {
        let spec = RequestSpec::get("/maestro/api/credentials")
            .with_query(options.paged_query(DEFAULT_PAGE_SIZE));
        self.transport.execute(spec).await
    }

    /// `GET /maestro/api/credentials/{id}`
    pub async fn get(&self, credential_id: impl Display) -> Result<ResponseEnvelope, AppError> {
        self.transport
            .execute(RequestSpec::get(format!(
                "/maestro/api/credentials/{credential_id}"
            )))
            .await
    }

    /// `POST /maestro/api/credentials`
    pub async fn create(&self, credential: &NewCredential) -> Result<ResponseEnvelope, AppError> {
        let spec = RequestSpec::post("/maestro/api/credentials").json(to_body(credential)?);
        self.transport.execute(spec).await
    }

    /// `PUT /maestro/api/credentials/{id}`
    pub async fn update(
        &self,
        credential_id: impl Display,
        fields: Value,
    ) -> Result<ResponseEnvelope, AppError> {
        let spec =
            RequestSpec::put(format!("/maestro/api/credentials/{credential_id}")).json(fields);
        self.transport.execute(spec).await
    }

    /// `DELETE /maestro/api/credentials/{id}`
    pub async fn delete(&self, credential_id: impl Display) -> Result<ResponseEnvelope, AppError> {
        self.transport
            .execute(RequestSpec::delete(format!(
                "/maestro/api/credentials/{credential_id}"
            )))
            .await
    }

    /// `GET /maestro/api/credentials/{label}/{key}`, a single secret value
    pub async fn get_key(&self, label: &str, key: &str) -> Result<ResponseEnvelope, AppError> {
        self.transport
            .execute(RequestSpec::get(format!("/maestro/api/credentials/{label}/{key}")))
            .await
    }
}
