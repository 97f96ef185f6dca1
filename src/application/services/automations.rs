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

/// Automation routes, served as `activity` by the API
pub struct AutomationsApi<'a> {
    transport: &'a dyn MaestroTransport,
}

impl<'a> AutomationsApi<'a> {
    /// Binds the facade to a transport
    pub fn new(transport: &'a dyn MaestroTransport) -> Self {
        Self { transport }
    }

    /// `GET /api/v2/activity`, filtered by `label` when set
    pub async fn list(&self, options: &ListOptions) -> Result<ResponseEnvelope, AppError> {
        let spec =
            RequestSpec::get("/api/v2/activity").with_query(options.paged_query(DEFAULT_PAGE_SIZE));
        self.transport.execute(spec).await
    }

    /// `GET /api/v2/activity/{label}`
    pub async fn get(&self, automation_label: &str) -> Result<ResponseEnvelope, AppError> {
        self.transport
            .execute(RequestSpec::get(format!("/api/v2/activity/{automation_label}")))
            .await
    }
}
