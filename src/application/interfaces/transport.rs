use crate::error::AppError;
use crate::model::request::RequestSpec;
use crate::model::response::ResponseEnvelope;
use async_trait::async_trait;

/// Anything able to run a [`RequestSpec`] through the authenticated pipeline
///
/// [`crate::application::client::Client`] is the production implementation;
/// resource facades only ever see this trait.
#[async_trait]
pub trait MaestroTransport: Send + Sync {
    /// Executes one request
    ///
    /// HTTP-level failures come back as an envelope with `ok == false`; only
    /// authentication and transport failures are errors.
    async fn execute(&self, spec: RequestSpec) -> Result<ResponseEnvelope, AppError>;
}
