/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Task routes under `/api/v2/task`

use crate::application::interfaces::MaestroTransport;
use crate::application::services::types::{ListOptions, NewTask, to_body};
use crate::error::AppError;
use crate::model::request::RequestSpec;
use crate::model::response::ResponseEnvelope;
use serde_json::{Value, json};
use std::fmt::Display;
use tracing::debug;

/// Task operations
pub struct TasksApi<'a> {
    transport: &'a dyn MaestroTransport,
}

impl<'a> TasksApi<'a> {
    /// Binds the facade to a transport
    pub fn new(transport: &'a dyn MaestroTransport) -> Self {
        Self { transport }
    }

    /// `GET /api/v2/task`
    ///
    /// Unlike the other list routes, no paging default is sent: only the
    /// parameters set in `options` reach the querystring.
    pub async fn list(&self, options: &ListOptions) -> Result<ResponseEnvelope, AppError> {
        let spec = RequestSpec::get("/api/v2/task").with_query(options.filter_query());
        self.transport.execute(spec).await
    }

    /// `POST /api/v2/task`
    pub async fn create(&self, task: &NewTask) -> Result<ResponseEnvelope, AppError> {
        debug!("Creating task for automation {}", task.automation_label);
        let spec = RequestSpec::post("/api/v2/task").json(to_body(task)?);
        self.transport.execute(spec).await
    }

    /// `GET /api/v2/task/{id}`
    pub async fn get(&self, task_id: impl Display) -> Result<ResponseEnvelope, AppError> {
        self.transport
            .execute(RequestSpec::get(format!("/api/v2/task/{task_id}")))
            .await
    }

    /// `POST /api/v2/task/{id}/cancel`
    pub async fn cancel(&self, task_id: impl Display) -> Result<ResponseEnvelope, AppError> {
        self.transport
            .execute(RequestSpec::post(format!("/api/v2/task/{task_id}/cancel")))
            .await
    }

    /// `POST /api/v2/task/{id}/finish`
    ///
    /// `result` is sent as the body; an empty object when absent.
    pub async fn finish(
        &self,
        task_id: impl Display,
        result: Option<Value>,
    ) -> Result<ResponseEnvelope, AppError> {
        let spec = RequestSpec::post(format!("/api/v2/task/{task_id}/finish"))
            .json(result.unwrap_or_else(|| json!({})));
        self.transport.execute(spec).await
    }

    /// `POST /api/v2/task/{id}/restart`
    pub async fn restart(&self, task_id: impl Display) -> Result<ResponseEnvelope, AppError> {
        self.transport
            .execute(RequestSpec::post(format!("/api/v2/task/{task_id}/restart")))
            .await
    }
}
