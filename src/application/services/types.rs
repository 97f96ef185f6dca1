/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::error::AppError;
use crate::model::request::{MultipartForm, Query};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::Path;

/// Paging and filter arguments of the `list` routes
///
/// Unset `page` and `size` fall back to the route default (`page=1`, `size=50`,
/// or `size=100` for datapool items). Filters are appended after them; `null`
/// filter values are dropped.
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct ListOptions {
    /// Page number, starting at 1
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Page size
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    /// Extra querystring filters
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub filters: Map<String, Value>,
}

impl ListOptions {
    /// Options with every value left to the route default
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the page number
    #[must_use]
    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Sets the page size
    #[must_use]
    pub fn size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }

    /// Adds a filter, such as `state=RUNNING`
    #[must_use]
    pub fn filter(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filters.insert(key.into(), value.into());
        self
    }

    /// Shorthand for the `label` filter
    #[must_use]
    pub fn label(self, label: impl Into<String>) -> Self {
        self.filter("label", label.into())
    }

    /// Query with `page` and `size` always present
    pub fn paged_query(&self, default_size: u32) -> Query {
        let mut query = Query::new()
            .param("page", self.page.unwrap_or(1))
            .param("size", self.size.unwrap_or(default_size));
        query.extend_json(&self.filters);
        query
    }

    /// Query with only what the caller set
    pub fn filter_query(&self) -> Query {
        let mut query = Query::new()
            .param_opt("page", self.page)
            .param_opt("size", self.size);
        query.extend_json(&self.filters);
        query
    }
}

/// Body of `POST /api/v2/task`
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    /// Label of the automation to run
    pub automation_label: String,
    /// Task parameters
    pub data: Value,
}

impl NewTask {
    /// Creates a task body for `automation_label` with `data` as parameters
    pub fn new(automation_label: impl Into<String>, data: Value) -> Self {
        Self {
            automation_label: automation_label.into(),
            data,
        }
    }
}

/// Body of `POST /maestro/api/logs`
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
pub struct NewLog {
    /// Log label
    pub label: String,
    /// Log message
    pub message: String,
    /// Severity, `INFO` unless set
    pub level: String,
    /// Any other field the server accepts
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl NewLog {
    /// Creates an `INFO` entry
    pub fn new(label: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            message: message.into(),
            level: "INFO".to_string(),
            extra: Map::new(),
        }
    }

    /// Sets the severity
    #[must_use]
    pub fn level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    /// Adds an extra field
    #[must_use]
    pub fn field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// Body of `POST /api/v2/bot`
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
pub struct NewBot {
    /// Bot label
    pub label: String,
    /// Source repository, left out when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository: Option<String>,
    /// Any other field the server accepts
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl NewBot {
    /// Creates a bot body with only a label
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            repository: None,
            extra: Map::new(),
        }
    }

    /// Sets the repository
    #[must_use]
    pub fn repository(mut self, repository: impl Into<String>) -> Self {
        self.repository = Some(repository.into());
        self
    }

    /// Adds an extra field
    #[must_use]
    pub fn field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// Body of `POST /maestro/api/credentials`
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
pub struct NewCredential {
    /// Credential label
    pub label: String,
    /// Secret values keyed by name
    pub values: Value,
    /// Any other field the server accepts
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl NewCredential {
    /// Creates a credential body
    pub fn new(label: impl Into<String>, values: Value) -> Self {
        Self {
            label: label.into(),
            values,
            extra: Map::new(),
        }
    }

    /// Adds an extra field
    #[must_use]
    pub fn field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// File and metadata sent to `POST /maestro/api/artifacts`
///
/// Metadata travels as text fields of the same multipart form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactUpload {
    /// Form field holding the file, `file` unless set
    pub file_field: String,
    /// File name reported to the server
    pub file_name: String,
    /// MIME type of the file
    pub content_type: Option<String>,
    /// File contents
    pub bytes: Vec<u8>,
    /// Extra text fields
    pub meta: Vec<(String, String)>,
}

impl ArtifactUpload {
    /// Creates an upload of `bytes` named `file_name`
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            file_field: "file".to_string(),
            file_name: file_name.into(),
            content_type: None,
            bytes: bytes.into(),
            meta: Vec::new(),
        }
    }

    /// Reads the file at `path` into an upload named after its last component
    ///
    /// # Errors
    /// [`AppError::Io`] when the file cannot be read.
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "file".to_string());
        Ok(Self::new(file_name, bytes))
    }

    /// Changes the form field holding the file
    #[must_use]
    pub fn file_field(mut self, field: impl Into<String>) -> Self {
        self.file_field = field.into();
        self
    }

    /// Sets the MIME type
    #[must_use]
    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Adds a metadata field
    #[must_use]
    pub fn meta(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.meta.push((key.into(), value.into()));
        self
    }

    /// Builds the multipart form, metadata first
    pub fn into_form(self) -> MultipartForm {
        let form = self
            .meta
            .into_iter()
            .fold(MultipartForm::new(), |form, (k, v)| form.text(k, v));
        form.file(self.file_field, self.file_name, self.content_type, self.bytes)
    }
}

/// Serializes a request body
pub(crate) fn to_body<T: Serialize>(body: &T) -> Result<Value, AppError> {
    Ok(serde_json::to_value(body)?)
}
