/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Request description consumed by the request pipeline
//!
//! A [`RequestSpec`] is built per call and never retained once the call returns.
//! The JSON body and multipart form are variants of one [`Payload`], so a
//! request can never carry both.

use reqwest::Method;
use reqwest::multipart::{Form, Part};
use serde_json::{Map, Value};
use std::fmt::Display;

/// Ordered querystring parameters
///
/// Absent values are dropped when inserted, so they never reach the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    /// Creates an empty query
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a parameter
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Display) -> Self {
        self.push(key, value);
        self
    }

    /// Appends a parameter only when `value` is present
    #[must_use]
    pub fn param_opt<V: Display>(mut self, key: impl Into<String>, value: Option<V>) -> Self {
        if let Some(value) = value {
            self.push(key, value);
        }
        self
    }

    /// Appends a parameter in place
    pub fn push(&mut self, key: impl Into<String>, value: impl Display) {
        self.pairs.push((key.into(), value.to_string()));
    }

    /// Appends every entry of a JSON object
    ///
    /// `null` entries are skipped, strings are sent unquoted, and any other
    /// value is sent as its compact JSON text.
    pub fn extend_json(&mut self, values: &Map<String, Value>) {
        for (key, value) in values {
            match value {
                Value::Null => {}
                Value::String(s) => self.push(key.as_str(), s),
                other => self.push(key.as_str(), other),
            }
        }
    }

    /// True when there is no parameter to send
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Value of the first parameter named `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Parameters in insertion order
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }
}

/// A single part of a multipart form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MultipartPart {
    /// Plain text field
    Text {
        /// Field name
        name: String,
        /// Field value
        value: String,
    },
    /// File field
    File {
        /// Field name expected by the API, commonly `file`
        name: String,
        /// File name reported to the server
        file_name: String,
        /// Optional MIME type, such as `application/pdf`
        content_type: Option<String>,
        /// File contents
        bytes: Vec<u8>,
    },
}

/// Multipart form kept as plain data so it can be sent again on a retry
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultipartForm {
    parts: Vec<MultipartPart>,
}

impl MultipartForm {
    /// Creates an empty form
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a text field
    #[must_use]
    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parts.push(MultipartPart::Text {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    /// Adds a file field
    #[must_use]
    pub fn file(
        mut self,
        name: impl Into<String>,
        file_name: impl Into<String>,
        content_type: Option<String>,
        bytes: impl Into<Vec<u8>>,
    ) -> Self {
        self.parts.push(MultipartPart::File {
            name: name.into(),
            file_name: file_name.into(),
            content_type,
            bytes: bytes.into(),
        });
        self
    }

    /// Parts in insertion order
    pub fn parts(&self) -> &[MultipartPart] {
        &self.parts
    }

    /// Builds a fresh `reqwest` form
    ///
    /// # Errors
    /// Fails when a part carries an unparsable MIME type.
    pub fn to_form(&self) -> Result<Form, reqwest::Error> {
        let mut form = Form::new();
        for part in &self.parts {
            form = match part {
                MultipartPart::Text { name, value } => form.text(name.clone(), value.clone()),
                MultipartPart::File {
                    name,
                    file_name,
                    content_type,
                    bytes,
                } => {
                    let mut file = Part::bytes(bytes.clone()).file_name(file_name.clone());
                    if let Some(ct) = content_type {
                        file = file.mime_str(ct)?;
                    }
                    form.part(name.clone(), file)
                }
            };
        }
        Ok(form)
    }
}

/// Body of a request
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Payload {
    /// No body
    #[default]
    Empty,
    /// JSON body, sent with `Content-Type: application/json`
    Json(Value),
    /// Multipart form; the boundary header is set by the transport
    Multipart(MultipartForm),
}

impl Payload {
    /// True for multipart payloads
    pub fn is_multipart(&self) -> bool {
        matches!(self, Payload::Multipart(_))
    }
}

/// Caller-supplied header change applied on top of the default headers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderOverride {
    /// Set the header, replacing any default
    Set(String, String),
    /// Remove the header, even if it is a default one
    Remove(String),
}

/// Everything the pipeline needs to perform one call
#[derive(Debug, Clone)]
pub struct RequestSpec {
    /// HTTP method
    pub method: Method,
    /// Absolute URL, or a path relative to the base URL
    pub path: String,
    /// Querystring parameters
    pub query: Query,
    /// Request body
    pub payload: Payload,
    /// Header changes applied after the authorization headers
    pub headers: Vec<HeaderOverride>,
    /// Leave the body unread and hand the raw response to the caller
    pub stream: bool,
    /// Re-authenticate and retry once on a 401
    pub retry_on_401: bool,
}

impl RequestSpec {
    /// Creates a request with no query, no body and the 401 retry enabled
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Query::new(),
            payload: Payload::Empty,
            headers: Vec::new(),
            stream: false,
            retry_on_401: true,
        }
    }

    /// Shorthand for a GET request
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// Shorthand for a POST request
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    /// Shorthand for a PUT request
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    /// Shorthand for a PATCH request
    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::PATCH, path)
    }

    /// Shorthand for a DELETE request
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Replaces the query
    #[must_use]
    pub fn with_query(mut self, query: Query) -> Self {
        self.query = query;
        self
    }

    /// Appends a query parameter
    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl Display) -> Self {
        self.query.push(key, value);
        self
    }

    /// Appends a query parameter only when `value` is present
    #[must_use]
    pub fn query_opt<V: Display>(mut self, key: impl Into<String>, value: Option<V>) -> Self {
        self.query = self.query.param_opt(key, value);
        self
    }

    /// Sets a JSON body, replacing any multipart form
    #[must_use]
    pub fn json(mut self, body: Value) -> Self {
        self.payload = Payload::Json(body);
        self
    }

    /// Sets a multipart form, replacing any JSON body
    #[must_use]
    pub fn multipart(mut self, form: MultipartForm) -> Self {
        self.payload = Payload::Multipart(form);
        self
    }

    /// Sets a header, overriding the defaults
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push(HeaderOverride::Set(name.into(), value.into()));
        self
    }

    /// Removes a header, including default ones such as `Content-Type`
    #[must_use]
    pub fn without_header(mut self, name: impl Into<String>) -> Self {
        self.headers.push(HeaderOverride::Remove(name.into()));
        self
    }

    /// Requests a streaming response
    #[must_use]
    pub fn stream(mut self, stream: bool) -> Self {
        self.stream = stream;
        self
    }

    /// Enables or disables the 401 retry
    #[must_use]
    pub fn retry_on_401(mut self, retry: bool) -> Self {
        self.retry_on_401 = retry;
        self
    }
}
