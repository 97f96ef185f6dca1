/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Uniform wrapper around every HTTP response
//!
//! Success and HTTP-level failure travel through the same [`ResponseEnvelope`];
//! callers inspect `ok` and `status_code`.

use crate::error::AppError;
use reqwest::Response;
use reqwest::header::{CONTENT_TYPE, HeaderMap};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Decoded response body
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseData {
    /// Body left unread; see [`ResponseEnvelope::into_raw`]
    Empty,
    /// Parsed JSON; an empty object when the body was not valid JSON
    Json(Value),
    /// Text body
    Text(String),
    /// Any other body
    Bytes(Vec<u8>),
}

impl ResponseData {
    /// Decodes a body according to its content type
    ///
    /// JSON content types parse to a value and fall back to an empty object on
    /// failure, `text/*` decodes to a string, anything else stays bytes.
    pub fn decode(content_type: &str, body: &[u8]) -> Self {
        let content_type = content_type.to_ascii_lowercase();
        if content_type.contains("application/json") {
            ResponseData::Json(
                serde_json::from_slice(body).unwrap_or_else(|_| Value::Object(Map::new())),
            )
        } else if content_type.contains("text/") {
            ResponseData::Text(String::from_utf8_lossy(body).into_owned())
        } else {
            ResponseData::Bytes(body.to_vec())
        }
    }
}

/// Normalized view of an HTTP response
#[derive(Debug)]
pub struct ResponseEnvelope {
    /// True for 2xx statuses
    pub ok: bool,
    /// HTTP status code
    pub status_code: u16,
    /// Final URL, after redirects
    pub url: String,
    /// Response headers, names lowercased and repeated values joined with `", "`
    pub headers: HashMap<String, String>,
    /// Decoded body
    pub data: ResponseData,
    raw: Option<Response>,
}

impl ResponseEnvelope {
    /// Creates an envelope from already decoded parts
    pub fn new(
        status_code: u16,
        url: impl Into<String>,
        headers: HashMap<String, String>,
        data: ResponseData,
    ) -> Self {
        Self {
            ok: (200..300).contains(&status_code),
            status_code,
            url: url.into(),
            headers,
            data,
            raw: None,
        }
    }

    /// Builds an envelope from a `reqwest` response
    ///
    /// With `stream` set the body is not read: `data` is [`ResponseData::Empty`]
    /// and the response is kept for [`ResponseEnvelope::into_raw`].
    ///
    /// # Errors
    /// Transport failures while reading the body.
    pub async fn from_response(response: Response, stream: bool) -> Result<Self, AppError> {
        let status_code = response.status().as_u16();
        let url = response.url().to_string();
        let headers = header_map(response.headers());

        if stream {
            let mut envelope = Self::new(status_code, url, headers, ResponseData::Empty);
            envelope.raw = Some(response);
            return Ok(envelope);
        }

        let content_type = headers
            .get(CONTENT_TYPE.as_str())
            .cloned()
            .unwrap_or_default();
        let body = response.bytes().await?;
        let data = ResponseData::decode(&content_type, &body);
        Ok(Self::new(status_code, url, headers, data))
    }

    /// JSON body, if the response was JSON
    pub fn json(&self) -> Option<&Value> {
        match &self.data {
            ResponseData::Json(v) => Some(v),
            _ => None,
        }
    }

    /// Text body, if the response was text
    pub fn text(&self) -> Option<&str> {
        match &self.data {
            ResponseData::Text(t) => Some(t),
            _ => None,
        }
    }

    /// Raw body, if the response was neither JSON nor text
    pub fn bytes(&self) -> Option<&[u8]> {
        match &self.data {
            ResponseData::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// Maps the JSON body onto `T`
    ///
    /// # Errors
    /// [`AppError::Deserialization`] when the body is not JSON or does not fit `T`.
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T, AppError> {
        let value = self.json().ok_or_else(|| {
            AppError::Deserialization(format!(
                "expected a JSON body from {} (status {})",
                self.url, self.status_code
            ))
        })?;
        serde_json::from_value(value.clone()).map_err(|e| AppError::Deserialization(e.to_string()))
    }

    /// Header value, looked up case-insensitively
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// Underlying response of a streaming call
    pub fn into_raw(self) -> Option<Response> {
        self.raw
    }
}

/// Flattens response headers, joining repeated names with `", "`
///
/// Values that are not valid UTF-8 are converted lossily.
fn header_map(headers: &HeaderMap) -> HashMap<String, String> {
    let mut map: HashMap<String, String> = HashMap::new();
    for (name, value) in headers {
        let value = String::from_utf8_lossy(value.as_bytes());
        map.entry(name.as_str().to_string())
            .and_modify(|joined| {
                joined.push_str(", ");
                joined.push_str(&value);
            })
            .or_insert_with(|| value.into_owned());
    }
    map
}
