/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::application::auth::Session;
use crate::constants::{API_PREFIX, LOGIN_PATH, MAESTRO_API_PREFIX};
use crate::error::AppError;
use crate::model::request::{HeaderOverride, Payload, RequestSpec};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, RequestBuilder, Response};
use tracing::debug;

/// Prefixes a relative path may already carry
const KNOWN_PREFIXES: [&str; 2] = [API_PREFIX, MAESTRO_API_PREFIX];

/// Resolves a request path against the base URL
///
/// - absolute `http://` / `https://` URLs are returned verbatim;
/// - a leading slash is added when missing;
/// - `/api/v2` is prepended unless the path already starts with `/api/v2` or
///   `/maestro/api`.
///
/// The function is idempotent: feeding its output back in yields the same URL.
///
/// # Example
/// ```
/// use maestro_client::model::http::normalize_url;
///
/// let base = "https://developers.botcity.dev";
/// assert_eq!(normalize_url(base, "task"), "https://developers.botcity.dev/api/v2/task");
/// assert_eq!(
///     normalize_url(base, "/maestro/api/logs"),
///     "https://developers.botcity.dev/maestro/api/logs"
/// );
/// ```
pub fn normalize_url(base_url: &str, path: &str) -> String {
    if is_absolute(path) {
        return path.to_string();
    }

    let path = if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    };

    let path = if KNOWN_PREFIXES.iter().any(|p| has_prefix(&path, p)) {
        path
    } else {
        format!("{API_PREFIX}{path}")
    };

    format!("{}{}", base_url.trim_end_matches('/'), path)
}

/// URL of the login route
pub fn login_url(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), LOGIN_PATH)
}

fn is_absolute(path: &str) -> bool {
    path.starts_with("http://") || path.starts_with("https://")
}

// `/api/v2` matches `/api/v2`, `/api/v2/task` and `/api/v2?x=1`, not `/api/v20`.
fn has_prefix(path: &str, prefix: &str) -> bool {
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/') || rest.starts_with('?'),
        None => false,
    }
}

/// Builds the headers of an authenticated call
///
/// Defaults are `Authorization: Bearer <token>`, `Content-Type: application/json`
/// (left out for multipart payloads, whose boundary header the transport sets)
/// and `<organization_header>: <organization>`. Caller overrides are applied
/// last and win.
///
/// # Errors
/// [`AppError::InvalidInput`] for header names or values HTTP does not allow.
pub fn build_headers(
    session: &Session,
    organization_header: &str,
    payload: &Payload,
    overrides: &[HeaderOverride],
) -> Result<HeaderMap, AppError> {
    let mut headers = HeaderMap::new();

    let mut bearer = header_value(&format!("Bearer {}", session.token))?;
    bearer.set_sensitive(true);
    headers.insert(AUTHORIZATION, bearer);

    if !payload.is_multipart() {
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    }

    headers.insert(
        header_name(organization_header)?,
        header_value(&session.organization)?,
    );

    for change in overrides {
        match change {
            HeaderOverride::Set(name, value) => {
                headers.insert(header_name(name)?, header_value(value)?);
            }
            HeaderOverride::Remove(name) => {
                headers.remove(header_name(name)?);
            }
        }
    }

    Ok(headers)
}

fn header_name(name: &str) -> Result<HeaderName, AppError> {
    HeaderName::from_bytes(name.as_bytes())
        .map_err(|_| AppError::InvalidInput(format!("invalid header name: {name:?}")))
}

fn header_value(value: &str) -> Result<HeaderValue, AppError> {
    HeaderValue::from_str(value)
        .map_err(|_| AppError::InvalidInput("invalid header value".to_string()))
}

/// Prepares a request without sending it
///
/// The query is only attached when non-empty, and the body is either the JSON
/// value or the multipart form, never both.
///
/// # Errors
/// Transport errors raised while building a multipart form.
pub fn build_request(
    client: &Client,
    spec: &RequestSpec,
    url: &str,
    headers: HeaderMap,
) -> Result<RequestBuilder, AppError> {
    let mut request = client.request(spec.method.clone(), url).headers(headers);

    if !spec.query.is_empty() {
        request = request.query(spec.query.pairs());
    }

    request = match &spec.payload {
        Payload::Empty => request,
        Payload::Json(body) => request.json(body),
        Payload::Multipart(form) => request.multipart(form.to_form()?),
    };

    Ok(request)
}

/// Sends one request and returns the raw response, whatever its status
///
/// No retry happens here; the 401 retry lives in the client pipeline.
///
/// # Errors
/// [`AppError::Network`] for connection, DNS and timeout failures.
pub async fn make_http_request(
    client: &Client,
    spec: &RequestSpec,
    url: &str,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    debug!("{} {}", spec.method, url);

    let response = build_request(client, spec, url, headers)?.send().await?;

    debug!("Response status: {}", response.status());
    Ok(response)
}
