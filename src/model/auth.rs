/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::application::auth::Session;
use crate::error::AuthError;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Converts configured or server-reported seconds into a [`Duration`]
///
/// Values are capped at `u32::MAX` seconds so date arithmetic cannot overflow.
pub fn seconds(secs: u64) -> Duration {
    Duration::seconds(i64::from(u32::try_from(secs).unwrap_or(u32::MAX)))
}

/// Body of the login request
#[derive(Clone, Serialize)]
pub struct LoginRequest<'a> {
    /// Maestro login
    pub login: &'a str,
    /// Maestro key
    pub key: &'a str,
}

/// Response from the login endpoint
///
/// Every field is optional on the wire; [`LoginResponse::into_session`] decides
/// whether the payload is usable.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// Bearer token
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    /// Organization label sent in the organization header
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_label: Option<String>,
    /// Token lifetime in seconds, when the server reports one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<u64>,
}

impl LoginResponse {
    /// Parses a login response body
    ///
    /// Each field is read on its own: a token or organization that is not a
    /// string counts as missing, and an `expiresIn` that is not a non-negative
    /// integer is ignored. Bodies that are not JSON decode as an empty response,
    /// which [`LoginResponse::into_session`] then rejects.
    pub fn parse(body: &str) -> Self {
        let value: Value = serde_json::from_str(body).unwrap_or(Value::Null);
        let text = |key: &str| value.get(key).and_then(Value::as_str).map(str::to_string);

        Self {
            access_token: text("accessToken"),
            organization_label: text("organizationLabel"),
            expires_in: value.get("expiresIn").and_then(Value::as_u64),
        }
    }

    /// Converts the response into a [`Session`] issued at `issued_at`
    ///
    /// A server-reported `expiresIn` wins over `default_validity`.
    ///
    /// # Errors
    /// [`AuthError::MalformedPayload`] when the token or the organization is
    /// missing or empty. `raw_body` is carried in the error for diagnostics.
    pub fn into_session(
        self,
        issued_at: DateTime<Utc>,
        default_validity: Duration,
        raw_body: &str,
    ) -> Result<Session, AuthError> {
        let token = self.access_token.filter(|t| !t.is_empty());
        let organization = self.organization_label.filter(|o| !o.is_empty());

        match (token, organization) {
            (Some(token), Some(organization)) => {
                let validity = self.expires_in.map(seconds).unwrap_or(default_validity);
                Ok(Session::new(token, organization, issued_at, validity))
            }
            _ => Err(AuthError::MalformedPayload {
                body: raw_body.to_string(),
            }),
        }
    }
}
