//! Type definitions and helpers for the Slack API.

use super::{auth::*, error::SlackError};
use serde::Deserialize;
use serde_with::{serde_as, NoneAsEmptyString};
use tracing::debug;

/// The base URL of the Slack API.
pub const API_BASE: &str = "https://slack.com/api";

/// A Slack API client against a configurable base URL, holding a connection
/// pool internally as per [reqwest::Client].
pub struct SlackClient {
    base: String,
    http: reqwest::Client,
}

impl SlackClient {
    pub fn new(base: String) -> Self {
        SlackClient {
            base,
            http: reqwest::Client::new(),
        }
    }

    /// Create a GET request to any Slack API endpoint, handling authentication.
    pub(super) fn get<T: ToString>(
        &self,
        path: T,
        token: &SlackAccessToken,
    ) -> reqwest::RequestBuilder {
        let path = path.to_string();
        debug!("GET {}", path);

        self.http
            .get(self.base.to_owned() + &path)
            .header(reqwest::header::AUTHORIZATION, to_auth_header_val(token))
    }
}

/// Slack's API returns a common "untagged" response, representing whether a
/// request was successful.
///
/// ```json
/// {
///     "ok": true,
///     "messages": []
/// }
/// ```
///
/// ```json
/// {
///     "ok": false,
///     "error": "invalid_auth"
/// }
/// ```
#[derive(Deserialize)]
#[serde(untagged)]
pub enum APIResult<T> {
    Ok(T),
    Err(ErrorResponse),
}

impl<T> APIResult<T> {
    pub fn into_result(self) -> Result<T, SlackError> {
        match self {
            APIResult::Ok(x) => Ok(x),
            APIResult::Err(res) => Err(SlackError::APIResponseError(res.error)),
        }
    }
}

/// The universal response in case of an unsuccessful request.
// The `ok` field is checked here, and should be checked on responses too, so
// that an error can never be mistaken for a response whose fields all
// default.
#[derive(Deserialize)]
pub struct ErrorResponse {
    #[allow(dead_code)]
    #[serde(deserialize_with = "crate::de::only_false")]
    ok: bool,
    pub error: String,
}

/// Cursor-based pagination metadata. Slack omits it entirely, or sends an
/// empty cursor, on the final page.
///
/// <https://api.slack.com/docs/pagination#cursors>
#[serde_as]
#[derive(Default, Deserialize)]
pub struct PaginationMeta {
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub next_cursor: Option<String>,
}
