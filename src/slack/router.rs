//! Slack subrouter definition.
//!
//! The following subroute is supported:
//!
//! - POST: `/archive`

use super::{api::SlackClient, auth::SlackAccessToken, error::SlackError, permalink::Permalink};
use crate::{
    markdown::{self, ArchiveError},
    router::Deps,
};
use axum::{
    extract::{self, State},
    http::StatusCode,
    response::IntoResponse,
    routing::post,
    Router,
};
use axum_extra::{headers, TypedHeader};
use serde::Deserialize;
use tower_http::validate_request::ValidateRequestHeaderLayer;
use tracing::{error, info};
use url::Url;

/// A request to archive the thread containing `link`.
#[derive(Deserialize)]
pub struct ArchiveRequest {
    pub link: Url,
    /// Wrap the archive in a collapsed `<details>` section.
    #[serde(default)]
    pub details: bool,
}

/// Instantiate a new Slack subrouter.
pub fn slack_router(slack_token: &SlackAccessToken) -> Router<Deps> {
    Router::new()
        .route("/archive", post(archive_handler))
        // Unsure how to access `Deps` here to obviate the need for the function
        // parameter.
        .layer(ValidateRequestHeaderLayer::bearer(&slack_token.0))
}

/// Handler for the POST subroute `/archive`.
///
/// A `Bearer` `Authorization` header containing a Slack access token must be
/// present and must match that found in `$SLACK_TOKEN`.
///
/// Accepts an [ArchiveRequest] in `application/x-www-form-urlencoded` format,
/// responding with the thread as Markdown.
async fn archive_handler(
    State(deps): State<Deps>,
    TypedHeader(t): TypedHeader<headers::Authorization<headers::authorization::Bearer>>,
    extract::Form(req): extract::Form<ArchiveRequest>,
) -> impl IntoResponse {
    let token = SlackAccessToken(t.token().into());

    match archive(&deps.slack_client, &req, &token).await {
        Ok(doc) => (StatusCode::OK, doc),
        Err(e) => handle_slack_err(&e),
    }
}

/// Fetch, resolve, and render the thread `req` links to.
async fn archive(
    client: &SlackClient,
    req: &ArchiveRequest,
    token: &SlackAccessToken,
) -> Result<String, SlackError> {
    let link = Permalink::parse(&req.link)?;

    let mut thread = client.get_thread(&link, token).await?;
    let users = client.get_user_directory(&thread, token).await?;
    let doc = markdown::from_thread(&users, &mut thread)?;

    info!(
        "Archived {} messages from {}",
        thread.messages.len(),
        link.channel
    );

    if !req.details {
        return Ok(doc);
    }

    let channel_name = client.get_channel_name(&link.channel, token).await?;
    Ok(markdown::wrap_in_details(
        &channel_name,
        req.link.as_str(),
        &doc,
    ))
}

pub fn handle_slack_err(e: &SlackError) -> (StatusCode, String) {
    let code = match &e {
        e if is_unauthenticated(e) => StatusCode::UNAUTHORIZED,
        e if is_not_found(e) => StatusCode::NOT_FOUND,
        SlackError::APIRequestFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        SlackError::APIResponseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        SlackError::InvalidPermalink(_) => StatusCode::BAD_REQUEST,
        // Slack sent us something we couldn't make sense of.
        SlackError::Archive(ArchiveError::Format(_) | ArchiveError::Resolution(_)) => {
            StatusCode::BAD_GATEWAY
        }
    };

    let es = e.to_string();

    error!("{}", es);
    (code, es)
}

/// Parse Slack's API response error to determine if the issue is that the
/// access token failed to provide authentication.
fn is_unauthenticated(res: &SlackError) -> bool {
    match res {
        SlackError::APIResponseError(e) => e == "invalid_auth" || e == "not_authed",
        _ => false,
    }
}

/// Parse Slack's API response error to determine if the issue is that
/// something the permalink refers to doesn't exist, or isn't visible to us.
fn is_not_found(res: &SlackError) -> bool {
    match res {
        SlackError::APIResponseError(e) => {
            ["channel_not_found", "thread_not_found", "user_not_found"].contains(&e.as_str())
        }
        _ => false,
    }
}
