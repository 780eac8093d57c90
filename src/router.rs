//! Server router definition.
//!
//! The following routes are supported:
//!
//! - GET: `/api/v1/health`
//! - POST: `/api/v1/slack/archive`

use crate::slack::{api::SlackClient, auth::SlackAccessToken, router::slack_router};
use axum::{http::StatusCode, routing::get, Router};
use std::sync::Arc;
use tower_http::trace::{self, TraceLayer};
use tracing::Level;

/// Dependencies shared by routes across requests.
#[derive(Clone)]
pub struct Deps {
    pub slack_client: Arc<SlackClient>,
    pub slack_token: SlackAccessToken,
}

/// Instantiate a new router with tracing.
pub fn new(deps: Deps) -> Router {
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(trace::DefaultMakeSpan::new().level(Level::INFO))
        .on_response(trace::DefaultOnResponse::new().level(Level::INFO));

    let v1 = Router::new()
        .nest("/slack", slack_router(&deps.slack_token))
        .layer(trace_layer)
        // Exclude the health check route from tracing.
        .route("/health", get(|| async { StatusCode::OK }));

    let api = Router::new().nest("/v1", v1);

    Router::new().nest("/api", api).with_state(deps)
}
