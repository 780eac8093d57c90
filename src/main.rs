//! The keeper of conversations past.
//!
//! Archives Slack threads as Markdown, ready to be pasted into a GitHub issue
//! or pull request so that the discussion outlives Slack's retention policy.
//!
//! The conversion itself lives in [markdown]; fetching from Slack in [slack].

use dotenvy::dotenv;
use router::Deps;
use slack::{
    api::{SlackClient, API_BASE},
    auth::SlackAccessToken,
};
use std::future::Future;
use std::sync::Arc;
use std::{env, net::SocketAddr};
use tokio::net::TcpListener;
use tracing::{info, warn};

mod de;
mod markdown;
mod router;
mod slack;

/// Application entrypoint. Initialises tracing, checks for environment
/// variables, binds to 0.0.0.0, and starts the server.
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_target(false)
        .compact()
        .init();

    let has_dotenv = dotenv().is_ok();
    if !has_dotenv {
        warn!("No .env found");
    }

    let port: u16 = env::var("PORT")
        .map(|x| x.parse().expect("Could not parse PORT to u16"))
        .unwrap_or(80);

    let slack_token = env::var("SLACK_TOKEN")
        .map(SlackAccessToken)
        .expect("No $SLACK_TOKEN environment variable found");

    let api_base = env::var("SLACK_API_BASE").unwrap_or_else(|_| API_BASE.into());

    let deps = Deps {
        slack_client: Arc::new(SlackClient::new(api_base)),
        slack_token,
    };

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    // A server without graceful shutdown.
    server(listener, deps, std::future::pending()).await;
}

/// Serve on `listener` until `shutdown` resolves.
async fn server<F>(listener: TcpListener, deps: Deps, shutdown: F)
where
    F: Future<Output = ()> + Send + 'static,
{
    if let Ok(addr) = listener.local_addr() {
        info!("Listening on {}", addr);
    }

    axum::serve(listener, router::new(deps))
        .with_graceful_shutdown(shutdown)
        .await
        .expect("Failed to start server");
}
