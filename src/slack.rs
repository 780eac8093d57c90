//! Fetches a Slack thread and everything needed to render it, given a
//! permalink to any message within it.
//!
//! See [router] for the endpoint and [crate::markdown] for the rendering.

pub mod api;
pub mod auth;
pub mod channel;
pub mod error;
mod history;
pub mod permalink;
pub mod router;
mod user;
