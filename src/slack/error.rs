use crate::markdown::ArchiveError;
use thiserror::Error;

/// Sum type representing every possible unexceptional fail state.
#[derive(Debug, Error)]
pub enum SlackError {
    #[error("Slack API request failed: {0:?}")]
    APIRequestFailed(#[from] reqwest::Error),
    #[error("Slack API returned error: {0}")]
    APIResponseError(String),
    #[error("Invalid Slack permalink: {0}")]
    InvalidPermalink(String),
    #[error("Failed to archive Slack thread: {0}")]
    Archive(#[from] ArchiveError),
}
