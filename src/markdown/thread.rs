//! The conversation as fetched from Slack, ahead of conversion.

use crate::slack::channel::ChannelId;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, NoneAsEmptyString};
use std::fmt;

/// Slack's message identifier, which doubles as its timestamp.
///
/// ```
/// let ts = Ts("1610000000.000100".into());
/// assert_eq!(ts.to_string(), "1610000000.000100");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ts(pub String);

impl fmt::Display for Ts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The subset of a Slack message we render.
///
/// <https://api.slack.com/events/message>
#[serde_as]
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Message {
    pub ts: Ts,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub user: Option<String>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub bot_id: Option<String>,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
}

/// Legacy secondary content, mostly seen on bot messages.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Attachment {
    #[serde(default)]
    pub text: String,
}

/// Every message in a single conversation, in no particular order until
/// sorted, alongside what's needed to link back to it.
#[derive(Debug, Clone, PartialEq)]
pub struct Thread {
    /// The workspace subdomain, as in `<team>.slack.com`.
    pub team: String,
    pub channel: ChannelId,
    pub messages: Vec<Message>,
}
