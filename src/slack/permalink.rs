//! Parse links copied from the Slack UI, which look like:
//!
//! ```text
//! https://acme.slack.com/archives/C0123ABCD/p1610000000000100
//! https://acme.slack.com/archives/C0123ABCD/p1610000003000200?thread_ts=1610000000.000100&cid=C0123ABCD
//! ```
//!
//! The latter points at a reply, in which case `thread_ts` identifies the
//! thread itself.

use super::{channel::ChannelId, error::SlackError};
use crate::markdown::Ts;
use url::Url;

/// Slack's timestamps have microsecond precision, which permalinks write
/// without the dot.
const FRACTION_DIGITS: usize = 6;

/// Where a thread lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Permalink {
    /// The workspace subdomain, as in `<team>.slack.com`.
    pub team: String,
    pub channel: ChannelId,
    /// The thread's root message.
    pub ts: Ts,
}

impl Permalink {
    pub fn parse(u: &Url) -> Result<Self, SlackError> {
        let invalid = || SlackError::InvalidPermalink(u.to_string());

        let team = u
            .host_str()
            .and_then(|host| host.strip_suffix(".slack.com"))
            .filter(|team| !team.is_empty())
            .ok_or_else(invalid)?;

        let segments = u.path_segments().ok_or_else(invalid)?.collect::<Vec<_>>();
        let (channel, message_ts) = match segments[..] {
            ["archives", channel, message] if !channel.is_empty() => {
                (channel, parse_message_ts(message).ok_or_else(invalid)?)
            }
            _ => return Err(invalid()),
        };

        let thread_ts = u
            .query_pairs()
            .find(|(k, _)| k == "thread_ts")
            .map(|(_, v)| Ts(v.into_owned()));

        Ok(Permalink {
            team: team.to_owned(),
            channel: ChannelId(channel.to_owned()),
            ts: thread_ts.unwrap_or(message_ts),
        })
    }
}

/// `p1610000000000100` to `1610000000.000100`.
fn parse_message_ts(segment: &str) -> Option<Ts> {
    let digits = segment.strip_prefix('p')?;

    if digits.len() <= FRACTION_DIGITS || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let (secs, fraction) = digits.split_at(digits.len() - FRACTION_DIGITS);
    Some(Ts(format!("{}.{}", secs, fraction)))
}
