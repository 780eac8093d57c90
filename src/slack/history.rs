//! Fetch every message in a thread.

use super::{
    api::*, auth::SlackAccessToken, channel::ChannelId, error::SlackError, permalink::Permalink,
};
use crate::markdown::{Message, Thread, Ts};
use serde::{Deserialize, Serialize};

/// <https://api.slack.com/methods/conversations.replies#args>
#[derive(Serialize)]
struct RepliesRequest<'a> {
    channel: &'a ChannelId,
    ts: &'a Ts,
    /// Maximum supported is 1000, but a limit of 200 is "recommended".
    limit: u16,
    cursor: Option<String>,
}

/// <https://api.slack.com/methods/conversations.replies#examples>
#[derive(Deserialize)]
struct RepliesResponse {
    #[allow(dead_code)]
    #[serde(deserialize_with = "crate::de::only_true")]
    ok: bool,
    messages: Vec<Message>,
    #[serde(default)]
    response_metadata: PaginationMeta,
}

impl SlackClient {
    /// Get the whole thread a permalink points into, across as many pages as
    /// it takes. The messages are not necessarily in order.
    pub async fn get_thread(
        &self,
        link: &Permalink,
        token: &SlackAccessToken,
    ) -> Result<Thread, SlackError> {
        let mut messages: Vec<Message> = Vec::new();
        let mut cursor: Option<String> = None;

        loop {
            let res: APIResult<RepliesResponse> = self
                .get("/conversations.replies", token)
                .query(&RepliesRequest {
                    channel: &link.channel,
                    ts: &link.ts,
                    limit: 200,
                    cursor,
                })
                .send()
                .await?
                .json()
                .await?;

            let mut res = res.into_result()?;
            messages.append(&mut res.messages);

            cursor = res.response_metadata.next_cursor;
            if cursor.is_none() {
                break;
            }
        }

        Ok(Thread {
            team: link.team.clone(),
            channel: link.channel.clone(),
            messages,
        })
    }
}
