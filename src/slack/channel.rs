//! Identify Slack channels, and look up the names behind their IDs.

use super::{api::*, auth::SlackAccessToken, error::SlackError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Channel names as are visible in the Slack UI, without the leading hash.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChannelName(pub String);

/// Format without the surrounding newtype wrapper.
///
/// ```
/// let x = ChannelName("fp".into());
/// assert_eq!(format!("{}", x), "fp");
/// ```
impl fmt::Display for ChannelName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Because channel names can change, channels are generally referred to by
/// their underlying ID, as found in permalinks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelId(pub String);

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// <https://api.slack.com/methods/conversations.info#args>
#[derive(Serialize)]
struct InfoRequest<'a> {
    channel: &'a ChannelId,
}

/// <https://api.slack.com/methods/conversations.info#examples>
#[derive(Deserialize)]
struct InfoResponse {
    #[allow(dead_code)]
    #[serde(deserialize_with = "crate::de::only_true")]
    ok: bool,
    channel: ChannelMeta,
}

/// The metadata we care about within [InfoResponse]. Direct messages have no
/// name.
#[derive(Deserialize)]
struct ChannelMeta {
    name: Option<ChannelName>,
}

impl SlackClient {
    /// Get the name of a channel, falling back to its ID for conversations
    /// which don't have one.
    pub async fn get_channel_name(
        &self,
        channel: &ChannelId,
        token: &SlackAccessToken,
    ) -> Result<ChannelName, SlackError> {
        let res: APIResult<InfoResponse> = self
            .get("/conversations.info", token)
            .query(&InfoRequest { channel })
            .send()
            .await?
            .json()
            .await?;

        let meta = res.into_result()?.channel;

        Ok(meta.name.unwrap_or_else(|| ChannelName(channel.0.clone())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn setup(res: &str) -> (mockito::ServerGuard, mockito::Mock, SlackClient) {
        let mut srv = mockito::Server::new_async().await;
        let mock = srv
            .mock("GET", "/conversations.info")
            .match_query(mockito::Matcher::UrlEncoded("channel".into(), "C1".into()))
            .match_header("authorization", "Bearer xoxb-foo")
            .with_body(res)
            .create_async()
            .await;
        let client = SlackClient::new(srv.url());

        (srv, mock, client)
    }

    fn token() -> SlackAccessToken {
        SlackAccessToken("xoxb-foo".into())
    }

    #[tokio::test]
    async fn test_get_channel_name() {
        let (_srv, mock, client) =
            setup(r#"{ "ok": true, "channel": { "id": "C1", "name": "general" } }"#).await;

        let name = client
            .get_channel_name(&ChannelId("C1".into()), &token())
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(name, ChannelName("general".into()));
    }

    #[tokio::test]
    async fn test_get_channel_name_without_name() {
        let (_srv, _mock, client) =
            setup(r#"{ "ok": true, "channel": { "id": "C1", "is_im": true } }"#).await;

        let name = client
            .get_channel_name(&ChannelId("C1".into()), &token())
            .await
            .unwrap();

        assert_eq!(name, ChannelName("C1".into()));
    }

    #[tokio::test]
    async fn test_get_channel_name_error() {
        let (_srv, _mock, client) =
            setup(r#"{ "ok": false, "error": "channel_not_found" }"#).await;

        let res = client
            .get_channel_name(&ChannelId("C1".into()), &token())
            .await;

        assert!(matches!(
            res,
            Err(SlackError::APIResponseError(e)) if e == "channel_not_found"
        ));
    }
}
