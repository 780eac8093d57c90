//! Look up the usernames behind the user IDs in a thread.

use super::{api::*, auth::SlackAccessToken, error::SlackError};
use crate::markdown::{mention_ids, ResolutionError, Thread, UserResolver};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// Usernames keyed by user ID, gathered ahead of conversion.
#[derive(Debug, Default)]
pub struct UserDirectory(HashMap<String, String>);

impl UserResolver for UserDirectory {
    fn username_for_id(&self, id: &str) -> Result<String, ResolutionError> {
        self.0
            .get(id)
            .cloned()
            .ok_or_else(|| ResolutionError::new(id, "user missing from directory"))
    }
}

/// Every user ID a thread refers to, whether as an author or a mention.
fn user_ids(thread: &Thread) -> BTreeSet<&str> {
    thread
        .messages
        .iter()
        .flat_map(|m| {
            m.user
                .as_deref()
                .into_iter()
                .chain(mention_ids(&m.text))
                .chain(m.attachments.iter().flat_map(|a| mention_ids(&a.text)))
        })
        .collect()
}

/// <https://api.slack.com/methods/users.info#args>
#[derive(Serialize)]
struct InfoRequest<'a> {
    user: &'a str,
}

/// <https://api.slack.com/methods/users.info#examples>
#[derive(Deserialize)]
struct InfoResponse {
    #[allow(dead_code)]
    #[serde(deserialize_with = "crate::de::only_true")]
    ok: bool,
    user: UserMeta,
}

/// The metadata we care about within [InfoResponse].
#[derive(Deserialize)]
struct UserMeta {
    name: String,
}

impl SlackClient {
    /// Get a user's username, as opposed to their display or real name.
    pub async fn get_username(
        &self,
        id: &str,
        token: &SlackAccessToken,
    ) -> Result<String, SlackError> {
        let res: APIResult<InfoResponse> = self
            .get("/users.info", token)
            .query(&InfoRequest { user: id })
            .send()
            .await?
            .json()
            .await?;

        Ok(res.into_result()?.user.name)
    }

    /// Look up every user a thread refers to, once each.
    pub async fn get_user_directory(
        &self,
        thread: &Thread,
        token: &SlackAccessToken,
    ) -> Result<UserDirectory, SlackError> {
        let ids = user_ids(thread);
        let mut names = HashMap::with_capacity(ids.len());

        for id in ids {
            names.insert(id.to_owned(), self.get_username(id, token).await?);
        }

        Ok(UserDirectory(names))
    }
}
