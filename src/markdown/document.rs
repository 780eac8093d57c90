//! Assemble a whole thread into a single quoted Markdown document.

use super::{
    error::ArchiveError,
    mention::UserResolver,
    render::render,
    thread::{Message, Thread},
};
use crate::slack::channel::ChannelName;
use tracing::debug;

/// Render every message in a thread, oldest first, each beneath a header
/// linking to its author and to the message itself. The thread is left
/// sorted.
///
/// Any failure, be it a malformed message identifier or an unresolvable user,
/// fails the whole document.
pub fn from_thread<R: UserResolver + ?Sized>(
    resolver: &R,
    thread: &mut Thread,
) -> Result<String, ArchiveError> {
    let instants = thread.sort_chronologically()?;

    let Some(first) = thread.messages.first() else {
        return Ok(String::new());
    };

    debug!(
        "Archiving {} messages from thread {}",
        thread.messages.len(),
        first.ts
    );

    let mut out = String::new();

    for (msg, instant) in thread.messages.iter().zip(instants) {
        let username = match (&msg.user, &msg.bot_id) {
            (Some(user), _) => resolver.username_for_id(user)?,
            (None, Some(bot)) => format!("bot {}", bot),
            (None, None) => "ghost".to_owned(),
        };

        out.push_str(&format!(
            "> {} at [{}]({})\n>\n",
            fmt_profile(&username),
            instant.format("%Y-%m-%d %H:%M"),
            fmt_permalink(thread, first, msg),
        ));

        if !msg.text.is_empty() {
            render(resolver, &mut out, &msg.text)?;
        }

        for a in &msg.attachments {
            render(resolver, &mut out, &a.text)?;
        }

        out.push('\n');
    }

    Ok(out)
}

/// Wrap a rendered thread in a collapsed section, headed by a link back to
/// the conversation.
pub fn wrap_in_details(channel: &ChannelName, link: &str, body: &str) -> String {
    format!(
        "Slack conversation archive of [`#{}`]({})\n\n<details>\n  <summary>Click to expand</summary>\n\n{}\n</details>",
        channel, link, body
    )
}

/// Slack and GitHub usernames tend to coincide, so we optimistically link to
/// the latter, avatar included.
fn fmt_profile(username: &str) -> String {
    format!(
        r#"[<img src="https://github.com/{0}.png?size=25" align="left" /> **{0}**](https://github.com/{0})"#,
        username
    )
}

/// Every link is rooted at the thread's first message, pointing at `msg`
/// within it.
fn fmt_permalink(thread: &Thread, first: &Message, msg: &Message) -> String {
    format!(
        "https://{}.slack.com/archives/{}/p{}?thread_ts={}&cid={}",
        thread.team, thread.channel, first.ts, msg.ts, thread.channel
    )
}

#[cfg(test)]
mod tests {
    use super::super::{
        error::FormatError,
        mention::tests::FakeResolver,
        thread::{Attachment, Ts},
    };
    use super::*;
    use crate::slack::channel::ChannelId;
    use pretty_assertions::assert_eq;

    fn message(ts: &str, user: Option<&str>, bot_id: Option<&str>, text: &str) -> Message {
        Message {
            ts: Ts(ts.into()),
            user: user.map(Into::into),
            bot_id: bot_id.map(Into::into),
            text: text.into(),
            attachments: vec![],
        }
    }

    fn thread(messages: Vec<Message>) -> Thread {
        Thread {
            team: "acme".into(),
            channel: ChannelId("C1".into()),
            messages,
        }
    }

    fn resolver() -> FakeResolver {
        FakeResolver::new(&[("U1", "alice"), ("U2", "bob")])
    }

    #[test]
    fn test_from_thread() {
        let mut t = thread(vec![
            message("2.0", Some("U1"), None, "hello <@U2>"),
            message("1.0", None, Some("B1"), ""),
        ]);

        let expected = concat!(
            r#"> [<img src="https://github.com/bot B1.png?size=25" align="left" /> **bot B1**](https://github.com/bot B1)"#,
            " at [1970-01-01 00:00](https://acme.slack.com/archives/C1/p1.0?thread_ts=1.0&cid=C1)\n",
            ">\n",
            "\n",
            r#"> [<img src="https://github.com/alice.png?size=25" align="left" /> **alice**](https://github.com/alice)"#,
            " at [1970-01-01 00:00](https://acme.slack.com/archives/C1/p1.0?thread_ts=2.0&cid=C1)\n",
            ">\n",
            "> hello `@bob`\n",
            "\n",
        );

        assert_eq!(from_thread(&resolver(), &mut t).unwrap(), expected);
        assert_eq!(t.messages[0].ts, Ts("1.0".into()));
    }

    #[test]
    fn test_from_thread_timestamps() {
        let mut t = thread(vec![
            message("1610000000.000100", None, None, "first"),
            message("1610003725.000200", None, None, "second"),
        ]);

        let doc = from_thread(&resolver(), &mut t).unwrap();

        assert!(doc.contains(
            "at [2021-01-07 06:13](https://acme.slack.com/archives/C1/p1610000000.000100?thread_ts=1610000000.000100&cid=C1)"
        ));
        assert!(doc.contains(
            "at [2021-01-07 07:15](https://acme.slack.com/archives/C1/p1610000000.000100?thread_ts=1610003725.000200&cid=C1)"
        ));
    }

    #[test]
    fn test_from_thread_ghost_and_attachments() {
        let mut m = message("1.0", None, None, "");
        m.attachments = vec![
            Attachment {
                text: "deployed <https://x.com|x>".into(),
            },
            Attachment {
                text: String::new(),
            },
        ];
        let mut t = thread(vec![m]);

        let doc = from_thread(&resolver(), &mut t).unwrap();

        assert!(doc.starts_with(r#"> [<img src="https://github.com/ghost.png?size=25""#));
        assert!(doc.ends_with(">\n> deployed [x](https://x.com)\n> \n\n"));
    }

    #[test]
    fn test_from_thread_user_wins_over_bot() {
        let r = resolver();
        let mut t = thread(vec![message("1.0", Some("U2"), Some("B1"), "")]);

        let doc = from_thread(&r, &mut t).unwrap();

        assert!(doc.contains("**bob**"));
        assert!(!doc.contains("bot B1"));
        assert_eq!(*r.calls.borrow(), ["U2"]);
    }

    #[test]
    fn test_from_thread_empty() {
        assert_eq!(from_thread(&resolver(), &mut thread(vec![])).unwrap(), "");
    }

    #[test]
    fn test_from_thread_bad_timestamp() {
        let r = resolver();
        let mut t = thread(vec![
            message("1.0", Some("U1"), None, "a"),
            message("not-a-number", Some("U1"), None, "b"),
        ]);

        let e = from_thread(&r, &mut t).unwrap_err();

        assert!(matches!(e, ArchiveError::Format(FormatError::Shape(ref s)) if s == "not-a-number"));
        assert!(r.calls.borrow().is_empty());
    }

    #[test]
    fn test_from_thread_unknown_author() {
        let mut t = thread(vec![
            message("1.0", Some("U1"), None, "a"),
            message("2.0", Some("U9"), None, "b"),
        ]);

        let e = from_thread(&resolver(), &mut t).unwrap_err();

        assert!(matches!(e, ArchiveError::Resolution(ref e) if e.id == "U9"));
    }

    #[test]
    fn test_from_thread_unknown_mention_in_attachment() {
        let mut m = message("1.0", None, Some("B1"), "ok");
        m.attachments = vec![Attachment {
            text: "cc <@U9>".into(),
        }];

        let e = from_thread(&resolver(), &mut thread(vec![m])).unwrap_err();

        assert!(matches!(e, ArchiveError::Resolution(ref e) if e.id == "U9"));
    }

    #[test]
    fn test_wrap_in_details() {
        assert_eq!(
            wrap_in_details(
                &ChannelName("general".into()),
                "https://acme.slack.com/archives/C1/p1",
                "> hi\n"
            ),
            "Slack conversation archive of [`#general`](https://acme.slack.com/archives/C1/p1)\n\n<details>\n  <summary>Click to expand</summary>\n\n> hi\n\n</details>"
        );
    }
}
