//! Replace Slack user mentions such as `<@U1A2B3>` with the user's name.

use super::error::ResolutionError;
use once_cell::sync::Lazy;
use regex::Regex;

static USER_RE: Lazy<Regex> = Lazy::new(|| Regex::new("<@[A-Z0-9]+>").unwrap());

/// Anything capable of looking up a username from a Slack user ID.
pub trait UserResolver {
    fn username_for_id(&self, id: &str) -> Result<String, ResolutionError>;
}

/// The user IDs of every mention in `s`, in order of appearance.
pub fn mention_ids(s: &str) -> impl Iterator<Item = &str> {
    USER_RE.find_iter(s).map(|m| strip_delimiters(m.as_str()))
}

/// Swap every mention for the resolved username formatted as inline code,
/// e.g. `` `@alice` ``. The first failed lookup fails the whole string.
pub fn interpolate<R: UserResolver + ?Sized>(
    resolver: &R,
    s: &str,
) -> Result<String, ResolutionError> {
    let mut out = String::with_capacity(s.len());
    let mut last = 0;

    for m in USER_RE.find_iter(s) {
        let username = resolver.username_for_id(strip_delimiters(m.as_str()))?;

        out.push_str(&s[last..m.start()]);
        out.push_str("`@");
        out.push_str(&username);
        out.push('`');
        last = m.end();
    }
    out.push_str(&s[last..]);

    Ok(out)
}

/// `<@U1>` to `U1`. The delimiters are ASCII so slicing is safe.
fn strip_delimiters(token: &str) -> &str {
    &token[2..token.len() - 1]
}
