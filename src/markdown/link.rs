use once_cell::sync::Lazy;
use regex::Regex;

static LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<(https?://[^|>]+)\|([^>]+)>").unwrap());

/// Rewrite Slack's labelled links, `<url|label>`, as Markdown links.
/// Unlabelled links are left as they are.
pub fn rewrite_links(s: &str) -> String {
    LINK_RE.replace_all(s, "[${2}](${1})").into_owned()
}
