use super::{
    error::ResolutionError, fence::normalize_fences, link::rewrite_links, mention::*,
};

/// Convert Slack message text to Markdown, quoting every line into `out`.
/// Nothing is written if a mention can't be resolved.
pub fn render<R: UserResolver + ?Sized>(
    resolver: &R,
    out: &mut String,
    s: &str,
) -> Result<(), ResolutionError> {
    let text = normalize_fences(&rewrite_links(&interpolate(resolver, s)?));

    // TODO: Escape HTML in `line`; a message containing `</details>` will
    // break out of `wrap_in_details`.
    for line in text.split('\n') {
        out.push_str("> ");
        out.push_str(line);
        out.push('\n');
    }

    Ok(())
}
