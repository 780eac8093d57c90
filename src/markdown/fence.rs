//! Slack is happy to put code fences on the same line as code, whereas
//! Markdown needs them on their own lines.

const FENCE: &str = "```";

/// Move every code fence onto its own line.
pub fn normalize_fences(s: &str) -> String {
    close_fences(&open_fences(s))
}

/// Break any line starting with a fence directly after the fence. Whatever
/// followed, language tags included, lands on the next line.
fn open_fences(s: &str) -> String {
    map_lines(s, |line| match line.strip_prefix(FENCE) {
        Some(rest) => format!("{FENCE}\n{rest}"),
        None => line.to_owned(),
    })
}

/// Break any line ending with a fence directly before the fence, unless the
/// fence is all there is.
fn close_fences(s: &str) -> String {
    map_lines(s, |line| match line.strip_suffix(FENCE) {
        Some(rest) if !rest.is_empty() => format!("{rest}\n{FENCE}"),
        _ => line.to_owned(),
    })
}

fn map_lines<F: Fn(&str) -> String>(s: &str, f: F) -> String {
    s.split('\n').map(f).collect::<Vec<_>>().join("\n")
}
