//! Inline text transformation for emitted content runs.
//!
//! Each run goes through three steps, in order: markup escaping, a single
//! inline-link rewrite, and a fixed-width reflow. The link scan runs on
//! the already-escaped string; none of `[`, `]`, `(`, `)` are in the
//! escaped set, so entities never interfere with the match.

use std::borrow::Cow;

use memchr::memchr;

/// Column budget for reflowed text, measured from the start of a segment;
/// a continuation line begins with a tab and gets the full budget again.
const WRAP_COLUMNS: usize = 58;

/// URL scheme prefixes recognized by the inline-link rewrite.
const URL_SCHEMES: [&str; 3] = ["http://", "https://", "ftp://"];

/// Transform one content run for emission.
pub(crate) fn content_run(line: &str) -> String {
    let escaped = escape_text(line);
    let linked = rewrite_inline_link(&escaped);
    reflow(&linked)
}

/// Escape markup-significant characters (`&`, `<`, `>`, and both quote
/// characters) so author text cannot corrupt the output markup.
pub(crate) fn escape_text(s: &str) -> Cow<'_, str> {
    quick_xml::escape::escape(s)
}

/// Rewrite the first `[name](target)` occurrence whose target starts with
/// a recognized URL scheme as an inline hyperlink element. At most one
/// link per run is rewritten; an empty display name falls back to the
/// target.
pub(crate) fn rewrite_inline_link(line: &str) -> String {
    let bytes = line.as_bytes();
    let mut from = 0;

    while let Some(rel) = memchr(b'[', &bytes[from..]) {
        let open = from + rel;
        let Some(close_rel) = memchr(b']', &bytes[open + 1..]) else {
            break;
        };
        let close = open + 1 + close_rel;

        if bytes.get(close + 1) == Some(&b'(')
            && let Some(end_rel) = memchr(b')', &bytes[close + 2..])
        {
            let end = close + 2 + end_rel;
            let target = &line[close + 2..end];
            if URL_SCHEMES.iter().any(|scheme| target.starts_with(scheme)) {
                let name = &line[open + 1..close];
                let name = if name.is_empty() { target } else { name };
                return format!(
                    "{}<a href=\"{}\">{}</a>{}",
                    &line[..open],
                    target,
                    name,
                    &line[end + 1..]
                );
            }
        }

        from = open + 1;
    }

    line.to_string()
}

/// Re-wrap whitespace-separated words into lines of at most
/// [`WRAP_COLUMNS`] columns. Words are never split; continuation lines
/// start with a tab. Layout only, no semantic meaning.
pub(crate) fn reflow(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + s.len() / 16);
    let mut width = 0;

    for word in s.split_whitespace() {
        let len = word.chars().count();
        if width + len >= WRAP_COLUMNS {
            out.push_str("\n\t");
            width = 0;
        } else if width > 0 {
            out.push(' ');
            width += 1;
        }
        out.push_str(word);
        width += len;
    }

    out
}
