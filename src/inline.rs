//! Inline span rewriting.
//!
//! Each rule is a regex substitution applied to the output of the previous
//! one. Inline code short-circuits everything else: a line with any backtick
//! span only gets its code spans converted.

use std::sync::LazyLock;

use regex::Regex;

/// Characters that end a line of text: `\r`, `\n`, U+2028 and U+2029.
const LINE_TERMINATORS: [char; 4] = ['\r', '\n', '\u{2028}', '\u{2029}'];

/// Compile `pattern` with each `%` standing for any character except a line
/// terminator. Spans never run across a carriage return.
pub(crate) fn line_regex(pattern: &str) -> Regex {
    Regex::new(&pattern.replace('%', r"[^\r\n\x{2028}\x{2029}]")).expect("Invalid line regex")
}

pub(crate) fn has_line_terminator(text: &str) -> bool {
    text.contains(LINE_TERMINATORS)
}

static CODE_SPAN: LazyLock<Regex> = LazyLock::new(|| line_regex(r"`(%*?)`"));

static HEADING_ANCHOR: LazyLock<Regex> = LazyLock::new(|| line_regex(r"\{#(%+)\}"));

/// Span rules in application order.
static SPAN_RULES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        // Bold, delimiters need not agree
        (r"(__|\*\*)(%*?)(__|\*\*)", "<strong>${2}</strong>"),
        // Italic
        (r"(_|\*)(%*?)(_|\*)", "<em>${2}</em>"),
        // Strikethrough
        (r"--(%*?)--", "<del>${1}</del>"),
        // Images before links so the `!` form is consumed first
        (r"!\[(%*?)\]\((%*?)\)", "<img alt='${1}' src='${2}' />"),
        (r"\[(%*?)\]\((%*?)\)", "<a href='${2}'>${1}</a>"),
    ]
    .into_iter()
    .map(|(pattern, replacement)| (line_regex(pattern), replacement))
    .collect()
});

/// Rewrite the inline Markdown of one line into an HTML fragment.
///
/// `heading` enables `{#id}` bookmarks, which become `<a id='id'></a>`.
pub fn rewrite_inline(text: &str, heading: bool) -> String {
    if CODE_SPAN.is_match(text) {
        log::trace!("Inline code found, skipping other span rules");
        return CODE_SPAN.replace_all(text, "<code>${1}</code>").into_owned();
    }

    let mut html = text.to_string();
    for (pattern, replacement) in SPAN_RULES.iter() {
        html = pattern.replace_all(&html, *replacement).into_owned();
    }

    html = html.replace("  ", "<br />");

    if heading {
        html = HEADING_ANCHOR
            .replace(&html, "<a id='${1}'></a>")
            .into_owned();
    }

    html
}
