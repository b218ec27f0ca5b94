//! Line classification.
//!
//! Classifiers are tried top to bottom and the first match wins; a line that
//! matches none of them is plain text.

use std::sync::LazyLock;

use regex::Regex;

use crate::inline::{has_line_terminator, line_regex};

static ATX_HEADING: LazyLock<Regex> = LazyLock::new(|| line_regex(r"^(#+)[ \t]+(%+)"));

static LIST_ITEM: LazyLock<Regex> =
    LazyLock::new(|| line_regex(r"^([+*-]|[0-9]+\.)[ \t]+(%*)$"));

static HORIZONTAL_RULE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:_{3,}|-{3,}|\*{3,})$").expect("Invalid horizontal rule regex")
});

/// A classified line with the captures its block needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    Empty,
    Heading { level: usize, text: &'a str },
    ListItem { ordered: bool, text: &'a str },
    Blockquote { text: &'a str },
    Code { text: &'a str },
    Rule,
    Text(&'a str),
}

type Classifier = for<'a> fn(&'a str) -> Option<Line<'a>>;

const CLASSIFIERS: [Classifier; 6] = [
    try_parse_empty,
    try_parse_heading,
    try_parse_list_item,
    try_parse_blockquote,
    try_parse_code,
    try_parse_horizontal_rule,
];

pub fn classify(line: &str) -> Line<'_> {
    CLASSIFIERS
        .iter()
        .find_map(|classifier| classifier(line))
        .unwrap_or(Line::Text(line))
}

fn try_parse_empty(line: &str) -> Option<Line<'_>> {
    line.is_empty().then_some(Line::Empty)
}

fn try_parse_heading(line: &str) -> Option<Line<'_>> {
    let caps = ATX_HEADING.captures(line)?;
    let level = caps.get(1)?.as_str().len();
    let text = strip_closing_sequence(caps.get(2)?.as_str());
    Some(Line::Heading { level, text })
}

/// Drop a closing `#` run from heading text.
///
/// The kept text is the longest non-empty prefix that is followed by
/// whitespace and then a `#`, so `Title ##` gives `Title` but also
/// `C# and #tags` gives `C# and`.
fn strip_closing_sequence(text: &str) -> &str {
    let mut hash_follows = false;
    for (i, byte) in text.bytes().enumerate().rev() {
        match byte {
            b' ' | b'\t' => {
                if hash_follows && i > 0 {
                    return &text[..i];
                }
            }
            b'#' => hash_follows = true,
            _ => hash_follows = false,
        }
    }
    text
}

fn try_parse_list_item(line: &str) -> Option<Line<'_>> {
    let caps = LIST_ITEM.captures(line)?;
    let ordered = caps.get(1)?.as_str().ends_with('.');
    let text = caps.get(2).map_or("", |m| m.as_str());
    Some(Line::ListItem { ordered, text })
}

fn try_parse_blockquote(line: &str) -> Option<Line<'_>> {
    line.strip_prefix('>')
        .filter(|text| !has_line_terminator(text))
        .map(|text| Line::Blockquote { text })
}

fn try_parse_code(line: &str) -> Option<Line<'_>> {
    line.strip_prefix('\t')
        .or_else(|| line.strip_prefix("    "))
        .filter(|text| !has_line_terminator(text))
        .map(|text| Line::Code { text })
}

fn try_parse_horizontal_rule(line: &str) -> Option<Line<'_>> {
    HORIZONTAL_RULE.is_match(line).then_some(Line::Rule)
}
