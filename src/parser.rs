//! Line-oriented block parser.
//!
//! The document is folded line by line. Each step sees only the kind of the
//! previous line and the element currently receiving content, and returns the
//! updated pair.

mod lines;

pub use lines::{Line, classify};

use crate::document::DocumentModel;
use crate::inline::rewrite_inline;

/// Classification of the most recently processed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Heading,
    Paragraph,
    Blockquote,
    ListItem,
    Code,
    Empty,
}

/// State carried from one line to the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseState<N> {
    pub previous: LineKind,
    /// Element new blocks are appended to, or whose content is extended.
    /// Only moves when a block opens or closes.
    pub insertion_point: N,
}

impl<N> ParseState<N> {
    pub fn new(root: N) -> Self {
        Self {
            previous: LineKind::Empty,
            insertion_point: root,
        }
    }

    fn with(previous: LineKind, insertion_point: N) -> Self {
        Self {
            previous,
            insertion_point,
        }
    }
}

/// Parse `text` into children of `root`. Lines are split on `\n` only.
pub fn parse_document<D: DocumentModel>(
    document: &mut D,
    text: &str,
    root: D::Node,
) -> ParseState<D::Node> {
    let mut line_count = 0;
    let state = text.split('\n').fold(ParseState::new(root), |state, line| {
        line_count += 1;
        process_line(document, line, state)
    });
    log::debug!(
        "Parsed {} lines, last line kind {:?}",
        line_count,
        state.previous
    );
    state
}

/// Apply one line to the document and return the state for the next line.
pub fn process_line<D: DocumentModel>(
    document: &mut D,
    line: &str,
    state: ParseState<D::Node>,
) -> ParseState<D::Node> {
    let at = state.insertion_point;
    let line = classify(line);
    log::trace!("{:?} after {:?}", line, state.previous);

    match line {
        Line::Empty => {
            let levels = match state.previous {
                LineKind::ListItem | LineKind::Blockquote | LineKind::Paragraph => 1,
                // Past both the code element and its pre wrapper
                LineKind::Code => 2,
                LineKind::Heading | LineKind::Empty => 0,
            };
            ParseState::with(LineKind::Empty, ascend(document, at, levels))
        }

        Line::Heading { level, text } => {
            let heading = document.create_element(&format!("h{}", level));
            document.set_inner_html(heading, &rewrite_inline(text, true));
            document.append_child(at, heading);
            // Headings never continue onto the next line
            ParseState::with(LineKind::Empty, at)
        }

        Line::ListItem { ordered, text } => {
            let list = if state.previous == LineKind::ListItem {
                at
            } else {
                let list = document.create_element(if ordered { "ol" } else { "ul" });
                document.append_child(at, list);
                log::debug!("Opened {} list", if ordered { "ordered" } else { "bullet" });
                list
            };
            let item = document.create_element("li");
            document.set_inner_html(item, &rewrite_inline(text, false));
            document.append_child(list, item);
            ParseState::with(LineKind::ListItem, list)
        }

        Line::Blockquote { text } => {
            let html = rewrite_inline(text, false);
            if state.previous == LineKind::Blockquote {
                document.push_inner_html(at, " ");
                document.push_inner_html(at, &html);
                ParseState::with(LineKind::Blockquote, at)
            } else {
                let quote = document.create_element("blockquote");
                document.set_inner_html(quote, &html);
                document.append_child(at, quote);
                ParseState::with(LineKind::Blockquote, quote)
            }
        }

        Line::Code { text } => {
            let code = if state.previous == LineKind::Code {
                at
            } else {
                let pre = document.create_element("pre");
                let code = document.create_element("code");
                document.append_child(pre, code);
                document.append_child(at, pre);
                code
            };
            let escaped = text.replace('<', "&lt;").replace('>', "&gt;");
            document.push_inner_html(code, &escaped);
            document.push_inner_html(code, "\n");
            ParseState::with(LineKind::Code, code)
        }

        Line::Rule => {
            let rule = document.create_element("hr");
            document.append_child(at, rule);
            ParseState::with(LineKind::Empty, at)
        }

        Line::Text(text) => match state.previous {
            LineKind::Empty => {
                let paragraph = document.create_element("p");
                document.set_inner_html(paragraph, &rewrite_inline(text, false));
                document.append_child(at, paragraph);
                ParseState::with(LineKind::Paragraph, paragraph)
            }
            LineKind::Paragraph => {
                document.push_inner_html(at, " ");
                document.push_inner_html(at, &rewrite_inline(text, false));
                state
            }
            // Lazy quote continuation is appended without inline rewriting
            LineKind::Blockquote => {
                document.push_inner_html(at, " ");
                document.push_inner_html(at, text);
                state
            }
            LineKind::Heading | LineKind::ListItem | LineKind::Code => {
                log::debug!("Dropping text line after {:?}", state.previous);
                state
            }
        },
    }
}

fn ascend<D: DocumentModel>(document: &D, node: D::Node, levels: usize) -> D::Node {
    let mut node = node;
    for _ in 0..levels {
        match document.parent(node) {
            Some(parent) => node = parent,
            None => {
                log::warn!("Insertion point has no parent, staying at the current element");
                break;
            }
        }
    }
    node
}
