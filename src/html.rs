use crate::config::OutputConfig;
use crate::document::{Document, NodeId};

/// Elements written as `<tag />` when they have no content.
const VOID_TAGS: &[&str] = &["hr", "br", "img"];

/// Render the content of `node`: its raw markup, then each child element on
/// its own line.
pub fn fragment_to_html(document: &Document, node: NodeId) -> String {
    let mut out = String::new();
    out.push_str(&document.element(node).inner_html);
    for &child in document.children(node) {
        emit_element(document, child, &mut out);
        out.push('\n');
    }
    out
}

/// Render `node` itself, including its own tag.
pub fn element_to_html(document: &Document, node: NodeId) -> String {
    let mut out = String::new();
    emit_element(document, node, &mut out);
    out
}

/// Render the content of `root` as configured: a bare fragment, or a full page
/// with the fragment inside the root container.
pub fn render(document: &Document, root: NodeId, output: &OutputConfig) -> String {
    let fragment = fragment_to_html(document, root);
    if !output.standalone {
        return fragment;
    }

    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str("<title>");
    out.push_str(&html_escape::encode_text(&output.title));
    out.push_str("</title>\n</head>\n<body>\n");
    out.push_str("<div id='");
    out.push_str(&html_escape::encode_single_quoted_attribute(
        &output.root_id,
    ));
    out.push_str("'>\n");
    out.push_str(&fragment);
    out.push_str("</div>\n</body>\n</html>\n");
    out
}

fn emit_element(document: &Document, node: NodeId, out: &mut String) {
    let element = document.element(node);

    out.push('<');
    out.push_str(&element.tag);
    if let Some(id) = &element.id {
        out.push_str(" id='");
        out.push_str(&html_escape::encode_single_quoted_attribute(id));
        out.push('\'');
    }

    if VOID_TAGS.contains(&element.tag.as_str())
        && element.inner_html.is_empty()
        && element.children.is_empty()
    {
        out.push_str(" />");
        return;
    }

    out.push('>');
    out.push_str(&element.inner_html);
    for &child in &element.children {
        emit_element(document, child, out);
    }
    out.push_str("</");
    out.push_str(&element.tag);
    out.push('>');
}

#[cfg(test)]
mod tests {
    use crate::{Config, markdown_to_html, markdown_to_html_with_config};
    use insta::assert_snapshot;
    use pretty_assertions::assert_eq;

    #[test]
    fn heading() {
        assert_snapshot!(markdown_to_html("# Hello"), @"<h1>Hello</h1>");
    }

    #[test]
    fn heading_with_anchor() {
        assert_snapshot!(
            markdown_to_html("### Sub {#anchor}"),
            @"<h3>Sub <a id='anchor'></a></h3>"
        );
    }

    #[test]
    fn paragraph() {
        assert_eq!(markdown_to_html("Hello world"), "<p>Hello world</p>\n");
    }

    #[test]
    fn bold_and_italic() {
        assert_eq!(
            markdown_to_html("**bold**"),
            "<p><strong>bold</strong></p>\n"
        );
        assert_eq!(markdown_to_html("*italic*"), "<p><em>italic</em></p>\n");
    }

    #[test]
    fn inline_code_wins_over_bold() {
        assert_snapshot!(
            markdown_to_html("`x` **y**"),
            @"<p><code>x</code> **y**</p>"
        );
    }

    #[test]
    fn links_and_images() {
        assert_snapshot!(
            markdown_to_html("![cat](cat.png) [more](/cats)"),
            @"<p><img alt='cat' src='cat.png' /> <a href='/cats'>more</a></p>"
        );
    }

    #[test]
    fn code_block() {
        assert_eq!(
            markdown_to_html("\t<b>\n\tfn main() {}"),
            "<pre><code>&lt;b&gt;\nfn main() {}\n</code></pre>\n"
        );
    }

    #[test]
    fn unordered_list() {
        assert_eq!(
            markdown_to_html("- one\n- two"),
            "<ul><li>one</li><li>two</li></ul>\n"
        );
    }

    #[test]
    fn ordered_list() {
        assert_eq!(
            markdown_to_html("1. one\n2. two"),
            "<ol><li>one</li><li>two</li></ol>\n"
        );
    }

    #[test]
    fn hard_break() {
        assert_eq!(
            markdown_to_html("line one  \nline two"),
            "<p>line one<br /> line two</p>\n"
        );
    }

    #[test]
    fn blockquote() {
        assert_eq!(
            markdown_to_html("> quoted\n> more"),
            "<blockquote> quoted  more</blockquote>\n"
        );
    }

    #[test]
    fn horizontal_rule() {
        assert_eq!(markdown_to_html("---"), "<hr />\n");
    }

    #[test]
    fn mixed_document() {
        let md = "# Notes\n\nFirst para\ncontinues.\n\n- a\n- b\n\n***\n\n    code";
        let expected = "<h1>Notes</h1>\n\
                        <p>First para continues.</p>\n\
                        <ul><li>a</li><li>b</li></ul>\n\
                        <hr />\n\
                        <pre><code>code\n</code></pre>\n";
        assert_eq!(markdown_to_html(md), expected);
    }

    #[test]
    fn standalone_page() {
        let mut config = Config::compiled_default();
        config.output.standalone = true;
        config.output.title = "Q&A".to_string();

        let expected = "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
                        <title>Q&amp;A</title>\n</head>\n<body>\n\
                        <div id='content'>\n<p>Hi</p>\n</div>\n</body>\n</html>\n";
        assert_eq!(markdown_to_html_with_config("Hi", &config), expected);
    }

    #[test]
    fn element_with_id_renders_attribute() {
        let document = crate::Document::with_root_id("main");
        assert_eq!(
            super::element_to_html(&document, document.root()),
            "<div id='main'></div>"
        );
    }
}
