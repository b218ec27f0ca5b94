mod config;
mod document;
mod error;
#[cfg(feature = "fetch")]
mod fetch;
mod html;
mod inline;
mod parser;

pub use config::{Config, FetchConfig, OutputConfig};
pub use document::{Document, DocumentModel, Element, NodeId};
pub use error::Error;
#[cfg(feature = "fetch")]
pub use fetch::Fetcher;
pub use html::{element_to_html, fragment_to_html, render};
pub use inline::rewrite_inline;
pub use parser::{Line, LineKind, ParseState, classify, parse_document, process_line};

/// Where parsed content is appended: an element looked up by id, or a node
/// handle the caller already has.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target<N> {
    Id(String),
    Node(N),
}

impl<N: Copy> Target<N> {
    pub fn resolve<D: DocumentModel<Node = N>>(&self, document: &D) -> Result<N, Error> {
        match self {
            Target::Id(id) => document
                .element_by_id(id)
                .ok_or_else(|| Error::TargetNotFound(id.clone())),
            Target::Node(node) => Ok(*node),
        }
    }
}

/// Parse markdown into a new document, under its root.
pub fn parse(markdown: &str) -> Document {
    let mut document = Document::new();
    let root = document.root();
    parser::parse_document(&mut document, markdown, root);
    document
}

/// Parse markdown in place into `target`.
///
/// Parsing itself cannot fail; the only error is an id that names no element.
pub fn parse_into<D: DocumentModel>(
    document: &mut D,
    markdown: &str,
    target: Target<D::Node>,
) -> Result<(), Error> {
    let node = target.resolve(&*document)?;
    parser::parse_document(document, markdown, node);
    Ok(())
}

/// Convert markdown to HTML using default config.
pub fn markdown_to_html(markdown: &str) -> String {
    markdown_to_html_with_config(markdown, &Config::compiled_default())
}

/// Convert markdown to HTML with custom config.
pub fn markdown_to_html_with_config(markdown: &str, config: &Config) -> String {
    let mut document = Document::with_root_id(&config.output.root_id);
    let root = document.root();
    parser::parse_document(&mut document, markdown, root);
    html::render(&document, root, &config.output)
}
