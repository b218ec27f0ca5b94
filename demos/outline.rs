use xmarker::Document;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let md = if args.len() > 1 {
        std::fs::read_to_string(&args[1]).expect("Failed to read file")
    } else {
        "# Overview {#overview}\n\nIntro text.\n\n## Details\n\n- one\n- two\n\n## Usage\n\n    xmarker notes.md".to_string()
    };

    let document = xmarker::parse(&md);

    for (heading, level) in headings(&document) {
        let blocks = count_section_blocks(&document, heading, level);
        println!(
            "{}H{} {:30} -> {} blocks",
            "  ".repeat(level.saturating_sub(1)),
            level,
            document.element(heading).inner_html,
            blocks
        );
    }
}

fn heading_level(document: &Document, node: xmarker::NodeId) -> Option<usize> {
    document.tag(node).strip_prefix('h')?.parse().ok()
}

fn headings(document: &Document) -> Vec<(xmarker::NodeId, usize)> {
    document
        .descendants(document.root())
        .into_iter()
        .filter_map(|node| heading_level(document, node).map(|level| (node, level)))
        .collect()
}

/// Top-level blocks between a heading and the next heading of the same or
/// higher rank.
fn count_section_blocks(document: &Document, start: xmarker::NodeId, start_level: usize) -> usize {
    document
        .children(document.root())
        .iter()
        .skip_while(|&&node| node != start)
        .skip(1)
        .take_while(|&&node| heading_level(document, node).is_none_or(|level| level > start_level))
        .count()
}
