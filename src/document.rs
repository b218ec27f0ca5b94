/// The element-tree capability the block parser writes into.
///
/// Nodes are plain handles; the parser only ever creates elements, appends
/// them, walks up to parents and edits their raw markup.
pub trait DocumentModel {
    type Node: Copy;

    fn create_element(&mut self, tag: &str) -> Self::Node;

    fn append_child(&mut self, parent: Self::Node, child: Self::Node);

    fn parent(&self, node: Self::Node) -> Option<Self::Node>;

    fn inner_html(&self, node: Self::Node) -> &str;

    fn set_inner_html(&mut self, node: Self::Node, html: &str);

    fn push_inner_html(&mut self, node: Self::Node, html: &str) {
        let mut content = self.inner_html(node).to_string();
        content.push_str(html);
        self.set_inner_html(node, &content);
    }

    fn element_by_id(&self, id: &str) -> Option<Self::Node>;
}

/// Handle to an element inside a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// A single element: tag, optional id, raw markup content and child elements.
///
/// Raw markup is rendered before the children.
#[derive(Debug, Clone)]
pub struct Element {
    pub tag: String,
    pub id: Option<String>,
    pub inner_html: String,
    pub children: Vec<NodeId>,
    pub parent: Option<NodeId>,
}

impl Element {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            id: None,
            inner_html: String::new(),
            children: Vec::new(),
            parent: None,
        }
    }
}

/// Arena-backed element tree with a `div` root.
#[derive(Debug, Clone)]
pub struct Document {
    elements: Vec<Element>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        Self {
            elements: vec![Element::new("div")],
        }
    }

    /// A document whose root carries `id`, so it can be targeted by identifier.
    pub fn with_root_id(id: &str) -> Self {
        let mut document = Self::new();
        document.elements[0].id = Some(id.to_string());
        document
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn element(&self, node: NodeId) -> &Element {
        &self.elements[node.0]
    }

    pub fn tag(&self, node: NodeId) -> &str {
        &self.elements[node.0].tag
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.elements[node.0].children
    }

    /// Give an element an id. Later lookups by that id resolve to it.
    pub fn set_id(&mut self, node: NodeId, id: &str) {
        self.elements[node.0].id = Some(id.to_string());
    }

    /// All elements below `node` in document order, excluding `node` itself.
    pub fn descendants(&self, node: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(node).iter().rev().copied().collect();
        while let Some(next) = stack.pop() {
            out.push(next);
            stack.extend(self.children(next).iter().rev());
        }
        out
    }

    /// Descendants of `node` with the given tag, in document order.
    pub fn find_all(&self, node: NodeId, tag: &str) -> Vec<NodeId> {
        self.descendants(node)
            .into_iter()
            .filter(|&n| self.tag(n) == tag)
            .collect()
    }
}

impl DocumentModel for Document {
    type Node = NodeId;

    fn create_element(&mut self, tag: &str) -> NodeId {
        self.elements.push(Element::new(tag));
        NodeId(self.elements.len() - 1)
    }

    fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if let Some(old_parent) = self.elements[child.0].parent.replace(parent) {
            self.elements[old_parent.0].children.retain(|&c| c != child);
        }
        self.elements[parent.0].children.push(child);
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.elements[node.0].parent
    }

    fn inner_html(&self, node: NodeId) -> &str {
        &self.elements[node.0].inner_html
    }

    fn set_inner_html(&mut self, node: NodeId, html: &str) {
        self.elements[node.0].inner_html = html.to_string();
    }

    fn push_inner_html(&mut self, node: NodeId, html: &str) {
        self.elements[node.0].inner_html.push_str(html);
    }

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.elements
            .iter()
            .position(|e| e.id.as_deref() == Some(id))
            .map(NodeId)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_links_parent_and_child() {
        let mut doc = Document::new();
        let p = doc.create_element("p");
        doc.append_child(doc.root(), p);

        assert_eq!(doc.parent(p), Some(doc.root()));
        assert_eq!(doc.children(doc.root()), &[p]);
        assert_eq!(doc.parent(doc.root()), None);
    }

    #[test]
    fn reappending_moves_the_child() {
        let mut doc = Document::new();
        let a = doc.create_element("blockquote");
        let b = doc.create_element("p");
        doc.append_child(doc.root(), a);
        doc.append_child(doc.root(), b);
        doc.append_child(a, b);

        assert_eq!(doc.children(doc.root()), &[a]);
        assert_eq!(doc.children(a), &[b]);
    }

    #[test]
    fn push_extends_markup() {
        let mut doc = Document::new();
        let p = doc.create_element("p");
        doc.set_inner_html(p, "one");
        doc.push_inner_html(p, " two");
        assert_eq!(doc.inner_html(p), "one two");
    }

    #[test]
    fn lookup_by_id() {
        let mut doc = Document::with_root_id("content");
        assert_eq!(doc.element_by_id("content"), Some(doc.root()));

        let section = doc.create_element("div");
        doc.set_id(section, "notes");
        assert_eq!(doc.element_by_id("notes"), Some(section));
        assert_eq!(doc.element_by_id("missing"), None);
    }

    #[test]
    fn descendants_in_document_order() {
        let mut doc = Document::new();
        let ul = doc.create_element("ul");
        let li1 = doc.create_element("li");
        let li2 = doc.create_element("li");
        let hr = doc.create_element("hr");
        doc.append_child(doc.root(), ul);
        doc.append_child(ul, li1);
        doc.append_child(ul, li2);
        doc.append_child(doc.root(), hr);

        assert_eq!(doc.descendants(doc.root()), vec![ul, li1, li2, hr]);
        assert_eq!(doc.find_all(doc.root(), "li"), vec![li1, li2]);
    }
}
