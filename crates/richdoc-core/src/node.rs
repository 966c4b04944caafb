//! Read-only document nodes with token-based positions.
//!
//! Positions count "tokens": a text node occupies one position per `char`,
//! and every other node occupies its content size plus two boundary tokens
//! (one opening, one closing). A node located at position `pos` therefore has
//! its content starting at `pos + 1`, which is where embedded code text
//! begins for a code-region node.
//!
//! Equality is deep: two nodes compare equal iff their kinds, attributes,
//! text, and children all compare equal. The highlighting cache relies on
//! this to decide whether a previously computed result is still valid.

use std::collections::BTreeMap;

/// One node of a host document snapshot.
///
/// A node is either a text leaf (carries `text`, no children) or an element
/// (carries a kind, optional attributes, and children). The tree is read-only
/// from this crate's point of view; hosts construct a fresh snapshot per
/// document version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    kind: String,
    attrs: BTreeMap<String, String>,
    children: Vec<Node>,
    text: Option<String>,
}

impl Node {
    /// Create an element node of the given kind with the given children.
    pub fn new(kind: impl Into<String>, children: Vec<Node>) -> Self {
        Self {
            kind: kind.into(),
            attrs: BTreeMap::new(),
            children,
            text: None,
        }
    }

    /// Create a text leaf node.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            kind: "text".to_string(),
            attrs: BTreeMap::new(),
            children: Vec::new(),
            text: Some(text.into()),
        }
    }

    /// Set an attribute, consuming and returning the node (builder style).
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    /// The node's kind name (e.g. `"paragraph"`, `"code_block"`, `"text"`).
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Look up an attribute by name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    /// The node's children (empty for text leaves).
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Returns `true` for text leaf nodes.
    pub fn is_text(&self) -> bool {
        self.text.is_some()
    }

    /// The literal text of a text leaf, if this is one.
    pub fn leaf_text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Number of positions this node occupies in its parent.
    ///
    /// Text leaves occupy one position per `char`; elements occupy their
    /// content size plus two boundary tokens.
    pub fn node_size(&self) -> usize {
        match &self.text {
            Some(t) => t.chars().count(),
            None => self.content_size() + 2,
        }
    }

    /// Number of positions occupied by this node's content.
    pub fn content_size(&self) -> usize {
        self.children.iter().map(Node::node_size).sum()
    }

    /// Concatenated text of every text leaf in this subtree.
    ///
    /// For a code-region node this is the region's exact source text.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        if let Some(t) = &self.text {
            out.push_str(t);
        }
        for child in &self.children {
            child.collect_text(out);
        }
    }

    /// Visit every non-text descendant in document order together with its
    /// position.
    ///
    /// Positions are relative to this node's content start; when called on
    /// the document root, they are absolute document positions. The root
    /// itself is not visited.
    pub fn descendants<'a>(&'a self, f: &mut impl FnMut(&'a Node, usize)) {
        self.walk_children(0, f);
    }

    fn walk_children<'a>(&'a self, content_start: usize, f: &mut impl FnMut(&'a Node, usize)) {
        let mut pos = content_start;
        for child in &self.children {
            if !child.is_text() {
                f(child, pos);
                child.walk_children(pos + 1, f);
            }
            pos += child.node_size();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn para(text: &str) -> Node {
        Node::new("paragraph", vec![Node::text(text)])
    }

    #[test]
    fn test_text_node_size_counts_chars() {
        assert_eq!(Node::text("abc").node_size(), 3);
        assert_eq!(Node::text("值值").node_size(), 2);
        assert_eq!(Node::text("").node_size(), 0);
    }

    #[test]
    fn test_element_node_size_adds_boundaries() {
        // <p> a b c </p> = 2 boundary tokens + 3 chars
        assert_eq!(para("abc").node_size(), 5);
        assert_eq!(Node::new("paragraph", vec![]).node_size(), 2);
    }

    #[test]
    fn test_descendant_positions() {
        let doc = Node::new("doc", vec![para("ab"), para("cd")]);
        let mut seen = Vec::new();
        doc.descendants(&mut |node, pos| seen.push((node.kind().to_string(), pos)));
        // First paragraph at 0 (size 4), second at 4.
        assert_eq!(
            seen,
            vec![("paragraph".to_string(), 0), ("paragraph".to_string(), 4)]
        );
    }

    #[test]
    fn test_descendants_visit_nested_containers() {
        let inner = Node::new("code_block", vec![Node::text("x")]);
        let doc = Node::new(
            "doc",
            vec![Node::new("blockquote", vec![para("a"), inner.clone()])],
        );
        let mut found = None;
        doc.descendants(&mut |node, pos| {
            if node.kind() == "code_block" {
                found = Some(pos);
            }
        });
        // blockquote opens at 0, its content starts at 1; the paragraph
        // occupies 3 positions, so the code block sits at 4.
        assert_eq!(found, Some(4));
    }

    #[test]
    fn test_text_content_concatenates_leaves() {
        let region = Node::new(
            "code_block",
            vec![Node::text("fn main() {"), Node::text("}\n")],
        );
        assert_eq!(region.text_content(), "fn main() {}\n");
    }

    #[test]
    fn test_deep_equality() {
        let a = Node::new("code_block", vec![Node::text("x")]).with_attr("language", "rust");
        let b = Node::new("code_block", vec![Node::text("x")]).with_attr("language", "rust");
        let c = Node::new("code_block", vec![Node::text("y")]).with_attr("language", "rust");
        let d = Node::new("code_block", vec![Node::text("x")]).with_attr("language", "python");
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);
    }
}
