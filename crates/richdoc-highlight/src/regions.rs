//! Locating code regions in a document snapshot.

use richdoc_core::Node;

/// A located code region: the node and its current document position.
///
/// The position is only valid for the snapshot it was located in; any edit
/// before the region shifts it.
#[derive(Debug, Clone, Copy)]
pub struct Region<'a> {
    /// The region node.
    pub node: &'a Node,
    /// Position of the node in the document.
    pub pos: usize,
}

impl Region<'_> {
    /// Position of the region's first content token (`pos + 1`, past the
    /// node's opening boundary).
    pub fn content_start(&self) -> usize {
        self.pos + 1
    }
}

/// Find every node of `kind` in `doc`, in document order.
///
/// Pure scan over the snapshot; nested containers are visited, so regions
/// inside blockquotes, list items, and the like are found too.
pub fn find_regions<'a>(doc: &'a Node, kind: &str) -> Vec<Region<'a>> {
    let mut regions = Vec::new();
    doc.descendants(&mut |node, pos| {
        if node.kind() == kind {
            regions.push(Region { node, pos });
        }
    });
    regions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn para(text: &str) -> Node {
        Node::new("paragraph", vec![Node::text(text)])
    }

    fn code(text: &str) -> Node {
        Node::new("code_block", vec![Node::text(text)])
    }

    #[test]
    fn test_finds_regions_in_document_order() {
        let doc = Node::new("doc", vec![code("a"), para("xy"), code("b")]);
        let regions = find_regions(&doc, "code_block");
        assert_eq!(regions.len(), 2);
        assert_eq!(regions[0].pos, 0);
        // code("a") = 3, para("xy") = 4.
        assert_eq!(regions[1].pos, 7);
        assert_eq!(regions[1].content_start(), 8);
    }

    #[test]
    fn test_finds_nested_regions() {
        let doc = Node::new(
            "doc",
            vec![Node::new("blockquote", vec![para("q"), code("nested")])],
        );
        let regions = find_regions(&doc, "code_block");
        assert_eq!(regions.len(), 1);
        // blockquote content at 1, para("q") = 3, so the region sits at 4.
        assert_eq!(regions[0].pos, 4);
    }

    #[test]
    fn test_no_regions() {
        let doc = Node::new("doc", vec![para("plain")]);
        assert!(find_regions(&doc, "code_block").is_empty());
    }
}
