//! Per-mutation records handed from the host to the highlighting core.

use crate::mapping::PositionMapping;
use crate::node::Node;

/// One document mutation as seen by the highlighting core.
///
/// The host produces a `Transaction` per apply-loop step: the new document
/// snapshot, the position mapping from the old snapshot's coordinate space,
/// tags describing the mutation, and the node kind enclosing the cursor
/// before and after the mutation (the inputs of the change-gate heuristic).
#[derive(Debug, Clone)]
pub struct Transaction {
    doc: Node,
    mapping: PositionMapping,
    doc_changed: bool,
    external_sync: bool,
    cursor_kind_before: Option<String>,
    cursor_kind_after: Option<String>,
}

impl Transaction {
    /// A transaction that did not change document content.
    pub fn new(doc: Node) -> Self {
        Self {
            doc,
            mapping: PositionMapping::identity(),
            doc_changed: false,
            external_sync: false,
            cursor_kind_before: None,
            cursor_kind_after: None,
        }
    }

    /// A synthetic transaction used to trigger the deferred first highlight
    /// pass shortly after mount. Carries no content change.
    pub fn refresh(doc: Node) -> Self {
        Self::new(doc)
    }

    /// Mark this transaction as a content change with the given mapping.
    pub fn with_change(mut self, mapping: PositionMapping) -> Self {
        self.doc_changed = true;
        self.mapping = mapping;
        self
    }

    /// Tag this transaction as originating from an external collaborative
    /// sync apply.
    pub fn from_external_sync(mut self) -> Self {
        self.external_sync = true;
        self
    }

    /// Record the node kinds enclosing the cursor before and after the
    /// mutation.
    pub fn with_cursor_kinds(
        mut self,
        before: impl Into<String>,
        after: impl Into<String>,
    ) -> Self {
        self.cursor_kind_before = Some(before.into());
        self.cursor_kind_after = Some(after.into());
        self
    }

    /// The new document snapshot.
    pub fn doc(&self) -> &Node {
        &self.doc
    }

    /// The position mapping from the previous snapshot's coordinates.
    pub fn mapping(&self) -> &PositionMapping {
        &self.mapping
    }

    /// Whether this mutation altered document content.
    pub fn doc_changed(&self) -> bool {
        self.doc_changed
    }

    /// Whether this mutation came from an external sync apply.
    pub fn external_sync(&self) -> bool {
        self.external_sync
    }

    /// Kind of the node enclosing the cursor before the mutation.
    pub fn cursor_kind_before(&self) -> Option<&str> {
        self.cursor_kind_before.as_deref()
    }

    /// Kind of the node enclosing the cursor after the mutation.
    pub fn cursor_kind_after(&self) -> Option<&str> {
        self.cursor_kind_after.as_deref()
    }
}
