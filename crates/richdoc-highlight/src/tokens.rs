//! Token trees and their flattening.
//!
//! A tokenizer produces a tree of classified spans: containers carry class
//! names and children; leaves carry literal text. Flattening turns that tree
//! into an ordered run of [`FlatToken`]s, pushing every ancestor's classes
//! down onto each leaf. Concatenating the flattened tokens' text
//! reconstructs the tokenized source exactly.

/// One node of a tokenizer's output tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenNode {
    /// A classified span containing child nodes.
    Container {
        /// Class names this container contributes to its descendants.
        classes: Vec<String>,
        /// Child nodes, in source order.
        children: Vec<TokenNode>,
    },
    /// A literal run of source text.
    Leaf {
        /// The literal text.
        text: String,
    },
}

impl TokenNode {
    /// Create a leaf node.
    pub fn leaf(text: impl Into<String>) -> Self {
        Self::Leaf { text: text.into() }
    }

    /// Create a container node.
    pub fn container(classes: Vec<String>, children: Vec<TokenNode>) -> Self {
        Self::Container { classes, children }
    }
}

/// A leaf of the flattened token tree: literal text plus the full ordered
/// set of ancestor classes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatToken {
    /// The literal text.
    pub text: String,
    /// Accumulated ancestor classes, outermost first.
    pub classes: Vec<String>,
}

impl FlatToken {
    /// Length of the token's text in positions (`char`s).
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Returns `true` for zero-length tokens.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The renderer-facing class string (space-joined).
    pub fn class_str(&self) -> String {
        self.classes.join(" ")
    }
}

/// Flatten a token tree into an ordered leaf sequence.
///
/// Depth-first pre-order: a container's classes are appended to the
/// inherited accumulator before recursing; each leaf is emitted with the
/// full accumulated class list. The inherited list starts empty.
pub fn flatten(nodes: &[TokenNode]) -> Vec<FlatToken> {
    let mut out = Vec::new();
    flatten_into(nodes, &[], &mut out);
    out
}

fn flatten_into(nodes: &[TokenNode], inherited: &[String], out: &mut Vec<FlatToken>) {
    for node in nodes {
        match node {
            TokenNode::Leaf { text } => out.push(FlatToken {
                text: text.clone(),
                classes: inherited.to_vec(),
            }),
            TokenNode::Container { classes, children } => {
                let mut acc = inherited.to_vec();
                acc.extend(classes.iter().cloned());
                flatten_into(children, &acc, out);
            }
        }
    }
}
