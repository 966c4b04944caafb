//! Position-anchored decorations overlaid on the document by a renderer.
//!
//! Decorations never modify document content. For one highlighted code
//! region they come in three shapes: inline class ranges over the region's
//! text, a line-number widget anchored at the region's content start, and a
//! gutter-width hint spanning the whole region node.
//!
//! Every shape can be remapped through a [`PositionMapping`], which is how a
//! previously computed decoration set survives edits that do not warrant a
//! recompute. Inline ranges map their start forward and their end backward
//! and are dropped when they collapse; widgets are dropped when their anchor
//! was deleted.

use crate::mapping::{Assoc, PositionMapping};

/// One decoration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decoration {
    /// An inline style range `[from, to)` carrying a renderer class string.
    Inline {
        /// Range start, absolute document position (inclusive).
        from: usize,
        /// Range end, absolute document position (exclusive).
        to: usize,
        /// Space-joined class names for the renderer.
        class: String,
    },
    /// A widget rendering the ordered line numbers `1..=line_count`,
    /// anchored at a region's content start.
    LineNumbers {
        /// Anchor position (the region's content start).
        at: usize,
        /// Number of lines in the region's text.
        line_count: usize,
    },
    /// A structural hint spanning a whole region node, sizing the
    /// line-number gutter.
    GutterWidth {
        /// Position of the region node.
        from: usize,
        /// Position just past the region node.
        to: usize,
        /// Digit count of the region's largest line number.
        digits: usize,
    },
}

impl Decoration {
    /// The decoration's anchor position (its start).
    pub fn anchor(&self) -> usize {
        match self {
            Self::Inline { from, .. } | Self::GutterWidth { from, .. } => *from,
            Self::LineNumbers { at, .. } => *at,
        }
    }

    /// Carry this decoration across a mutation.
    ///
    /// Returns `None` when the mutation removed the decorated content: a
    /// collapsed range, or a deleted widget anchor.
    pub fn remap(&self, mapping: &PositionMapping) -> Option<Decoration> {
        match self {
            Self::Inline { from, to, class } => {
                let from = mapping.map(*from, Assoc::After);
                let to = mapping.map(*to, Assoc::Before);
                (from < to).then(|| Self::Inline {
                    from,
                    to,
                    class: class.clone(),
                })
            }
            Self::LineNumbers { at, line_count } => {
                let mapped = mapping.map_result(*at, Assoc::Before);
                (!mapped.deleted).then_some(Self::LineNumbers {
                    at: mapped.pos,
                    line_count: *line_count,
                })
            }
            Self::GutterWidth { from, to, digits } => {
                let from = mapping.map(*from, Assoc::After);
                let to = mapping.map(*to, Assoc::Before);
                (from < to).then_some(Self::GutterWidth {
                    from,
                    to,
                    digits: *digits,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_remap_shifts_past_insertion() {
        let dec = Decoration::Inline {
            from: 10,
            to: 15,
            class: "keyword".to_string(),
        };
        let mapping = PositionMapping::replace(2, 0, 4);
        assert_eq!(
            dec.remap(&mapping),
            Some(Decoration::Inline {
                from: 14,
                to: 19,
                class: "keyword".to_string(),
            })
        );
    }

    #[test]
    fn test_inline_remap_drops_collapsed_range() {
        let dec = Decoration::Inline {
            from: 10,
            to: 15,
            class: "string".to_string(),
        };
        // Delete 8..20, swallowing the whole range.
        let mapping = PositionMapping::replace(8, 12, 0);
        assert_eq!(dec.remap(&mapping), None);
    }

    #[test]
    fn test_inline_remap_excludes_text_inserted_at_edges() {
        let dec = Decoration::Inline {
            from: 10,
            to: 15,
            class: "comment".to_string(),
        };
        let mapping = PositionMapping::replace(10, 0, 2);
        // Start maps past the insertion; the new text is not styled.
        assert_eq!(
            dec.remap(&mapping),
            Some(Decoration::Inline {
                from: 12,
                to: 17,
                class: "comment".to_string(),
            })
        );
    }

    #[test]
    fn test_widget_remap_drops_deleted_anchor() {
        let dec = Decoration::LineNumbers { at: 6, line_count: 3 };
        let deleted = PositionMapping::replace(4, 5, 0);
        assert_eq!(dec.remap(&deleted), None);

        let shifted = PositionMapping::replace(0, 2, 0);
        assert_eq!(
            dec.remap(&shifted),
            Some(Decoration::LineNumbers { at: 4, line_count: 3 })
        );
    }
}
