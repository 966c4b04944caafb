//! Position mapping across a document mutation.
//!
//! A mutation replaces ranges of the old document with new content. A
//! [`PositionMapping`] records those replacements (in old-document
//! coordinates, ascending, non-overlapping) and carries arbitrary positions
//! from the old coordinate space into the new one. Consumers use it to shift
//! previously computed decorations across an edit instead of recomputing
//! them.

/// Which side a mapped position associates with when content is inserted
/// exactly at that position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assoc {
    /// Stay before content inserted at the position.
    Before,
    /// Move after content inserted at the position.
    After,
}

/// One replaced range: `old_len` positions starting at `start` (old
/// coordinates) were replaced by `new_len` positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplacedRange {
    /// Start of the replaced range, in old-document positions.
    pub start: usize,
    /// Length of the replaced range in the old document.
    pub old_len: usize,
    /// Length of the replacement in the new document.
    pub new_len: usize,
}

impl ReplacedRange {
    /// Create a replaced range.
    pub fn new(start: usize, old_len: usize, new_len: usize) -> Self {
        Self {
            start,
            old_len,
            new_len,
        }
    }
}

/// Result of mapping one position, with deletion info.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mapped {
    /// The position in the new document's coordinate space.
    pub pos: usize,
    /// `true` if the position sat strictly inside replaced content.
    pub deleted: bool,
}

/// A position transform built from the ordered replacements of one mutation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PositionMapping {
    ranges: Vec<ReplacedRange>,
}

impl PositionMapping {
    /// The identity mapping (no replacements).
    pub fn identity() -> Self {
        Self::default()
    }

    /// Build a mapping from replaced ranges.
    ///
    /// Ranges must be in ascending `start` order and non-overlapping, all
    /// expressed in old-document coordinates.
    pub fn new(ranges: Vec<ReplacedRange>) -> Self {
        Self { ranges }
    }

    /// Convenience constructor for a single replacement.
    pub fn replace(start: usize, old_len: usize, new_len: usize) -> Self {
        Self::new(vec![ReplacedRange::new(start, old_len, new_len)])
    }

    /// Returns `true` if this mapping moves no positions.
    pub fn is_identity(&self) -> bool {
        self.ranges.iter().all(|r| r.old_len == 0 && r.new_len == 0)
    }

    /// Map a position into the new coordinate space.
    pub fn map(&self, pos: usize, assoc: Assoc) -> usize {
        self.map_result(pos, assoc).pos
    }

    /// Map a position, also reporting whether it was deleted.
    pub fn map_result(&self, pos: usize, assoc: Assoc) -> Mapped {
        let mut diff: isize = 0;
        for range in &self.ranges {
            if range.start > pos {
                break;
            }
            let end = range.start + range.old_len;
            if pos == range.start && (range.old_len > 0 || assoc == Assoc::Before) {
                // Leading edge of a replacement, or staying before an
                // insertion at exactly this position.
                return Mapped {
                    pos: (range.start as isize + diff) as usize,
                    deleted: false,
                };
            }
            if pos < end {
                let base = (range.start as isize + diff) as usize;
                let mapped = match assoc {
                    Assoc::Before => base,
                    Assoc::After => base + range.new_len,
                };
                return Mapped {
                    pos: mapped,
                    deleted: true,
                };
            }
            // The range lies fully before `pos` (it may touch it at `end`);
            // fold it into the running diff so an adjacent range starting at
            // the same old offset still applies.
            diff += range.new_len as isize - range.old_len as isize;
            if pos == end && assoc == Assoc::Before {
                return Mapped {
                    pos: (pos as isize + diff) as usize,
                    deleted: false,
                };
            }
        }
        Mapped {
            pos: (pos as isize + diff) as usize,
            deleted: false,
        }
    }
}
