//! Per-region annotation cache.
//!
//! Entries are keyed by a region's document position and hold the node
//! snapshot the decorations were computed from. An entry may be reused only
//! while the region currently at that position is deeply equal to the stored
//! snapshot; the check happens unconditionally at read time, so a stale
//! entry can never leak into output. After every full pass the cache is
//! purged down to the positions of currently located regions, reclaiming
//! entries for deleted or moved regions.
//!
//! The cache is owned by one plugin instance and dies with it.

use std::collections::{HashMap, HashSet};

use richdoc_core::{Decoration, Node};

/// One cached region result.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    node: Node,
    decorations: Vec<Decoration>,
}

impl CacheEntry {
    /// The node snapshot the decorations were computed from.
    pub fn node(&self) -> &Node {
        &self.node
    }

    /// The decorations computed for that snapshot.
    pub fn decorations(&self) -> &[Decoration] {
        &self.decorations
    }
}

/// Position-keyed cache of per-region decoration results.
#[derive(Debug, Clone, Default)]
pub struct HighlightCache {
    entries: HashMap<usize, CacheEntry>,
}

impl HighlightCache {
    /// An empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cached regions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when no regions are cached.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether an entry exists at `pos`.
    pub fn contains(&self, pos: usize) -> bool {
        self.entries.contains_key(&pos)
    }

    /// Look up the entry at `pos`. Callers must still verify the stored
    /// node against the current region before reuse.
    pub fn get(&self, pos: usize) -> Option<&CacheEntry> {
        self.entries.get(&pos)
    }

    /// Store a region's result at `pos`.
    pub fn put(&mut self, pos: usize, node: Node, decorations: Vec<Decoration>) {
        self.entries.insert(pos, CacheEntry { node, decorations });
    }

    /// Remove every entry whose position is not in `keep`.
    pub fn purge(&mut self, keep: &HashSet<usize>) {
        self.entries.retain(|pos, _| keep.contains(pos));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region(text: &str) -> Node {
        Node::new("code_block", vec![Node::text(text)])
    }

    #[test]
    fn test_put_get() {
        let mut cache = HighlightCache::new();
        assert!(cache.get(3).is_none());
        cache.put(3, region("x"), Vec::new());
        let entry = cache.get(3).unwrap();
        assert_eq!(entry.node(), &region("x"));
        assert!(entry.decorations().is_empty());
    }

    #[test]
    fn test_entry_invalid_for_changed_node() {
        let mut cache = HighlightCache::new();
        cache.put(3, region("x"), Vec::new());
        // Reuse decision is deep equality against the current node.
        let current = region("y");
        assert_ne!(cache.get(3).unwrap().node(), &current);
    }

    #[test]
    fn test_purge_reclaims_orphans() {
        let mut cache = HighlightCache::new();
        cache.put(0, region("a"), Vec::new());
        cache.put(9, region("b"), Vec::new());
        cache.put(20, region("c"), Vec::new());

        let keep: HashSet<usize> = [0, 20].into_iter().collect();
        cache.purge(&keep);

        assert_eq!(cache.len(), 2);
        assert!(cache.contains(0));
        assert!(!cache.contains(9));
        assert!(cache.contains(20));
    }
}
