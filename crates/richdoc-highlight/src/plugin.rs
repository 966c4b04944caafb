//! The change-gated highlighting plugin.
//!
//! [`CodeHighlightPlugin`] sits in the host's apply loop. Per transaction it
//! decides between a full recompute pass and remapping the previous
//! decoration set through the transaction's position mapping:
//!
//! - recompute when no pass has run yet, when the mutation changed content
//!   while the cursor sat in a region-kind node before or after it, or when
//!   the mutation came from an external sync apply;
//! - remap otherwise.
//!
//! The cursor-kind test is a deliberately cheap heuristic: it can
//! over-trigger when the cursor happens to sit inside a code region while
//! the edit was elsewhere, and it relies on the external-sync tag for edits
//! that never move the local cursor through a region.
//!
//! The first pass is deferred: mounting the plugin runs nothing. The host
//! schedules the [`RefreshToken`] and, when its timer fires, applies a
//! synthetic [`Transaction::refresh`]. The token is a weak one-shot handle,
//! so firing after the plugin was torn down (or a second time) is a no-op.

use std::cell::Cell;
use std::rc::{Rc, Weak};

use richdoc_core::{Decoration, Transaction};

use crate::engine::{HighlightEngine, HighlightOptions};
use crate::grammar::GrammarRegistry;

/// One editor-plugin instance: change gate, engine, and the current
/// decoration set.
#[derive(Debug)]
pub struct CodeHighlightPlugin {
    engine: HighlightEngine,
    has_highlighted_once: bool,
    decorations: Vec<Decoration>,
    refresh_spent: Rc<Cell<bool>>,
}

impl CodeHighlightPlugin {
    /// Mount a plugin instance. No pass runs here; schedule the
    /// [`RefreshToken`] from [`Self::refresh_token`] to trigger the first
    /// one.
    pub fn new(options: HighlightOptions, registry: GrammarRegistry) -> Self {
        Self {
            engine: HighlightEngine::new(options, registry),
            has_highlighted_once: false,
            decorations: Vec::new(),
            refresh_spent: Rc::new(Cell::new(false)),
        }
    }

    /// The one-shot handle for the deferred first pass.
    pub fn refresh_token(&self) -> RefreshToken {
        RefreshToken {
            spent: Rc::downgrade(&self.refresh_spent),
        }
    }

    /// The decoration set for the current document state.
    pub fn decorations(&self) -> &[Decoration] {
        &self.decorations
    }

    /// Whether a full pass has run at least once.
    pub fn has_highlighted(&self) -> bool {
        self.has_highlighted_once
    }

    /// The engine, e.g. for registering grammars after an asynchronous
    /// load completes.
    pub fn engine_mut(&mut self) -> &mut HighlightEngine {
        &mut self.engine
    }

    /// Process one transaction and return the decoration set for its
    /// document.
    pub fn apply(&mut self, tx: &Transaction) -> &[Decoration] {
        let code_block_changed = {
            let kind = self.engine.options().region_kind.as_str();
            tx.doc_changed()
                && (tx.cursor_kind_before() == Some(kind)
                    || tx.cursor_kind_after() == Some(kind))
        };

        if !self.has_highlighted_once || code_block_changed || tx.external_sync() {
            self.has_highlighted_once = true;
            self.decorations = self.engine.run_pass(tx.doc());
        } else {
            self.decorations = self
                .decorations
                .iter()
                .filter_map(|d| d.remap(tx.mapping()))
                .collect();
        }
        &self.decorations
    }
}

impl Drop for CodeHighlightPlugin {
    fn drop(&mut self) {
        // Cancel the deferred refresh if it has not fired yet.
        self.refresh_spent.set(true);
    }
}

/// A cancellable one-shot handle for the deferred first highlight pass.
///
/// The host's scheduler holds this across the deferral. [`RefreshToken::fire`]
/// reports whether the pass should actually run; it returns `false` once
/// spent, cancelled, or after the plugin was dropped.
#[derive(Debug, Clone)]
pub struct RefreshToken {
    spent: Weak<Cell<bool>>,
}

impl RefreshToken {
    /// Claim the deferred pass. Returns `true` exactly once, and only while
    /// the plugin is still alive; the caller should then apply a
    /// [`Transaction::refresh`] to the plugin.
    pub fn fire(&self) -> bool {
        match self.spent.upgrade() {
            Some(spent) if !spent.get() => {
                spent.set(true);
                true
            }
            _ => false,
        }
    }

    /// Cancel the deferred pass (teardown path).
    pub fn cancel(&self) {
        if let Some(spent) = self.spent.upgrade() {
            spent.set(true);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use richdoc_core::Node;

    #[test]
    fn test_refresh_token_fires_once() {
        let plugin = CodeHighlightPlugin::new(HighlightOptions::default(), GrammarRegistry::new());
        let token = plugin.refresh_token();
        assert!(token.fire());
        assert!(!token.fire());
    }

    #[test]
    fn test_refresh_token_noop_after_teardown() {
        let plugin = CodeHighlightPlugin::new(HighlightOptions::default(), GrammarRegistry::new());
        let token = plugin.refresh_token();
        drop(plugin);
        assert!(!token.fire());
    }

    #[test]
    fn test_refresh_token_cancel() {
        let plugin = CodeHighlightPlugin::new(HighlightOptions::default(), GrammarRegistry::new());
        let token = plugin.refresh_token();
        token.cancel();
        assert!(!token.fire());
    }

    #[test]
    fn test_first_apply_always_runs_a_pass() {
        let mut plugin =
            CodeHighlightPlugin::new(HighlightOptions::default(), GrammarRegistry::new());
        assert!(!plugin.has_highlighted());
        let doc = Node::new("doc", vec![]);
        plugin.apply(&Transaction::refresh(doc));
        assert!(plugin.has_highlighted());
    }
}
