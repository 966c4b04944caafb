#![warn(missing_docs)]
//! `richdoc-highlight` - incremental code-region highlighting for richdoc
//! documents.
//!
//! The hard part here is not tokenizing (that is a [`Tokenizer`] behind the
//! grammar seam) but keeping positioned decorations correct and cheap while
//! the surrounding document mutates:
//!
//! - [`regions`] locates embedded code regions in a snapshot;
//! - [`tokens`] flattens a tokenizer's nested span tree into positioned
//!   class runs;
//! - [`cache`] keys per-region results by document offset and revalidates
//!   them by deep node equality, purging orphans every pass;
//! - [`engine`] orchestrates a full pass over all regions;
//! - [`plugin`] gates passes per transaction, remapping the previous
//!   decoration set through the edit's position mapping whenever a
//!   recompute is not warranted, and defers the first pass past mount.
//!
//! Grammars are resolved through an injected [`GrammarRegistry`] with a
//! load-once-per-language guard; a missing or failing grammar degrades that
//! region to plain text and never aborts a pass. A built-in
//! [`RegexTokenizer`] covers lightweight grammars without an external
//! tokenizer.
//!
//! # Example
//!
//! ```rust
//! use richdoc_core::{Node, Transaction};
//! use richdoc_highlight::{
//!     CodeHighlightPlugin, Grammar, GrammarRegistry, HighlightOptions, RegexTokenizer,
//! };
//! use richdoc_lang::Language;
//!
//! let mut registry = GrammarRegistry::new();
//! registry.register(Grammar::new(
//!     Language::Rust,
//!     RegexTokenizer::rust_default().unwrap(),
//! ));
//!
//! let mut plugin = CodeHighlightPlugin::new(HighlightOptions::default(), registry);
//! let token = plugin.refresh_token();
//!
//! let doc = Node::new(
//!     "doc",
//!     vec![Node::new("code_block", vec![Node::text("let x = 1;")])
//!         .with_attr("language", "rust")],
//! );
//!
//! // Mount is cheap; the first pass runs when the deferred trigger fires.
//! assert!(plugin.decorations().is_empty());
//! if token.fire() {
//!     plugin.apply(&Transaction::refresh(doc));
//! }
//! assert!(!plugin.decorations().is_empty());
//! ```

pub mod cache;
pub mod engine;
pub mod grammar;
pub mod plugin;
pub mod regex_grammar;
pub mod regions;
pub mod tokens;

pub use cache::{CacheEntry, HighlightCache};
pub use engine::{HighlightEngine, HighlightOptions};
pub use grammar::{Grammar, GrammarLoadError, GrammarLoader, GrammarRegistry, LoadStatus, Tokenizer};
pub use plugin::{CodeHighlightPlugin, RefreshToken};
pub use regex_grammar::{RegexRule, RegexTokenizer};
pub use regions::{Region, find_regions};
pub use tokens::{FlatToken, TokenNode, flatten};
