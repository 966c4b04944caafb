#![warn(missing_docs)]
//! `richdoc-core` - host-document interface types for richdoc.
//!
//! This crate defines the boundary between a host rich-text editor and the
//! highlighting core in `richdoc-highlight`. The host owns the document, its
//! schema, and its transaction system; this crate only models what the
//! highlighting side needs to *read*:
//!
//! - [`Node`] - an immutable-per-version document tree with deep equality and
//!   token-based positions (a node's content starts one position past the
//!   node itself).
//! - [`PositionMapping`] - the per-mutation transform that carries offsets
//!   from the old document's coordinate space into the new one.
//! - [`Transaction`] - the per-mutation record the host hands over: new
//!   document snapshot, mapping, change tags, and cursor context.
//! - [`Decoration`] - position-anchored style and widget annotations that a
//!   renderer overlays onto the text without altering document content.
//!
//! Nothing here mutates a document. Hosts build [`Node`] snapshots and
//! [`Transaction`]s; the highlighting core reads them and returns
//! [`Decoration`] sets.

pub mod decorations;
pub mod mapping;
pub mod node;
pub mod transaction;

pub use decorations::Decoration;
pub use mapping::{Assoc, Mapped, PositionMapping, ReplacedRange};
pub use node::Node;
pub use transaction::Transaction;
