//! The per-pass highlight engine.
//!
//! One pass walks every located region in document order and, per region:
//! resolves its language (skipping the sentinel and excluded languages),
//! resolves its grammar (skipping on a miss without aborting the pass),
//! reuses the cached result when the region node is deeply equal to the
//! cached snapshot, and otherwise tokenizes, flattens, and positions fresh
//! decorations. After all regions, the cache is purged down to the offsets
//! of the regions the pass located, skipped ones included.

use std::collections::HashSet;

use richdoc_core::{Decoration, Node};
use richdoc_lang::Language;

use crate::cache::HighlightCache;
use crate::grammar::{Grammar, GrammarRegistry};
use crate::regions::{Region, find_regions};
use crate::tokens::flatten;

/// Engine configuration, fixed per plugin instance.
#[derive(Debug, Clone)]
pub struct HighlightOptions {
    /// Node kind of code regions (e.g. `"code_block"`).
    pub region_kind: String,
    /// Whether to emit line-number gutter decorations.
    pub line_numbers: bool,
}

impl HighlightOptions {
    /// Options for the given region kind, with line numbers enabled.
    pub fn new(region_kind: impl Into<String>) -> Self {
        Self {
            region_kind: region_kind.into(),
            line_numbers: true,
        }
    }

    /// Toggle line-number decorations.
    pub fn with_line_numbers(mut self, enabled: bool) -> Self {
        self.line_numbers = enabled;
        self
    }
}

impl Default for HighlightOptions {
    fn default() -> Self {
        Self::new("code_block")
    }
}

/// Computes decoration sets for every code region of a document, caching
/// per-region results across passes.
#[derive(Debug)]
pub struct HighlightEngine {
    options: HighlightOptions,
    registry: GrammarRegistry,
    cache: HighlightCache,
}

impl HighlightEngine {
    /// Create an engine with its grammar registry.
    pub fn new(options: HighlightOptions, registry: GrammarRegistry) -> Self {
        Self {
            options,
            registry,
            cache: HighlightCache::new(),
        }
    }

    /// The engine's configuration.
    pub fn options(&self) -> &HighlightOptions {
        &self.options
    }

    /// The grammar registry, e.g. for registering a grammar once the host
    /// finishes an asynchronous load.
    pub fn registry_mut(&mut self) -> &mut GrammarRegistry {
        &mut self.registry
    }

    /// The per-region cache (read-only; useful for instrumentation).
    pub fn cache(&self) -> &HighlightCache {
        &self.cache
    }

    /// Run one full pass over `doc`, returning all decorations in document
    /// order.
    pub fn run_pass(&mut self, doc: &Node) -> Vec<Decoration> {
        let regions = find_regions(doc, &self.options.region_kind);
        // Skipped regions keep their offsets in the purge keep-set too; only
        // offsets with no current region are reclaimed.
        let keep: HashSet<usize> = regions.iter().map(|r| r.pos).collect();

        let mut out = Vec::new();
        for region in &regions {
            let language = Language::from_attr(region.node.attr("language"));
            if language == Language::None || language.is_excluded() {
                continue;
            }
            let Some(grammar) = self.registry.resolve(language) else {
                log::debug!(
                    "no grammar for `{language}`; region at {} left unhighlighted",
                    region.pos
                );
                continue;
            };
            if let Some(entry) = self.cache.get(region.pos) {
                if entry.node() == region.node {
                    out.extend_from_slice(entry.decorations());
                    continue;
                }
            }
            let decorations = highlight_region(&self.options, grammar, region);
            out.extend_from_slice(&decorations);
            self.cache.put(region.pos, region.node.clone(), decorations);
        }

        self.cache.purge(&keep);
        // Renderers receive one ordered set; a region's gutter-width span
        // anchors at the node itself, before its inline ranges.
        out.sort_by_key(Decoration::anchor);
        out
    }
}

/// Compute a single region's decorations from scratch.
fn highlight_region(
    options: &HighlightOptions,
    grammar: &Grammar,
    region: &Region<'_>,
) -> Vec<Decoration> {
    let start_pos = region.content_start();
    let text = region.node.text_content();
    let tokens = flatten(&grammar.tokenize(&text));

    let mut decorations = Vec::new();
    // Explicit cursor fold: every token advances the cursor, classified or
    // not, so later ranges stay position-exact.
    let mut cursor = start_pos;
    for token in &tokens {
        let from = cursor;
        let to = from + token.len();
        cursor = to;
        if token.classes.is_empty() {
            continue;
        }
        decorations.push(Decoration::Inline {
            from,
            to,
            class: token.class_str(),
        });
    }

    if options.line_numbers {
        let line_count = 1 + text.chars().filter(|&c| c == '\n').count();
        decorations.push(Decoration::LineNumbers {
            at: start_pos,
            line_count,
        });
        decorations.push(Decoration::GutterWidth {
            from: region.pos,
            to: region.pos + region.node.node_size(),
            digits: line_count.to_string().len(),
        });
    }

    decorations
}
