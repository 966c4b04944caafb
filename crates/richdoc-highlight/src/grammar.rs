//! Grammar registration, resolution, and on-demand loading.
//!
//! A [`Grammar`] pairs a [`Language`] with a boxed [`Tokenizer`]. The
//! [`GrammarRegistry`] owns every registered grammar for one plugin instance
//! and resolves languages lazily through an injected [`GrammarLoader`].
//!
//! Loading may be asynchronous on the host side; the loader models that by
//! returning [`LoadStatus::Pending`]. The registry then marks the language
//! as in flight so later passes do not re-request it, and the region simply
//! stays unhighlighted until the host completes the fetch and calls
//! [`GrammarRegistry::register`]. Load failures are logged and not cached,
//! so a later pass retries.

use std::collections::{HashMap, HashSet};

use richdoc_lang::Language;
use thiserror::Error;

use crate::tokens::TokenNode;

/// A tokenizer for one language: turns source text into a token tree.
pub trait Tokenizer {
    /// Tokenize `text` into a tree of classified spans.
    ///
    /// The concatenated leaf text of the result must equal `text`.
    fn tokenize(&self, text: &str) -> Vec<TokenNode>;
}

/// A registered grammar: a language id plus its tokenizer.
pub struct Grammar {
    language: Language,
    tokenizer: Box<dyn Tokenizer>,
}

impl Grammar {
    /// Create a grammar for `language`.
    pub fn new(language: Language, tokenizer: impl Tokenizer + 'static) -> Self {
        Self {
            language,
            tokenizer: Box::new(tokenizer),
        }
    }

    /// The language this grammar tokenizes.
    pub fn language(&self) -> Language {
        self.language
    }

    /// Tokenize source text with this grammar.
    pub fn tokenize(&self, text: &str) -> Vec<TokenNode> {
        self.tokenizer.tokenize(text)
    }
}

impl std::fmt::Debug for Grammar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Grammar")
            .field("language", &self.language)
            .finish_non_exhaustive()
    }
}

/// Errors produced while loading a grammar module.
#[derive(Debug, Error)]
pub enum GrammarLoadError {
    /// No grammar module exists for the language.
    #[error("no grammar module available for `{0}`")]
    Unavailable(Language),
    /// The module exists but failed to load or register.
    #[error("grammar module for `{language}` failed to load: {reason}")]
    Load {
        /// The language whose module failed.
        language: Language,
        /// Host-provided failure description.
        reason: String,
    },
}

/// Outcome of a loader invocation.
pub enum LoadStatus {
    /// The grammar is available now.
    Ready(Grammar),
    /// A fetch is in flight; the host will call
    /// [`GrammarRegistry::register`] when it completes.
    Pending,
}

/// Host-injected source of grammar modules, invoked at most once per
/// language while no load is in flight.
pub trait GrammarLoader {
    /// Load the grammar module for `language`.
    fn load(&mut self, language: Language) -> Result<LoadStatus, GrammarLoadError>;
}

/// Registered grammars plus the in-flight bookkeeping for one plugin
/// instance.
#[derive(Default)]
pub struct GrammarRegistry {
    grammars: HashMap<Language, Grammar>,
    in_flight: HashSet<Language>,
    loader: Option<Box<dyn GrammarLoader>>,
}

impl std::fmt::Debug for GrammarRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GrammarRegistry")
            .field("registered", &self.grammars.keys().collect::<Vec<_>>())
            .field("in_flight", &self.in_flight)
            .finish_non_exhaustive()
    }
}

impl GrammarRegistry {
    /// An empty registry with no loader; only explicitly registered
    /// grammars resolve.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry that loads missing grammars through `loader`.
    pub fn with_loader(loader: impl GrammarLoader + 'static) -> Self {
        Self {
            grammars: HashMap::new(),
            in_flight: HashSet::new(),
            loader: Some(Box::new(loader)),
        }
    }

    /// Whether a grammar for `language` is registered.
    pub fn is_registered(&self, language: Language) -> bool {
        self.grammars.contains_key(&language)
    }

    /// Whether a load for `language` is currently in flight.
    pub fn is_loading(&self, language: Language) -> bool {
        self.in_flight.contains(&language)
    }

    /// Register a grammar, clearing any in-flight mark for its language.
    ///
    /// Idempotent: re-registering a language replaces the previous grammar.
    pub fn register(&mut self, grammar: Grammar) {
        let language = grammar.language();
        self.in_flight.remove(&language);
        self.grammars.insert(language, grammar);
    }

    /// Resolve the grammar for `language`, attempting a load on a miss.
    ///
    /// Returns `None` while a load is pending, after a load failure (logged,
    /// retried on a later call), or when no loader is installed. Never
    /// invokes the loader for a language already registered or in flight.
    pub fn resolve(&mut self, language: Language) -> Option<&Grammar> {
        if self.grammars.contains_key(&language) {
            return self.grammars.get(&language);
        }
        if self.in_flight.contains(&language) {
            return None;
        }
        let loader = self.loader.as_mut()?;
        match loader.load(language) {
            Ok(LoadStatus::Ready(grammar)) => {
                let key = grammar.language();
                self.grammars.insert(key, grammar);
                self.grammars.get(&key)
            }
            Ok(LoadStatus::Pending) => {
                self.in_flight.insert(language);
                None
            }
            Err(err) => {
                log::warn!("grammar load failed for `{language}`: {err}");
                None
            }
        }
    }
}
