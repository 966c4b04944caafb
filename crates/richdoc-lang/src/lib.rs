#![warn(missing_docs)]
//! `richdoc-lang` - static language registry for richdoc code regions.
//!
//! This crate intentionally stays lightweight and does **not** depend on any
//! tokenizer or highlighting system. It provides the closed enumeration of
//! language identifiers a code region's `language` attribute may carry, their
//! human-facing display names (for a host's language picker), the `none`
//! sentinel that disables highlighting, and the small excluded subset that a
//! host renders through a separate path instead of tokenization.

use std::fmt;

/// The attribute value of the "no highlighting" sentinel.
pub const NONE_ATTR: &str = "none";

/// A code-region language identifier.
///
/// This enumeration is closed: attribute values outside it degrade to
/// [`Language::None`] (plain, unstyled rendering) rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Language {
    /// The sentinel: no highlighting for this region.
    None,
    /// Plain text (tokenized, but grammars typically classify nothing).
    PlainText,
    /// Rust.
    Rust,
    /// C.
    C,
    /// C++.
    Cpp,
    /// Go.
    Go,
    /// Python.
    Python,
    /// JavaScript.
    JavaScript,
    /// TypeScript.
    TypeScript,
    /// JSON.
    Json,
    /// TOML.
    Toml,
    /// YAML.
    Yaml,
    /// HTML.
    Html,
    /// CSS.
    Css,
    /// Shell / Bash.
    Bash,
    /// SQL.
    Sql,
    /// Markdown.
    Markdown,
    /// Mermaid diagrams - rendered by a separate path, never tokenized.
    Mermaid,
    /// LaTeX math - rendered by a separate path, never tokenized.
    Latex,
}

/// `(attribute id, display name)` rows of the registry, excluding the
/// sentinel.
pub const LANGUAGES: &[(&str, &str)] = &[
    ("plaintext", "Plain Text"),
    ("rust", "Rust"),
    ("c", "C"),
    ("cpp", "C++"),
    ("go", "Go"),
    ("python", "Python"),
    ("javascript", "JavaScript"),
    ("typescript", "TypeScript"),
    ("json", "JSON"),
    ("toml", "TOML"),
    ("yaml", "YAML"),
    ("html", "HTML"),
    ("css", "CSS"),
    ("bash", "Bash"),
    ("sql", "SQL"),
    ("markdown", "Markdown"),
    ("mermaid", "Mermaid"),
    ("latex", "LaTeX"),
];

impl Language {
    /// Every registry member, excluding the sentinel.
    pub const ALL: &'static [Language] = &[
        Language::PlainText,
        Language::Rust,
        Language::C,
        Language::Cpp,
        Language::Go,
        Language::Python,
        Language::JavaScript,
        Language::TypeScript,
        Language::Json,
        Language::Toml,
        Language::Yaml,
        Language::Html,
        Language::Css,
        Language::Bash,
        Language::Sql,
        Language::Markdown,
        Language::Mermaid,
        Language::Latex,
    ];

    /// Resolve a region's `language` attribute.
    ///
    /// An absent attribute, the `none` sentinel, and any identifier outside
    /// the registry all resolve to [`Language::None`]. A few common aliases
    /// (`js`, `ts`, `py`, `sh`, `c++`) are accepted.
    pub fn from_attr(attr: Option<&str>) -> Language {
        let Some(attr) = attr else {
            return Language::None;
        };
        match attr {
            NONE_ATTR | "" => Language::None,
            "plaintext" | "text" | "txt" => Language::PlainText,
            "rust" | "rs" => Language::Rust,
            "c" => Language::C,
            "cpp" | "c++" => Language::Cpp,
            "go" => Language::Go,
            "python" | "py" => Language::Python,
            "javascript" | "js" => Language::JavaScript,
            "typescript" | "ts" => Language::TypeScript,
            "json" => Language::Json,
            "toml" => Language::Toml,
            "yaml" | "yml" => Language::Yaml,
            "html" => Language::Html,
            "css" => Language::Css,
            "bash" | "sh" | "shell" => Language::Bash,
            "sql" => Language::Sql,
            "markdown" | "md" => Language::Markdown,
            "mermaid" => Language::Mermaid,
            "latex" | "tex" => Language::Latex,
            _ => Language::None,
        }
    }

    /// The canonical attribute identifier.
    pub fn attr(&self) -> &'static str {
        match self {
            Language::None => NONE_ATTR,
            Language::PlainText => "plaintext",
            Language::Rust => "rust",
            Language::C => "c",
            Language::Cpp => "cpp",
            Language::Go => "go",
            Language::Python => "python",
            Language::JavaScript => "javascript",
            Language::TypeScript => "typescript",
            Language::Json => "json",
            Language::Toml => "toml",
            Language::Yaml => "yaml",
            Language::Html => "html",
            Language::Css => "css",
            Language::Bash => "bash",
            Language::Sql => "sql",
            Language::Markdown => "markdown",
            Language::Mermaid => "mermaid",
            Language::Latex => "latex",
        }
    }

    /// The human-facing display name.
    pub fn display_name(&self) -> &'static str {
        if *self == Language::None {
            return "None";
        }
        LANGUAGES
            .iter()
            .find(|(id, _)| *id == self.attr())
            .map(|(_, name)| *name)
            .unwrap_or("None")
    }

    /// Languages rendered by a separate path (diagrams, math) rather than
    /// tokenization.
    pub fn is_excluded(&self) -> bool {
        matches!(self, Language::Mermaid | Language::Latex)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.attr())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_attr_sentinel_and_absent() {
        assert_eq!(Language::from_attr(None), Language::None);
        assert_eq!(Language::from_attr(Some("none")), Language::None);
        assert_eq!(Language::from_attr(Some("")), Language::None);
    }

    #[test]
    fn test_from_attr_unknown_degrades_to_none() {
        assert_eq!(Language::from_attr(Some("brainfuck")), Language::None);
    }

    #[test]
    fn test_from_attr_aliases() {
        assert_eq!(Language::from_attr(Some("js")), Language::JavaScript);
        assert_eq!(Language::from_attr(Some("py")), Language::Python);
        assert_eq!(Language::from_attr(Some("c++")), Language::Cpp);
    }

    #[test]
    fn test_round_trip_attr_ids() {
        for lang in Language::ALL {
            assert_eq!(Language::from_attr(Some(lang.attr())), *lang);
        }
    }

    #[test]
    fn test_excluded_subset() {
        assert!(Language::Mermaid.is_excluded());
        assert!(Language::Latex.is_excluded());
        assert!(!Language::Rust.is_excluded());
        assert!(!Language::None.is_excluded());
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Language::Cpp.display_name(), "C++");
        assert_eq!(Language::None.display_name(), "None");
    }
}
