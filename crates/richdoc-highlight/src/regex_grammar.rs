//! A built-in regex rule tokenizer.
//!
//! Intended for lightweight grammars where a full parser is unnecessary.
//! Rules are tried over the remaining text; the earliest match wins, with
//! longer matches breaking start-position ties and rule order breaking the
//! rest. Classified matches become single-class containers; the text between
//! matches becomes unclassified leaves, so flattening the output always
//! reconstructs the input exactly.

use regex::Regex;

use crate::grammar::Tokenizer;
use crate::tokens::TokenNode;

/// A single tokenizing rule: a pattern and the class it assigns.
#[derive(Debug, Clone)]
pub struct RegexRule {
    regex: Regex,
    class: String,
}

impl RegexRule {
    /// Compile a rule.
    pub fn new(pattern: &str, class: impl Into<String>) -> Result<Self, regex::Error> {
        Ok(Self {
            regex: Regex::new(pattern)?,
            class: class.into(),
        })
    }

    /// The class this rule assigns.
    pub fn class(&self) -> &str {
        &self.class
    }
}

/// An ordered-rule regex tokenizer.
#[derive(Debug, Clone)]
pub struct RegexTokenizer {
    rules: Vec<RegexRule>,
}

impl RegexTokenizer {
    /// Create a tokenizer from ordered rules.
    pub fn new(rules: Vec<RegexRule>) -> Self {
        Self { rules }
    }

    /// The tokenizer's rules.
    pub fn rules(&self) -> &[RegexRule] {
        &self.rules
    }

    /// A small default Rust-ish grammar (comments, strings, keywords,
    /// numbers).
    pub fn rust_default() -> Result<Self, regex::Error> {
        Ok(Self::new(vec![
            RegexRule::new(r"//[^\n]*", "comment")?,
            RegexRule::new(r#""(?:\\.|[^"\\])*""#, "string")?,
            RegexRule::new(
                r"\b(?:fn|let|mut|pub|struct|enum|impl|trait|match|if|else|for|while|loop|return|use|mod|where|const|static|move|async|await)\b",
                "keyword",
            )?,
            RegexRule::new(r"\b\d[\d_]*(?:\.\d+)?\b", "number")?,
        ]))
    }

    /// A small default JSON grammar (strings, numbers, booleans, null).
    pub fn json_default() -> Result<Self, regex::Error> {
        Ok(Self::new(vec![
            RegexRule::new(r#""(?:\\.|[^"\\])*""#, "string")?,
            RegexRule::new(r"-?(?:0|[1-9]\d*)(?:\.\d+)?(?:[eE][+-]?\d+)?", "number")?,
            RegexRule::new(r"\b(?:true|false)\b", "boolean")?,
            RegexRule::new(r"\bnull\b", "null")?,
        ]))
    }

    fn best_match(&self, rest: &str) -> Option<(usize, usize, &str)> {
        let mut best: Option<(usize, usize, &str)> = None;
        for rule in &self.rules {
            let Some(m) = rule.regex.find(rest) else {
                continue;
            };
            if m.end() == m.start() {
                continue;
            }
            let better = match best {
                None => true,
                Some((start, end, _)) => {
                    m.start() < start || (m.start() == start && m.end() > end)
                }
            };
            if better {
                best = Some((m.start(), m.end(), rule.class.as_str()));
            }
        }
        best
    }
}

impl Tokenizer for RegexTokenizer {
    fn tokenize(&self, text: &str) -> Vec<TokenNode> {
        let mut out = Vec::new();
        let mut at = 0;
        while at < text.len() {
            match self.best_match(&text[at..]) {
                Some((start, end, class)) => {
                    if start > 0 {
                        out.push(TokenNode::leaf(&text[at..at + start]));
                    }
                    out.push(TokenNode::container(
                        vec![class.to_string()],
                        vec![TokenNode::leaf(&text[at + start..at + end])],
                    ));
                    at += end;
                }
                None => {
                    out.push(TokenNode::leaf(&text[at..]));
                    break;
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::flatten;

    #[test]
    fn test_tokenize_round_trips_text() {
        let source = "fn add(a: u32, b: u32) -> u32 {\n    a + b // sum\n}\n";
        let tokenizer = RegexTokenizer::rust_default().unwrap();
        let text: String = flatten(&tokenizer.tokenize(source))
            .iter()
            .map(|t| t.text.as_str())
            .collect();
        assert_eq!(text, source);
    }

    #[test]
    fn test_earliest_match_wins_inside_strings() {
        // The `fn` keyword inside a string must not escape it.
        let tokenizer = RegexTokenizer::rust_default().unwrap();
        let flat = flatten(&tokenizer.tokenize(r#"let s = "fn";"#));
        let string_token = flat
            .iter()
            .find(|t| t.classes == vec!["string".to_string()])
            .expect("string token");
        assert_eq!(string_token.text, r#""fn""#);
        assert!(!flat.iter().any(|t| t.text == "fn"));
    }

    #[test]
    fn test_comment_swallows_trailing_code() {
        let tokenizer = RegexTokenizer::rust_default().unwrap();
        let flat = flatten(&tokenizer.tokenize("// let x = 1\nlet y = 2"));
        assert_eq!(flat[0].text, "// let x = 1");
        assert_eq!(flat[0].classes, vec!["comment".to_string()]);
        assert!(flat.iter().any(|t| t.text == "let" && t.classes == vec!["keyword".to_string()]));
    }

    #[test]
    fn test_unmatched_text_is_unclassified() {
        let tokenizer = RegexTokenizer::json_default().unwrap();
        let flat = flatten(&tokenizer.tokenize("{ }"));
        assert_eq!(flat.len(), 1);
        assert_eq!(flat[0].text, "{ }");
        assert!(flat[0].classes.is_empty());
    }

    #[test]
    fn test_empty_input_yields_no_tokens() {
        let tokenizer = RegexTokenizer::rust_default().unwrap();
        assert!(tokenizer.tokenize("").is_empty());
    }
}
