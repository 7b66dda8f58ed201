//! Ordered collections of atomic style tokens.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// An ordered set of atomic style tokens applied together.
///
/// Rule sets are written as space-separated strings (`"px-12 py-8 rounded-8"`)
/// and keep their tokens in the order they were given. Concatenation never
/// reorders or deduplicates, so a later token can still override an earlier
/// one in the consuming stylesheet.
///
/// # Example
///
/// ```rust
/// use atomstyle::RuleSet;
///
/// let mut rules = RuleSet::parse("inline-flex items-center");
/// rules.extend(&RuleSet::parse("  p-1\trounded-2 "));
///
/// assert_eq!(rules.len(), 4);
/// assert_eq!(rules.to_string(), "inline-flex items-center p-1 rounded-2");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RulesRepr", into = "String")]
pub struct RuleSet {
    tokens: Vec<String>,
}

impl RuleSet {
    /// Creates an empty rule set.
    pub fn new() -> Self {
        Self { tokens: Vec::new() }
    }

    /// Parses a whitespace-separated token string.
    ///
    /// Runs of whitespace collapse; leading and trailing whitespace is ignored.
    pub fn parse(source: &str) -> Self {
        Self {
            tokens: source.split_whitespace().map(str::to_string).collect(),
        }
    }

    /// Appends every token found in `source`.
    pub fn push(&mut self, source: &str) {
        self.tokens
            .extend(source.split_whitespace().map(str::to_string));
    }

    /// Appends the tokens of another rule set, preserving order.
    pub fn extend(&mut self, other: &RuleSet) {
        self.tokens.extend(other.tokens.iter().cloned());
    }

    /// Returns a new rule set holding `self` followed by `other`.
    pub fn concat(&self, other: &RuleSet) -> RuleSet {
        let mut rules = self.clone();
        rules.extend(other);
        rules
    }

    /// Iterates over the tokens in order.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Returns `true` if `token` appears anywhere in the set.
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }

    /// Returns `true` if the tokens of `prefix` open this set, in order.
    pub fn starts_with(&self, prefix: &RuleSet) -> bool {
        self.tokens.starts_with(&prefix.tokens)
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for token in &self.tokens {
            if !first {
                f.write_str(" ")?;
            }
            f.write_str(token)?;
            first = false;
        }
        Ok(())
    }
}

impl FromStr for RuleSet {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(RuleSet::parse(s))
    }
}

impl From<&str> for RuleSet {
    fn from(source: &str) -> Self {
        RuleSet::parse(source)
    }
}

impl From<String> for RuleSet {
    fn from(source: String) -> Self {
        RuleSet::parse(&source)
    }
}

impl From<RuleSet> for String {
    fn from(rules: RuleSet) -> Self {
        rules.to_string()
    }
}

/// Stylesheets accept either `"a b c"` or `["a b", "c"]`.
#[derive(Deserialize)]
#[serde(untagged)]
enum RulesRepr {
    Text(String),
    List(Vec<String>),
}

impl From<RulesRepr> for RuleSet {
    fn from(repr: RulesRepr) -> Self {
        match repr {
            RulesRepr::Text(text) => RuleSet::parse(&text),
            RulesRepr::List(parts) => {
                let mut rules = RuleSet::new();
                for part in &parts {
                    rules.push(part);
                }
                rules
            }
        }
    }
}
