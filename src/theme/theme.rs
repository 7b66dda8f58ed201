//! Theme struct for size/variant rule tables.

use indexmap::IndexMap;

use crate::style::{InvalidTheme, ResolveError, RuleSet};

/// A named bundle of base, size, and variant rule sets.
///
/// The base rules are always applied; one size entry and one variant entry
/// are picked by key. Keys keep their definition order, which is the order
/// reported by [`Theme::size_keys`] and [`Theme::variant_keys`].
///
/// Themes are built once with the fluent builder and then shared by
/// reference. Nothing mutates a theme through `&Theme`, so resolution is
/// safe from any number of threads.
///
/// # Example
///
/// ```rust
/// use atomstyle::Theme;
///
/// let chip = Theme::new("chip")
///     .base("inline-flex rounded-full")
///     .size("small", "px-2 text-xs")
///     .size("large", "px-4 text-base")
///     .variant("neutral", "bg-kilvish-200")
///     .variant("danger", "bg-red text-white");
///
/// let rules = chip.resolve("small", "danger").unwrap();
/// assert_eq!(
///     rules.to_string(),
///     "inline-flex rounded-full px-2 text-xs bg-red text-white"
/// );
/// assert!(chip.resolve("medium", "danger").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    name: String,
    pub(crate) base: RuleSet,
    pub(crate) sizes: IndexMap<String, RuleSet>,
    pub(crate) variants: IndexMap<String, RuleSet>,
}

impl Theme {
    /// Creates an empty theme with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            base: RuleSet::new(),
            sizes: IndexMap::new(),
            variants: IndexMap::new(),
        }
    }

    /// Sets the rules applied to every size and variant.
    pub fn base<R: Into<RuleSet>>(mut self, rules: R) -> Self {
        self.base = rules.into();
        self
    }

    /// Adds (or replaces) the rules for a size key.
    pub fn size<R: Into<RuleSet>>(mut self, key: &str, rules: R) -> Self {
        self.sizes.insert(key.to_string(), rules.into());
        self
    }

    /// Adds (or replaces) the rules for a variant key.
    pub fn variant<R: Into<RuleSet>>(mut self, key: &str, rules: R) -> Self {
        self.variants.insert(key.to_string(), rules.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn base_rules(&self) -> &RuleSet {
        &self.base
    }

    pub fn size_rules(&self, key: &str) -> Option<&RuleSet> {
        self.sizes.get(key)
    }

    pub fn variant_rules(&self, key: &str) -> Option<&RuleSet> {
        self.variants.get(key)
    }

    /// Size keys in definition order.
    pub fn size_keys(&self) -> impl Iterator<Item = &str> {
        self.sizes.keys().map(String::as_str)
    }

    /// Variant keys in definition order.
    pub fn variant_keys(&self) -> impl Iterator<Item = &str> {
        self.variants.keys().map(String::as_str)
    }

    /// Resolves the rules for a size and variant.
    ///
    /// The result is the base rules, then the size rules, then the variant
    /// rules. The size is checked before the variant.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::UnknownSize`] or [`ResolveError::UnknownVariant`]
    /// when a key is not defined by this theme.
    pub fn resolve(&self, size: &str, variant: &str) -> Result<RuleSet, ResolveError> {
        let size_rules = self
            .sizes
            .get(size)
            .ok_or_else(|| ResolveError::UnknownSize {
                theme: self.name.clone(),
                key: size.to_string(),
                expected: self.size_keys().map(str::to_string).collect(),
            })?;
        let variant_rules = self
            .variants
            .get(variant)
            .ok_or_else(|| ResolveError::UnknownVariant {
                theme: self.name.clone(),
                key: variant.to_string(),
                expected: self.variant_keys().map(str::to_string).collect(),
            })?;

        let mut rules = self.base.clone();
        rules.extend(size_rules);
        rules.extend(variant_rules);
        Ok(rules)
    }

    /// Checks that the theme can be registered in a [`ThemeSet`](crate::ThemeSet).
    ///
    /// The name must be non-blank, there must be at least one size and one
    /// variant, keys must be non-blank without surrounding whitespace, and
    /// no size or variant may have an empty rule set. The base may be empty.
    pub fn validate(&self) -> Result<(), InvalidTheme> {
        let invalid = |message: String| InvalidTheme {
            theme: self.name.clone(),
            message,
        };

        if self.name.trim().is_empty() {
            return Err(invalid("theme name is empty".to_string()));
        }
        if self.sizes.is_empty() {
            return Err(invalid("no sizes defined".to_string()));
        }
        if self.variants.is_empty() {
            return Err(invalid("no variants defined".to_string()));
        }
        for (key, rules) in &self.sizes {
            check_entry("size", key, rules).map_err(invalid)?;
        }
        for (key, rules) in &self.variants {
            check_entry("variant", key, rules).map_err(invalid)?;
        }
        Ok(())
    }
}

fn check_entry(part: &str, key: &str, rules: &RuleSet) -> Result<(), String> {
    if key.trim().is_empty() {
        return Err(format!("empty {} key", part));
    }
    if key.trim() != key {
        return Err(format!("{} key '{}' has surrounding whitespace", part, key));
    }
    if rules.is_empty() {
        return Err(format!("{} '{}' has no rules", part, key));
    }
    Ok(())
}
