//! Name-keyed collections of themes.

use indexmap::IndexMap;

use super::kinds::ThemeKind;
use super::theme::Theme;
use crate::style::{InvalidTheme, ResolveError, RuleSet};

/// An ordered registry of themes, looked up by name.
///
/// A set usually starts from [`ThemeSet::builtin`] and is then extended with
/// themes loaded from stylesheets (see [`crate::stylesheet`]). Every
/// registered theme has passed [`Theme::validate`], so each resolved rule set
/// holds at least the size and variant tokens. Inserting a theme whose name
/// is already registered replaces it in place.
///
/// # Example
///
/// ```rust
/// use atomstyle::{Theme, ThemeSet};
///
/// let mut themes = ThemeSet::builtin();
/// themes.insert(
///     Theme::new("chip")
///         .size("small", "px-2")
///         .variant("neutral", "bg-kilvish-200"),
/// ).unwrap();
///
/// let classes = themes.resolve("chip", "small", "neutral").unwrap();
/// assert_eq!(classes.to_string(), "px-2 bg-kilvish-200");
/// assert!(themes.resolve("link", "small", "neutral").is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeSet {
    themes: IndexMap<String, Theme>,
}

impl ThemeSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self {
            themes: IndexMap::new(),
        }
    }

    /// Creates a set holding the `button` and `icon-button` themes.
    pub fn builtin() -> Self {
        let mut set = Self::new();
        for kind in ThemeKind::ALL {
            set.register(kind.theme().clone());
        }
        set
    }

    /// Registers a theme under its own name, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidTheme`] and leaves the set unchanged if the theme
    /// fails [`Theme::validate`].
    pub fn insert(&mut self, theme: Theme) -> Result<(), InvalidTheme> {
        theme.validate()?;
        self.register(theme);
        Ok(())
    }

    /// Moves every theme of `other` into this set. Later themes win.
    pub fn merge(&mut self, other: ThemeSet) {
        for (_, theme) in other.themes {
            self.register(theme);
        }
    }

    fn register(&mut self, theme: Theme) {
        self.themes.insert(theme.name().to_string(), theme);
    }

    pub fn get(&self, name: &str) -> Option<&Theme> {
        self.themes.get(name)
    }

    /// Looks up a theme, failing with [`ResolveError::UnknownTheme`].
    pub fn theme(&self, name: &str) -> Result<&Theme, ResolveError> {
        self.themes
            .get(name)
            .ok_or_else(|| ResolveError::UnknownTheme {
                name: name.to_string(),
                expected: self.names().map(str::to_string).collect(),
            })
    }

    /// Theme names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.themes.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Theme> {
        self.themes.values()
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }

    /// Resolves the rules of a named theme for a size and variant.
    pub fn resolve(&self, theme: &str, size: &str, variant: &str) -> Result<RuleSet, ResolveError> {
        self.theme(theme)?.resolve(size, variant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_contents() {
        let set = ThemeSet::builtin();
        let names: Vec<&str> = set.names().collect();
        assert_eq!(names, vec!["button", "icon-button"]);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_resolve_through_set() {
        let set = ThemeSet::builtin();
        let direct = ThemeKind::Button.theme().resolve("large", "success").unwrap();
        assert_eq!(set.resolve("button", "large", "success").unwrap(), direct);
    }

    #[test]
    fn test_unknown_theme() {
        let set = ThemeSet::builtin();
        let err = set.resolve("link", "small", "primary").unwrap_err();
        assert_eq!(
            err,
            ResolveError::UnknownTheme {
                name: "link".to_string(),
                expected: vec!["button".to_string(), "icon-button".to_string()],
            }
        );
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut set = ThemeSet::builtin();
        set.insert(Theme::new("button").size("small", "p-0").variant("flat", "border-0"))
            .unwrap();

        let names: Vec<&str> = set.names().collect();
        assert_eq!(names, vec!["button", "icon-button"]);
        assert!(set.resolve("button", "small", "primary").is_err());
        assert_eq!(
            set.resolve("button", "small", "flat").unwrap().to_string(),
            "p-0 border-0"
        );
    }

    #[test]
    fn test_merge_later_wins() {
        let mut set = ThemeSet::builtin();
        let mut extra = ThemeSet::new();
        extra
            .insert(Theme::new("chip").size("small", "px-2").variant("neutral", "bg-white"))
            .unwrap();
        extra
            .insert(Theme::new("icon-button").size("small", "p-0").variant("ghost", "border-0"))
            .unwrap();
        set.merge(extra);

        assert_eq!(set.len(), 3);
        assert!(set.get("chip").is_some());
        assert!(set.resolve("icon-button", "small", "ghost").is_ok());
    }

    #[test]
    fn test_empty_set() {
        let set = ThemeSet::default();
        assert!(set.is_empty());
        let err = set.resolve("button", "small", "primary").unwrap_err();
        assert!(err.to_string().contains("unknown theme 'button'"));
    }

    #[test]
    fn test_insert_rejects_empty_entry() {
        let mut set = ThemeSet::builtin();
        let err = set
            .insert(Theme::new("t").size("s", "").variant("v", "x"))
            .unwrap_err();
        assert_eq!(err.message, "size 's' has no rules");
        assert!(set.get("t").is_none());
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_failed_insert_keeps_previous_theme() {
        let mut set = ThemeSet::builtin();
        assert!(set.insert(Theme::new("button").size("small", "p-0")).is_err());
        assert!(set.resolve("button", "small", "primary").is_ok());
    }
}
