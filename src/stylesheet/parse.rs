//! YAML/JSON stylesheet parsing and serialization.

use std::fmt;
use std::marker::PhantomData;
use std::path::Path;

use indexmap::IndexMap;
use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};

use super::error::StylesheetError;
use crate::style::RuleSet;
use crate::theme::{Theme, ThemeSet};

/// A string-keyed map that trims its keys and rejects duplicates.
///
/// Plain map deserialization keeps the last of two equal keys; a stylesheet
/// that names the same theme, size, or variant twice is an error instead.
#[derive(Debug, Serialize)]
#[serde(transparent)]
struct UniqueKeys<V>(IndexMap<String, V>);

impl<V> Default for UniqueKeys<V> {
    fn default() -> Self {
        UniqueKeys(IndexMap::new())
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for UniqueKeys<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct UniqueKeysVisitor<V>(PhantomData<V>);

        impl<'de, V: Deserialize<'de>> Visitor<'de> for UniqueKeysVisitor<V> {
            type Value = UniqueKeys<V>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map with unique string keys")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries = IndexMap::new();
                while let Some((key, value)) = access.next_entry::<String, V>()? {
                    let key = key.trim().to_string();
                    if entries.contains_key(&key) {
                        return Err(de::Error::custom(format_args!("duplicate key '{}'", key)));
                    }
                    entries.insert(key, value);
                }
                Ok(UniqueKeys(entries))
            }
        }

        deserializer.deserialize_map(UniqueKeysVisitor(PhantomData))
    }
}

/// On-disk shape of a single theme.
#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct ThemeDef {
    #[serde(default, skip_serializing_if = "RuleSet::is_empty")]
    base: RuleSet,
    #[serde(default)]
    sizes: UniqueKeys<RuleSet>,
    #[serde(default)]
    variants: UniqueKeys<RuleSet>,
}

type Document = UniqueKeys<ThemeDef>;

impl ThemeDef {
    fn into_theme(self, name: &str) -> Theme {
        let theme = Theme::new(name).base(self.base);
        let theme = self
            .sizes
            .0
            .into_iter()
            .fold(theme, |theme, (key, rules)| theme.size(&key, rules));
        self.variants
            .0
            .into_iter()
            .fold(theme, |theme, (key, rules)| theme.variant(&key, rules))
    }

    fn from_theme(theme: &Theme) -> Self {
        Self {
            base: theme.base.clone(),
            sizes: UniqueKeys(theme.sizes.clone()),
            variants: UniqueKeys(theme.variants.clone()),
        }
    }
}

fn build(document: Document) -> Result<ThemeSet, StylesheetError> {
    let mut set = ThemeSet::new();
    for (name, def) in document.0 {
        set.insert(def.into_theme(&name))?;
    }
    tracing::debug!(themes = set.len(), "parsed stylesheet");
    Ok(set)
}

impl ThemeSet {
    /// Parses themes from a YAML stylesheet.
    ///
    /// The document maps theme names to `base`, `sizes`, and `variants`.
    /// Rules may be written as a string or a list of strings.
    ///
    /// ```rust
    /// use atomstyle::ThemeSet;
    ///
    /// let themes = ThemeSet::from_yaml(r#"
    /// chip:
    ///   base: inline-flex rounded-full
    ///   sizes:
    ///     small: px-2 text-xs
    ///   variants:
    ///     neutral: [bg-kilvish-200, text-kilvish]
    /// "#).unwrap();
    ///
    /// let rules = themes.resolve("chip", "small", "neutral").unwrap();
    /// assert_eq!(
    ///     rules.to_string(),
    ///     "inline-flex rounded-full px-2 text-xs bg-kilvish-200 text-kilvish"
    /// );
    /// ```
    pub fn from_yaml(source: &str) -> Result<Self, StylesheetError> {
        let document: Document = serde_yaml::from_str(source)?;
        build(document)
    }

    /// Parses themes from a JSON stylesheet with the same shape as YAML.
    pub fn from_json(source: &str) -> Result<Self, StylesheetError> {
        let document: Document = serde_json::from_str(source)?;
        build(document)
    }

    /// Reads a stylesheet from disk, choosing the format by extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, StylesheetError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let parse: fn(&str) -> Result<ThemeSet, StylesheetError> = match extension.as_deref() {
            Some("yaml") | Some("yml") => ThemeSet::from_yaml,
            Some("json") => ThemeSet::from_json,
            _ => {
                return Err(StylesheetError::UnsupportedFormat {
                    path: path.to_path_buf(),
                })
            }
        };

        tracing::debug!(path = %path.display(), "loading stylesheet");
        let source = std::fs::read_to_string(path).map_err(|source| StylesheetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        parse(&source)
    }

    /// Serializes every theme as a YAML stylesheet.
    pub fn to_yaml(&self) -> Result<String, StylesheetError> {
        Ok(serde_yaml::to_string(&self.document())?)
    }

    /// Serializes every theme as a pretty-printed JSON stylesheet.
    pub fn to_json(&self) -> Result<String, StylesheetError> {
        Ok(serde_json::to_string_pretty(&self.document())?)
    }

    fn document(&self) -> Document {
        UniqueKeys(
            self.iter()
                .map(|theme| (theme.name().to_string(), ThemeDef::from_theme(theme)))
                .collect(),
        )
    }
}
