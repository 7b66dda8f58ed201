//! Typed keys for the built-in themes.
//!
//! The built-in themes have closed key sets, so callers that know their
//! component at compile time can use these enums instead of strings. Every
//! typed key is guaranteed to exist in its theme.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::builtin;
use super::theme::Theme;
use crate::style::{KeyParseError, RuleSet};

macro_rules! closed_keys {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $key:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "lowercase")]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Every key, in theme definition order.
            pub const ALL: &'static [$name] = &[$( $name::$variant ),+];

            /// The key as it appears in the theme tables.
            pub fn as_str(self) -> &'static str {
                match self {
                    $( $name::$variant => $key ),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = KeyParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $key => Ok($name::$variant), )+
                    _ => Err(KeyParseError {
                        kind: $kind,
                        value: s.to_string(),
                        expected: Self::ALL.iter().map(|k| k.as_str()).collect(),
                    }),
                }
            }
        }
    };
}

closed_keys! {
    /// Component size shared by both built-in themes.
    Size, "size" {
        Small => "small",
        Normal => "normal",
        Large => "large",
    }
}

closed_keys! {
    /// Semantic state of a text button.
    ButtonVariant, "button variant" {
        Primary => "primary",
        Secondary => "secondary",
        Success => "success",
        Disabled => "disabled",
    }
}

closed_keys! {
    /// Semantic state of an icon-only button.
    IconButtonVariant, "icon-button variant" {
        Normal => "normal",
        Bordered => "bordered",
        Disabled => "disabled",
        Active => "active",
    }
}

/// Which built-in theme a component uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeKind {
    Button,
    IconButton,
}

impl ThemeKind {
    pub const ALL: &'static [ThemeKind] = &[ThemeKind::Button, ThemeKind::IconButton];

    /// Canonical theme name (`button` or `icon-button`).
    pub fn name(self) -> &'static str {
        match self {
            ThemeKind::Button => "button",
            ThemeKind::IconButton => "icon-button",
        }
    }

    /// The built-in theme for this kind.
    pub fn theme(self) -> &'static Theme {
        match self {
            ThemeKind::Button => &builtin::BUTTON,
            ThemeKind::IconButton => &builtin::ICON_BUTTON,
        }
    }
}

impl fmt::Display for ThemeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ThemeKind {
    type Err = KeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "button" => Ok(ThemeKind::Button),
            "icon-button" | "iconbutton" | "icon_button" => Ok(ThemeKind::IconButton),
            _ => Err(KeyParseError {
                kind: "theme",
                value: s.to_string(),
                expected: ThemeKind::ALL.iter().map(|k| k.name()).collect(),
            }),
        }
    }
}

/// Resolves a text button's rules from typed keys.
///
/// ```rust
/// use atomstyle::{resolve_button, ButtonVariant, Size};
///
/// let rules = resolve_button(Size::Small, ButtonVariant::Primary);
/// assert!(rules.to_string().starts_with("inline-flex items-center"));
/// ```
pub fn resolve_button(size: Size, variant: ButtonVariant) -> RuleSet {
    let mut rules = RuleSet::parse(builtin::button::BASE);
    rules.push(builtin::button::size(size));
    rules.push(builtin::button::variant(variant));
    rules
}

/// Resolves an icon button's rules from typed keys.
pub fn resolve_icon_button(size: Size, variant: IconButtonVariant) -> RuleSet {
    let mut rules = RuleSet::parse(builtin::icon_button::BASE);
    rules.push(builtin::icon_button::size(size));
    rules.push(builtin::icon_button::variant(variant));
    rules
}
