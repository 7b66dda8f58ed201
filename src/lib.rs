//! # Atomstyle - class-string themes for atomic CSS components
//!
//! `atomstyle` maps a component's size and variant to the utility classes
//! it should render with. A [`Theme`] holds three tables:
//!
//! - **base** rules, always applied
//! - **size** rules, keyed by `small`, `normal`, `large`, ...
//! - **variant** rules, keyed by semantic state (`primary`, `disabled`, ...)
//!
//! Resolving concatenates base, size, and variant rules in that order. An
//! unknown key is an error; there is no silent default.
//!
//! ## Quick start
//!
//! ```rust
//! use atomstyle::{resolve, ThemeKind};
//!
//! let classes = resolve(ThemeKind::Button, "small", "primary").unwrap();
//! assert!(classes.to_string().starts_with(
//!     "inline-flex items-center focus:outline-none font-medium uppercase px-10 py-6"
//! ));
//!
//! assert!(resolve(ThemeKind::IconButton, "small", "primary").is_err());
//! ```
//!
//! ## Typed keys
//!
//! The built-in themes have closed key sets, exposed as enums:
//!
//! ```rust
//! use atomstyle::{resolve_icon_button, IconButtonVariant, Size};
//!
//! let classes = resolve_icon_button(Size::Large, IconButtonVariant::Active);
//! assert!(classes.contains("shadow-key"));
//! ```
//!
//! ## Stylesheets and templates
//!
//! Additional themes can be loaded from YAML or JSON into a [`ThemeSet`],
//! and templates can resolve classes with the `classes` filter:
//!
//! ```rust
//! use atomstyle::{Renderer, ThemeSet};
//!
//! let mut themes = ThemeSet::builtin();
//! themes.merge(ThemeSet::from_yaml(r#"
//! chip:
//!   sizes: { small: px-2 }
//!   variants: { neutral: bg-kilvish-200 }
//! "#).unwrap());
//!
//! let mut renderer = Renderer::new(themes);
//! renderer.add_template("chip", r#"{{ "chip" | classes("small", "neutral") }}"#).unwrap();
//! assert_eq!(renderer.render("chip", &()).unwrap(), "px-2 bg-kilvish-200");
//! ```

pub mod render;
pub mod style;
pub mod stylesheet;
pub mod theme;

pub use render::{register_filters, Renderer};
pub use style::{InvalidTheme, KeyParseError, ResolveError, RuleSet};
pub use stylesheet::StylesheetError;
pub use theme::{
    resolve_button, resolve_icon_button, ButtonVariant, IconButtonVariant, Size, Theme, ThemeKind,
    ThemeSet,
};

/// Resolves the rules of a built-in theme for a size and variant.
///
/// The result is the theme's base rules, followed by the size rules, then
/// the variant rules.
///
/// # Errors
///
/// Returns [`ResolveError`] if `size` or `variant` is not a key of the theme.
pub fn resolve(kind: ThemeKind, size: &str, variant: &str) -> Result<RuleSet, ResolveError> {
    kind.theme().resolve(size, variant)
}
