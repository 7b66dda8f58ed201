//! Themes and the style resolver.
//!
//! This module provides:
//!
//! - [`Theme`]: base, size, and variant rule tables with a fluent builder
//! - [`ThemeSet`]: a name-keyed registry of themes
//! - [`ThemeKind`], [`Size`], [`ButtonVariant`], [`IconButtonVariant`]:
//!   typed keys for the built-in themes
//! - [`builtin`]: the `button` and `icon-button` token tables
//!
//! Resolution is a pure lookup over immutable data: base rules first, then
//! the size entry, then the variant entry.

pub mod builtin;
mod kinds;
mod set;
#[allow(clippy::module_inception)]
mod theme;

pub use kinds::{
    resolve_button, resolve_icon_button, ButtonVariant, IconButtonVariant, Size, ThemeKind,
};
pub use set::ThemeSet;
pub use theme::Theme;
