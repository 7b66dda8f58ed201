//! Style primitives shared by every theme.
//!
//! - [`RuleSet`]: an ordered list of atomic style tokens
//! - [`ResolveError`]: an unknown size, variant, or theme name
//! - [`KeyParseError`]: text that does not name a typed key
//! - [`InvalidTheme`]: a theme with missing or empty entries

mod error;
mod rules;

pub use error::{InvalidTheme, KeyParseError, ResolveError};
pub use rules::RuleSet;
