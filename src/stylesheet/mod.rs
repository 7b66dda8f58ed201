//! Loading themes from YAML and JSON stylesheets.
//!
//! A stylesheet maps theme names to their rule tables:
//!
//! ```yaml
//! button:
//!   base: inline-flex items-center
//!   sizes:
//!     small: px-10 py-6
//!     large: [px-14, py-12]
//!   variants:
//!     primary: bg-kilvish text-white
//! ```
//!
//! Parsing is exposed as constructors on [`ThemeSet`](crate::ThemeSet):
//! `from_yaml`, `from_json`, and `from_path`. Every theme must define at
//! least one size and one variant, and no entry may be empty.

mod error;
mod parse;

pub use error::StylesheetError;
