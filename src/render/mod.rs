//! Template integration for resolving classes from markup.
//!
//! - [`register_filters`]: adds the `classes` filter and `theme_keys` function
//!   to any minijinja environment
//! - [`Renderer`]: a small pre-compiled template renderer with the filters
//!   already installed

mod filters;
mod renderer;

pub use filters::register_filters;
pub use renderer::Renderer;
