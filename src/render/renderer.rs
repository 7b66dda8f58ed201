//! Pre-compiled template renderer.

use std::sync::Arc;

use minijinja::{Environment, Error};
use serde::Serialize;

use super::filters::register_filters;
use crate::theme::ThemeSet;

/// A renderer with pre-registered templates and theme filters.
///
/// Use this when markup for several components is rendered repeatedly.
/// Templates are compiled once and reused.
///
/// # Example
///
/// ```rust
/// use atomstyle::{Renderer, ThemeSet};
/// use serde::Serialize;
///
/// let mut renderer = Renderer::new(ThemeSet::builtin());
/// renderer
///     .add_template(
///         "button",
///         r#"<button class="{{ "button" | classes(size, variant) }}">{{ label }}</button>"#,
///     )
///     .unwrap();
///
/// #[derive(Serialize)]
/// struct Props { size: String, variant: String, label: String }
///
/// let html = renderer
///     .render("button", &Props {
///         size: "small".into(),
///         variant: "success".into(),
///         label: "Save".into(),
///     })
///     .unwrap();
/// assert!(html.contains("bg-green"));
/// ```
pub struct Renderer {
    env: Environment<'static>,
    themes: Arc<ThemeSet>,
}

impl Renderer {
    /// Creates a renderer whose filters resolve against `themes`.
    pub fn new(themes: ThemeSet) -> Self {
        let themes = Arc::new(themes);
        let mut env = Environment::new();
        register_filters(&mut env, Arc::clone(&themes));
        Self { env, themes }
    }

    /// The themes the filters resolve against.
    pub fn themes(&self) -> &ThemeSet {
        &self.themes
    }

    /// Compiles component markup under `name`.
    ///
    /// Theme names and keys passed to `classes` are only checked at render
    /// time, since they usually come from the props.
    pub fn add_template(&mut self, name: &str, source: &str) -> Result<(), Error> {
        self.env.add_template_owned(name.to_owned(), source.to_owned())
    }

    /// Renders the markup registered as `name` with component props.
    ///
    /// # Errors
    ///
    /// Fails with `InvalidOperation` when a `classes` call names a theme,
    /// size, or variant the theme set does not define; no partial markup
    /// is returned.
    pub fn render<T: Serialize>(&self, name: &str, props: &T) -> Result<String, Error> {
        self.env.get_template(name)?.render(props)
    }
}
