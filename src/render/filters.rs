//! MiniJinja filter registration.

use std::sync::Arc;

use minijinja::{Environment, Error, ErrorKind, Value};
use serde::Serialize;

use crate::style::ResolveError;
use crate::theme::ThemeSet;

#[derive(Serialize)]
struct ThemeKeys<'a> {
    sizes: Vec<&'a str>,
    variants: Vec<&'a str>,
}

fn template_error(err: ResolveError) -> Error {
    Error::new(ErrorKind::InvalidOperation, err.to_string())
}

/// Registers the theme filters on a minijinja environment.
///
/// - `classes`: `{{ "button" | classes("small", "primary") }}` renders the
///   resolved class string of a theme.
/// - `theme_keys`: `{{ theme_keys("button").sizes }}` lists the size and
///   variant keys of a theme.
///
/// Unknown themes or keys fail the render with an `InvalidOperation` error.
pub fn register_filters(env: &mut Environment<'static>, themes: Arc<ThemeSet>) {
    let filter_themes = Arc::clone(&themes);
    env.add_filter(
        "classes",
        move |theme: String, size: String, variant: String| -> Result<String, Error> {
            filter_themes
                .resolve(&theme, &size, &variant)
                .map(|rules| rules.to_string())
                .map_err(template_error)
        },
    );

    env.add_function("theme_keys", move |name: String| -> Result<Value, Error> {
        let theme = themes.theme(&name).map_err(template_error)?;
        Ok(Value::from_serialize(ThemeKeys {
            sizes: theme.size_keys().collect(),
            variants: theme.variant_keys().collect(),
        }))
    });
}
