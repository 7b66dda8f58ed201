//! Integration tests for loading stylesheets from disk.

use std::io::Write;

use atomstyle::{resolve, StylesheetError, ThemeKind, ThemeSet};

const FIXTURES: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

#[test]
fn test_load_yaml_fixture() {
    let themes = ThemeSet::from_path(format!("{}/themes.yaml", FIXTURES)).unwrap();

    let names: Vec<&str> = themes.names().collect();
    assert_eq!(names, vec!["icon-button", "link"]);

    let rules = themes.resolve("link", "large", "primary").unwrap();
    assert_eq!(
        rules.to_string(),
        "underline-offset-2 text-base text-kilvish hover:underline"
    );
}

#[test]
fn test_load_json_fixture() {
    let themes = ThemeSet::from_path(format!("{}/themes.json", FIXTURES)).unwrap();
    let rules = themes.resolve("badge", "small", "success").unwrap();
    assert_eq!(
        rules.to_string(),
        "inline-block rounded-full px-1 text-captionsm bg-green text-white"
    );
}

#[test]
fn test_stylesheet_overrides_builtin() {
    let mut themes = ThemeSet::builtin();
    themes.merge(ThemeSet::from_path(format!("{}/themes.yaml", FIXTURES)).unwrap());

    let names: Vec<&str> = themes.names().collect();
    assert_eq!(names, vec!["button", "icon-button", "link"]);

    // The override drops the built-in `large` size and `bordered` variant.
    assert!(themes.resolve("icon-button", "large", "active").is_err());
    assert!(themes.resolve("icon-button", "small", "bordered").is_err());
    assert_eq!(
        themes
            .resolve("icon-button", "small", "ghost")
            .unwrap()
            .to_string(),
        "inline-flex items-center justify-center p-0.5 rounded-2 border-0 bg-transparent"
    );

    // The process-wide built-ins are untouched.
    assert!(resolve(ThemeKind::IconButton, "large", "bordered").is_ok());
    assert_eq!(
        themes.resolve("button", "normal", "primary").unwrap(),
        resolve(ThemeKind::Button, "normal", "primary").unwrap()
    );
}

#[test]
fn test_extension_is_case_insensitive() {
    let mut file = tempfile::Builder::new().suffix(".YML").tempfile().unwrap();
    writeln!(file, "tag:\n  sizes: {{small: px-1}}\n  variants: {{info: bg-blue}}").unwrap();

    let themes = ThemeSet::from_path(file.path()).unwrap();
    assert_eq!(
        themes.resolve("tag", "small", "info").unwrap().to_string(),
        "px-1 bg-blue"
    );
}

#[test]
fn test_exported_builtins_reload_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("builtin.json");
    std::fs::write(&path, ThemeSet::builtin().to_json().unwrap()).unwrap();

    let reloaded = ThemeSet::from_path(&path).unwrap();
    for kind in ThemeKind::ALL {
        for size in kind.theme().size_keys() {
            for variant in kind.theme().variant_keys() {
                assert_eq!(
                    reloaded.resolve(kind.name(), size, variant).unwrap(),
                    resolve(*kind, size, variant).unwrap()
                );
            }
        }
    }
}

#[test]
fn test_invalid_theme_names_the_entry() {
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    writeln!(file, "tag:\n  sizes: {{small: px-1}}\n  variants: {{info: []}}").unwrap();

    let err = ThemeSet::from_path(file.path()).unwrap_err();
    match err {
        StylesheetError::Invalid { theme, message } => {
            assert_eq!(theme, "tag");
            assert_eq!(message, "variant 'info' has no rules");
        }
        other => panic!("expected Invalid, got {other:?}"),
    }
}

#[test]
fn test_missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.yaml");

    let err = ThemeSet::from_path(&path).unwrap_err();
    assert!(matches!(err, StylesheetError::Io { .. }));
    assert!(err.to_string().contains("absent.yaml"));
}
