//! Exit status and stdout of the `atomstyle` binary.

#![cfg(feature = "cli")]

use std::process::{Command, Output};

fn atomstyle(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_atomstyle"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("atomstyle binary should run")
}

#[test]
fn test_resolve_succeeds() {
    let output = atomstyle(&["resolve", "icon-button", "large", "disabled"]);
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim_end(),
        atomstyle::resolve(atomstyle::ThemeKind::IconButton, "large", "disabled")
            .unwrap()
            .to_string()
    );
}

#[test]
fn test_unknown_key_exits_non_zero() {
    let output = atomstyle(&["resolve", "button", "huge", "primary"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("unknown size 'huge'"));
}

#[test]
fn test_no_builtin_exits_non_zero_for_builtin_theme() {
    let output = atomstyle(&["--no-builtin", "resolve", "button", "small", "primary"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("unknown theme 'button'"));
}
