//! Integration tests for name resolution and the alias table
//!
//! These tests exercise the public resolution API end to end: reserved
//! name priority, alias expansion, pass-through defaults, and the
//! normalization of mixed-shape arguments.

use pysh::{Error, Resolution, ShellArg, ShellHandler, RESERVED_NAMES};

#[test]
fn test_reserved_names_beat_everything() {
    let handler = ShellHandler::new();
    for name in RESERVED_NAMES {
        assert!(
            matches!(handler.resolve(name), Resolution::Builtin(_)),
            "'{}' must resolve to a builtin",
            name
        );
    }
}

#[test]
fn test_reserved_names_cannot_be_shadowed() {
    let mut handler = ShellHandler::new();
    for name in RESERVED_NAMES {
        let err = handler.alias(name, "echo shadowed").unwrap_err();
        assert!(
            matches!(err, Error::ReservedAliasName { .. }),
            "binding '{}' should be rejected",
            name
        );
        // Still a builtin, and the table stays clean.
        assert!(matches!(handler.resolve(name), Resolution::Builtin(_)));
    }
    assert!(handler.aliases().is_empty());
}

#[test]
fn test_pass_through_uses_exact_name() {
    let handler = ShellHandler::new();
    for name in ["ls", "asdfghjkl", "some-tool.sh", "a"] {
        match handler.resolve(name) {
            Resolution::PassThrough(cmd) => {
                assert_eq!(cmd.program(), name);
                assert_eq!(cmd.base(), [name]);
            }
            other => panic!("'{}' should pass through, got {:?}", name, other),
        }
    }
}

#[test]
fn test_alias_expansion_and_extra_arg() {
    let mut handler = ShellHandler::new();
    handler.alias("abc", "a b c").unwrap();

    let cmd = match handler.resolve("abc") {
        Resolution::Alias(cmd) => cmd,
        other => panic!("expected alias, got {:?}", other),
    };
    assert_eq!(cmd.base(), ["a", "b", "c"]);

    let tokens = cmd.tokens_with(&[ShellArg::from("d")]).unwrap();
    assert_eq!(tokens, vec!["a", "b", "c", "d"]);
}

#[test]
fn test_alias_removal_restores_pass_through() {
    let mut handler = ShellHandler::new();
    handler.alias("g", "git status").unwrap();
    assert!(matches!(handler.resolve("g"), Resolution::Alias(_)));

    handler.rmalias("g");
    match handler.resolve("g") {
        Resolution::PassThrough(cmd) => assert_eq!(cmd.program(), "g"),
        other => panic!("expected pass-through, got {:?}", other),
    }
}

#[test]
fn test_rmalias_missing_is_non_fatal() {
    let mut handler = ShellHandler::new();
    // Must report and carry on, not panic or error.
    handler.rmalias("never-bound");
    handler.showalias("never-bound");
    handler.listalias();
}

#[test]
fn test_bound_command_description() {
    let mut handler = ShellHandler::new();
    handler.alias("ll", "ls -l").unwrap();

    let resolution = handler.resolve("ll");
    let cmd = resolution.command().unwrap();
    assert_eq!(cmd.to_string(), "pysh call: ls -l");

    let resolution = handler.resolve("pwd");
    let cmd = resolution.command().unwrap();
    assert_eq!(cmd.to_string(), "pysh call: pwd");
}

#[test]
fn test_resolution_is_fresh_per_access() {
    let mut handler = ShellHandler::new();
    handler.alias("ll", "ls -l").unwrap();
    let before = handler.resolve("ll");

    handler.alias("ll", "ls -la").unwrap();
    let after = handler.resolve("ll");

    // The earlier bound command is a snapshot; the new one sees the
    // rebound expansion.
    assert_eq!(before.command().unwrap().base(), ["ls", "-l"]);
    assert_eq!(after.command().unwrap().base(), ["ls", "-la"]);
}
