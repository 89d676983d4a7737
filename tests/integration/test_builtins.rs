//! Integration tests for the directory-change builtin
//!
//! `cd` mutates process-wide state (the working directory), so every
//! scenario lives in a single test function with the original directory
//! restored at the end.

use pysh::{Error, ShellHandler};

#[test]
fn test_cd_semantics() {
    let handler = ShellHandler::new();
    let original = std::env::current_dir().unwrap();

    // Explicit path.
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().canonicalize().unwrap();
    handler.cd(Some(&target.display().to_string())).unwrap();
    assert_eq!(std::env::current_dir().unwrap().canonicalize().unwrap(), target);

    // No argument defaults to the home directory.
    let home = dirs::home_dir().unwrap();
    handler.cd(None).unwrap();
    assert_eq!(
        std::env::current_dir().unwrap().canonicalize().unwrap(),
        home.canonicalize().unwrap()
    );

    // A leading tilde expands to the home directory.
    handler.cd(Some(&target.display().to_string())).unwrap();
    handler.cd(Some("~")).unwrap();
    assert_eq!(
        std::env::current_dir().unwrap().canonicalize().unwrap(),
        home.canonicalize().unwrap()
    );

    // Nonexistent paths propagate an error instead of being swallowed,
    // and leave the working directory unchanged.
    let before = std::env::current_dir().unwrap();
    let err = handler.cd(Some("/definitely/not/a/real/path")).unwrap_err();
    assert!(matches!(err, Error::ChangeDirFailed { .. }));
    assert_eq!(std::env::current_dir().unwrap(), before);

    std::env::set_current_dir(original).unwrap();
}
