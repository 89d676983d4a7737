//! Command tokenization and path expansion utilities
//!
//! This module provides the low-level string processing shared by the
//! handler and the executor: quote-aware tokenization, tilde expansion,
//! and splitting a joined command string into semicolon-delimited
//! sub-commands.

use std::borrow::Cow;
use std::path::PathBuf;

use crate::error::{Error, Result};

/// Split a command string into tokens, honoring shell-style quoting
///
/// `"hello world"` stays one token; bare words split on whitespace.
pub fn tokenize(input: &str) -> Result<Vec<String>> {
    shell_words::split(input).map_err(Error::from)
}

/// Quote a token for inclusion in a joined command string, but only when
/// re-tokenizing would otherwise mangle it
///
/// Tokens containing whitespace or quote characters are wrapped so they
/// survive the round trip through [`split_batch`] and [`tokenize`]. All
/// other tokens are left bare so that literal `;` characters remain
/// visible to the semicolon split.
pub fn quote_token(token: &str) -> Cow<'_, str> {
    let needs_quoting = token.is_empty()
        || token
            .chars()
            .any(|c| c.is_whitespace() || c == '"' || c == '\'');
    if needs_quoting {
        shell_words::quote(token)
    } else {
        Cow::Borrowed(token)
    }
}

/// Join a token sequence into a single display/command string
pub fn join_tokens(tokens: &[String]) -> String {
    tokens
        .iter()
        .map(|t| quote_token(t))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Split a joined command string into semicolon-delimited sub-commands
///
/// The split is on literal `;` and does not understand quoting, so a
/// semicolon inside a quoted token is incorrectly treated as a command
/// separator. Known limitation, kept for parity with shell chaining
/// expectations. Empty segments (e.g. from a trailing `;`) are dropped.
pub fn split_batch(joined: &str) -> Vec<String> {
    joined
        .split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Expand a leading `~` to the user's home directory
pub fn expand_tilde(path: &str) -> Result<PathBuf> {
    if let Some(rest) = path.strip_prefix('~') {
        let home = dirs::home_dir().ok_or(Error::HomeDirNotFound)?;
        let rest = rest.strip_prefix('/').unwrap_or(rest);
        if rest.is_empty() {
            Ok(home)
        } else {
            Ok(home.join(rest))
        }
    } else {
        Ok(PathBuf::from(path))
    }
}
