//! Bound commands and argument shapes
//!
//! A [`BoundCommand`] is the ephemeral value produced by resolution: the
//! base token sequence (a bare program name, or an alias expansion)
//! captured together with the normalization and execution logic. It is
//! recreated on every lookup and never persisted.

use std::fmt;

use crate::error::Result;
use crate::executor::{self, BatchResult, ExecOptions};

/// One extra argument supplied to a bound command
///
/// Callers hand arguments over in whatever shape is convenient: a single
/// token, a string of shell-style syntax representing several tokens, or
/// an already-tokenized sequence. Normalization flattens all of them into
/// one token list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellArg {
    /// A string that is split quote-aware into zero or more tokens
    Text(String),
    /// Tokens taken verbatim, one argv element each
    Tokens(Vec<String>),
}

impl From<&str> for ShellArg {
    fn from(s: &str) -> Self {
        ShellArg::Text(s.to_string())
    }
}

impl From<String> for ShellArg {
    fn from(s: String) -> Self {
        ShellArg::Text(s)
    }
}

impl From<Vec<String>> for ShellArg {
    fn from(tokens: Vec<String>) -> Self {
        ShellArg::Tokens(tokens)
    }
}

impl From<&[&str]> for ShellArg {
    fn from(tokens: &[&str]) -> Self {
        ShellArg::Tokens(tokens.iter().map(|s| s.to_string()).collect())
    }
}

/// A resolved command: base tokens plus execution logic
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundCommand {
    base: Vec<String>,
}

impl BoundCommand {
    /// Create a bound command from its base token sequence
    ///
    /// `base[0]` is the program name; alias expansions may carry fixed
    /// arguments after it.
    pub fn new(base: Vec<String>) -> Self {
        debug_assert!(!base.is_empty());
        Self { base }
    }

    /// Create a pass-through command from a bare program name
    pub fn pass_through(program: &str) -> Self {
        Self::new(vec![program.to_string()])
    }

    /// The base token sequence
    pub fn base(&self) -> &[String] {
        &self.base
    }

    /// The program name (first base token)
    pub fn program(&self) -> &str {
        &self.base[0]
    }

    /// Normalize the extra arguments and append them to the base tokens
    pub fn tokens_with(&self, args: &[ShellArg]) -> Result<Vec<String>> {
        executor::normalize(&self.base, args)
    }

    /// Execute the command with the given extra arguments
    ///
    /// Returns `Err` only for normalization failures (e.g. unbalanced
    /// quotes in a `Text` argument). Execution failures are printed as
    /// diagnostics and reported through the returned [`BatchResult`].
    pub fn run(&self, args: &[ShellArg], opts: &ExecOptions) -> Result<BatchResult> {
        let tokens = self.tokens_with(args)?;
        Ok(executor::run_batch(&tokens, opts))
    }
}

impl fmt::Display for BoundCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pysh call: {}", self.base[0])?;
        if self.base.len() > 1 {
            write!(f, " {}", self.base[1..].join(" "))?;
        }
        Ok(())
    }
}
