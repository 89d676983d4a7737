//! Batch command execution
//!
//! This module turns a normalized token sequence into a batch of
//! semicolon-delimited sub-commands and runs each one as a child process,
//! sequentially, aborting the batch on the first failure. Outcomes are
//! printed as `pysh:` diagnostics for interactive use and also returned
//! as a structured [`BatchResult`] so callers can detect failure
//! programmatically.

use std::io::ErrorKind;
use std::process::Command;

use owo_colors::OwoColorize;

use crate::command::ShellArg;
use crate::commands::{join_tokens, split_batch, tokenize};
use crate::error::Result;
use crate::notify;

/// Behavior flags for one batch execution
#[derive(Debug, Clone, Default)]
pub struct ExecOptions {
    /// Print a success banner and send a desktop notification when the
    /// whole batch completes
    pub notify: bool,
    /// Colorize the success banner
    pub color: bool,
}

impl ExecOptions {
    /// Options derived from the environment (`NO_COLOR` disables color)
    pub fn from_env() -> Self {
        Self {
            notify: false,
            color: std::env::var_os("NO_COLOR").is_none(),
        }
    }
}

/// Why a sub-command failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    /// Program name did not resolve to an executable
    NotFound,
    /// Program ran and exited with a non-zero status
    Exited(Option<i32>),
    /// Process could not be spawned for some other reason
    Spawn(String),
    /// Sub-command string could not be tokenized
    BadTokens(String),
}

/// The failing sub-command of an aborted batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchFailure {
    /// Zero-based position of the failed sub-command within the batch
    pub index: usize,
    /// The sub-command string as it was executed
    pub command: String,
    /// What went wrong
    pub kind: FailureKind,
}

/// Structured outcome of one batch execution
///
/// Execution failures never propagate as errors; they are printed (where
/// the child has not already reported itself) and recorded here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchResult {
    /// Sub-commands that completed with a zero exit status, in order
    pub completed: Vec<String>,
    /// The failure that aborted the batch, if any
    pub failure: Option<BatchFailure>,
}

impl BatchResult {
    /// True if every sub-command in the batch exited successfully
    pub fn is_success(&self) -> bool {
        self.failure.is_none()
    }
}

/// Flatten base tokens plus mixed-shape extra arguments into one token list
///
/// `Text` arguments are split quote-aware so quoted substrings survive as
/// single tokens; `Tokens` arguments are appended verbatim.
pub fn normalize(base: &[String], args: &[ShellArg]) -> Result<Vec<String>> {
    let mut tokens: Vec<String> = base.to_vec();
    for arg in args {
        match arg {
            ShellArg::Text(text) => tokens.extend(tokenize(text)?),
            ShellArg::Tokens(more) => tokens.extend(more.iter().cloned()),
        }
    }
    Ok(tokens)
}

/// Run a normalized token sequence as a semicolon-delimited batch
///
/// The tokens are joined into a command string, split on literal `;`
/// into sub-commands, and each sub-command is tokenized and executed in
/// order. The first failure aborts the remaining sub-commands; there is
/// no rollback of the ones that already ran.
pub fn run_batch(tokens: &[String], opts: &ExecOptions) -> BatchResult {
    let joined = join_tokens(tokens);
    let batch = split_batch(&joined);
    debug!("batch of {} sub-command(s): {:?}", batch.len(), batch);

    let mut completed = Vec::new();
    for (index, sub) in batch.iter().enumerate() {
        match run_sub_command(sub) {
            Ok(()) => completed.push(sub.clone()),
            Err(kind) => {
                return BatchResult {
                    completed,
                    failure: Some(BatchFailure {
                        index,
                        command: sub.clone(),
                        kind,
                    }),
                };
            }
        }
    }

    if opts.notify && !completed.is_empty() {
        report_success(&completed, opts.color);
    }

    BatchResult {
        completed,
        failure: None,
    }
}

/// Tokenize and run one sub-command, waiting for it to exit
fn run_sub_command(sub: &str) -> std::result::Result<(), FailureKind> {
    let argv = match tokenize(sub) {
        Ok(argv) if !argv.is_empty() => argv,
        Ok(_) => return Ok(()),
        Err(e) => {
            eprintln!("pysh: {}", e);
            return Err(FailureKind::BadTokens(e.to_string()));
        }
    };

    let program = &argv[0];
    debug!("spawning '{}' with {} arg(s)", program, argv.len() - 1);

    // Stdin/stdout/stderr are inherited; a failing child prints its own
    // diagnostic, so non-zero exits abort the batch silently.
    match Command::new(program).args(&argv[1..]).status() {
        Ok(status) if status.success() => Ok(()),
        Ok(status) => {
            debug!("'{}' exited with {:?}", program, status.code());
            Err(FailureKind::Exited(status.code()))
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            println!("pysh: {}: command not found", program);
            Err(FailureKind::NotFound)
        }
        Err(e) => {
            debug!("failed to spawn '{}': {}", program, e);
            Err(FailureKind::Spawn(e.to_string()))
        }
    }
}

/// Print the success banner and fire the best-effort desktop notification
fn report_success(completed: &[String], color: bool) {
    let listing = completed.join("; ");
    if color {
        println!("pysh: {} {}", "done:".green().bold(), listing.green());
    } else {
        println!("pysh: done: {}", listing);
    }
    notify::send("pysh", &format!("Completed: {}", listing));
}
