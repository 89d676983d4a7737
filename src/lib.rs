//! PySh - a tiny, intuitive interface to shell commands
//!
//! PySh lets a host program invoke external commands through resolved,
//! method-like names instead of constructing subprocess invocations by
//! hand. Any name at all is callable: it resolves to a reserved built-in
//! operation, a user-defined alias, or a pass-through external command.
//!
//! ## Module Organization
//!
//! - [`handler`] - Name resolution, the alias table, directory changes
//! - [`command`] - Bound commands and argument shapes
//! - [`executor`] - Batch execution and structured results
//! - [`commands`] - Tokenization and path expansion utilities
//! - [`notify`] - Best-effort desktop notifications
//! - [`mod@error`] - Error types and Result alias
//!
//! ## Quick Start
//!
//! ```no_run
//! use pysh::{ExecOptions, Resolution, ShellHandler};
//!
//! # fn main() -> pysh::Result<()> {
//! let mut sh = ShellHandler::new();
//! sh.alias("ll", "ls -l")?;
//!
//! let opts = ExecOptions::default();
//! if let Some(cmd) = sh.resolve("ll").command() {
//!     let result = cmd.run(&["--color=auto".into()], &opts)?;
//!     assert!(result.is_success());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Behavior
//!
//! - Reserved operation names (`cd`, `alias`, `rmalias`, `showalias`,
//!   `listalias`, `aliases`) always take priority over aliases.
//! - Extra arguments may be single tokens, shell-style strings that split
//!   into several tokens, or pre-tokenized sequences; quoting is honored
//!   at the point tokens are handed to the spawned process.
//! - A joined command string is split on literal `;` into a batch of
//!   sub-commands, run sequentially, aborting on the first failure.
//! - Execution failures are printed as `pysh:` diagnostics and reported
//!   through a structured [`executor::BatchResult`]; they are never
//!   raised to the caller.
//!
//! Not a shell: no piping, no globbing, no variable expansion, no job
//! control, and no timeouts. A hung child process hangs the caller.

#[macro_use]
extern crate tracing;

pub mod command;
pub mod commands;
pub mod error;
pub mod executor;
pub mod handler;
pub mod notify;

// Re-exports for core functionality
pub use command::{BoundCommand, ShellArg};
pub use error::{Error, Result};
pub use executor::{BatchFailure, BatchResult, ExecOptions, FailureKind};
pub use handler::{Builtin, Resolution, ShellHandler, RESERVED_NAMES};

// Version information
/// The current version of PySh from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The crate name from Cargo.toml
pub const NAME: &str = env!("CARGO_PKG_NAME");
