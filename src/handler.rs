//! The shell handler: name resolution, alias table, directory changes
//!
//! [`ShellHandler`] is the single entry point for invoking external
//! commands by name. A requested name resolves to a reserved built-in
//! operation, a registered alias, or a pass-through external command, in
//! that priority order. Resolution is total: any name at all yields a
//! callable, and an unknown program only fails at execution time.
//!
//! The handler is an explicit value with no process-wide state. Construct
//! one, hold it, and the alias table's lifetime is exactly the handler's.

use std::collections::HashMap;

use crate::command::BoundCommand;
use crate::commands::{expand_tilde, tokenize};
use crate::error::{Error, Result};

/// Names reserved for built-in handler operations
///
/// Reserved names always win over aliases, so binding one as an alias is
/// rejected outright rather than silently shadowed.
pub const RESERVED_NAMES: [&str; 6] = ["cd", "alias", "rmalias", "showalias", "listalias", "aliases"];

/// A reserved built-in operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    /// Change the working directory
    Cd,
    /// Bind an alias
    Alias,
    /// Remove an alias
    RmAlias,
    /// Show one alias
    ShowAlias,
    /// List every alias
    ListAlias,
    /// Read access to the alias table
    Aliases,
}

impl Builtin {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "cd" => Some(Builtin::Cd),
            "alias" => Some(Builtin::Alias),
            "rmalias" => Some(Builtin::RmAlias),
            "showalias" => Some(Builtin::ShowAlias),
            "listalias" => Some(Builtin::ListAlias),
            "aliases" => Some(Builtin::Aliases),
            _ => None,
        }
    }
}

/// What a requested name resolved to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A reserved built-in operation
    Builtin(Builtin),
    /// A registered alias, expanded to its token sequence
    Alias(BoundCommand),
    /// Any other name, used directly as an external program name
    PassThrough(BoundCommand),
}

impl Resolution {
    /// The bound command, if this is not a builtin
    pub fn command(&self) -> Option<&BoundCommand> {
        match self {
            Resolution::Builtin(_) => None,
            Resolution::Alias(cmd) | Resolution::PassThrough(cmd) => Some(cmd),
        }
    }
}

/// Handler for shell commands
#[derive(Debug, Clone, Default)]
pub struct ShellHandler {
    /// Alias name -> expansion token sequence
    aliases: HashMap<String, Vec<String>>,
}

impl ShellHandler {
    /// Create a handler with an empty alias table
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve a requested name to a built-in, an alias, or a
    /// pass-through command
    ///
    /// Pure lookup; never fails. The set of valid names is unbounded
    /// because any program on the system path is implicitly callable.
    pub fn resolve(&self, name: &str) -> Resolution {
        if let Some(builtin) = Builtin::from_name(name) {
            return Resolution::Builtin(builtin);
        }
        if let Some(expansion) = self.aliases.get(name) {
            trace!("'{}' resolved via alias to {:?}", name, expansion);
            return Resolution::Alias(BoundCommand::new(expansion.clone()));
        }
        Resolution::PassThrough(BoundCommand::pass_through(name))
    }

    /// Bind (or overwrite) an alias
    ///
    /// The expansion is tokenized quote-aware, so `alias("ll", "ls -l")`
    /// stores `["ls", "-l"]`. Reserved names are rejected.
    pub fn alias(&mut self, name: &str, expansion: &str) -> Result<()> {
        if RESERVED_NAMES.contains(&name) {
            return Err(Error::ReservedAliasName {
                name: name.to_string(),
            });
        }
        let tokens = tokenize(expansion)?;
        if tokens.is_empty() {
            return Err(Error::EmptyCommand);
        }
        self.aliases.insert(name.to_string(), tokens);
        println!("pysh: {}: alias added", name);
        Ok(())
    }

    /// Remove an alias; reports but does not fail on a missing name
    pub fn rmalias(&mut self, name: &str) {
        if self.aliases.remove(name).is_some() {
            println!("pysh: {}: alias removed", name);
        } else {
            println!("pysh: {}: alias not found", name);
        }
    }

    /// Print one alias binding
    pub fn showalias(&self, name: &str) {
        match self.aliases.get(name) {
            Some(expansion) => {
                println!("pysh: {} is aliased to {}", name, expansion.join(" "));
            }
            None => println!("pysh: {}: no such alias", name),
        }
    }

    /// Print every alias binding
    ///
    /// Sorted by name so the listing is deterministic.
    pub fn listalias(&self) {
        let mut names: Vec<&String> = self.aliases.keys().collect();
        names.sort();
        for name in names {
            self.showalias(name);
        }
    }

    /// Read access to the alias table
    pub fn aliases(&self) -> &HashMap<String, Vec<String>> {
        &self.aliases
    }

    /// Change the working directory, defaulting to the home directory
    ///
    /// A leading `~` in the path is expanded first. A nonexistent path is
    /// an error, not a silent no-op.
    pub fn cd(&self, path: Option<&str>) -> Result<()> {
        let target = match path {
            Some(p) => expand_tilde(p)?,
            None => dirs::home_dir().ok_or(Error::HomeDirNotFound)?,
        };
        std::env::set_current_dir(&target).map_err(|e| Error::ChangeDirFailed {
            path: target,
            reason: e.to_string(),
        })
    }
}
