//! PySh - invoke shell commands as if they were functions
//!
//! This binary drives the pysh library from stdin: each line names a
//! command (builtin, alias, or external program) followed by its
//! arguments, and is executed as a semicolon-delimited batch.

use std::env;
use std::io::{self, BufRead, Write};
use std::process;

use anyhow::Context;
use tracing::{debug, info};

use pysh::{Builtin, ExecOptions, Resolution, ShellArg, ShellHandler};

/// Runtime flags
#[derive(Debug, Default)]
struct AppArgs {
    /// Enable debug logging
    debug: bool,
    /// Announce successful batches
    notify: bool,
    /// Disable colorized output
    no_color: bool,
}

impl AppArgs {
    /// Parse command line arguments
    fn parse() -> Result<Self, String> {
        let args: Vec<String> = env::args().collect();
        let mut app_args = AppArgs::default();

        for arg in &args[1..] {
            match arg.as_str() {
                "--debug" | "-d" => app_args.debug = true,
                "--notify" | "-n" => app_args.notify = true,
                "--no-color" => app_args.no_color = true,
                "--help" | "-?" => {
                    print_help();
                    process::exit(0);
                }
                "--version" | "-v" => {
                    println!("pysh v{}", env!("CARGO_PKG_VERSION"));
                    process::exit(0);
                }
                other => return Err(format!("Unknown option: {}", other)),
            }
        }

        Ok(app_args)
    }
}

/// Print help information
fn print_help() {
    println!("pysh - invoke shell commands as if they were functions");
    println!();
    println!("USAGE:");
    println!("    pysh [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -d, --debug      Enable debug logging");
    println!("    -n, --notify     Announce successful batches");
    println!("        --no-color   Disable colorized output");
    println!("    -?, --help       Print this help message");
    println!("    -v, --version    Print version information");
    println!();
    println!("BUILTINS:");
    println!("    cd [PATH]                 Change directory (default: home)");
    println!("    alias NAME=EXPANSION      Bind an alias");
    println!("    rmalias NAME              Remove an alias");
    println!("    showalias NAME            Show one alias");
    println!("    listalias                 List every alias");
    println!("    exit                      Leave the session");
    println!();
    println!("ENVIRONMENT:");
    println!("    NO_COLOR    Disable colorized output");
    println!("    RUST_LOG    Set logging level (error, warn, info, debug, trace)");
}

fn main() -> anyhow::Result<()> {
    let args = AppArgs::parse().unwrap_or_else(|e| {
        eprintln!("pysh: {}", e);
        print_help();
        process::exit(1);
    });

    // Initialize logging based on debug flag
    let log_level = if args.debug { "debug" } else { "warn" };
    let env_filter = env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from(env_filter))
        .with_target(false)
        .compact()
        .init();

    info!("starting pysh v{}", env!("CARGO_PKG_VERSION"));

    let mut opts = ExecOptions::from_env();
    opts.notify = args.notify;
    if args.no_color {
        opts.color = false;
    }

    let mut handler = ShellHandler::new();
    repl(&mut handler, &opts)
}

/// Read lines from stdin and dispatch them through the handler
fn repl(handler: &mut ShellHandler, opts: &ExecOptions) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        write!(stdout, "pysh> ").context("failed to write prompt")?;
        stdout.flush().context("failed to flush prompt")?;

        let mut line = String::new();
        let read = stdin
            .lock()
            .read_line(&mut line)
            .context("failed to read from stdin")?;
        if read == 0 {
            // EOF
            break;
        }

        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "exit" {
            break;
        }

        dispatch(handler, line, opts);
    }

    debug!("session finished");
    Ok(())
}

/// Classify the first word of a line and run the rest accordingly
fn dispatch(handler: &mut ShellHandler, line: &str, opts: &ExecOptions) {
    let (name, rest) = match line.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (line, ""),
    };

    match handler.resolve(name) {
        Resolution::Builtin(builtin) => run_builtin(handler, builtin, rest),
        Resolution::Alias(cmd) | Resolution::PassThrough(cmd) => {
            let args: Vec<ShellArg> = if rest.is_empty() {
                Vec::new()
            } else {
                vec![ShellArg::Text(rest.to_string())]
            };
            match cmd.run(&args, opts) {
                Ok(result) => {
                    debug!(
                        "batch finished: {} completed, success={}",
                        result.completed.len(),
                        result.is_success()
                    );
                }
                Err(e) => eprintln!("pysh: {}", e),
            }
        }
    }
}

/// Execute one builtin operation
fn run_builtin(handler: &mut ShellHandler, builtin: Builtin, rest: &str) {
    match builtin {
        Builtin::Cd => {
            let path = if rest.is_empty() { None } else { Some(rest) };
            if let Err(e) = handler.cd(path) {
                eprintln!("pysh: {}", e);
            }
        }
        Builtin::Alias => match rest.split_once('=') {
            Some((name, expansion)) => {
                let name = name.trim();
                let expansion = expansion.trim().trim_matches('\'').trim_matches('"');
                if let Err(e) = handler.alias(name, expansion) {
                    eprintln!("pysh: {}", e);
                }
            }
            None => eprintln!("pysh: usage: alias NAME=EXPANSION"),
        },
        Builtin::RmAlias => {
            if rest.is_empty() {
                eprintln!("pysh: usage: rmalias NAME");
            } else {
                handler.rmalias(rest);
            }
        }
        Builtin::ShowAlias => {
            if rest.is_empty() {
                eprintln!("pysh: usage: showalias NAME");
            } else {
                handler.showalias(rest);
            }
        }
        Builtin::ListAlias | Builtin::Aliases => handler.listalias(),
    }
}
