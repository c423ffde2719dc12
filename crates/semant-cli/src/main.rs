// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! COOL class-hierarchy validator command-line interface.
//!
//! This is the main entry point for the `coolsem` command.

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use miette::Result;

mod commands;
mod config;
mod diagnostic;
mod input;

use commands::check::OutputFormat;

/// Environment variable holding the log filter.
const LOG_ENV: &str = "COOLSEM_LOG";

/// coolsem: validate the class hierarchy of a parsed COOL program
#[derive(Debug, Parser)]
#[command(name = "coolsem")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Log validation stages to stderr (overrides `COOLSEM_LOG`)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Check a program for class hierarchy errors
    Check {
        /// Parsed program (JSON)
        path: Utf8PathBuf,

        /// Require a `Main` class with a `main()` method
        #[arg(long)]
        require_main: bool,

        /// Check that the types in method signatures exist
        #[arg(long)]
        check_types: bool,

        /// Configuration file (default: `coolsem.toml` next to the program)
        #[arg(long)]
        config: Option<Utf8PathBuf>,

        /// Output format: `text` or `json`
        #[arg(long, default_value = "text")]
        format: OutputFormat,
    },

    /// Print the inheritance tree of a program
    Hierarchy {
        /// Parsed program (JSON)
        path: Utf8PathBuf,
    },
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))?;

    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Command::Check {
            path,
            require_main,
            check_types,
            config: config_path,
            format,
        } => config::resolve_options(
            &path,
            config_path.as_deref(),
            config::FlagOverrides {
                require_main,
                check_types,
            },
        )
        .and_then(|options| commands::check::run_check(&path, options, format)),
        Command::Hierarchy { path } => commands::hierarchy::run_hierarchy(&path),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("{e:?}");
            std::process::exit(1);
        }
    }
}
