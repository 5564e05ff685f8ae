mod sexpr;

use clap::{ArgAction, Parser, Subcommand};
use std::io::{self, Write};
use tinyc_parser::{Node, SyntaxError};
use tinyc_token::{ListingError, ListingReader};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tinyc")]
#[command(about = "TinyC parser: turns a token listing into a syntax tree")]
#[command(version)]
struct Cli {
    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse a token listing and print the syntax tree as an s-expression
    Parse {
        /// Input token listing
        path: String,
    },

    /// Check a token listing for syntax errors without printing the tree
    Check {
        /// Input token listing
        path: String,
    },
}

/// Everything that ends a run with exit status 1.
#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("Error reading {path}: {source}")]
    Read { path: String, source: io::Error },

    #[error("{path}: {source}")]
    Listing { path: String, source: ListingError },

    #[error("{path}: {source}")]
    Syntax { path: String, source: SyntaxError },

    #[error("Error writing output: {0}")]
    Output(#[from] io::Error),
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let stdout = io::stdout();
    if let Err(e) = run(cli.command, &mut stdout.lock()) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Execute one subcommand. The tree goes to `out`; status lines and
/// diagnostics are left to the caller's stderr.
fn run(command: Command, out: &mut impl Write) -> Result<(), CliError> {
    match command {
        Command::Parse { path } => {
            let program = parse_file(&path)?;
            writeln!(out, "{}", sexpr::render(&program))?;
        }
        Command::Check { path } => {
            let program = parse_file(&path)?;
            tracing::info!(statements = program.children.len(), "syntax ok");
            eprintln!("OK: {path}");
        }
    }
    Ok(())
}

fn parse_file(path: &str) -> Result<Node, CliError> {
    let listing = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_string(),
        source,
    })?;

    let tokens = ListingReader::read(&listing).map_err(|source| CliError::Listing {
        path: path.to_string(),
        source,
    })?;
    tracing::info!(path, tokens = tokens.len(), "read token listing");

    tinyc_parser::Parser::new(tokens)
        .parse()
        .map_err(|source| CliError::Syntax {
            path: path.to_string(),
            source,
        })
}
