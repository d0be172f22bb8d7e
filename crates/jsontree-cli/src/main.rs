//! `jsontree` CLI: format, minify and validate JSON from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Pretty-print (stdin to stdout)
//! echo '{"b":[1,2],"a":1}' | jsontree format
//!
//! # Minify from file to file
//! jsontree compact -i data.json -o data.min.json
//!
//! # Validate; exit code 1 on invalid input
//! jsontree check -i data.json
//!
//! # Accept relaxed input without a typed error message
//! echo '{key: 1,}' | jsontree format --lenient
//! ```
//!
//! The parser already tolerates bare identifier keys and trailing commas;
//! `--lenient` only changes how failures are reported (a generic message
//! instead of the typed grammar error).

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use jsontree::{parse, parse_lenient, render, render_indented, JsonElement};
use std::io::Read;
use std::process;

#[derive(Parser)]
#[command(name = "jsontree", version, about = "JSON tree formatter and checker")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pretty-print JSON with 2-space indentation
    Format {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Report failures without the typed grammar error
        #[arg(long)]
        lenient: bool,
    },
    /// Minify JSON to its compact form
    Compact {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Report failures without the typed grammar error
        #[arg(long)]
        lenient: bool,
    },
    /// Parse the input and report whether it is valid
    Check {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Use the lenient parser
        #[arg(long)]
        lenient: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("error: {err:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Format {
            input,
            output,
            lenient,
        } => {
            let tree = parse_input(&read_input(input.as_deref())?, lenient)?;
            write_output(output.as_deref(), &render_indented(&tree))
        }
        Commands::Compact {
            input,
            output,
            lenient,
        } => {
            let tree = parse_input(&read_input(input.as_deref())?, lenient)?;
            write_output(output.as_deref(), &render(&tree))
        }
        Commands::Check { input, lenient } => {
            let text = read_input(input.as_deref())?;
            match parse_input(&text, lenient) {
                Ok(_) => {
                    println!("valid");
                    Ok(())
                }
                Err(err) => Err(err),
            }
        }
    }
}

fn parse_input(text: &str, lenient: bool) -> Result<JsonElement> {
    if lenient {
        parse_lenient(text).ok_or_else(|| anyhow!("invalid JSON input"))
    } else {
        parse(text).map_err(|err| anyhow!("invalid JSON input: {err}"))
    }
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("failed to read {path}"))
        }
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            Ok(buffer)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, format!("{content}\n"))
            .with_context(|| format!("failed to write {path}")),
        None => {
            println!("{content}");
            Ok(())
        }
    }
}
