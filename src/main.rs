// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! es6dot - tokenizer and parser front-end for a small ES2015 subset
//!
//! This is the main entry point for the es6dot CLI/REPL.
//!
//! ## Features
//!
//! - Token and AST dumps for files or inline source
//! - JSON output for downstream tools
//! - Interactive REPL with highlighting and history

mod repl;

use clap::Parser;
use es6dot_syntax::{Error, Program, loader, tokenize};
use owo_colors::OwoColorize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "es6dot",
    about = "Tokenize and parse a small subset of ECMAScript 2015",
    version
)]
struct Cli {
    /// Source files to parse
    files: Vec<PathBuf>,

    /// Parse source from the command line
    #[arg(short = 'e', long = "eval")]
    eval: Option<String>,

    /// Print tokens instead of the AST
    #[arg(short = 't', long)]
    tokens: bool,

    /// Print the AST as JSON
    #[arg(long, conflicts_with = "tokens")]
    json: bool,

    /// Enable verbose logging
    #[arg(long)]
    verbose: bool,
}

/// How parse results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Source-like rendering of each statement
    Ast,
    /// Pretty-printed JSON
    Json,
    /// One token per line
    Tokens,
}

impl OutputMode {
    fn from_flags(tokens: bool, json: bool) -> Self {
        match (tokens, json) {
            (true, _) => OutputMode::Tokens,
            (false, true) => OutputMode::Json,
            (false, false) => OutputMode::Ast,
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mode = OutputMode::from_flags(cli.tokens, cli.json);

    if let Some(code) = cli.eval {
        return exit_code(report(run_source(&code, mode)));
    }

    if cli.files.is_empty() {
        return run_repl(mode);
    }

    run_files(&cli.files, mode).await
}

fn init_logging(verbose: bool) {
    let default = if verbose {
        "es6dot=debug,es6dot_syntax=debug"
    } else {
        "es6dot=warn,es6dot_syntax=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Start the interactive REPL
fn run_repl(mode: OutputMode) -> ExitCode {
    match repl::Repl::new(mode) {
        Ok(mut repl) => {
            if let Err(e) = repl.run() {
                eprintln!("{}: {:?}", "REPL Error".red().bold(), e);
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!(
                "{}: Failed to initialize REPL: {:?}",
                "Error".red().bold(),
                e
            );
            ExitCode::FAILURE
        }
    }
}

/// One file's rendered output.
struct FileOutput {
    /// `// path` label, present when more than one file is given
    header: Option<String>,
    body: anyhow::Result<String>,
}

/// Parse every file concurrently and print each result in argument order.
async fn run_files(paths: &[PathBuf], mode: OutputMode) -> ExitCode {
    debug!(files = paths.len(), ?mode, "parsing files");
    let mut all_ok = true;

    for output in render_files(paths, mode).await {
        if let Some(header) = output.header {
            println!("{}", header.dimmed());
        }
        all_ok &= report(output.body.map(|text| print!("{text}")));
    }

    exit_code(all_ok)
}

/// Render every file, keeping each header ahead of its own output.
async fn render_files(paths: &[PathBuf], mode: OutputMode) -> Vec<FileOutput> {
    let bodies: Vec<anyhow::Result<String>> = if mode == OutputMode::Tokens {
        let mut bodies = Vec::with_capacity(paths.len());
        for path in paths {
            bodies.push(match loader::read_source(path).await {
                Ok(source) => format_tokens(&source),
                Err(e) => Err(e.into()),
            });
        }
        bodies
    } else {
        loader::parse_files(paths)
            .await
            .into_iter()
            .map(|result| {
                result
                    .map_err(anyhow::Error::from)
                    .and_then(|program| format_program(&program, mode))
            })
            .collect()
    };

    paths
        .iter()
        .zip(bodies)
        .map(|(path, body)| FileOutput {
            header: (paths.len() > 1).then(|| format!("// {}", path.display())),
            body,
        })
        .collect()
}

/// Tokenize or parse one source string and print it.
pub fn run_source(source: &str, mode: OutputMode) -> anyhow::Result<()> {
    let text = if mode == OutputMode::Tokens {
        format_tokens(source)?
    } else {
        let program = es6dot_syntax::parse(source)?;
        format_program(&program, mode)?
    };
    print!("{text}");
    Ok(())
}

fn format_tokens(source: &str) -> anyhow::Result<String> {
    let tokens = tokenize(source).map_err(Error::from)?;
    Ok(tokens.iter().map(|token| format!("{token}\n")).collect())
}

fn format_program(program: &Program, mode: OutputMode) -> anyhow::Result<String> {
    match mode {
        OutputMode::Json => Ok(format!("{}\n", serde_json::to_string_pretty(program)?)),
        _ => Ok(program.iter().map(|stmt| format!("{stmt}\n")).collect()),
    }
}

/// Print an error, if any. Returns true on success.
fn report(result: anyhow::Result<()>) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            print_error(&e.to_string());
            false
        }
    }
}

fn exit_code(ok: bool) -> ExitCode {
    if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}

/// Print a formatted error message, coloring its `Kind:` prefix.
pub fn print_error(message: &str) {
    if let Some(colon_pos) = message.find(':') {
        let (error_type, rest) = message.split_at(colon_pos);
        eprintln!("{}{}", error_type.red().bold(), rest);
    } else {
        eprintln!("{}", message.red());
    }
}
