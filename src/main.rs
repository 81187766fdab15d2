//! The `monkey` command: scans Monkey source code and prints its tokens,
//! either interactively line by line, or for an entire file.
#![deny(warnings)]
#![deny(clippy::all, clippy::pedantic)]
#![warn(unused)]

use clap::{Parser, Subcommand};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use rust_monkey::monkey::errors::EngineError;
use rust_monkey::monkey::repl::{self, OutputFormat};
use rust_monkey::monkey::token::lexer;
use rust_monkey::monkey::token::tokens::TokenType;

use std::fs;
use std::io::{Write, stderr, stdin, stdout};
use std::path::{Path, PathBuf};
use std::process::{ExitCode, Termination};

/// Load a file and print the tokens of every line.
///
/// Lines are scanned independently, just like in the REPL.
fn run_file(file: &Path, format: OutputFormat, deny_illegal: bool) -> Result<(), EngineError> {
    let source = fs::read_to_string(file).map_err(EngineError::FileError)?;
    let mut out = stdout().lock();

    let mut illegal = vec![];
    for (line_no, line) in (1usize..).zip(source.lines()) {
        debug!(line = line_no, "scanning line");
        let tokens = lexer::tokenize(line);
        repl::write_tokens(&mut out, &tokens, format).map_err(EngineError::IoError)?;
        illegal.extend(
            tokens
                .into_iter()
                .filter(|token| token.token_type == TokenType::Illegal)
                .map(|token| (line_no, token)),
        );
    }

    if illegal.is_empty() {
        Ok(())
    } else if deny_illegal {
        Err(EngineError::IllegalCharacters(illegal))
    } else {
        warn!(count = illegal.len(), file = %file.display(), "source contains illegal characters");
        Ok(())
    }
}

/// Greet the user and run the REPL Prompt until standard input closes.
fn run_prompt(user: Option<&str>, format: OutputFormat) -> Result<(), EngineError> {
    let mut out = stdout().lock();
    write!(out, "{}", repl::greeting(user)).map_err(EngineError::IoError)?;
    repl::start(stdin().lock(), &mut out, format).map_err(EngineError::IoError)
}

/// Log to standard error, so token output stays clean.
/// `RUST_LOG` takes precedence over the verbosity flag.
fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(stderr)
        .init();
}

/// Isomorphic to `Result<(), EngineError>`,
/// this allows for overriding the [Termination]
/// trait impl and report custom exit codes instead.
#[derive(Debug)]
enum EngineResult {
    /// Ok variant.
    Ok,
    /// Error variant
    Err(EngineError),
}

impl Termination for EngineResult {
    fn report(self) -> ExitCode {
        match self {
            EngineResult::Ok => ExitCode::SUCCESS,
            EngineResult::Err(err) => {
                eprintln!("{err}");
                err.into()
            }
        }
    }
}

impl<E> From<Result<(), E>> for EngineResult
where
    EngineError: From<E>,
{
    fn from(value: Result<(), E>) -> Self {
        match value {
            Ok(()) => EngineResult::Ok,
            Err(err) => EngineResult::Err(err.into()),
        }
    }
}

/// Scanner for the Monkey programming language.
///
/// Without arguments, greets you and starts a REPL printing the tokens
/// of every line typed in. Given a source file, prints its tokens instead.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct MonkeyArgs {
    /// Subcommands, only one of this and [`source_file`] may be given.
    #[command(subcommand)]
    command: Option<MonkeyCommands>,

    /// Source file to tokenize.
    source_file: Option<PathBuf>,

    /// How to print tokens.
    #[arg(long, value_enum, default_value_t, global = true)]
    format: OutputFormat,

    /// Name to greet when starting the REPL.
    #[arg(long, env = "USER", global = true)]
    user: Option<String>,

    /// Log debug information to standard error.
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands in Rust-Monkey
#[derive(Subcommand, Debug)]
enum MonkeyCommands {
    /// run the monkey repl.
    Repl,
    /// tokenize the given file and print its tokens.
    Tokenize {
        source_file: PathBuf,

        /// Fail if the file contains characters that are not part of the language.
        #[arg(long)]
        deny_illegal: bool,
    },
}

fn main() -> EngineResult {
    let MonkeyArgs {
        command,
        source_file,
        format,
        user,
        verbose,
    } = MonkeyArgs::parse();

    init_logging(verbose);

    match (command, source_file) {
        (None, Some(source_file)) => run_file(&source_file, format, false).into(),
        (
            Some(MonkeyCommands::Tokenize {
                source_file,
                deny_illegal,
            }),
            None,
        ) => run_file(&source_file, format, deny_illegal).into(),

        (Some(MonkeyCommands::Repl) | None, None) => run_prompt(user.as_deref(), format).into(),

        (Some(_), Some(_)) => EngineResult::Err(EngineError::UsageError(
            "monkey [OPTIONS] [SOURCE_FILE | COMMAND]".to_owned(),
        )),
    }
}
