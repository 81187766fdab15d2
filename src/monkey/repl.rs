//! The read-eval-print loop, or rather read-scan-print for now.
//!
//! Every line read is scanned on its own and the resulting tokens are
//! printed, until the input runs out.
use std::io::{BufRead, Error as IOError, Write};

use clap::ValueEnum;
use tracing::debug;

use crate::monkey::token::lexer;
use crate::monkey::token::tokens::Token;

/// Printed before reading each line.
pub const PROMPT: &str = ">> ";

/// How tokens are rendered for display.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, ValueEnum)]
#[non_exhaustive]
pub enum OutputFormat {
    /// `{Type:LET Literal:let}`
    #[default]
    Display,
    /// The `Debug` representation of the token.
    Debug,
}

impl OutputFormat {
    /// Renders a single token.
    #[must_use]
    #[inline]
    pub fn render(self, token: &Token) -> String {
        match self {
            OutputFormat::Display => token.to_string(),
            OutputFormat::Debug => format!("{token:?}"),
        }
    }
}

/// The welcome message shown when the REPL starts.
#[must_use]
#[inline]
pub fn greeting(user: Option<&str>) -> String {
    let hello = user.map_or_else(|| "Hello!".to_owned(), |user| format!("Hello {user}!"));
    format!("{hello} This is the Monkey programming language!\nFeel free to type in commands\n")
}

/// Writes the tokens one per line.
///
/// # Errors
///
/// If writing to `output` fails.
#[inline]
pub fn write_tokens<W: Write>(
    output: &mut W,
    tokens: &[Token],
    format: OutputFormat,
) -> Result<(), IOError> {
    for token in tokens {
        writeln!(output, "{}", format.render(token))?;
    }
    Ok(())
}

/// Runs the REPL until `input` is exhausted.
///
/// # Errors
///
/// Any I/O error while reading from `input` or writing to `output`.
#[inline]
pub fn start<R: BufRead, W: Write>(
    mut input: R,
    output: &mut W,
    format: OutputFormat,
) -> Result<(), IOError> {
    let mut line = String::new();
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }

        let source = line.trim_end_matches(['\n', '\r']);
        debug!(line = source, "scanning line");
        write_tokens(output, &lexer::tokenize(source), format)?;
    }
}

#[cfg(test)]
mod test {
    use std::io::Cursor;

    use super::{OutputFormat, greeting, start};

    fn run(input: &str, format: OutputFormat) -> String {
        let mut output = Vec::new();
        start(Cursor::new(input), &mut output, format).expect("in-memory I/O cannot fail");
        String::from_utf8(output).expect("output is UTF-8")
    }

    #[test]
    fn prints_tokens_per_line() {
        assert_eq!(
            run("let x = 5;\n", OutputFormat::Display),
            ">> {Type:LET Literal:let}\n\
             {Type:IDENT Literal:x}\n\
             {Type:= Literal:=}\n\
             {Type:INT Literal:5}\n\
             {Type:; Literal:;}\n\
             >> "
        );
    }

    #[test]
    fn lines_are_scanned_independently() {
        assert_eq!(
            run("a\r\n\n!= @", OutputFormat::Display),
            ">> {Type:IDENT Literal:a}\n\
             >> >> {Type:!= Literal:!=}\n\
             {Type:ILLEGAL Literal:@}\n\
             >> "
        );
    }

    #[test]
    fn empty_input_only_prompts() {
        assert_eq!(run("", OutputFormat::Display), ">> ");
    }

    #[test]
    fn debug_format() {
        assert_eq!(
            run("fn\n", OutputFormat::Debug),
            ">> Token { token_type: Keyword(Fn), literal: \"fn\" }\n>> "
        );
    }

    #[test]
    fn greets_user() {
        assert_eq!(
            greeting(Some("ada")),
            "Hello ada! This is the Monkey programming language!\nFeel free to type in commands\n"
        );
        assert!(greeting(None).starts_with("Hello! This is"));
    }
}
