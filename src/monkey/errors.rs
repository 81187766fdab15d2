//! Errors that can occur during the lifetime of the tool.
//!
//! Scanning itself cannot fail, unknown characters become illegal tokens.
//! The errors here belong to the shell around the scanner: reading input,
//! and deciding to reject illegal tokens.
use std::io::Error as IOError;
use std::process::ExitCode;

use thiserror::Error;

use crate::monkey::token::tokens::Token;

/// An error that occurred inside the Monkey engine.
///
/// A `From<EngineError> for ExitCode` implementation maps every error to an exit
/// code as specified by the [`<sysexits.h>`](https://man.freebsd.org/cgi/man.cgi?query=sysexits&apropos=0&sektion=0&manpath=FreeBSD+4.3-RELEASE&format=html)
/// header.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EngineError {
    /// An error in how the tool is called.
    #[error("Usage: {0}")]
    UsageError(String),
    /// Errors that happened when trying to load the source file.
    #[error("Error reading source file: {0}")]
    FileError(#[source] IOError),
    /// Errors that happened while talking to the terminal in the REPL.
    #[error("Error in REPL input/output: {0}")]
    IoError(#[source] IOError),
    /// Illegal tokens that were found in a source file, along
    /// with the (1-indexed) line they were found on.
    #[error("Illegal characters in source file:\n{}", display_illegal(.0))]
    IllegalCharacters(Vec<(usize, Token)>),
}

/// Lists illegal tokens one per line.
fn display_illegal(tokens: &[(usize, Token)]) -> String {
    tokens
        .iter()
        .map(|&(line, ref token)| format!("  line {line}: '{}'", token.literal))
        .collect::<Vec<_>>()
        .join("\n")
}

impl EngineError {
    /// The `sysexits.h` code the process should exit with.
    #[must_use]
    #[inline]
    pub const fn exit_code(&self) -> u8 {
        match *self {
            EngineError::UsageError(_) => 64,        // EX_USAGE
            EngineError::IllegalCharacters(_) => 65, // EX_DATAERR
            // Technically, 66 only specifies missing or unreadable files,
            // other errors while reading would be 74 as well.
            EngineError::FileError(_) => 66, // EX_NOINPUT
            EngineError::IoError(_) => 74,   // EX_IOERR
        }
    }
}

impl From<EngineError> for ExitCode {
    #[inline]
    fn from(value: EngineError) -> Self {
        ExitCode::from(value.exit_code())
    }
}

#[cfg(test)]
mod test {
    use std::io::{Error as IOError, ErrorKind};

    use super::EngineError;
    use crate::monkey::token::tokens::{Token, TokenType};

    #[test]
    fn illegal_characters_are_listed_by_line() {
        let err = EngineError::IllegalCharacters(vec![
            (1, Token::new(TokenType::Illegal, "@")),
            (3, Token::new(TokenType::Illegal, "$")),
        ]);
        assert_eq!(
            err.to_string(),
            "Illegal characters in source file:\n  line 1: '@'\n  line 3: '$'"
        );
    }

    #[test]
    fn exit_codes() {
        assert_eq!(EngineError::UsageError("monkey [file]".to_owned()).exit_code(), 64);
        assert_eq!(EngineError::IllegalCharacters(vec![]).exit_code(), 65);
        assert_eq!(
            EngineError::FileError(IOError::from(ErrorKind::NotFound)).exit_code(),
            66
        );
        assert_eq!(
            EngineError::IoError(IOError::from(ErrorKind::BrokenPipe)).exit_code(),
            74
        );
    }
}
