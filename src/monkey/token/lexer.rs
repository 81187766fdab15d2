//! Encapsulates all behaviour necessary to properly lex Monkey code.
//!
//! Lexing works one line at a time: a [Scanner] is created for a single line
//! of source code and hands out one [Token] per call to [`Scanner::next_token`],
//! until the line is exhausted and only [`TokenType::EndOfInput`] remains.
//!
//! ```rust
//! use rust_monkey::monkey::token::lexer::Scanner;
//! use rust_monkey::monkey::token::tokens::TokenType;
//!
//! let mut scanner = Scanner::new("let five = 5;");
//! let mut types = vec![];
//! loop {
//!     let token = scanner.next_token();
//!     if token.is_end() {
//!         break;
//!     }
//!     types.push(token.token_type);
//! }
//! assert_eq!(types.len(), 5);
//! assert_eq!(types[3], TokenType::Integer);
//! ```
//!
//! Unknown characters never abort scanning, they are handed out as
//! [`TokenType::Illegal`] tokens and the caller decides what to make of them.
use tracing::trace;

use crate::monkey::token::tokens::{Token, TokenType};

/// Value of [`Scanner::ch`] once the input is exhausted.
const END_OF_INPUT: u8 = 0;

/// Scanning state over a single line of input.
///
/// The scanner works on bytes and only classifies ASCII characters;
/// anything else ends up in an illegal token.
#[derive(Debug)]
pub struct Scanner {
    /// The line being scanned.
    input: String,
    /// Index of the byte in [`Self::ch`].
    position: usize,
    /// Index of the next byte to read, always `position + 1`.
    read_position: usize,
    /// The byte under examination, [`END_OF_INPUT`] past the end.
    ch: u8,
}

impl Scanner {
    /// Creates a scanner positioned on the first character of `input`.
    #[must_use]
    #[inline]
    pub fn new<S: Into<String>>(input: S) -> Self {
        let mut scanner = Scanner {
            input: input.into(),
            position: 0,
            read_position: 0,
            ch: END_OF_INPUT,
        };
        scanner.read_char();
        scanner
    }

    /// Scans the next token, advancing past the characters it consists of.
    ///
    /// Once the end of the input has been reached, this keeps returning
    /// the end marker without moving any further.
    #[inline]
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        if self.is_at_end() {
            return Token::end_of_input();
        }

        let token = if let Some(token_type) = TokenType::from_symbol(self.ch) {
            match (token_type, self.peek_char()) {
                (TokenType::Assign, b'=') => self.read_two_char(TokenType::DoubleEquals),
                (TokenType::Not, b'=') => self.read_two_char(TokenType::NotEquals),
                _ => Token::new(token_type, char::from(self.ch)),
            }
        } else if is_letter(self.ch) {
            let word = self.read_while(is_letter);
            return Token::new(TokenType::from_word(&word), word);
        } else if is_digit(self.ch) {
            return Token::new(TokenType::Integer, self.read_while(is_digit));
        } else {
            self.read_illegal()
        };

        self.read_char();
        token
    }

    /// Moves on to the next byte of input.
    /// Does nothing once the input is exhausted.
    fn read_char(&mut self) {
        if self.is_at_end() && self.read_position > 0 {
            return;
        }
        self.ch = self.peek_char();
        self.position = self.read_position;
        self.read_position = self.position.saturating_add(1);
    }

    /// The byte after the current one, without consuming anything.
    fn peek_char(&self) -> u8 {
        self.input
            .as_bytes()
            .get(self.read_position)
            .copied()
            .unwrap_or(END_OF_INPUT)
    }

    /// Whether every byte of input has been consumed.
    fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    /// Skips spaces, tabs and line terminators.
    fn skip_whitespace(&mut self) {
        while matches!(self.ch, b' ' | b'\t' | b'\n' | b'\r') && !self.is_at_end() {
            self.read_char();
        }
    }

    /// Consumes the current byte and the next one, which the caller has
    /// peeked already, into a token of the given type.
    /// The cursor is left on the second byte.
    fn read_two_char(&mut self, token_type: TokenType) -> Token {
        let first = char::from(self.ch);
        self.read_char();
        let mut literal = String::from(first);
        literal.push(char::from(self.ch));
        Token::new(token_type, literal)
    }

    /// Consumes the maximal run of bytes matching `test`, starting at the
    /// current byte. The cursor is left on the first byte not matching.
    fn read_while(&mut self, test: fn(u8) -> bool) -> String {
        let start = self.position;
        while test(self.ch) && !self.is_at_end() {
            self.read_char();
        }
        // Only ASCII bytes were consumed, so both ends are char boundaries.
        self.input
            .get(start..self.position)
            .unwrap_or_default()
            .to_owned()
    }

    /// Builds an illegal token out of the character at the cursor.
    ///
    /// A multi-byte character is kept whole, so the cursor is left on
    /// its last byte.
    fn read_illegal(&mut self) -> Token {
        let illegal = self
            .input
            .get(self.position..)
            .and_then(|rest| rest.chars().next())
            .unwrap_or(char::from(self.ch));
        for _ in 1..illegal.len_utf8() {
            self.read_char();
        }
        trace!(character = ?illegal, "illegal character");
        Token::new(TokenType::Illegal, illegal)
    }
}

/// Drains a fresh [Scanner] over `line`, collecting all tokens up to,
/// but not including, the end marker.
#[must_use]
#[inline]
pub fn tokenize<S: Into<String>>(line: S) -> Vec<Token> {
    let mut scanner = Scanner::new(line);
    let mut tokens = vec![];
    loop {
        let token = scanner.next_token();
        if token.is_end() {
            break tokens;
        }
        tokens.push(token);
    }
}

/// Can the byte be part of an identifier or keyword?
#[inline]
const fn is_letter(ch: u8) -> bool {
    ch.is_ascii_alphabetic() || ch == b'_'
}

/// Is the byte an ASCII digit?
#[inline]
const fn is_digit(ch: u8) -> bool {
    ch.is_ascii_digit()
}
