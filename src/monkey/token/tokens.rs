//! Data types representing tokens available in the Monkey language.
use core::fmt::{Display, Formatter};
use std::collections::HashMap;
use std::sync::LazyLock;

use crate::monkey::util::map;

/// Keywords in the Monkey language.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[expect(
    clippy::exhaustive_enums,
    reason = "the keyword set is closed, a new keyword is a breaking change."
)]
pub enum Keyword {
    // Declarations
    /// `"fn"`
    Fn,
    /// `"let"`
    Let,

    // Constants
    /// `"true"`
    True,
    /// `"false"`
    False,

    // Control flow
    /// `"if"`
    If,
    /// `"else"`
    Else,
    /// `"return"`
    Return,
}

impl Keyword {
    /// Extract the raw representation as it occurs in the source code.
    #[must_use]
    #[inline]
    pub const fn to_raw(self) -> &'static str {
        match self {
            Keyword::Fn => "fn",
            Keyword::Let => "let",
            Keyword::True => "true",
            Keyword::False => "false",
            Keyword::If => "if",
            Keyword::Else => "else",
            Keyword::Return => "return",
        }
    }

    /// Looks up the keyword spelled exactly like `ident`, if any.
    #[must_use]
    #[inline]
    pub fn lookup(ident: &str) -> Option<Keyword> {
        KEYWORDS.get(ident).copied()
    }
}

/// Lookup table for keywords to distinguish them from identifiers.
pub static KEYWORDS: LazyLock<HashMap<&'static str, Keyword>> = LazyLock::new(|| {
    map! {
        "fn"     => Keyword::Fn,
        "let"    => Keyword::Let,

        "true"   => Keyword::True,
        "false"  => Keyword::False,

        "if"     => Keyword::If,
        "else"   => Keyword::Else,
        "return" => Keyword::Return,
    }
});

/// An enum covering all possible variations a token can take on.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[expect(
    clippy::exhaustive_enums,
    reason = "consumers must handle every token type, adding one is a breaking change."
)]
pub enum TokenType {
    /// A character the scanner does not recognize.
    Illegal,
    /// End of Input, i.e. the end of the scanned line.
    EndOfInput,

    // Identifiers and Literals
    /// A custom identifier
    Identifier,
    /// A run of decimal digits.
    Integer,

    // Operators
    /// `"="`
    Assign,
    /// `"=="`
    DoubleEquals,
    /// `"!="`
    NotEquals,
    /// `"!"`
    Not,
    /// `"+"`
    Plus,
    /// `"-"`
    Minus,
    /// `"/"`
    Slash,
    /// `"*"`
    Star,
    /// `"<"`
    LessThan,
    /// `">"`
    GreaterThan,

    // Delimiters
    /// `","`
    Comma,
    /// `";"`
    Semi,

    // Grouping
    /// `"("`
    LeftParen,
    /// `")"`
    RightParen,
    /// `"{"`
    LeftBrace,
    /// `"}"`
    RightBrace,

    /// A specific keyword
    Keyword(Keyword),
}

impl TokenType {
    /// The name this token type is printed with.
    ///
    /// Operators and delimiters are named by their own spelling,
    /// everything else by an upper-case tag.
    #[must_use]
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            TokenType::Illegal => "ILLEGAL",
            TokenType::EndOfInput => "EOF",
            TokenType::Identifier => "IDENT",
            TokenType::Integer => "INT",
            TokenType::Assign => "=",
            TokenType::DoubleEquals => "==",
            TokenType::NotEquals => "!=",
            TokenType::Not => "!",
            TokenType::Plus => "+",
            TokenType::Minus => "-",
            TokenType::Slash => "/",
            TokenType::Star => "*",
            TokenType::LessThan => "<",
            TokenType::GreaterThan => ">",
            TokenType::Comma => ",",
            TokenType::Semi => ";",
            TokenType::LeftParen => "(",
            TokenType::RightParen => ")",
            TokenType::LeftBrace => "{",
            TokenType::RightBrace => "}",
            TokenType::Keyword(Keyword::Fn) => "FUNCTION",
            TokenType::Keyword(Keyword::Let) => "LET",
            TokenType::Keyword(Keyword::True) => "TRUE",
            TokenType::Keyword(Keyword::False) => "FALSE",
            TokenType::Keyword(Keyword::If) => "IF",
            TokenType::Keyword(Keyword::Else) => "ELSE",
            TokenType::Keyword(Keyword::Return) => "RETURN",
        }
    }

    /// The token type of a single-character operator or delimiter, if `ch` is one.
    #[must_use]
    #[inline]
    pub const fn from_symbol(ch: u8) -> Option<TokenType> {
        Some(match ch {
            b'=' => TokenType::Assign,
            b';' => TokenType::Semi,
            b'(' => TokenType::LeftParen,
            b')' => TokenType::RightParen,
            b',' => TokenType::Comma,
            b'+' => TokenType::Plus,
            b'-' => TokenType::Minus,
            b'!' => TokenType::Not,
            b'/' => TokenType::Slash,
            b'*' => TokenType::Star,
            b'<' => TokenType::LessThan,
            b'>' => TokenType::GreaterThan,
            b'{' => TokenType::LeftBrace,
            b'}' => TokenType::RightBrace,
            _ => return None,
        })
    }

    /// Classifies a run of letters as either a keyword or an identifier.
    #[must_use]
    #[inline]
    pub fn from_word(word: &str) -> TokenType {
        Keyword::lookup(word).map_or(TokenType::Identifier, TokenType::Keyword)
    }
}

/// A single lexical unit: its type and the exact source text it was scanned from.
#[derive(Debug, Clone, PartialEq, Eq)]
#[expect(clippy::exhaustive_structs, reason = "tokens carry no more than this.")]
pub struct Token {
    /// Type of this token.
    pub token_type: TokenType,
    /// Source text of the token, empty for [`TokenType::EndOfInput`].
    pub literal: String,
}

impl Token {
    /// Creates a token of the given type with the given source text.
    #[must_use]
    #[inline]
    pub fn new<S: Into<String>>(token_type: TokenType, literal: S) -> Self {
        Token {
            token_type,
            literal: literal.into(),
        }
    }

    /// The end marker token.
    #[must_use]
    #[inline]
    pub const fn end_of_input() -> Self {
        Token {
            token_type: TokenType::EndOfInput,
            literal: String::new(),
        }
    }

    /// Whether this is the end marker.
    #[must_use]
    #[inline]
    pub const fn is_end(&self) -> bool {
        matches!(self.token_type, TokenType::EndOfInput)
    }
}

impl Display for Token {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{{Type:{} Literal:{}}}", self.token_type.name(), self.literal)
    }
}

#[cfg(test)]
mod test {
    use super::{Keyword, Token, TokenType};

    #[test]
    fn keywords_match_exactly() {
        assert_eq!(TokenType::from_word("let"), TokenType::Keyword(Keyword::Let));
        assert_eq!(TokenType::from_word("fn"), TokenType::Keyword(Keyword::Fn));
        assert_eq!(TokenType::from_word("return"), TokenType::Keyword(Keyword::Return));

        assert_eq!(TokenType::from_word("Let"), TokenType::Identifier);
        assert_eq!(TokenType::from_word("le"), TokenType::Identifier);
        assert_eq!(TokenType::from_word("letter"), TokenType::Identifier);
        assert_eq!(TokenType::from_word("func"), TokenType::Identifier);
    }

    #[test]
    fn keyword_table_agrees_with_spelling() {
        for kw in [
            Keyword::Fn,
            Keyword::Let,
            Keyword::True,
            Keyword::False,
            Keyword::If,
            Keyword::Else,
            Keyword::Return,
        ] {
            assert_eq!(Keyword::lookup(kw.to_raw()), Some(kw), "{kw:?}");
        }
    }

    #[test]
    fn symbols() {
        assert_eq!(TokenType::from_symbol(b'{'), Some(TokenType::LeftBrace));
        assert_eq!(TokenType::from_symbol(b'!'), Some(TokenType::Not));
        assert_eq!(TokenType::from_symbol(b'@'), None);
        assert_eq!(TokenType::from_symbol(b'a'), None);
    }

    #[test]
    fn display() {
        assert_eq!(
            Token::new(TokenType::Keyword(Keyword::Let), "let").to_string(),
            "{Type:LET Literal:let}"
        );
        assert_eq!(
            Token::new(TokenType::DoubleEquals, "==").to_string(),
            "{Type:== Literal:==}"
        );
        assert_eq!(Token::end_of_input().to_string(), "{Type:EOF Literal:}");
    }
}
