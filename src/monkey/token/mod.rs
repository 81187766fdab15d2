//! This is the Lexing or Tokenization module, split into two submodules.
//!
//! - [tokens] specifies the data types making up the tokens of the Monkey language.
//! - [lexer] contains the [`Scanner`](lexer::Scanner) turning a line of source code
//!   into those tokens.
pub mod lexer;
pub mod tokens;
