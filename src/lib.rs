#![allow(clippy::module_inception)]

//! DFA-driven lexer for a small C-like language.
//!
//! Source text is scanned left to right by five hand-built recognizers
//! (string, operator, separator, number, identifier) tried in a fixed
//! order. Identifier matches are reclassified as keywords through a
//! compressed prefix tree. Bad input never aborts the scan: it becomes
//! `Unknown`/`Invalid` tokens plus advisory diagnostics.

use std::fmt::Display;

pub mod errors;
pub mod lexer;
pub mod macros;

pub use errors::errors::{Error, ErrorImpl, ErrorTip};
pub use lexer::lexer::{tokenize, tokenize_with_diagnostics, Lexer};
pub use lexer::tokens::{Token, TokenKind};
pub use lexer::trie::KeywordTrie;

/// 1-based line and column of a character in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }

    pub fn start() -> Self {
        Position { line: 1, column: 1 }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
