//! Lexical analysis.
//!
//! Converts source text into a stream of classified tokens:
//!
//! - Hand-built scanners for strings, operators, separators, numbers and identifiers
//! - A fixed dispatch order deciding which scanner claims each position
//! - Keyword reclassification through a compressed prefix tree
//! - Line/column tracking and non-fatal error recovery

pub mod cursor;
pub mod dispatcher;
pub mod lexer;
pub mod scanners;
pub mod tokens;
pub mod trie;

#[cfg(test)]
mod tests;
