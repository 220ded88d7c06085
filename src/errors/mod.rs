//! Error types for lexical analysis.
//!
//! Lexical errors (unrecognized characters, malformed numbers, bad string
//! escapes, unterminated strings) are recoverable and surface as
//! diagnostics next to the token stream. Allocation failure while growing
//! the stream is the only error that aborts a scan.

pub mod errors;
