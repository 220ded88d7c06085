use std::{fmt::Display, rc::Rc};

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
    file: Rc<String>,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position, file: Rc<String>) -> Self {
        Error {
            internal_error: error_impl,
            position,
            file,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_file(&self) -> &str {
        &self.file
    }

    pub fn get_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    /// Only allocation failure stops a scan; every lexical error is advisory.
    pub fn is_fatal(&self) -> bool {
        matches!(self.internal_error, ErrorImpl::AllocationFailure { .. })
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognizedCharacter { .. } => "UnrecognizedCharacter",
            ErrorImpl::MalformedNumber { .. } => "MalformedNumber",
            ErrorImpl::InvalidStringEscape { .. } => "InvalidStringEscape",
            ErrorImpl::UnterminatedString { .. } => "UnterminatedString",
            ErrorImpl::AllocationFailure { .. } => "AllocationFailure",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognizedCharacter { .. } => ErrorTip::None,
            ErrorImpl::MalformedNumber { lexeme } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, a number takes at most one decimal point followed by digits",
                lexeme
            )),
            ErrorImpl::InvalidStringEscape { lexeme } => ErrorTip::Suggestion(format!(
                "Invalid escape in `{}`, only `\\\"` and `\\\\` are allowed",
                lexeme
            )),
            ErrorImpl::UnterminatedString { lexeme } => ErrorTip::Suggestion(format!(
                "String `{}` reaches the end of the file, did you miss a closing quote?",
                lexeme
            )),
            ErrorImpl::AllocationFailure { requested } => ErrorTip::Suggestion(format!(
                "Could not grow the token buffer to {} tokens",
                requested
            )),
        }
    }
}

impl Error {
    /// Human-readable report for the diagnostic channel.
    ///
    /// ```text
    /// Error: MalformedNumber (Invalid number: `1.2.3`, ...)
    /// -> test.unn:1:9
    ///    malformed number: "1.2.3"
    /// ```
    pub fn report(&self) -> String {
        let header = if let ErrorTip::None = self.get_tip() {
            format!("Error: {}", self.get_error_name())
        } else {
            format!("Error: {} ({})", self.get_error_name(), self.get_tip())
        };

        format!(
            "{}\n-> {}:{}\n   {}",
            header, self.file, self.position, self.internal_error
        )
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}: {}", self.file, self.position, self.internal_error)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("unrecognized character: {character:?}")]
    UnrecognizedCharacter { character: char },
    #[error("malformed number: {lexeme:?}")]
    MalformedNumber { lexeme: String },
    #[error("invalid escape in string: {lexeme:?}")]
    InvalidStringEscape { lexeme: String },
    #[error("unterminated string: {lexeme:?}")]
    UnterminatedString { lexeme: String },
    #[error("unable to allocate room for {requested} tokens")]
    AllocationFailure { requested: usize },
}
