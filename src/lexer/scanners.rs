//! The five recognizers tried by the dispatcher.
//!
//! Each scanner looks at the unconsumed remainder of the source and either
//! claims a prefix of it or reports no match without consuming anything.
//! A claimed prefix may still be an error lexeme (`Invalid`), in which case
//! the scanner also reports what went wrong.

use crate::errors::errors::ErrorImpl;

use super::tokens::{Tier, TokenKind, OPERATOR_LOOKUP, SEPARATOR_LOOKUP};

/// A prefix claimed by a scanner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scanned {
    pub kind: TokenKind,
    /// Length of the claimed prefix in bytes, always positive.
    pub len: usize,
    pub error: Option<ErrorImpl>,
}

impl Scanned {
    pub fn new(kind: TokenKind, len: usize) -> Self {
        Scanned { kind, len, error: None }
    }

    pub fn invalid(len: usize, error: ErrorImpl) -> Self {
        Scanned {
            kind: TokenKind::Invalid,
            len,
            error: Some(error),
        }
    }
}

pub type Scanner = fn(&str) -> Option<Scanned>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IdentifierState {
    Start,
    InIdentifier,
    Reject,
}

pub fn scan_identifier(input: &str) -> Option<Scanned> {
    let mut state = IdentifierState::Start;
    let mut len = 0;

    for c in input.bytes() {
        state = match state {
            IdentifierState::Start if c.is_ascii_alphabetic() || c == b'_' => {
                IdentifierState::InIdentifier
            }
            IdentifierState::Start => IdentifierState::Reject,
            IdentifierState::InIdentifier if c.is_ascii_alphanumeric() || c == b'_' => {
                IdentifierState::InIdentifier
            }
            IdentifierState::InIdentifier => break,
            IdentifierState::Reject => break,
        };
        if state == IdentifierState::Reject {
            break;
        }
        len += 1;
    }

    match state {
        IdentifierState::InIdentifier => Some(Scanned::new(TokenKind::Identifier, len)),
        IdentifierState::Start | IdentifierState::Reject => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NumberState {
    Start,
    IntegerDigits,
    AfterPoint,
    FractionDigits,
    Reject,
}

/// Digits with at most one decimal point.
///
/// A malformed run such as `1.2.3` is consumed whole so the error lexeme
/// covers the entire offending span.
pub fn scan_number(input: &str) -> Option<Scanned> {
    let mut state = NumberState::Start;
    let mut points = 0;
    let mut len = 0;

    for c in input.bytes() {
        if !(c.is_ascii_digit() || c == b'.') {
            break;
        }
        if c == b'.' {
            points += 1;
        }

        state = match (state, c) {
            (NumberState::Start, b'.') => return None,
            (NumberState::Start, _) => NumberState::IntegerDigits,
            (NumberState::IntegerDigits, b'.') => NumberState::AfterPoint,
            (NumberState::IntegerDigits, _) => NumberState::IntegerDigits,
            (NumberState::AfterPoint, b'.') => NumberState::Reject,
            (NumberState::AfterPoint, _) => NumberState::FractionDigits,
            (NumberState::FractionDigits, b'.') => NumberState::Reject,
            (NumberState::FractionDigits, _) => NumberState::FractionDigits,
            (NumberState::Reject, _) => NumberState::Reject,
        };
        len += 1;
    }

    match (state, points) {
        (NumberState::Start, _) => None,
        (NumberState::IntegerDigits, 0) => Some(Scanned::new(TokenKind::Integer, len)),
        (NumberState::FractionDigits, 1) => Some(Scanned::new(TokenKind::Float, len)),
        _ => Some(Scanned::invalid(
            len,
            ErrorImpl::MalformedNumber {
                lexeme: input[..len].to_string(),
            },
        )),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StringState {
    Start,
    Open,
    Escape,
    Closed,
    Reject,
}

/// Double-quoted literal; the lexeme keeps its quotes and escape sequences.
///
/// Only `\"` and `\\` are valid escapes. After a bad escape the scanner keeps
/// consuming up to the closing quote so the whole literal becomes one error.
pub fn scan_string(input: &str) -> Option<Scanned> {
    let mut state = StringState::Start;
    let mut skip_next = false;
    let mut len = 0;

    for c in input.chars() {
        state = match state {
            StringState::Start if c == '"' => StringState::Open,
            StringState::Start => return None,
            StringState::Open => match c {
                '"' => StringState::Closed,
                '\\' => StringState::Escape,
                _ => StringState::Open,
            },
            StringState::Escape => match c {
                '"' | '\\' => StringState::Open,
                _ => StringState::Reject,
            },
            StringState::Reject if skip_next => {
                skip_next = false;
                StringState::Reject
            }
            StringState::Reject => {
                if c == '\\' {
                    skip_next = true;
                } else if c == '"' {
                    len += c.len_utf8();
                    break;
                }
                StringState::Reject
            }
            StringState::Closed => break,
        };
        len += c.len_utf8();
        if state == StringState::Closed {
            break;
        }
    }

    let lexeme = || input[..len].to_string();

    match state {
        StringState::Start => None,
        StringState::Closed => Some(Scanned::new(TokenKind::String, len)),
        StringState::Reject => Some(Scanned::invalid(
            len,
            ErrorImpl::InvalidStringEscape { lexeme: lexeme() },
        )),
        StringState::Open | StringState::Escape => Some(Scanned::invalid(
            len,
            ErrorImpl::UnterminatedString { lexeme: lexeme() },
        )),
    }
}

/// Classifies a base operator character, then promotes it by one character
/// of lookahead: a repeat selects the doubled tier, a following `=` the
/// compound-assignment tier.
pub fn scan_operator(input: &str) -> Option<Scanned> {
    let mut chars = input.chars();
    let first = chars.next()?;
    let tiers = OPERATOR_LOOKUP.get(&first)?;

    let tier = match chars.next() {
        Some(next) if next == first => Tier::Doubled,
        Some('=') if tiers.compound.is_some() => Tier::Compound,
        _ => Tier::Single,
    };
    let kind = tiers.get(tier)?;

    let len = match (kind, tier) {
        // `//` runs to the end of the line, newline excluded.
        (TokenKind::LineComment, _) => input.find('\n').unwrap_or(input.len()),
        (_, Tier::Single) => first.len_utf8(),
        (_, Tier::Doubled | Tier::Compound) => 2,
    };

    Some(Scanned::new(kind, len))
}

pub fn scan_separator(input: &str) -> Option<Scanned> {
    let first = input.chars().next()?;
    SEPARATOR_LOOKUP
        .get(&first)
        .map(|kind| Scanned::new(*kind, first.len_utf8()))
}
