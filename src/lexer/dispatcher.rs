use crate::errors::errors::ErrorImpl;

use super::{
    scanners::{scan_identifier, scan_number, scan_operator, scan_separator, scan_string, Scanned, Scanner},
    tokens::TokenKind,
    trie::KeywordTrie,
};

/// Scanners in priority order. The first one to claim a position wins.
pub const SCANNERS: [Scanner; 5] = [
    scan_string,
    scan_operator,
    scan_separator,
    scan_number,
    scan_identifier,
];

#[derive(Debug, Clone, Copy)]
pub struct Dispatcher<'t> {
    keywords: &'t KeywordTrie,
}

impl<'t> Dispatcher<'t> {
    pub fn new(keywords: &'t KeywordTrie) -> Self {
        Dispatcher { keywords }
    }

    /// Classifies the token starting at `input`, which must be non-empty.
    ///
    /// Always consumes at least one character: when no scanner claims the
    /// position, the first character becomes an `Unknown` token.
    pub fn dispatch(&self, input: &str) -> Scanned {
        for scanner in SCANNERS {
            if let Some(mut scanned) = scanner(input) {
                if scanned.kind == TokenKind::Identifier {
                    scanned.kind = self.keywords.search(&input[..scanned.len]);
                }
                return scanned;
            }
        }

        match input.chars().next() {
            Some(character) => Scanned {
                kind: TokenKind::Unknown,
                len: character.len_utf8(),
                error: Some(ErrorImpl::UnrecognizedCharacter { character }),
            },
            None => Scanned {
                kind: TokenKind::Unknown,
                len: 0,
                error: None,
            },
        }
    }
}
