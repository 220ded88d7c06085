//! Forward-only position over the source buffer.

use crate::Position;

/// Byte offset into the source plus the line/column it corresponds to.
///
/// The cursor never moves backwards. Every advance is clamped to the end of
/// the buffer and to a character boundary.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    source: &'a str,
    pos: usize,
    line: u32,
    column: u32,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Cursor {
            source,
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    pub fn offset(&self) -> usize {
        self.pos
    }

    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn remainder(&self) -> &'a str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Moves past `n` bytes, updating line and column for each character.
    pub fn advance_n(&mut self, n: usize) {
        let mut target = (self.pos + n).min(self.source.len());
        while !self.source.is_char_boundary(target) {
            target += 1;
        }

        for c in self.source[self.pos..target].chars() {
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.pos = target;
    }

    pub fn skip_whitespace(&mut self) {
        let run = self
            .remainder()
            .find(|c: char| !is_whitespace(c))
            .unwrap_or(self.remainder().len());
        self.advance_n(run);
    }
}

fn is_whitespace(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\x0b'
}
