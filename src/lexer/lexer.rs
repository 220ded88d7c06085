use std::rc::Rc;

use tracing::{debug, trace, warn};

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, MK_TOKEN,
};

use super::{cursor::Cursor, dispatcher::Dispatcher, tokens::Token, trie::KeywordTrie};

const TOKEN_STREAM_LEN: usize = 10;

/// Append-only token buffer whose capacity doubles when full.
#[derive(Debug, Clone)]
pub struct TokenStream {
    tokens: Vec<Token>,
}

impl Default for TokenStream {
    fn default() -> Self {
        TokenStream::new()
    }
}

impl TokenStream {
    pub fn new() -> Self {
        TokenStream {
            tokens: Vec::with_capacity(TOKEN_STREAM_LEN),
        }
    }

    /// Appends `token`, reporting the requested capacity if growth fails.
    pub fn push(&mut self, token: Token) -> Result<(), ErrorImpl> {
        if self.tokens.len() == self.tokens.capacity() {
            let additional = self.tokens.capacity().max(TOKEN_STREAM_LEN);
            self.tokens
                .try_reserve_exact(additional)
                .map_err(|_| ErrorImpl::AllocationFailure {
                    requested: self.tokens.capacity() + additional,
                })?;
        }
        self.tokens.push(token);
        Ok(())
    }

    pub(crate) fn len(&self) -> usize {
        self.tokens.len()
    }

    #[cfg(test)]
    pub(crate) fn capacity(&self) -> usize {
        self.tokens.capacity()
    }

    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }
}

pub struct Lexer<'a> {
    cursor: Cursor<'a>,
    dispatcher: Dispatcher<'a>,
    tokens: TokenStream,
    diagnostics: Vec<Error>,
    file: Rc<String>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str, keywords: &'a KeywordTrie, file: Option<String>) -> Lexer<'a> {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            cursor: Cursor::new(source),
            dispatcher: Dispatcher::new(keywords),
            tokens: TokenStream::new(),
            diagnostics: vec![],
            file: file_name,
        }
    }

    pub fn tokens(&self) -> &[Token] {
        self.tokens.as_slice()
    }

    pub fn diagnostics(&self) -> &[Error] {
        &self.diagnostics
    }

    fn error(&self, error_impl: ErrorImpl, position: Position) -> Error {
        Error::new(error_impl, position, Rc::clone(&self.file))
    }

    /// Scans one token at the cursor. Returns `false` once the input is exhausted.
    pub fn step(&mut self) -> Result<bool, Error> {
        self.cursor.skip_whitespace();
        if self.cursor.at_eof() {
            return Ok(false);
        }

        let start = self.cursor.position();
        let rest = self.cursor.remainder();
        let scanned = self.dispatcher.dispatch(rest);
        let len = scanned.len.max(1);
        let text = rest
            .get(..len)
            .map(String::from)
            .unwrap_or_else(|| rest.chars().take(1).collect());

        if let Some(error_impl) = scanned.error {
            let diagnostic = self.error(error_impl, start);
            warn!(
                file = %self.file,
                line = start.line,
                column = start.column,
                lexeme = %text,
                "{}",
                diagnostic.get_impl()
            );
            self.diagnostics.push(diagnostic);
        }

        trace!(kind = %scanned.kind, text = %text, line = start.line, column = start.column, "token");

        self.cursor.advance_n(len);
        self.tokens
            .push(MK_TOKEN!(scanned.kind, text, start))
            .map_err(|error_impl| self.error(error_impl, start))?;

        Ok(true)
    }

    /// Runs the scan to the end of the input.
    pub fn run(mut self) -> Result<(Vec<Token>, Vec<Error>), Error> {
        debug!(file = %self.file, bytes = self.cursor.remainder().len(), "tokenizing");

        while self.step()? {}

        debug!(
            file = %self.file,
            tokens = self.tokens.len(),
            diagnostics = self.diagnostics.len(),
            "tokenized"
        );
        Ok((self.tokens.into_tokens(), self.diagnostics))
    }
}

/// Tokenizes `source`, also returning the lexical diagnostics in source order.
pub fn tokenize_with_diagnostics(
    source: &str,
    file: Option<String>,
) -> Result<(Vec<Token>, Vec<Error>), Error> {
    let keywords = KeywordTrie::with_keywords();
    Lexer::new(source, &keywords, file).run()
}

pub fn tokenize(source: &str, file: Option<String>) -> Result<Vec<Token>, Error> {
    tokenize_with_diagnostics(source, file).map(|(tokens, _)| tokens)
}
