//! Unit tests for the lexer module.
//!
//! - Keyword trie insertion and lookup
//! - Each scanner in isolation
//! - Dispatch order and keyword reclassification
//! - Line/column tracking and error recovery in the driver

use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::{
    dispatcher::Dispatcher,
    lexer::{tokenize, tokenize_with_diagnostics, TokenStream},
    scanners::{scan_identifier, scan_number, scan_operator, scan_separator, scan_string, Scanned},
    tokens::{Tier, TokenKind, KEYWORDS},
    trie::KeywordTrie,
};
use crate::{errors::errors::ErrorImpl, Position, MK_TOKEN};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source, Some("test.unn".to_string()))
        .unwrap()
        .iter()
        .map(|token| token.kind)
        .collect()
}

#[test]
fn test_trie_overlapping_prefixes() {
    let mut trie = KeywordTrie::new();
    trie.insert("class", TokenKind::Class);
    trie.insert("case", TokenKind::Case);

    assert_eq!(trie.search("class"), TokenKind::Class);
    assert_eq!(trie.search("case"), TokenKind::Case);
    assert_eq!(trie.search("ca"), TokenKind::Identifier);

    let mut reversed = KeywordTrie::new();
    reversed.insert("case", TokenKind::Case);
    reversed.insert("class", TokenKind::Class);

    assert_eq!(reversed.search("class"), TokenKind::Class);
    assert_eq!(reversed.search("case"), TokenKind::Case);
}

#[test]
fn test_trie_requires_exact_match() {
    let mut trie = KeywordTrie::new();
    trie.insert("class", TokenKind::Class);

    assert_eq!(trie.search("classic"), TokenKind::Identifier);
    assert_eq!(trie.search("clas"), TokenKind::Identifier);
    assert_eq!(trie.search("glass"), TokenKind::Identifier);
    assert_eq!(trie.search(""), TokenKind::Identifier);
}

#[test]
fn test_trie_insert_is_idempotent() {
    let mut trie = KeywordTrie::new();
    trie.insert("class", TokenKind::Class);
    trie.insert("class", TokenKind::Class);

    assert_eq!(trie.len(), 1);
    assert_eq!(trie.search("class"), TokenKind::Class);
    assert!(trie.siblings_are_distinct());
}

#[test]
fn test_trie_prefix_word_inserted_after_longer_word() {
    let mut trie = KeywordTrie::new();
    trie.insert("finally", TokenKind::Finally);
    trie.insert("final", TokenKind::Final);

    assert_eq!(trie.search("finally"), TokenKind::Finally);
    assert_eq!(trie.search("final"), TokenKind::Final);
    assert_eq!(trie.search("fina"), TokenKind::Identifier);
    assert_eq!(trie.len(), 2);
}

#[test]
fn test_trie_holds_every_keyword() {
    let trie = KeywordTrie::with_keywords();

    assert_eq!(trie.len(), KEYWORDS.len());
    assert!(trie.siblings_are_distinct());
    for (word, kind) in KEYWORDS {
        assert_eq!(trie.search(word), kind, "keyword `{}`", word);
        assert!(kind.is_keyword());
    }
    assert!(!TokenKind::Identifier.is_keyword());
    assert!(!trie.contains("object_"));
    assert!(!trie.is_empty());
}

#[test]
fn test_trie_ignores_empty_word() {
    let mut trie = KeywordTrie::new();
    trie.insert("", TokenKind::If);

    assert!(trie.is_empty());
    assert_eq!(trie.search(""), TokenKind::Identifier);
}

#[test]
fn test_scan_identifier() {
    assert_eq!(scan_identifier("foo_1 bar"), Some(Scanned::new(TokenKind::Identifier, 5)));
    assert_eq!(scan_identifier("_x"), Some(Scanned::new(TokenKind::Identifier, 2)));
    assert_eq!(scan_identifier("9lives"), None);
    assert_eq!(scan_identifier("+"), None);
    assert_eq!(scan_identifier(""), None);
}

#[test]
fn test_scan_number() {
    assert_eq!(scan_number("42;"), Some(Scanned::new(TokenKind::Integer, 2)));
    assert_eq!(scan_number("3.14)"), Some(Scanned::new(TokenKind::Float, 4)));
    assert_eq!(scan_number("x"), None);
    assert_eq!(scan_number(".5"), None);
}

#[test]
fn test_scan_number_keeps_malformed_span() {
    assert_eq!(
        scan_number("1.2.3 + 4"),
        Some(Scanned::invalid(5, ErrorImpl::MalformedNumber { lexeme: "1.2.3".to_string() }))
    );
    assert_eq!(
        scan_number("7..8"),
        Some(Scanned::invalid(4, ErrorImpl::MalformedNumber { lexeme: "7..8".to_string() }))
    );
    assert_eq!(
        scan_number("1."),
        Some(Scanned::invalid(2, ErrorImpl::MalformedNumber { lexeme: "1.".to_string() }))
    );
}

#[test]
fn test_scan_string() {
    assert_eq!(scan_string(r#""hello" x"#), Some(Scanned::new(TokenKind::String, 7)));
    assert_eq!(scan_string(r#""a\"b""#), Some(Scanned::new(TokenKind::String, 6)));
    assert_eq!(scan_string(r#""a\\""#), Some(Scanned::new(TokenKind::String, 5)));
    assert_eq!(scan_string("hello"), None);
}

#[test]
fn test_scan_string_errors() {
    assert_eq!(
        scan_string(r#""abc"#),
        Some(Scanned::invalid(4, ErrorImpl::UnterminatedString { lexeme: r#""abc"#.to_string() }))
    );
    assert_eq!(
        scan_string(r#""a\nb" x"#),
        Some(Scanned::invalid(6, ErrorImpl::InvalidStringEscape { lexeme: r#""a\nb""#.to_string() }))
    );
    assert_eq!(
        scan_string(r#""a\"#),
        Some(Scanned::invalid(3, ErrorImpl::UnterminatedString { lexeme: r#""a\"#.to_string() }))
    );
}

#[test]
fn test_scan_operator_tiers() {
    assert_eq!(scan_operator("+ 1"), Some(Scanned::new(TokenKind::Plus, 1)));
    assert_eq!(scan_operator("++"), Some(Scanned::new(TokenKind::Increment, 2)));
    assert_eq!(scan_operator("+="), Some(Scanned::new(TokenKind::PlusAssign, 2)));
    assert_eq!(scan_operator("+-"), Some(Scanned::new(TokenKind::Plus, 1)));
    assert_eq!(scan_operator("=="), Some(Scanned::new(TokenKind::Equality, 2)));
    assert_eq!(scan_operator("=x"), Some(Scanned::new(TokenKind::Assign, 1)));
    assert_eq!(scan_operator("^="), Some(Scanned::new(TokenKind::BitXorAssign, 2)));
    assert_eq!(scan_operator("!="), Some(Scanned::new(TokenKind::NotEquals, 2)));
    assert_eq!(scan_operator(";"), None);
}

#[test]
fn test_scan_operator_line_comment() {
    assert_eq!(
        scan_operator("// note\nnext"),
        Some(Scanned::new(TokenKind::LineComment, 7))
    );
    assert_eq!(scan_operator("//"), Some(Scanned::new(TokenKind::LineComment, 2)));
}

#[test]
fn test_operator_tier_table() {
    assert_eq!(TokenKind::Plus.tier(), Some(('+', Tier::Single)));
    assert_eq!(TokenKind::Increment.tier(), Some(('+', Tier::Doubled)));
    assert_eq!(TokenKind::PlusAssign.tier(), Some(('+', Tier::Compound)));
    assert_eq!(TokenKind::Exp.tier(), Some(('^', Tier::Doubled)));
    assert_eq!(TokenKind::Equality.tier(), Some(('=', Tier::Doubled)));
    assert_eq!(TokenKind::Semicolon.tier(), None);
    assert_eq!(TokenKind::If.tier(), None);
}

#[test]
fn test_scan_separator() {
    for (source, kind) in [
        (";", TokenKind::Semicolon),
        (",", TokenKind::Comma),
        ("(", TokenKind::OpenParen),
        (")", TokenKind::CloseParen),
        ("{", TokenKind::OpenBrace),
        ("}", TokenKind::CloseBrace),
        ("[", TokenKind::OpenBracket),
        ("]", TokenKind::CloseBracket),
    ] {
        assert_eq!(scan_separator(source), Some(Scanned::new(kind, 1)));
    }
    assert_eq!(scan_separator("."), None);
}

#[test]
fn test_dispatch_reclassifies_keywords() {
    let trie = KeywordTrie::with_keywords();
    let dispatcher = Dispatcher::new(&trie);

    assert_eq!(dispatcher.dispatch("while(").kind, TokenKind::While);
    assert_eq!(dispatcher.dispatch("whilst").kind, TokenKind::Identifier);
    assert_eq!(dispatcher.dispatch("\"if\"").kind, TokenKind::String);
}

#[test]
fn test_dispatch_falls_back_to_unknown() {
    let trie = KeywordTrie::with_keywords();
    let dispatcher = Dispatcher::new(&trie);

    assert_eq!(
        dispatcher.dispatch("#x"),
        Scanned {
            kind: TokenKind::Unknown,
            len: 1,
            error: Some(ErrorImpl::UnrecognizedCharacter { character: '#' }),
        }
    );
    assert_eq!(dispatcher.dispatch("é").len, 2);
}

#[test]
fn test_tokenize_keywords() {
    assert_eq!(
        kinds("if else void case default break continue while for do return const"),
        vec![
            TokenKind::If,
            TokenKind::Else,
            TokenKind::Void,
            TokenKind::Case,
            TokenKind::Default,
            TokenKind::Break,
            TokenKind::Continue,
            TokenKind::While,
            TokenKind::For,
            TokenKind::Do,
            TokenKind::Return,
            TokenKind::Const,
        ]
    );
    assert_eq!(
        kinds("final finally classic _if ifx"),
        vec![
            TokenKind::Final,
            TokenKind::Finally,
            TokenKind::Identifier,
            TokenKind::Identifier,
            TokenKind::Identifier,
        ]
    );
}

#[test]
fn test_tokenize_numbers() {
    let tokens = tokenize("42 3.14 1.2.3;", None).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Integer);
    assert_eq!(tokens[0].text, "42");
    assert_eq!(tokens[1].kind, TokenKind::Float);
    assert_eq!(tokens[1].text, "3.14");
    assert_eq!(tokens[2].kind, TokenKind::Invalid);
    assert_eq!(tokens[2].text, "1.2.3");
    assert_eq!(tokens[3].kind, TokenKind::Semicolon);
    assert_eq!(tokens.len(), 4);
}

#[test]
fn test_tokenize_number_then_identifier() {
    assert_eq!(kinds("123abc"), vec![TokenKind::Integer, TokenKind::Identifier]);
}

#[test]
fn test_tokenize_escaped_quote_in_string() {
    let tokens = tokenize(r#"x = "a\"b";"#, None).unwrap();

    assert_eq!(tokens[2].kind, TokenKind::String);
    assert_eq!(tokens[2].text, r#""a\"b""#);
    assert_eq!(tokens[3].kind, TokenKind::Semicolon);
}

#[test]
fn test_tokenize_unterminated_string() {
    let (tokens, diagnostics) = tokenize_with_diagnostics(r#""abc"#, None).unwrap();

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Invalid);
    assert_eq!(tokens[0].text, r#""abc"#);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].get_error_name(), "UnterminatedString");
    assert_eq!(*diagnostics[0].get_position(), Position::new(1, 1));
}

#[test]
fn test_tokenize_operators() {
    assert_eq!(
        kinds("+ ++ += +++ === <<= !! &&"),
        vec![
            TokenKind::Plus,
            TokenKind::Increment,
            TokenKind::PlusAssign,
            TokenKind::Increment,
            TokenKind::Plus,
            TokenKind::Equality,
            TokenKind::Assign,
            TokenKind::ShiftLeft,
            TokenKind::Assign,
            TokenKind::DoubleNegation,
            TokenKind::And,
        ]
    );
}

#[test]
fn test_tokenize_line_comment() {
    let tokens = tokenize("a // trailing words\nb", None).unwrap();

    assert_eq!(tokens[1].kind, TokenKind::LineComment);
    assert_eq!(tokens[1].text, "// trailing words");
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
    assert_eq!(tokens[2].position, Position::new(2, 1));
}

#[test]
fn test_tokenize_positions() {
    let tokens = tokenize("let x\n  = \"a\nb\" y", None).unwrap();
    let positions: Vec<Position> = tokens.iter().map(|token| token.position).collect();

    assert_eq!(
        positions,
        vec![
            Position::new(1, 1),
            Position::new(1, 5),
            Position::new(2, 3),
            Position::new(2, 5),
            Position::new(3, 4),
        ]
    );
}

#[test]
fn test_tokenize_unknown_characters() {
    let (tokens, diagnostics) = tokenize_with_diagnostics("#@ x", None).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Unknown);
    assert_eq!(tokens[0].text, "#");
    assert_eq!(tokens[1].kind, TokenKind::Unknown);
    assert_eq!(tokens[1].text, "@");
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
    assert_eq!(diagnostics.len(), 2);
    assert_eq!(diagnostics[1].get_position().column, 2);
}

#[test]
fn test_tokenize_empty_and_blank() {
    assert!(kinds("").is_empty());
    assert!(kinds(" \t\n\r\n ").is_empty());
}

#[test]
fn test_token_stream_doubles_and_keeps_order() {
    let mut stream = TokenStream::new();
    assert_eq!(stream.capacity(), 10);

    for i in 0..25 {
        stream
            .push(MK_TOKEN!(TokenKind::Integer, i.to_string(), Position::new(1, i + 1)))
            .unwrap();
    }

    assert_eq!(stream.len(), 25);
    assert!(stream.capacity() >= 25);
    for (i, token) in stream.as_slice().iter().enumerate() {
        assert_eq!(token.text, i.to_string());
    }
}

proptest! {
    #[test]
    fn prop_keyword_before_delimiter(index in 0..KEYWORDS.len(), delimiter in prop::sample::select(vec![" ", ";", "(", "+", "\n"])) {
        let (word, kind) = KEYWORDS[index];
        let tokens = tokenize(&format!("{}{}", word, delimiter), None).unwrap();
        prop_assert_eq!(tokens[0].kind, kind);
        prop_assert_eq!(tokens[0].text.as_str(), word);
    }

    #[test]
    fn prop_non_keyword_is_identifier(word in "[a-zA-Z_][a-zA-Z0-9_]{0,12}") {
        prop_assume!(!KEYWORDS.iter().any(|(keyword, _)| *keyword == word));
        let tokens = tokenize(&word, None).unwrap();
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(tokens[0].kind, TokenKind::Identifier);
    }

    #[test]
    fn prop_unknown_characters_terminate(count in 1usize..200) {
        let (tokens, diagnostics) = tokenize_with_diagnostics(&"#".repeat(count), None).unwrap();
        prop_assert_eq!(tokens.len(), count);
        prop_assert_eq!(diagnostics.len(), count);
        prop_assert!(tokens.iter().all(|token| token.kind == TokenKind::Unknown));
    }

    #[test]
    fn prop_tokens_rebuild_source(source in "[ -~\n]{0,64}") {
        let tokens = tokenize(&source, None).unwrap();
        let joined: String = tokens.iter().map(|token| token.text.as_str()).collect();
        let stripped: String = source.chars().filter(|c| !c.is_ascii_whitespace()).collect();
        let rebuilt: String = joined.chars().filter(|c| !c.is_ascii_whitespace()).collect();
        prop_assert_eq!(rebuilt, stripped);
    }
}
