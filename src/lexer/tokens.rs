use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Position;

/// Reserved words of the language, in declaration order.
pub const KEYWORDS: [(&str, TokenKind); 35] = [
    ("if", TokenKind::If),
    ("else", TokenKind::Else),
    ("void", TokenKind::Void),
    ("case", TokenKind::Case),
    ("default", TokenKind::Default),
    ("break", TokenKind::Break),
    ("continue", TokenKind::Continue),
    ("while", TokenKind::While),
    ("for", TokenKind::For),
    ("do", TokenKind::Do),
    ("return", TokenKind::Return),
    ("const", TokenKind::Const),
    ("let", TokenKind::Let),
    ("var", TokenKind::Var),
    ("define", TokenKind::Define),
    ("class", TokenKind::Class),
    ("object", TokenKind::Object),
    ("this", TokenKind::This),
    ("super", TokenKind::Super),
    ("extends", TokenKind::Extends),
    ("implements", TokenKind::Implements),
    ("interface", TokenKind::Interface),
    ("try", TokenKind::Try),
    ("catch", TokenKind::Catch),
    ("finally", TokenKind::Finally),
    ("throw", TokenKind::Throw),
    ("public", TokenKind::Public),
    ("private", TokenKind::Private),
    ("protected", TokenKind::Protected),
    ("static", TokenKind::Static),
    ("final", TokenKind::Final),
    ("import", TokenKind::Import),
    ("export", TokenKind::Export),
    ("async", TokenKind::Async),
    ("await", TokenKind::Await),
];

/// Shape of an operator relative to its base symbol: `+`, `++` or `+=`.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Tier {
    Single,
    Doubled,
    Compound,
}

/// The three forms one base operator character can take.
///
/// `compound` is `None` for `=`, whose `==` form is already the doubled tier.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct OperatorTiers {
    pub single: TokenKind,
    pub doubled: TokenKind,
    pub compound: Option<TokenKind>,
}

impl OperatorTiers {
    pub fn get(&self, tier: Tier) -> Option<TokenKind> {
        match tier {
            Tier::Single => Some(self.single),
            Tier::Doubled => Some(self.doubled),
            Tier::Compound => self.compound,
        }
    }
}

lazy_static! {
    pub static ref OPERATOR_LOOKUP: HashMap<char, OperatorTiers> = {
        let mut map = HashMap::new();
        map.insert('+', OperatorTiers { single: TokenKind::Plus, doubled: TokenKind::Increment, compound: Some(TokenKind::PlusAssign) });
        map.insert('-', OperatorTiers { single: TokenKind::Minus, doubled: TokenKind::Decrement, compound: Some(TokenKind::MinusAssign) });
        map.insert('*', OperatorTiers { single: TokenKind::Times, doubled: TokenKind::Power, compound: Some(TokenKind::TimesAssign) });
        map.insert('/', OperatorTiers { single: TokenKind::Divide, doubled: TokenKind::LineComment, compound: Some(TokenKind::DivideAssign) });
        map.insert('%', OperatorTiers { single: TokenKind::Mod, doubled: TokenKind::DoubleMod, compound: Some(TokenKind::ModAssign) });
        map.insert('<', OperatorTiers { single: TokenKind::Less, doubled: TokenKind::ShiftLeft, compound: Some(TokenKind::LessEquals) });
        map.insert('>', OperatorTiers { single: TokenKind::Greater, doubled: TokenKind::ShiftRight, compound: Some(TokenKind::GreaterEquals) });
        map.insert('|', OperatorTiers { single: TokenKind::BitOr, doubled: TokenKind::Or, compound: Some(TokenKind::BitOrAssign) });
        map.insert('&', OperatorTiers { single: TokenKind::BitAnd, doubled: TokenKind::And, compound: Some(TokenKind::BitAndAssign) });
        map.insert('^', OperatorTiers { single: TokenKind::BitXor, doubled: TokenKind::Exp, compound: Some(TokenKind::BitXorAssign) });
        map.insert('!', OperatorTiers { single: TokenKind::Negation, doubled: TokenKind::DoubleNegation, compound: Some(TokenKind::NotEquals) });
        map.insert('=', OperatorTiers { single: TokenKind::Assign, doubled: TokenKind::Equality, compound: None });
        map
    };
    pub static ref SEPARATOR_LOOKUP: HashMap<char, TokenKind> = {
        let mut map = HashMap::new();
        map.insert(';', TokenKind::Semicolon);
        map.insert(',', TokenKind::Comma);
        map.insert('(', TokenKind::OpenParen);
        map.insert(')', TokenKind::CloseParen);
        map.insert('{', TokenKind::OpenBrace);
        map.insert('}', TokenKind::CloseBrace);
        map.insert('[', TokenKind::OpenBracket);
        map.insert(']', TokenKind::CloseBracket);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    // Reserved
    If,
    Else,
    Void,
    Case,
    Default,
    Break,
    Continue,
    While,
    For,
    Do,
    Return,
    Const,
    Let,
    Var,
    Define,
    Class,
    Object,
    This,
    Super,
    Extends,
    Implements,
    Interface,
    Try,
    Catch,
    Finally,
    Throw,
    Public,
    Private,
    Protected,
    Static,
    Final,
    Import,
    Export,
    Async,
    Await,

    Identifier,

    Plus,     // +
    Minus,    // -
    Times,    // *
    Divide,   // /
    Mod,      // %
    Less,     // <
    Greater,  // >
    BitOr,    // |
    BitAnd,   // &
    BitXor,   // ^
    Negation, // !
    Assign,   // =

    Increment,      // ++
    Decrement,      // --
    Power,          // **
    LineComment,    // //
    DoubleMod,      // %%
    ShiftLeft,      // <<
    ShiftRight,     // >>
    Or,             // ||
    And,            // &&
    Exp,            // ^^
    DoubleNegation, // !!
    Equality,       // ==

    PlusAssign,
    MinusAssign,
    TimesAssign,
    DivideAssign,
    ModAssign,
    LessEquals,
    GreaterEquals,
    BitOrAssign,
    BitAndAssign,
    BitXorAssign,
    NotEquals,

    Semicolon,
    Comma,
    OpenParen,
    CloseParen,
    OpenBrace,
    CloseBrace,
    OpenBracket,
    CloseBracket,

    Integer,
    Float,
    String,

    Unknown,
    Invalid,
}

impl TokenKind {
    #[cfg(test)]
    pub(crate) fn is_keyword(&self) -> bool {
        KEYWORDS.iter().any(|(_, kind)| kind == self)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, TokenKind::Unknown | TokenKind::Invalid)
    }

    /// Base symbol and tier of an operator kind, `None` for everything else.
    pub fn tier(&self) -> Option<(char, Tier)> {
        OPERATOR_LOOKUP.iter().find_map(|(symbol, tiers)| {
            [Tier::Single, Tier::Doubled, Tier::Compound]
                .into_iter()
                .find(|tier| tiers.get(*tier) == Some(*self))
                .map(|tier| (*symbol, tier))
        })
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub position: Position,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Token {{\nkind: {},\ntext: {},\nline: {}, column: {}}}",
            self.kind, self.text, self.position.line, self.position.column
        )
    }
}

impl Token {
    fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }

    pub fn line(&self) -> u32 {
        self.position.line
    }

    pub fn column(&self) -> u32 {
        self.position.column
    }

    pub fn debug(&self) {
        if self.is_one_of_many(&[
            TokenKind::String,
            TokenKind::Identifier,
            TokenKind::Integer,
            TokenKind::Float,
            TokenKind::LineComment,
            TokenKind::Unknown,
            TokenKind::Invalid,
        ]) {
            println!("{}:{} {} ({})", self.line(), self.column(), self.kind, self.text);
        } else {
            println!("{}:{} {} ()", self.line(), self.column(), self.kind);
        }
    }
}
