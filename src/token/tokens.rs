use std::{fmt::Display, str::FromStr};

use crate::{errors::errors::Error, MK_TOKEN_KINDS};

use super::precedence::{Precedence, LOWEST_PREC};

/// The four disjoint groups the token kinds are partitioned into.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub enum Band {
    Control,
    Literal,
    Operator,
    Keyword,
}

impl Band {
    pub const ALL: [Band; 4] = [Band::Control, Band::Literal, Band::Operator, Band::Keyword];

    pub fn name(self) -> &'static str {
        match self {
            Band::Control => "control",
            Band::Literal => "literal",
            Band::Operator => "operator",
            Band::Keyword => "keyword",
        }
    }
}

impl Display for Band {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.name())
    }
}

MK_TOKEN_KINDS! {
    Illegal => Control, "ILLEGAL", None;
    EOF => Control, "EOF", None;
    Comment => Control, "COMMENT", None;

    // Basic type literals
    /// 12345, 123.45, -12e5
    Num => Literal, "NUM", None;
    /// `abc`, 'abc', "${variable}"
    String => Literal, "STRING", None;

    // Operators and delimiters
    Add => Operator, "ADD", Some("+");
    Sub => Operator, "SUB", Some("-");
    Mul => Operator, "MUL", Some("*");
    Quo => Operator, "QUO", Some("/");
    Rem => Operator, "REM", Some("%");

    LAnd => Operator, "LAND", Some("&&");
    LOr => Operator, "LOR", Some("||");
    Inc => Operator, "INC", Some("++");
    Dec => Operator, "DEC", Some("--");

    AddAssign => Operator, "ADD_ASSIGN", Some("+=");
    SubAssign => Operator, "SUB_ASSIGN", Some("-=");
    MulAssign => Operator, "MUL_ASSIGN", Some("*=");
    QuoAssign => Operator, "QUO_ASSIGN", Some("/=");
    RemAssign => Operator, "REM_ASSIGN", Some("%=");

    LAndAssign => Operator, "LAND_ASSIGN", Some("&&=");
    LOrAssign => Operator, "LOR_ASSIGN", Some("||=");

    Eql => Operator, "EQL", Some("==");
    Lss => Operator, "LSS", Some("<");
    Gtr => Operator, "GTR", Some(">");
    Assign => Operator, "ASSIGN", Some("=");
    Not => Operator, "NOT", Some("!");

    /// !=
    Neg => Operator, "NEG", Some("!=");
    Leq => Operator, "LEQ", Some("<=");
    Geq => Operator, "GEQ", Some(">=");
    Ellipsis => Operator, "ELLIPSIS", Some("...");

    LParen => Operator, "LPAREN", Some("(");
    LBrack => Operator, "LBRACK", Some("[");
    LBrace => Operator, "LBRACE", Some("{");
    Comma => Operator, "COMMA", Some(",");

    RParen => Operator, "RPAREN", Some(")");
    RBrack => Operator, "RBRACK", Some("]");
    RBrace => Operator, "RBRACE", Some("}");
    Semicolon => Operator, "SEMICOLON", Some(";");
    Colon => Operator, "COLON", Some(":");

    // Keywords
    If => Keyword, "IF", Some("IF");
    Else => Keyword, "ELSE", Some("ELSE");

    For => Keyword, "FOR", Some("FOR");
    In => Keyword, "IN", Some("IN");
    Until => Keyword, "UNTIL", Some("UNTIL");

    Break => Keyword, "BREAK", Some("BREAK");
    Continue => Keyword, "CONTINUE", Some("CONTINUE");
    Fallthrough => Keyword, "FALLTHROUGH", Some("FALLTHROUGH");

    Switch => Keyword, "SWITCH", Some("SWITCH");
    Case => Keyword, "CASE", Some("CASE");
    Default => Keyword, "DEFAULT", Some("DEFAULT");

    Return => Keyword, "RETURN", Some("RETURN");
}

impl TokenKind {
    /// Operator precedence of a binary operator. Every kind that is not a
    /// binary operator has `LOWEST_PREC`.
    pub fn precedence(self) -> Precedence {
        match self {
            TokenKind::LOr => 1,
            TokenKind::LAnd => 2,
            TokenKind::Eql
            | TokenKind::Neg
            | TokenKind::Lss
            | TokenKind::Leq
            | TokenKind::Gtr
            | TokenKind::Geq => 3,
            TokenKind::Add | TokenKind::Sub => 4,
            TokenKind::Mul | TokenKind::Quo | TokenKind::Rem => 5,
            _ => LOWEST_PREC,
        }
    }

    pub fn is_binary_operator(self) -> bool {
        self.precedence() > LOWEST_PREC
    }

    /// Checks if a token is a basic type literal.
    pub fn is_literal(self) -> bool {
        self.band() == Band::Literal
    }

    /// Checks if a token is an operator or delimiter.
    pub fn is_operator(self) -> bool {
        self.band() == Band::Operator
    }

    /// Checks if a token is a keyword.
    pub fn is_keyword(self) -> bool {
        self.band() == Band::Keyword
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.spelling().unwrap_or(self.name()))
    }
}

impl FromStr for TokenKind {
    type Err = Error;

    /// Accepts either a kind's name (`ADD`) or its spelling (`+`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TokenKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == s || kind.spelling() == Some(s))
            .ok_or_else(|| Error::UnknownTokenKind {
                token: s.to_string(),
            })
    }
}
