use lazy_static::lazy_static;
use std::collections::HashMap;

use super::tokens::TokenKind;

lazy_static! {
    pub static ref KEYWORD_LOOKUP: HashMap<&'static str, TokenKind> = keywords().collect();
}

/// Keyword spellings paired with their kinds, in declaration order.
pub fn keywords() -> impl Iterator<Item = (&'static str, TokenKind)> {
    TokenKind::ALL
        .iter()
        .copied()
        .filter(|kind| kind.is_keyword())
        .filter_map(|kind| kind.spelling().map(|spelling| (spelling, kind)))
}

/// Maps an identifier to its keyword token. Matching is case-sensitive;
/// anything that is not a keyword yields `TokenKind::Illegal`.
pub fn lookup_keyword(name: &str) -> TokenKind {
    KEYWORD_LOOKUP
        .get(name)
        .copied()
        .unwrap_or(TokenKind::Illegal)
}
