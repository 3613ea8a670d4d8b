//! Integration tests for the public token model API.
//!
//! These tests drive the crate the way a scanner and a precedence-climbing
//! parser would: keyword resolution on identifier lexemes, then folding a
//! flat token stream by precedence.

use swish::{keywords, lookup_keyword, Band, TokenKind, LOWEST_PREC, UNARY_PREC};

/// Resolves identifier-shaped words, keeping non-keywords as `None`.
fn classify_words(source: &str) -> Vec<Option<TokenKind>> {
    source
        .split_whitespace()
        .map(|word| match lookup_keyword(word) {
            TokenKind::Illegal => None,
            kind => Some(kind),
        })
        .collect()
}

/// Folds `operands` joined by `operators` into a fully parenthesised string
/// using precedence climbing.
fn fold(operands: &[&str], operators: &[TokenKind]) -> String {
    fn climb(operands: &[&str], operators: &[TokenKind], pos: &mut usize, min_prec: u8) -> String {
        let mut lhs = operands[*pos].to_string();

        while *pos < operators.len() && operators[*pos].precedence() > LOWEST_PREC && operators[*pos].precedence() >= min_prec {
            let op = operators[*pos];
            *pos += 1;
            let rhs = climb(operands, operators, pos, op.precedence() + 1);
            lhs = format!("({} {} {})", lhs, op, rhs);
        }

        lhs
    }

    let mut pos = 0;
    climb(operands, operators, &mut pos, 1)
}

#[test]
fn test_scanner_keyword_resolution() {
    let kinds = classify_words("IF x ELSE RETURN y for UNTIL");

    assert_eq!(
        kinds,
        vec![
            Some(TokenKind::If),
            None,
            Some(TokenKind::Else),
            Some(TokenKind::Return),
            None,
            None,
            Some(TokenKind::Until),
        ]
    );
}

#[test]
fn test_precedence_climbing() {
    let expr = fold(
        &["a", "b", "c", "d"],
        &[TokenKind::Add, TokenKind::Mul, TokenKind::Sub],
    );
    assert_eq!(expr, "((a + (b * c)) - d)");

    let expr = fold(
        &["a", "b", "c", "d"],
        &[TokenKind::LOr, TokenKind::LAnd, TokenKind::Eql],
    );
    assert_eq!(expr, "(a || (b && (c == d)))");
}

#[test]
fn test_non_binary_operator_stops_folding() {
    let expr = fold(&["a", "b"], &[TokenKind::Add, TokenKind::Semicolon]);

    assert_eq!(expr, "(a + b)");
    assert!(UNARY_PREC > TokenKind::Mul.precedence());
}

#[test]
fn test_primary_expression_dispatch() {
    let starts_primary = |kind: TokenKind| kind.is_literal() || matches!(kind, TokenKind::LParen | TokenKind::LBrack);

    assert!(starts_primary(TokenKind::Num));
    assert!(starts_primary(TokenKind::String));
    assert!(starts_primary(TokenKind::LParen));
    assert!(!starts_primary(TokenKind::If));
    assert!(!starts_primary(TokenKind::EOF));
}

#[test]
fn test_keyword_table_matches_band() {
    let from_table: Vec<TokenKind> = keywords().map(|(_, kind)| kind).collect();
    let from_band: Vec<TokenKind> = TokenKind::ALL
        .iter()
        .copied()
        .filter(|kind| kind.band() == Band::Keyword)
        .collect();

    assert_eq!(from_table, from_band);
}
