#![allow(clippy::module_inception)]

pub mod errors;
pub mod macros;
pub mod token;

pub use token::{
    keywords::{keywords, lookup_keyword},
    precedence::{Precedence, HIGHEST_PREC, LOWEST_PREC, UNARY_PREC},
    tokens::{Band, TokenKind},
};
