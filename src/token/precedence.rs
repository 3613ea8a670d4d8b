//! Precedence levels for expression parsing.
//!
//! Non operators have the lowest precedence, binary operators range from 1
//! to 5, and unary operators bind at 6. The highest level is a catch all for
//! indexing and other postfix forms. Only the binary levels are ever returned
//! by `TokenKind::precedence`; the parser applies the others itself.

pub type Precedence = u8;

pub const LOWEST_PREC: Precedence = 0;
pub const UNARY_PREC: Precedence = 6;
pub const HIGHEST_PREC: Precedence = 7;
