//! Error types for the token model.
//!
//! Keyword lookup never fails; the only error produced by this crate comes
//! from parsing a `TokenKind` out of its name or spelling.

pub mod errors;
