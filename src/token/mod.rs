//! Token model for the Swish language.
//!
//! This module contains the vocabulary shared by the scanner and parser:
//!
//! - The closed `TokenKind` enumeration, partitioned into bands
//! - Band classification (literal, operator, keyword)
//! - Binary operator precedence levels
//! - The keyword spelling lookup table

pub mod keywords;
pub mod precedence;
pub mod tokens;
