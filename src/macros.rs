//! Utility macros for the token model.
//!
//! - `MK_TOKEN_KINDS!` - Declares the `TokenKind` enum together with its
//!   name, spelling and band tables
//!
//! Every variant is declared once, so the enum and its metadata cannot drift.

/// Declares `TokenKind` and its per-variant tables.
///
/// Each entry is `Variant => Band, "NAME", spelling`, where `spelling` is
/// either `None` or `Some("text")`. Variants keep their declaration order,
/// which is also the order of `TokenKind::ALL`.
///
/// # Example
///
/// ```ignore
/// MK_TOKEN_KINDS! {
///     Illegal => Control, "ILLEGAL", None;
///     Add => Operator, "ADD", Some("+");
/// }
/// ```
#[macro_export]
macro_rules! MK_TOKEN_KINDS {
    ($($(#[$meta:meta])* $variant:ident => $band:ident, $name:literal, $spelling:expr;)+) => {
        /// The closed set of Swish token kinds.
        #[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
        pub enum TokenKind {
            $($(#[$meta])* $variant,)+
        }

        impl TokenKind {
            /// Every token kind, in declaration order.
            pub const ALL: &'static [TokenKind] = &[$(TokenKind::$variant,)+];

            /// The band this kind belongs to.
            pub const fn band(self) -> Band {
                match self {
                    $(TokenKind::$variant => Band::$band,)+
                }
            }

            /// Upper-case identifier of the kind, e.g. `"ADD"`.
            pub const fn name(self) -> &'static str {
                match self {
                    $(TokenKind::$variant => $name,)+
                }
            }

            /// Source text of operators and keywords. Control and literal
            /// kinds have no fixed spelling.
            pub const fn spelling(self) -> Option<&'static str> {
                match self {
                    $(TokenKind::$variant => $spelling,)+
                }
            }
        }
    };
}
