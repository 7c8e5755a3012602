//! Display radix of a composite expression.

use crate::{
    lexer::{self, TokenKind},
    syntax::{self, Radix},
};

/// How the radix of an expression is chosen from the radices of its literals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RadixPolicy {
    /// The first literal with an explicit non-decimal radix wins.
    #[default]
    Leftmost,
    /// The largest radix among all numeral literals wins. Undecorated
    /// numerals count as decimal.
    Greatest,
}

/// Radix a result of `text` should be displayed in.
///
/// `text` is expected to be already substituted. Text that cannot be
/// tokenized reports decimal.
///
/// ```
/// use svexpr_core::radix::{dominant_radix, RadixPolicy};
/// use svexpr_core::syntax::Radix;
///
/// assert_eq!(dominant_radix("'b01 + 'h01", RadixPolicy::Leftmost), Radix::Binary);
/// assert_eq!(dominant_radix("'b01 + 'h01", RadixPolicy::Greatest), Radix::Hexadecimal);
/// assert_eq!(dominant_radix("1 + 2", RadixPolicy::Leftmost), Radix::Decimal);
/// ```
pub fn dominant_radix(text: &str, policy: RadixPolicy) -> Radix {
    let Ok(tokens) = lexer::tokenize(text) else {
        return Radix::Decimal;
    };

    let mut radices = tokens
        .iter()
        .filter(|token| token.kind.is_numeral())
        .filter_map(|token| match token.kind {
            TokenKind::BasedNumber => syntax::parse_numeral(token.text)
                .map(|literal| literal.radix)
                .ok(),
            _ => Some(Radix::Decimal),
        });

    let dominant = match policy {
        RadixPolicy::Leftmost => radices.find(|radix| *radix != Radix::Decimal),
        RadixPolicy::Greatest => radices.max(),
    };
    dominant.unwrap_or_default()
}
