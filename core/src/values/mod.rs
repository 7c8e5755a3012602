//! Runtime values produced by the evaluator.
//!
//! A [`Value`] is what an expression evaluates to. Its `Display` output is the
//! textual result handed back to callers: a decimal integer, a real with a
//! fractional part, a quoted string, a brace-delimited aggregate, or the
//! sentinel `x`.

mod display;
mod value;

pub use value::{Value, ValueKind};

/// The text every unresolvable expression evaluates to.
pub const UNRESOLVABLE: &str = "x";

#[cfg(test)]
mod display_test;
#[cfg(test)]
mod value_test;
