//! Resolution and evaluation of SystemVerilog-flavored parameter expressions.
//!
//! Expressions such as `WIDTH*2-1`, `$clog2(DEPTH)` or `8'hFF & MASK` are
//! expanded through a caller-supplied table of parameter definitions and then
//! evaluated to an integer, a real, a string or an aggregate. Anything that
//! cannot be evaluated becomes the unresolvable value, printed as `x`.
//!
//! Pipeline: [`substitution`] → [`parser`] → [`evaluator`] → [`values`], with
//! [`radix`] deciding the display radix of a result. [`api::ExpressionParser`]
//! wires them together.

pub mod api;
pub mod evaluator;
pub mod lexer;
pub mod parser;
pub mod radix;
pub mod resolver;
pub mod substitution;
pub mod syntax;
pub mod values;

pub use api::{EngineOptions, Error, ExpressionParser};
pub use radix::RadixPolicy;
pub use resolver::{NoReferences, ParameterTable, ResolutionContext};
pub use syntax::Radix;
pub use values::Value;

/// Evaluates an expression that refers to no parameters and formats the
/// result.
///
/// ```
/// assert_eq!(svexpr_core::parse_expression("'h10 + 1"), "17");
/// assert_eq!(svexpr_core::parse_expression("0xff"), "x");
/// ```
pub fn parse_expression(expression: &str) -> String {
    ExpressionParser::new(NoReferences).parse_expression(expression)
}

/// Test utilities for enabling logging in tests
#[cfg(test)]
pub mod test_utils {
    /// Initialize tracing subscriber for tests with DEBUG level
    /// Call this at the start of tests where you want to see logging output
    ///
    /// # Example
    /// ```ignore
    /// #[test]
    /// fn test_substitution() {
    ///     test_utils::init_test_logging();
    ///     // ... your test code
    /// }
    /// ```
    pub fn init_test_logging() {
        use tracing_subscriber::{EnvFilter, fmt};

        // Try to initialize, ignore error if already initialized
        let _ = fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_test_writer()
            .try_init();
    }
}
