//! svexpr - SystemVerilog-flavored parameter expressions
//!
//! # Overview
//!
//! Hardware descriptions size their buses, arrays and registers with
//! parameter expressions: `WIDTH-1`, `$clog2(DEPTH)`, `8'hFF & MASK`.
//! svexpr expands the parameters such an expression refers to and evaluates
//! the result without ever failing: anything that has no value comes back as
//! `x`.
//!
//! # Quick Start
//!
//! ```
//! use svexpr::{ExpressionParser, ParameterTable, Radix};
//!
//! let parameters = ParameterTable::new()
//!     .with("DEPTH", "'h400")
//!     .with("ADDR_WIDTH", "$clog2(DEPTH)");
//! let parser = ExpressionParser::new(parameters);
//!
//! assert_eq!(parser.parse_expression("ADDR_WIDTH - 1"), "9");
//! assert_eq!(parser.parse_expression("UNDEFINED + 1"), "x");
//! assert_eq!(parser.dominant_radix("DEPTH * 2"), Radix::Hexadecimal);
//! ```
//!
//! # Diagnostics
//!
//! [`ExpressionParser::try_evaluate`] says why an expression has no value.
//! The error can be rendered with source snippets:
//!
//! ```
//! use svexpr::{ExpressionParser, NoReferences, render_error_to_string_no_color};
//!
//! let parser = ExpressionParser::new(NoReferences);
//! let err = parser.try_evaluate("(1 + 2").unwrap_err();
//! let report = render_error_to_string_no_color(&err);
//! assert!(report.contains("Unclosed delimiter"));
//! ```

mod error_renderer;

// Re-export public API from svexpr_core
pub use svexpr_core::api::{
    Diagnostic, EngineOptions, Error, ExecutionOptions, ExpressionParser, RelatedInfo, Severity,
};

pub use svexpr_core::radix::RadixPolicy;
pub use svexpr_core::resolver::{
    self, Chain, FnResolver, NoReferences, ParameterTable, ResolutionContext,
};
pub use svexpr_core::substitution::SubstitutionOptions;
pub use svexpr_core::syntax::Radix;
pub use svexpr_core::values::{self, UNRESOLVABLE, Value};
pub use svexpr_core::parse_expression;
pub use svexpr_core::syntax::is_plain_value;

pub use error_renderer::{
    render_error, render_error_to, render_error_to_string, render_error_to_string_no_color,
};
