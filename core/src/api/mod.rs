//! Public API for resolving and evaluating expressions.
//!
//! [`ExpressionParser`] ties the pieces together: identifiers are expanded
//! through a [`ResolutionContext`](crate::resolver::ResolutionContext), the
//! resulting literal text is parsed and evaluated, and the value is formatted
//! back to text.
//!
//! # Example
//!
//! ```
//! use svexpr_core::api::ExpressionParser;
//! use svexpr_core::resolver::ParameterTable;
//!
//! let table = ParameterTable::new()
//!     .with("firstValue", "30")
//!     .with("secondValue", "0.751");
//! let parser = ExpressionParser::new(table);
//!
//! assert_eq!(parser.parse_expression("firstValue * secondValue"), "22.53");
//! assert_eq!(parser.parse_expression("firstValue + secondValue"), "30.751");
//! assert!(!parser.is_valid_expression("firstValue / 0"));
//! ```

pub mod engine;
pub mod error;
pub mod options;

pub use engine::ExpressionParser;
pub use error::{Diagnostic, Error, RelatedInfo, Severity};
pub use options::{EngineOptions, ExecutionOptions};
