//! Configuration options for the expression engine.

use crate::{evaluator, parser, radix::RadixPolicy, substitution::SubstitutionOptions};

/// Resource limits for parsing and evaluating one expression.
///
/// # Example
///
/// ```
/// use svexpr_core::api::ExecutionOptions;
///
/// let options = ExecutionOptions {
///     max_nesting_depth: 16,
///     ..ExecutionOptions::default()
/// };
/// assert_eq!(options.max_depth, 256);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecutionOptions {
    /// Deepest nesting accepted, checked before parsing. Brackets, runs of
    /// prefix operators and ternary chains each add a level.
    ///
    /// Default: 64
    pub max_nesting_depth: usize,

    /// Maximum evaluation stack depth (for recursion protection).
    ///
    /// Default: 256
    pub max_depth: usize,
}

impl Default for ExecutionOptions {
    fn default() -> Self {
        Self {
            max_nesting_depth: parser::DEFAULT_MAX_DEPTH,
            max_depth: evaluator::DEFAULT_MAX_DEPTH,
        }
    }
}

/// Configuration options for [`ExpressionParser`](super::ExpressionParser).
///
/// # Example
///
/// ```
/// use svexpr_core::api::{EngineOptions, ExecutionOptions};
/// use svexpr_core::radix::RadixPolicy;
/// use svexpr_core::substitution::SubstitutionOptions;
///
/// let options = EngineOptions {
///     substitution: SubstitutionOptions {
///         max_passes: 8,
///         ..SubstitutionOptions::default()
///     },
///     execution: ExecutionOptions::default(),
///     radix_policy: RadixPolicy::Greatest,
/// };
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngineOptions {
    pub substitution: SubstitutionOptions,
    pub execution: ExecutionOptions,
    pub radix_policy: RadixPolicy,
}
