//! Recursive expansion of identifiers into their definitions.
//!
//! Each pass tokenizes the current text, replaces every identifier with its
//! definition from the [`ResolutionContext`], and starts over on the result.
//! Expansion stops at the first pass that finds no identifiers. Cycles such as
//! `a = b`, `b = a` never reach that point and are cut off by the pass limit.

mod error;


pub use error::SubstitutionError;

use tracing::trace;

use crate::{
    lexer::{self, Token},
    resolver::ResolutionContext,
};

pub const DEFAULT_MAX_PASSES: usize = 32;
pub const DEFAULT_MAX_EXPANSION_LEN: usize = 64 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubstitutionOptions {
    /// Passes allowed before giving up on reaching a fixed point.
    ///
    /// Default: 32
    pub max_passes: usize,

    /// Longest expanded text, in bytes.
    ///
    /// Default: 65536
    pub max_expansion_len: usize,
}

impl Default for SubstitutionOptions {
    fn default() -> Self {
        Self {
            max_passes: DEFAULT_MAX_PASSES,
            max_expansion_len: DEFAULT_MAX_EXPANSION_LEN,
        }
    }
}

/// Expands every identifier in `source` until none remain.
///
/// Plain definitions (a single literal) are spliced verbatim so their radix
/// tag stays visible; any other definition is wrapped in parentheses.
///
/// ```
/// use svexpr_core::resolver::ParameterTable;
/// use svexpr_core::substitution::{substitute, SubstitutionOptions};
///
/// let table = ParameterTable::new()
///     .with("first", "'h1")
///     .with("second", "2*first");
/// let text = substitute("second + 1", &table, &SubstitutionOptions::default()).unwrap();
/// assert_eq!(text, "(2*'h1) + 1");
/// ```
pub fn substitute<C>(
    source: &str,
    ctx: &C,
    options: &SubstitutionOptions,
) -> Result<String, SubstitutionError>
where
    C: ResolutionContext + ?Sized,
{
    let mut text = source.to_string();
    let mut pass = 0;

    loop {
        let tokens = lexer::tokenize(&text).map_err(|e| SubstitutionError::Malformed {
            message: e.to_string(),
        })?;
        let references: Vec<&Token<'_>> = tokens.iter().filter(|t| t.is_reference()).collect();

        if references.is_empty() {
            trace!(pass, %text, "Substitution reached a fixed point");
            return Ok(text);
        }
        if pass >= options.max_passes {
            return Err(SubstitutionError::PassLimitExceeded {
                max_passes: options.max_passes,
            });
        }

        let expanded = expand_pass(&text, &references, ctx, pass)?;
        if expanded.len() > options.max_expansion_len {
            return Err(SubstitutionError::ExpansionTooLarge {
                len: expanded.len(),
                max_len: options.max_expansion_len,
            });
        }

        trace!(pass, references = references.len(), %expanded, "Substitution pass");
        text = expanded;
        pass += 1;
    }
}

fn expand_pass<C>(
    text: &str,
    references: &[&Token<'_>],
    ctx: &C,
    pass: usize,
) -> Result<String, SubstitutionError>
where
    C: ResolutionContext + ?Sized,
{
    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;

    for token in references {
        let unknown = || SubstitutionError::UnknownIdentifier {
            name: token.text.to_string(),
            // Spans are only meaningful against the caller's text.
            span: (pass == 0).then(|| token.span.clone()),
        };

        let definition = ctx.resolve(token.text).ok_or_else(unknown)?;
        let definition = definition.trim();
        // An identifier bound to blank text has no value.
        if definition.is_empty() {
            return Err(unknown());
        }

        out.push_str(&text[cursor..token.span.start()]);
        if ctx.is_plain_value(token.text) {
            let before = text[..token.span.start()].chars().next_back();
            let after = text[token.span.end()..].chars().next();
            if before.is_some_and(is_word_char) {
                out.push(' ');
            }
            out.push_str(definition);
            if after.is_some_and(is_word_char) {
                out.push(' ');
            }
        } else {
            out.push('(');
            out.push_str(definition);
            out.push(')');
        }
        cursor = token.span.end();
    }

    out.push_str(&text[cursor..]);
    Ok(out)
}

/// Characters that would merge with a spliced literal into a different token.
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '\'' | '$' | '"' | '.')
}
