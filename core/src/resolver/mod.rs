//! Lookup of identifier definitions.
//!
//! The engine never owns parameters. Callers hand it a [`ResolutionContext`]
//! that maps an identifier to the text of its defining expression, and the
//! substitution engine queries it as often as it needs to. Implementations
//! must not change their answers during a call.

mod table;


pub use table::ParameterTable;

use std::{borrow::Cow, sync::Arc};
use core::hash::BuildHasher;

use crate::syntax;

/// Source of identifier definitions.
pub trait ResolutionContext {
    /// The defining expression text of `identifier`, or `None` when the
    /// identifier is unknown.
    fn resolve(&self, identifier: &str) -> Option<Cow<'_, str>>;

    /// Whether `identifier` is bound to a single literal with no further
    /// symbolic content.
    fn is_plain_value(&self, identifier: &str) -> bool {
        self.resolve(identifier)
            .is_some_and(|definition| syntax::is_plain_value(&definition))
    }
}

impl<T: ResolutionContext + ?Sized> ResolutionContext for &T {
    fn resolve(&self, identifier: &str) -> Option<Cow<'_, str>> {
        (**self).resolve(identifier)
    }

    fn is_plain_value(&self, identifier: &str) -> bool {
        (**self).is_plain_value(identifier)
    }
}

impl<T: ResolutionContext + ?Sized> ResolutionContext for Box<T> {
    fn resolve(&self, identifier: &str) -> Option<Cow<'_, str>> {
        (**self).resolve(identifier)
    }

    fn is_plain_value(&self, identifier: &str) -> bool {
        (**self).is_plain_value(identifier)
    }
}

impl<T: ResolutionContext + ?Sized> ResolutionContext for Arc<T> {
    fn resolve(&self, identifier: &str) -> Option<Cow<'_, str>> {
        (**self).resolve(identifier)
    }

    fn is_plain_value(&self, identifier: &str) -> bool {
        (**self).is_plain_value(identifier)
    }
}

impl<S: BuildHasher> ResolutionContext for std::collections::HashMap<String, String, S> {
    fn resolve(&self, identifier: &str) -> Option<Cow<'_, str>> {
        self.get(identifier).map(|definition| Cow::Borrowed(definition.as_str()))
    }
}

impl<S: BuildHasher> ResolutionContext for hashbrown::HashMap<String, String, S> {
    fn resolve(&self, identifier: &str) -> Option<Cow<'_, str>> {
        self.get(identifier).map(|definition| Cow::Borrowed(definition.as_str()))
    }
}

/// A context in which no identifier is bound.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoReferences;

impl ResolutionContext for NoReferences {
    fn resolve(&self, _identifier: &str) -> Option<Cow<'_, str>> {
        None
    }
}

/// Adapts a closure into a [`ResolutionContext`].
///
/// ```
/// use svexpr_core::resolver::{FnResolver, ResolutionContext};
///
/// let ctx = FnResolver(|name: &str| (name == "WIDTH").then(|| "8".to_string()));
/// assert_eq!(ctx.resolve("WIDTH").as_deref(), Some("8"));
/// assert_eq!(ctx.resolve("DEPTH"), None);
/// ```
#[derive(Clone, Copy)]
pub struct FnResolver<F>(pub F);

impl<F> ResolutionContext for FnResolver<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn resolve(&self, identifier: &str) -> Option<Cow<'_, str>> {
        (self.0)(identifier).map(Cow::Owned)
    }
}

impl<F> core::fmt::Debug for FnResolver<F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("FnResolver")
    }
}

/// Looks identifiers up in `primary` first and falls back to `fallback`.
///
/// Models nested parameter scopes, e.g. an element's own parameters shadowing
/// those of the enclosing document.
#[derive(Debug, Clone, Default)]
pub struct Chain<P, F> {
    pub primary: P,
    pub fallback: F,
}

impl<P, F> Chain<P, F> {
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }
}

impl<P: ResolutionContext, F: ResolutionContext> ResolutionContext for Chain<P, F> {
    fn resolve(&self, identifier: &str) -> Option<Cow<'_, str>> {
        self.primary
            .resolve(identifier)
            .or_else(|| self.fallback.resolve(identifier))
    }

    fn is_plain_value(&self, identifier: &str) -> bool {
        if self.primary.resolve(identifier).is_some() {
            self.primary.is_plain_value(identifier)
        } else {
            self.fallback.is_plain_value(identifier)
        }
    }
}
