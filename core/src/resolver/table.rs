use std::borrow::Cow;

use hashbrown::HashMap;

use super::ResolutionContext;

/// An owned table of parameter definitions.
///
/// ```
/// use svexpr_core::resolver::{ParameterTable, ResolutionContext};
///
/// let table = ParameterTable::new()
///     .with("first", "'h1")
///     .with("second", "2*first");
/// assert_eq!(table.resolve("second").as_deref(), Some("2*first"));
/// assert!(table.is_plain_value("first"));
/// assert!(!table.is_plain_value("second"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterTable {
    definitions: HashMap<String, String>,
}

impl ParameterTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, definition: impl Into<String>) -> Self {
        self.insert(name, definition);
        self
    }

    /// Binds `name`, returning its previous definition.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        definition: impl Into<String>,
    ) -> Option<String> {
        self.definitions.insert(name.into(), definition.into())
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.definitions.remove(name)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.definitions.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.definitions
            .iter()
            .map(|(name, definition)| (name.as_str(), definition.as_str()))
    }
}

impl ResolutionContext for ParameterTable {
    fn resolve(&self, identifier: &str) -> Option<Cow<'_, str>> {
        self.get(identifier).map(Cow::Borrowed)
    }
}

impl<N: Into<String>, D: Into<String>> FromIterator<(N, D)> for ParameterTable {
    fn from_iter<I: IntoIterator<Item = (N, D)>>(iter: I) -> Self {
        let mut table = Self::new();
        table.extend(iter);
        table
    }
}

impl<N: Into<String>, D: Into<String>> Extend<(N, D)> for ParameterTable {
    fn extend<I: IntoIterator<Item = (N, D)>>(&mut self, iter: I) {
        for (name, definition) in iter {
            self.insert(name, definition);
        }
    }
}
