//! De-duplicated set of eligible source states for a transition.

use std::slice;

/// Source state names a transition may fire from.
///
/// Keeps first-appearance order and never holds the same name twice.
/// An empty set is a wildcard: it admits every current state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SourceSet {
    names: Vec<String>,
}

impl SourceSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add every name not already present, including names repeated within
    /// `names` itself.
    pub fn extend<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            let name = name.into();
            if !self.contains(&name) {
                self.names.push(name);
            }
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// True for the wildcard set or when `state` is listed.
    pub fn admits(&self, state: &str) -> bool {
        self.is_wildcard() || self.contains(state)
    }

    pub fn is_wildcard(&self) -> bool {
        self.names.is_empty()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, String> {
        self.names.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.names
    }
}

impl<'a> IntoIterator for &'a SourceSet {
    type Item = &'a String;
    type IntoIter = slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<S: Into<String>> FromIterator<S> for SourceSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}
