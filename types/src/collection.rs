//! Three-valued optional collection.
//!
//! A collection-valued attribute is either never set, not yet resolved
//! (computed at apply time), or a concrete set of unique elements.
//! `Present` with zero elements is a real value and is distinct from `Absent`.

use std::slice;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("duplicate element at index {index}: {element}")]
pub struct ElementSetError {
    pub index: usize,
    pub element: Value,
}

/// Unique elements of a present collection, in iteration order.
///
/// Invariant: no two elements compare equal. Built from an iterator with
/// [`ElementSet::from_iter`] (later duplicates are dropped) or checked with
/// [`ElementSet::try_new`] (duplicates are rejected). The field is private:
///
/// ```compile_fail
/// let set = provkit_types::ElementSet(vec![serde_json::json!("a"), serde_json::json!("a")]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Value>", into = "Vec<Value>")]
pub struct ElementSet(Vec<Value>);

impl ElementSet {
    #[must_use]
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn try_new(elements: Vec<Value>) -> Result<Self, ElementSetError> {
        for (index, element) in elements.iter().enumerate() {
            if elements[..index].contains(element) {
                return Err(ElementSetError {
                    index,
                    element: element.clone(),
                });
            }
        }
        Ok(Self(elements))
    }

    /// Adds `element` unless an equal one is already held. Returns whether it was added.
    pub fn insert(&mut self, element: impl Into<Value>) -> bool {
        let element = element.into();
        if self.0.contains(&element) {
            return false;
        }
        self.0.push(element);
        true
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn contains(&self, element: &Value) -> bool {
        self.0.contains(element)
    }

    pub fn iter(&self) -> slice::Iter<'_, Value> {
        self.0.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Value] {
        &self.0
    }
}

impl<V: Into<Value>> FromIterator<V> for ElementSet {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        let mut set = Self::new();
        for element in iter {
            set.insert(element);
        }
        set
    }
}

impl<'a> IntoIterator for &'a ElementSet {
    type Item = &'a Value;
    type IntoIter = slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl TryFrom<Vec<Value>> for ElementSet {
    type Error = ElementSetError;

    fn try_from(value: Vec<Value>) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<ElementSet> for Vec<Value> {
    fn from(value: ElementSet) -> Self {
        value.0
    }
}

/// A collection-valued configuration attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "elements", rename_all = "snake_case")]
pub enum OptionalCollection {
    /// Never set.
    #[default]
    Absent,
    /// Set, but the value is not known until apply.
    Unknown,
    Present(ElementSet),
}

impl OptionalCollection {
    /// A present collection of the given elements. Later duplicates are dropped.
    pub fn present<I, V>(elements: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self::Present(elements.into_iter().collect())
    }

    #[must_use]
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    #[must_use]
    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }

    #[must_use]
    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// True when there is nothing concrete to send downstream.
    #[must_use]
    pub fn is_null_or_unknown(&self) -> bool {
        !self.is_present()
    }

    #[must_use]
    pub fn elements(&self) -> Option<&ElementSet> {
        match self {
            Self::Present(elements) => Some(elements),
            Self::Absent | Self::Unknown => None,
        }
    }
}

impl From<ElementSet> for OptionalCollection {
    fn from(value: ElementSet) -> Self {
        Self::Present(value)
    }
}

impl From<Option<ElementSet>> for OptionalCollection {
    fn from(value: Option<ElementSet>) -> Self {
        value.map_or(Self::Absent, Self::Present)
    }
}
