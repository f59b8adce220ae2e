//! Selection state
//!
//! The partial attribute choice owned by one selection session (one user,
//! one product, one in-progress pick). Created empty when the picker opens
//! and discarded on commit or abandon; the engine never persists it.

use crate::attribute_map::AttributeMap;
use crate::catalog::AttributeCatalog;
use crate::error::{EngineError, EngineResult};
use serde::Serialize;
use std::collections::BTreeMap;

/// Partial mapping from attribute name to the chosen value
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SelectionState {
    choices: BTreeMap<String, String>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Choose a value for an attribute, replacing any earlier choice
    pub fn select(&mut self, attribute: impl Into<String>, value: impl Into<String>) {
        self.choices.insert(attribute.into(), value.into());
    }

    /// Drop the choice for one attribute, returning the old value
    pub fn clear(&mut self, attribute: &str) -> Option<String> {
        self.choices.remove(attribute)
    }

    pub fn get(&self, attribute: &str) -> Option<&str> {
        self.choices.get(attribute).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.choices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.choices.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// True when `map` agrees with every choice in this selection
    ///
    /// A map missing a selected attribute does not match; partial maps
    /// never partially match.
    pub fn matches(&self, map: &AttributeMap) -> bool {
        self.iter().all(|(name, value)| map.get(name) == Some(value))
    }

    /// Same selection with one attribute removed; the facet engine matches
    /// an attribute against all *other* current choices
    pub(crate) fn without(&self, attribute: &str) -> SelectionState {
        let mut other = self.clone();
        other.choices.remove(attribute);
        other
    }

    /// Check every choice stays within the catalog
    ///
    /// A selection outside the catalog is a caller programming error; the
    /// engine guards it here (and with debug assertions on the hot paths)
    /// rather than silently matching nothing.
    pub fn validate_against(&self, catalog: &AttributeCatalog) -> EngineResult<()> {
        for (name, value) in self.iter() {
            let descriptor = catalog
                .get(name)
                .ok_or_else(|| EngineError::UnknownAttribute(name.to_string()))?;
            if !descriptor.values.iter().any(|v| v == value) {
                return Err(EngineError::UnknownValue {
                    attribute: name.to_string(),
                    value: value.to_string(),
                });
            }
        }
        Ok(())
    }
}
