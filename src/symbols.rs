//! Character-keyed lookup tables for commands and productions.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Maps single-character symbols to values.
///
/// Inserting a symbol that is already present replaces the old value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SymbolTable<T> {
    entries: HashMap<char, T>,
}

impl<T> Default for SymbolTable<T> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<T> SymbolTable<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `value` to `symbol`, returning the value it replaced, if any.
    pub fn insert(&mut self, symbol: char, value: T) -> Option<T> {
        self.entries.insert(symbol, value)
    }

    pub fn get(&self, symbol: char) -> Option<&T> {
        self.entries.get(&symbol)
    }

    pub fn remove(&mut self, symbol: char) -> Option<T> {
        self.entries.remove(&symbol)
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.entries.contains_key(&symbol)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over all bindings in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &T)> {
        self.entries.iter().map(|(k, v)| (*k, v))
    }
}
