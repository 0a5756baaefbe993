use crate::domain::errors::RegistryError;
use crate::domain::registry::types::{MAX_TRACKED_TOKENS, PerformanceRecord};
use std::collections::HashMap;

/// The registry store: the insertion-ordered set of tracked symbols and
/// the record held for each of them.
///
/// Invariants maintained by every method:
/// - a symbol appears in `tracked` iff it has an entry in `records`
/// - `tracked.len() <= MAX_TRACKED_TOKENS`
/// - symbols are never removed; `tracked` only grows
///
/// All methods are synchronous and either apply their full transition or
/// return an error leaving the store untouched. Authorization and value
/// validation happen upstream in the access gate; this type only owns
/// membership and capacity.
#[derive(Debug, Clone, Default)]
pub struct TokenRegistry {
    tracked: Vec<String>,
    records: HashMap<String, PerformanceRecord>,
}

impl TokenRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tracked symbols.
    pub fn len(&self) -> usize {
        self.tracked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracked.is_empty()
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.records.contains_key(symbol)
    }

    /// Tracked symbols in insertion order.
    pub fn tokens(&self) -> &[String] {
        &self.tracked
    }

    pub fn get(&self, symbol: &str) -> Option<&PerformanceRecord> {
        self.records.get(symbol)
    }

    /// Admit-or-overwrite: the `add-token-performance` transition.
    ///
    /// A known symbol has its record overwritten with the tracked set
    /// unchanged. A new symbol is admitted only below capacity; at the
    /// bound the call fails with `RegistryFull` and nothing changes.
    pub fn upsert(&mut self, symbol: &str, record: PerformanceRecord) -> Result<(), RegistryError> {
        if let Some(existing) = self.records.get_mut(symbol) {
            *existing = record;
            return Ok(());
        }

        if self.tracked.len() >= MAX_TRACKED_TOKENS {
            return Err(RegistryError::RegistryFull {
                capacity: MAX_TRACKED_TOKENS,
            });
        }

        self.tracked.push(symbol.to_string());
        self.records.insert(symbol.to_string(), record);
        Ok(())
    }

    /// Overwrite-only: the `update-token-performance` transition.
    ///
    /// Fails with `TokenNotFound` for symbols never admitted; membership
    /// and insertion order are never modified by this path.
    pub fn update(&mut self, symbol: &str, record: PerformanceRecord) -> Result<(), RegistryError> {
        match self.records.get_mut(symbol) {
            Some(existing) => {
                *existing = record;
                Ok(())
            }
            None => Err(RegistryError::TokenNotFound {
                symbol: symbol.to_string(),
            }),
        }
    }
}
