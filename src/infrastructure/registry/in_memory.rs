//! In-Memory Registry Implementation
//!
//! Thread-safe, in-memory implementation of the `PerformanceRegistry`
//! port defined in `domain::ports`.
//!
//! # Atomicity
//!
//! Each mutation runs gate checks first and only then takes the write
//! lock for a single transition, so a failed call leaves the store
//! exactly as it was. Reads take the read lock and never block each
//! other.
//!
//! # Limitations
//!
//! State is lost on restart. A host chain wanting durable state
//! implements `PerformanceRegistry` against its own storage engine
//! without touching the domain logic.

use crate::domain::access::{AccessGate, Principal};
use crate::domain::errors::RegistryError;
use crate::domain::ports::PerformanceRegistry;
use crate::domain::registry::{PerformanceRecord, TokenRegistry};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};

/// In-memory implementation of PerformanceRegistry
/// Suitable for testing and single-instance deployments
pub struct InMemoryRegistry {
    gate: AccessGate,
    state: Arc<RwLock<TokenRegistry>>,
}

impl InMemoryRegistry {
    pub fn new(owner: Principal) -> Self {
        Self {
            gate: AccessGate::new(owner),
            state: Arc::new(RwLock::new(TokenRegistry::new())),
        }
    }

    pub fn owner(&self) -> &Principal {
        self.gate.owner()
    }

    /// Gate checks shared by both mutating entry points. Authorization is
    /// evaluated strictly before validation.
    fn check(
        &self,
        caller: &Principal,
        symbol: &str,
        record: &PerformanceRecord,
    ) -> Result<(), RegistryError> {
        self.gate.authorize(caller)?;
        self.gate.validate(symbol, record)?;
        Ok(())
    }
}

#[async_trait]
impl PerformanceRegistry for InMemoryRegistry {
    async fn add_token_performance(
        &self,
        caller: &Principal,
        symbol: &str,
        record: PerformanceRecord,
    ) -> Result<bool, RegistryError> {
        if let Err(e) = self.check(caller, symbol, &record) {
            warn!(%caller, symbol, code = e.code(), "add-token-performance rejected: {}", e);
            return Err(e);
        }

        let mut state = self.state.write().await;
        match state.upsert(symbol, record) {
            Ok(()) => {
                info!(symbol, tracked = state.len(), "token performance recorded");
                Ok(true)
            }
            Err(e) => {
                warn!(symbol, code = e.code(), "add-token-performance rejected: {}", e);
                Err(e)
            }
        }
    }

    async fn update_token_performance(
        &self,
        caller: &Principal,
        symbol: &str,
        record: PerformanceRecord,
    ) -> Result<bool, RegistryError> {
        if let Err(e) = self.check(caller, symbol, &record) {
            warn!(%caller, symbol, code = e.code(), "update-token-performance rejected: {}", e);
            return Err(e);
        }

        let mut state = self.state.write().await;
        match state.update(symbol, record) {
            Ok(()) => {
                info!(symbol, "token performance updated");
                Ok(true)
            }
            Err(e) => {
                warn!(symbol, code = e.code(), "update-token-performance rejected: {}", e);
                Err(e)
            }
        }
    }

    async fn get_token_performance(&self, symbol: &str) -> Option<PerformanceRecord> {
        self.state.read().await.get(symbol).cloned()
    }

    async fn get_all_tokens(&self) -> Vec<String> {
        self.state.read().await.tokens().to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::registry::MAX_TRACKED_TOKENS;

    fn registry() -> InMemoryRegistry {
        InMemoryRegistry::new(Principal::new("deployer"))
    }

    fn record(price: u64) -> PerformanceRecord {
        PerformanceRecord::new(price, 1_000, 10_000, vec![price])
    }

    #[tokio::test]
    async fn test_add_then_get_round_trip() {
        let registry = registry();
        let deployer = Principal::new("deployer");

        let submitted =
            PerformanceRecord::new(50_000, 1_000_000, 1_000_000_000, vec![49_000, 50_000, 51_000]);
        let ok = registry
            .add_token_performance(&deployer, "BTC", submitted.clone())
            .await
            .unwrap();
        assert!(ok);

        assert_eq!(
            registry.get_token_performance("BTC").await,
            Some(submitted)
        );
        assert_eq!(registry.get_all_tokens().await, ["BTC"]);
    }

    #[tokio::test]
    async fn test_non_owner_mutation_is_rejected_without_side_effects() {
        let registry = registry();
        let attacker = Principal::new("wallet_1");

        let err = registry
            .add_token_performance(&attacker, "DOGE", record(1))
            .await
            .unwrap_err();
        assert_eq!(err.code(), 403);
        assert!(matches!(err, RegistryError::Unauthorized { .. }));

        assert!(registry.get_all_tokens().await.is_empty());
        assert_eq!(registry.get_token_performance("DOGE").await, None);
    }

    #[tokio::test]
    async fn test_authorization_is_checked_before_validation() {
        let registry = registry();
        let attacker = Principal::new("wallet_1");

        // Both checks would fail; the caller must see the auth error.
        let err = registry
            .add_token_performance(&attacker, "BAD", PerformanceRecord::new(0, 0, 0, vec![]))
            .await
            .unwrap_err();
        assert!(matches!(err, RegistryError::Unauthorized { .. }));
    }

    #[tokio::test]
    async fn test_zero_fields_rejected_even_for_owner() {
        let registry = registry();
        let deployer = Principal::new("deployer");

        let err = registry
            .add_token_performance(&deployer, "BAD", PerformanceRecord::new(0, 0, 0, vec![0]))
            .await
            .unwrap_err();
        assert_eq!(err.code(), 400);
        assert!(registry.get_all_tokens().await.is_empty());
    }

    #[tokio::test]
    async fn test_update_unregistered_symbol_fails_observably() {
        let registry = registry();
        let deployer = Principal::new("deployer");

        let err = registry
            .update_token_performance(&deployer, "GHOST", record(10))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            RegistryError::TokenNotFound {
                symbol: "GHOST".to_string()
            }
        );
        assert!(registry.get_all_tokens().await.is_empty());
    }

    #[tokio::test]
    async fn test_capacity_bound_is_enforced() {
        let registry = registry();
        let deployer = Principal::new("deployer");

        for i in 0..MAX_TRACKED_TOKENS {
            registry
                .add_token_performance(&deployer, &format!("TOKEN{}", i), record(100 + i as u64))
                .await
                .unwrap();
        }

        let err = registry
            .add_token_performance(&deployer, "OVERFLOW", record(1))
            .await
            .unwrap_err();
        assert_eq!(err, RegistryError::RegistryFull { capacity: 100 });

        let tokens = registry.get_all_tokens().await;
        assert_eq!(tokens.len(), 100);
        assert!(!tokens.contains(&"OVERFLOW".to_string()));
        // Existing records unchanged
        assert_eq!(
            registry.get_token_performance("TOKEN0").await.unwrap().price,
            100
        );
    }

    #[tokio::test]
    async fn test_reads_are_open_to_any_caller() {
        let registry = registry();
        let deployer = Principal::new("deployer");

        registry
            .add_token_performance(&deployer, "LINK", record(10))
            .await
            .unwrap();

        // No caller argument on reads at all; absent symbol is None, not
        // an error.
        assert!(registry.get_token_performance("LINK").await.is_some());
        assert_eq!(registry.get_token_performance("FAKE").await, None);
    }
}
