use crate::domain::access::Principal;
use crate::domain::errors::RegistryError;
use crate::domain::registry::PerformanceRecord;
use async_trait::async_trait;

// Need async_trait for async functions in traits
#[async_trait]
pub trait PerformanceRegistry: Send + Sync {
    /// Admit a new token or overwrite an existing one. Owner only.
    async fn add_token_performance(
        &self,
        caller: &Principal,
        symbol: &str,
        record: PerformanceRecord,
    ) -> Result<bool, RegistryError>;

    /// Overwrite the record of an already-registered token. Owner only.
    async fn update_token_performance(
        &self,
        caller: &Principal,
        symbol: &str,
        record: PerformanceRecord,
    ) -> Result<bool, RegistryError>;

    /// Current record for a symbol, if registered. Open to any caller.
    async fn get_token_performance(&self, symbol: &str) -> Option<PerformanceRecord>;

    /// All tracked symbols in insertion order. Open to any caller.
    async fn get_all_tokens(&self) -> Vec<String>;
}
