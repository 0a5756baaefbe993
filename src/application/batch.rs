//! Ordered application of registry call batches.
//!
//! The host chain hands the registry a block of calls in a fixed order;
//! each call is applied against the cumulative effect of the earlier
//! ones and yields its own receipt. A failed call never aborts the rest
//! of the batch.

use crate::domain::access::Principal;
use crate::domain::errors::RegistryError;
use crate::domain::ports::PerformanceRegistry;
use crate::domain::registry::PerformanceRecord;

/// One mutating operation addressed at the registry.
#[derive(Debug, Clone)]
pub enum RegistryOp {
    Add {
        symbol: String,
        record: PerformanceRecord,
    },
    Update {
        symbol: String,
        record: PerformanceRecord,
    },
}

/// A call as submitted by the host: an operation plus the identity the
/// host resolved for its sender.
#[derive(Debug, Clone)]
pub struct RegistryCall {
    pub caller: Principal,
    pub op: RegistryOp,
}

impl RegistryCall {
    pub fn add(caller: impl Into<Principal>, symbol: &str, record: PerformanceRecord) -> Self {
        Self {
            caller: caller.into(),
            op: RegistryOp::Add {
                symbol: symbol.to_string(),
                record,
            },
        }
    }

    pub fn update(caller: impl Into<Principal>, symbol: &str, record: PerformanceRecord) -> Self {
        Self {
            caller: caller.into(),
            op: RegistryOp::Update {
                symbol: symbol.to_string(),
                record,
            },
        }
    }
}

/// Outcome of one call within a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub result: Result<bool, RegistryError>,
}

impl Receipt {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }

    /// Wire-visible error code, if the call failed.
    pub fn err_code(&self) -> Option<u32> {
        self.result.as_ref().err().map(|e| e.code())
    }
}

/// Apply `calls` strictly in submission order, collecting one receipt
/// per call.
pub async fn apply_batch<R: PerformanceRegistry + ?Sized>(
    registry: &R,
    calls: Vec<RegistryCall>,
) -> Vec<Receipt> {
    let mut receipts = Vec::with_capacity(calls.len());
    for call in calls {
        let result = match call.op {
            RegistryOp::Add { symbol, record } => {
                registry
                    .add_token_performance(&call.caller, &symbol, record)
                    .await
            }
            RegistryOp::Update { symbol, record } => {
                registry
                    .update_token_performance(&call.caller, &symbol, record)
                    .await
            }
        };
        receipts.push(Receipt { result });
    }
    receipts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::InMemoryRegistry;

    fn record(price: u64) -> PerformanceRecord {
        PerformanceRecord::new(price, 1_000, 10_000, vec![price])
    }

    #[tokio::test]
    async fn test_batch_applies_in_submission_order() {
        let registry = InMemoryRegistry::new(Principal::new("deployer"));

        // The update only succeeds because the add earlier in the same
        // batch already registered the symbol.
        let receipts = apply_batch(
            &registry,
            vec![
                RegistryCall::add("deployer", "ETH", record(3_000)),
                RegistryCall::update("deployer", "ETH", record(3_500)),
            ],
        )
        .await;

        assert!(receipts.iter().all(Receipt::is_ok));
        assert_eq!(
            registry.get_token_performance("ETH").await.unwrap().price,
            3_500
        );
    }

    #[tokio::test]
    async fn test_failed_call_does_not_abort_batch() {
        let registry = InMemoryRegistry::new(Principal::new("deployer"));

        let receipts = apply_batch(
            &registry,
            vec![
                RegistryCall::add("wallet_1", "DOGE", record(1)),
                RegistryCall::add("deployer", "BTC", record(50_000)),
            ],
        )
        .await;

        assert_eq!(receipts[0].err_code(), Some(403));
        assert!(receipts[1].is_ok());
        assert_eq!(registry.get_all_tokens().await, ["BTC"]);
    }
}
