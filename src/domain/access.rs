use crate::domain::errors::RegistryError;
use crate::domain::registry::types::{MAX_PRICE_HISTORY, MAX_SYMBOL_LEN, PerformanceRecord};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An on-chain caller identity, as supplied by the host's identity source.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Principal(String);

impl Principal {
    pub fn new(id: impl Into<String>) -> Self {
        Principal(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Principal {
    fn from(id: &str) -> Self {
        Principal::new(id)
    }
}

/// Gate in front of every mutating registry operation.
///
/// The owner is fixed at construction (deployment time) and never
/// changes; there is no ownership-transfer path. Callers must pass
/// `authorize` before `validate` is consulted, so a caller that is both
/// unauthorized and submitting garbage observes the authorization error.
#[derive(Debug, Clone)]
pub struct AccessGate {
    owner: Principal,
}

impl AccessGate {
    pub fn new(owner: Principal) -> Self {
        Self { owner }
    }

    pub fn owner(&self) -> &Principal {
        &self.owner
    }

    /// Only the configured owner may mutate the registry.
    pub fn authorize(&self, caller: &Principal) -> Result<(), RegistryError> {
        if caller == &self.owner {
            Ok(())
        } else {
            Err(RegistryError::Unauthorized {
                caller: caller.to_string(),
            })
        }
    }

    /// Well-formedness of a proposed symbol and record.
    ///
    /// Scalar fields must be strictly positive. Symbols follow the host's
    /// bounded ASCII ticker type: 1..=10 alphanumeric ASCII characters.
    /// History contents are not inspected beyond the host list bound.
    pub fn validate(&self, symbol: &str, record: &PerformanceRecord) -> Result<(), RegistryError> {
        if symbol.is_empty() {
            return Err(RegistryError::invalid("symbol must not be empty"));
        }
        if symbol.len() > MAX_SYMBOL_LEN {
            return Err(RegistryError::invalid(format!(
                "symbol {} exceeds {} characters",
                symbol, MAX_SYMBOL_LEN
            )));
        }
        if !symbol.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return Err(RegistryError::invalid(format!(
                "symbol {} contains non-alphanumeric characters",
                symbol
            )));
        }

        if record.price == 0 {
            return Err(RegistryError::invalid("price must be positive"));
        }
        if record.volume == 0 {
            return Err(RegistryError::invalid("volume must be positive"));
        }
        if record.market_cap == 0 {
            return Err(RegistryError::invalid("market cap must be positive"));
        }

        if record.price_history.len() > MAX_PRICE_HISTORY {
            return Err(RegistryError::invalid(format!(
                "price history exceeds {} samples",
                MAX_PRICE_HISTORY
            )));
        }

        Ok(())
    }
}
