use serde::{Deserialize, Serialize};

/// Hard cap on the number of distinct tokens the registry will track.
/// Checked only when a new symbol is admitted; existing symbols can
/// always be overwritten.
pub const MAX_TRACKED_TOKENS: usize = 100;

/// Longest accepted ticker symbol, matching the bounded ASCII string
/// type the record map is keyed on.
pub const MAX_SYMBOL_LEN: usize = 10;

/// Longest accepted price-history list.
pub const MAX_PRICE_HISTORY: usize = 10;

/// Market snapshot stored for one tracked token.
///
/// Records are replaced wholesale on every successful add/update; there
/// is no partial patching. Prices are in minor units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceRecord {
    pub price: u64,
    pub volume: u64,
    pub market_cap: u64,
    /// Recent price samples, stored verbatim as supplied by the caller.
    /// Ordering within the list is not validated; an empty list is fine.
    pub price_history: Vec<u64>,
}

impl PerformanceRecord {
    pub fn new(price: u64, volume: u64, market_cap: u64, price_history: Vec<u64>) -> Self {
        Self {
            price,
            volume,
            market_cap,
            price_history,
        }
    }
}
