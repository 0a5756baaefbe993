pub mod store;
pub mod types;

pub use store::TokenRegistry;
pub use types::{MAX_PRICE_HISTORY, MAX_SYMBOL_LEN, MAX_TRACKED_TOKENS, PerformanceRecord};
