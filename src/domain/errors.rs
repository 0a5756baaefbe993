use thiserror::Error;

/// Wire code shared by authorization and capacity failures.
///
/// The deployed contract surfaced both conditions as `u403`; the collision
/// is part of the external interface and is preserved here. The enum
/// variants below keep the two causes distinguishable in logs and tests.
pub const CODE_FORBIDDEN: u32 = 403;

/// Wire code for a malformed performance record.
pub const CODE_INVALID: u32 = 400;

/// Wire code for updating a symbol that was never registered.
pub const CODE_NOT_FOUND: u32 = 404;

/// Failures surfaced by the registry's mutating entry points.
///
/// Every failure aborts the call before any state change; the store's
/// prior state is the final state.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("caller {caller} is not the registry owner")]
    Unauthorized { caller: String },

    #[error("invalid performance record: {reason}")]
    InvalidRecord { reason: String },

    #[error("registry full: {capacity} tokens already tracked")]
    RegistryFull { capacity: usize },

    #[error("token not registered: {symbol}")]
    TokenNotFound { symbol: String },
}

impl RegistryError {
    /// The numeric code a caller observes on the wire.
    pub fn code(&self) -> u32 {
        match self {
            RegistryError::Unauthorized { .. } => CODE_FORBIDDEN,
            RegistryError::InvalidRecord { .. } => CODE_INVALID,
            RegistryError::RegistryFull { .. } => CODE_FORBIDDEN,
            RegistryError::TokenNotFound { .. } => CODE_NOT_FOUND,
        }
    }

    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        RegistryError::InvalidRecord {
            reason: reason.into(),
        }
    }
}
