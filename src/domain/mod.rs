// Caller identity and the owner/validation gate
pub mod access;

// Domain-specific error types
pub mod errors;

// Port interfaces
pub mod ports;

// Registry store and record types
pub mod registry;
