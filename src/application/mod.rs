pub mod batch;

pub use batch::{Receipt, RegistryCall, RegistryOp, apply_batch};
