use crate::domain::access::Principal;
use anyhow::{Context, Result};
use std::env;

/// Deployment-time configuration. The owner principal is fixed for the
/// life of the registry; there is no ownership transfer.
#[derive(Debug, Clone)]
pub struct Config {
    pub owner: Principal,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let owner = env::var("REGISTRY_OWNER")
            .context("REGISTRY_OWNER must be set to the owner principal")?;
        let owner = owner.trim();
        if owner.is_empty() {
            anyhow::bail!("REGISTRY_OWNER must not be empty");
        }

        Ok(Config {
            owner: Principal::new(owner),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Env mutation is process-wide, so all REGISTRY_OWNER cases live in
    // one test to keep them serialized.
    #[test]
    fn test_owner_from_env() {
        unsafe { env::set_var("REGISTRY_OWNER", "ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM") };
        let config = Config::from_env().unwrap();
        assert_eq!(
            config.owner,
            Principal::new("ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM")
        );

        unsafe { env::set_var("REGISTRY_OWNER", "   ") };
        assert!(Config::from_env().is_err());

        unsafe { env::remove_var("REGISTRY_OWNER") };
        assert!(Config::from_env().is_err());
    }
}
