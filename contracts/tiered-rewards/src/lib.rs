#![no_std]

//! # Tiered Allowance Resolver
//!
//! Decides which reward id, if any, a contribution earns. Tiers are ordered
//! by contribution floor and each rations a disjoint range of ids. A global
//! allowance and a per-account cap are checked before any tier is looked at.
//!
//! The resolver returns `0` for "no reward"; id 0 is never allocated.

mod errors;
mod events;
mod storage;
mod tiers;
mod types;

#[cfg(test)]
mod test;

pub use errors::Error;
pub use types::{Contribution, ResolverConfig, RewardTier};

use events::{MinterUpdated, RewardAllocated};
use soroban_sdk::{contract, contractclient, contractimpl, log, Address, Env, Vec};

/// Collaborator that knows how many rewards an account already holds.
#[contractclient(name = "SupplyClient")]
pub trait SupplyInterface {
    fn total_owned_by(env: Env, account: Address) -> u32;
}

#[contract]
pub struct TieredAllowanceResolver;

#[contractimpl]
impl TieredAllowanceResolver {
    /// Set up the tier ladder.
    ///
    /// # Errors
    /// * `Error::NoTiers` - `tiers` is empty
    /// * `Error::InvalidTierFloor` - floors negative or not strictly ascending
    /// * `Error::InvalidTierIdRange` - id ranges overlap or reach id 0
    /// * `Error::InvalidAllowance` - `global_allowance` is zero
    pub fn initialize(
        env: Env,
        admin: Address,
        minter: Address,
        token: Address,
        tiers: Vec<RewardTier>,
        global_allowance: u32,
        per_account_cap: u32,
    ) -> Result<(), Error> {
        if storage::has_config(&env) {
            return Err(Error::AlreadyInitialized);
        }
        admin.require_auth();

        if let Err(violation) = tiers::validate(&tiers) {
            log!(&env, "tier {} rejected", violation.index);
            return Err(violation.error);
        }
        if global_allowance == 0 {
            return Err(Error::InvalidAllowance);
        }

        storage::set_config(
            &env,
            &ResolverConfig {
                admin,
                minter,
                token,
                per_account_cap,
            },
        );
        storage::set_tiers(&env, &tiers);
        storage::set_global_allowance(&env, global_allowance);
        storage::extend_instance_ttl(&env);

        Ok(())
    }

    /// Resolve a contribution by `account` to a reward id, consuming one
    /// unit of allowance from the matching tier and the global pool.
    /// Returns 0, changing nothing, when the contribution earns no reward.
    pub fn validate_contribution(
        env: Env,
        account: Address,
        contribution: Contribution,
        supply: Address,
    ) -> Result<u32, Error> {
        let config = storage::get_config(&env).ok_or(Error::NotInitialized)?;
        config.minter.require_auth();

        if contribution.token != config.token {
            log!(&env, "contribution in unaccepted token");
            return Ok(0);
        }

        let global_allowance = storage::get_global_allowance(&env);
        if global_allowance == 0 {
            return Ok(0);
        }

        let owned = SupplyClient::new(&env, &supply).total_owned_by(&account);
        if owned >= config.per_account_cap {
            log!(&env, "account holds {} rewards, at cap", owned);
            return Ok(0);
        }

        let mut tiers = storage::get_tiers(&env);
        let Some(index) = tiers::find_tier(&tiers, contribution.value) else {
            return Ok(0);
        };
        let Some(id) = tiers::allocate(&mut tiers, index) else {
            return Ok(0);
        };

        storage::set_tiers(&env, &tiers);
        storage::set_global_allowance(&env, global_allowance - 1);
        storage::extend_instance_ttl(&env);

        RewardAllocated {
            account,
            tier: index,
            id,
        }
        .publish(&env);

        Ok(id)
    }

    /// Hand the minter role to another contract (admin only).
    pub fn set_minter(env: Env, admin: Address, minter: Address) -> Result<(), Error> {
        let mut config = storage::get_config(&env).ok_or(Error::NotInitialized)?;
        admin.require_auth();
        if config.admin != admin {
            return Err(Error::Unauthorized);
        }

        config.minter = minter.clone();
        storage::set_config(&env, &config);
        storage::extend_instance_ttl(&env);

        MinterUpdated { admin, minter }.publish(&env);
        Ok(())
    }

    // ========== VIEWS ==========

    pub fn get_config(env: Env) -> Result<ResolverConfig, Error> {
        storage::get_config(&env).ok_or(Error::NotInitialized)
    }

    pub fn get_tiers(env: Env) -> Vec<RewardTier> {
        storage::get_tiers(&env)
    }

    pub fn remaining_allowance(env: Env) -> u32 {
        storage::get_global_allowance(&env)
    }
}
