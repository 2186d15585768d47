use soroban_sdk::{contracttype, Address};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,
    Tiers,
    GlobalAllowance,
}

/// One price tier.
///
/// The tier hands out ids `id_ceiling - remaining_allowance` upwards, so a
/// fresh tier owns `[id_ceiling - remaining_allowance, id_ceiling)`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardTier {
    /// Minimum contribution for this tier
    pub floor: i128,
    pub id_ceiling: u32,
    pub remaining_allowance: u32,
}

/// A contribution reported by the minter.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Contribution {
    pub token: Address,
    pub value: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ResolverConfig {
    pub admin: Address,
    /// Only caller allowed to consume allowances
    pub minter: Address,
    /// Token contributions must be made in
    pub token: Address,
    /// Accounts already owning this many rewards get nothing more
    pub per_account_cap: u32,
}
