use crate::types::{DataKey, ResolverConfig, RewardTier};
use soroban_sdk::{Env, Vec};

const DAY_IN_LEDGERS: u32 = 17280;
const INSTANCE_TTL_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const INSTANCE_TTL_THRESHOLD: u32 = INSTANCE_TTL_AMOUNT - DAY_IN_LEDGERS;

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> Option<ResolverConfig> {
    env.storage().instance().get(&DataKey::Config)
}

pub fn set_config(env: &Env, config: &ResolverConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn get_tiers(env: &Env) -> Vec<RewardTier> {
    env.storage()
        .instance()
        .get(&DataKey::Tiers)
        .unwrap_or(Vec::new(env))
}

pub fn set_tiers(env: &Env, tiers: &Vec<RewardTier>) {
    env.storage().instance().set(&DataKey::Tiers, tiers);
}

pub fn get_global_allowance(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::GlobalAllowance)
        .unwrap_or(0)
}

pub fn set_global_allowance(env: &Env, allowance: u32) {
    env.storage()
        .instance()
        .set(&DataKey::GlobalAllowance, &allowance);
}

pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_AMOUNT);
}
