use crate::constants::{
    INSTANCE_TTL_AMOUNT, INSTANCE_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT, PERSISTENT_TTL_THRESHOLD,
};
use crate::types::{Auction, DataKey, HouseConfig, Split};
use soroban_sdk::{Address, Env, Vec};

// ========== Config ==========

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> Option<HouseConfig> {
    env.storage().instance().get(&DataKey::Config)
}

pub fn set_config(env: &Env, config: &HouseConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_AMOUNT);
}

/// Seconds elapsed since the house epoch.
pub fn now(env: &Env, config: &HouseConfig) -> u64 {
    env.ledger().timestamp().saturating_sub(config.epoch)
}

// ========== Re-entrancy Lock ==========

pub fn is_locked(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Locked)
        .unwrap_or(false)
}

pub fn set_locked(env: &Env, locked: bool) {
    if locked {
        env.storage().instance().set(&DataKey::Locked, &true);
    } else {
        env.storage().instance().remove(&DataKey::Locked);
    }
}

// ========== Authorized Sellers ==========

pub fn is_authorized_seller(env: &Env, seller: &Address) -> bool {
    let key = DataKey::AuthorizedSeller(seller.clone());
    let authorized = env.storage().persistent().get::<_, bool>(&key);
    if authorized.is_some() {
        env.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    authorized.unwrap_or(false)
}

pub fn set_authorized_seller(env: &Env, seller: &Address, authorized: bool) {
    let key = DataKey::AuthorizedSeller(seller.clone());
    if authorized {
        env.storage().persistent().set(&key, &true);
        env.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    } else {
        env.storage().persistent().remove(&key);
    }
}

// ========== Auctions ==========

pub fn has_auction(env: &Env, collection: &Address, item: u32) -> bool {
    let key = DataKey::Auction(collection.clone(), item);
    env.storage().persistent().has(&key)
}

pub fn get_auction(env: &Env, collection: &Address, item: u32) -> Option<Auction> {
    let key = DataKey::Auction(collection.clone(), item);
    let auction = env.storage().persistent().get::<_, Auction>(&key);
    if auction.is_some() {
        env.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    auction
}

pub fn save_auction(env: &Env, collection: &Address, item: u32, auction: &Auction) {
    let key = DataKey::Auction(collection.clone(), item);
    env.storage().persistent().set(&key, auction);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

pub fn remove_auction(env: &Env, collection: &Address, item: u32) {
    let key = DataKey::Auction(collection.clone(), item);
    env.storage().persistent().remove(&key);
}

// ========== Splits ==========

pub fn get_splits(env: &Env, collection: &Address, item: u32) -> Vec<Split> {
    let key = DataKey::Splits(collection.clone(), item);
    env.storage()
        .persistent()
        .get(&key)
        .unwrap_or(Vec::new(env))
}

/// An empty list is not stored; readers fall back to `Vec::new`.
pub fn set_splits(env: &Env, collection: &Address, item: u32, splits: &Vec<Split>) {
    if splits.is_empty() {
        return;
    }
    let key = DataKey::Splits(collection.clone(), item);
    env.storage().persistent().set(&key, splits);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

pub fn remove_splits(env: &Env, collection: &Address, item: u32) {
    let key = DataKey::Splits(collection.clone(), item);
    env.storage().persistent().remove(&key);
}
