use crate::interface::CollectionClient;
use soroban_sdk::{Address, Env};

/// Pull `item` from `owner` into the house. Traps if the house is not an
/// approved operator for `owner`.
pub fn take(env: &Env, collection: &Address, owner: &Address, item: u32) {
    let house = env.current_contract_address();
    CollectionClient::new(env, collection).transfer_from(&house, owner, &house, &item);
}

/// Hand a custodied item to `to`.
pub fn release(env: &Env, collection: &Address, to: &Address, item: u32) {
    let house = env.current_contract_address();
    CollectionClient::new(env, collection).transfer(&house, to, &item);
}
