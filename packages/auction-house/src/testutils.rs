//! Mock collaborators and ledger helpers for house tests.

use soroban_sdk::{
    contract, contractimpl, contracttype,
    testutils::{Events as _, Ledger, LedgerInfo},
    token, vec, Address, Bytes, Env, Event, String, Val, Vec,
};

#[contracttype]
#[derive(Clone)]
enum MockKey {
    Owner(u32),
    Operator(Address, Address),
    Credited(u64),
}

/// Minimal NFT collection with operator approvals.
#[contract]
pub struct MockCollection;

#[contractimpl]
impl MockCollection {
    pub fn mint(env: Env, to: Address, token_id: u32) {
        env.storage().persistent().set(&MockKey::Owner(token_id), &to);
    }

    pub fn set_approval_for_all(env: Env, owner: Address, operator: Address, approved: bool) {
        owner.require_auth();
        env.storage()
            .persistent()
            .set(&MockKey::Operator(owner, operator), &approved);
    }

    pub fn owner_of(env: Env, token_id: u32) -> Address {
        env.storage()
            .persistent()
            .get(&MockKey::Owner(token_id))
            .expect("token does not exist")
    }

    pub fn transfer(env: Env, from: Address, to: Address, token_id: u32) {
        from.require_auth();
        if Self::owner_of(env.clone(), token_id) != from {
            panic!("not owner");
        }
        env.storage().persistent().set(&MockKey::Owner(token_id), &to);
    }

    pub fn transfer_from(env: Env, spender: Address, from: Address, to: Address, token_id: u32) {
        spender.require_auth();
        if Self::owner_of(env.clone(), token_id) != from {
            panic!("not owner");
        }
        let approved = spender == from
            || env
                .storage()
                .persistent()
                .get(&MockKey::Operator(from, spender))
                .unwrap_or(false);
        if !approved {
            panic!("not approved");
        }
        env.storage().persistent().set(&MockKey::Owner(token_id), &to);
    }
}

/// Terminal that records what each project was credited.
#[contract]
pub struct MockTerminal;

#[contractimpl]
impl MockTerminal {
    #[allow(clippy::too_many_arguments)]
    pub fn receive_fee(
        env: Env,
        _from: Address,
        project_id: u64,
        _token: Address,
        amount: i128,
        _memo: String,
        _metadata: Bytes,
    ) {
        Self::credit(&env, project_id, amount);
    }

    pub fn pay(
        env: Env,
        _from: Address,
        project_id: u64,
        _token: Address,
        amount: i128,
        _memo: String,
    ) {
        Self::credit(&env, project_id, amount);
    }

    pub fn credited(env: Env, project_id: u64) -> i128 {
        env.storage()
            .persistent()
            .get(&MockKey::Credited(project_id))
            .unwrap_or(0)
    }
}

impl MockTerminal {
    fn credit(env: &Env, project_id: u64, amount: i128) {
        let key = MockKey::Credited(project_id);
        let total: i128 = env.storage().persistent().get(&key).unwrap_or(0);
        env.storage().persistent().set(&key, &(total + amount));
    }
}

/// Register a Stellar asset to pay bids with.
pub fn create_token<'a>(
    env: &Env,
    admin: &Address,
) -> (Address, token::TokenClient<'a>, token::StellarAssetClient<'a>) {
    let contract = env.register_stellar_asset_contract_v2(admin.clone());
    let address = contract.address();
    (
        address.clone(),
        token::TokenClient::new(env, &address),
        token::StellarAssetClient::new(env, &address),
    )
}

pub fn set_timestamp(env: &Env, timestamp: u64) {
    env.ledger().set(LedgerInfo {
        timestamp,
        protocol_version: 23,
        sequence_number: env.ledger().sequence(),
        network_id: Default::default(),
        base_reserve: 10,
        min_temp_entry_ttl: 100,
        min_persistent_entry_ttl: 100,
        max_entry_ttl: 10_000_000,
    });
}

pub fn advance_ledger(env: &Env, seconds: u64) {
    set_timestamp(env, env.ledger().timestamp() + seconds);
}

/// The most recent event `contract` published, in the `(contract, topics,
/// data)` shape the host records. Empty if it published none.
pub fn last_event(env: &Env, contract: &Address) -> Vec<(Address, Vec<Val>, Val)> {
    let mut found = Vec::new(env);
    let published = env
        .events()
        .all()
        .iter()
        .filter(|(id, _, _)| id == contract)
        .last();
    if let Some(event) = published {
        found.push_back(event);
    }
    found
}

/// `event` as [`last_event`] reports it when published by `contract`.
pub fn as_published<E: Event>(
    env: &Env,
    contract: &Address,
    event: &E,
) -> Vec<(Address, Vec<Val>, Val)> {
    vec![env, (contract.clone(), event.topics(env), event.data(env))]
}
