use soroban_sdk::{contractclient, Address, Bytes, Env, String};

/// NFT collection the house custodies listed items through.
///
/// Sellers approve the house as an operator before listing; the house then
/// pulls the item with `transfer_from` and hands it out again with
/// `transfer` once the auction settles.
#[contractclient(name = "CollectionClient")]
pub trait CollectionInterface {
    fn owner_of(env: Env, token_id: u32) -> Address;

    fn transfer(env: Env, from: Address, to: Address, token_id: u32);

    fn transfer_from(env: Env, spender: Address, from: Address, to: Address, token_id: u32);
}

/// Project terminal credited with fees and project split shares.
///
/// Tokens are transferred to the terminal first; the call that follows tells
/// it which project the deposit belongs to.
#[contractclient(name = "TerminalClient")]
pub trait TerminalInterface {
    fn receive_fee(
        env: Env,
        from: Address,
        project_id: u64,
        token: Address,
        amount: i128,
        memo: String,
        metadata: Bytes,
    );

    fn pay(env: Env, from: Address, project_id: u64, token: Address, amount: i128, memo: String);
}
