pub mod auction_test;

use crate::{EnglishAuctionHouse, EnglishAuctionHouseClient};
use auction_house::testutils::{
    create_token, set_timestamp, MockCollection, MockCollectionClient, MockTerminal,
    MockTerminalClient,
};
use auction_house::FeeReceiver;
use soroban_sdk::{testutils::Address as _, token, Address, Env, String, Vec};

pub const EPOCH: u64 = 1_000;
pub const DAY: u64 = 86_400;
pub const ITEM: u32 = 7;
pub const FEE_RATE: u32 = 500;
pub const FEE_PROJECT: u64 = 1;
pub const STARTING_BALANCE: i128 = 10_000_000;

pub fn setup_test() -> (
    Env,
    EnglishAuctionHouseClient<'static>,
    Address,
    Address,
    Address,
    Address,
    token::TokenClient<'static>,
    MockCollectionClient<'static>,
    MockTerminalClient<'static>,
) {
    let env = Env::default();
    env.mock_all_auths();
    set_timestamp(&env, EPOCH);

    let admin = Address::generate(&env);
    let seller = Address::generate(&env);
    let bidder = Address::generate(&env);
    let rival = Address::generate(&env);

    let (token_address, token, token_admin) = create_token(&env, &admin);
    token_admin.mint(&bidder, &STARTING_BALANCE);
    token_admin.mint(&rival, &STARTING_BALANCE);

    let terminal_id = env.register(MockTerminal, ());
    let terminal = MockTerminalClient::new(&env, &terminal_id);

    let house_id = env.register(EnglishAuctionHouse, ());
    let house = EnglishAuctionHouseClient::new(&env, &house_id);
    house.initialize(
        &admin,
        &token_address,
        &FEE_RATE,
        &FeeReceiver {
            terminal: terminal_id,
            project_id: FEE_PROJECT,
        },
        &true,
    );

    let collection_id = env.register(MockCollection, ());
    let collection = MockCollectionClient::new(&env, &collection_id);
    collection.mint(&seller, &ITEM);
    collection.set_approval_for_all(&seller, &house_id, &true);

    (env, house, admin, seller, bidder, rival, token, collection, terminal)
}

pub fn memo(env: &Env) -> String {
    String::from_str(env, "lot 7")
}

pub fn no_splits(env: &Env) -> Vec<auction_house::Split> {
    Vec::new(env)
}
