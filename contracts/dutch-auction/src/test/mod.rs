
use crate::{DutchAuctionHouse, DutchAuctionHouseClient};
use auction_house::testutils::{
    create_token, set_timestamp, MockCollection, MockCollectionClient, MockTerminal,
    MockTerminalClient,
};
use auction_house::{FeeReceiver, Split};
use soroban_sdk::{testutils::Address as _, token, Address, Env, String, Vec};

pub const EPOCH: u64 = 1_000;
pub const HOUR: u64 = 3_600;
pub const ITEM: u32 = 1;
pub const FEE_RATE: u32 = 250;
pub const FEE_PROJECT: u64 = 1;
pub const STARTING_BALANCE: i128 = 10_000_000;

pub struct Setup<'a> {
    pub env: Env,
    pub house: DutchAuctionHouseClient<'a>,
    pub admin: Address,
    pub seller: Address,
    pub bidder: Address,
    pub rival: Address,
    pub token: token::TokenClient<'a>,
    pub collection: MockCollectionClient<'a>,
    pub terminal: MockTerminalClient<'a>,
}

impl<'a> Setup<'a> {
    pub fn memo(&self) -> String {
        String::from_str(&self.env, "gm")
    }

    /// List `ITEM` with no splits.
    pub fn list(&self, start_price: i128, end_price: i128, expiration: u64) {
        self.list_with_splits(start_price, end_price, expiration, Vec::new(&self.env));
    }

    pub fn list_with_splits(
        &self,
        start_price: i128,
        end_price: i128,
        expiration: u64,
        splits: Vec<Split>,
    ) {
        self.house.create(
            &self.seller,
            &self.collection.address,
            &ITEM,
            &start_price,
            &end_price,
            &expiration,
            &splits,
            &self.memo(),
        );
    }

    pub fn bid(&self, bidder: &Address, amount: i128) {
        self.house
            .bid(bidder, &self.collection.address, &ITEM, &amount, &self.memo());
    }

    pub fn settle(&self) {
        self.house
            .settle(&self.collection.address, &ITEM, &self.memo());
    }
}

pub fn setup_test<'a>() -> Setup<'a> {
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

    let house_id = env.register(DutchAuctionHouse, ());
    let house = DutchAuctionHouseClient::new(&env, &house_id);
    house.initialize(
        &admin,
        &token_address,
        &FEE_RATE,
        &FeeReceiver {
            terminal: terminal_id.clone(),
            project_id: FEE_PROJECT,
        },
        &true,
        &HOUR,
    );

    let collection_id = env.register(MockCollection, ());
    let collection = MockCollectionClient::new(&env, &collection_id);
    collection.mint(&seller, &ITEM);
    collection.set_approval_for_all(&seller, &house_id, &true);

    Setup {
        env,
        house,
        admin,
        seller,
        bidder,
        rival,
        token,
        collection,
        terminal,
    }
}
