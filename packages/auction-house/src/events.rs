use soroban_sdk::{contractevent, Address, String};

/// Event emitted when an item is listed
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionCreated {
    #[topic]
    pub seller: Address,
    #[topic]
    pub collection: Address,
    pub item: u32,
    pub start_price: i128,
    pub memo: String,
}

/// Event emitted when a bid becomes the highest bid
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BidPlaced {
    #[topic]
    pub bidder: Address,
    #[topic]
    pub collection: Address,
    pub item: u32,
    pub amount: i128,
    pub memo: String,
}

/// Event emitted on settlement. `buyer` is `None` and `close_price` zero
/// when the item went back to the seller.
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionConcluded {
    #[topic]
    pub seller: Address,
    #[topic]
    pub collection: Address,
    pub buyer: Option<Address>,
    pub item: u32,
    pub close_price: i128,
    pub memo: String,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeeRateUpdated {
    #[topic]
    pub admin: Address,
    pub fee_rate: u32,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeeReceiverUpdated {
    #[topic]
    pub admin: Address,
    pub terminal: Address,
    pub project_id: u64,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PublicAuctionsUpdated {
    #[topic]
    pub admin: Address,
    pub allowed: bool,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SellerAuthorizationUpdated {
    #[topic]
    pub seller: Address,
    pub authorized: bool,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdminTransferred {
    #[topic]
    pub old_admin: Address,
    #[topic]
    pub new_admin: Address,
}
