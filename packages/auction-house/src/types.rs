use soroban_sdk::{contracttype, Address};

/// Storage keys for auction house state
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,
    Locked,
    AuthorizedSeller(Address),
    Auction(Address, u32),
    Splits(Address, u32),
}

/// Where settlement fees are credited.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeeReceiver {
    /// Terminal contract that accepts the fee
    pub terminal: Address,
    /// Project the fee is credited to inside the terminal
    pub project_id: u64,
}

/// House configuration, written once by `initialize` and adjusted by the admin.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HouseConfig {
    pub admin: Address,
    /// Payment token bids are escrowed and paid out in
    pub token: Address,
    /// Settlement fee in basis points
    pub fee_rate: u32,
    pub fee_receiver: FeeReceiver,
    /// When false only authorized sellers may list
    pub allow_public_auctions: bool,
    /// Ledger timestamp at initialization; auction times are offsets from it
    pub epoch: u64,
}

/// A live listing.
///
/// `floor_price` is the ending price of a Dutch auction and the reserve
/// price of an English one. `created_at` is an offset from the house epoch
/// and `expiration` a duration measured from `created_at`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Auction {
    pub seller: Address,
    pub created_at: u64,
    pub start_price: i128,
    pub floor_price: i128,
    pub expiration: u64,
    pub highest_bidder: Option<Address>,
    pub highest_bid: i128,
}

impl Auction {
    /// Epoch offset at which bidding closes.
    pub fn expires_at(&self) -> u64 {
        self.created_at.saturating_add(self.expiration)
    }

    /// Bids are accepted up to and including the expiry instant.
    pub fn is_open(&self, now: u64) -> bool {
        now <= self.expires_at()
    }
}

/// Destination of one split share.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SplitTarget {
    /// Plain account or contract paid with a token transfer
    Account(Address),
    /// Project inside a terminal: `(terminal, project_id)`
    Project(Address, u64),
}

/// Weighted payout recipient captured when an auction is created.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Split {
    /// Share against `SPLITS_TOTAL_PERCENT`
    pub weight: u32,
    pub target: SplitTarget,
}
