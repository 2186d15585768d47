use soroban_sdk::contracterror;

/// Error codes shared by the Dutch and English auction houses.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// House has not been initialized
    NotInitialized = 1,
    /// House has already been initialized
    AlreadyInitialized = 2,
    /// Caller lacks the admin capability or is not an authorized seller
    Unauthorized = 3,
    /// A live auction already exists for this collection and item
    AuctionExists = 4,
    /// No live auction for this collection and item
    AuctionNotFound = 5,
    /// Price outside the accepted range or in the wrong order
    InvalidPrice = 6,
    /// Duration is zero, too short or overflows the clock
    InvalidDuration = 7,
    /// Bidding window has closed
    AuctionExpired = 8,
    /// Settlement attempted before the auction window closed
    AuctionNotExpired = 9,
    /// Early settlement attempted without a bid clearing the current price
    AuctionInProgress = 10,
    /// Bid below the minimum or not above the current highest bid
    BidTooLow = 11,
    /// Fee rate above the allowed ceiling
    InvalidFeeRate = 12,
    /// Payout arithmetic overflowed
    ArithmeticOverflow = 13,
    /// Entry point re-entered while another call is in progress
    Reentrant = 14,
}
