//! Listing lifecycle shared by both auction variants.
//!
//! The variants decide *whether* a bid or a settlement is allowed; the
//! functions here carry the effects: recording, escrow, refunds, custody and
//! payout. Records are written or removed before any collaborator is
//! called.

use crate::admin;
use crate::constants::PRICE_MAX;
use crate::custody;
use crate::errors::Error;
use crate::events::{AuctionConcluded, AuctionCreated, BidPlaced};
use crate::payout;
use crate::storage;
use crate::types::{Auction, HouseConfig, Split};
use soroban_sdk::{log, token, Address, Env, String, Vec};

/// Prices live in `0 ..= PRICE_MAX`.
pub fn check_price(price: i128) -> Result<(), Error> {
    if !(0..=PRICE_MAX).contains(&price) {
        return Err(Error::InvalidPrice);
    }
    Ok(())
}

/// Record a new listing and take custody of the item.
#[allow(clippy::too_many_arguments)]
pub fn open(
    env: &Env,
    config: &HouseConfig,
    seller: Address,
    collection: Address,
    item: u32,
    start_price: i128,
    floor_price: i128,
    expiration: u64,
    splits: &Vec<Split>,
    memo: String,
) -> Result<Auction, Error> {
    admin::require_seller_allowed(env, config, &seller)?;

    if storage::has_auction(env, &collection, item) {
        return Err(Error::AuctionExists);
    }

    if expiration == 0 {
        return Err(Error::InvalidDuration);
    }
    let created_at = storage::now(env, config);
    created_at
        .checked_add(expiration)
        .ok_or(Error::InvalidDuration)?;

    let auction = Auction {
        seller: seller.clone(),
        created_at,
        start_price,
        floor_price,
        expiration,
        highest_bidder: None,
        highest_bid: 0,
    };
    storage::save_auction(env, &collection, item, &auction);
    storage::set_splits(env, &collection, item, splits);

    custody::take(env, &collection, &seller, item);

    AuctionCreated {
        seller,
        collection,
        item,
        start_price,
        memo,
    }
    .publish(env);

    Ok(auction)
}

/// Replace the highest bid. The displaced bidder is refunded before the new
/// amount is escrowed; a failed transfer traps the whole call. Bids are held
/// to the listing price range so settlement arithmetic cannot overflow.
#[allow(clippy::too_many_arguments)]
pub fn place_bid(
    env: &Env,
    config: &HouseConfig,
    collection: Address,
    item: u32,
    mut auction: Auction,
    bidder: Address,
    amount: i128,
    memo: String,
) -> Result<(), Error> {
    if amount <= 0 || (auction.highest_bidder.is_some() && amount <= auction.highest_bid) {
        return Err(Error::BidTooLow);
    }
    check_price(amount)?;

    let house = env.current_contract_address();
    let token_client = token::TokenClient::new(env, &config.token);

    if let Some(previous) = auction.highest_bidder.take() {
        token_client.transfer(&house, &previous, &auction.highest_bid);
    }
    token_client.transfer(&bidder, &house, &amount);

    auction.highest_bidder = Some(bidder.clone());
    auction.highest_bid = amount;
    storage::save_auction(env, &collection, item, &auction);

    BidPlaced {
        bidder,
        collection,
        item,
        amount,
        memo,
    }
    .publish(env);

    Ok(())
}

/// Close a listing. With `sold` the highest bid is paid out and the item
/// goes to the bidder; otherwise any escrowed bid is returned and the item
/// goes back to the seller.
pub fn conclude(
    env: &Env,
    config: &HouseConfig,
    collection: Address,
    item: u32,
    auction: Auction,
    sold: bool,
    memo: String,
) -> Result<(), Error> {
    let splits = storage::get_splits(env, &collection, item);
    storage::remove_auction(env, &collection, item);
    storage::remove_splits(env, &collection, item);

    let buyer = match auction.highest_bidder {
        Some(bidder) if sold => {
            payout::pay_proceeds(env, config, &auction.seller, &splits, auction.highest_bid, &memo)?;
            custody::release(env, &collection, &bidder, item);
            Some(bidder)
        }
        Some(bidder) => {
            log!(env, "bid {} did not clear, returning escrow", auction.highest_bid);
            token::TokenClient::new(env, &config.token).transfer(
                &env.current_contract_address(),
                &bidder,
                &auction.highest_bid,
            );
            custody::release(env, &collection, &auction.seller, item);
            None
        }
        None => {
            custody::release(env, &collection, &auction.seller, item);
            None
        }
    };

    let close_price = if buyer.is_some() {
        auction.highest_bid
    } else {
        0
    };

    AuctionConcluded {
        seller: auction.seller,
        collection,
        buyer,
        item,
        close_price,
        memo,
    }
    .publish(env);

    Ok(())
}
