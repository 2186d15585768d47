#![no_std]

//! # English Auction House
//!
//! Lists one NFT per `(collection, item)` for ascending bids. The starting
//! price is the minimum opening bid and the reserve is the minimum price the
//! item sells for. Settlement is permissionless but only possible once the
//! bidding window has closed.

#[cfg(test)]
mod test;

use auction_house::{admin, guard, house, storage, Auction, Error, FeeReceiver, HouseConfig, Split};
use soroban_sdk::{contract, contractimpl, log, Address, Env, String, Vec};

fn load_auction(env: &Env, collection: &Address, item: u32) -> Result<Auction, Error> {
    storage::get_auction(env, collection, item).ok_or(Error::AuctionNotFound)
}

#[contract]
pub struct EnglishAuctionHouse;

#[contractimpl]
impl EnglishAuctionHouse {
    // ========== INITIALIZATION ==========

    pub fn initialize(
        env: Env,
        admin: Address,
        token: Address,
        fee_rate: u32,
        fee_receiver: FeeReceiver,
        allow_public_auctions: bool,
    ) -> Result<(), Error> {
        admin::initialize(&env, admin, token, fee_rate, fee_receiver, allow_public_auctions)?;
        Ok(())
    }

    // ========== AUCTION LIFECYCLE ==========

    /// List `item` from `collection` for `expiration` seconds. The seller
    /// must have approved the house as an operator on the collection.
    ///
    /// # Errors
    /// * `Error::InvalidPrice` - a price outside `0 ..= PRICE_MAX`. The two
    ///   prices are not ordered against each other: a reserve above the
    ///   starting price is accepted and only gates settlement.
    /// * `Error::InvalidDuration` - zero or overflowing `expiration`
    /// * `Error::AuctionExists` - the item is already listed
    #[allow(clippy::too_many_arguments)]
    pub fn create(
        env: Env,
        seller: Address,
        collection: Address,
        item: u32,
        start_price: i128,
        reserve_price: i128,
        expiration: u64,
        splits: Vec<Split>,
        memo: String,
    ) -> Result<(), Error> {
        guard::non_reentrant(&env, || {
            seller.require_auth();
            let config = admin::load_config(&env)?;

            house::check_price(start_price)?;
            house::check_price(reserve_price)?;

            house::open(
                &env,
                &config,
                seller,
                collection,
                item,
                start_price,
                reserve_price,
                expiration,
                &splits,
                memo,
            )?;
            storage::extend_instance_ttl(&env);
            Ok(())
        })
    }

    /// Bid `amount` of the payment token. The opening bid must reach the
    /// starting price; later bids must exceed the highest bid.
    pub fn bid(
        env: Env,
        bidder: Address,
        collection: Address,
        item: u32,
        amount: i128,
        memo: String,
    ) -> Result<(), Error> {
        guard::non_reentrant(&env, || {
            bidder.require_auth();
            let config = admin::load_config(&env)?;
            let auction = load_auction(&env, &collection, item)?;

            if !auction.is_open(storage::now(&env, &config)) {
                return Err(Error::AuctionExpired);
            }

            if auction.highest_bidder.is_none() && amount < auction.start_price {
                return Err(Error::BidTooLow);
            }

            house::place_bid(&env, &config, collection, item, auction, bidder, amount, memo)?;
            storage::extend_instance_ttl(&env);
            Ok(())
        })
    }

    /// Finalize a listing once its window has closed. Permissionless.
    pub fn settle(env: Env, collection: Address, item: u32, memo: String) -> Result<(), Error> {
        guard::non_reentrant(&env, || {
            let config = admin::load_config(&env)?;
            let auction = load_auction(&env, &collection, item)?;

            if storage::now(&env, &config) < auction.expires_at() {
                return Err(Error::AuctionNotExpired);
            }

            let cleared =
                auction.highest_bidder.is_some() && auction.highest_bid >= auction.floor_price;
            if !cleared {
                log!(&env, "reserve {} not met", auction.floor_price);
            }

            house::conclude(&env, &config, collection, item, auction, cleared, memo)?;
            storage::extend_instance_ttl(&env);
            Ok(())
        })
    }

    // ========== ADMIN ==========

    pub fn set_fee_rate(env: Env, admin: Address, fee_rate: u32) -> Result<(), Error> {
        admin::set_fee_rate(&env, admin, fee_rate)
    }

    pub fn set_fee_receiver(env: Env, admin: Address, fee_receiver: FeeReceiver) -> Result<(), Error> {
        admin::set_fee_receiver(&env, admin, fee_receiver)
    }

    pub fn set_allow_public_auctions(env: Env, admin: Address, allowed: bool) -> Result<(), Error> {
        admin::set_allow_public_auctions(&env, admin, allowed)
    }

    pub fn add_authorized_seller(env: Env, admin: Address, seller: Address) -> Result<(), Error> {
        admin::set_authorized_seller(&env, admin, seller, true)
    }

    pub fn remove_authorized_seller(env: Env, admin: Address, seller: Address) -> Result<(), Error> {
        admin::set_authorized_seller(&env, admin, seller, false)
    }

    pub fn transfer_admin(env: Env, current_admin: Address, new_admin: Address) -> Result<(), Error> {
        admin::transfer_admin(&env, current_admin, new_admin)
    }

    // ========== VIEWS ==========

    pub fn get_auction(env: Env, collection: Address, item: u32) -> Result<Auction, Error> {
        load_auction(&env, &collection, item)
    }

    pub fn get_splits(env: Env, collection: Address, item: u32) -> Result<Vec<Split>, Error> {
        if !storage::has_auction(&env, &collection, item) {
            return Err(Error::AuctionNotFound);
        }
        Ok(storage::get_splits(&env, &collection, item))
    }

    pub fn get_config(env: Env) -> Result<HouseConfig, Error> {
        admin::load_config(&env)
    }

    pub fn is_authorized_seller(env: Env, seller: Address) -> bool {
        storage::is_authorized_seller(&env, &seller)
    }
}
