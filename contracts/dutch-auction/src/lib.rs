#![no_std]

//! # Dutch Auction House
//!
//! Lists one NFT per `(collection, item)` at a price that steps down from
//! the starting price towards the ending price once per pricing period.
//! The first bid must reach the ending price and every later bid must beat
//! the current one; the displaced bidder is refunded in the same call.
//!
//! Anyone may settle. Before expiry that only succeeds once the highest bid
//! meets the decayed price; after expiry a bid below the price returns the
//! item to the seller.

mod pricing;

#[cfg(test)]
mod test;

use auction_house::{admin, guard, house, storage, Auction, Error, FeeReceiver, HouseConfig, Split};
use soroban_sdk::{contract, contractimpl, contracttype, log, Address, Env, String, Vec};

#[contracttype]
#[derive(Clone)]
enum DutchKey {
    PeriodDuration,
}

fn get_period_duration(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DutchKey::PeriodDuration)
        .unwrap_or(0)
}

fn load_auction(env: &Env, collection: &Address, item: u32) -> Result<Auction, Error> {
    storage::get_auction(env, collection, item).ok_or(Error::AuctionNotFound)
}

#[contract]
pub struct DutchAuctionHouse;

#[contractimpl]
impl DutchAuctionHouse {
    // ========== INITIALIZATION ==========

    /// Configure the house. `period_duration` is the length in seconds of
    /// one price step and cannot be changed afterwards.
    pub fn initialize(
        env: Env,
        admin: Address,
        token: Address,
        fee_rate: u32,
        fee_receiver: FeeReceiver,
        allow_public_auctions: bool,
        period_duration: u64,
    ) -> Result<(), Error> {
        admin::initialize(&env, admin, token, fee_rate, fee_receiver, allow_public_auctions)?;

        if period_duration == 0 {
            return Err(Error::InvalidDuration);
        }
        env.storage()
            .instance()
            .set(&DutchKey::PeriodDuration, &period_duration);

        Ok(())
    }

    // ========== AUCTION LIFECYCLE ==========

    /// List `item` from `collection`. The seller must have approved the house
    /// as an operator on the collection beforehand.
    ///
    /// # Errors
    /// * `Error::InvalidPrice` - prices out of range or `end_price >= start_price`
    /// * `Error::InvalidDuration` - `expiration` shorter than one pricing period
    /// * `Error::AuctionExists` - the item is already listed
    #[allow(clippy::too_many_arguments)]
    pub fn create(
        env: Env,
        seller: Address,
        collection: Address,
        item: u32,
        start_price: i128,
        end_price: i128,
        expiration: u64,
        splits: Vec<Split>,
        memo: String,
    ) -> Result<(), Error> {
        guard::non_reentrant(&env, || {
            seller.require_auth();
            let config = admin::load_config(&env)?;

            house::check_price(start_price)?;
            house::check_price(end_price)?;
            if end_price >= start_price {
                return Err(Error::InvalidPrice);
            }

            if expiration < get_period_duration(&env) {
                return Err(Error::InvalidDuration);
            }

            house::open(
                &env,
                &config,
                seller,
                collection,
                item,
                start_price,
                end_price,
                expiration,
                &splits,
                memo,
            )?;
            storage::extend_instance_ttl(&env);
            Ok(())
        })
    }

    /// Bid `amount` of the payment token. The first bid must be at least the
    /// ending price, later bids must exceed the highest bid.
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

            if auction.highest_bidder.is_none() && amount < auction.floor_price {
                return Err(Error::BidTooLow);
            }

            house::place_bid(&env, &config, collection, item, auction, bidder, amount, memo)?;
            storage::extend_instance_ttl(&env);
            Ok(())
        })
    }

    /// Finalize a listing. Permissionless.
    pub fn settle(env: Env, collection: Address, item: u32, memo: String) -> Result<(), Error> {
        guard::non_reentrant(&env, || {
            let config = admin::load_config(&env)?;
            let auction = load_auction(&env, &collection, item)?;

            let now = storage::now(&env, &config);
            let price = pricing::price_at(&auction, get_period_duration(&env), now);
            let cleared = auction.highest_bidder.is_some() && auction.highest_bid >= price;

            if !cleared && auction.is_open(now) {
                log!(&env, "highest bid {} below price {}", auction.highest_bid, price);
                return Err(Error::AuctionInProgress);
            }

            house::conclude(&env, &config, collection, item, auction, cleared, memo)?;
            storage::extend_instance_ttl(&env);
            Ok(())
        })
    }

    /// Current price of a listing.
    pub fn current_price(env: Env, collection: Address, item: u32) -> Result<i128, Error> {
        let config = admin::load_config(&env)?;
        let auction = load_auction(&env, &collection, item)?;
        Ok(pricing::price_at(
            &auction,
            get_period_duration(&env),
            storage::now(&env, &config),
        ))
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

    pub fn period_duration(env: Env) -> u64 {
        get_period_duration(&env)
    }
}
