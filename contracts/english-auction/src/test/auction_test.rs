use super::*;
use auction_house::constants::PRICE_MAX;
use auction_house::events::{AuctionCreated, BidPlaced};
use auction_house::testutils::{advance_ledger, as_published, last_event};
use auction_house::Error;

#[test]
fn test_create_auction() {
    let (env, house, _, seller, _, _, _, collection, _) = setup_test();

    house.create(
        &seller,
        &collection.address,
        &ITEM,
        &1_000,
        &5_000,
        &DAY,
        &no_splits(&env),
        &memo(&env),
    );

    let auction = house.get_auction(&collection.address, &ITEM);
    assert_eq!(auction.seller, seller);
    assert_eq!(auction.start_price, 1_000);
    assert_eq!(auction.floor_price, 5_000);
    assert_eq!(auction.expires_at(), DAY);
    assert_eq!(collection.owner_of(&ITEM), house.address);
}

#[test]
fn test_create_rejects_out_of_range_prices() {
    let (env, house, _, seller, _, _, _, collection, _) = setup_test();

    for (start_price, reserve_price) in [(PRICE_MAX + 1, 0), (1_000, PRICE_MAX + 1), (-1, 0)] {
        let result = house.try_create(
            &seller,
            &collection.address,
            &ITEM,
            &start_price,
            &reserve_price,
            &DAY,
            &no_splits(&env),
            &memo(&env),
        );
        assert_eq!(result, Err(Ok(Error::InvalidPrice)));
    }
}

#[test]
fn test_create_zero_duration() {
    let (env, house, _, seller, _, _, _, collection, _) = setup_test();

    let result = house.try_create(
        &seller,
        &collection.address,
        &ITEM,
        &1_000,
        &1_000,
        &0,
        &no_splits(&env),
        &memo(&env),
    );
    assert_eq!(result, Err(Ok(Error::InvalidDuration)));
}

#[test]
fn test_create_rejects_live_listing() {
    let (env, house, _, seller, _, _, _, collection, _) = setup_test();
    house.create(&seller, &collection.address, &ITEM, &1_000, &0, &DAY, &no_splits(&env), &memo(&env));

    let result = house.try_create(
        &seller,
        &collection.address,
        &ITEM,
        &1_000,
        &0,
        &DAY,
        &no_splits(&env),
        &memo(&env),
    );
    assert_eq!(result, Err(Ok(Error::AuctionExists)));
}

#[test]
fn test_opening_bid_must_reach_start_price() {
    let (env, house, _, seller, bidder, _, _, collection, _) = setup_test();
    house.create(&seller, &collection.address, &ITEM, &1_000, &0, &DAY, &no_splits(&env), &memo(&env));

    let result = house.try_bid(&bidder, &collection.address, &ITEM, &999, &memo(&env));
    assert_eq!(result, Err(Ok(Error::BidTooLow)));

    house.bid(&bidder, &collection.address, &ITEM, &1_000, &memo(&env));
    assert_eq!(house.get_auction(&collection.address, &ITEM).highest_bid, 1_000);
}

#[test]
fn test_outbid_refunds_and_requires_increase() {
    let (env, house, _, seller, bidder, rival, token, collection, _) = setup_test();
    house.create(&seller, &collection.address, &ITEM, &1_000, &0, &DAY, &no_splits(&env), &memo(&env));
    house.bid(&bidder, &collection.address, &ITEM, &1_500, &memo(&env));

    let result = house.try_bid(&rival, &collection.address, &ITEM, &1_500, &memo(&env));
    assert_eq!(result, Err(Ok(Error::BidTooLow)));
    assert_eq!(token.balance(&rival), STARTING_BALANCE);

    house.bid(&rival, &collection.address, &ITEM, &1_501, &memo(&env));
    assert_eq!(token.balance(&bidder), STARTING_BALANCE);
    assert_eq!(token.balance(&rival), STARTING_BALANCE - 1_501);
    assert_eq!(token.balance(&house.address), 1_501);
}

#[test]
fn test_bid_after_end_fails() {
    let (env, house, _, seller, bidder, _, _, collection, _) = setup_test();
    house.create(&seller, &collection.address, &ITEM, &1_000, &0, &DAY, &no_splits(&env), &memo(&env));

    advance_ledger(&env, DAY + 1);
    let result = house.try_bid(&bidder, &collection.address, &ITEM, &2_000, &memo(&env));
    assert_eq!(result, Err(Ok(Error::AuctionExpired)));
}

#[test]
fn test_private_house() {
    let (env, house, admin, seller, _, _, _, collection, _) = setup_test();
    house.set_allow_public_auctions(&admin, &false);

    let result = house.try_create(
        &seller,
        &collection.address,
        &ITEM,
        &1_000,
        &0,
        &DAY,
        &no_splits(&env),
        &memo(&env),
    );
    assert_eq!(result, Err(Ok(Error::Unauthorized)));

    house.add_authorized_seller(&admin, &seller);
    house.create(&seller, &collection.address, &ITEM, &1_000, &0, &DAY, &no_splits(&env), &memo(&env));
    assert_eq!(collection.owner_of(&ITEM), house.address);
}

#[test]
fn test_listing_and_bid_events() {
    let (env, house, _, seller, bidder, _, _, collection, _) = setup_test();

    house.create(&seller, &collection.address, &ITEM, &1_000, &5_000, &DAY, &no_splits(&env), &memo(&env));
    assert_eq!(
        last_event(&env, &house.address),
        as_published(
            &env,
            &house.address,
            &AuctionCreated {
                seller: seller.clone(),
                collection: collection.address.clone(),
                item: ITEM,
                start_price: 1_000,
                memo: memo(&env),
            }
        )
    );

    house.bid(&bidder, &collection.address, &ITEM, &1_500, &memo(&env));
    assert_eq!(
        last_event(&env, &house.address),
        as_published(
            &env,
            &house.address,
            &BidPlaced {
                bidder: bidder.clone(),
                collection: collection.address.clone(),
                item: ITEM,
                amount: 1_500,
                memo: memo(&env),
            }
        )
    );
}

#[test]
fn test_bid_above_price_range() {
    let (env, house, _, seller, bidder, _, _, collection, _) = setup_test();
    house.create(&seller, &collection.address, &ITEM, &1_000, &0, &DAY, &no_splits(&env), &memo(&env));

    let result = house.try_bid(&bidder, &collection.address, &ITEM, &(PRICE_MAX + 1), &memo(&env));
    assert_eq!(result, Err(Ok(Error::InvalidPrice)));
}
