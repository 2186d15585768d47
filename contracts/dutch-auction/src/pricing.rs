use auction_house::Auction;

/// Price of a Dutch listing `now` seconds after the house epoch.
///
/// The duration is cut into whole `period_duration` periods and the price
/// steps down by `(start - end) / periods` at the start of each one. Integer
/// division can leave the final step slightly above the ending price; the
/// result never drops below it.
pub fn price_at(auction: &Auction, period_duration: u64, now: u64) -> i128 {
    let span = auction.start_price - auction.floor_price;
    let periods = auction.expiration / period_duration;
    if periods == 0 {
        return auction.floor_price;
    }

    let per_period = span / periods as i128;
    let elapsed = now.saturating_sub(auction.created_at) / period_duration;

    match (elapsed as i128).checked_mul(per_period) {
        Some(decay) if decay < span => auction.start_price - decay,
        _ => auction.floor_price,
    }
}
