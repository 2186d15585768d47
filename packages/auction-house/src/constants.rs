/// Largest price an auction may be listed with (96-bit unsigned range).
pub const PRICE_MAX: i128 = (1 << 96) - 1;

/// Fee rates are expressed in basis points.
pub const FEE_DENOMINATOR: i128 = 10_000;

/// Fee rate ceiling (10%).
pub const MAX_FEE_RATE: u32 = 1_000;

/// Denominator split weights are expressed against.
pub const SPLITS_TOTAL_PERCENT: i128 = 1_000_000_000;

/// Number of ledgers in a day (assuming ~5 second block time)
pub const DAY_IN_LEDGERS: u32 = 17280;

pub const INSTANCE_TTL_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const INSTANCE_TTL_THRESHOLD: u32 = INSTANCE_TTL_AMOUNT - DAY_IN_LEDGERS;

pub const PERSISTENT_TTL_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;
pub const PERSISTENT_TTL_THRESHOLD: u32 = PERSISTENT_TTL_AMOUNT - DAY_IN_LEDGERS;
