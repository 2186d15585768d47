use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
    /// Tier list is empty
    NoTiers = 4,
    /// Floors are negative or not strictly ascending
    InvalidTierFloor = 5,
    /// A tier's id range overlaps the previous tier or would hand out id 0
    InvalidTierIdRange = 6,
    /// Global allowance of zero would never allocate anything
    InvalidAllowance = 7,
}
