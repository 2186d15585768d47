use soroban_sdk::{contractevent, Address};

/// Event emitted when a contribution earns a reward id
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardAllocated {
    #[topic]
    pub account: Address,
    pub tier: u32,
    pub id: u32,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MinterUpdated {
    #[topic]
    pub admin: Address,
    pub minter: Address,
}
