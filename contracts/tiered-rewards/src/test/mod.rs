
use crate::{Contribution, RewardTier, TieredAllowanceResolver, TieredAllowanceResolverClient};
use soroban_sdk::{contract, contractimpl, testutils::Address as _, vec, Address, Env, Vec};

/// One whole token in stroops.
pub const UNIT: i128 = 10_000_000;
pub const PER_ACCOUNT_CAP: u32 = 5;

/// Supply lookup whose answers the test sets directly.
#[contract]
pub struct MockSupply;

#[contractimpl]
impl MockSupply {
    pub fn set_owned(env: Env, account: Address, owned: u32) {
        env.storage().persistent().set(&account, &owned);
    }

    pub fn total_owned_by(env: Env, account: Address) -> u32 {
        env.storage().persistent().get(&account).unwrap_or(0)
    }
}

pub fn tier(floor: i128, id_ceiling: u32, remaining_allowance: u32) -> RewardTier {
    RewardTier {
        floor,
        id_ceiling,
        remaining_allowance,
    }
}

/// 1, 2 and 3 token tiers handing out ids 1..=1000, 1001..=1500 and 1501..=1510.
pub fn default_tiers(env: &Env) -> Vec<RewardTier> {
    vec![
        env,
        tier(UNIT, 1_001, 1_000),
        tier(2 * UNIT, 1_501, 500),
        tier(3 * UNIT, 1_511, 10),
    ]
}

pub struct Setup<'a> {
    pub env: Env,
    pub resolver: TieredAllowanceResolverClient<'a>,
    pub admin: Address,
    pub token: Address,
    pub account: Address,
    pub supply: MockSupplyClient<'a>,
}

impl<'a> Setup<'a> {
    pub fn contribute(&self, value: i128) -> u32 {
        self.resolver.validate_contribution(
            &self.account,
            &Contribution {
                token: self.token.clone(),
                value,
            },
            &self.supply.address,
        )
    }
}

pub fn setup_with<'a, F>(tiers: F, global_allowance: u32) -> Setup<'a>
where
    F: FnOnce(&Env) -> Vec<RewardTier>,
{
    let env = Env::default();
    env.mock_all_auths();
    let tiers = tiers(&env);

    let admin = Address::generate(&env);
    let minter = Address::generate(&env);
    let token = Address::generate(&env);
    let account = Address::generate(&env);

    let resolver =
        TieredAllowanceResolverClient::new(&env, &env.register(TieredAllowanceResolver, ()));
    resolver.initialize(
        &admin,
        &minter,
        &token,
        &tiers,
        &global_allowance,
        &PER_ACCOUNT_CAP,
    );

    let supply = MockSupplyClient::new(&env, &env.register(MockSupply, ()));

    Setup {
        env,
        resolver,
        admin,
        token,
        account,
        supply,
    }
}

pub fn setup_test<'a>() -> Setup<'a> {
    setup_with(default_tiers, 10_000)
}
