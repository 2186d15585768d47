use crate::constants::MAX_FEE_RATE;
use crate::errors::Error;
use crate::events::{
    AdminTransferred, FeeRateUpdated, FeeReceiverUpdated, PublicAuctionsUpdated,
    SellerAuthorizationUpdated,
};
use crate::storage;
use crate::types::{FeeReceiver, HouseConfig};
use soroban_sdk::{Address, Env};

/// Write the initial configuration. Fails if the house is already set up.
pub fn initialize(
    env: &Env,
    admin: Address,
    token: Address,
    fee_rate: u32,
    fee_receiver: FeeReceiver,
    allow_public_auctions: bool,
) -> Result<HouseConfig, Error> {
    if storage::has_config(env) {
        return Err(Error::AlreadyInitialized);
    }
    admin.require_auth();

    if fee_rate > MAX_FEE_RATE {
        return Err(Error::InvalidFeeRate);
    }

    let config = HouseConfig {
        admin,
        token,
        fee_rate,
        fee_receiver,
        allow_public_auctions,
        epoch: env.ledger().timestamp(),
    };
    storage::set_config(env, &config);
    storage::extend_instance_ttl(env);

    Ok(config)
}

pub fn load_config(env: &Env) -> Result<HouseConfig, Error> {
    storage::get_config(env).ok_or(Error::NotInitialized)
}

/// Check `admin` holds the admin capability and has signed the call.
pub fn require_admin(env: &Env, admin: &Address) -> Result<HouseConfig, Error> {
    let config = load_config(env)?;
    admin.require_auth();
    if config.admin != *admin {
        return Err(Error::Unauthorized);
    }
    Ok(config)
}

/// Listing is open to everyone unless public auctions are switched off, in
/// which case only allow-listed sellers pass.
pub fn require_seller_allowed(
    env: &Env,
    config: &HouseConfig,
    seller: &Address,
) -> Result<(), Error> {
    if config.allow_public_auctions || storage::is_authorized_seller(env, seller) {
        return Ok(());
    }
    Err(Error::Unauthorized)
}

pub fn set_fee_rate(env: &Env, admin: Address, fee_rate: u32) -> Result<(), Error> {
    let mut config = require_admin(env, &admin)?;

    if fee_rate > MAX_FEE_RATE {
        return Err(Error::InvalidFeeRate);
    }

    config.fee_rate = fee_rate;
    storage::set_config(env, &config);
    storage::extend_instance_ttl(env);

    FeeRateUpdated { admin, fee_rate }.publish(env);
    Ok(())
}

pub fn set_fee_receiver(env: &Env, admin: Address, fee_receiver: FeeReceiver) -> Result<(), Error> {
    let mut config = require_admin(env, &admin)?;

    config.fee_receiver = fee_receiver.clone();
    storage::set_config(env, &config);
    storage::extend_instance_ttl(env);

    FeeReceiverUpdated {
        admin,
        terminal: fee_receiver.terminal,
        project_id: fee_receiver.project_id,
    }
    .publish(env);
    Ok(())
}

pub fn set_allow_public_auctions(env: &Env, admin: Address, allowed: bool) -> Result<(), Error> {
    let mut config = require_admin(env, &admin)?;

    config.allow_public_auctions = allowed;
    storage::set_config(env, &config);
    storage::extend_instance_ttl(env);

    PublicAuctionsUpdated { admin, allowed }.publish(env);
    Ok(())
}

pub fn set_authorized_seller(
    env: &Env,
    admin: Address,
    seller: Address,
    authorized: bool,
) -> Result<(), Error> {
    require_admin(env, &admin)?;

    storage::set_authorized_seller(env, &seller, authorized);
    storage::extend_instance_ttl(env);

    SellerAuthorizationUpdated { seller, authorized }.publish(env);
    Ok(())
}

pub fn transfer_admin(env: &Env, current_admin: Address, new_admin: Address) -> Result<(), Error> {
    let mut config = require_admin(env, &current_admin)?;

    config.admin = new_admin.clone();
    storage::set_config(env, &config);
    storage::extend_instance_ttl(env);

    AdminTransferred {
        old_admin: current_admin,
        new_admin,
    }
    .publish(env);
    Ok(())
}
