//! Fee and split arithmetic for settlement proceeds.
//!
//! All divisions floor. Whatever the floors leave behind is paid to a
//! residual recipient, so the sum of everything paid out always equals the
//! amount being settled.

use crate::constants::{FEE_DENOMINATOR, SPLITS_TOTAL_PERCENT};
use crate::errors::Error;
use crate::interface::TerminalClient;
use crate::types::{HouseConfig, Split, SplitTarget};
use soroban_sdk::{log, token, Address, Bytes, Env, String, Vec};

/// `amount * fee_rate / FEE_DENOMINATOR`, truncated.
pub fn fee_for(amount: i128, fee_rate: u32) -> Result<i128, Error> {
    amount
        .checked_mul(fee_rate as i128)
        .map(|scaled| scaled / FEE_DENOMINATOR)
        .ok_or(Error::ArithmeticOverflow)
}

/// Per-recipient shares of `amount`, in split order.
///
/// Weights are not required to sum to `SPLITS_TOTAL_PERCENT`. A single
/// weight counts for at most the whole amount, and a share is capped at what
/// is still undistributed so the total never exceeds `amount`.
pub fn split_amounts(env: &Env, splits: &Vec<Split>, amount: i128) -> Result<Vec<i128>, Error> {
    let mut shares = Vec::new(env);
    let mut remaining = amount;

    for split in splits.iter() {
        let weight = (split.weight as i128).min(SPLITS_TOTAL_PERCENT);
        let share = amount
            .checked_mul(weight)
            .ok_or(Error::ArithmeticOverflow)?
            / SPLITS_TOTAL_PERCENT;
        let share = share.min(remaining);
        remaining -= share;
        shares.push_back(share);
    }

    Ok(shares)
}

/// Pay `amount` of `token` held by the house across `splits`, sending what
/// the shares leave over to `residual`. Returns the amount paid to split
/// recipients.
pub fn distribute(
    env: &Env,
    token: &Address,
    splits: &Vec<Split>,
    amount: i128,
    residual: &Address,
    memo: &String,
) -> Result<i128, Error> {
    let house = env.current_contract_address();
    let token_client = token::TokenClient::new(env, token);
    let shares = split_amounts(env, splits, amount)?;

    let mut distributed: i128 = 0;
    for (split, share) in splits.iter().zip(shares.iter()) {
        if share == 0 {
            continue;
        }
        match split.target {
            SplitTarget::Account(recipient) => {
                token_client.transfer(&house, &recipient, &share);
            }
            SplitTarget::Project(terminal, project_id) => {
                token_client.transfer(&house, &terminal, &share);
                TerminalClient::new(env, &terminal).pay(&house, &project_id, token, &share, memo);
            }
        }
        distributed += share;
    }

    let leftover = amount - distributed;
    if leftover > 0 {
        token_client.transfer(&house, residual, &leftover);
    }

    Ok(distributed)
}

/// Disburse a winning bid: the fee goes to the configured terminal, the rest
/// through `splits` with the seller taking the remainder (all of it when no
/// splits were given).
pub fn pay_proceeds(
    env: &Env,
    config: &HouseConfig,
    seller: &Address,
    splits: &Vec<Split>,
    amount: i128,
    memo: &String,
) -> Result<(), Error> {
    let fee = fee_for(amount, config.fee_rate)?;

    if fee > 0 {
        let house = env.current_contract_address();
        let receiver = &config.fee_receiver;
        token::TokenClient::new(env, &config.token).transfer(&house, &receiver.terminal, &fee);
        TerminalClient::new(env, &receiver.terminal).receive_fee(
            &house,
            &receiver.project_id,
            &config.token,
            &fee,
            memo,
            &Bytes::new(env),
        );
    }

    let distributed = distribute(env, &config.token, splits, amount - fee, seller, memo)?;
    log!(
        env,
        "proceeds {} split as fee {} and splits {}",
        amount,
        fee,
        distributed
    );

    Ok(())
}
