use crate::errors::Error;
use crate::types::RewardTier;
use soroban_sdk::Vec;

/// Why a tier list was refused, and at which index.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TierViolation {
    pub error: Error,
    pub index: u32,
}

impl TierViolation {
    fn at(error: Error, index: u32) -> Self {
        Self { error, index }
    }
}

/// Floors must ascend strictly and each tier's id range must start at or
/// above the previous tier's ceiling. The first range starts at 1 at the
/// lowest, as id 0 means "no reward".
pub fn validate(tiers: &Vec<RewardTier>) -> Result<(), TierViolation> {
    if tiers.is_empty() {
        return Err(TierViolation::at(Error::NoTiers, 0));
    }

    let mut previous: Option<RewardTier> = None;
    for (index, tier) in tiers.iter().enumerate() {
        let index = index as u32;

        let first_id = tier
            .id_ceiling
            .checked_sub(tier.remaining_allowance)
            .ok_or(TierViolation::at(Error::InvalidTierIdRange, index))?;

        match &previous {
            None => {
                if tier.floor < 0 {
                    return Err(TierViolation::at(Error::InvalidTierFloor, index));
                }
                if first_id == 0 {
                    return Err(TierViolation::at(Error::InvalidTierIdRange, index));
                }
            }
            Some(prev) => {
                if tier.floor <= prev.floor {
                    return Err(TierViolation::at(Error::InvalidTierFloor, index));
                }
                if first_id < prev.id_ceiling {
                    return Err(TierViolation::at(Error::InvalidTierIdRange, index));
                }
            }
        }

        previous = Some(tier);
    }

    Ok(())
}

/// Index of the tier a contribution of `value` falls in, if that tier still
/// has allowance. A contribution belongs to the highest tier whose floor it
/// reaches; an exhausted tier does not fall back to a lower one.
pub fn find_tier(tiers: &Vec<RewardTier>, value: i128) -> Option<u32> {
    let mut matched = None;
    for (index, tier) in tiers.iter().enumerate() {
        if tier.floor > value {
            break;
        }
        matched = Some((index as u32, tier.remaining_allowance));
    }

    match matched {
        Some((index, remaining)) if remaining > 0 => Some(index),
        _ => None,
    }
}

/// Take the next id from tier `index` and shrink its allowance.
pub fn allocate(tiers: &mut Vec<RewardTier>, index: u32) -> Option<u32> {
    let mut tier = tiers.get(index)?;
    if tier.remaining_allowance == 0 {
        return None;
    }

    let id = tier.id_ceiling - tier.remaining_allowance;
    tier.remaining_allowance -= 1;
    tiers.set(index, tier);

    Some(id)
}
