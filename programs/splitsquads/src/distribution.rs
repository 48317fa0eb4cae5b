// Proportional reward split
//
// share_i = vault_balance * weight_i / total_weight (floor)
// The truncation remainder stays in the rewards vault and rolls into the
// next distribution.

use anchor_lang::prelude::*;

use crate::errors::SquadError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DistributionPlan {
    pub total_weight: u128,
    pub shares: Vec<u64>,
    pub distributed: u64,
    pub remainder: u64,
}

pub fn reward_share(vault_balance: u64, weight: u64, total_weight: u128) -> Result<u64> {
    let share = (weight as u128)
        .checked_mul(vault_balance as u128)
        .ok_or(SquadError::Overflow)?
        .checked_div(total_weight)
        .ok_or(SquadError::DivisionByZero)?;

    // weight <= total_weight, so share <= vault_balance
    u64::try_from(share).map_err(|_| error!(SquadError::Overflow))
}

pub fn plan_distribution(vault_balance: u64, weights: &[u64]) -> Result<DistributionPlan> {
    require!(!weights.is_empty(), SquadError::NoMembers);
    require!(vault_balance > 0, SquadError::NoRewards);

    let mut total_weight: u128 = 0;
    for weight in weights {
        total_weight = total_weight
            .checked_add(*weight as u128)
            .ok_or(SquadError::Overflow)?;
    }
    require!(total_weight > 0, SquadError::ZeroTotalWeight);

    let mut shares = Vec::with_capacity(weights.len());
    let mut distributed: u64 = 0;
    for weight in weights {
        let share = reward_share(vault_balance, *weight, total_weight)?;
        distributed = distributed.checked_add(share).ok_or(SquadError::Overflow)?;
        shares.push(share);
    }

    let remainder = vault_balance
        .checked_sub(distributed)
        .ok_or(SquadError::Underflow)?;

    Ok(DistributionPlan {
        total_weight,
        shares,
        distributed,
        remainder,
    })
}
