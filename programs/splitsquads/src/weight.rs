// Member reward weight
//
// weight = (stake / 1e6) * tenure_mult * squad_mult * activity_mult / 1e8
//
// Each multiplier is expressed in hundredths:
// - tenure:   100 at join, linear to 200 at 90 days
// - squad:    100 at 2 members, +4 per extra member (124 at 8)
// - activity: 50 + min(score, 100)
//
// The single division by 100_000_000 is the deployed behaviour and must not
// be "corrected" to 1_000_000; see DESIGN.md.

use anchor_lang::prelude::*;

use crate::{constants::*, errors::SquadError};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct WeightBreakdown {
    pub base_weight: u64,
    pub tenure_multiplier: u32,
    pub squad_multiplier: u32,
    pub activity_multiplier: u32,
    pub final_weight: u64,
}

pub fn tenure_multiplier(tenure_seconds: i64) -> u32 {
    let tenure = tenure_seconds.max(0);
    if tenure >= MAX_TENURE_SECONDS {
        200
    } else {
        // tenure < 90 days so tenure * 100 cannot overflow i64
        100 + (tenure * 100 / MAX_TENURE_SECONDS) as u32
    }
}

pub fn squad_multiplier(squad_size: u8) -> u32 {
    let extra = squad_size.max(MIN_SQUAD_SIZE) - MIN_SQUAD_SIZE;
    100 + extra as u32 * 4
}

pub fn activity_multiplier(activity_score: u32) -> u32 {
    50 + activity_score.min(MAX_ACTIVITY_SCORE)
}

pub fn weight_breakdown(
    stake_amount: u64,
    tenure_seconds: i64,
    squad_size: u8,
    activity_score: u32,
) -> Result<WeightBreakdown> {
    let base_weight = stake_amount / STAKE_UNIT;
    let tenure_multiplier = tenure_multiplier(tenure_seconds);
    let squad_multiplier = squad_multiplier(squad_size);
    let activity_multiplier = activity_multiplier(activity_score);

    let weight = (base_weight as u128)
        .checked_mul(tenure_multiplier as u128)
        .ok_or(SquadError::Overflow)?
        .checked_mul(squad_multiplier as u128)
        .ok_or(SquadError::Overflow)?
        .checked_mul(activity_multiplier as u128)
        .ok_or(SquadError::Overflow)?
        .checked_div(WEIGHT_DIVISOR)
        .ok_or(SquadError::DivisionByZero)?;

    let final_weight = u64::try_from(weight).map_err(|_| SquadError::Overflow)?;

    Ok(WeightBreakdown {
        base_weight,
        tenure_multiplier,
        squad_multiplier,
        activity_multiplier,
        final_weight,
    })
}

pub fn calculate_member_weight(
    stake_amount: u64,
    tenure_seconds: i64,
    squad_size: u8,
    activity_score: u32,
) -> Result<u64> {
    weight_breakdown(stake_amount, tenure_seconds, squad_size, activity_score)
        .map(|breakdown| breakdown.final_weight)
}
