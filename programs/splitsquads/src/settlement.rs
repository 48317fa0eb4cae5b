// Daily pot settlement
//
// Two players:
//   Split / Split -> both keep their stake, cooperation bonus from the pot
//   Split / Steal -> stealer captures part of the splitter's stake
//   Steal / Steal -> both stakes are slashed into the community pot
//
// N players, by stake volume:
//   matched  = min(split, steal)             split stake facing a stealer
//   capture  = matched * STEAL_CAPTURE_BPS   moved from splitters to stealers
//   slashed  = (steal - matched) * STEAL_SLASH_BPS
//                                            steal stake with nobody to rob
//   bonus    = pot * release_bps             only when someone split
//
// Committed but unrevealed stake is forfeited to the pot. With fewer than
// two revealed players there is no contest and stakes are returned.

use anchor_lang::prelude::*;

use crate::{commitment::Choice, constants::*, errors::SquadError};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RoundTally {
    pub split_count: u32,
    pub steal_count: u32,
    pub split_stake: u64,
    pub steal_stake: u64,
    pub forfeited: u64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Settlement {
    pub split_pool: u64,
    pub steal_pool: u64,
    pub captured: u64,
    pub slashed: u64,
    pub forfeited: u64,
    pub pot_bonus: u64,
    pub pot_after: u64,
}

fn apply_bps(amount: u64, bps: u64) -> Result<u64> {
    let scaled = (amount as u128)
        .checked_mul(bps as u128)
        .ok_or(SquadError::Overflow)?
        .checked_div(BASIS_POINTS as u128)
        .ok_or(SquadError::DivisionByZero)?;
    u64::try_from(scaled).map_err(|_| error!(SquadError::Overflow))
}

pub fn settle_round(tally: &RoundTally, pot_balance: u64, pot_release_bps: u16) -> Result<Settlement> {
    require!(pot_release_bps as u64 <= BASIS_POINTS, SquadError::InvalidBasisPoints);

    let revealed_players = tally
        .split_count
        .checked_add(tally.steal_count)
        .ok_or(SquadError::Overflow)?;

    let pot_with_forfeits = pot_balance
        .checked_add(tally.forfeited)
        .ok_or(SquadError::Overflow)?;

    if revealed_players < 2 {
        return Ok(Settlement {
            split_pool: tally.split_stake,
            steal_pool: tally.steal_stake,
            forfeited: tally.forfeited,
            pot_after: pot_with_forfeits,
            ..Settlement::default()
        });
    }

    let matched = tally.split_stake.min(tally.steal_stake);
    let captured = apply_bps(matched, STEAL_CAPTURE_BPS)?;
    let unmatched_steal = tally
        .steal_stake
        .checked_sub(matched)
        .ok_or(SquadError::Underflow)?;
    let slashed = apply_bps(unmatched_steal, STEAL_SLASH_BPS)?;

    let pot_bonus = if tally.split_stake > 0 {
        apply_bps(pot_balance, pot_release_bps as u64)?
    } else {
        0
    };

    let split_pool = tally
        .split_stake
        .checked_sub(captured)
        .ok_or(SquadError::Underflow)?
        .checked_add(pot_bonus)
        .ok_or(SquadError::Overflow)?;

    let steal_pool = tally
        .steal_stake
        .checked_sub(slashed)
        .ok_or(SquadError::Underflow)?
        .checked_add(captured)
        .ok_or(SquadError::Overflow)?;

    let pot_after = pot_with_forfeits
        .checked_sub(pot_bonus)
        .ok_or(SquadError::Underflow)?
        .checked_add(slashed)
        .ok_or(SquadError::Overflow)?;

    Ok(Settlement {
        split_pool,
        steal_pool,
        captured,
        slashed,
        forfeited: tally.forfeited,
        pot_bonus,
        pot_after,
    })
}

// A revealed player's share of the pool for their side
pub fn payout_for(
    choice: Choice,
    stake: u64,
    settlement_pools: (u64, u64),
    side_stakes: (u64, u64),
) -> Result<u64> {
    let (pool, side_stake) = match choice {
        Choice::Split => (settlement_pools.0, side_stakes.0),
        Choice::Steal => (settlement_pools.1, side_stakes.1),
    };
    if side_stake == 0 {
        return Ok(0);
    }
    let payout = (pool as u128)
        .checked_mul(stake as u128)
        .ok_or(SquadError::Overflow)?
        .checked_div(side_stake as u128)
        .ok_or(SquadError::DivisionByZero)?;
    u64::try_from(payout).map_err(|_| error!(SquadError::Overflow))
}
