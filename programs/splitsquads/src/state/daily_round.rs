use anchor_lang::prelude::*;

use crate::{
    commitment::{settlement_opens, Choice},
    errors::SquadError,
    settlement::{payout_for, settle_round, RoundTally, Settlement},
};

// Aggregates for one UTC day of the split-or-steal game
// Seeds: ["round", day_unix (le)]
#[account]
#[derive(InitSpace, Default)]
pub struct DailyRound {
    pub day_unix: i64,

    pub commit_count: u32,
    pub reveal_count: u32,
    pub split_count: u32,
    pub steal_count: u32,

    pub total_committed: u64,
    pub split_stake: u64,
    pub steal_stake: u64,

    pub settled: bool,

    // Filled in by settlement
    pub split_pool: u64,
    pub steal_pool: u64,
    pub captured: u64,
    pub slashed: u64,
    pub forfeited: u64,
    pub pot_bonus: u64,

    pub claim_count: u32,
    pub total_claimed: u64,
    // Rounding remainder returned to the pot by the last claim
    pub swept: u64,
    pub bump: u8,
}

impl DailyRound {
    pub fn record_commit(&mut self, stake: u64) -> Result<()> {
        let commit_count = self.commit_count.checked_add(1).ok_or(SquadError::Overflow)?;
        let total_committed = self
            .total_committed
            .checked_add(stake)
            .ok_or(SquadError::Overflow)?;

        self.commit_count = commit_count;
        self.total_committed = total_committed;
        Ok(())
    }

    pub fn record_reveal(&mut self, choice: Choice, stake: u64) -> Result<()> {
        let reveal_count = self.reveal_count.checked_add(1).ok_or(SquadError::Overflow)?;
        match choice {
            Choice::Split => {
                self.split_count = self.split_count.checked_add(1).ok_or(SquadError::Overflow)?;
                self.split_stake = self.split_stake.checked_add(stake).ok_or(SquadError::Overflow)?;
            }
            Choice::Steal => {
                self.steal_count = self.steal_count.checked_add(1).ok_or(SquadError::Overflow)?;
                self.steal_stake = self.steal_stake.checked_add(stake).ok_or(SquadError::Overflow)?;
            }
        }
        self.reveal_count = reveal_count;
        Ok(())
    }

    pub fn tally(&self) -> Result<RoundTally> {
        let revealed = self
            .split_stake
            .checked_add(self.steal_stake)
            .ok_or(SquadError::Overflow)?;
        let forfeited = self
            .total_committed
            .checked_sub(revealed)
            .ok_or(SquadError::Underflow)?;

        Ok(RoundTally {
            split_count: self.split_count,
            steal_count: self.steal_count,
            split_stake: self.split_stake,
            steal_stake: self.steal_stake,
            forfeited,
        })
    }

    pub fn settle(&mut self, pot_balance: u64, pot_release_bps: u16, now: i64) -> Result<Settlement> {
        require!(now >= settlement_opens(self.day_unix), SquadError::NotSettlementPhase);
        require!(!self.settled, SquadError::RoundAlreadySettled);

        let settlement = settle_round(&self.tally()?, pot_balance, pot_release_bps)?;

        self.settled = true;
        self.split_pool = settlement.split_pool;
        self.steal_pool = settlement.steal_pool;
        self.captured = settlement.captured;
        self.slashed = settlement.slashed;
        self.forfeited = settlement.forfeited;
        self.pot_bonus = settlement.pot_bonus;
        Ok(settlement)
    }

    pub fn payout_for(&self, choice: Choice, stake: u64) -> Result<u64> {
        require!(self.settled, SquadError::RoundNotSettled);
        payout_for(
            choice,
            stake,
            (self.split_pool, self.steal_pool),
            (self.split_stake, self.steal_stake),
        )
    }

    // Returns the rounding remainder once every revealer has claimed
    pub fn record_claim(&mut self, amount: u64) -> Result<u64> {
        let claim_count = self.claim_count.checked_add(1).ok_or(SquadError::Overflow)?;
        require!(claim_count <= self.reveal_count, SquadError::AlreadyClaimed);
        self.total_claimed = self
            .total_claimed
            .checked_add(amount)
            .ok_or(SquadError::Overflow)?;
        self.claim_count = claim_count;

        if claim_count < self.reveal_count {
            return Ok(0);
        }
        let dust = self.outstanding()?;
        self.swept = dust;
        Ok(dust)
    }

    // Tokens the pot vault still owes to this round's players
    pub fn outstanding(&self) -> Result<u64> {
        if !self.settled {
            return Ok(self.total_committed);
        }
        self.split_pool
            .checked_add(self.steal_pool)
            .ok_or(SquadError::Overflow)?
            .checked_sub(self.total_claimed)
            .ok_or(SquadError::Underflow)?
            .checked_sub(self.swept)
            .ok_or(error!(SquadError::Underflow))
    }
}
