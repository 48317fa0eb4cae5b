use anchor_lang::prelude::*;

use crate::{constants::MAX_ACTIVITY_SCORE, errors::SquadError, weight::calculate_member_weight};

// Member account, one per (squad, wallet)
// Seeds: ["member", squad, authority]
#[account]
#[derive(InitSpace)]
pub struct Member {
    // Owning squad (lookup reference)
    pub squad: Pubkey,
    pub authority: Pubkey,
    pub stake_amount: u64,
    // Set once on join
    pub join_timestamp: i64,
    // Written only by the oracle
    pub last_activity_timestamp: i64,
    pub activity_score: u32,
    pub bump: u8,
}

impl Member {
    pub fn new(squad: Pubkey, authority: Pubkey, now: i64, bump: u8) -> Self {
        Member {
            squad,
            authority,
            stake_amount: 0,
            join_timestamp: now,
            last_activity_timestamp: now,
            activity_score: 0,
            bump,
        }
    }

    pub fn tenure(&self, now: i64) -> i64 {
        now.saturating_sub(self.join_timestamp).max(0)
    }

    pub fn set_activity_score(&mut self, score: u32, now: i64) -> Result<()> {
        require!(score <= MAX_ACTIVITY_SCORE, SquadError::InvalidActivityScore);
        self.activity_score = score;
        self.last_activity_timestamp = now;
        Ok(())
    }

    pub fn weight(&self, now: i64, squad_size: u8) -> Result<u64> {
        calculate_member_weight(
            self.stake_amount,
            self.tenure(now),
            squad_size,
            self.activity_score,
        )
    }
}
