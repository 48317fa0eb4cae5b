use anchor_lang::prelude::*;

use crate::{
    commitment::{day_start, phase_of_day, verify_reveal, Choice, Phase, SALT_LEN},
    errors::SquadError,
};

// One player's choice for one UTC day
// Seeds: ["choice", player, day_unix (le)]
//
// NoCommit -> Committed -> Revealed, each step exactly once.
// Failed reveals never touch the record.
#[account]
#[derive(InitSpace, Default)]
pub struct DailyChoice {
    pub player: Pubkey,
    pub day_unix: i64,
    pub commitment: [u8; 32],
    pub stake: u64,
    pub committed: bool,
    pub revealed: bool,
    // 0 = split, 1 = steal; meaningful only once revealed
    pub choice: u8,
    pub claimed: bool,
    pub bump: u8,
}

impl DailyChoice {
    pub fn commit(
        &mut self,
        player: Pubkey,
        day_unix: i64,
        commitment: [u8; 32],
        stake: u64,
        now: i64,
        bump: u8,
    ) -> Result<()> {
        require!(day_start(now) == day_unix, SquadError::InvalidDay);
        require!(
            phase_of_day(day_unix, now) == Some(Phase::Commit),
            SquadError::NotCommitPhase
        );
        require!(stake > 0, SquadError::InvalidAmount);
        require!(!self.committed && !self.revealed, SquadError::AlreadyCommitted);

        self.player = player;
        self.day_unix = day_unix;
        self.commitment = commitment;
        self.stake = stake;
        self.committed = true;
        self.revealed = false;
        self.choice = 0;
        self.claimed = false;
        self.bump = bump;
        Ok(())
    }

    pub fn reveal(&mut self, choice: u8, salt: &[u8; SALT_LEN], now: i64) -> Result<Choice> {
        require!(
            phase_of_day(self.day_unix, now) == Some(Phase::Reveal),
            SquadError::NotRevealPhase
        );
        require!(self.committed, SquadError::NotCommitted);
        require!(!self.revealed, SquadError::AlreadyRevealed);

        let choice = Choice::try_from(choice)?;
        require!(
            verify_reveal(&self.player, self.day_unix, choice, salt, &self.commitment),
            SquadError::CommitmentMismatch
        );

        self.revealed = true;
        self.choice = choice.as_u8();
        Ok(choice)
    }

    pub fn revealed_choice(&self) -> Option<Choice> {
        if !self.revealed {
            return None;
        }
        Choice::try_from(self.choice).ok()
    }

    pub fn mark_claimed(&mut self) -> Result<Choice> {
        let choice = self.revealed_choice().ok_or(SquadError::NotRevealed)?;
        require!(!self.claimed, SquadError::AlreadyClaimed);
        self.claimed = true;
        Ok(choice)
    }
}
