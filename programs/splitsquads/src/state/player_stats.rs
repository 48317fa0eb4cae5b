use anchor_lang::prelude::*;

use crate::{constants::SECONDS_PER_DAY, errors::SquadError};

// Per-wallet game history
// Seeds: ["player", player]
#[account]
#[derive(InitSpace, Default)]
pub struct PlayerStats {
    pub player: Pubkey,
    // Consecutive days with a successful reveal
    pub current_streak: u32,
    pub best_streak: u32,
    pub last_revealed_day: i64,
    pub games_played: u32,
    pub total_won: u64,
    pub bump: u8,
}

impl PlayerStats {
    pub fn record_reveal(&mut self, day_unix: i64) -> Result<()> {
        let continues = self.games_played > 0
            && day_unix.checked_sub(self.last_revealed_day) == Some(SECONDS_PER_DAY);

        self.current_streak = if continues {
            self.current_streak.checked_add(1).ok_or(SquadError::Overflow)?
        } else {
            1
        };
        self.best_streak = self.best_streak.max(self.current_streak);
        self.last_revealed_day = day_unix;
        self.games_played = self.games_played.checked_add(1).ok_or(SquadError::Overflow)?;
        Ok(())
    }

    pub fn record_payout(&mut self, amount: u64) -> Result<()> {
        self.total_won = self.total_won.checked_add(amount).ok_or(SquadError::Overflow)?;
        Ok(())
    }
}
