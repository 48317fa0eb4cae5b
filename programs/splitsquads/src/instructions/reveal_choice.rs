use anchor_lang::prelude::*;

use crate::{commitment::SALT_LEN, constants::*, events::ChoiceRevealed, state::*};

#[derive(Accounts)]
#[instruction(day_unix: i64)]
pub struct RevealChoice<'info> {
    pub player: Signer<'info>,

    #[account(
        mut,
        seeds = [CHOICE, player.key().as_ref(), day_unix.to_le_bytes().as_ref()],
        bump = daily_choice.bump,
    )]
    pub daily_choice: Box<Account<'info, DailyChoice>>,

    #[account(
        mut,
        seeds = [ROUND, day_unix.to_le_bytes().as_ref()],
        bump = daily_round.bump,
    )]
    pub daily_round: Box<Account<'info, DailyRound>>,

    #[account(
        mut,
        seeds = [PLAYER, player.key().as_ref()],
        bump = player_stats.bump,
    )]
    pub player_stats: Box<Account<'info, PlayerStats>>,
}

impl<'info> RevealChoice<'info> {
    pub fn reveal_choice(&mut self, day_unix: i64, choice: u8, salt: [u8; SALT_LEN]) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;

        // Rejects phase, state and hash failures without touching the record
        let choice = self.daily_choice.reveal(choice, &salt, now)?;
        let stake = self.daily_choice.stake;

        self.daily_round.record_reveal(choice, stake)?;
        self.player_stats.record_reveal(day_unix)?;

        msg!("{} revealed {:?} for day {}", self.player.key(), choice, day_unix);

        emit!(ChoiceRevealed {
            player: self.player.key(),
            day_unix,
            choice: choice.as_u8(),
            stake,
            current_streak: self.player_stats.current_streak,
        });

        Ok(())
    }
}
