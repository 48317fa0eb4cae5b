use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::{
    constants::*, errors::*, events::PayoutClaimed, helpers::transfer_from_vault, state::*,
};

#[derive(Accounts)]
#[instruction(day_unix: i64)]
pub struct ClaimPayout<'info> {
    pub player: Signer<'info>,

    #[account(
        seeds = [CONFIG],
        bump = config.bump,
    )]
    pub config: Box<Account<'info, GameConfig>>,

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

    #[account(
        mut,
        seeds = [COMMUNITY_POT],
        bump = community_pot.bump,
    )]
    pub community_pot: Box<Account<'info, CommunityPot>>,

    #[account(
        mut,
        address = community_pot.vault @ SquadError::InvalidTokenAccount
    )]
    pub pot_vault: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        constraint = player_token_account.mint == config.token_mint @ SquadError::InvalidTokenAccount,
        constraint = player_token_account.owner == player.key() @ SquadError::InvalidTokenAccount,
    )]
    pub player_token_account: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
}

impl<'info> ClaimPayout<'info> {
    pub fn claim_payout(&mut self, day_unix: i64) -> Result<()> {
        require!(self.daily_round.settled, SquadError::RoundNotSettled);

        let choice = self.daily_choice.mark_claimed()?;
        let amount = self.daily_round.payout_for(choice, self.daily_choice.stake)?;

        let remainder = self.daily_round.record_claim(amount)?;
        if remainder > 0 {
            self.community_pot.credit_remainder(remainder)?;
            msg!("Returned {} of rounding to the pot for day {}", remainder, day_unix);
        }
        self.player_stats.record_payout(amount)?;

        if amount > 0 {
            let bump = [self.community_pot.bump];
            let pot_seeds: &[&[u8]] = &[COMMUNITY_POT, &bump];

            transfer_from_vault(
                amount,
                &self.token_program.to_account_info(),
                &self.pot_vault.to_account_info(),
                &self.player_token_account.to_account_info(),
                &self.community_pot.to_account_info(),
                pot_seeds,
            )?;
        }

        msg!("{} claimed {} for day {}", self.player.key(), amount, day_unix);

        emit!(PayoutClaimed {
            player: self.player.key(),
            day_unix,
            choice: choice.as_u8(),
            amount,
        });

        Ok(())
    }
}
