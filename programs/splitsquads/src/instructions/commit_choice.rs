// Commit Choice Instruction
//
// Locks a hidden split/steal choice for today and escrows the stake in the
// pot vault. The round and player records are created on first use.

use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::{constants::*, errors::*, events::ChoiceCommitted, helpers::transfer_tokens, state::*};

#[derive(Accounts)]
#[instruction(day_unix: i64)]
pub struct CommitChoice<'info> {
    #[account(mut)]
    pub player: Signer<'info>,

    #[account(
        seeds = [CONFIG],
        bump = config.bump,
    )]
    pub config: Box<Account<'info, GameConfig>>,

    #[account(
        init_if_needed,
        payer = player,
        space = ANCHOR_DISCRIMINATOR + DailyChoice::INIT_SPACE,
        seeds = [CHOICE, player.key().as_ref(), day_unix.to_le_bytes().as_ref()],
        bump
    )]
    pub daily_choice: Box<Account<'info, DailyChoice>>,

    #[account(
        init_if_needed,
        payer = player,
        space = ANCHOR_DISCRIMINATOR + DailyRound::INIT_SPACE,
        seeds = [ROUND, day_unix.to_le_bytes().as_ref()],
        bump
    )]
    pub daily_round: Box<Account<'info, DailyRound>>,

    #[account(
        init_if_needed,
        payer = player,
        space = ANCHOR_DISCRIMINATOR + PlayerStats::INIT_SPACE,
        seeds = [PLAYER, player.key().as_ref()],
        bump
    )]
    pub player_stats: Box<Account<'info, PlayerStats>>,

    #[account(
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
    pub system_program: Program<'info, System>,
}

impl<'info> CommitChoice<'info> {
    pub fn commit_choice(
        &mut self,
        day_unix: i64,
        commitment: [u8; 32],
        stake: u64,
        bumps: &CommitChoiceBumps,
    ) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;
        let player = self.player.key();

        self.daily_choice
            .commit(player, day_unix, commitment, stake, now, bumps.daily_choice)?;

        // Fresh accounts from init_if_needed are zeroed
        if self.daily_round.commit_count == 0 {
            self.daily_round.day_unix = day_unix;
            self.daily_round.bump = bumps.daily_round;
        }
        self.daily_round.record_commit(stake)?;

        if self.player_stats.player == Pubkey::default() {
            self.player_stats.player = player;
            self.player_stats.bump = bumps.player_stats;
        }

        transfer_tokens(
            stake,
            &self.token_program.to_account_info(),
            &self.player_token_account.to_account_info(),
            &self.pot_vault.to_account_info(),
            &self.player.to_account_info(),
        )?;

        msg!("{} committed {} for day {}", player, stake, day_unix);

        emit!(ChoiceCommitted {
            player,
            day_unix,
            commitment,
            stake,
        });

        Ok(())
    }
}
