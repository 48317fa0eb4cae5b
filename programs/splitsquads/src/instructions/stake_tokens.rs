use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::{constants::*, errors::*, events::TokensStaked, helpers::transfer_tokens, state::*};

#[derive(Accounts)]
pub struct StakeTokens<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [SQUAD, squad.authority.as_ref(), squad.name.as_bytes()],
        bump = squad.bump,
    )]
    pub squad: Box<Account<'info, Squad>>,

    #[account(
        mut,
        seeds = [MEMBER, squad.key().as_ref(), authority.key().as_ref()],
        bump = member.bump,
        has_one = squad @ SquadError::InvalidMemberAccount,
        has_one = authority @ SquadError::InvalidMemberAccount,
    )]
    pub member: Box<Account<'info, Member>>,

    // Source of the stake
    #[account(
        mut,
        constraint = user_token_account.mint == squad.mint @ SquadError::InvalidTokenAccount,
        constraint = user_token_account.owner == authority.key() @ SquadError::InvalidTokenAccount,
    )]
    pub user_token_account: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        address = squad.squad_vault @ SquadError::InvalidTokenAccount
    )]
    pub squad_vault: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
}

impl<'info> StakeTokens<'info> {
    pub fn stake_tokens(&mut self, amount: u64) -> Result<()> {
        // Counters first; the transfer below either lands or reverts them
        self.squad.credit_stake(&mut self.member, amount)?;

        transfer_tokens(
            amount,
            &self.token_program.to_account_info(),
            &self.user_token_account.to_account_info(),
            &self.squad_vault.to_account_info(),
            &self.authority.to_account_info(),
        )?;

        msg!("Staked {} into squad {}", amount, self.squad.name);

        emit!(TokensStaked {
            squad: self.squad.key(),
            authority: self.authority.key(),
            amount,
            stake_amount: self.member.stake_amount,
            total_staked: self.squad.total_staked,
        });

        Ok(())
    }
}
