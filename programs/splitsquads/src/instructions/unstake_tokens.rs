use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::{
    constants::*, errors::*, events::TokensUnstaked, helpers::transfer_from_vault, state::*,
};

#[derive(Accounts)]
pub struct UnstakeTokens<'info> {
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

    // Destination
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

impl<'info> UnstakeTokens<'info> {
    pub fn unstake_tokens(&mut self, amount: u64) -> Result<()> {
        // InvalidAmount / InsufficientStake before any arithmetic
        self.squad.debit_stake(&mut self.member, amount)?;

        // Vault is owned by the squad PDA
        let squad_authority = self.squad.authority;
        let name = self.squad.name.clone();
        let bump = [self.squad.bump];
        let squad_seeds: &[&[u8]] = &[SQUAD, squad_authority.as_ref(), name.as_bytes(), &bump];

        transfer_from_vault(
            amount,
            &self.token_program.to_account_info(),
            &self.squad_vault.to_account_info(),
            &self.user_token_account.to_account_info(),
            &self.squad.to_account_info(),
            squad_seeds,
        )?;

        msg!("Unstaked {} from squad {}", amount, name);

        emit!(TokensUnstaked {
            squad: self.squad.key(),
            authority: self.authority.key(),
            amount,
            stake_amount: self.member.stake_amount,
            total_staked: self.squad.total_staked,
        });

        Ok(())
    }
}
