// Initialize Squad Instruction
//
// Creates the squad record together with its stake vault and rewards vault.
// Both vaults are token accounts owned by the squad PDA.

use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::{constants::*, errors::*, events::SquadInitialized, state::*};

#[derive(Accounts)]
#[instruction(name: String)]
pub struct InitializeSquad<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        seeds = [CONFIG],
        bump = config.bump,
    )]
    pub config: Box<Account<'info, GameConfig>>,

    #[account(
        address = config.token_mint @ SquadError::InvalidTokenMint
    )]
    pub mint: Box<Account<'info, Mint>>,

    // A name over 32 bytes cannot be a seed, so derivation fails here first
    #[account(
        init,
        payer = authority,
        space = ANCHOR_DISCRIMINATOR + Squad::INIT_SPACE,
        seeds = [SQUAD, authority.key().as_ref(), name.as_bytes()],
        bump
    )]
    pub squad: Box<Account<'info, Squad>>,

    #[account(
        init,
        payer = authority,
        seeds = [SQUAD_VAULT, squad.key().as_ref()],
        bump,
        token::mint = mint,
        token::authority = squad,
    )]
    pub squad_vault: Box<Account<'info, TokenAccount>>,

    #[account(
        init,
        payer = authority,
        seeds = [REWARDS_VAULT, squad.key().as_ref()],
        bump,
        token::mint = mint,
        token::authority = squad,
    )]
    pub rewards_vault: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

impl<'info> InitializeSquad<'info> {
    pub fn initialize_squad(
        &mut self,
        name: String,
        max_members: u8,
        bumps: &InitializeSquadBumps,
    ) -> Result<()> {
        Squad::validate_params(&name, max_members)?;

        self.squad.set_inner(Squad {
            authority: self.authority.key(),
            name: name.clone(),
            max_members,
            member_count: 0,
            total_staked: 0,
            rewards_vault: self.rewards_vault.key(),
            bump: bumps.squad,
            squad_vault: self.squad_vault.key(),
            mint: self.mint.key(),
            squad_vault_bump: bumps.squad_vault,
            rewards_vault_bump: bumps.rewards_vault,
        });

        msg!(
            "Squad {} created by {} with {} slots",
            name,
            self.authority.key(),
            max_members
        );

        emit!(SquadInitialized {
            squad: self.squad.key(),
            authority: self.authority.key(),
            name,
            max_members,
        });

        Ok(())
    }
}
