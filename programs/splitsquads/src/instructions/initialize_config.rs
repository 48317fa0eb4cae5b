// Initialize Config Instruction
//
// One-time setup: game config, community pot and the pot token vault.

use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::{constants::*, errors::*, events::ConfigInitialized, state::*};

#[derive(Accounts)]
pub struct InitializeConfig<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        init,
        payer = admin,
        space = ANCHOR_DISCRIMINATOR + GameConfig::INIT_SPACE,
        seeds = [CONFIG],
        bump
    )]
    pub config: Box<Account<'info, GameConfig>>,

    pub token_mint: Box<Account<'info, Mint>>,

    #[account(
        init,
        payer = admin,
        space = ANCHOR_DISCRIMINATOR + CommunityPot::INIT_SPACE,
        seeds = [COMMUNITY_POT],
        bump
    )]
    pub community_pot: Box<Account<'info, CommunityPot>>,

    #[account(
        init,
        payer = admin,
        seeds = [POT_VAULT],
        bump,
        token::mint = token_mint,
        token::authority = community_pot,
    )]
    pub pot_vault: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

impl<'info> InitializeConfig<'info> {
    pub fn initialize_config(
        &mut self,
        oracle: Pubkey,
        pot_release_bps: u16,
        bumps: &InitializeConfigBumps,
    ) -> Result<()> {
        require!(
            pot_release_bps as u64 <= BASIS_POINTS,
            SquadError::InvalidBasisPoints
        );

        self.config.set_inner(GameConfig {
            admin: self.admin.key(),
            oracle,
            token_mint: self.token_mint.key(),
            pot_release_bps,
            bump: bumps.config,
        });

        self.community_pot.set_inner(CommunityPot {
            balance: 0,
            total_slashed: 0,
            total_forfeited: 0,
            total_released: 0,
            vault: self.pot_vault.key(),
            bump: bumps.community_pot,
            vault_bump: bumps.pot_vault,
        });

        msg!("Config initialized, oracle {}", oracle);

        emit!(ConfigInitialized {
            admin: self.admin.key(),
            oracle,
            token_mint: self.token_mint.key(),
            pot_release_bps,
        });

        Ok(())
    }
}
