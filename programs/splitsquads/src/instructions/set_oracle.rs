use anchor_lang::prelude::*;

use crate::{constants::*, errors::*, events::OracleUpdated, state::*};

#[derive(Accounts)]
pub struct SetOracle<'info> {
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [CONFIG],
        bump = config.bump,
        constraint = config.admin == admin.key() @ SquadError::UnauthorizedAdmin
    )]
    pub config: Account<'info, GameConfig>,
}

impl<'info> SetOracle<'info> {
    pub fn set_oracle(&mut self, new_oracle: Pubkey) -> Result<()> {
        let previous = self.config.oracle;
        self.config.oracle = new_oracle;

        msg!("Oracle changed from {} to {}", previous, new_oracle);

        emit!(OracleUpdated {
            previous,
            oracle: new_oracle,
        });

        Ok(())
    }
}
