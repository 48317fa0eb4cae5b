use anchor_lang::prelude::*;

use crate::{constants::*, errors::*, events::ActivityScoreUpdated, state::*};

#[derive(Accounts)]
#[instruction(member_wallet: Pubkey)]
pub struct UpdateActivityScore<'info> {
    pub oracle: Signer<'info>,

    #[account(
        seeds = [CONFIG],
        bump = config.bump,
    )]
    pub config: Account<'info, GameConfig>,

    #[account(
        seeds = [SQUAD, squad.authority.as_ref(), squad.name.as_bytes()],
        bump = squad.bump,
    )]
    pub squad: Box<Account<'info, Squad>>,

    #[account(
        mut,
        seeds = [MEMBER, squad.key().as_ref(), member_wallet.as_ref()],
        bump = member.bump,
    )]
    pub member: Account<'info, Member>,
}

impl<'info> UpdateActivityScore<'info> {
    pub fn update_activity_score(&mut self, member_wallet: Pubkey, new_score: u32) -> Result<()> {
        require!(
            self.config.is_oracle(&self.oracle.key()),
            SquadError::UnauthorizedOracle
        );

        let now = Clock::get()?.unix_timestamp;
        self.member.set_activity_score(new_score, now)?;

        msg!("Activity score for {} set to {}", member_wallet, new_score);

        emit!(ActivityScoreUpdated {
            member: self.member.key(),
            authority: member_wallet,
            activity_score: new_score,
            timestamp: now,
        });

        Ok(())
    }
}
