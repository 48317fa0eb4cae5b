use anchor_lang::prelude::*;

use crate::{constants::*, events::MemberJoined, state::*};

#[derive(Accounts)]
pub struct JoinSquad<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [SQUAD, squad.authority.as_ref(), squad.name.as_bytes()],
        bump = squad.bump,
    )]
    pub squad: Box<Account<'info, Squad>>,

    // init fails if this wallet already joined
    #[account(
        init,
        payer = authority,
        space = ANCHOR_DISCRIMINATOR + Member::INIT_SPACE,
        seeds = [MEMBER, squad.key().as_ref(), authority.key().as_ref()],
        bump
    )]
    pub member: Box<Account<'info, Member>>,

    pub system_program: Program<'info, System>,
}

impl<'info> JoinSquad<'info> {
    pub fn join_squad(&mut self, bumps: &JoinSquadBumps) -> Result<()> {
        // Two joins racing for the last slot are serialized by the runtime's
        // write lock on the squad account.
        self.squad.register_member()?;

        let now = Clock::get()?.unix_timestamp;
        self.member.set_inner(Member::new(
            self.squad.key(),
            self.authority.key(),
            now,
            bumps.member,
        ));

        msg!(
            "{} joined squad {} ({}/{})",
            self.authority.key(),
            self.squad.name,
            self.squad.member_count,
            self.squad.max_members
        );

        emit!(MemberJoined {
            squad: self.squad.key(),
            member: self.member.key(),
            authority: self.authority.key(),
            member_count: self.squad.member_count,
            timestamp: now,
        });

        Ok(())
    }
}
