// Distribute Rewards Instruction
//
// Permissionless. Splits the whole rewards vault balance across the squad's
// members in proportion to their weight.
//
// Remaining accounts, one pair per member:
//   [member PDA, member's token account (writable)]
// Every member of the squad must appear exactly once. The truncation
// remainder stays in the vault for the next distribution.

use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::{
    constants::*, distribution::plan_distribution, errors::*, events::RewardsDistributed,
    helpers::transfer_from_vault, state::*,
};

#[derive(Accounts)]
pub struct DistributeRewards<'info> {
    pub caller: Signer<'info>,

    #[account(
        seeds = [SQUAD, squad.authority.as_ref(), squad.name.as_bytes()],
        bump = squad.bump,
    )]
    pub squad: Box<Account<'info, Squad>>,

    #[account(
        mut,
        address = squad.rewards_vault @ SquadError::InvalidTokenAccount
    )]
    pub rewards_vault: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
}

impl<'info> DistributeRewards<'info> {
    pub fn distribute_rewards(&mut self, remaining_accounts: &'info [AccountInfo<'info>]) -> Result<()> {
        let member_count = self.squad.member_count;
        require!(member_count > 0, SquadError::NoMembers);

        let vault_balance = self.rewards_vault.amount;
        require!(vault_balance > 0, SquadError::NoRewards);

        require!(
            remaining_accounts.len() == member_count as usize * 2,
            SquadError::MemberListMismatch
        );

        let now = Clock::get()?.unix_timestamp;
        let squad_key = self.squad.key();

        // Validate every pair and collect weights before moving any tokens
        let mut seen: Vec<Pubkey> = Vec::with_capacity(member_count as usize);
        let mut weights: Vec<u64> = Vec::with_capacity(member_count as usize);

        for pair in remaining_accounts.chunks_exact(2) {
            let member_info = &pair[0];
            let token_info = &pair[1];

            let member = Account::<Member>::try_from(member_info)
                .map_err(|_| error!(SquadError::InvalidMemberAccount))?;
            require_keys_eq!(member.squad, squad_key, SquadError::InvalidMemberAccount);
            require!(!seen.contains(&member_info.key()), SquadError::DuplicateMember);
            seen.push(member_info.key());

            let token_account = Account::<TokenAccount>::try_from(token_info)
                .map_err(|_| error!(SquadError::InvalidTokenAccount))?;
            require_keys_eq!(token_account.mint, self.squad.mint, SquadError::InvalidTokenAccount);
            require_keys_eq!(token_account.owner, member.authority, SquadError::InvalidTokenAccount);
            require!(token_info.is_writable, SquadError::InvalidTokenAccount);

            weights.push(member.weight(now, member_count)?);
        }

        let plan = plan_distribution(vault_balance, &weights)?;

        let squad_authority = self.squad.authority;
        let name = self.squad.name.clone();
        let bump = [self.squad.bump];
        let squad_seeds: &[&[u8]] = &[SQUAD, squad_authority.as_ref(), name.as_bytes(), &bump];

        let token_program = self.token_program.to_account_info();
        let vault = self.rewards_vault.to_account_info();
        let squad_info = self.squad.to_account_info();

        for (pair, share) in remaining_accounts.chunks_exact(2).zip(plan.shares.iter()) {
            if *share == 0 {
                continue;
            }
            transfer_from_vault(*share, &token_program, &vault, &pair[1], &squad_info, squad_seeds)?;
        }

        msg!(
            "Distributed {} of {} to {} members, {} left in vault",
            plan.distributed,
            vault_balance,
            member_count,
            plan.remainder
        );

        emit!(RewardsDistributed {
            squad: squad_key,
            vault_balance,
            distributed: plan.distributed,
            remainder: plan.remainder,
            member_count,
        });

        Ok(())
    }
}
