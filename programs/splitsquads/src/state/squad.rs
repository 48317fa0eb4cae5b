use anchor_lang::prelude::*;

use crate::{constants::*, errors::SquadError, state::Member};

// Squad account
// Seeds: ["squad", authority, name]
//
// Invariants:
// - MIN_SQUAD_SIZE <= max_members <= MAX_SQUAD_SIZE
// - member_count <= max_members, and it only ever grows
// - total_staked == sum of stake_amount over the squad's members
#[account]
#[derive(InitSpace)]
pub struct Squad {
    // Creator, not a spending authority over member funds
    pub authority: Pubkey,

    // PDA seed component, immutable
    #[max_len(32)]
    pub name: String,

    pub max_members: u8,
    pub member_count: u8,
    pub total_staked: u64,

    // Token account holding undistributed rewards
    pub rewards_vault: Pubkey,

    pub bump: u8,

    // Token account holding member stakes
    pub squad_vault: Pubkey,

    pub mint: Pubkey,
    pub squad_vault_bump: u8,
    pub rewards_vault_bump: u8,
}

impl Squad {
    pub fn validate_params(name: &str, max_members: u8) -> Result<()> {
        require!(
            (MIN_SQUAD_SIZE..=MAX_SQUAD_SIZE).contains(&max_members),
            SquadError::InvalidSquadSize
        );
        require!(!name.is_empty(), SquadError::NameEmpty);
        require!(name.len() <= MAX_NAME_LEN, SquadError::NameTooLong);
        Ok(())
    }

    pub fn is_full(&self) -> bool {
        self.member_count >= self.max_members
    }

    // The only place member_count changes
    pub fn register_member(&mut self) -> Result<()> {
        require!(!self.is_full(), SquadError::SquadFull);
        self.member_count = self
            .member_count
            .checked_add(1)
            .ok_or(SquadError::Overflow)?;
        Ok(())
    }

    // Both counters are computed before either is written, so a failure
    // leaves the pair untouched.
    pub fn credit_stake(&mut self, member: &mut Member, amount: u64) -> Result<()> {
        require!(amount > 0, SquadError::InvalidAmount);

        let member_stake = member
            .stake_amount
            .checked_add(amount)
            .ok_or(SquadError::Overflow)?;
        let total_staked = self
            .total_staked
            .checked_add(amount)
            .ok_or(SquadError::Overflow)?;

        member.stake_amount = member_stake;
        self.total_staked = total_staked;
        Ok(())
    }

    pub fn debit_stake(&mut self, member: &mut Member, amount: u64) -> Result<()> {
        require!(amount > 0, SquadError::InvalidAmount);
        require!(member.stake_amount >= amount, SquadError::InsufficientStake);

        let member_stake = member
            .stake_amount
            .checked_sub(amount)
            .ok_or(SquadError::Underflow)?;
        let total_staked = self
            .total_staked
            .checked_sub(amount)
            .ok_or(SquadError::Underflow)?;

        member.stake_amount = member_stake;
        self.total_staked = total_staked;
        Ok(())
    }
}
