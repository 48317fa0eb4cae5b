use anchor_lang::prelude::*;

use crate::{errors::SquadError, settlement::Settlement};

// Shared pot for the daily game
// Seeds: ["community_pot"], vault seeds: ["pot_vault"]
//
// The vault also escrows stakes of rounds that are open or unclaimed, so
// vault.amount == balance + sum of round liabilities.
#[account]
#[derive(InitSpace)]
pub struct CommunityPot {
    pub balance: u64,
    pub total_slashed: u64,
    pub total_forfeited: u64,
    pub total_released: u64,
    pub vault: Pubkey,
    pub bump: u8,
    pub vault_bump: u8,
}

impl CommunityPot {
    pub fn apply_settlement(&mut self, settlement: &Settlement) -> Result<()> {
        let total_slashed = self
            .total_slashed
            .checked_add(settlement.slashed)
            .ok_or(SquadError::Overflow)?;
        let total_forfeited = self
            .total_forfeited
            .checked_add(settlement.forfeited)
            .ok_or(SquadError::Overflow)?;
        let total_released = self
            .total_released
            .checked_add(settlement.pot_bonus)
            .ok_or(SquadError::Overflow)?;

        self.balance = settlement.pot_after;
        self.total_slashed = total_slashed;
        self.total_forfeited = total_forfeited;
        self.total_released = total_released;
        Ok(())
    }

    // Rounding remainder left in the vault after a round's last claim
    pub fn credit_remainder(&mut self, amount: u64) -> Result<()> {
        self.balance = self.balance.checked_add(amount).ok_or(SquadError::Overflow)?;
        Ok(())
    }
}
