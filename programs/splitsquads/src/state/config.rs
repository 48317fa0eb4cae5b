use anchor_lang::prelude::*;

// Program-wide settings, one per deployment
// The oracle key lives here instead of in an environment variable so the
// only way to change it is the admin-gated set_oracle instruction.
#[account]
#[derive(InitSpace)]
pub struct GameConfig {
    pub admin: Pubkey,
    // Sole signer allowed to push activity scores
    pub oracle: Pubkey,
    // Mint used for squad stakes, rewards and the daily game
    pub token_mint: Pubkey,
    // Share of the community pot released to splitters at each settlement
    pub pot_release_bps: u16,
    pub bump: u8,
}

impl GameConfig {
    pub fn is_oracle(&self, key: &Pubkey) -> bool {
        &self.oracle == key
    }
}
