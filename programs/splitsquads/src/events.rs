use anchor_lang::prelude::*;

#[event]
pub struct ConfigInitialized {
    pub admin: Pubkey,
    pub oracle: Pubkey,
    pub token_mint: Pubkey,
    pub pot_release_bps: u16,
}

#[event]
pub struct OracleUpdated {
    pub previous: Pubkey,
    pub oracle: Pubkey,
}

#[event]
pub struct SquadInitialized {
    pub squad: Pubkey,
    pub authority: Pubkey,
    pub name: String,
    pub max_members: u8,
}

#[event]
pub struct MemberJoined {
    pub squad: Pubkey,
    pub member: Pubkey,
    pub authority: Pubkey,
    pub member_count: u8,
    pub timestamp: i64,
}

#[event]
pub struct TokensStaked {
    pub squad: Pubkey,
    pub authority: Pubkey,
    pub amount: u64,
    pub stake_amount: u64,
    pub total_staked: u64,
}

#[event]
pub struct TokensUnstaked {
    pub squad: Pubkey,
    pub authority: Pubkey,
    pub amount: u64,
    pub stake_amount: u64,
    pub total_staked: u64,
}

#[event]
pub struct ActivityScoreUpdated {
    pub member: Pubkey,
    pub authority: Pubkey,
    pub activity_score: u32,
    pub timestamp: i64,
}

#[event]
pub struct RewardsDistributed {
    pub squad: Pubkey,
    pub vault_balance: u64,
    pub distributed: u64,
    pub remainder: u64,
    pub member_count: u8,
}

#[event]
pub struct ChoiceCommitted {
    pub player: Pubkey,
    pub day_unix: i64,
    pub commitment: [u8; 32],
    pub stake: u64,
}

#[event]
pub struct ChoiceRevealed {
    pub player: Pubkey,
    pub day_unix: i64,
    pub choice: u8,
    pub stake: u64,
    pub current_streak: u32,
}

#[event]
pub struct DaySettled {
    pub day_unix: i64,
    pub split_pool: u64,
    pub steal_pool: u64,
    pub captured: u64,
    pub slashed: u64,
    pub forfeited: u64,
    pub pot_bonus: u64,
    pub pot_balance: u64,
}

#[event]
pub struct PayoutClaimed {
    pub player: Pubkey,
    pub day_unix: i64,
    pub choice: u8,
    pub amount: u64,
}
