// SplitSquads
//
// Squads of 2-8 wallets stake a shared token, earn a weight from stake,
// tenure, squad size and oracle-reported activity, and split the squad's
// rewards vault by weight. A separate daily commit-reveal game lets any
// wallet stake on a hidden split/steal choice settled against a community
// pot.
//
// Instructions:
// - initialize_config / set_oracle: game mint, oracle key, pot
// - initialize_squad / join_squad: squad lifecycle
// - stake_tokens / unstake_tokens: member stake accounting
// - update_activity_score: oracle-only activity input
// - distribute_rewards: weighted payout of the rewards vault
// - commit_choice / reveal_choice / settle_day / claim_payout: daily game

use anchor_lang::prelude::*;

pub mod commitment;
pub mod constants;
pub mod distribution;
pub mod errors;
pub mod events;
pub mod helpers;
pub mod instructions;
pub mod settlement;
pub mod state;
pub mod weight;

pub use constants::*;
pub use errors::*;
pub use instructions::*;
pub use state::*;

declare_id!("ByeMrs3uXEFWcZP7PQWJc8CzXoiqUmYcGZCsxLxqmB22");

#[program]
pub mod splitsquads {
    use super::*;

    // Admin sets the game mint, oracle and pot release rate
    pub fn initialize_config(
        ctx: Context<InitializeConfig>,
        oracle: Pubkey,
        pot_release_bps: u16,
    ) -> Result<()> {
        ctx.accounts.initialize_config(oracle, pot_release_bps, &ctx.bumps)
    }

    pub fn set_oracle(ctx: Context<SetOracle>, new_oracle: Pubkey) -> Result<()> {
        ctx.accounts.set_oracle(new_oracle)
    }

    pub fn initialize_squad(
        ctx: Context<InitializeSquad>,
        name: String,
        max_members: u8,
    ) -> Result<()> {
        ctx.accounts.initialize_squad(name, max_members, &ctx.bumps)
    }

    pub fn join_squad(ctx: Context<JoinSquad>) -> Result<()> {
        ctx.accounts.join_squad(&ctx.bumps)
    }

    pub fn stake_tokens(ctx: Context<StakeTokens>, amount: u64) -> Result<()> {
        ctx.accounts.stake_tokens(amount)
    }

    pub fn unstake_tokens(ctx: Context<UnstakeTokens>, amount: u64) -> Result<()> {
        ctx.accounts.unstake_tokens(amount)
    }

    // Signer must be the configured oracle
    pub fn update_activity_score(
        ctx: Context<UpdateActivityScore>,
        member_wallet: Pubkey,
        new_score: u32,
    ) -> Result<()> {
        ctx.accounts.update_activity_score(member_wallet, new_score)
    }

    // Remaining accounts: (member, member token account) per squad member
    pub fn distribute_rewards<'info>(
        ctx: Context<'_, '_, 'info, 'info, DistributeRewards<'info>>,
    ) -> Result<()> {
        ctx.accounts.distribute_rewards(ctx.remaining_accounts)
    }

    pub fn commit_choice(
        ctx: Context<CommitChoice>,
        day_unix: i64,
        commitment: [u8; 32],
        stake: u64,
    ) -> Result<()> {
        ctx.accounts.commit_choice(day_unix, commitment, stake, &ctx.bumps)
    }

    pub fn reveal_choice(
        ctx: Context<RevealChoice>,
        day_unix: i64,
        choice: u8,
        salt: [u8; 32],
    ) -> Result<()> {
        ctx.accounts.reveal_choice(day_unix, choice, salt)
    }

    pub fn settle_day(ctx: Context<SettleDay>, day_unix: i64) -> Result<()> {
        ctx.accounts.settle_day(day_unix)
    }

    pub fn claim_payout(ctx: Context<ClaimPayout>, day_unix: i64) -> Result<()> {
        ctx.accounts.claim_payout(day_unix)
    }
}
