pub mod initialize_config;
pub mod set_oracle;
pub mod initialize_squad;
pub mod join_squad;
pub mod stake_tokens;
pub mod unstake_tokens;
pub mod update_activity_score;
pub mod distribute_rewards;
pub mod commit_choice;
pub mod reveal_choice;
pub mod settle_day;
pub mod claim_payout;

pub use initialize_config::*;
pub use set_oracle::*;
pub use initialize_squad::*;
pub use join_squad::*;
pub use stake_tokens::*;
pub use unstake_tokens::*;
pub use update_activity_score::*;
pub use distribute_rewards::*;
pub use commit_choice::*;
pub use reveal_choice::*;
pub use settle_day::*;
pub use claim_payout::*;
