pub mod accounts;
pub mod choice;
pub mod error;
pub mod fake;
pub mod instructions;
pub mod pda;
pub mod preview;

pub use splitsquads;

pub mod prelude {
    pub use anchor_lang::prelude::Pubkey;
    pub use splitsquads::{errors::SquadError, state::*};

    pub use crate::{
        accounts::{fetch, fetch_filtered, GetAccountData, SolanaRpcClient},
        choice::{Choice, Phase, PhaseDeadlines, PreparedCommit},
        error::Error,
        fake::FakeLedger,
        instructions, pda,
        preview::{preview_distribution, preview_weight},
    };
}
