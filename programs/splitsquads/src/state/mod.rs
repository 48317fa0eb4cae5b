pub mod config;
pub mod squad;
pub mod member;
pub mod daily_choice;
pub mod daily_round;
pub mod player_stats;
pub mod community_pot;

pub use config::*;
pub use squad::*;
pub use member::*;
pub use daily_choice::*;
pub use daily_round::*;
pub use player_stats::*;
pub use community_pot::*;
