use anchor_lang::prelude::*;

pub const ANCHOR_DISCRIMINATOR: usize = 8;

// Seeds for PDA derivation: ["config"]
#[constant]
pub const CONFIG: &[u8] = b"config";

// Seeds for PDA derivation: ["squad", authority, name]
#[constant]
pub const SQUAD: &[u8] = b"squad";

// Seeds for PDA derivation: ["member", squad, authority]
#[constant]
pub const MEMBER: &[u8] = b"member";

// Seeds for PDA derivation: ["rewards_vault", squad]
pub const REWARDS_VAULT: &[u8] = b"rewards_vault";

// Seeds for PDA derivation: ["squad_vault", squad]
pub const SQUAD_VAULT: &[u8] = b"squad_vault";

// Seeds for PDA derivation: ["choice", player, day_unix (le)]
pub const CHOICE: &[u8] = b"choice";

// Seeds for PDA derivation: ["round", day_unix (le)]
pub const ROUND: &[u8] = b"round";

// Seeds for PDA derivation: ["player", player]
pub const PLAYER: &[u8] = b"player";

// Seeds for PDA derivation: ["community_pot"] and ["pot_vault"]
pub const COMMUNITY_POT: &[u8] = b"community_pot";
pub const POT_VAULT: &[u8] = b"pot_vault";

// Squad bounds
pub const MIN_SQUAD_SIZE: u8 = 2;
pub const MAX_SQUAD_SIZE: u8 = 8;
pub const MAX_NAME_LEN: usize = 32;

// Activity scores are percentages
pub const MAX_ACTIVITY_SCORE: u32 = 100;

// Weight engine
pub const STAKE_UNIT: u64 = 1_000_000; // 6 decimal token
pub const MAX_TENURE_SECONDS: i64 = 90 * 24 * 60 * 60;
pub const WEIGHT_DIVISOR: u128 = 100_000_000;

// Daily phase schedule, offsets from UTC midnight
pub const SECONDS_PER_DAY: i64 = 24 * 60 * 60;
pub const REVEAL_OPENS_AT: i64 = 12 * 60 * 60;
pub const SETTLEMENT_OPENS_AT: i64 = 18 * 60 * 60;

// Settlement
pub const BASIS_POINTS: u64 = 10_000;
pub const STEAL_CAPTURE_BPS: u64 = 5_000;
pub const STEAL_SLASH_BPS: u64 = 10_000;
pub const DEFAULT_POT_RELEASE_BPS: u16 = 1_000;
