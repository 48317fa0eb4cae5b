// Commit-reveal for the daily split-or-steal choice
//
// commitment = keccak256(wallet_base58 || day_unix || choice || hex(salt))
//
// The preimage is the plain concatenation of the textual forms, not a
// binary packing, so commitments made by existing clients stay valid.
// Choices stay private only while the salt does: a salt that leaks before
// the reveal phase lets anyone brute force the two possible choices.

use anchor_lang::prelude::*;
use anchor_lang::solana_program::keccak;

use crate::{constants::*, errors::SquadError};

pub const SALT_LEN: usize = 32;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub enum Choice {
    Split,
    Steal,
}

impl Choice {
    pub fn as_u8(self) -> u8 {
        match self {
            Choice::Split => 0,
            Choice::Steal => 1,
        }
    }
}

impl TryFrom<u8> for Choice {
    type Error = anchor_lang::error::Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Choice::Split),
            1 => Ok(Choice::Steal),
            _ => err!(SquadError::InvalidChoice),
        }
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Commit,
    Reveal,
    Settled,
}

pub fn commitment_preimage(
    wallet: &Pubkey,
    day_unix: i64,
    choice: Choice,
    salt: &[u8; SALT_LEN],
) -> String {
    format!("{}{}{}{}", wallet, day_unix, choice.as_u8(), hex::encode(salt))
}

pub fn hash_commit(wallet: &Pubkey, day_unix: i64, choice: Choice, salt: &[u8; SALT_LEN]) -> [u8; 32] {
    let preimage = commitment_preimage(wallet, day_unix, choice, salt);
    keccak::hash(preimage.as_bytes()).to_bytes()
}

pub fn verify_reveal(
    wallet: &Pubkey,
    day_unix: i64,
    choice: Choice,
    salt: &[u8; SALT_LEN],
    commitment: &[u8; 32],
) -> bool {
    hash_commit(wallet, day_unix, choice, salt) == *commitment
}

// UTC midnight of the day containing `timestamp`
pub fn day_start(timestamp: i64) -> i64 {
    timestamp.div_euclid(SECONDS_PER_DAY) * SECONDS_PER_DAY
}

pub fn phase_at(timestamp: i64) -> Phase {
    let seconds_into_day = timestamp.rem_euclid(SECONDS_PER_DAY);
    if seconds_into_day < REVEAL_OPENS_AT {
        Phase::Commit
    } else if seconds_into_day < SETTLEMENT_OPENS_AT {
        Phase::Reveal
    } else {
        Phase::Settled
    }
}

// Phase of `day_unix` at `now`, None when `now` falls on another day
pub fn phase_of_day(day_unix: i64, now: i64) -> Option<Phase> {
    (day_start(now) == day_unix).then(|| phase_at(now))
}

pub fn reveal_opens(day_unix: i64) -> i64 {
    day_unix + REVEAL_OPENS_AT
}

pub fn settlement_opens(day_unix: i64) -> i64 {
    day_unix + SETTLEMENT_OPENS_AT
}

pub fn is_day_aligned(day_unix: i64) -> bool {
    day_unix.rem_euclid(SECONDS_PER_DAY) == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2024-03-01T00:00:00Z
    const DAY: i64 = 1_709_251_200;

    fn wallet() -> Pubkey {
        Pubkey::new_from_array([7u8; 32])
    }

    #[test]
    fn preimage_is_plain_text_concatenation() {
        let mut salt = [0u8; SALT_LEN];
        salt[0] = 0xab;
        salt[31] = 0x01;
        let preimage = commitment_preimage(&wallet(), DAY, Choice::Steal, &salt);
        let expected = format!(
            "{}{}1ab{}01",
            wallet(),
            DAY,
            "00".repeat(30)
        );
        assert_eq!(preimage, expected);
    }

    #[test]
    fn reveal_round_trip() {
        let salt = [42u8; SALT_LEN];
        for choice in [Choice::Split, Choice::Steal] {
            let commitment = hash_commit(&wallet(), DAY, choice, &salt);
            assert!(verify_reveal(&wallet(), DAY, choice, &salt, &commitment));
        }
    }

    #[test]
    fn any_mutation_breaks_verification() {
        let salt = [9u8; SALT_LEN];
        let commitment = hash_commit(&wallet(), DAY, Choice::Split, &salt);

        assert!(!verify_reveal(&wallet(), DAY, Choice::Steal, &salt, &commitment));
        assert!(!verify_reveal(&wallet(), DAY + SECONDS_PER_DAY, Choice::Split, &salt, &commitment));
        assert!(!verify_reveal(&Pubkey::new_from_array([8u8; 32]), DAY, Choice::Split, &salt, &commitment));

        for byte in 0..SALT_LEN {
            for bit in 0..8 {
                let mut flipped = salt;
                flipped[byte] ^= 1 << bit;
                assert!(!verify_reveal(&wallet(), DAY, Choice::Split, &flipped, &commitment));
            }
        }
    }

    #[test]
    fn choice_codes() {
        assert_eq!(Choice::try_from(0).unwrap(), Choice::Split);
        assert_eq!(Choice::try_from(1).unwrap(), Choice::Steal);
        assert!(Choice::try_from(2).is_err());
        assert_eq!(Choice::Steal.as_u8(), 1);
    }

    #[test]
    fn phase_schedule() {
        assert_eq!(phase_at(DAY), Phase::Commit);
        assert_eq!(phase_at(DAY + REVEAL_OPENS_AT - 1), Phase::Commit);
        assert_eq!(phase_at(DAY + REVEAL_OPENS_AT), Phase::Reveal);
        assert_eq!(phase_at(DAY + SETTLEMENT_OPENS_AT - 1), Phase::Reveal);
        assert_eq!(phase_at(DAY + SETTLEMENT_OPENS_AT), Phase::Settled);
        assert_eq!(phase_at(DAY + SECONDS_PER_DAY - 1), Phase::Settled);
        assert_eq!(phase_at(DAY + SECONDS_PER_DAY), Phase::Commit);
    }

    #[test]
    fn day_bucketing() {
        assert_eq!(day_start(DAY), DAY);
        assert_eq!(day_start(DAY + 13 * 3600 + 7), DAY);
        assert_eq!(day_start(-1), -SECONDS_PER_DAY);
        assert!(is_day_aligned(DAY));
        assert!(!is_day_aligned(DAY + 1));

        assert_eq!(phase_of_day(DAY, DAY + REVEAL_OPENS_AT), Some(Phase::Reveal));
        assert_eq!(phase_of_day(DAY, DAY + SECONDS_PER_DAY + REVEAL_OPENS_AT), None);
        assert_eq!(settlement_opens(DAY), DAY + 18 * 3600);
        assert_eq!(reveal_opens(DAY), DAY + 12 * 3600);
    }
}
