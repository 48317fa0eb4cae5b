// Client side of the daily commit-reveal game
//
// The salt is the only secret in a commitment: keep it off-chain and
// private until the reveal phase opens.

use rand::RngCore;
pub use splitsquads::commitment::{
    commitment_preimage, day_start, hash_commit, is_day_aligned, phase_at, phase_of_day,
    verify_reveal, Choice, Phase, SALT_LEN,
};
use splitsquads::{
    commitment::{reveal_opens, settlement_opens},
    constants::SECONDS_PER_DAY,
};

use crate::error::Error;

pub fn generate_salt() -> [u8; SALT_LEN] {
    let mut salt = [0u8; SALT_LEN];
    rand::rng().fill_bytes(&mut salt);
    salt
}

pub fn salt_to_hex(salt: &[u8; SALT_LEN]) -> String {
    hex::encode(salt)
}

pub fn salt_from_hex(encoded: &str) -> Result<[u8; SALT_LEN], Error> {
    let bytes = hex::decode(encoded)?;
    let actual = bytes.len();
    bytes.try_into().map_err(|_| Error::InvalidSaltLength {
        expected: SALT_LEN,
        actual,
    })
}

/// Phase boundaries of one UTC day.
///
/// Commits are accepted in `[day_unix, reveal_opens)`, reveals in
/// `[reveal_opens, settlement_opens)`, settlement from `settlement_opens`
/// on. The game day ends at `day_ends`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PhaseDeadlines {
    pub day_unix: i64,
    pub reveal_opens: i64,
    pub settlement_opens: i64,
    pub day_ends: i64,
}

impl PhaseDeadlines {
    pub fn for_day(day_unix: i64) -> Self {
        PhaseDeadlines {
            day_unix,
            reveal_opens: reveal_opens(day_unix),
            settlement_opens: settlement_opens(day_unix),
            day_ends: day_unix + SECONDS_PER_DAY,
        }
    }

    pub fn containing(timestamp: i64) -> Self {
        PhaseDeadlines::for_day(day_start(timestamp))
    }

    // Seconds until the current phase ends, None once the day is over
    pub fn remaining_in_phase(&self, now: i64) -> Option<i64> {
        let end = match phase_of_day(self.day_unix, now)? {
            Phase::Commit => self.reveal_opens,
            Phase::Reveal => self.settlement_opens,
            Phase::Settled => self.day_ends,
        };
        Some(end - now)
    }
}

// Everything a player needs to keep until reveal
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreparedCommit {
    pub day_unix: i64,
    pub choice: Choice,
    pub salt: [u8; SALT_LEN],
    pub commitment: [u8; 32],
}

impl PreparedCommit {
    pub fn new(wallet: &anchor_lang::prelude::Pubkey, day_unix: i64, choice: Choice) -> Self {
        let salt = generate_salt();
        PreparedCommit {
            day_unix,
            choice,
            salt,
            commitment: hash_commit(wallet, day_unix, choice, &salt),
        }
    }
}

#[cfg(test)]
mod tests {
    use anchor_lang::prelude::Pubkey;

    use super::*;

    const DAY: i64 = 1_709_251_200;

    #[test]
    fn salts_are_random_and_hex_round_trips() {
        let salt = generate_salt();
        assert_ne!(salt, generate_salt());

        let encoded = salt_to_hex(&salt);
        assert_eq!(encoded.len(), 64);
        assert_eq!(salt_from_hex(&encoded).unwrap(), salt);
    }

    #[test]
    fn bad_salts_are_rejected() {
        assert!(matches!(
            salt_from_hex("abcd"),
            Err(Error::InvalidSaltLength {
                expected: 32,
                actual: 2
            })
        ));
        assert!(matches!(salt_from_hex("zz"), Err(Error::DecodeHexError(_))));
    }

    #[test]
    fn prepared_commit_verifies() {
        let wallet = Pubkey::new_unique();
        let prepared = PreparedCommit::new(&wallet, DAY, Choice::Steal);
        assert!(verify_reveal(
            &wallet,
            DAY,
            Choice::Steal,
            &prepared.salt,
            &prepared.commitment
        ));
        assert!(!verify_reveal(
            &wallet,
            DAY,
            Choice::Split,
            &prepared.salt,
            &prepared.commitment
        ));
    }

    #[test]
    fn deadlines_follow_the_schedule() {
        let deadlines = PhaseDeadlines::containing(DAY + 3_600);
        assert_eq!(deadlines.day_unix, DAY);
        assert_eq!(deadlines.reveal_opens, DAY + 12 * 3_600);
        assert_eq!(deadlines.settlement_opens, DAY + 18 * 3_600);
        assert_eq!(deadlines.day_ends, DAY + 86_400);

        assert_eq!(deadlines.remaining_in_phase(DAY + 3_600), Some(11 * 3_600));
        assert_eq!(deadlines.remaining_in_phase(DAY + 17 * 3_600), Some(3_600));
        assert_eq!(deadlines.remaining_in_phase(DAY + 86_400), None);
    }
}
