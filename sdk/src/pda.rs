use anchor_lang::prelude::Pubkey;
use splitsquads::{constants::*, ID};

pub fn config_key() -> Pubkey {
    Pubkey::find_program_address(&[CONFIG], &ID).0
}

pub fn squad_key(authority: &Pubkey, name: &str) -> Pubkey {
    Pubkey::find_program_address(&[SQUAD, authority.as_ref(), name.as_bytes()], &ID).0
}

pub fn member_key(squad: &Pubkey, wallet: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(&[MEMBER, squad.as_ref(), wallet.as_ref()], &ID).0
}

pub fn squad_vault_key(squad: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(&[SQUAD_VAULT, squad.as_ref()], &ID).0
}

pub fn rewards_vault_key(squad: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(&[REWARDS_VAULT, squad.as_ref()], &ID).0
}

pub fn daily_choice_key(player: &Pubkey, day_unix: i64) -> Pubkey {
    Pubkey::find_program_address(
        &[CHOICE, player.as_ref(), &day_unix.to_le_bytes()[..]],
        &ID,
    )
    .0
}

pub fn daily_round_key(day_unix: i64) -> Pubkey {
    Pubkey::find_program_address(&[ROUND, &day_unix.to_le_bytes()[..]], &ID).0
}

pub fn player_stats_key(player: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(&[PLAYER, player.as_ref()], &ID).0
}

pub fn community_pot_key() -> Pubkey {
    Pubkey::find_program_address(&[COMMUNITY_POT], &ID).0
}

pub fn pot_vault_key() -> Pubkey {
    Pubkey::find_program_address(&[POT_VAULT], &ID).0
}

// Every address a squad owns, derived in one pass
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SquadAddresses {
    pub squad: Pubkey,
    pub squad_vault: Pubkey,
    pub rewards_vault: Pubkey,
}

impl SquadAddresses {
    pub fn derive(authority: &Pubkey, name: &str) -> Self {
        let squad = squad_key(authority, name);
        SquadAddresses {
            squad,
            squad_vault: squad_vault_key(&squad),
            rewards_vault: rewards_vault_key(&squad),
        }
    }
}
