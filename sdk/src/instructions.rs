use anchor_lang::{
    prelude::{AccountMeta, Pubkey},
    solana_program::instruction::Instruction,
    system_program, InstructionData, ToAccountMetas,
};
use anchor_spl::token;
use splitsquads::{accounts, instruction, ID};

use crate::pda::*;

pub fn initialize_config(
    admin: Pubkey,
    token_mint: Pubkey,
    oracle: Pubkey,
    pot_release_bps: u16,
) -> Instruction {
    Instruction {
        program_id: ID,
        accounts: accounts::InitializeConfig {
            admin,
            config: config_key(),
            token_mint,
            community_pot: community_pot_key(),
            pot_vault: pot_vault_key(),
            token_program: token::ID,
            system_program: system_program::ID,
        }
        .to_account_metas(None),
        data: instruction::InitializeConfig {
            oracle,
            pot_release_bps,
        }
        .data(),
    }
}

pub fn set_oracle(admin: Pubkey, new_oracle: Pubkey) -> Instruction {
    Instruction {
        program_id: ID,
        accounts: accounts::SetOracle {
            admin,
            config: config_key(),
        }
        .to_account_metas(None),
        data: instruction::SetOracle { new_oracle }.data(),
    }
}

pub fn initialize_squad(
    authority: Pubkey,
    mint: Pubkey,
    name: &str,
    max_members: u8,
) -> Instruction {
    let addresses = SquadAddresses::derive(&authority, name);
    Instruction {
        program_id: ID,
        accounts: accounts::InitializeSquad {
            authority,
            config: config_key(),
            mint,
            squad: addresses.squad,
            squad_vault: addresses.squad_vault,
            rewards_vault: addresses.rewards_vault,
            token_program: token::ID,
            system_program: system_program::ID,
        }
        .to_account_metas(None),
        data: instruction::InitializeSquad {
            name: name.to_string(),
            max_members,
        }
        .data(),
    }
}

pub fn join_squad(authority: Pubkey, squad: Pubkey) -> Instruction {
    Instruction {
        program_id: ID,
        accounts: accounts::JoinSquad {
            authority,
            squad,
            member: member_key(&squad, &authority),
            system_program: system_program::ID,
        }
        .to_account_metas(None),
        data: instruction::JoinSquad {}.data(),
    }
}

pub fn stake_tokens(
    authority: Pubkey,
    squad: Pubkey,
    user_token_account: Pubkey,
    amount: u64,
) -> Instruction {
    Instruction {
        program_id: ID,
        accounts: accounts::StakeTokens {
            authority,
            squad,
            member: member_key(&squad, &authority),
            user_token_account,
            squad_vault: squad_vault_key(&squad),
            token_program: token::ID,
        }
        .to_account_metas(None),
        data: instruction::StakeTokens { amount }.data(),
    }
}

pub fn unstake_tokens(
    authority: Pubkey,
    squad: Pubkey,
    user_token_account: Pubkey,
    amount: u64,
) -> Instruction {
    Instruction {
        program_id: ID,
        accounts: accounts::UnstakeTokens {
            authority,
            squad,
            member: member_key(&squad, &authority),
            user_token_account,
            squad_vault: squad_vault_key(&squad),
            token_program: token::ID,
        }
        .to_account_metas(None),
        data: instruction::UnstakeTokens { amount }.data(),
    }
}

pub fn update_activity_score(
    oracle: Pubkey,
    squad: Pubkey,
    member_wallet: Pubkey,
    new_score: u32,
) -> Instruction {
    Instruction {
        program_id: ID,
        accounts: accounts::UpdateActivityScore {
            oracle,
            config: config_key(),
            squad,
            member: member_key(&squad, &member_wallet),
        }
        .to_account_metas(None),
        data: instruction::UpdateActivityScore {
            member_wallet,
            new_score,
        }
        .data(),
    }
}

/// Builds `distribute_rewards` for the given `(member wallet, payout token
/// account)` pairs. The program requires every member of the squad to be
/// listed exactly once.
pub fn distribute_rewards(
    caller: Pubkey,
    squad: Pubkey,
    payouts: &[(Pubkey, Pubkey)],
) -> Instruction {
    let mut metas = accounts::DistributeRewards {
        caller,
        squad,
        rewards_vault: rewards_vault_key(&squad),
        token_program: token::ID,
    }
    .to_account_metas(None);

    for (wallet, token_account) in payouts {
        metas.push(AccountMeta::new_readonly(member_key(&squad, wallet), false));
        metas.push(AccountMeta::new(*token_account, false));
    }

    Instruction {
        program_id: ID,
        accounts: metas,
        data: instruction::DistributeRewards {}.data(),
    }
}

pub fn commit_choice(
    player: Pubkey,
    player_token_account: Pubkey,
    day_unix: i64,
    commitment: [u8; 32],
    stake: u64,
) -> Instruction {
    Instruction {
        program_id: ID,
        accounts: accounts::CommitChoice {
            player,
            config: config_key(),
            daily_choice: daily_choice_key(&player, day_unix),
            daily_round: daily_round_key(day_unix),
            player_stats: player_stats_key(&player),
            community_pot: community_pot_key(),
            pot_vault: pot_vault_key(),
            player_token_account,
            token_program: token::ID,
            system_program: system_program::ID,
        }
        .to_account_metas(None),
        data: instruction::CommitChoice {
            day_unix,
            commitment,
            stake,
        }
        .data(),
    }
}

pub fn reveal_choice(player: Pubkey, day_unix: i64, choice: u8, salt: [u8; 32]) -> Instruction {
    Instruction {
        program_id: ID,
        accounts: accounts::RevealChoice {
            player,
            daily_choice: daily_choice_key(&player, day_unix),
            daily_round: daily_round_key(day_unix),
            player_stats: player_stats_key(&player),
        }
        .to_account_metas(None),
        data: instruction::RevealChoice {
            day_unix,
            choice,
            salt,
        }
        .data(),
    }
}

pub fn settle_day(caller: Pubkey, day_unix: i64) -> Instruction {
    Instruction {
        program_id: ID,
        accounts: accounts::SettleDay {
            caller,
            config: config_key(),
            daily_round: daily_round_key(day_unix),
            community_pot: community_pot_key(),
        }
        .to_account_metas(None),
        data: instruction::SettleDay { day_unix }.data(),
    }
}

pub fn claim_payout(player: Pubkey, player_token_account: Pubkey, day_unix: i64) -> Instruction {
    Instruction {
        program_id: ID,
        accounts: accounts::ClaimPayout {
            player,
            config: config_key(),
            daily_choice: daily_choice_key(&player, day_unix),
            daily_round: daily_round_key(day_unix),
            player_stats: player_stats_key(&player),
            community_pot: community_pot_key(),
            pot_vault: pot_vault_key(),
            player_token_account,
            token_program: token::ID,
        }
        .to_account_metas(None),
        data: instruction::ClaimPayout { day_unix }.data(),
    }
}
