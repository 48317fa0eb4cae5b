// Test utilities for the splitsquads program

#![allow(dead_code)]

use anchor_lang::AccountDeserialize;
use litesvm::LiteSVM;
use litesvm_token::{get_spl_account, CreateAssociatedTokenAccount, CreateMint, MintTo};
use sha2::{Digest, Sha256};
use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    signature::{Keypair, Signer},
    transaction::Transaction,
};
use spl_associated_token_account::get_associated_token_address;

// Program ID matching declare_id!
pub const PROGRAM_ID: Pubkey = Pubkey::new_from_array(splitsquads::ID.to_bytes());

pub const TOKEN_PROGRAM_ID: Pubkey = spl_token::ID;
use solana_system_interface::program::ID as system_program;

pub use splitsquads::constants::{
    CHOICE, COMMUNITY_POT, CONFIG, MEMBER, PLAYER, POT_VAULT, REWARDS_VAULT, ROUND, SQUAD,
    SQUAD_VAULT,
};

pub const DECIMALS: u8 = 6;

// 2024-03-01T00:00:00Z
pub const DAY: i64 = 1_709_251_200;

// ======================== HELPERS ========================

// First 8 bytes of sha256("global:method_name")
pub fn anchor_discriminator(method: &str) -> [u8; 8] {
    let digest = Sha256::digest(format!("global:{}", method).as_bytes());
    let mut discriminator = [0u8; 8];
    discriminator.copy_from_slice(&digest[..8]);
    discriminator
}

// Loads target/deploy/splitsquads.so, produced by `anchor build`
pub fn setup_svm() -> LiteSVM {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../target/deploy/splitsquads.so");
    let program_bytes = std::fs::read(path)
        .unwrap_or_else(|e| panic!("{} not readable ({}), run `anchor build` first", path, e));
    let mut svm = LiteSVM::new();
    svm.add_program(PROGRAM_ID, &program_bytes)
        .expect("Failed to add splitsquads program");
    svm
}

pub fn create_funded_account(svm: &mut LiteSVM, lamports: u64) -> Keypair {
    let keypair = Keypair::new();
    svm.airdrop(&keypair.pubkey(), lamports)
        .expect("Airdrop should succeed");
    keypair
}

pub fn create_mint(svm: &mut LiteSVM, authority: &Keypair) -> Pubkey {
    CreateMint::new(svm, authority)
        .authority(&authority.pubkey())
        .decimals(DECIMALS)
        .send()
        .expect("Mint creation should succeed")
}

// ATA for `owner`, funded with `amount`
pub fn create_funded_ata(
    svm: &mut LiteSVM,
    mint_authority: &Keypair,
    mint: &Pubkey,
    owner: &Pubkey,
    amount: u64,
) -> Pubkey {
    let ata = CreateAssociatedTokenAccount::new(svm, mint_authority, mint)
        .owner(owner)
        .send()
        .expect("ATA creation should succeed");
    if amount > 0 {
        MintTo::new(svm, mint_authority, mint, &ata, amount)
            .owner(mint_authority)
            .send()
            .expect("Minting should succeed");
    }
    ata
}

pub fn mint_to(svm: &mut LiteSVM, mint_authority: &Keypair, mint: &Pubkey, to: &Pubkey, amount: u64) {
    MintTo::new(svm, mint_authority, mint, to, amount)
        .owner(mint_authority)
        .send()
        .expect("Minting should succeed");
}

pub fn token_balance(svm: &LiteSVM, account: &Pubkey) -> u64 {
    let account: spl_token::state::Account =
        get_spl_account(svm, account).expect("Token account should exist");
    account.amount
}

pub fn ata(owner: &Pubkey, mint: &Pubkey) -> Pubkey {
    get_associated_token_address(owner, mint)
}

// Decode an Anchor account owned by the program
pub fn fetch<T: AccountDeserialize>(svm: &LiteSVM, address: &Pubkey) -> T {
    let account = svm.get_account(address).expect("Account should exist");
    T::try_deserialize(&mut account.data.as_slice()).expect("Account should decode")
}

pub fn to_anchor(key: &Pubkey) -> anchor_lang::prelude::Pubkey {
    anchor_lang::prelude::Pubkey::new_from_array(key.to_bytes())
}

pub fn send(svm: &mut LiteSVM, ixs: &[Instruction], payer: &Keypair, signers: &[&Keypair]) -> Result<(), String> {
    svm.expire_blockhash();
    let tx = Transaction::new_signed_with_payer(ixs, Some(&payer.pubkey()), signers, svm.latest_blockhash());
    svm.send_transaction(tx)
        .map(|_| ())
        .map_err(|e| format!("{:?}", e.err))
}

// Assert a failed transaction carries the given program error
pub fn assert_program_error(result: Result<(), String>, error: splitsquads::errors::SquadError) {
    let code = u32::from(error);
    let err = result.expect_err("Transaction should have failed");
    assert!(
        err.contains(&format!("Custom({})", code)),
        "expected Custom({}), got {}",
        code,
        err
    );
}

// Move the clock to an absolute unix timestamp
pub fn set_time(svm: &mut LiteSVM, unix_timestamp: i64) {
    let mut clock: solana_sdk::clock::Clock = svm.get_sysvar();
    clock.unix_timestamp = unix_timestamp;
    svm.set_sysvar(&clock);
}

// ======================== PDAS ========================

pub fn derive_config_pda() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[CONFIG], &PROGRAM_ID)
}

pub fn derive_community_pot_pda() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[COMMUNITY_POT], &PROGRAM_ID)
}

pub fn derive_pot_vault_pda() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[POT_VAULT], &PROGRAM_ID)
}

pub fn derive_squad_pda(authority: &Pubkey, name: &str) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[SQUAD, authority.as_ref(), name.as_bytes()], &PROGRAM_ID)
}

pub fn derive_member_pda(squad: &Pubkey, wallet: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[MEMBER, squad.as_ref(), wallet.as_ref()], &PROGRAM_ID)
}

pub fn derive_squad_vault_pda(squad: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[SQUAD_VAULT, squad.as_ref()], &PROGRAM_ID)
}

pub fn derive_rewards_vault_pda(squad: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[REWARDS_VAULT, squad.as_ref()], &PROGRAM_ID)
}

pub fn derive_choice_pda(player: &Pubkey, day_unix: i64) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[CHOICE, player.as_ref(), &day_unix.to_le_bytes()], &PROGRAM_ID)
}

pub fn derive_round_pda(day_unix: i64) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[ROUND, &day_unix.to_le_bytes()], &PROGRAM_ID)
}

pub fn derive_player_stats_pda(player: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[PLAYER, player.as_ref()], &PROGRAM_ID)
}

// ======================== INSTRUCTION BUILDERS ========================

pub fn build_initialize_config_ix(
    admin: &Pubkey,
    token_mint: &Pubkey,
    oracle: &Pubkey,
    pot_release_bps: u16,
) -> Instruction {
    let (config, _) = derive_config_pda();
    let (community_pot, _) = derive_community_pot_pda();
    let (pot_vault, _) = derive_pot_vault_pda();

    let mut data = anchor_discriminator("initialize_config").to_vec();
    data.extend_from_slice(oracle.as_ref());
    data.extend_from_slice(&pot_release_bps.to_le_bytes());

    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*admin, true),
            AccountMeta::new(config, false),
            AccountMeta::new_readonly(*token_mint, false),
            AccountMeta::new(community_pot, false),
            AccountMeta::new(pot_vault, false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data,
    }
}

pub fn build_set_oracle_ix(admin: &Pubkey, new_oracle: &Pubkey) -> Instruction {
    let (config, _) = derive_config_pda();

    let mut data = anchor_discriminator("set_oracle").to_vec();
    data.extend_from_slice(new_oracle.as_ref());

    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(*admin, true),
            AccountMeta::new(config, false),
        ],
        data,
    }
}

pub fn build_initialize_squad_ix(
    authority: &Pubkey,
    mint: &Pubkey,
    name: &str,
    max_members: u8,
) -> Instruction {
    let (config, _) = derive_config_pda();
    let (squad, _) = derive_squad_pda(authority, name);
    let (squad_vault, _) = derive_squad_vault_pda(&squad);
    let (rewards_vault, _) = derive_rewards_vault_pda(&squad);

    let mut data = anchor_discriminator("initialize_squad").to_vec();
    // Borsh string: u32 length prefix + bytes
    data.extend_from_slice(&(name.len() as u32).to_le_bytes());
    data.extend_from_slice(name.as_bytes());
    data.push(max_members);

    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*authority, true),
            AccountMeta::new_readonly(config, false),
            AccountMeta::new_readonly(*mint, false),
            AccountMeta::new(squad, false),
            AccountMeta::new(squad_vault, false),
            AccountMeta::new(rewards_vault, false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data,
    }
}

pub fn build_join_squad_ix(wallet: &Pubkey, squad: &Pubkey) -> Instruction {
    let (member, _) = derive_member_pda(squad, wallet);

    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*wallet, true),
            AccountMeta::new(*squad, false),
            AccountMeta::new(member, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data: anchor_discriminator("join_squad").to_vec(),
    }
}

fn build_stake_ix(method: &str, wallet: &Pubkey, squad: &Pubkey, mint: &Pubkey, amount: u64) -> Instruction {
    let (member, _) = derive_member_pda(squad, wallet);
    let (squad_vault, _) = derive_squad_vault_pda(squad);

    let mut data = anchor_discriminator(method).to_vec();
    data.extend_from_slice(&amount.to_le_bytes());

    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*wallet, true),
            AccountMeta::new(*squad, false),
            AccountMeta::new(member, false),
            AccountMeta::new(ata(wallet, mint), false),
            AccountMeta::new(squad_vault, false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
        ],
        data,
    }
}

pub fn build_stake_tokens_ix(wallet: &Pubkey, squad: &Pubkey, mint: &Pubkey, amount: u64) -> Instruction {
    build_stake_ix("stake_tokens", wallet, squad, mint, amount)
}

pub fn build_unstake_tokens_ix(wallet: &Pubkey, squad: &Pubkey, mint: &Pubkey, amount: u64) -> Instruction {
    build_stake_ix("unstake_tokens", wallet, squad, mint, amount)
}

pub fn build_update_activity_score_ix(
    oracle: &Pubkey,
    squad: &Pubkey,
    member_wallet: &Pubkey,
    new_score: u32,
) -> Instruction {
    let (config, _) = derive_config_pda();
    let (member, _) = derive_member_pda(squad, member_wallet);

    let mut data = anchor_discriminator("update_activity_score").to_vec();
    data.extend_from_slice(member_wallet.as_ref());
    data.extend_from_slice(&new_score.to_le_bytes());

    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(*oracle, true),
            AccountMeta::new_readonly(config, false),
            AccountMeta::new_readonly(*squad, false),
            AccountMeta::new(member, false),
        ],
        data,
    }
}

// `members` are wallets; each contributes (member PDA, wallet ATA)
pub fn build_distribute_rewards_ix(
    caller: &Pubkey,
    squad: &Pubkey,
    mint: &Pubkey,
    members: &[Pubkey],
) -> Instruction {
    let (rewards_vault, _) = derive_rewards_vault_pda(squad);

    let mut accounts = vec![
        AccountMeta::new_readonly(*caller, true),
        AccountMeta::new_readonly(*squad, false),
        AccountMeta::new(rewards_vault, false),
        AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
    ];
    for wallet in members {
        let (member, _) = derive_member_pda(squad, wallet);
        accounts.push(AccountMeta::new_readonly(member, false));
        accounts.push(AccountMeta::new(ata(wallet, mint), false));
    }

    Instruction {
        program_id: PROGRAM_ID,
        accounts,
        data: anchor_discriminator("distribute_rewards").to_vec(),
    }
}

pub fn build_commit_choice_ix(
    player: &Pubkey,
    mint: &Pubkey,
    day_unix: i64,
    commitment: [u8; 32],
    stake: u64,
) -> Instruction {
    let (config, _) = derive_config_pda();
    let (daily_choice, _) = derive_choice_pda(player, day_unix);
    let (daily_round, _) = derive_round_pda(day_unix);
    let (player_stats, _) = derive_player_stats_pda(player);
    let (community_pot, _) = derive_community_pot_pda();
    let (pot_vault, _) = derive_pot_vault_pda();

    let mut data = anchor_discriminator("commit_choice").to_vec();
    data.extend_from_slice(&day_unix.to_le_bytes());
    data.extend_from_slice(&commitment);
    data.extend_from_slice(&stake.to_le_bytes());

    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*player, true),
            AccountMeta::new_readonly(config, false),
            AccountMeta::new(daily_choice, false),
            AccountMeta::new(daily_round, false),
            AccountMeta::new(player_stats, false),
            AccountMeta::new_readonly(community_pot, false),
            AccountMeta::new(pot_vault, false),
            AccountMeta::new(ata(player, mint), false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data,
    }
}

pub fn build_reveal_choice_ix(player: &Pubkey, day_unix: i64, choice: u8, salt: [u8; 32]) -> Instruction {
    let (daily_choice, _) = derive_choice_pda(player, day_unix);
    let (daily_round, _) = derive_round_pda(day_unix);
    let (player_stats, _) = derive_player_stats_pda(player);

    let mut data = anchor_discriminator("reveal_choice").to_vec();
    data.extend_from_slice(&day_unix.to_le_bytes());
    data.push(choice);
    data.extend_from_slice(&salt);

    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(*player, true),
            AccountMeta::new(daily_choice, false),
            AccountMeta::new(daily_round, false),
            AccountMeta::new(player_stats, false),
        ],
        data,
    }
}

pub fn build_settle_day_ix(caller: &Pubkey, day_unix: i64) -> Instruction {
    let (config, _) = derive_config_pda();
    let (daily_round, _) = derive_round_pda(day_unix);
    let (community_pot, _) = derive_community_pot_pda();

    let mut data = anchor_discriminator("settle_day").to_vec();
    data.extend_from_slice(&day_unix.to_le_bytes());

    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(*caller, true),
            AccountMeta::new_readonly(config, false),
            AccountMeta::new(daily_round, false),
            AccountMeta::new(community_pot, false),
        ],
        data,
    }
}

pub fn build_claim_payout_ix(player: &Pubkey, mint: &Pubkey, day_unix: i64) -> Instruction {
    let (config, _) = derive_config_pda();
    let (daily_choice, _) = derive_choice_pda(player, day_unix);
    let (daily_round, _) = derive_round_pda(day_unix);
    let (player_stats, _) = derive_player_stats_pda(player);
    let (community_pot, _) = derive_community_pot_pda();
    let (pot_vault, _) = derive_pot_vault_pda();

    let mut data = anchor_discriminator("claim_payout").to_vec();
    data.extend_from_slice(&day_unix.to_le_bytes());

    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(*player, true),
            AccountMeta::new_readonly(config, false),
            AccountMeta::new(daily_choice, false),
            AccountMeta::new(daily_round, false),
            AccountMeta::new(player_stats, false),
            AccountMeta::new(community_pot, false),
            AccountMeta::new(pot_vault, false),
            AccountMeta::new(ata(player, mint), false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
        ],
        data,
    }
}
