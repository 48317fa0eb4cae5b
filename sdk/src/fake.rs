// In-memory stand-in for the deployed program
//
// Every instruction runs the program's own state transitions against a
// private copy of the ledger and only replaces the live copy when it
// succeeds, the way a failed transaction leaves no trace on chain. Token
// accounts are plain balances keyed by address. Intended for integration
// tests and local tooling only.

use std::collections::HashMap;

use anchor_lang::{prelude::Pubkey, AccountSerialize};
use solana_client::rpc_filter::RpcFilterType;
use splitsquads::{
    constants::BASIS_POINTS,
    distribution::{plan_distribution, DistributionPlan},
    errors::SquadError,
    settlement::Settlement,
    state::*,
};

use crate::{
    accounts::{filters_match, GetAccountData},
    error::Error,
    pda::*,
};

fn program_error(error: SquadError) -> Error {
    Error::AnchorError(error.into())
}

// Address standing in for a wallet's token account of the game mint
pub fn wallet_token_account(wallet: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(&[b"wallet", wallet.as_ref()], &anchor_spl::token::ID).0
}

#[derive(Clone, Default)]
pub struct FakeLedger {
    now: i64,
    config: Option<GameConfig>,
    community_pot: Option<CommunityPot>,
    squads: HashMap<Pubkey, Squad>,
    members: HashMap<Pubkey, Member>,
    choices: HashMap<Pubkey, DailyChoice>,
    rounds: HashMap<Pubkey, DailyRound>,
    stats: HashMap<Pubkey, PlayerStats>,
    balances: HashMap<Pubkey, u64>,
}

impl FakeLedger {
    pub fn new(now: i64) -> Self {
        FakeLedger {
            now,
            ..FakeLedger::default()
        }
    }

    // Runs `f` against a copy and keeps the result only on success
    fn transact<T>(&mut self, f: impl FnOnce(&mut FakeLedger) -> Result<T, Error>) -> Result<T, Error> {
        let mut next = self.clone();
        let value = f(&mut next)?;
        *self = next;
        Ok(value)
    }

    // Clock

    pub fn now(&self) -> i64 {
        self.now
    }

    pub fn set_time(&mut self, now: i64) {
        self.now = now;
    }

    pub fn advance(&mut self, seconds: i64) -> Result<(), Error> {
        self.now = self
            .now
            .checked_add(seconds)
            .ok_or_else(|| program_error(SquadError::Overflow))?;
        Ok(())
    }

    // Tokens

    pub fn balance(&self, token_account: &Pubkey) -> u64 {
        self.balances.get(token_account).copied().unwrap_or(0)
    }

    pub fn wallet_balance(&self, wallet: &Pubkey) -> u64 {
        self.balance(&wallet_token_account(wallet))
    }

    pub fn mint_to(&mut self, wallet: &Pubkey, amount: u64) -> Result<(), Error> {
        self.credit(wallet_token_account(wallet), amount)
    }

    pub fn fund_rewards(&mut self, squad: &Pubkey, amount: u64) -> Result<(), Error> {
        self.credit(rewards_vault_key(squad), amount)
    }

    fn credit(&mut self, token_account: Pubkey, amount: u64) -> Result<(), Error> {
        let credited = self
            .balance(&token_account)
            .checked_add(amount)
            .ok_or_else(|| program_error(SquadError::Overflow))?;
        self.balances.insert(token_account, credited);
        Ok(())
    }

    fn transfer(&mut self, from: Pubkey, to: Pubkey, amount: u64) -> Result<(), Error> {
        let available = self.balance(&from);
        if available < amount {
            return Err(Error::InsufficientFunds {
                account: from,
                available,
                required: amount,
            });
        }
        let credited = self
            .balance(&to)
            .checked_add(amount)
            .ok_or_else(|| program_error(SquadError::Overflow))?;
        self.balances.insert(from, available - amount);
        self.balances.insert(to, credited);
        Ok(())
    }

    // Accounts

    pub fn config(&self) -> Option<&GameConfig> {
        self.config.as_ref()
    }

    pub fn community_pot(&self) -> Option<&CommunityPot> {
        self.community_pot.as_ref()
    }

    pub fn squad(&self, squad: &Pubkey) -> Option<&Squad> {
        self.squads.get(squad)
    }

    pub fn member(&self, squad: &Pubkey, wallet: &Pubkey) -> Option<&Member> {
        self.members.get(&member_key(squad, wallet))
    }

    pub fn daily_choice(&self, player: &Pubkey, day_unix: i64) -> Option<&DailyChoice> {
        self.choices.get(&daily_choice_key(player, day_unix))
    }

    pub fn daily_round(&self, day_unix: i64) -> Option<&DailyRound> {
        self.rounds.get(&daily_round_key(day_unix))
    }

    pub fn player_stats(&self, player: &Pubkey) -> Option<&PlayerStats> {
        self.stats.get(&player_stats_key(player))
    }

    pub fn squad_members(&self, squad: &Pubkey) -> Vec<&Member> {
        self.members.values().filter(|m| m.squad == *squad).collect()
    }

    fn loaded_config(&self) -> Result<GameConfig, Error> {
        self.config
            .clone()
            .ok_or_else(|| Error::AccountNotFound(config_key()))
    }

    fn loaded_pot(&self) -> Result<CommunityPot, Error> {
        self.community_pot
            .clone()
            .ok_or_else(|| Error::AccountNotFound(community_pot_key()))
    }

    fn loaded<T: Clone>(map: &HashMap<Pubkey, T>, key: &Pubkey) -> Result<T, Error> {
        map.get(key).cloned().ok_or(Error::AccountNotFound(*key))
    }

    // Instructions

    pub fn initialize_config(
        &mut self,
        admin: &Pubkey,
        token_mint: &Pubkey,
        oracle: &Pubkey,
        pot_release_bps: u16,
    ) -> Result<(), Error> {
        self.transact(|ledger| {
            if ledger.config.is_some() {
                return Err(Error::AccountAlreadyExists(config_key()));
            }
            if pot_release_bps as u64 > BASIS_POINTS {
                return Err(program_error(SquadError::InvalidBasisPoints));
            }

            ledger.config = Some(GameConfig {
                admin: *admin,
                oracle: *oracle,
                token_mint: *token_mint,
                pot_release_bps,
                bump: 0,
            });
            ledger.community_pot = Some(CommunityPot {
                balance: 0,
                total_slashed: 0,
                total_forfeited: 0,
                total_released: 0,
                vault: pot_vault_key(),
                bump: 0,
                vault_bump: 0,
            });
            ledger.balances.insert(pot_vault_key(), 0);
            Ok(())
        })
    }

    pub fn set_oracle(&mut self, admin: &Pubkey, new_oracle: &Pubkey) -> Result<(), Error> {
        self.transact(|ledger| {
            let mut config = ledger.loaded_config()?;
            if config.admin != *admin {
                return Err(program_error(SquadError::UnauthorizedAdmin));
            }
            config.oracle = *new_oracle;
            ledger.config = Some(config);
            Ok(())
        })
    }

    // Validation runs before address derivation so every name error is reported
    pub fn initialize_squad(
        &mut self,
        authority: &Pubkey,
        mint: &Pubkey,
        name: &str,
        max_members: u8,
    ) -> Result<Pubkey, Error> {
        self.transact(|ledger| {
            let config = ledger.loaded_config()?;
            if config.token_mint != *mint {
                return Err(program_error(SquadError::InvalidTokenMint));
            }
            Squad::validate_params(name, max_members)?;

            let addresses = SquadAddresses::derive(authority, name);
            if ledger.squads.contains_key(&addresses.squad) {
                return Err(Error::AccountAlreadyExists(addresses.squad));
            }

            ledger.squads.insert(
                addresses.squad,
                Squad {
                    authority: *authority,
                    name: name.to_string(),
                    max_members,
                    member_count: 0,
                    total_staked: 0,
                    rewards_vault: addresses.rewards_vault,
                    bump: 0,
                    squad_vault: addresses.squad_vault,
                    mint: *mint,
                    squad_vault_bump: 0,
                    rewards_vault_bump: 0,
                },
            );
            ledger.balances.insert(addresses.squad_vault, 0);
            ledger.balances.entry(addresses.rewards_vault).or_insert(0);
            Ok(addresses.squad)
        })
    }

    pub fn join_squad(&mut self, wallet: &Pubkey, squad_key: &Pubkey) -> Result<Pubkey, Error> {
        self.transact(|ledger| {
            let mut squad = Self::loaded(&ledger.squads, squad_key)?;
            let member_key = member_key(squad_key, wallet);
            if ledger.members.contains_key(&member_key) {
                return Err(Error::AccountAlreadyExists(member_key));
            }

            squad.register_member()?;

            ledger
                .members
                .insert(member_key, Member::new(*squad_key, *wallet, ledger.now, 0));
            ledger.squads.insert(*squad_key, squad);
            Ok(member_key)
        })
    }

    pub fn stake_tokens(&mut self, wallet: &Pubkey, squad_key: &Pubkey, amount: u64) -> Result<(), Error> {
        self.transact(|ledger| {
            let mut squad = Self::loaded(&ledger.squads, squad_key)?;
            let member_key = member_key(squad_key, wallet);
            let mut member = Self::loaded(&ledger.members, &member_key)?;

            squad.credit_stake(&mut member, amount)?;
            ledger.transfer(wallet_token_account(wallet), squad.squad_vault, amount)?;

            ledger.squads.insert(*squad_key, squad);
            ledger.members.insert(member_key, member);
            Ok(())
        })
    }

    pub fn unstake_tokens(&mut self, wallet: &Pubkey, squad_key: &Pubkey, amount: u64) -> Result<(), Error> {
        self.transact(|ledger| {
            let mut squad = Self::loaded(&ledger.squads, squad_key)?;
            let member_key = member_key(squad_key, wallet);
            let mut member = Self::loaded(&ledger.members, &member_key)?;

            squad.debit_stake(&mut member, amount)?;
            ledger.transfer(squad.squad_vault, wallet_token_account(wallet), amount)?;

            ledger.squads.insert(*squad_key, squad);
            ledger.members.insert(member_key, member);
            Ok(())
        })
    }

    pub fn update_activity_score(
        &mut self,
        oracle: &Pubkey,
        squad_key: &Pubkey,
        member_wallet: &Pubkey,
        new_score: u32,
    ) -> Result<(), Error> {
        self.transact(|ledger| {
            let config = ledger.loaded_config()?;
            Self::loaded(&ledger.squads, squad_key)?;
            let member_key = member_key(squad_key, member_wallet);
            let mut member = Self::loaded(&ledger.members, &member_key)?;

            if !config.is_oracle(oracle) {
                return Err(program_error(SquadError::UnauthorizedOracle));
            }
            member.set_activity_score(new_score, ledger.now)?;

            ledger.members.insert(member_key, member);
            Ok(())
        })
    }

    /// Pays the rewards vault out to `member_wallets`, which must list every
    /// member of the squad exactly once.
    pub fn distribute_rewards(
        &mut self,
        squad_key: &Pubkey,
        member_wallets: &[Pubkey],
    ) -> Result<DistributionPlan, Error> {
        self.transact(|ledger| {
            let squad = Self::loaded(&ledger.squads, squad_key)?;
            if squad.member_count == 0 {
                return Err(program_error(SquadError::NoMembers));
            }
            let vault_balance = ledger.balance(&squad.rewards_vault);
            if vault_balance == 0 {
                return Err(program_error(SquadError::NoRewards));
            }
            if member_wallets.len() != squad.member_count as usize {
                return Err(program_error(SquadError::MemberListMismatch));
            }

            let mut seen: Vec<Pubkey> = Vec::with_capacity(member_wallets.len());
            let mut weights = Vec::with_capacity(member_wallets.len());
            for wallet in member_wallets {
                let member = ledger
                    .members
                    .get(&member_key(squad_key, wallet))
                    .ok_or_else(|| program_error(SquadError::InvalidMemberAccount))?;
                if seen.contains(wallet) {
                    return Err(program_error(SquadError::DuplicateMember));
                }
                seen.push(*wallet);
                weights.push(member.weight(ledger.now, squad.member_count)?);
            }

            let plan = plan_distribution(vault_balance, &weights)?;
            for (wallet, share) in member_wallets.iter().zip(plan.shares.iter()) {
                if *share > 0 {
                    ledger.transfer(squad.rewards_vault, wallet_token_account(wallet), *share)?;
                }
            }
            Ok(plan)
        })
    }

    pub fn commit_choice(
        &mut self,
        player: &Pubkey,
        day_unix: i64,
        commitment: [u8; 32],
        stake: u64,
    ) -> Result<(), Error> {
        self.transact(|ledger| {
            ledger.loaded_config()?;
            let choice_key = daily_choice_key(player, day_unix);
            let round_key = daily_round_key(day_unix);
            let stats_key = player_stats_key(player);

            let mut choice = ledger.choices.get(&choice_key).cloned().unwrap_or_default();
            let mut round = ledger.rounds.get(&round_key).cloned().unwrap_or_default();
            let mut stats = ledger.stats.get(&stats_key).cloned().unwrap_or_default();

            choice.commit(*player, day_unix, commitment, stake, ledger.now, 0)?;
            if round.commit_count == 0 {
                round.day_unix = day_unix;
            }
            round.record_commit(stake)?;
            if stats.player == Pubkey::default() {
                stats.player = *player;
            }

            ledger.transfer(wallet_token_account(player), pot_vault_key(), stake)?;

            ledger.choices.insert(choice_key, choice);
            ledger.rounds.insert(round_key, round);
            ledger.stats.insert(stats_key, stats);
            Ok(())
        })
    }

    pub fn reveal_choice(
        &mut self,
        player: &Pubkey,
        day_unix: i64,
        choice: u8,
        salt: [u8; 32],
    ) -> Result<(), Error> {
        self.transact(|ledger| {
            let choice_key = daily_choice_key(player, day_unix);
            let round_key = daily_round_key(day_unix);
            let stats_key = player_stats_key(player);

            let mut record = Self::loaded(&ledger.choices, &choice_key)?;
            let mut round = Self::loaded(&ledger.rounds, &round_key)?;
            let mut stats = Self::loaded(&ledger.stats, &stats_key)?;

            let revealed = record.reveal(choice, &salt, ledger.now)?;
            round.record_reveal(revealed, record.stake)?;
            stats.record_reveal(day_unix)?;

            ledger.choices.insert(choice_key, record);
            ledger.rounds.insert(round_key, round);
            ledger.stats.insert(stats_key, stats);
            Ok(())
        })
    }

    pub fn settle_day(&mut self, day_unix: i64) -> Result<Settlement, Error> {
        self.transact(|ledger| {
            let config = ledger.loaded_config()?;
            let round_key = daily_round_key(day_unix);
            let mut round = Self::loaded(&ledger.rounds, &round_key)?;
            let mut pot = ledger.loaded_pot()?;

            let settlement = round.settle(pot.balance, config.pot_release_bps, ledger.now)?;
            pot.apply_settlement(&settlement)?;

            ledger.rounds.insert(round_key, round);
            ledger.community_pot = Some(pot);
            Ok(settlement)
        })
    }

    pub fn claim_payout(&mut self, player: &Pubkey, day_unix: i64) -> Result<u64, Error> {
        self.transact(|ledger| {
            let choice_key = daily_choice_key(player, day_unix);
            let round_key = daily_round_key(day_unix);
            let stats_key = player_stats_key(player);

            let mut record = Self::loaded(&ledger.choices, &choice_key)?;
            let mut round = Self::loaded(&ledger.rounds, &round_key)?;
            let mut stats = Self::loaded(&ledger.stats, &stats_key)?;
            let mut pot = ledger.loaded_pot()?;

            if !round.settled {
                return Err(program_error(SquadError::RoundNotSettled));
            }
            let choice = record.mark_claimed()?;
            let amount = round.payout_for(choice, record.stake)?;
            let remainder = round.record_claim(amount)?;
            pot.credit_remainder(remainder)?;
            stats.record_payout(amount)?;

            if amount > 0 {
                ledger.transfer(pot_vault_key(), wallet_token_account(player), amount)?;
            }

            ledger.choices.insert(choice_key, record);
            ledger.rounds.insert(round_key, round);
            ledger.stats.insert(stats_key, stats);
            ledger.community_pot = Some(pot);
            Ok(amount)
        })
    }

    /// Tokens the pot vault must hold: the pot ledger plus every round's
    /// stake that has not been paid out.
    pub fn pot_liabilities(&self) -> Result<u64, Error> {
        let mut total = self.community_pot.as_ref().map_or(0, |pot| pot.balance);
        for round in self.rounds.values() {
            total = total
                .checked_add(round.outstanding()?)
                .ok_or_else(|| program_error(SquadError::Overflow))?;
        }
        Ok(total)
    }
}

fn serialize<T: AccountSerialize>(account: &T) -> Option<Vec<u8>> {
    let mut data = Vec::new();
    account.try_serialize(&mut data).ok()?;
    Some(data)
}

impl FakeLedger {
    fn stored_account(&self, pubkey: &Pubkey) -> Option<Vec<u8>> {
        if *pubkey == config_key() {
            return self.config.as_ref().and_then(serialize);
        }
        if *pubkey == community_pot_key() {
            return self.community_pot.as_ref().and_then(serialize);
        }
        self.squads
            .get(pubkey)
            .and_then(serialize)
            .or_else(|| self.members.get(pubkey).and_then(serialize))
            .or_else(|| self.choices.get(pubkey).and_then(serialize))
            .or_else(|| self.rounds.get(pubkey).and_then(serialize))
            .or_else(|| self.stats.get(pubkey).and_then(serialize))
    }

    fn stored_accounts(&self) -> Vec<(Pubkey, Vec<u8>)> {
        let mut keys: Vec<Pubkey> = Vec::new();
        keys.extend(self.config.as_ref().map(|_| config_key()));
        keys.extend(self.community_pot.as_ref().map(|_| community_pot_key()));
        keys.extend(self.squads.keys());
        keys.extend(self.members.keys());
        keys.extend(self.choices.keys());
        keys.extend(self.rounds.keys());
        keys.extend(self.stats.keys());

        keys.into_iter()
            .filter_map(|key| self.stored_account(&key).map(|data| (key, data)))
            .collect()
    }
}

#[async_trait::async_trait]
impl GetAccountData for FakeLedger {
    async fn account_data(&self, pubkey: &Pubkey) -> Result<Option<Vec<u8>>, Error> {
        Ok(self.stored_account(pubkey))
    }

    async fn program_accounts(
        &self,
        filters: Vec<RpcFilterType>,
    ) -> Result<Vec<(Pubkey, Vec<u8>)>, Error> {
        Ok(self
            .stored_accounts()
            .into_iter()
            .filter(|(_, data)| filters_match(&filters, data))
            .collect())
    }
}
