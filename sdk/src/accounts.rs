use anchor_lang::{prelude::Pubkey, AccountDeserialize, Discriminator};
use solana_account_decoder_client_types::UiAccountEncoding;
pub use solana_client::nonblocking::rpc_client::RpcClient as SolanaRpcClient;
use solana_client::{
    rpc_config::{RpcAccountInfoConfig, RpcProgramAccountsConfig},
    rpc_filter::{Memcmp, RpcFilterType},
};
use splitsquads::state::*;

use crate::error::Error;

// Source of raw account data: a cluster RPC endpoint or the fake ledger
#[async_trait::async_trait]
pub trait GetAccountData {
    async fn account_data(&self, pubkey: &Pubkey) -> Result<Option<Vec<u8>>, Error>;

    // Accounts owned by the program that pass every filter, as (address, data)
    async fn program_accounts(
        &self,
        filters: Vec<RpcFilterType>,
    ) -> Result<Vec<(Pubkey, Vec<u8>)>, Error>;
}

#[async_trait::async_trait]
impl GetAccountData for SolanaRpcClient {
    async fn account_data(&self, pubkey: &Pubkey) -> Result<Option<Vec<u8>>, Error> {
        let response = self
            .get_account_with_commitment(pubkey, self.commitment())
            .await?;
        Ok(response.value.map(|account| account.data))
    }

    async fn program_accounts(
        &self,
        filters: Vec<RpcFilterType>,
    ) -> Result<Vec<(Pubkey, Vec<u8>)>, Error> {
        let config = RpcProgramAccountsConfig {
            account_config: RpcAccountInfoConfig {
                commitment: Some(self.commitment()),
                encoding: Some(UiAccountEncoding::Base64),
                ..Default::default()
            },
            filters: Some(filters),
            ..Default::default()
        };
        let accounts = self
            .get_program_accounts_with_config(&splitsquads::ID, config)
            .await?;
        Ok(accounts
            .into_iter()
            .map(|(pubkey, account)| (pubkey, account.data))
            .collect())
    }
}

pub fn decode<T: AccountDeserialize>(data: &[u8]) -> Result<T, Error> {
    T::try_deserialize(&mut &data[..]).map_err(Error::from)
}

pub fn decode_config(data: &[u8]) -> Result<GameConfig, Error> {
    decode(data)
}

pub fn decode_squad(data: &[u8]) -> Result<Squad, Error> {
    decode(data)
}

pub fn decode_member(data: &[u8]) -> Result<Member, Error> {
    decode(data)
}

pub fn decode_daily_choice(data: &[u8]) -> Result<DailyChoice, Error> {
    decode(data)
}

pub fn decode_daily_round(data: &[u8]) -> Result<DailyRound, Error> {
    decode(data)
}

pub fn decode_player_stats(data: &[u8]) -> Result<PlayerStats, Error> {
    decode(data)
}

pub fn decode_community_pot(data: &[u8]) -> Result<CommunityPot, Error> {
    decode(data)
}

pub async fn fetch<T: AccountDeserialize>(
    source: &impl GetAccountData,
    pubkey: &Pubkey,
) -> Result<T, Error> {
    let data = source
        .account_data(pubkey)
        .await?
        .ok_or(Error::AccountNotFound(*pubkey))?;
    decode(&data)
}

pub fn account_type_filter<T: Discriminator>() -> RpcFilterType {
    RpcFilterType::Memcmp(Memcmp::new_raw_bytes(0, T::DISCRIMINATOR.to_vec()))
}

// Squad.authority is the first field after the discriminator
pub fn squads_by_authority(authority: &Pubkey) -> Vec<RpcFilterType> {
    vec![
        account_type_filter::<Squad>(),
        RpcFilterType::Memcmp(Memcmp::new_raw_bytes(8, authority.to_bytes().to_vec())),
    ]
}

// Member.squad is the first field after the discriminator
pub fn members_by_squad(squad: &Pubkey) -> Vec<RpcFilterType> {
    vec![
        account_type_filter::<Member>(),
        RpcFilterType::Memcmp(Memcmp::new_raw_bytes(8, squad.to_bytes().to_vec())),
    ]
}

/// Evaluates RPC filters locally, for sources that hold the data themselves.
/// Token account state filters never match program accounts.
pub fn filters_match(filters: &[RpcFilterType], data: &[u8]) -> bool {
    filters.iter().all(|filter| match filter {
        RpcFilterType::DataSize(size) => data.len() as u64 == *size,
        RpcFilterType::Memcmp(memcmp) => memcmp.bytes_match(data),
        _ => false,
    })
}

pub async fn fetch_filtered<T: AccountDeserialize>(
    source: &impl GetAccountData,
    filters: Vec<RpcFilterType>,
) -> Result<Vec<(Pubkey, T)>, Error> {
    source
        .program_accounts(filters)
        .await?
        .into_iter()
        .map(|(pubkey, data)| decode(&data).map(|account| (pubkey, account)))
        .collect()
}
