use async_trait::async_trait;
use solana_program::pubkey::Pubkey;
use solana_rpc_client::nonblocking::rpc_client::RpcClient;
use solana_rpc_client_api::client_error::Error as ClientError;
use solana_sdk::{account::Account, commitment_config::CommitmentConfig};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::coder::{Codec, CoderError};

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Rpc error: {0}")]
    Rpc(#[from] ClientError),

    #[error("Account {address} is owned by {actual}, expected {expected}")]
    OwnerMismatch {
        address: Pubkey,
        expected: Pubkey,
        actual: Pubkey,
    },

    #[error("Requested {expected} accounts, source returned {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error(transparent)]
    Decode(#[from] CoderError),
}

/// Where raw accounts come from. Missing accounts are `Ok(None)`.
#[async_trait]
pub trait AccountSource: Send + Sync {
    async fn get_account(
        &self,
        address: &Pubkey,
        commitment: Option<CommitmentConfig>,
    ) -> Result<Option<Account>, FetchError>;

    /// Results are in request order.
    async fn get_multiple_accounts(
        &self,
        addresses: &[Pubkey],
        commitment: Option<CommitmentConfig>,
    ) -> Result<Vec<Option<Account>>, FetchError>;
}

#[async_trait]
impl AccountSource for RpcClient {
    async fn get_account(
        &self,
        address: &Pubkey,
        commitment: Option<CommitmentConfig>,
    ) -> Result<Option<Account>, FetchError> {
        let response = self
            .get_account_with_commitment(address, commitment.unwrap_or(self.commitment()))
            .await?;
        Ok(response.value)
    }

    async fn get_multiple_accounts(
        &self,
        addresses: &[Pubkey],
        commitment: Option<CommitmentConfig>,
    ) -> Result<Vec<Option<Account>>, FetchError> {
        let response = self
            .get_multiple_accounts_with_commitment(
                addresses,
                commitment.unwrap_or(self.commitment()),
            )
            .await?;
        Ok(response.value)
    }
}

#[async_trait]
impl<S: AccountSource + ?Sized> AccountSource for &S {
    async fn get_account(
        &self,
        address: &Pubkey,
        commitment: Option<CommitmentConfig>,
    ) -> Result<Option<Account>, FetchError> {
        (**self).get_account(address, commitment).await
    }

    async fn get_multiple_accounts(
        &self,
        addresses: &[Pubkey],
        commitment: Option<CommitmentConfig>,
    ) -> Result<Vec<Option<Account>>, FetchError> {
        (**self).get_multiple_accounts(addresses, commitment).await
    }
}

/// Fetches program accounts and decodes them, checking the owner first.
pub struct AccountReader<S> {
    source: S,
    program_id: Pubkey,
}

impl<S: AccountSource> AccountReader<S> {
    pub fn new(source: S, program_id: Pubkey) -> Self {
        Self { source, program_id }
    }

    pub fn program_id(&self) -> &Pubkey {
        &self.program_id
    }

    #[instrument(skip(self), fields(program_id = %self.program_id))]
    pub async fn fetch<T: Codec>(
        &self,
        address: &Pubkey,
        commitment: Option<CommitmentConfig>,
    ) -> Result<Option<T>, FetchError> {
        match self.source.get_account(address, commitment).await? {
            Some(account) => self.decode(address, &account).map(Some),
            None => {
                debug!("account {} not found", address);
                Ok(None)
            }
        }
    }

    /// One round trip for all `addresses`. A slot owned by another program fails
    /// the whole batch.
    #[instrument(skip(self, addresses), fields(program_id = %self.program_id, count = addresses.len()))]
    pub async fn fetch_multiple<T: Codec>(
        &self,
        addresses: &[Pubkey],
        commitment: Option<CommitmentConfig>,
    ) -> Result<Vec<Option<T>>, FetchError> {
        let accounts = self
            .source
            .get_multiple_accounts(addresses, commitment)
            .await?;
        if accounts.len() != addresses.len() {
            return Err(FetchError::LengthMismatch {
                expected: addresses.len(),
                actual: accounts.len(),
            });
        }

        addresses
            .iter()
            .zip(accounts.iter())
            .map(|(address, account)| match account {
                Some(account) => self.decode(address, account).map(Some),
                None => Ok(None),
            })
            .collect()
    }

    fn decode<T: Codec>(&self, address: &Pubkey, account: &Account) -> Result<T, FetchError> {
        if account.owner != self.program_id {
            return Err(FetchError::OwnerMismatch {
                address: *address,
                expected: self.program_id,
                actual: account.owner,
            });
        }
        Ok(T::decode(&account.data)?)
    }
}
