use anchor_lang::{AccountDeserialize, Discriminator, Owner};
use borsh::{BorshDeserialize, BorshSerialize};
use solana_program::pubkey::Pubkey;

use crate::coder::{deserialize_unchecked, Codec};

/// State for the account which distributes tokens.
#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct MerkleDistributor {
    /// Bump seed.
    pub bump: u8,
    /// Version of the airdrop
    pub version: u8,
    /// The 256-bit merkle root.
    pub root: [u8; 32],
    /// [Mint] of the token to be distributed.
    pub mint: Pubkey,
    /// Token Address of the vault
    pub token_vault: Pubkey,
    /// Maximum number of tokens that can ever be claimed from this [MerkleDistributor].
    pub max_total_claim: u64,
    /// Maximum number of nodes in [MerkleDistributor].
    pub max_num_nodes: u64,
    /// Total amount of tokens that have been claimed.
    pub total_amount_claimed: u64,
    /// Number of nodes that have been claimed.
    pub num_nodes_claimed: u64,
    /// Lockup time start (Unix Timestamp)
    pub start_ts: i64,
    /// Lockup time end (Unix Timestamp)
    pub end_ts: i64,
    /// Clawback start (Unix Timestamp)
    pub clawback_start_ts: i64,
    /// Clawback receiver
    pub clawback_receiver: Pubkey,
    /// Admin wallet
    pub admin: Pubkey,
    /// Whether or not the distributor has been clawed back
    pub clawed_back: bool,
}

impl MerkleDistributor {
    /// Serialized size including the discriminator.
    pub const LEN: usize = 8 + 1 + 1 + 32 * 3 + 8 * 4 + 8 * 3 + 32 * 2 + 1;

    /// Whether claims can still be made at `curr_ts`.
    pub fn is_claim_window_open(&self, curr_ts: i64) -> bool {
        !self.clawed_back && curr_ts < self.clawback_start_ts
    }
}

impl Discriminator for MerkleDistributor {
    const DISCRIMINATOR: [u8; 8] = [0x4d, 0x77, 0x8b, 0x46, 0x54, 0xf7, 0x0c, 0x1a];
}

impl Owner for MerkleDistributor {
    fn owner() -> Pubkey {
        crate::ID
    }
}

impl AccountDeserialize for MerkleDistributor {
    fn try_deserialize(buf: &mut &[u8]) -> anchor_lang::Result<Self> {
        Ok(Self::decode(*buf)?)
    }

    fn try_deserialize_unchecked(buf: &mut &[u8]) -> anchor_lang::Result<Self> {
        deserialize_unchecked(*buf)
    }
}
