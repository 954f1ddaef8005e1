use serde::{Deserialize, Serialize};
use solana_program::pubkey::Pubkey;

use crate::error::MerkleTreeError;

/// Represents the claim information for an account.
#[derive(Debug, Clone, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct TreeNode {
    /// Raw key bytes of the claimant; will be responsible for signing the claim
    pub claimant: Vec<u8>,
    /// Amount transferred on the first claim
    pub amount_unlocked: u64,
    /// Amount that vests between the distributor's start and end
    pub amount_locked: u64,
    /// Claimant's proof of inclusion in the Merkle Tree, leaf to root
    pub proof: Vec<[u8; 32]>,
}

impl TreeNode {
    /// The claimant as an address. Fails unless the key is exactly 32 bytes.
    pub fn claimant_pubkey(&self) -> Result<Pubkey, MerkleTreeError> {
        Pubkey::try_from(self.claimant.as_slice())
            .map_err(|_| MerkleTreeError::InvalidClaimant(self.claimant.len()))
    }

    /// Total amount this claimant can ever receive
    pub fn total_amount(&self) -> Option<u64> {
        self.amount_unlocked.checked_add(self.amount_locked)
    }
}
