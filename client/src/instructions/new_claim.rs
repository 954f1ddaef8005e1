use anchor_lang::{Discriminator, InstructionData, ToAccountMetas};
use borsh::{BorshDeserialize, BorshSerialize};
use solana_program::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
};

use super::{build_instruction, SYSTEM_PROGRAM_ID, TOKEN_PROGRAM_ID};

/// Arguments for `new_claim`. The amounts and proof must match the claimant's
/// leaf in the tree committed to by the distributor's root.
#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct NewClaimArgs {
    pub amount_unlocked: u64,
    pub amount_locked: u64,
    pub proof: Vec<[u8; 32]>,
}

impl Discriminator for NewClaimArgs {
    const DISCRIMINATOR: [u8; 8] = [0x4e, 0xb1, 0x62, 0x7b, 0xd2, 0x15, 0xbb, 0x53];
}

impl InstructionData for NewClaimArgs {}

/// Accounts for `new_claim`.
#[derive(Clone, Copy, Debug)]
pub struct NewClaimAccounts {
    /// The [MerkleDistributor](crate::state::MerkleDistributor).
    pub distributor: Pubkey,
    /// Claim status PDA, created by this call.
    pub claim_status: Pubkey,
    /// Distributor ATA containing the tokens to distribute.
    pub from: Pubkey,
    /// Account to send the claimed tokens to.
    pub to: Pubkey,
    /// Who is claiming the tokens.
    pub claimant: Pubkey,
}

impl ToAccountMetas for NewClaimAccounts {
    fn to_account_metas(&self, _is_signer: Option<bool>) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.distributor, false),
            AccountMeta::new(self.claim_status, false),
            AccountMeta::new(self.from, false),
            AccountMeta::new(self.to, false),
            AccountMeta::new(self.claimant, true),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false),
        ]
    }
}

pub fn new_claim(
    program_id: &Pubkey,
    args: &NewClaimArgs,
    accounts: &NewClaimAccounts,
    remaining_accounts: &[AccountMeta],
) -> Instruction {
    build_instruction(program_id, accounts, args, remaining_accounts)
}
