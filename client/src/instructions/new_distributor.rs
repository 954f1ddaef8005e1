use anchor_lang::{Discriminator, InstructionData, ToAccountMetas};
use borsh::{BorshDeserialize, BorshSerialize};
use solana_program::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
};

use super::{
    build_instruction, ASSOCIATED_TOKEN_PROGRAM_ID, SYSTEM_PROGRAM_ID, TOKEN_PROGRAM_ID,
};

/// Arguments for `new_distributor`.
///
/// The program accepts any values here; a front-runner can submit the same call
/// with their own admin or clawback receiver. Read the created account back and
/// compare before funding the vault.
#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct NewDistributorArgs {
    pub version: u8,
    pub root: [u8; 32],
    pub max_total_claim: u64,
    pub max_num_nodes: u64,
    pub start_vesting_ts: i64,
    pub end_vesting_ts: i64,
    pub clawback_start_ts: i64,
}

impl Discriminator for NewDistributorArgs {
    const DISCRIMINATOR: [u8; 8] = [0x20, 0x8b, 0x70, 0xab, 0x00, 0x02, 0xe1, 0x9b];
}

impl InstructionData for NewDistributorArgs {}

/// Accounts for `new_distributor`.
#[derive(Clone, Copy, Debug)]
pub struct NewDistributorAccounts {
    /// [MerkleDistributor](crate::state::MerkleDistributor) PDA to initialize.
    pub distributor: Pubkey,
    /// Clawback receiver token account
    pub clawback_receiver: Pubkey,
    /// The mint to distribute.
    pub mint: Pubkey,
    /// Token vault, the distributor's associated token account. Created by this call.
    pub token_vault: Pubkey,
    /// Admin wallet, pays for the distributor account.
    pub admin: Pubkey,
}

impl ToAccountMetas for NewDistributorAccounts {
    fn to_account_metas(&self, _is_signer: Option<bool>) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.distributor, false),
            AccountMeta::new(self.clawback_receiver, false),
            AccountMeta::new_readonly(self.mint, false),
            AccountMeta::new(self.token_vault, false),
            AccountMeta::new(self.admin, true),
            AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false),
            AccountMeta::new_readonly(ASSOCIATED_TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
        ]
    }
}

pub fn new_distributor(
    program_id: &Pubkey,
    args: &NewDistributorArgs,
    accounts: &NewDistributorAccounts,
    remaining_accounts: &[AccountMeta],
) -> Instruction {
    build_instruction(program_id, accounts, args, remaining_accounts)
}
