use anchor_lang::{Discriminator, InstructionData, ToAccountMetas};
use borsh::{BorshDeserialize, BorshSerialize};
use solana_program::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
};

use super::{build_instruction, SYSTEM_PROGRAM_ID, TOKEN_PROGRAM_ID};

#[derive(BorshSerialize, BorshDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClawbackArgs;

impl Discriminator for ClawbackArgs {
    const DISCRIMINATOR: [u8; 8] = [0x6f, 0x5c, 0x8e, 0x4f, 0x21, 0xea, 0x52, 0x1b];
}

impl InstructionData for ClawbackArgs {}

/// Accounts for `clawback`. Anyone may sign once the clawback window opens.
#[derive(Clone, Copy, Debug)]
pub struct ClawbackAccounts {
    pub distributor: Pubkey,
    /// Distributor token vault.
    pub from: Pubkey,
    /// Must equal the distributor's `clawback_receiver`.
    pub to: Pubkey,
    pub claimant: Pubkey,
}

impl ToAccountMetas for ClawbackAccounts {
    fn to_account_metas(&self, _is_signer: Option<bool>) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.distributor, false),
            AccountMeta::new(self.from, false),
            AccountMeta::new(self.to, false),
            AccountMeta::new_readonly(self.claimant, true),
            AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
        ]
    }
}

pub fn clawback(
    program_id: &Pubkey,
    accounts: &ClawbackAccounts,
    remaining_accounts: &[AccountMeta],
) -> Instruction {
    build_instruction(program_id, accounts, &ClawbackArgs, remaining_accounts)
}
