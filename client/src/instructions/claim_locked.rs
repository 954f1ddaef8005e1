use anchor_lang::{Discriminator, InstructionData, ToAccountMetas};
use borsh::{BorshDeserialize, BorshSerialize};
use solana_program::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
};

use super::{build_instruction, TOKEN_PROGRAM_ID};

/// `claim_locked` carries no arguments beyond its discriminator.
#[derive(BorshSerialize, BorshDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClaimLockedArgs;

impl Discriminator for ClaimLockedArgs {
    const DISCRIMINATOR: [u8; 8] = [0x22, 0xce, 0xb5, 0x17, 0x0b, 0xcf, 0x93, 0x5a];
}

impl InstructionData for ClaimLockedArgs {}

/// Accounts for `claim_locked`.
#[derive(Clone, Copy, Debug)]
pub struct ClaimLockedAccounts {
    pub distributor: Pubkey,
    /// Claim status PDA created by a prior `new_claim`.
    pub claim_status: Pubkey,
    pub from: Pubkey,
    pub to: Pubkey,
    pub claimant: Pubkey,
}

impl ToAccountMetas for ClaimLockedAccounts {
    fn to_account_metas(&self, _is_signer: Option<bool>) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.distributor, false),
            AccountMeta::new(self.claim_status, false),
            AccountMeta::new(self.from, false),
            AccountMeta::new(self.to, false),
            AccountMeta::new(self.claimant, true),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
        ]
    }
}

pub fn claim_locked(
    program_id: &Pubkey,
    accounts: &ClaimLockedAccounts,
    remaining_accounts: &[AccountMeta],
) -> Instruction {
    build_instruction(program_id, accounts, &ClaimLockedArgs, remaining_accounts)
}
