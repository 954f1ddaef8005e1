use anchor_lang::{Discriminator, InstructionData, ToAccountMetas};
use borsh::{BorshDeserialize, BorshSerialize};
use solana_program::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
};

use super::build_instruction;

/// The deployed program names this handler `set_amin`, and its discriminator
/// is derived from that name.
#[derive(BorshSerialize, BorshDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SetAdminArgs;

impl Discriminator for SetAdminArgs {
    const DISCRIMINATOR: [u8; 8] = [0xb0, 0x05, 0x34, 0x20, 0x16, 0x18, 0xa7, 0xf9];
}

impl InstructionData for SetAdminArgs {}

#[derive(Clone, Copy, Debug)]
pub struct SetAdminAccounts {
    pub distributor: Pubkey,
    /// Current admin, signs.
    pub admin: Pubkey,
    /// Must differ from `admin`.
    pub new_admin: Pubkey,
}

impl ToAccountMetas for SetAdminAccounts {
    fn to_account_metas(&self, _is_signer: Option<bool>) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.distributor, false),
            AccountMeta::new(self.admin, true),
            AccountMeta::new(self.new_admin, false),
        ]
    }
}

pub fn set_admin(
    program_id: &Pubkey,
    accounts: &SetAdminAccounts,
    remaining_accounts: &[AccountMeta],
) -> Instruction {
    build_instruction(program_id, accounts, &SetAdminArgs, remaining_accounts)
}
