use anchor_lang::{Discriminator, InstructionData, ToAccountMetas};
use borsh::{BorshDeserialize, BorshSerialize};
use solana_program::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
};

use super::build_instruction;

#[derive(BorshSerialize, BorshDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SetClawbackReceiverArgs;

impl Discriminator for SetClawbackReceiverArgs {
    const DISCRIMINATOR: [u8; 8] = [0x99, 0xd9, 0x22, 0x14, 0x13, 0x1d, 0xe5, 0x4b];
}

impl InstructionData for SetClawbackReceiverArgs {}

#[derive(Clone, Copy, Debug)]
pub struct SetClawbackReceiverAccounts {
    pub distributor: Pubkey,
    /// New clawback receiver token account. Must differ from the current one.
    pub new_clawback_account: Pubkey,
    /// Current admin, signs.
    pub admin: Pubkey,
}

impl ToAccountMetas for SetClawbackReceiverAccounts {
    fn to_account_metas(&self, _is_signer: Option<bool>) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.distributor, false),
            AccountMeta::new_readonly(self.new_clawback_account, false),
            AccountMeta::new(self.admin, true),
        ]
    }
}

pub fn set_clawback_receiver(
    program_id: &Pubkey,
    accounts: &SetClawbackReceiverAccounts,
    remaining_accounts: &[AccountMeta],
) -> Instruction {
    build_instruction(
        program_id,
        accounts,
        &SetClawbackReceiverArgs,
        remaining_accounts,
    )
}
