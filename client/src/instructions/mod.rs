//! Instruction builders, one module per program call.
//!
//! Each module holds the argument struct (the instruction data, `InstructionData`),
//! the accounts struct (`ToAccountMetas`, fixed order and signer/writable flags)
//! and a builder that appends caller-supplied remaining accounts after the fixed
//! prefix. Business rules are left to the program.

use anchor_lang::{InstructionData, ToAccountMetas};
use solana_program::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
};

pub use anchor_spl::token::ID as TOKEN_PROGRAM_ID;
pub use claim_locked::*;
pub use clawback::*;
pub use new_claim::*;
pub use new_distributor::*;
pub use set_admin::*;
pub use set_clawback_receiver::*;
pub use solana_program::system_program::ID as SYSTEM_PROGRAM_ID;
pub use spl_associated_token_account::ID as ASSOCIATED_TOKEN_PROGRAM_ID;

pub mod claim_locked;
pub mod clawback;
pub mod new_claim;
pub mod new_distributor;
pub mod set_admin;
pub mod set_clawback_receiver;

fn build_instruction(
    program_id: &Pubkey,
    accounts: &impl ToAccountMetas,
    data: &impl InstructionData,
    remaining_accounts: &[AccountMeta],
) -> Instruction {
    let mut metas = accounts.to_account_metas(None);
    metas.extend_from_slice(remaining_accounts);

    Instruction {
        program_id: *program_id,
        accounts: metas,
        data: data.data(),
    }
}
