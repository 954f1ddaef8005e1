use num_enum::TryFromPrimitive;
use solana_sdk::{instruction::InstructionError, transaction::TransactionError};
use thiserror::Error;

const CUSTOM_PROGRAM_ERROR: &str = "custom program error: 0x";

/// Error codes returned by the Merkle distributor program.
#[derive(
    Error, Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, strum::IntoStaticStr,
)]
#[repr(u32)]
pub enum MerkleDistributorError {
    #[error("Insufficient unlocked tokens")]
    InsufficientUnlockedTokens = 6000,
    #[error("Deposit Start too far in future")]
    DepositStartTooFarInFuture = 6001,
    #[error("Invalid Merkle proof.")]
    InvalidProof = 6002,
    #[error("Exceeded maximum claim amount.")]
    ExceededMaxClaim = 6003,
    #[error("Exceeded maximum number of claimed nodes.")]
    ExceededMaxNumNodes = 6004,
    #[error("Account is not authorized to execute this instruction")]
    Unauthorized = 6005,
    #[error("Token account owner did not match intended owner")]
    OwnerMismatch = 6006,
    #[error("Clawback cannot be before vesting ends")]
    ClawbackBeforeVestingEnd = 6007,
    #[error("Attempting to clawback before clawback start")]
    ClawbackBeforeStart = 6008,
    #[error("Clawback already claimed")]
    ClawbackAlreadyClaimed = 6009,
    #[error("New Clawback Receiver cannot be same as old")]
    ClawbackNewReceiverCannotBeSame = 6010,
    #[error("New Admin cannot be same as old")]
    NewAdminCannotBeSame = 6011,
    #[error("Cannot create claim; claim window expired")]
    ClaimExpired = 6012,
    #[error("Arithmetic Error (overflow/underflow)")]
    ArithmeticError = 6013,
    #[error("Invalid Timestamp")]
    InvalidTimestamp = 6014,
    #[error("Airdrop Version Mismatch")]
    InvalidVersion = 6015,
}

impl MerkleDistributorError {
    /// Looks up a program error code. Codes outside the program's range (runtime
    /// or Anchor framework errors) return `None`.
    pub fn from_code(code: u32) -> Option<Self> {
        Self::try_from(code).ok()
    }

    pub fn code(self) -> u32 {
        self as u32
    }

    pub fn name(self) -> &'static str {
        self.into()
    }

    pub fn message(self) -> String {
        self.to_string()
    }

    pub fn from_instruction_error(error: &InstructionError) -> Option<Self> {
        match error {
            InstructionError::Custom(code) => Self::from_code(*code),
            _ => None,
        }
    }

    /// Extracts the program error from a failed transaction. The index of the
    /// failing instruction does not change the meaning of the code.
    pub fn from_transaction_error(error: &TransactionError) -> Option<Self> {
        match error {
            TransactionError::InstructionError(_, instruction_error) => {
                Self::from_instruction_error(instruction_error)
            }
            _ => None,
        }
    }

    /// Parses the `custom program error: 0x1778` form printed by the runtime in
    /// logs and error strings.
    pub fn from_log(log: &str) -> Option<Self> {
        let start = log.find(CUSTOM_PROGRAM_ERROR)? + CUSTOM_PROGRAM_ERROR.len();
        let hex: String = log[start..]
            .chars()
            .take_while(char::is_ascii_hexdigit)
            .collect();
        u32::from_str_radix(&hex, 16)
            .ok()
            .and_then(Self::from_code)
    }
}
