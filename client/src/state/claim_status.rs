use anchor_lang::{AccountDeserialize, Discriminator, Owner};
use borsh::{BorshDeserialize, BorshSerialize};
use solana_program::pubkey::Pubkey;

use crate::{
    coder::{deserialize_unchecked, Codec},
    error::MerkleDistributorError::{self, ArithmeticError},
};

/// Holds whether or not a claimant has claimed tokens.
#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ClaimStatus {
    /// Authority that claimed the tokens.
    pub claimant: Pubkey,
    /// Locked amount
    pub locked_amount: u64,
    /// Locked amount withdrawn
    pub locked_amount_withdrawn: u64,
    /// Unlocked amount
    pub unlocked_amount: u64,
}

impl ClaimStatus {
    /// Serialized size including the discriminator.
    pub const LEN: usize = 8 + 32 + 8 * 3;

    /// Returns amount withdrawable, factoring in unlocked tokens and previous withdraws.
    /// payout is difference between the amount unlocked and the amount withdrawn
    pub fn amount_withdrawable(
        &self,
        curr_ts: i64,
        start_ts: i64,
        end_ts: i64,
    ) -> Result<u64, MerkleDistributorError> {
        self.unlocked_amount(curr_ts, start_ts, end_ts)?
            .checked_sub(self.locked_amount_withdrawn)
            .ok_or(ArithmeticError)
    }

    /// Portion of `locked_amount` released by `curr_ts`, linear over `[start_ts, end_ts]`.
    ///
    /// The product of two values below 2^64 fits in a u128, and the quotient is
    /// at most `locked_amount`, so the final narrowing cannot truncate.
    pub fn unlocked_amount(
        &self,
        curr_ts: i64,
        start_ts: i64,
        end_ts: i64,
    ) -> Result<u64, MerkleDistributorError> {
        if curr_ts < start_ts {
            return Ok(0);
        }
        if curr_ts >= end_ts {
            return Ok(self.locked_amount);
        }

        let time_into_unlock = curr_ts.checked_sub(start_ts).ok_or(ArithmeticError)?;
        let total_unlock_time = end_ts.checked_sub(start_ts).ok_or(ArithmeticError)?;

        let amount = (time_into_unlock as u128)
            .checked_mul(self.locked_amount as u128)
            .ok_or(ArithmeticError)?
            .checked_div(total_unlock_time as u128)
            .ok_or(ArithmeticError)?;

        u64::try_from(amount).map_err(|_| ArithmeticError)
    }
}

impl Discriminator for ClaimStatus {
    const DISCRIMINATOR: [u8; 8] = [0x16, 0xb7, 0xf9, 0x9d, 0xf7, 0x5f, 0x96, 0x60];
}

impl Owner for ClaimStatus {
    fn owner() -> Pubkey {
        crate::ID
    }
}

impl AccountDeserialize for ClaimStatus {
    fn try_deserialize(buf: &mut &[u8]) -> anchor_lang::Result<Self> {
        Ok(Self::decode(*buf)?)
    }

    fn try_deserialize_unchecked(buf: &mut &[u8]) -> anchor_lang::Result<Self> {
        deserialize_unchecked(*buf)
    }
}
