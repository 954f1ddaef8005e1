use anchor_lang::{error::ErrorCode, Discriminator};
use borsh::{BorshDeserialize, BorshSerialize};
use solana_program::hash::hash;
use thiserror::Error;

/// Length of the type tag that prefixes every account and instruction payload.
pub const DISCRIMINATOR_SIZE: usize = 8;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CoderError {
    #[error("Invalid discriminator: expected {expected:?}, found {found:?}")]
    InvalidDiscriminator { expected: [u8; 8], found: Vec<u8> },

    #[error("Malformed layout: {0}")]
    MalformedLayout(String),
}

/// Anchor sighash: the first 8 bytes of `sha256("<namespace>:<name>")`.
///
/// Accounts use the `account` namespace with the type name, instructions the
/// `global` namespace with the snake_case method name.
pub fn sighash(namespace: &str, name: &str) -> [u8; 8] {
    let preimage = format!("{namespace}:{name}");
    let mut sighash = [0u8; DISCRIMINATOR_SIZE];
    sighash.copy_from_slice(&hash(preimage.as_bytes()).to_bytes()[..DISCRIMINATOR_SIZE]);
    sighash
}

/// Fixed-layout encoding shared by program accounts and instruction arguments:
/// `discriminator || borsh(fields)`.
pub trait Codec: Discriminator + BorshSerialize + BorshDeserialize {
    fn encode(&self) -> Vec<u8> {
        let mut data = Self::DISCRIMINATOR.to_vec();
        // writing into a Vec cannot fail
        BorshSerialize::serialize(self, &mut data).expect("serialize into Vec");
        data
    }

    /// Decodes `data`, ignoring any bytes past the declared fields.
    fn decode(data: &[u8]) -> Result<Self, CoderError> {
        if data.len() < DISCRIMINATOR_SIZE || data[..DISCRIMINATOR_SIZE] != Self::DISCRIMINATOR {
            return Err(CoderError::InvalidDiscriminator {
                expected: Self::DISCRIMINATOR,
                found: data[..data.len().min(DISCRIMINATOR_SIZE)].to_vec(),
            });
        }

        let mut body = &data[DISCRIMINATOR_SIZE..];
        Self::deserialize(&mut body).map_err(|e| CoderError::MalformedLayout(e.to_string()))
    }
}

impl<T> Codec for T where T: Discriminator + BorshSerialize + BorshDeserialize {}

impl From<CoderError> for anchor_lang::error::Error {
    fn from(e: CoderError) -> Self {
        match e {
            CoderError::InvalidDiscriminator { .. } => ErrorCode::AccountDiscriminatorMismatch.into(),
            CoderError::MalformedLayout(_) => ErrorCode::AccountDidNotDeserialize.into(),
        }
    }
}

/// Backs `AccountDeserialize::try_deserialize_unchecked` for the account types:
/// skips the discriminator without checking it.
pub(crate) fn deserialize_unchecked<T: BorshDeserialize>(buf: &[u8]) -> anchor_lang::Result<T> {
    let mut body = buf
        .get(DISCRIMINATOR_SIZE..)
        .ok_or(ErrorCode::AccountDiscriminatorNotFound)?;
    T::deserialize(&mut body).map_err(|_| ErrorCode::AccountDidNotDeserialize.into())
}
