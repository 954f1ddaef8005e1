//! Client bindings for the Merkle distributor program.
//!
//! The on-chain program lets claimants withdraw an allocation committed to by a
//! [Merkle root](https://en.wikipedia.org/wiki/Merkle_tree), vesting the locked part
//! linearly between `start_ts` and `end_ts`, and lets anyone claw back whatever is
//! left once `clawback_start_ts` has passed.
//!
//! This crate does not run any of that logic. It mirrors the program's wire surface:
//!
//! - [state]: the `MerkleDistributor` and `ClaimStatus` account layouts.
//! - [instructions]: payload and account-list builders for the six program calls.
//! - [error]: the program's error code table.
//! - [fetch]: reading and decoding program accounts from an RPC node.
//! - [pda]: address derivation for distributors and claim statuses.

use anchor_lang::prelude::*;

pub mod coder;
pub mod error;
pub mod fetch;
pub mod instructions;
pub mod pda;
pub mod state;

pub use coder::{sighash, Codec, CoderError};
pub use error::MerkleDistributorError;
pub use fetch::{AccountReader, AccountSource, FetchError};

declare_id!("meRjbQXFNf5En86FXT2YPz1dQzLj4Yb3xK8u1MVgqpb");
