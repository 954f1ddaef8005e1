//! In-memory ledger that runs the distributor's state machine against
//! instructions produced by the client builders.
#![allow(dead_code)]

use std::{collections::HashMap, sync::Mutex};

use anchor_lang::Discriminator;
use async_trait::async_trait;
use merkle_distributor_client::{
    instructions::{
        ClaimLockedArgs, ClawbackArgs, NewClaimArgs, NewDistributorArgs, SetAdminArgs,
        SetClawbackReceiverArgs,
    },
    pda::{get_claim_status_pda, get_merkle_distributor_pda, get_token_vault},
    state::{ClaimStatus, MerkleDistributor},
    AccountSource, Codec, FetchError, MerkleDistributorError,
};
use solana_program::{
    hash::hashv,
    instruction::{Instruction, InstructionError},
    pubkey::Pubkey,
};
use solana_sdk::{
    account::Account, commitment_config::CommitmentConfig, transaction::TransactionError,
};

/// How far ahead of the clock a distributor's vesting may start.
pub const MAX_START_OFFSET: i64 = 365 * 24 * 60 * 60;

const LEAF_PREFIX: &[u8] = &[0];
const INTERMEDIATE_PREFIX: &[u8] = &[1];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TokenAccount {
    pub mint: Pubkey,
    pub owner: Pubkey,
    pub amount: u64,
}

#[derive(Clone, Default)]
struct Bank {
    unix_timestamp: i64,
    accounts: HashMap<Pubkey, Account>,
    token_accounts: HashMap<Pubkey, TokenAccount>,
}

#[derive(Default)]
pub struct Ledger {
    program_id: Pubkey,
    bank: Mutex<Bank>,
}

type IxResult = Result<(), InstructionError>;

fn program_error(e: MerkleDistributorError) -> InstructionError {
    InstructionError::Custom(e.code())
}

fn require(condition: bool, e: MerkleDistributorError) -> IxResult {
    if condition {
        Ok(())
    } else {
        Err(program_error(e))
    }
}

impl Ledger {
    pub fn new(unix_timestamp: i64) -> Self {
        Self {
            program_id: merkle_distributor_client::ID,
            bank: Mutex::new(Bank {
                unix_timestamp,
                ..Bank::default()
            }),
        }
    }

    pub fn clock(&self) -> i64 {
        self.bank.lock().unwrap().unix_timestamp
    }

    pub fn warp_to(&self, unix_timestamp: i64) {
        self.bank.lock().unwrap().unix_timestamp = unix_timestamp;
    }

    pub fn set_account(&self, address: Pubkey, account: Account) {
        self.bank.lock().unwrap().accounts.insert(address, account);
    }

    pub fn set_token_account(&self, address: Pubkey, mint: Pubkey, owner: Pubkey, amount: u64) {
        self.bank
            .lock()
            .unwrap()
            .token_accounts
            .insert(address, TokenAccount { mint, owner, amount });
    }

    pub fn token_balance(&self, address: &Pubkey) -> u64 {
        self.bank
            .lock()
            .unwrap()
            .token_accounts
            .get(address)
            .map(|t| t.amount)
            .unwrap_or_default()
    }

    pub fn distributor(&self, address: &Pubkey) -> Option<MerkleDistributor> {
        let bank = self.bank.lock().unwrap();
        bank.accounts
            .get(address)
            .map(|a| MerkleDistributor::decode(&a.data).unwrap())
    }

    /// Executes all instructions or none of them. The signer set covers the
    /// whole transaction.
    pub fn process_transaction(
        &self,
        instructions: &[Instruction],
        signers: &[Pubkey],
    ) -> Result<(), TransactionError> {
        let mut bank = self.bank.lock().unwrap();
        let mut working = bank.clone();

        for (index, ix) in instructions.iter().enumerate() {
            self.process_instruction(&mut working, ix, signers)
                .map_err(|e| TransactionError::InstructionError(index as u8, e))?;
        }

        *bank = working;
        Ok(())
    }

    fn process_instruction(&self, bank: &mut Bank, ix: &Instruction, signers: &[Pubkey]) -> IxResult {
        if ix.program_id != self.program_id {
            return Err(InstructionError::IncorrectProgramId);
        }
        if ix
            .accounts
            .iter()
            .any(|m| m.is_signer && !signers.contains(&m.pubkey))
        {
            return Err(InstructionError::MissingRequiredSignature);
        }

        let keys: Vec<Pubkey> = ix.accounts.iter().map(|m| m.pubkey).collect();
        let tag = ix.data.get(..8).ok_or(InstructionError::InvalidInstructionData)?;

        if tag == NewDistributorArgs::DISCRIMINATOR {
            let args = NewDistributorArgs::decode(&ix.data)
                .map_err(|_| InstructionError::InvalidInstructionData)?;
            self.new_distributor(bank, &args, account_keys::<5>(&keys)?)
        } else if tag == NewClaimArgs::DISCRIMINATOR {
            let args = NewClaimArgs::decode(&ix.data)
                .map_err(|_| InstructionError::InvalidInstructionData)?;
            self.new_claim(bank, &args, account_keys::<5>(&keys)?)
        } else if tag == ClaimLockedArgs::DISCRIMINATOR {
            self.claim_locked(bank, account_keys::<5>(&keys)?)
        } else if tag == ClawbackArgs::DISCRIMINATOR {
            self.clawback(bank, account_keys::<4>(&keys)?)
        } else if tag == SetClawbackReceiverArgs::DISCRIMINATOR {
            self.set_clawback_receiver(bank, account_keys::<3>(&keys)?)
        } else if tag == SetAdminArgs::DISCRIMINATOR {
            self.set_admin(bank, account_keys::<3>(&keys)?)
        } else {
            Err(InstructionError::InvalidInstructionData)
        }
    }

    fn new_distributor(
        &self,
        bank: &mut Bank,
        args: &NewDistributorArgs,
        [distributor, clawback_receiver, mint, token_vault, admin]: [Pubkey; 5],
    ) -> IxResult {
        let (expected, bump) = get_merkle_distributor_pda(&self.program_id, &mint, args.version);
        if distributor != expected {
            return Err(InstructionError::InvalidSeeds);
        }
        if bank.accounts.contains_key(&distributor) {
            return Err(InstructionError::AccountAlreadyInitialized);
        }
        if token_vault != get_token_vault(&distributor, &mint) {
            return Err(InstructionError::InvalidArgument);
        }

        require(
            args.start_vesting_ts < args.end_vesting_ts,
            MerkleDistributorError::InvalidTimestamp,
        )?;
        require(
            args.start_vesting_ts <= bank.unix_timestamp.saturating_add(MAX_START_OFFSET),
            MerkleDistributorError::DepositStartTooFarInFuture,
        )?;
        require(
            args.clawback_start_ts >= args.end_vesting_ts,
            MerkleDistributorError::ClawbackBeforeVestingEnd,
        )?;

        bank.token_accounts.entry(token_vault).or_insert(TokenAccount {
            mint,
            owner: distributor,
            amount: 0,
        });

        let state = MerkleDistributor {
            bump,
            version: args.version,
            root: args.root,
            mint,
            token_vault,
            max_total_claim: args.max_total_claim,
            max_num_nodes: args.max_num_nodes,
            total_amount_claimed: 0,
            num_nodes_claimed: 0,
            start_ts: args.start_vesting_ts,
            end_ts: args.end_vesting_ts,
            clawback_start_ts: args.clawback_start_ts,
            clawback_receiver,
            admin,
            clawed_back: false,
        };
        self.store(bank, distributor, state.encode());
        Ok(())
    }

    fn new_claim(
        &self,
        bank: &mut Bank,
        args: &NewClaimArgs,
        [distributor, claim_status, from, to, claimant]: [Pubkey; 5],
    ) -> IxResult {
        let mut state: MerkleDistributor = self.load(bank, &distributor)?;

        let (expected, _) = get_claim_status_pda(&self.program_id, &claimant, &distributor);
        if claim_status != expected {
            return Err(InstructionError::InvalidSeeds);
        }
        if bank.accounts.contains_key(&claim_status) {
            return Err(InstructionError::AccountAlreadyInitialized);
        }
        if from != state.token_vault {
            return Err(InstructionError::InvalidArgument);
        }
        check_destination(bank, &to, &state.mint, &claimant)?;

        require(
            state.is_claim_window_open(bank.unix_timestamp),
            MerkleDistributorError::ClaimExpired,
        )?;

        state.num_nodes_claimed = state
            .num_nodes_claimed
            .checked_add(1)
            .ok_or_else(|| program_error(MerkleDistributorError::ArithmeticError))?;
        require(
            state.num_nodes_claimed <= state.max_num_nodes,
            MerkleDistributorError::ExceededMaxNumNodes,
        )?;

        let node = leaf(&claimant, args.amount_unlocked, args.amount_locked);
        require(
            verify(&args.proof, state.root, node),
            MerkleDistributorError::InvalidProof,
        )?;

        transfer(bank, &from, &to, args.amount_unlocked)?;

        state.total_amount_claimed = state
            .total_amount_claimed
            .checked_add(args.amount_unlocked)
            .ok_or_else(|| program_error(MerkleDistributorError::ArithmeticError))?;
        require(
            state.total_amount_claimed <= state.max_total_claim,
            MerkleDistributorError::ExceededMaxClaim,
        )?;

        let status = ClaimStatus {
            claimant,
            locked_amount: args.amount_locked,
            locked_amount_withdrawn: 0,
            unlocked_amount: args.amount_unlocked,
        };
        self.store(bank, claim_status, status.encode());
        self.store(bank, distributor, state.encode());
        Ok(())
    }

    fn claim_locked(
        &self,
        bank: &mut Bank,
        [distributor, claim_status, from, to, claimant]: [Pubkey; 5],
    ) -> IxResult {
        let mut state: MerkleDistributor = self.load(bank, &distributor)?;
        let mut status: ClaimStatus = self.load(bank, &claim_status)?;

        if status.claimant != claimant {
            return Err(program_error(MerkleDistributorError::OwnerMismatch));
        }
        if from != state.token_vault {
            return Err(InstructionError::InvalidArgument);
        }
        check_destination(bank, &to, &state.mint, &claimant)?;

        require(
            state.is_claim_window_open(bank.unix_timestamp),
            MerkleDistributorError::ClaimExpired,
        )?;

        let amount = status
            .amount_withdrawable(bank.unix_timestamp, state.start_ts, state.end_ts)
            .map_err(program_error)?;
        require(amount > 0, MerkleDistributorError::InsufficientUnlockedTokens)?;

        transfer(bank, &from, &to, amount)?;

        status.locked_amount_withdrawn = status
            .locked_amount_withdrawn
            .checked_add(amount)
            .ok_or_else(|| program_error(MerkleDistributorError::ArithmeticError))?;
        require(
            status.locked_amount_withdrawn <= status.locked_amount,
            MerkleDistributorError::ExceededMaxClaim,
        )?;

        state.total_amount_claimed = state
            .total_amount_claimed
            .checked_add(amount)
            .ok_or_else(|| program_error(MerkleDistributorError::ArithmeticError))?;
        require(
            state.total_amount_claimed <= state.max_total_claim,
            MerkleDistributorError::ExceededMaxClaim,
        )?;

        self.store(bank, claim_status, status.encode());
        self.store(bank, distributor, state.encode());
        Ok(())
    }

    fn clawback(&self, bank: &mut Bank, [distributor, from, to, _claimant]: [Pubkey; 4]) -> IxResult {
        let mut state: MerkleDistributor = self.load(bank, &distributor)?;

        require(!state.clawed_back, MerkleDistributorError::ClawbackAlreadyClaimed)?;
        require(
            bank.unix_timestamp >= state.clawback_start_ts,
            MerkleDistributorError::ClawbackBeforeStart,
        )?;
        if from != state.token_vault || to != state.clawback_receiver {
            return Err(InstructionError::InvalidArgument);
        }

        let remaining = bank
            .token_accounts
            .get(&from)
            .map(|t| t.amount)
            .ok_or(InstructionError::UninitializedAccount)?;
        transfer(bank, &from, &to, remaining)?;

        state.clawed_back = true;
        self.store(bank, distributor, state.encode());
        Ok(())
    }

    fn set_clawback_receiver(
        &self,
        bank: &mut Bank,
        [distributor, new_clawback_account, admin]: [Pubkey; 3],
    ) -> IxResult {
        let mut state: MerkleDistributor = self.load(bank, &distributor)?;

        require(admin == state.admin, MerkleDistributorError::Unauthorized)?;
        require(
            new_clawback_account != state.clawback_receiver,
            MerkleDistributorError::ClawbackNewReceiverCannotBeSame,
        )?;

        state.clawback_receiver = new_clawback_account;
        self.store(bank, distributor, state.encode());
        Ok(())
    }

    fn set_admin(&self, bank: &mut Bank, [distributor, admin, new_admin]: [Pubkey; 3]) -> IxResult {
        let mut state: MerkleDistributor = self.load(bank, &distributor)?;

        require(admin == state.admin, MerkleDistributorError::Unauthorized)?;
        require(new_admin != state.admin, MerkleDistributorError::NewAdminCannotBeSame)?;

        state.admin = new_admin;
        self.store(bank, distributor, state.encode());
        Ok(())
    }

    fn load<T: Codec>(&self, bank: &Bank, address: &Pubkey) -> Result<T, InstructionError> {
        let account = bank
            .accounts
            .get(address)
            .ok_or(InstructionError::UninitializedAccount)?;
        if account.owner != self.program_id {
            return Err(InstructionError::IncorrectProgramId);
        }
        T::decode(&account.data).map_err(|_| InstructionError::InvalidAccountData)
    }

    fn store(&self, bank: &mut Bank, address: Pubkey, data: Vec<u8>) {
        bank.accounts.insert(
            address,
            Account {
                lamports: 1_000_000,
                data,
                owner: self.program_id,
                executable: false,
                rent_epoch: 0,
            },
        );
    }
}

fn account_keys<const N: usize>(keys: &[Pubkey]) -> Result<[Pubkey; N], InstructionError> {
    keys.get(..N)
        .and_then(|k| k.try_into().ok())
        .ok_or(InstructionError::NotEnoughAccountKeys)
}

fn check_destination(bank: &Bank, to: &Pubkey, mint: &Pubkey, claimant: &Pubkey) -> IxResult {
    let account = bank
        .token_accounts
        .get(to)
        .ok_or(InstructionError::UninitializedAccount)?;
    if account.mint != *mint {
        return Err(InstructionError::InvalidAccountData);
    }
    require(
        account.owner == *claimant,
        MerkleDistributorError::OwnerMismatch,
    )
}

fn transfer(bank: &mut Bank, from: &Pubkey, to: &Pubkey, amount: u64) -> IxResult {
    let source = bank
        .token_accounts
        .get_mut(from)
        .ok_or(InstructionError::UninitializedAccount)?;
    source.amount = source
        .amount
        .checked_sub(amount)
        .ok_or(InstructionError::InsufficientFunds)?;

    let destination = bank
        .token_accounts
        .get_mut(to)
        .ok_or(InstructionError::UninitializedAccount)?;
    destination.amount = destination
        .amount
        .checked_add(amount)
        .ok_or(InstructionError::ArithmeticOverflow)?;
    Ok(())
}

#[async_trait]
impl AccountSource for Ledger {
    async fn get_account(
        &self,
        address: &Pubkey,
        _commitment: Option<CommitmentConfig>,
    ) -> Result<Option<Account>, FetchError> {
        Ok(self.bank.lock().unwrap().accounts.get(address).cloned())
    }

    async fn get_multiple_accounts(
        &self,
        addresses: &[Pubkey],
        _commitment: Option<CommitmentConfig>,
    ) -> Result<Vec<Option<Account>>, FetchError> {
        let bank = self.bank.lock().unwrap();
        Ok(addresses
            .iter()
            .map(|a| bank.accounts.get(a).cloned())
            .collect())
    }
}

pub fn leaf(claimant: &Pubkey, amount_unlocked: u64, amount_locked: u64) -> [u8; 32] {
    let node = hashv(&[
        &claimant.to_bytes(),
        &amount_unlocked.to_le_bytes(),
        &amount_locked.to_le_bytes(),
    ]);
    hashv(&[LEAF_PREFIX, &node.to_bytes()]).to_bytes()
}

fn hash_pair(a: &[u8; 32], b: &[u8; 32]) -> [u8; 32] {
    if a <= b {
        hashv(&[INTERMEDIATE_PREFIX, a, b]).to_bytes()
    } else {
        hashv(&[INTERMEDIATE_PREFIX, b, a]).to_bytes()
    }
}

pub fn verify(proof: &[[u8; 32]], root: [u8; 32], leaf: [u8; 32]) -> bool {
    proof.iter().fold(leaf, |acc, sibling| hash_pair(&acc, sibling)) == root
}

/// Builds a sorted-pair tree over `leaves`, returning the root and one proof
/// per leaf. An unpaired node is carried up to the next level as is.
pub fn build_tree(leaves: &[[u8; 32]]) -> ([u8; 32], Vec<Vec<[u8; 32]>>) {
    assert!(!leaves.is_empty());

    let mut layer = leaves.to_vec();
    let mut positions: Vec<usize> = (0..leaves.len()).collect();
    let mut proofs = vec![Vec::new(); leaves.len()];

    while layer.len() > 1 {
        for (proof, position) in proofs.iter_mut().zip(positions.iter_mut()) {
            if let Some(sibling) = layer.get(*position ^ 1) {
                proof.push(*sibling);
            }
            *position /= 2;
        }
        layer = layer
            .chunks(2)
            .map(|pair| match pair {
                [a, b] => hash_pair(a, b),
                [a] => *a,
                _ => unreachable!(),
            })
            .collect();
    }

    (layer[0], proofs)
}

/// A distributor for `mint` created through `new_distributor`, with its vault
/// funded and a clawback receiver token account in place.
pub struct Fixture {
    pub ledger: Ledger,
    pub mint: Pubkey,
    pub admin: Pubkey,
    pub distributor: Pubkey,
    pub token_vault: Pubkey,
    pub clawback_receiver: Pubkey,
}

impl Fixture {
    pub fn clawback_owner(&self) -> Pubkey {
        self.ledger
            .bank
            .lock()
            .unwrap()
            .token_accounts
            .get(&self.clawback_receiver)
            .map(|t| t.owner)
            .unwrap()
    }
}

pub struct Schedule {
    pub clock: i64,
    pub start_ts: i64,
    pub end_ts: i64,
    pub clawback_start_ts: i64,
}

/// Creates a funded distributor over `root`.
pub fn setup_distributor(
    schedule: &Schedule,
    root: [u8; 32],
    max_total_claim: u64,
    max_num_nodes: u64,
) -> Fixture {
    use merkle_distributor_client::instructions::{new_distributor, NewDistributorAccounts};

    let ledger = Ledger::new(schedule.clock);
    let program_id = merkle_distributor_client::ID;
    let mint = Pubkey::new_unique();
    let admin = Pubkey::new_unique();
    let clawback_owner = Pubkey::new_unique();
    let clawback_receiver = Pubkey::new_unique();
    ledger.set_token_account(clawback_receiver, mint, clawback_owner, 0);

    let (distributor, _) = get_merkle_distributor_pda(&program_id, &mint, 0);
    let token_vault = get_token_vault(&distributor, &mint);

    let ix = new_distributor(
        &program_id,
        &NewDistributorArgs {
            version: 0,
            root,
            max_total_claim,
            max_num_nodes,
            start_vesting_ts: schedule.start_ts,
            end_vesting_ts: schedule.end_ts,
            clawback_start_ts: schedule.clawback_start_ts,
        },
        &NewDistributorAccounts {
            distributor,
            clawback_receiver,
            mint,
            token_vault,
            admin,
        },
        &[],
    );
    ledger.process_transaction(&[ix], &[admin]).unwrap();
    ledger.set_token_account(token_vault, mint, distributor, max_total_claim);

    Fixture {
        ledger,
        mint,
        admin,
        distributor,
        token_vault,
        clawback_receiver,
    }
}
