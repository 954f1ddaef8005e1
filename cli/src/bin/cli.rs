mod instructions;

use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand};
use distributor_merkle_tree::airdrop_merkle_tree::AirdropMerkleTree;
use merkle_distributor_client::{
    instructions::TOKEN_PROGRAM_ID,
    pda::{get_claim_status_pda, get_merkle_distributor_pda, get_token_vault},
    state::{ClaimStatus, MerkleDistributor},
    AccountReader, MerkleDistributorError,
};
use solana_program::{instruction::Instruction, pubkey::Pubkey};
use solana_rpc_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::{
    commitment_config::CommitmentConfig,
    signature::Signature,
    signer::{
        keypair::{read_keypair_file, Keypair},
        Signer,
    },
    transaction::Transaction,
};
use spl_associated_token_account::{
    get_associated_token_address, instruction::create_associated_token_account_idempotent,
};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use crate::instructions::*;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    #[clap(subcommand)]
    pub command: Commands,

    /// SPL Mint address
    #[clap(long, env, default_value_t = Pubkey::default())]
    pub mint: Pubkey,

    /// RPC url
    #[clap(long, env, default_value = "http://localhost:8899")]
    pub rpc_url: String,

    /// Program id
    #[clap(long, env, default_value_t = merkle_distributor_client::ID)]
    pub program_id: Pubkey,

    /// Payer keypair
    #[clap(long, env)]
    pub keypair_path: Option<PathBuf>,
}

impl Args {
    fn rpc_client(&self) -> RpcClient {
        RpcClient::new_with_commitment(self.rpc_url.clone(), CommitmentConfig::confirmed())
    }

    fn keypair(&self) -> Result<Keypair> {
        let path = self
            .keypair_path
            .as_ref()
            .ok_or_else(|| anyhow!("--keypair-path is required for this command"))?;
        read_keypair(path)
    }

    fn distributor(&self, airdrop_version: u8) -> Pubkey {
        get_merkle_distributor_pda(&self.program_id, &self.mint, airdrop_version).0
    }
}

// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new instance of a merkle distributor
    NewDistributor(NewDistributorArgs),
    /// Claim unlocked tokens, or withdraw vested tokens once claimed
    Claim(ClaimArgs),
    /// Clawback tokens from merkle distributor
    Clawback(ClawbackArgs),
    SetAdmin(SetAdminArgs),
    SetClawbackReceiver(SetClawbackReceiverArgs),
    /// Print a distributor account
    ShowDistributor(ShowDistributorArgs),
    /// Print a claim status and what is withdrawable now
    ShowClaimStatus(ShowClaimStatusArgs),
    /// Look up a program error code, decimal or 0x-prefixed hex
    ExplainError(ExplainErrorArgs),
}

#[derive(Parser, Debug)]
pub struct NewDistributorArgs {
    /// Lockup timestamp start
    #[clap(long, env)]
    pub start_vesting_ts: i64,

    /// Lockup timestamp end (unix timestamp)
    #[clap(long, env)]
    pub end_vesting_ts: i64,

    /// Merkle tree path
    #[clap(long, env)]
    pub merkle_tree_path: PathBuf,

    /// When to make the clawback period start. Must not be before end_vesting_ts
    #[clap(long, env)]
    pub clawback_start_ts: i64,

    #[clap(long, env, default_value_t = 0)]
    pub airdrop_version: u8,
}

#[derive(Parser, Debug)]
pub struct ClaimArgs {
    /// Merkle tree path
    #[clap(long, env)]
    pub merkle_tree_path: PathBuf,

    #[clap(long, env, default_value_t = 0)]
    pub airdrop_version: u8,
}

#[derive(Parser, Debug)]
pub struct ClawbackArgs {
    #[clap(long, env)]
    pub clawback_keypair_path: PathBuf,

    #[clap(long, env, default_value_t = 0)]
    pub airdrop_version: u8,
}

#[derive(Parser, Debug)]
pub struct SetAdminArgs {
    #[clap(long, env)]
    pub new_admin: Pubkey,

    #[clap(long, env, default_value_t = 0)]
    pub airdrop_version: u8,
}

#[derive(Parser, Debug)]
pub struct SetClawbackReceiverArgs {
    /// Wallet whose associated token account becomes the clawback receiver
    #[clap(long, env)]
    pub receiver: Pubkey,

    #[clap(long, env, default_value_t = 0)]
    pub airdrop_version: u8,
}

#[derive(Parser, Debug)]
pub struct ShowDistributorArgs {
    #[clap(long, env, default_value_t = 0)]
    pub airdrop_version: u8,
}

#[derive(Parser, Debug)]
pub struct ShowClaimStatusArgs {
    /// Defaults to the payer keypair's address
    #[clap(long, env)]
    pub claimant: Option<Pubkey>,

    #[clap(long, env, default_value_t = 0)]
    pub airdrop_version: u8,
}

#[derive(Parser, Debug)]
pub struct ExplainErrorArgs {
    pub code: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    debug!("args: {:?}", args);

    match &args.command {
        Commands::NewDistributor(new_distributor_args) => {
            process_new_distributor(&args, new_distributor_args).await
        }
        Commands::Claim(claim_args) => process_claim(&args, claim_args).await,
        Commands::Clawback(clawback_args) => process_clawback(&args, clawback_args).await,
        Commands::SetAdmin(set_admin_args) => process_set_admin(&args, set_admin_args).await,
        Commands::SetClawbackReceiver(set_clawback_receiver_args) => {
            process_set_clawback_receiver(&args, set_clawback_receiver_args).await
        }
        Commands::ShowDistributor(show_args) => process_show_distributor(&args, show_args).await,
        Commands::ShowClaimStatus(show_args) => process_show_claim_status(&args, show_args).await,
        Commands::ExplainError(explain_args) => process_explain_error(explain_args),
    }
}

fn read_keypair(path: &Path) -> Result<Keypair> {
    read_keypair_file(path)
        .map_err(|e| anyhow!("Failed reading keypair file {}: {e}", path.display()))
}

/// Fetches a distributor account, failing if it does not exist.
async fn fetch_distributor(
    reader: &AccountReader<&RpcClient>,
    distributor: &Pubkey,
) -> Result<MerkleDistributor> {
    reader
        .fetch::<MerkleDistributor>(distributor, None)
        .await?
        .ok_or_else(|| anyhow!("distributor {distributor} not found"))
}

/// Signs and sends `ixs`, turning program errors into their table entry.
async fn send_transaction(
    client: &RpcClient,
    ixs: &[Instruction],
    payer: &Keypair,
    signers: &[&Keypair],
) -> Result<Signature> {
    let blockhash = client
        .get_latest_blockhash()
        .await
        .context("failed to fetch blockhash")?;
    let tx = Transaction::new_signed_with_payer(ixs, Some(&payer.pubkey()), signers, blockhash);

    match client.send_and_confirm_transaction_with_spinner(&tx).await {
        Ok(signature) => {
            info!("confirmed transaction {signature}");
            Ok(signature)
        }
        Err(e) => {
            let program_error = e
                .get_transaction_error()
                .as_ref()
                .and_then(MerkleDistributorError::from_transaction_error);
            match program_error {
                Some(program_error) => bail!(
                    "program error {} {}: {}",
                    program_error.code(),
                    program_error.name(),
                    program_error.message()
                ),
                None => Err(e).context("transaction failed"),
            }
        }
    }
}
