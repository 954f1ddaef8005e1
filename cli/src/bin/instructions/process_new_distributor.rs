use merkle_distributor_client::instructions::{new_distributor, NewDistributorAccounts};

use crate::*;

pub async fn process_new_distributor(
    args: &Args,
    new_distributor_args: &NewDistributorArgs,
) -> Result<()> {
    let client = args.rpc_client();
    let reader = AccountReader::new(&client, args.program_id);
    let keypair = args.keypair()?;
    info!("creating new distributor with args: {new_distributor_args:?}");

    let merkle_tree = AirdropMerkleTree::new_from_file(&new_distributor_args.merkle_tree_path)
        .context("failed to load merkle tree from file")?;
    merkle_tree
        .validate()
        .context("merkle tree failed validation")?;

    let distributor = args.distributor(new_distributor_args.airdrop_version);
    let token_vault = get_token_vault(&distributor, &args.mint);
    let clawback_receiver = get_associated_token_address(&keypair.pubkey(), &args.mint);

    let expected = merkle_distributor_client::instructions::NewDistributorArgs {
        version: new_distributor_args.airdrop_version,
        root: merkle_tree.merkle_root,
        max_total_claim: merkle_tree.max_total_claim,
        max_num_nodes: merkle_tree.max_num_nodes,
        start_vesting_ts: new_distributor_args.start_vesting_ts,
        end_vesting_ts: new_distributor_args.end_vesting_ts,
        clawback_start_ts: new_distributor_args.clawback_start_ts,
    };

    if let Some(onchain) = reader
        .fetch::<MerkleDistributor>(&distributor, Some(CommitmentConfig::confirmed()))
        .await?
    {
        warn!(
            "merkle distributor {} account exists, checking parameters...",
            new_distributor_args.airdrop_version
        );
        return check_distributor_onchain_matches(
            &onchain,
            &expected,
            &args.mint,
            &keypair.pubkey(),
            &clawback_receiver,
        )
        .map_err(|e| anyhow!("{e}! Confirm admin and clawback parameters to avoid loss of funds!"));
    }

    let ixs = [
        create_associated_token_account_idempotent(
            &keypair.pubkey(),
            &keypair.pubkey(),
            &args.mint,
            &TOKEN_PROGRAM_ID,
        ),
        new_distributor(
            &args.program_id,
            &expected,
            &NewDistributorAccounts {
                distributor,
                clawback_receiver,
                mint: args.mint,
                token_vault,
                admin: keypair.pubkey(),
            },
            &[],
        ),
    ];

    let signature = send_transaction(&client, &ixs, &keypair, &[&keypair]).await?;
    println!(
        "done create merkle distributor version {} {signature}",
        new_distributor_args.airdrop_version
    );

    // double check someone didn't frontrun this transaction with a malicious merkle root
    let onchain = reader
        .fetch::<MerkleDistributor>(&distributor, Some(CommitmentConfig::processed()))
        .await?
        .ok_or_else(|| anyhow!("distributor {distributor} missing after creation"))?;
    check_distributor_onchain_matches(
        &onchain,
        &expected,
        &args.mint,
        &keypair.pubkey(),
        &clawback_receiver,
    )
    .map_err(|e| anyhow!("{e}! Confirm admin and clawback parameters to avoid loss of funds!"))
}

/// Anyone can create the distributor PDA first, so every parameter is compared.
pub fn check_distributor_onchain_matches(
    distributor: &MerkleDistributor,
    expected: &merkle_distributor_client::instructions::NewDistributorArgs,
    mint: &Pubkey,
    admin: &Pubkey,
    clawback_receiver: &Pubkey,
) -> std::result::Result<(), &'static str> {
    if distributor.version != expected.version {
        return Err("version mismatch");
    }
    if distributor.mint != *mint {
        return Err("mint mismatch");
    }
    if distributor.root != expected.root {
        return Err("root mismatch");
    }
    if distributor.max_total_claim != expected.max_total_claim {
        return Err("max_total_claim mismatch");
    }
    if distributor.max_num_nodes != expected.max_num_nodes {
        return Err("max_num_nodes mismatch");
    }
    if distributor.start_ts != expected.start_vesting_ts {
        return Err("start_ts mismatch");
    }
    if distributor.end_ts != expected.end_vesting_ts {
        return Err("end_ts mismatch");
    }
    if distributor.clawback_start_ts != expected.clawback_start_ts {
        return Err("clawback_start_ts mismatch");
    }
    if distributor.clawback_receiver != *clawback_receiver {
        return Err("clawback_receiver mismatch");
    }
    if distributor.admin != *admin {
        return Err("admin mismatch");
    }
    Ok(())
}
