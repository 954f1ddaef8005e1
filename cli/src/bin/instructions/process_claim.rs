use merkle_distributor_client::instructions::{
    claim_locked, new_claim, ClaimLockedAccounts, NewClaimAccounts, NewClaimArgs,
};

use crate::*;

/// First call creates the claim with `new_claim`; later calls withdraw vested
/// tokens with `claim_locked`.
pub async fn process_claim(args: &Args, claim_args: &ClaimArgs) -> Result<()> {
    let client = args.rpc_client();
    let reader = AccountReader::new(&client, args.program_id);
    let keypair = args.keypair()?;
    let claimant = keypair.pubkey();

    let merkle_tree = AirdropMerkleTree::new_from_file(&claim_args.merkle_tree_path)
        .context("failed to load merkle tree from file")?;

    let distributor = args.distributor(claim_args.airdrop_version);
    let (claim_status, _bump) = get_claim_status_pda(&args.program_id, &claimant, &distributor);
    debug!("distributor {distributor}, claim status {claim_status}");

    let from = get_token_vault(&distributor, &args.mint);
    let to = get_associated_token_address(&claimant, &args.mint);

    let ixs = match reader.fetch::<ClaimStatus>(&claim_status, None).await? {
        None => {
            let node = merkle_tree
                .get_node(&claimant)
                .ok_or_else(|| anyhow!("claimant {claimant} not found in merkle tree"))?;
            println!("Claiming tokens for user {claimant}...");
            vec![
                create_associated_token_account_idempotent(
                    &claimant,
                    &claimant,
                    &args.mint,
                    &TOKEN_PROGRAM_ID,
                ),
                new_claim(
                    &args.program_id,
                    &NewClaimArgs {
                        amount_unlocked: node.amount_unlocked,
                        amount_locked: node.amount_locked,
                        proof: node.proof.clone(),
                    },
                    &NewClaimAccounts {
                        distributor,
                        claim_status,
                        from,
                        to,
                        claimant,
                    },
                    &[],
                ),
            ]
        }
        Some(_) => {
            println!("Withdrawing vested tokens for user {claimant}...");
            vec![claim_locked(
                &args.program_id,
                &ClaimLockedAccounts {
                    distributor,
                    claim_status,
                    from,
                    to,
                    claimant,
                },
                &[],
            )]
        }
    };

    let signature = send_transaction(&client, &ixs, &keypair, &[&keypair]).await?;
    println!("successfully claimed tokens with signature {signature}");
    Ok(())
}
