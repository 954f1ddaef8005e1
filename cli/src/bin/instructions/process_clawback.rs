use merkle_distributor_client::instructions::{clawback, ClawbackAccounts};

use crate::*;

pub async fn process_clawback(args: &Args, clawback_args: &ClawbackArgs) -> Result<()> {
    let client = args.rpc_client();
    let reader = AccountReader::new(&client, args.program_id);
    let payer_keypair = args.keypair()?;
    let clawback_keypair = read_keypair(&clawback_args.clawback_keypair_path)?;

    let distributor = args.distributor(clawback_args.airdrop_version);
    let state = fetch_distributor(&reader, &distributor).await?;

    let clawback_ix = clawback(
        &args.program_id,
        &ClawbackAccounts {
            distributor,
            from: state.token_vault,
            to: state.clawback_receiver,
            claimant: clawback_keypair.pubkey(),
        },
        &[],
    );

    let signature = send_transaction(
        &client,
        &[clawback_ix],
        &payer_keypair,
        &[&payer_keypair, &clawback_keypair],
    )
    .await?;

    println!("Successfully clawed back funds! signature: {signature}");
    Ok(())
}
