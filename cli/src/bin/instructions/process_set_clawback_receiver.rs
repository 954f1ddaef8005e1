use merkle_distributor_client::instructions::{set_clawback_receiver, SetClawbackReceiverAccounts};

use crate::*;

pub async fn process_set_clawback_receiver(
    args: &Args,
    set_clawback_receiver_args: &SetClawbackReceiverArgs,
) -> Result<()> {
    let client = args.rpc_client();
    let reader = AccountReader::new(&client, args.program_id);
    let keypair = args.keypair()?;

    let distributor = args.distributor(set_clawback_receiver_args.airdrop_version);
    let new_clawback_account =
        get_associated_token_address(&set_clawback_receiver_args.receiver, &args.mint);

    let state = fetch_distributor(&reader, &distributor).await?;
    if state.clawback_receiver == new_clawback_account {
        println!(
            "already the same, skip airdrop version {}",
            set_clawback_receiver_args.airdrop_version
        );
        return Ok(());
    }

    let ixs = [
        create_associated_token_account_idempotent(
            &keypair.pubkey(),
            &set_clawback_receiver_args.receiver,
            &args.mint,
            &TOKEN_PROGRAM_ID,
        ),
        set_clawback_receiver(
            &args.program_id,
            &SetClawbackReceiverAccounts {
                distributor,
                new_clawback_account,
                admin: keypair.pubkey(),
            },
            &[],
        ),
    ];

    let signature = send_transaction(&client, &ixs, &keypair, &[&keypair]).await?;
    println!(
        "Successfully set clawback receiver {} airdrop version {}! signature: {signature}",
        new_clawback_account, set_clawback_receiver_args.airdrop_version
    );
    Ok(())
}
