use merkle_distributor_client::instructions::{set_admin, SetAdminAccounts};

use crate::*;

pub async fn process_set_admin(args: &Args, set_admin_args: &SetAdminArgs) -> Result<()> {
    let client = args.rpc_client();
    let keypair = args.keypair()?;
    let distributor = args.distributor(set_admin_args.airdrop_version);

    let set_admin_ix = set_admin(
        &args.program_id,
        &SetAdminAccounts {
            distributor,
            admin: keypair.pubkey(),
            new_admin: set_admin_args.new_admin,
        },
        &[],
    );

    let signature = send_transaction(&client, &[set_admin_ix], &keypair, &[&keypair]).await?;
    println!(
        "Successfully set admin {} for airdrop version {}! signature: {signature}",
        set_admin_args.new_admin, set_admin_args.airdrop_version
    );
    Ok(())
}
