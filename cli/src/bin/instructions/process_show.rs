use std::time::{SystemTime, UNIX_EPOCH};

use crate::*;

pub async fn process_show_distributor(args: &Args, show_args: &ShowDistributorArgs) -> Result<()> {
    let client = args.rpc_client();
    let reader = AccountReader::new(&client, args.program_id);

    let distributor = args.distributor(show_args.airdrop_version);
    let state = fetch_distributor(&reader, &distributor).await?;

    println!("distributor {distributor}: {state:#?}");
    Ok(())
}

pub async fn process_show_claim_status(
    args: &Args,
    show_args: &ShowClaimStatusArgs,
) -> Result<()> {
    let client = args.rpc_client();
    let reader = AccountReader::new(&client, args.program_id);
    let claimant = match show_args.claimant {
        Some(claimant) => claimant,
        None => args.keypair()?.pubkey(),
    };

    let distributor = args.distributor(show_args.airdrop_version);
    let (claim_status, _bump) = get_claim_status_pda(&args.program_id, &claimant, &distributor);

    let state = fetch_distributor(&reader, &distributor).await?;
    let Some(status) = reader.fetch::<ClaimStatus>(&claim_status, None).await? else {
        println!("claimant {claimant} has not claimed from distributor {distributor}");
        return Ok(());
    };

    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .context("system clock before unix epoch")?
        .as_secs() as i64;
    let withdrawable = status
        .amount_withdrawable(now, state.start_ts, state.end_ts)
        .context("failed to compute withdrawable amount")?;

    println!("claim status {claim_status}: {status:#?}");
    println!("withdrawable now: {withdrawable}");
    Ok(())
}
