use solana_program::pubkey::Pubkey;

pub const MERKLE_DISTRIBUTOR_SEED: &[u8] = b"MerkleDistributor";
pub const CLAIM_STATUS_SEED: &[u8] = b"ClaimStatus";

/// The distributor PDA is keyed by mint and airdrop version, the version as a single byte.
pub fn get_merkle_distributor_pda(
    program_id: &Pubkey,
    mint: &Pubkey,
    version: u8,
) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            MERKLE_DISTRIBUTOR_SEED,
            mint.as_ref(),
            version.to_le_bytes().as_ref(),
        ],
        program_id,
    )
}

pub fn get_claim_status_pda(
    program_id: &Pubkey,
    claimant: &Pubkey,
    distributor: &Pubkey,
) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            CLAIM_STATUS_SEED,
            claimant.to_bytes().as_ref(),
            distributor.to_bytes().as_ref(),
        ],
        program_id,
    )
}

/// Associated token account of `distributor` for `mint`; the program expects the vault here.
pub fn get_token_vault(distributor: &Pubkey, mint: &Pubkey) -> Pubkey {
    spl_associated_token_account::get_associated_token_address(distributor, mint)
}
