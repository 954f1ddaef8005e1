pub mod claim_status;
pub mod merkle_distributor;

pub use claim_status::ClaimStatus;
pub use merkle_distributor::MerkleDistributor;
