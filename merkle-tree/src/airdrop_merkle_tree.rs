use std::{
    collections::{HashMap, HashSet},
    fs::File,
    io::{BufReader, Read, Write},
    path::PathBuf,
    result,
};

use serde::{Deserialize, Serialize};
use solana_program::pubkey::Pubkey;
use tracing::debug;

use crate::{
    error::{MerkleTreeError, MerkleTreeError::MerkleValidationError},
    tree_node::TreeNode,
    utils::get_max_total_claim,
};

/// Merkle Tree which will be used to distribute tokens to claimants.
/// Holds the root committed on-chain and, per claimant, the amounts and proof
/// submitted with `new_claim`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AirdropMerkleTree {
    /// The merkle root, which is uploaded on-chain
    pub merkle_root: [u8; 32],
    pub max_num_nodes: u64,
    pub max_total_claim: u64,
    pub tree_nodes: Vec<TreeNode>,
}

pub type Result<T> = result::Result<T, MerkleTreeError>;

impl AirdropMerkleTree {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn new_from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Load a serialized merkle tree from file path
    pub fn new_from_file(path: &PathBuf) -> Result<Self> {
        let file = File::open(path)?;
        let tree = Self::new_from_reader(BufReader::new(file))?;
        debug!(
            "loaded merkle tree with {} nodes from {}",
            tree.tree_nodes.len(),
            path.display()
        );
        Ok(tree)
    }

    /// Write a merkle tree to a filepath
    pub fn write_to_file(&self, path: &PathBuf) -> Result<()> {
        let serialized = serde_json::to_string_pretty(&self)?;
        let mut file = File::create(path)?;
        file.write_all(serialized.as_bytes())?;
        Ok(())
    }

    pub fn get_node(&self, claimant: &Pubkey) -> Option<&TreeNode> {
        self.tree_nodes
            .iter()
            .find(|n| n.claimant.as_slice() == claimant.as_ref())
    }

    // Converts Merkle Tree to a map for faster key access
    pub fn convert_to_hashmap(&self) -> Result<HashMap<Pubkey, TreeNode>> {
        self.tree_nodes
            .iter()
            .map(|n| Ok((n.claimant_pubkey()?, n.clone())))
            .collect()
    }

    /// Structural checks only; proofs are checked by the program at claim time.
    pub fn validate(&self) -> Result<()> {
        // The Merkle tree can be at most height 32, implying a max node count of 2^32 - 1
        if self.max_num_nodes > 2u64.pow(32) - 1 {
            return Err(MerkleValidationError(format!(
                "Max num nodes {} is greater than 2^32 - 1",
                self.max_num_nodes
            )));
        }

        if self.tree_nodes.len() as u64 > self.max_num_nodes {
            return Err(MerkleValidationError(format!(
                "Tree nodes length {} exceeds max_num_nodes {}",
                self.tree_nodes.len(),
                self.max_num_nodes
            )));
        }

        let unique_nodes: HashSet<_> = self.tree_nodes.iter().map(|n| &n.claimant).collect();
        if unique_nodes.len() != self.tree_nodes.len() {
            return Err(MerkleValidationError(
                "Duplicate claimants found".to_string(),
            ));
        }

        let sum = get_max_total_claim(&self.tree_nodes).ok_or_else(|| {
            MerkleValidationError("Tree nodes sum overflows u64".to_string())
        })?;
        if sum > self.max_total_claim {
            return Err(MerkleValidationError(format!(
                "Tree nodes sum {} exceeds max_total_claim {}",
                sum, self.max_total_claim
            )));
        }

        Ok(())
    }
}
