pub mod airdrop_merkle_tree;
pub mod error;
pub mod tree_node;
pub mod utils;
