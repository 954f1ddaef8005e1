use crate::tree_node::TreeNode;

/// Sum of every node's unlocked and locked amounts, `None` on overflow.
pub fn get_max_total_claim(nodes: &[TreeNode]) -> Option<u64> {
    nodes
        .iter()
        .try_fold(0, |acc: u64, n| acc.checked_add(n.total_amount()?))
}
