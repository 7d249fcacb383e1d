use crate::core::tree::TreeNode;

/// Height of a height-balanced subtree, or `None` as soon as any node's subtrees differ
/// in height by more than one.
fn balanced_height(node: &Option<Box<TreeNode>>) -> Option<usize> {
    let Some(node) = node else {
        return Some(0);
    };
    let left = balanced_height(&node.left)?;
    let right = balanced_height(&node.right)?;
    if left.abs_diff(right) > 1 {
        return None;
    }
    Some(left.max(right) + 1)
}

/// True iff every node's subtrees differ in height by at most one.
pub fn is_balanced(root: &Option<Box<TreeNode>>) -> bool {
    balanced_height(root).is_some()
}
