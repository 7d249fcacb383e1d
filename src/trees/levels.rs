use crate::core::tree::TreeNode;

fn collect_levels(node: &Option<Box<TreeNode>>, depth: usize, levels: &mut Vec<Vec<i32>>) {
    let Some(node) = node else { return };
    if depth == levels.len() {
        levels.push(Vec::new());
    }
    levels[depth].push(node.val);
    collect_levels(&node.left, depth + 1, levels);
    collect_levels(&node.right, depth + 1, levels);
}

/// Node values grouped by depth, deepest level first, each level left to right.
pub fn level_order_bottom(root: &Option<Box<TreeNode>>) -> Vec<Vec<i32>> {
    let mut levels = Vec::new();
    collect_levels(root, 0, &mut levels);
    levels.reverse();
    levels
}
