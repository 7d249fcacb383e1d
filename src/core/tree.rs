use std::collections::VecDeque;

/// A binary tree node owning both subtrees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    pub val: i32,
    pub left: Option<Box<TreeNode>>,
    pub right: Option<Box<TreeNode>>,
}

impl TreeNode {
    #[inline]
    pub fn new(val: i32, left: Option<Box<TreeNode>>, right: Option<Box<TreeNode>>) -> Self {
        Self { val, left, right }
    }

    #[inline]
    pub fn leaf(val: i32) -> Self {
        Self::new(val, None, None)
    }

    /// Build a tree from a breadth-first listing where `None` marks a missing child.
    ///
    /// Missing nodes have no entries for their own children, so `[1, None, 2, 3]` is the
    /// right-leaning chain `1 -> 2 -> 3` (with `3` the left child of `2`). An empty listing
    /// or a missing root gives the empty tree.
    pub fn from_level_order(values: &[Option<i32>]) -> Option<Box<TreeNode>> {
        if !matches!(values.first(), Some(Some(_))) {
            return None;
        }

        // links[i] = (left, right) as indices into `values`
        let mut links: Vec<(Option<usize>, Option<usize>)> = vec![(None, None); values.len()];
        let mut queue = VecDeque::from([0usize]);
        let mut next = 1;
        while let Some(parent) = queue.pop_front() {
            for side in 0..2 {
                if next >= values.len() {
                    break;
                }
                if values[next].is_some() {
                    if side == 0 {
                        links[parent].0 = Some(next);
                    } else {
                        links[parent].1 = Some(next);
                    }
                    queue.push_back(next);
                }
                next += 1;
            }
            if next >= values.len() {
                break;
            }
        }

        // Children always sit after their parent, so assembling back to front sees every
        // subtree finished before its parent.
        let mut built: Vec<Option<Box<TreeNode>>> = (0..values.len()).map(|_| None).collect();
        for i in (0..values.len()).rev() {
            let Some(val) = values[i] else { continue };
            let (l, r) = links[i];
            let left = l.and_then(|j| built[j].take());
            let right = r.and_then(|j| built[j].take());
            built[i] = Some(Box::new(TreeNode::new(val, left, right)));
        }
        built[0].take()
    }
}
