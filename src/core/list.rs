use std::fmt;
use std::iter::successors;

/// A singly linked list node, owned front to back.
///
/// `Debug` and `PartialEq` walk the list in a loop, like `Drop`, so they are safe on
/// lists of any length.
pub struct ListNode {
    pub val: i32,
    pub next: Option<Box<ListNode>>,
}

impl ListNode {
    #[inline]
    pub fn new(val: i32) -> Self {
        Self { val, next: None }
    }

    /// Build a list holding `values` in order. An empty slice is the empty list.
    pub fn from_slice(values: &[i32]) -> Option<Box<ListNode>> {
        let mut head = None;
        for &val in values.iter().rev() {
            head = Some(Box::new(ListNode { val, next: head }));
        }
        head
    }

    /// Values from this node to the end of the list.
    pub fn values(&self) -> impl Iterator<Item = i32> + '_ {
        successors(Some(self), |node| node.next.as_deref()).map(|node| node.val)
    }
}

impl fmt::Debug for ListNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.values()).finish()
    }
}

impl PartialEq for ListNode {
    fn eq(&self, other: &Self) -> bool {
        self.values().eq(other.values())
    }
}

impl Eq for ListNode {}

// Unlinks node by node so long lists do not overflow the stack.
impl Drop for ListNode {
    fn drop(&mut self) {
        let mut next = self.next.take();
        while let Some(mut node) = next {
            next = node.next.take();
        }
    }
}

/// Iterate over the nodes of a list, front to back.
pub fn iter_nodes(head: &Option<Box<ListNode>>) -> impl Iterator<Item = &ListNode> {
    successors(head.as_deref(), |node| node.next.as_deref())
}

/// Collect the values of a list, front to back.
pub fn list_to_vec(head: &Option<Box<ListNode>>) -> Vec<i32> {
    iter_nodes(head).map(|node| node.val).collect()
}
