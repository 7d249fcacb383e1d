use crate::core::list::{iter_nodes, ListNode};

/// Reverse positions `left..=right` (1-based) of the list in place.
///
/// Out-of-range bounds or `left >= right` leave the list as it was.
pub fn reverse_between(
    mut head: Option<Box<ListNode>>,
    left: usize,
    right: usize,
) -> Option<Box<ListNode>> {
    if left == 0 || left >= right || right > iter_nodes(&head).count() {
        return head;
    }

    // Walk to the link that points at node `left`.
    let mut link = &mut head;
    for _ in 1..left {
        if let Some(node) = link {
            link = &mut node.next;
        }
    }

    let mut segment = Vec::with_capacity(right - left + 1);
    let mut rest = link.take();
    for _ in left..=right {
        if let Some(mut node) = rest.take() {
            rest = node.next.take();
            segment.push(node);
        }
    }

    // Prepending in original order onto the remainder yields the reversed run.
    for mut node in segment {
        node.next = rest;
        rest = Some(node);
    }
    *link = rest;
    head
}
