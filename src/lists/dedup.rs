use crate::core::list::ListNode;

/// Drop every value that occurs more than once in a sorted list, keeping only values
/// that were already unique.
pub fn delete_duplicates(head: Option<Box<ListNode>>) -> Option<Box<ListNode>> {
    let mut out = None;
    let mut tail = &mut out;
    let mut cur = head;
    while let Some(mut node) = cur.take() {
        cur = node.next.take();
        let mut repeated = false;
        while cur.as_ref().is_some_and(|next| next.val == node.val) {
            repeated = true;
            cur = cur.take().and_then(|mut dup| dup.next.take());
        }
        if !repeated {
            tail = &mut tail.insert(node).next;
        }
    }
    out
}
