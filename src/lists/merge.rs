//! k-way merge of sorted lists.
//!
//! Values usually span a narrow range, so nodes are bucketed by value and the buckets
//! stitched back together in order. Wide ranges fall back to a heap merge.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::core::list::{iter_nodes, ListNode};

/// Widest `max - min + 1` value span handled by bucketing.
pub const MAX_BUCKET_RANGE: u64 = 1 << 20;

/// Merge sorted lists into one sorted list. No lists, or only empty ones, give `None`.
pub fn merge_k_lists(lists: Vec<Option<Box<ListNode>>>) -> Option<Box<ListNode>> {
    let (min, max) = lists
        .iter()
        .flat_map(iter_nodes)
        .fold(None, |acc: Option<(i32, i32)>, node| match acc {
            None => Some((node.val, node.val)),
            Some((lo, hi)) => Some((lo.min(node.val), hi.max(node.val))),
        })?;

    let range = (i64::from(max) - i64::from(min) + 1) as u64;
    if range > MAX_BUCKET_RANGE {
        return heap_merge(lists);
    }
    bucket_merge(lists, min, range as usize)
}

fn bucket_merge(
    lists: Vec<Option<Box<ListNode>>>,
    min: i32,
    range: usize,
) -> Option<Box<ListNode>> {
    let mut buckets: Vec<Option<Box<ListNode>>> = (0..range).map(|_| None).collect();
    for mut cur in lists {
        while let Some(mut node) = cur.take() {
            cur = node.next.take();
            let idx = (i64::from(node.val) - i64::from(min)) as usize;
            node.next = buckets[idx].take();
            buckets[idx] = Some(node);
        }
    }

    // Prepend from the largest bucket down so the result comes out ascending.
    let mut head = None;
    for mut bucket in buckets.into_iter().rev() {
        while let Some(mut node) = bucket.take() {
            bucket = node.next.take();
            node.next = head;
            head = Some(node);
        }
    }
    head
}

fn heap_merge(mut lists: Vec<Option<Box<ListNode>>>) -> Option<Box<ListNode>> {
    let mut heap: BinaryHeap<Reverse<(i32, usize)>> = lists
        .iter()
        .enumerate()
        .filter_map(|(i, l)| l.as_ref().map(|node| Reverse((node.val, i))))
        .collect();

    let mut head = None;
    let mut tail = &mut head;
    while let Some(Reverse((_, i))) = heap.pop() {
        let Some(mut node) = lists[i].take() else {
            continue;
        };
        lists[i] = node.next.take();
        if let Some(next) = &lists[i] {
            heap.push(Reverse((next.val, i)));
        }
        tail = &mut tail.insert(node).next;
    }
    head
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::list::list_to_vec;

    #[test]
    fn wide_ranges_use_the_heap_path() {
        let lists = vec![
            ListNode::from_slice(&[i32::MIN, 0, i32::MAX]),
            ListNode::from_slice(&[-5, 5]),
        ];
        let merged = merge_k_lists(lists);
        assert_eq!(list_to_vec(&merged), vec![i32::MIN, -5, 0, 5, i32::MAX]);
    }
}
