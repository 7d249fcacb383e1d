use rustc_hash::FxHashMap;

/// Indices `(i, j)` with `i < j` and `nums[i] + nums[j] == target`.
///
/// Scans once, remembering the first index of every value seen; the pair found is the
/// one whose later index is smallest. `None` if no pair sums to `target`.
pub fn two_sum(nums: &[i32], target: i32) -> Option<(usize, usize)> {
    let mut seen: FxHashMap<i64, usize> = FxHashMap::default();
    for (j, &v) in nums.iter().enumerate() {
        let v = i64::from(v);
        if let Some(&i) = seen.get(&(i64::from(target) - v)) {
            return Some((i, j));
        }
        seen.entry(v).or_insert(j);
    }
    None
}
