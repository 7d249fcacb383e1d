/// Largest product of a non-empty contiguous subarray.
///
/// Any maximal-product run extends to one end of a zero-free segment, so a forward and a
/// backward pass of running products (restarted after each zero) see it. `None` for an
/// empty slice; results outside `i32` saturate.
pub fn max_product(nums: &[i32]) -> Option<i32> {
    if nums.is_empty() {
        return None;
    }

    let mut best = i64::MIN;
    for pass in [true, false] {
        let mut prod: i64 = 1;
        let mut scan = |v: i32| {
            prod = prod.saturating_mul(i64::from(v));
            best = best.max(prod);
            if prod == 0 {
                prod = 1;
            }
        };
        if pass {
            nums.iter().for_each(|&v| scan(v));
        } else {
            nums.iter().rev().for_each(|&v| scan(v));
        }
    }

    Some(i32::try_from(best).unwrap_or(if best > 0 { i32::MAX } else { i32::MIN }))
}
