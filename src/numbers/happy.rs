use rustc_hash::FxHashSet;

fn digit_square_sum(mut n: u32) -> u32 {
    let mut sum = 0;
    while n > 0 {
        let d = n % 10;
        sum += d * d;
        n /= 10;
    }
    sum
}

/// True iff repeatedly replacing `n` by the sum of the squares of its digits reaches 1.
///
/// Unhappy numbers fall into a cycle; a repeated value ends the walk.
pub fn is_happy(n: u32) -> bool {
    let mut seen = FxHashSet::default();
    let mut cur = n;
    while cur != 1 {
        if !seen.insert(cur) {
            return false;
        }
        cur = digit_square_sum(cur);
    }
    true
}
