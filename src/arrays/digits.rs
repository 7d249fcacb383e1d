/// The value that appears once when every other value appears exactly twice.
///
/// Pairs cancel under XOR. An empty slice gives `0`.
pub fn single_number(nums: &[i32]) -> i32 {
    nums.iter().fold(0, |acc, &v| acc ^ v)
}

/// Add one to a non-negative integer stored as big-endian decimal digits.
pub fn plus_one(mut digits: Vec<i32>) -> Vec<i32> {
    for d in digits.iter_mut().rev() {
        if *d < 9 {
            *d += 1;
            return digits;
        }
        *d = 0;
    }
    // all nines (or empty): carry out of the top digit
    digits.insert(0, 1);
    digits
}
