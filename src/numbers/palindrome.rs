/// True iff the decimal digits of `x` read the same both ways. Negatives never do.
pub fn is_palindrome(x: i32) -> bool {
    if x < 0 {
        return false;
    }
    let original = i64::from(x);
    let mut rest = original;
    let mut reversed = 0i64;
    while rest != 0 {
        reversed = reversed * 10 + rest % 10;
        rest /= 10;
    }
    reversed == original
}
