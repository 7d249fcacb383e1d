/// `x` raised to `n` by repeated squaring.
///
/// Negative exponents invert the result; `n` is widened first so `i32::MIN` is exact.
pub fn my_pow(x: f64, n: i32) -> f64 {
    let mut exp = i64::from(n).unsigned_abs();
    let mut base = x;
    let mut acc = 1.0;
    while exp > 0 {
        if exp & 1 == 1 {
            acc *= base;
        }
        base *= base;
        exp >>= 1;
    }
    if n < 0 {
        1.0 / acc
    } else {
        acc
    }
}
