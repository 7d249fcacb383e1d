/// Last row index whose entries all fit in `u64`; row 68 holds C(68, 34) > `u64::MAX`.
pub const MAX_PASCAL_ROW: usize = 67;

/// Row `index` (0-based) of Pascal's triangle, or `None` once an entry overflows `u64`.
///
/// Built left to right with `C(n, i) = C(n, i - 1) * (n - i + 1) / i`. The product is taken
/// in `u128`, where it cannot overflow for an in-range `C(n, i - 1)`, so the division is exact.
pub fn pascal_row(index: usize) -> Option<Vec<u64>> {
    if index > MAX_PASCAL_ROW {
        return None;
    }
    let n = index as u128;
    let mut row = Vec::with_capacity(index + 1);
    let mut c: u64 = 1;
    row.push(c);
    for i in 1..=n {
        c = u64::try_from(u128::from(c) * (n - i + 1) / i).ok()?;
        row.push(c);
    }
    Some(row)
}

/// The first `num_rows` rows of Pascal's triangle; `None` past [`MAX_PASCAL_ROW`].
pub fn pascal_triangle(num_rows: usize) -> Option<Vec<Vec<u64>>> {
    (0..num_rows).map(pascal_row).collect()
}
