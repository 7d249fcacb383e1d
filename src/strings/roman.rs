#[inline]
fn symbol_value(c: char) -> Option<i32> {
    Some(match c {
        'I' => 1,
        'V' => 5,
        'X' => 10,
        'L' => 50,
        'C' => 100,
        'D' => 500,
        'M' => 1000,
        _ => return None,
    })
}

/// Decode a Roman numeral. A symbol smaller than its right neighbour is subtracted.
///
/// `None` if `s` contains anything other than `IVXLCDM`.
pub fn roman_to_int(s: &str) -> Option<i32> {
    let values = s.chars().map(symbol_value).collect::<Option<Vec<_>>>()?;
    let total: i32 = values
        .iter()
        .enumerate()
        .map(|(i, &v)| match values.get(i + 1) {
            Some(&next) if v < next => -v,
            _ => v,
        })
        .sum();
    Some(total)
}
