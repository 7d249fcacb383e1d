const ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Which QWERTY letter row holds `c` (case-insensitive).
fn row_of(c: char) -> Option<usize> {
    let c = c.to_ascii_lowercase();
    ROWS.iter().position(|row| row.contains(c))
}

/// The words that can be typed using letters from a single keyboard row.
///
/// Order is preserved. Words with non-letters are left out. The empty word uses no row at
/// all, so it is kept.
pub fn keyboard_row_words(words: &[&str]) -> Vec<String> {
    words
        .iter()
        .filter(|word| {
            let mut rows = word.chars().map(row_of);
            match rows.next() {
                None => true,
                Some(Some(first)) => rows.all(|r| r == Some(first)),
                Some(None) => false,
            }
        })
        .map(|word| word.to_string())
        .collect()
}
