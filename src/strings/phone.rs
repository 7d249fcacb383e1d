/// Letters printed on each phone keypad digit.
const KEYPAD: [&str; 10] = ["", "", "abc", "def", "ghi", "jkl", "mno", "pqrs", "tuv", "wxyz"];

/// Every letter string the digit sequence could spell on a phone keypad.
///
/// Combinations come out in keypad order (first digit varies slowest). Empty input,
/// non-digits, and the letterless digits `0`/`1` all give no combinations.
pub fn letter_combinations(digits: &str) -> Vec<String> {
    let Some(letters) = digits
        .chars()
        .map(|d| d.to_digit(10).map(|i| KEYPAD[i as usize]))
        .collect::<Option<Vec<_>>>()
    else {
        return Vec::new();
    };
    if letters.is_empty() {
        return Vec::new();
    }

    let mut out = Vec::new();
    let mut buf = String::with_capacity(letters.len());
    extend(&letters, &mut buf, &mut out);
    out
}

fn extend(rest: &[&str], buf: &mut String, out: &mut Vec<String>) {
    let Some((choices, rest)) = rest.split_first() else {
        out.push(buf.clone());
        return;
    };
    for c in choices.chars() {
        buf.push(c);
        extend(rest, buf, out);
        buf.pop();
    }
}
