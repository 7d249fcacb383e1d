#[inline]
fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'A' | 'E' | 'I' | 'O' | 'U')
}

/// Reverse the order of the vowels in `s`, leaving every other char in place.
pub fn reverse_vowels(s: &str) -> String {
    let mut chars: Vec<char> = s.chars().collect();
    if chars.is_empty() {
        return String::new();
    }

    let (mut front, mut back) = (0, chars.len() - 1);
    while front < back {
        match (is_vowel(chars[front]), is_vowel(chars[back])) {
            (true, true) => {
                chars.swap(front, back);
                front += 1;
                back -= 1;
            }
            (true, false) => back -= 1,
            (false, true) => front += 1,
            (false, false) => {
                front += 1;
                back -= 1;
            }
        }
    }
    chars.into_iter().collect()
}
