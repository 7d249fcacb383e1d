/// True iff every `(`, `[` and `{` in `s` is closed by its partner in nesting order.
///
/// Each opener pushes the closer it expects; any other character must match the top of
/// the stack.
pub fn is_valid_brackets(s: &str) -> bool {
    let mut expected: Vec<char> = Vec::with_capacity(s.len() / 2);
    for c in s.chars() {
        match c {
            '(' => expected.push(')'),
            '[' => expected.push(']'),
            '{' => expected.push('}'),
            _ => {
                if expected.pop() != Some(c) {
                    return false;
                }
            }
        }
    }
    expected.is_empty()
}
