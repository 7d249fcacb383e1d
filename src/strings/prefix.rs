/// Longest string that prefixes every entry of `strs`; `""` when `strs` is empty.
pub fn longest_common_prefix(strs: &[&str]) -> String {
    let Some((&first, rest)) = strs.split_first() else {
        return String::new();
    };

    let mut prefix = first;
    for s in rest {
        while !s.starts_with(prefix) {
            // drop the last char, keeping a valid boundary
            let Some(last) = prefix.chars().next_back() else {
                return String::new();
            };
            prefix = &prefix[..prefix.len() - last.len_utf8()];
        }
    }
    prefix.to_string()
}
