/// The first `n` Fizz-Buzz words, computed on demand.
///
/// Entry `i` (0-based) describes the number `i + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FizzBuzz {
    len: usize,
}

impl FizzBuzz {
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn get(&self, index: usize) -> Option<String> {
        if index >= self.len {
            return None;
        }
        let k = index + 1;
        Some(match (k % 3, k % 5) {
            (0, 0) => "FizzBuzz".to_string(),
            (0, _) => "Fizz".to_string(),
            (_, 0) => "Buzz".to_string(),
            _ => k.to_string(),
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = String> + '_ {
        (0..self.len).filter_map(move |i| self.get(i))
    }
}

pub fn fizz_buzz(n: usize) -> FizzBuzz {
    FizzBuzz { len: n }
}

pub fn fizz_buzz_vec(n: usize) -> Vec<String> {
    fizz_buzz(n).iter().collect()
}
