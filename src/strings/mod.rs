//! Drills over text.

pub mod brackets;
pub mod fizzbuzz;
pub mod keyboard;
pub mod phone;
pub mod prefix;
pub mod roman;
pub mod vowels;

pub use brackets::is_valid_brackets;
pub use fizzbuzz::{fizz_buzz, fizz_buzz_vec, FizzBuzz};
pub use keyboard::keyboard_row_words;
pub use phone::letter_combinations;
pub use prefix::longest_common_prefix;
pub use roman::roman_to_int;
pub use vowels::reverse_vowels;
