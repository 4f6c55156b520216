//! pd-core: dice input parsing, roll validation, and combination scoring.
//!
//! The pipeline is three pure functions:
//! - [`parse_tokens`]: text tokens → integers
//! - [`validate_and_sort`]: integers → a sorted five-face roll
//! - [`classify`]: sorted roll → combination label
//!
//! Presentation (CLI prompt loop, TUI) lives in the shell crates.

pub mod combo;
pub mod parse;
pub mod roll;

pub use combo::{classify, Combination};
pub use parse::{parse_tokens, ParseError};
pub use roll::{validate_and_sort, validate_and_sort_ints, Dice, ValidationError};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_nonempty() {
        assert!(!VERSION.is_empty());
    }
}
