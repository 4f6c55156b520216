//! Roll validation: exactly five dice, each face in 1..=6.

use thiserror::Error;

/// A validated roll: five face values, sorted ascending.
pub type Dice = [u8; 5];

/// Number of dice in a roll.
pub const NUM_DICE: usize = 5;
/// Lowest face value.
pub const MIN_FACE: i32 = 1;
/// Highest face value.
pub const MAX_FACE: i32 = 6;

/// Validation failure for a submitted roll.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Wrong element count (checked before individual values).
    #[error("expected exactly {NUM_DICE} dice values, got {got}")]
    Cardinality { got: usize },
    /// A value outside 1..=6, or a missing value (`None`).
    #[error(
        "dice value {} is not a face in 1..=6",
        .value.map_or_else(|| "(missing)".to_string(), |v| v.to_string())
    )]
    Range { value: Option<i32> },
}

/// Validate a raw value sequence and return the five faces sorted ascending.
///
/// The cardinality check runs first, then each value is checked for
/// presence and range in order; the first problem wins. On success the
/// returned array is an owned sorted copy — the input is untouched, and
/// already-sorted input comes back unchanged.
pub fn validate_and_sort(values: &[Option<i32>]) -> Result<Dice, ValidationError> {
    if values.len() != NUM_DICE {
        return Err(ValidationError::Cardinality { got: values.len() });
    }

    let mut dice = [0u8; NUM_DICE];
    for (slot, value) in dice.iter_mut().zip(values.iter()) {
        match *value {
            Some(v) if (MIN_FACE..=MAX_FACE).contains(&v) => *slot = v as u8,
            other => return Err(ValidationError::Range { value: other }),
        }
    }

    dice.sort_unstable();
    Ok(dice)
}

/// [`validate_and_sort`] for inputs that cannot contain gaps, such as the
/// output of [`crate::parse::parse_tokens`].
pub fn validate_and_sort_ints(values: &[i32]) -> Result<Dice, ValidationError> {
    let values: Vec<Option<i32>> = values.iter().copied().map(Some).collect();
    validate_and_sort(&values)
}
