//! Token → integer conversion for dice input.

use thiserror::Error;

/// Parse failure: some token is not an integer.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("`{token}` is not a number")]
    NonNumeric { token: String },
}

/// Convert whitespace-split tokens into integers, preserving order.
///
/// Fails on the first token that does not parse as an integer; no partial
/// result is returned, so callers can treat the whole input as invalid.
/// An empty token list yields an empty vec — the five-element check belongs
/// to [`crate::roll::validate_and_sort`], not here.
///
/// Range is *not* checked here: "8" parses fine and is rejected later.
pub fn parse_tokens<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<i32>, ParseError> {
    let mut out = Vec::with_capacity(tokens.len());
    for token in tokens {
        let token = token.as_ref();
        let value: i32 = token.parse().map_err(|_| ParseError::NonNumeric {
            token: token.to_string(),
        })?;
        out.push(value);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_in_order() {
        assert_eq!(
            parse_tokens(&["3", "1", "5", "4", "2"]),
            Ok(vec![3, 1, 5, 4, 2])
        );
    }

    #[test]
    fn out_of_range_values_still_parse() {
        // Range enforcement is the validator's job.
        assert_eq!(parse_tokens(&["0", "7", "-3"]), Ok(vec![0, 7, -3]));
    }

    #[test]
    fn empty_input_is_empty_output() {
        let tokens: [&str; 0] = [];
        assert_eq!(parse_tokens(&tokens), Ok(vec![]));
    }

    #[test]
    fn stops_at_first_bad_token() {
        let err = parse_tokens(&["1", "2", "x", "4", "5"]).unwrap_err();
        assert_eq!(
            err,
            ParseError::NonNumeric {
                token: "x".to_string()
            }
        );
    }

    #[test]
    fn error_message_names_the_token() {
        let err = parse_tokens(&["six"]).unwrap_err();
        assert_eq!(err.to_string(), "`six` is not a number");
    }
}
