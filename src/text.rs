//! Shared text parsing and formatting for the value types.

use std::fmt;

use tracing::debug;

use crate::error::{invalid_token, missing_token, Result};
use crate::Scalar;

/// Reads the first `N` whitespace-separated numbers from `input`.
///
/// Nothing is returned unless every one of those tokens parses, so callers can
/// write the result in one assignment and never leave a half-filled value
/// behind. Anything after the `N`th token is left unread.
pub(crate) fn parse_tokens<T: Scalar, const N: usize>(input: &str) -> Result<[T; N]> {
    let mut values = [T::zero(); N];
    let mut tokens = input.split_whitespace();

    for (index, slot) in values.iter_mut().enumerate() {
        let Some(token) = tokens.next() else {
            debug!(expected = N, found = index, "rejected text input: too few tokens");
            return Err(missing_token(N, index));
        };

        *slot = token.parse().map_err(|_| {
            debug!(index, token, "rejected text input: invalid number");
            invalid_token(index, token)
        })?;
    }

    if let Some(token) = tokens.next() {
        debug!(expected = N, token, "ignoring text input after the last element");
    }

    Ok(values)
}

/// Precision requested by the formatter, or the element type's default.
pub(crate) fn precision<T: Scalar>(f: &fmt::Formatter<'_>) -> usize {
    f.precision().unwrap_or(T::DISPLAY_PRECISION)
}

/// Writes `a, b, c` with a fixed number of decimals.
pub(crate) fn write_list<T: Scalar>(
    f: &mut fmt::Formatter<'_>,
    values: &[T],
    precision: usize,
) -> fmt::Result {
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{value:.precision$}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ParseError;

    #[test]
    fn test_parse_exact_count() {
        let values: [f64; 4] = parse_tokens(" 1 2.5\n-3\t4e2 ").unwrap();
        assert_eq!(values, [1.0, 2.5, -3.0, 400.0]);
    }

    #[test]
    fn test_parse_too_few_tokens() {
        let error = parse_tokens::<f32, 4>("1 2 3").unwrap_err();
        assert_eq!(
            error,
            ParseError::MissingToken {
                expected: 4,
                found: 3
            }
        );
    }

    #[test]
    fn test_parse_invalid_token() {
        let error = parse_tokens::<f32, 2>("1 two").unwrap_err();
        assert_eq!(
            error,
            ParseError::InvalidToken {
                index: 1,
                token: "two".to_string()
            }
        );
    }

    #[test]
    fn test_parse_ignores_extra_tokens() {
        let values: [f64; 2] = parse_tokens("1 2 3").unwrap();
        assert_eq!(values, [1.0, 2.0]);

        // Only the first N tokens have to be numbers
        let values: [f32; 2] = parse_tokens("5 6 end of line").unwrap();
        assert_eq!(values, [5.0, 6.0]);
    }

    #[test]
    fn test_parse_accepts_special_values() {
        let values: [f64; 3] = parse_tokens("inf -inf NaN").unwrap();
        assert_eq!(values[0], f64::INFINITY);
        assert_eq!(values[1], f64::NEG_INFINITY);
        assert!(values[2].is_nan());
    }
}
