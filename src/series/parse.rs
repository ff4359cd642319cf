//! Free-text dollar amounts to integer cents

use super::SeriesError;

/// Parse user-entered yearly dollar amounts into cents.
///
/// Tokens are separated by runs of commas and whitespace. Each token may
/// carry a single leading `$`. Values round half-away-from-zero to the
/// nearest cent, so `"1000 1000.345, $1000.995"` parses to
/// `[100000, 100035, 100100]`.
///
/// Empty input (or input holding only separators) yields an empty vector;
/// callers decide whether that is acceptable.
pub fn parse_dollars_to_cents(text: &str) -> Result<Vec<i64>, SeriesError> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            let bare = token.strip_prefix('$').unwrap_or(token);
            let value: f64 = bare.parse().map_err(|_| SeriesError::InvalidAmount {
                token: token.to_string(),
            })?;
            if !value.is_finite() {
                return Err(SeriesError::InvalidAmount {
                    token: token.to_string(),
                });
            }
            Ok((value * 100.0).round() as i64)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_delimiters_and_rounds_to_nearest_cent() {
        let cents = parse_dollars_to_cents("1000  1000.345, $1000.995").unwrap();
        assert_eq!(cents, vec![100_000, 100_035, 100_100]);
    }

    #[test]
    fn test_mixed_delimiters_collapse() {
        let cents = parse_dollars_to_cents("1,\t2\r\n3   4").unwrap();
        assert_eq!(cents, vec![100, 200, 300, 400]);
    }

    #[test]
    fn test_empty_input_is_empty_not_error() {
        assert_eq!(parse_dollars_to_cents("").unwrap(), Vec::<i64>::new());
        assert_eq!(parse_dollars_to_cents(" , ,\n").unwrap(), Vec::<i64>::new());
    }

    #[test]
    fn test_rejects_non_numeric_token() {
        let err = parse_dollars_to_cents("100 abc 200").unwrap_err();
        assert_eq!(
            err,
            SeriesError::InvalidAmount {
                token: "abc".to_string()
            }
        );
    }

    #[test]
    fn test_rejects_non_finite_token() {
        assert!(parse_dollars_to_cents("inf").is_err());
        assert!(parse_dollars_to_cents("NaN").is_err());
    }

    #[test]
    fn test_negative_amounts_round_away_from_zero() {
        let cents = parse_dollars_to_cents("-12.34 -0.005").unwrap();
        assert_eq!(cents, vec![-1_234, -1]);
    }

    #[test]
    fn test_format_then_parse_round_trip() {
        let original: Vec<i64> = vec![0, 1, 99, 100_000, 123_456, 9_999_999];
        let text = original
            .iter()
            .map(|c| format!("{}.{:02}", c / 100, c % 100))
            .collect::<Vec<_>>()
            .join(", ");
        assert_eq!(parse_dollars_to_cents(&text).unwrap(), original);
    }
}
