//! ISBN-10 / ISBN-13 validation
//!
//! Validates that a raw textual identifier is a syntactically well-formed
//! ISBN and that its check digit is correct. The accepted grammar is an
//! optional `ISBN` / `ISBN-10` / `ISBN-13` label, then either a 13-digit ISBN
//! in grouped form (17 characters with separators), a 10-digit ISBN in
//! grouped form (13 characters, final `X` allowed), or 10 or 13 bare digits.
//!
//! Validation is pure and total: the input is checked and discarded, success
//! carries no value, and failure names one of exactly two reasons.

use std::error::Error as StdError;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

// Optional label: "ISBN", "ISBN-10" or "ISBN-13", optional colon, one space.
static LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^ISBN(?:-1[03])?:? ").unwrap()
});

// Overall shape of the part after the label: grouped ISBN-13, grouped
// ISBN-10, or bare digits.
static SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[-0-9 ]{17}|[-0-9X ]{13}|[0-9X]{10})$").unwrap()
});

// Registration-group structure: optional 978/979 prefix, then at most four
// separator-delimited digit runs ending in a digit or X.
static STRUCTURE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:97[89][- ]?)?[0-9]{1,5}[- ]?(?:[0-9]+[- ]?){2}[0-9X]$").unwrap()
});

/// Why an ISBN was rejected.
///
/// Both kinds are client input errors: never retried, never fatal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IsbnError {
    /// The string does not match the ISBN grammar at all.
    InvalidFormat,
    /// The grammar matches but the check digit is wrong.
    InvalidCheckDigit,
}

impl fmt::Display for IsbnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IsbnError::InvalidFormat => write!(f, "Invalid ISBN"),
            IsbnError::InvalidCheckDigit => write!(f, "Invalid ISBN check digit"),
        }
    }
}

impl StdError for IsbnError {}

/// Validate a raw ISBN string.
///
/// Absence of an error is the success signal; the normalized digits are not
/// returned because the caller persists the raw string as given.
///
/// # Example
///
/// ```rust
/// use colophon::isbn::{validate, IsbnError};
///
/// assert!(validate("ISBN 978-0-596-52068-7").is_ok());
/// assert!(validate("0-8044-2957-X").is_ok());
/// assert_eq!(validate("ISBN 978-0-596-52068-8"), Err(IsbnError::InvalidCheckDigit));
/// assert_eq!(validate("IBSN 978-0-596-52068-7"), Err(IsbnError::InvalidFormat));
/// ```
pub fn validate(raw: &str) -> Result<(), IsbnError> {
    let body = match LABEL.find(raw) {
        Some(label) => &raw[label.end()..],
        None => raw,
    };

    // The original grammar is one regex with a length lookahead; `regex` has
    // no lookahead, so shape and structure are matched separately. The
    // conjunction accepts the same language.
    if !SHAPE.is_match(body) || !STRUCTURE.is_match(body) {
        return Err(IsbnError::InvalidFormat);
    }

    let digits: Vec<char> = body
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == 'X')
        .collect();

    let expected = match digits.len() {
        10 => expected_isbn10_check(&digits)?,
        13 => expected_isbn13_check(&digits)?,
        // bare digit runs of other lengths slip through the 17-char shape
        _ => return Err(IsbnError::InvalidFormat),
    };

    let last = digits[digits.len() - 1].to_ascii_uppercase();
    if last == expected {
        Ok(())
    } else {
        Err(IsbnError::InvalidCheckDigit)
    }
}

// Weighted sum over the first nine digits, weights descending from 10 to 2;
// remainder 10 maps to X and 11 to 0.
fn expected_isbn10_check(digits: &[char]) -> Result<char, IsbnError> {
    let mut sum = 0;
    for (i, &c) in digits[..9].iter().enumerate() {
        let digit = c.to_digit(10).ok_or(IsbnError::InvalidFormat)?;
        sum += (10 - i as u32) * digit;
    }
    let remainder = 11 - sum % 11;
    Ok(match remainder {
        10 => 'X',
        11 => '0',
        r => char::from_digit(r, 10).unwrap_or('0'),
    })
}

// Alternating 1/3 weights over the first twelve digits, mod 10.
fn expected_isbn13_check(digits: &[char]) -> Result<char, IsbnError> {
    let mut sum = 0;
    for (i, &c) in digits[..12].iter().enumerate() {
        let digit = c.to_digit(10).ok_or(IsbnError::InvalidFormat)?;
        let weight = if i % 2 == 0 { 1 } else { 3 };
        sum += weight * digit;
    }
    let remainder = sum % 10;
    Ok(if remainder == 0 {
        '0'
    } else {
        char::from_digit(10 - remainder, 10).unwrap_or('0')
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_every_supported_spelling() {
        for raw in [
            "ISBN 978-0-596-52068-7",
            "ISBN-13: 978-0-596-52068-7",
            "978 0 596 52068 7",
            "9780596520687",
            "ISBN-10 0-596-52068-9",
            "0-596-52068-9",
            "ISBN 9971-5-0210-0",
            "0-8044-2957-X",
        ] {
            assert_eq!(validate(raw), Ok(()), "{raw:?} should validate");
        }
    }

    #[test]
    fn test_rejects_wrong_prefix_group() {
        assert_eq!(validate("ISBN 777-0-596-52068-7"), Err(IsbnError::InvalidFormat));
    }

    #[test]
    fn test_rejects_mistyped_label() {
        assert_eq!(validate("IBSN 978-0-596-52068-7"), Err(IsbnError::InvalidFormat));
    }

    #[test]
    fn test_rejects_bad_isbn13_check_digit() {
        assert_eq!(
            validate("ISBN 978-0-596-52068-8"),
            Err(IsbnError::InvalidCheckDigit)
        );
    }

    #[test]
    fn test_rejects_bad_isbn10_check_digit() {
        assert_eq!(
            validate("ISBN-10 0-596-52068-8"),
            Err(IsbnError::InvalidCheckDigit)
        );
    }

    #[test]
    fn test_check_digit_x_only_valid_in_final_position() {
        assert_eq!(validate("0-80X4-2957-4"), Err(IsbnError::InvalidFormat));
    }

    #[test]
    fn test_rejects_empty_and_garbage() {
        assert_eq!(validate(""), Err(IsbnError::InvalidFormat));
        assert_eq!(validate("not an isbn"), Err(IsbnError::InvalidFormat));
        assert_eq!(validate("ISBN "), Err(IsbnError::InvalidFormat));
    }

    #[test]
    fn test_rejects_wrong_lengths() {
        assert_eq!(validate("123456789"), Err(IsbnError::InvalidFormat));
        assert_eq!(validate("97805965206871"), Err(IsbnError::InvalidFormat));
    }

    #[test]
    fn test_error_messages_are_user_facing() {
        assert_eq!(IsbnError::InvalidFormat.to_string(), "Invalid ISBN");
        assert_eq!(
            IsbnError::InvalidCheckDigit.to_string(),
            "Invalid ISBN check digit"
        );
    }
}
