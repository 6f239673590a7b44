//! Property-based tests for ISBN validation

use colophon::isbn::{validate, IsbnError};
use proptest::prelude::*;

fn isbn13_check_digit(digits: &[u32; 12]) -> u32 {
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, d)| if i % 2 == 0 { *d } else { 3 * d })
        .sum();
    (10 - sum % 10) % 10
}

fn isbn10_check_char(digits: &[u32; 9]) -> char {
    let sum: u32 = digits.iter().enumerate().map(|(i, d)| (10 - i as u32) * d).sum();
    match 11 - sum % 11 {
        10 => 'X',
        11 => '0',
        r => char::from_digit(r, 10).expect("remainder is a single digit"),
    }
}

proptest! {
    #[test]
    fn prop_wellformed_isbn13_validates(
        prefix in prop::sample::select(vec![978u32, 979]),
        rest in prop::collection::vec(0u32..10, 9)
    ) {
        let mut digits = [0u32; 12];
        digits[0] = prefix / 100;
        digits[1] = (prefix / 10) % 10;
        digits[2] = prefix % 10;
        digits[3..].copy_from_slice(&rest);

        let check = isbn13_check_digit(&digits);
        let bare: String = digits
            .iter()
            .chain(std::iter::once(&check))
            .map(|d| char::from_digit(*d, 10).expect("digit"))
            .collect();

        prop_assert_eq!(validate(&bare), Ok(()));
    }

    #[test]
    fn prop_corrupted_isbn13_check_digit_is_detected(
        rest in prop::collection::vec(0u32..10, 9),
        bump in 1u32..10
    ) {
        let mut digits = [9u32, 7, 8, 0, 0, 0, 0, 0, 0, 0, 0, 0];
        digits[3..].copy_from_slice(&rest);

        let check = isbn13_check_digit(&digits);
        let wrong = (check + bump) % 10;
        let bare: String = digits
            .iter()
            .chain(std::iter::once(&wrong))
            .map(|d| char::from_digit(*d, 10).expect("digit"))
            .collect();

        prop_assert_eq!(validate(&bare), Err(IsbnError::InvalidCheckDigit));
    }

    #[test]
    fn prop_wellformed_isbn10_validates(
        digits in prop::collection::vec(0u32..10, 9)
    ) {
        let mut body = [0u32; 9];
        body.copy_from_slice(&digits);

        let check = isbn10_check_char(&body);
        let bare: String = body
            .iter()
            .map(|d| char::from_digit(*d, 10).expect("digit"))
            .chain(std::iter::once(check))
            .collect();

        prop_assert_eq!(validate(&bare), Ok(()));
    }

    #[test]
    fn prop_label_does_not_change_the_verdict(
        digits in prop::collection::vec(0u32..10, 9)
    ) {
        let mut body = [0u32; 9];
        body.copy_from_slice(&digits);

        let check = isbn10_check_char(&body);
        let bare: String = body
            .iter()
            .map(|d| char::from_digit(*d, 10).expect("digit"))
            .chain(std::iter::once(check))
            .collect();

        prop_assert_eq!(validate(&format!("ISBN {bare}")), validate(&bare));
        prop_assert_eq!(validate(&format!("ISBN-10 {bare}")), validate(&bare));
    }

    #[test]
    fn prop_alphabetic_noise_is_invalid_format(noise in "[a-w]{1,20}") {
        prop_assert_eq!(validate(&noise), Err(IsbnError::InvalidFormat));
    }
}
