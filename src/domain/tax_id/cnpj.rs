//! CNPJ (legal entity registry) validation and formatting.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{checked_digits, clean, TaxIdError, TaxIdKind, Validation};

/// Validates a raw CNPJ as typed by a user.
pub fn validate_cnpj(raw: &str) -> Validation {
    check(raw).map(|_| ()).into()
}

/// Formats a CNPJ as `##.###.###/####-##`, or returns the input unchanged
/// when it does not clean to 14 digits.
pub fn format_cnpj(raw: &str) -> String {
    let digits = clean(raw);
    if digits.len() != TaxIdKind::Cnpj.expected_len() {
        return raw.to_string();
    }
    format!(
        "{}.{}.{}/{}-{}",
        &digits[0..2],
        &digits[2..5],
        &digits[5..8],
        &digits[8..12],
        &digits[12..14]
    )
}

fn check(raw: &str) -> Result<Vec<u32>, TaxIdError> {
    let digits = checked_digits(raw, TaxIdKind::Cnpj)?;

    let first = check_digit(&digits[..12]);
    let second = {
        let mut base = digits[..12].to_vec();
        base.push(first);
        check_digit(&base)
    };

    if digits[12] != first || digits[13] != second {
        return Err(TaxIdError::ChecksumMismatch(TaxIdKind::Cnpj));
    }
    Ok(digits)
}

/// Modulo-11 check digit with weights cycling 2..=9 from the rightmost
/// digit, so 12 digits weigh `5,4,3,2,9,8,7,6,5,4,3,2` and 13 digits
/// weigh `6,5,4,3,2,9,8,7,6,5,4,3,2`.
fn check_digit(digits: &[u32]) -> u32 {
    let sum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, digit)| digit * (2 + (i as u32 % 8)))
        .sum();
    let remainder = sum % 11;
    if remainder < 2 {
        0
    } else {
        11 - remainder
    }
}

/// A validated CNPJ, stored as its 14 cleaned digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Cnpj(String);

impl Cnpj {
    /// Validates and normalises a raw CNPJ.
    pub fn parse(raw: &str) -> Result<Self, TaxIdError> {
        let digits = check(raw)?;
        Ok(Self(
            digits
                .into_iter()
                .filter_map(|d| char::from_digit(d, 10))
                .collect(),
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Display form `##.###.###/####-##`.
    pub fn formatted(&self) -> String {
        format_cnpj(&self.0)
    }
}

impl fmt::Display for Cnpj {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Cnpj {
    type Err = TaxIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Cnpj {
    type Error = TaxIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Cnpj> for String {
    fn from(cnpj: Cnpj) -> Self {
        cnpj.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn known_good_vectors_are_valid() {
        assert!(validate_cnpj("11.222.333/0001-81").is_valid);
        assert!(validate_cnpj("11.444.777/0001-61").is_valid);
        assert!(validate_cnpj("11222333000181").is_valid);
    }

    #[test]
    fn wrong_check_digits_are_rejected() {
        assert_eq!(
            validate_cnpj("11.222.333/0001-00").error,
            Some(TaxIdError::ChecksumMismatch(TaxIdKind::Cnpj))
        );
        assert_eq!(
            validate_cnpj("11.222.333/0001-82").error,
            Some(TaxIdError::ChecksumMismatch(TaxIdKind::Cnpj))
        );
    }

    #[test]
    fn weight_cycles_match_the_standard_sequences() {
        // 11222333000181: first pass sums to 102, second to 120.
        let digits = [1, 1, 2, 2, 2, 3, 3, 3, 0, 0, 0, 1];
        assert_eq!(check_digit(&digits), 8);
        let mut with_first = digits.to_vec();
        with_first.push(8);
        assert_eq!(check_digit(&with_first), 1);
    }

    #[test]
    fn repeated_digits_are_rejected() {
        assert_eq!(
            validate_cnpj("00.000.000/0000-00").error,
            Some(TaxIdError::RepeatedDigits(TaxIdKind::Cnpj))
        );
        assert_eq!(
            validate_cnpj("11111111111111").error,
            Some(TaxIdError::RepeatedDigits(TaxIdKind::Cnpj))
        );
    }

    #[test]
    fn missing_and_wrong_length_are_rejected() {
        assert_eq!(
            validate_cnpj("").error,
            Some(TaxIdError::MissingValue(TaxIdKind::Cnpj))
        );
        assert_eq!(
            validate_cnpj("111.444.777-35").error,
            Some(TaxIdError::WrongLength(TaxIdKind::Cnpj))
        );
    }

    #[test]
    fn format_inserts_separators() {
        assert_eq!(format_cnpj("11222333000181"), "11.222.333/0001-81");
        assert_eq!(format_cnpj("1122233300018"), "1122233300018");
    }

    #[test]
    fn parse_normalises_to_digits() {
        let cnpj: Cnpj = "11.222.333/0001-81".parse().unwrap();
        assert_eq!(cnpj.as_str(), "11222333000181");
        assert_eq!(cnpj.formatted(), "11.222.333/0001-81");
    }

    fn with_check_digits(base: &[u32]) -> String {
        let mut all = base.to_vec();
        all.push(check_digit(base));
        let second = check_digit(&all);
        all.push(second);
        all.iter().map(|d| d.to_string()).collect()
    }

    proptest! {
        #[test]
        fn computed_check_digits_validate(base in proptest::collection::vec(0u32..10, 12)) {
            let cnpj = with_check_digits(&base);
            let repeated = cnpj.chars().all(|c| c == cnpj.chars().next().unwrap());
            prop_assume!(!repeated);
            prop_assert!(validate_cnpj(&cnpj).is_valid);
            prop_assert_eq!(clean(&format_cnpj(&cnpj)), cnpj);
        }

        #[test]
        fn repeated_digit_strings_are_always_rejected(digit in 0u32..10) {
            let cnpj: String = std::iter::repeat(digit.to_string()).take(14).collect();
            prop_assert_eq!(
                validate_cnpj(&cnpj).error,
                Some(TaxIdError::RepeatedDigits(TaxIdKind::Cnpj))
            );
        }
    }
}
