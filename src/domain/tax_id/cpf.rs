//! CPF (individual taxpayer registry) validation and formatting.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{checked_digits, clean, TaxIdError, TaxIdKind, Validation};

/// Validates a raw CPF as typed by a user.
///
/// Punctuation is ignored. The two trailing check digits are compared with
/// the modulo-11 digits computed from the first nine.
pub fn validate_cpf(raw: &str) -> Validation {
    check(raw).map(|_| ()).into()
}

/// Formats a CPF as `###.###.###-##`, or returns the input unchanged when
/// it does not clean to 11 digits.
pub fn format_cpf(raw: &str) -> String {
    let digits = clean(raw);
    if digits.len() != TaxIdKind::Cpf.expected_len() {
        return raw.to_string();
    }
    format!(
        "{}.{}.{}-{}",
        &digits[0..3],
        &digits[3..6],
        &digits[6..9],
        &digits[9..11]
    )
}

fn check(raw: &str) -> Result<Vec<u32>, TaxIdError> {
    let digits = checked_digits(raw, TaxIdKind::Cpf)?;

    let first = check_digit(&digits[..9]);
    let second = {
        let mut base = digits[..9].to_vec();
        base.push(first);
        check_digit(&base)
    };

    if digits[9] != first || digits[10] != second {
        return Err(TaxIdError::ChecksumMismatch(TaxIdKind::Cpf));
    }
    Ok(digits)
}

/// Weighted sum with weights descending to 2, then `11 - sum % 11`
/// clamped to 0 when it reaches 10 or more.
fn check_digit(digits: &[u32]) -> u32 {
    let top = digits.len() as u32 + 1;
    let sum: u32 = digits
        .iter()
        .zip((2..=top).rev())
        .map(|(digit, weight)| digit * weight)
        .sum();
    let digit = 11 - sum % 11;
    if digit >= 10 {
        0
    } else {
        digit
    }
}

/// A validated CPF, stored as its 11 cleaned digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Cpf(String);

impl Cpf {
    /// Validates and normalises a raw CPF.
    pub fn parse(raw: &str) -> Result<Self, TaxIdError> {
        let digits = check(raw)?;
        Ok(Self(
            digits
                .into_iter()
                .filter_map(|d| char::from_digit(d, 10))
                .collect(),
        ))
    }

    /// The 11 digits, without punctuation.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Display form `###.###.###-##`.
    pub fn formatted(&self) -> String {
        format_cpf(&self.0)
    }
}

impl fmt::Display for Cpf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Cpf {
    type Err = TaxIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Cpf {
    type Error = TaxIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Cpf> for String {
    fn from(cpf: Cpf) -> Self {
        cpf.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn known_good_vector_is_valid() {
        let validation = validate_cpf("111.444.777-35");
        assert!(validation.is_valid);
        assert_eq!(validation.error, None);
        assert!(validate_cpf("529.982.247-25").is_valid);
    }

    #[test]
    fn repeated_digits_are_rejected() {
        assert_eq!(
            validate_cpf("111.111.111-11").error,
            Some(TaxIdError::RepeatedDigits(TaxIdKind::Cpf))
        );
        assert_eq!(
            validate_cpf("00000000000").error,
            Some(TaxIdError::RepeatedDigits(TaxIdKind::Cpf))
        );
    }

    #[test]
    fn wrong_check_digits_are_rejected() {
        assert_eq!(
            validate_cpf("123.456.789-00").error,
            Some(TaxIdError::ChecksumMismatch(TaxIdKind::Cpf))
        );
        assert!(validate_cpf("123.456.789-09").is_valid);
    }

    #[test]
    fn empty_and_short_inputs_are_rejected() {
        assert_eq!(
            validate_cpf("").error,
            Some(TaxIdError::MissingValue(TaxIdKind::Cpf))
        );
        assert_eq!(
            validate_cpf("123.456").error,
            Some(TaxIdError::WrongLength(TaxIdKind::Cpf))
        );
        assert_eq!(
            validate_cpf("111.444.777-350").error,
            Some(TaxIdError::WrongLength(TaxIdKind::Cpf))
        );
    }

    #[test]
    fn format_inserts_separators() {
        assert_eq!(format_cpf("11144477735"), "111.444.777-35");
        assert_eq!(format_cpf("111.444.777-35"), "111.444.777-35");
    }

    #[test]
    fn format_leaves_wrong_length_untouched() {
        assert_eq!(format_cpf("1114447773"), "1114447773");
        assert_eq!(format_cpf("abc"), "abc");
    }

    #[test]
    fn parse_normalises_to_digits() {
        let cpf = Cpf::parse("111.444.777-35").unwrap();
        assert_eq!(cpf.as_str(), "11144477735");
        assert_eq!(cpf.formatted(), "111.444.777-35");
        assert_eq!(cpf.to_string(), "11144477735");
    }

    #[test]
    fn serde_uses_digit_string_and_rejects_invalid() {
        let cpf: Cpf = serde_json::from_str("\"111.444.777-35\"").unwrap();
        assert_eq!(serde_json::to_string(&cpf).unwrap(), "\"11144477735\"");
        assert!(serde_json::from_str::<Cpf>("\"123.456.789-00\"").is_err());
    }

    fn with_check_digits(base: &[u32]) -> String {
        let first = check_digit(base);
        let mut all = base.to_vec();
        all.push(first);
        let second = check_digit(&all);
        all.push(second);
        all.iter().map(|d| d.to_string()).collect()
    }

    proptest! {
        #[test]
        fn computed_check_digits_validate(base in proptest::collection::vec(0u32..10, 9)) {
            let cpf = with_check_digits(&base);
            let repeated = cpf.chars().all(|c| c == cpf.chars().next().unwrap());
            prop_assume!(!repeated);
            prop_assert!(validate_cpf(&cpf).is_valid);
        }

        #[test]
        fn mutating_a_check_digit_is_a_mismatch(
            base in proptest::collection::vec(0u32..10, 9),
            position in 9usize..11,
            delta in 1u32..10,
        ) {
            let cpf = with_check_digits(&base);
            let repeated = cpf.chars().all(|c| c == cpf.chars().next().unwrap());
            prop_assume!(!repeated);

            let mut digits: Vec<u32> = cpf.chars().filter_map(|c| c.to_digit(10)).collect();
            digits[position] = (digits[position] + delta) % 10;
            let mutated: String = digits.iter().map(|d| d.to_string()).collect();

            prop_assert_eq!(
                validate_cpf(&mutated).error,
                Some(TaxIdError::ChecksumMismatch(TaxIdKind::Cpf))
            );
        }

        #[test]
        fn repeated_digit_strings_are_always_rejected(digit in 0u32..10) {
            let cpf: String = std::iter::repeat(digit.to_string()).take(11).collect();
            prop_assert_eq!(
                validate_cpf(&cpf).error,
                Some(TaxIdError::RepeatedDigits(TaxIdKind::Cpf))
            );
        }
    }
}
