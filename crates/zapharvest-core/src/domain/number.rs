use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const COUNTRY_CODE: &str = "55";
pub const MIN_DIGITS: usize = 12;
pub const MAX_DIGITS: usize = 13;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NormalizedNumber(String);

impl NormalizedNumber {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

pub fn strip_non_digits(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

pub fn normalize_number(raw: &str) -> Option<NormalizedNumber> {
    let digits = strip_non_digits(raw);
    if has_valid_shape(&digits) {
        Some(NormalizedNumber(digits))
    } else {
        None
    }
}

fn has_valid_shape(digits: &str) -> bool {
    digits.starts_with(COUNTRY_CODE) && (MIN_DIGITS..=MAX_DIGITS).contains(&digits.len())
}

impl FromStr for NormalizedNumber {
    type Err = CoreError;

    // Stored values are already canonical, so separators are refused here.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.bytes().all(|b| b.is_ascii_digit()) && has_valid_shape(s) {
            Ok(Self(s.to_string()))
        } else {
            Err(CoreError::InvalidNumber(s.to_string()))
        }
    }
}

impl TryFrom<String> for NormalizedNumber {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<NormalizedNumber> for String {
    fn from(value: NormalizedNumber) -> Self {
        value.0
    }
}

impl fmt::Display for NormalizedNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
