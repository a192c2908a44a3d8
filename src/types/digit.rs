//! Personality type identifier.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ContentError, Result};

/// One of the nine personality type identifiers (`1`..=`9`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeDigit(u8);

impl TypeDigit {
    pub const MIN: TypeDigit = TypeDigit(1);
    pub const MAX: TypeDigit = TypeDigit(9);

    /// Create a digit, returning `None` outside `1..=9`.
    pub const fn new(value: u8) -> Option<Self> {
        if value >= 1 && value <= 9 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// All nine digits in ascending order.
    pub fn all() -> impl Iterator<Item = TypeDigit> {
        (1..=9).map(TypeDigit)
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl fmt::Display for TypeDigit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TypeDigit {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse::<u8>()
            .ok()
            .and_then(TypeDigit::new)
            .ok_or_else(|| ContentError::Parse {
                message: format!("'{}' is not a type identifier", s),
                help: Some("Type identifiers are the digits 1 through 9".to_string()),
            })
    }
}

impl Serialize for TypeDigit {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TypeDigit {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_digits() {
        assert_eq!("1".parse::<TypeDigit>().unwrap().get(), 1);
        assert_eq!(" 9 ".parse::<TypeDigit>().unwrap().get(), 9);
    }

    #[test]
    fn test_reject_out_of_range() {
        assert!("0".parse::<TypeDigit>().is_err());
        assert!("10".parse::<TypeDigit>().is_err());
        assert!("seven".parse::<TypeDigit>().is_err());
        assert!(TypeDigit::new(0).is_none());
    }

    #[test]
    fn test_all_in_order() {
        let all: Vec<u8> = TypeDigit::all().map(TypeDigit::get).collect();
        assert_eq!(all, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn test_serializes_as_string() {
        let digit = TypeDigit::new(4).unwrap();
        assert_eq!(serde_json::to_string(&digit).unwrap(), "\"4\"");
    }
}
