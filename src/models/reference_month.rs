//! Reference month parsing and formatting.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// The calendar month a payroll run refers to.
///
/// The wire form is the `"YYYY-MM"` string consumed from the caller;
/// internally it is a validated `(year, month)` pair. One payroll result
/// exists per employee and reference month.
///
/// # Example
///
/// ```
/// use payroll_engine::models::ReferenceMonth;
///
/// let month: ReferenceMonth = "2024-03".parse().unwrap();
/// assert_eq!(month.year(), 2024);
/// assert_eq!(month.month(), 3);
/// assert_eq!(month.to_string(), "2024-03");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ReferenceMonth {
    year: i32,
    month: u32,
}

impl ReferenceMonth {
    /// Creates a reference month from its parts.
    ///
    /// # Errors
    ///
    /// Returns `InvalidReferenceMonth` if `month` is not in `1..=12`.
    pub fn new(year: i32, month: u32) -> Result<Self, EngineError> {
        if !(1..=12).contains(&month) {
            return Err(EngineError::InvalidReferenceMonth {
                value: format!("{:04}-{:02}", year, month),
            });
        }
        Ok(Self { year, month })
    }

    /// The calendar year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The calendar month, `1..=12`.
    pub fn month(&self) -> u32 {
        self.month
    }
}

impl fmt::Display for ReferenceMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for ReferenceMonth {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || EngineError::InvalidReferenceMonth {
            value: s.to_string(),
        };

        let (year_part, month_part) = s.split_once('-').ok_or_else(invalid)?;
        if year_part.len() != 4 || month_part.len() != 2 {
            return Err(invalid());
        }

        let year: i32 = year_part.parse().map_err(|_| invalid())?;
        let month: u32 = month_part.parse().map_err(|_| invalid())?;

        Self::new(year, month).map_err(|_| invalid())
    }
}

impl TryFrom<String> for ReferenceMonth {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ReferenceMonth> for String {
    fn from(month: ReferenceMonth) -> Self {
        month.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_month() {
        let month: ReferenceMonth = "2024-03".parse().unwrap();
        assert_eq!(month.year(), 2024);
        assert_eq!(month.month(), 3);
    }

    #[test]
    fn test_parse_december() {
        let month: ReferenceMonth = "2024-12".parse().unwrap();
        assert_eq!(month.month(), 12);
    }

    #[test]
    fn test_display_round_trip() {
        let month: ReferenceMonth = "2024-07".parse().unwrap();
        assert_eq!(month.to_string(), "2024-07");
        assert_eq!(month.to_string().parse::<ReferenceMonth>().unwrap(), month);
    }

    #[test]
    fn test_single_digit_month_is_zero_padded() {
        let month = ReferenceMonth::new(2024, 4).unwrap();
        assert_eq!(month.to_string(), "2024-04");
    }

    #[test]
    fn test_rejects_month_zero() {
        assert!("2024-00".parse::<ReferenceMonth>().is_err());
        assert!(ReferenceMonth::new(2024, 0).is_err());
    }

    #[test]
    fn test_rejects_month_thirteen() {
        assert!("2024-13".parse::<ReferenceMonth>().is_err());
        assert!(ReferenceMonth::new(2024, 13).is_err());
    }

    #[test]
    fn test_rejects_malformed_strings() {
        for input in ["2024", "2024-3", "24-03", "2024/03", "abcd-ef", "", "2024-03-01"] {
            let result = input.parse::<ReferenceMonth>();
            assert!(result.is_err(), "expected '{}' to be rejected", input);
        }
    }

    #[test]
    fn test_error_carries_original_value() {
        match "2024/03".parse::<ReferenceMonth>() {
            Err(EngineError::InvalidReferenceMonth { value }) => {
                assert_eq!(value, "2024/03");
            }
            other => panic!("Expected InvalidReferenceMonth, got {:?}", other),
        }
    }

    #[test]
    fn test_serializes_as_string() {
        let month: ReferenceMonth = "2024-03".parse().unwrap();
        let json = serde_json::to_string(&month).unwrap();
        assert_eq!(json, "\"2024-03\"");
    }

    #[test]
    fn test_deserializes_from_string() {
        let month: ReferenceMonth = serde_json::from_str("\"2024-11\"").unwrap();
        assert_eq!(month, ReferenceMonth::new(2024, 11).unwrap());
    }

    #[test]
    fn test_deserialization_rejects_invalid_month() {
        let result: Result<ReferenceMonth, _> = serde_json::from_str("\"2024-13\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_ordering_is_chronological() {
        let a: ReferenceMonth = "2023-12".parse().unwrap();
        let b: ReferenceMonth = "2024-01".parse().unwrap();
        let c: ReferenceMonth = "2024-02".parse().unwrap();
        assert!(a < b);
        assert!(b < c);
    }
}
