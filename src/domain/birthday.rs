//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// `chrono` format string for the `DD.MM.YYYY` layout used for every date
/// shown to or read from the user.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

// chrono alone accepts single-digit days and months, so the shape is checked first.
static DATE_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{2}\.[0-9]{2}\.[0-9]{4}$").expect("Failed to compile date shape regex")
});

/// A birthday in `DD.MM.YYYY` form.
///
/// The original text is kept for re-display, alongside the parsed calendar
/// date used by the upcoming-birthdays calculation.
///
/// # Example
///
/// ```
/// use address_book::domain::Birthday;
///
/// let birthday = Birthday::new("29.02.2024").unwrap();
/// assert_eq!(birthday.as_str(), "29.02.2024");
/// assert!(Birthday::new("31.02.2024").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Birthday {
    raw: String,
    date: NaiveDate,
}

impl Birthday {
    /// Create a new Birthday from `DD.MM.YYYY` text.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidDate` if the text does not have the
    /// exact `DD.MM.YYYY` shape or does not name an existing calendar date.
    pub fn new(birthday: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = birthday.into();

        if !DATE_SHAPE.is_match(&raw) {
            return Err(ValidationError::InvalidDate(raw));
        }

        match NaiveDate::parse_from_str(&raw, DATE_FORMAT) {
            Ok(date) => Ok(Self { raw, date }),
            Err(_) => Err(ValidationError::InvalidDate(raw)),
        }
    }

    /// Get the birthday exactly as it was entered.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The parsed calendar date, including the original birth year.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Day of month (1-31).
    pub fn day(&self) -> u32 {
        self.date.day()
    }

    /// Month of year (1-12).
    pub fn month(&self) -> u32 {
        self.date.month()
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.raw
    }
}

impl FromStr for Birthday {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for Birthday {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.raw.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_birthday_valid_round_trips_text() {
        for raw in ["01.01.2000", "29.02.2024", "31.12.1999", "15.06.1987"] {
            let birthday = Birthday::new(raw).unwrap();
            assert_eq!(birthday.as_str(), raw);
            assert_eq!(birthday.to_string(), raw);
        }
    }

    #[test]
    fn test_birthday_parsed_components() {
        let birthday = Birthday::new("05.11.1990").unwrap();
        assert_eq!(birthday.day(), 5);
        assert_eq!(birthday.month(), 11);
        assert_eq!(birthday.date(), NaiveDate::from_ymd_opt(1990, 11, 5).unwrap());
    }

    #[test]
    fn test_birthday_rejects_nonexistent_dates() {
        assert!(Birthday::new("31.02.2024").is_err());
        assert!(Birthday::new("29.02.2023").is_err());
        assert!(Birthday::new("00.01.2024").is_err());
        assert!(Birthday::new("12.13.2024").is_err());
    }

    #[test]
    fn test_birthday_rejects_other_layouts() {
        assert!(Birthday::new("2024-02-31").is_err());
        assert!(Birthday::new("2024-02-10").is_err());
        assert!(Birthday::new("1.3.2024").is_err());
        assert!(Birthday::new("01/03/2024").is_err());
        assert!(Birthday::new("01.03.24").is_err());
        assert!(Birthday::new(" 01.03.2024").is_err());
        assert!(Birthday::new("").is_err());
    }

    #[test]
    fn test_birthday_error_carries_input() {
        assert_eq!(
            Birthday::new("31.02.2024"),
            Err(ValidationError::InvalidDate("31.02.2024".to_string()))
        );
    }

    #[test]
    fn test_birthday_serialization() {
        let birthday = Birthday::new("12.03.1995").unwrap();
        assert_eq!(serde_json::to_string(&birthday).unwrap(), "\"12.03.1995\"");

        let parsed: Birthday = serde_json::from_str("\"12.03.1995\"").unwrap();
        assert_eq!(parsed, birthday);
    }
}
