//! Domain validation errors.

use std::fmt;

/// Errors that can occur while constructing a validated field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided contact name is empty.
    EmptyName,

    /// The provided phone number is not a digit string of at least ten digits.
    InvalidPhone(String),

    /// The provided birthday is not a real `DD.MM.YYYY` date.
    InvalidDate(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Contact name cannot be empty"),
            Self::InvalidPhone(phone) => write!(
                f,
                "Phone number must contain at least 10 digits and nothing else: {}",
                phone
            ),
            Self::InvalidDate(date) => {
                write!(f, "Invalid date format. Use DD.MM.YYYY: {}", date)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
