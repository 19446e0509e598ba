//! Test fixtures and sample data for integration tests.
//!
//! This module provides reusable records and directories so each test file
//! can build its scenario in a line or two.

use address_book::domain::{Name, DATE_FORMAT};
use address_book::{Directory, Record};
use chrono::NaiveDate;

/// Parse a `DD.MM.YYYY` date, panicking on bad fixture input.
#[allow(dead_code)]
pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, DATE_FORMAT).expect("fixture date must be DD.MM.YYYY")
}

/// Create a record with the given name and phones.
#[allow(dead_code)]
pub fn sample_record(name: &str, phones: &[&str]) -> Record {
    let mut record = Record::new(Name::new(name).unwrap());
    for phone in phones {
        record.add_phone(phone).unwrap();
    }
    record
}

/// Create a record with a birthday and no phones.
#[allow(dead_code)]
pub fn record_with_birthday(name: &str, birthday: &str) -> Record {
    let mut record = Record::new(Name::new(name).unwrap());
    record.add_birthday(birthday).unwrap();
    record
}

/// The three-contact directory from the weekend-shift scenario.
///
/// Relative to Sunday 10.03.2024: Anna's birthday is Tuesday, Leo's is
/// Saturday, Max's passed in January.
#[allow(dead_code)]
pub fn march_directory() -> Directory {
    let mut book = Directory::new();
    book.add_record(record_with_birthday("Anna", "12.03.2024"));
    book.add_record(record_with_birthday("Leo", "16.03.2024"));
    book.add_record(record_with_birthday("Max", "01.01.2024"));
    book
}
