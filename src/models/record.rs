//! Record model representing one contact in the address book.

use crate::domain::{Birthday, Name, Phone};
use crate::error::{RecordError, RecordResult};
use std::fmt;
use tracing::debug;

/// A single contact: a fixed name, an ordered list of phone numbers, and an
/// optional birthday.
///
/// Phone numbers keep insertion order and may repeat. Every mutating method
/// validates its input before touching the record, so a failed call leaves
/// the record exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with a name and nothing else.
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// The contact's name.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Stored phone numbers, in insertion order.
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// The recorded birthday, if any.
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate and append a phone number. Duplicates are kept.
    pub fn add_phone(&mut self, phone: &str) -> RecordResult<()> {
        let phone = Phone::new(phone)?;
        debug!(name = %self.name, phone = %phone, "Adding phone");
        self.phones.push(phone);
        Ok(())
    }

    /// Remove every stored phone equal to `phone`.
    ///
    /// Removing a number that is not stored is not an error, but the
    /// argument must still be a valid phone number.
    pub fn remove_phone(&mut self, phone: &str) -> RecordResult<()> {
        let phone = Phone::new(phone)?;
        let before = self.phones.len();
        self.phones.retain(|p| p != &phone);
        debug!(
            name = %self.name,
            phone = %phone,
            removed = before - self.phones.len(),
            "Removed phone"
        );
        Ok(())
    }

    /// Replace the first stored phone equal to `old` with `new`, in place.
    ///
    /// # Errors
    ///
    /// Fails with a validation error if either argument is malformed, or with
    /// `RecordError::PhoneNotFound` if `old` is not stored.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> RecordResult<()> {
        let old = Phone::new(old)?;
        let new = Phone::new(new)?;

        let slot = self
            .phones
            .iter_mut()
            .find(|p| **p == old)
            .ok_or_else(|| RecordError::PhoneNotFound(old.as_str().to_string()))?;

        debug!(name = %self.name, old = %old, new = %new, "Editing phone");
        *slot = new;
        Ok(())
    }

    /// Return the first stored phone equal to `phone`.
    ///
    /// A malformed argument is an error, not a miss.
    pub fn find_phone(&self, phone: &str) -> RecordResult<Option<&Phone>> {
        let phone = Phone::new(phone)?;
        Ok(self.phones.iter().find(|p| **p == phone))
    }

    /// Validate and set the birthday, replacing any previous one.
    pub fn add_birthday(&mut self, birthday: &str) -> RecordResult<()> {
        let birthday = Birthday::new(birthday)?;
        debug!(name = %self.name, birthday = %birthday, "Setting birthday");
        self.birthday = Some(birthday);
        Ok(())
    }

    /// Human-readable sentence about this contact's birthday.
    pub fn describe_birthday(&self) -> String {
        match &self.birthday {
            Some(birthday) => format!("{}'s birthday is on {}", self.name, birthday),
            None => format!("No birthday recorded for {}", self.name),
        }
    }

    /// Phone numbers joined with `"; "`.
    pub fn phones_display(&self) -> String {
        self.phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contact name: {}, phones: {}",
            self.name,
            self.phones_display()
        )
    }
}
