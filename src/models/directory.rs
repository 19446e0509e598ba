//! Directory (address book) holding every record by name.

use crate::birthdays::{self, UpcomingBirthday};
use crate::models::Record;
use chrono::NaiveDate;
use indexmap::IndexMap;
use std::fmt;
use tracing::debug;

/// The address book: records keyed by their name, in insertion order.
///
/// Each key always equals the name of the record stored under it.
/// Replacing a record keeps its original position; deleting one keeps the
/// relative order of the rest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directory {
    records: IndexMap<String, Record>,
}

impl Directory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record under its name, replacing any record already there.
    pub fn add_record(&mut self, record: Record) {
        let key = record.name().as_str().to_string();
        if self.records.insert(key, record).is_some() {
            debug!("Replaced existing record");
        }
    }

    /// Look up a record by name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Look up a record by name for mutation.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove the record stored under `name`. Absent names are ignored.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        let removed = self.records.shift_remove(name);
        debug!(name = %name, removed = removed.is_some(), "Delete record");
        removed
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the directory has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// Iterate over record names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    /// Records with a birthday in the next `window_days` days, see
    /// [`birthdays::upcoming_birthdays`].
    pub fn upcoming_birthdays(
        &self,
        today: NaiveDate,
        window_days: u32,
    ) -> Vec<UpcomingBirthday> {
        birthdays::upcoming_birthdays(self.iter(), today, window_days)
    }
}

impl<'a> IntoIterator for &'a Directory {
    type Item = &'a Record;
    type IntoIter = indexmap::map::Values<'a, String, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.values()
    }
}

impl fmt::Display for Directory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.records.is_empty() {
            return write!(f, "No records");
        }

        for (i, record) in self.records.values().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", record)?;
        }
        Ok(())
    }
}
