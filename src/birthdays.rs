//! Upcoming-birthday window calculation.
//!
//! Given "today", finds every record whose next birthday falls within a
//! window of days and works out when to congratulate them: birthdays on a
//! Saturday or Sunday are moved to the following Monday.
//!
//! Today's date is always supplied by the caller, never read from the clock
//! here, so the calculation is a pure function of its inputs.

use crate::domain::{Birthday, DATE_FORMAT};
use crate::models::Record;
use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default look-ahead used by the `birthdays` command.
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// A contact to congratulate and the (weekend-adjusted) day to do it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpcomingBirthday {
    /// The contact's name
    pub name: String,

    /// Congratulation date as `DD.MM.YYYY`
    pub congratulation_date: String,
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.congratulation_date)
    }
}

/// Collect upcoming birthdays for `records`, preserving their order.
///
/// A record is included when its next birthday on or after `today` is at
/// most `window_days` days away. The emitted date is shifted off weekends.
pub fn upcoming_birthdays<'a, I>(
    records: I,
    today: NaiveDate,
    window_days: u32,
) -> Vec<UpcomingBirthday>
where
    I: IntoIterator<Item = &'a Record>,
{
    records
        .into_iter()
        .filter_map(|record| {
            let birthday = record.birthday()?;
            let next = next_occurrence(birthday, today)?;
            let delta = (next - today).num_days();
            if delta < 0 || delta > i64::from(window_days) {
                return None;
            }

            let congratulation_date = shift_off_weekend(next)?;
            Some(UpcomingBirthday {
                name: record.name().as_str().to_string(),
                congratulation_date: congratulation_date.format(DATE_FORMAT).to_string(),
            })
        })
        .collect()
}

/// The first anniversary of `birthday` that is not before `today`.
fn next_occurrence(birthday: &Birthday, today: NaiveDate) -> Option<NaiveDate> {
    let this_year = anniversary_in(birthday, today.year())?;
    if this_year < today {
        anniversary_in(birthday, today.year() + 1)
    } else {
        Some(this_year)
    }
}

/// The anniversary of `birthday` in `year`.
///
/// Feb 29 birthdays fall on Mar 1 in common years.
pub fn anniversary_in(birthday: &Birthday, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day()).or_else(|| {
        if birthday.month() == 2 && birthday.day() == 29 {
            NaiveDate::from_ymd_opt(year, 3, 1)
        } else {
            None
        }
    })
}

/// Move Saturday and Sunday to the following Monday.
fn shift_off_weekend(date: NaiveDate) -> Option<NaiveDate> {
    match date.weekday() {
        Weekday::Sat => date.checked_add_days(Days::new(2)),
        Weekday::Sun => date.checked_add_days(Days::new(1)),
        _ => Some(date),
    }
}
