//! Command handlers.
//!
//! Each handler receives the already-split arguments of one command and the
//! directory it operates on, and returns the reply text. Extra trailing
//! arguments are ignored.

use super::Command;
use crate::domain::Name;
use crate::error::{CommandError, CommandResult};
use crate::models::{Directory, Record};
use chrono::NaiveDate;
use tracing::{debug, info};

/// Take exactly `N` leading arguments or fail with the command's usage.
fn take_args<'a, const N: usize>(
    command: Command,
    args: &[&'a str],
) -> CommandResult<[&'a str; N]> {
    args.get(..N)
        .and_then(|head| <[&'a str; N]>::try_from(head).ok())
        .ok_or(CommandError::MissingArguments {
            usage: command.usage(),
        })
}

fn find_mut<'b>(book: &'b mut Directory, name: &str) -> CommandResult<&'b mut Record> {
    book.find_mut(name).ok_or_else(|| CommandError::ContactNotFound(name.to_string()))
}

fn find<'b>(book: &'b Directory, name: &str) -> CommandResult<&'b Record> {
    book.find(name).ok_or_else(|| CommandError::ContactNotFound(name.to_string()))
}

/// `add <name> <phone>`: create the contact or add a phone to an existing one.
pub fn add_contact(args: &[&str], book: &mut Directory) -> CommandResult<String> {
    let [name, phone] = take_args::<2>(Command::Add, args)?;

    if let Some(record) = book.find_mut(name) {
        record.add_phone(phone)?;
        debug!(name = %name, "Contact updated");
        return Ok("Contact updated.".to_string());
    }

    let mut record = Record::new(Name::new(name)?);
    record.add_phone(phone)?;
    book.add_record(record);
    info!(name = %name, "Contact added");
    Ok("Contact added.".to_string())
}

/// `change <name> <old phone> <new phone>`.
pub fn change_contact(args: &[&str], book: &mut Directory) -> CommandResult<String> {
    let [name, old, new] = take_args::<3>(Command::Change, args)?;
    find_mut(book, name)?.edit_phone(old, new)?;
    Ok(format!("Phone number updated for {}.", name))
}

/// `phone <name>`: list a contact's phone numbers.
pub fn show_phone(args: &[&str], book: &Directory) -> CommandResult<String> {
    let [name] = take_args::<1>(Command::Phone, args)?;
    let record = find(book, name)?;
    Ok(format!("Phones for {}: {}", name, record.phones_display()))
}

/// `all`: every contact, one per line.
pub fn show_all(book: &Directory) -> String {
    book.to_string()
}

/// `add-birthday <name> <DD.MM.YYYY>`.
pub fn add_birthday(args: &[&str], book: &mut Directory) -> CommandResult<String> {
    let [name, birthday] = take_args::<2>(Command::AddBirthday, args)?;
    find_mut(book, name)?.add_birthday(birthday)?;
    Ok(format!("Birthday added for {}.", name))
}

/// `show-birthday <name>`.
pub fn show_birthday(args: &[&str], book: &Directory) -> CommandResult<String> {
    let [name] = take_args::<1>(Command::ShowBirthday, args)?;
    Ok(find(book, name)?.describe_birthday())
}

/// `birthdays`: who to congratulate within the next `window_days` days.
pub fn birthdays(book: &Directory, today: NaiveDate, window_days: u32) -> String {
    let upcoming = book.upcoming_birthdays(today, window_days);
    debug!(today = %today, count = upcoming.len(), "Upcoming birthdays");

    if upcoming.is_empty() {
        return "No upcoming birthdays.".to_string();
    }

    upcoming
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// `delete <name>`.
pub fn delete_contact(args: &[&str], book: &mut Directory) -> CommandResult<String> {
    let [name] = take_args::<1>(Command::Delete, args)?;
    book.delete(name).ok_or_else(|| CommandError::ContactNotFound(name.to_string()))?;
    info!(name = %name, "Contact deleted");
    Ok(format!("Contact {} deleted.", name))
}

/// `remove-phone <name> <phone>`: drop every copy of a phone number.
pub fn remove_phone(args: &[&str], book: &mut Directory) -> CommandResult<String> {
    let [name, phone] = take_args::<2>(Command::RemovePhone, args)?;
    find_mut(book, name)?.remove_phone(phone)?;
    Ok(format!("Phone {} removed for {}.", phone, name))
}
