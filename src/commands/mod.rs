//! Command layer for the assistant bot.
//!
//! This module turns a line of user input into a [`Command`] plus its
//! arguments, and provides one handler per command:
//! - **Contacts**: `add`, `change`, `phone`, `all`, `delete`, `remove-phone`
//! - **Birthdays**: `add-birthday`, `show-birthday`, `birthdays`
//! - **Session**: `hello`, `close` / `exit`
//!
//! Handlers return the reply text or a [`CommandError`](crate::error::CommandError)
//! which the session turns into user-facing text.

pub mod handlers;

use std::fmt;
use std::str::FromStr;

pub use handlers::{
    add_birthday, add_contact, birthdays, change_contact, delete_contact, remove_phone,
    show_all, show_birthday, show_phone,
};

/// Every command the assistant understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Hello,
    Add,
    Change,
    Phone,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    Delete,
    RemovePhone,
    Exit,
}

impl Command {
    /// All commands, in the order they are listed to the user.
    pub const ALL: [Command; 11] = [
        Command::Hello,
        Command::Add,
        Command::Change,
        Command::Phone,
        Command::All,
        Command::AddBirthday,
        Command::ShowBirthday,
        Command::Birthdays,
        Command::Delete,
        Command::RemovePhone,
        Command::Exit,
    ];

    /// The word typed to invoke this command.
    pub fn keyword(&self) -> &'static str {
        match self {
            Command::Hello => "hello",
            Command::Add => "add",
            Command::Change => "change",
            Command::Phone => "phone",
            Command::All => "all",
            Command::AddBirthday => "add-birthday",
            Command::ShowBirthday => "show-birthday",
            Command::Birthdays => "birthdays",
            Command::Delete => "delete",
            Command::RemovePhone => "remove-phone",
            Command::Exit => "exit",
        }
    }

    /// Reply shown when the command is missing arguments.
    pub fn usage(&self) -> &'static str {
        match self {
            Command::Add => {
                "Give me name and phone please.\nExample - add John 1234567890 or change John 0987654321"
            }
            Command::Change => {
                "Give me name, old phone and new phone please.\nExample - change John 1234567890 0987654321"
            }
            Command::Phone => "Give me a name please.\nExample - phone John",
            Command::AddBirthday => {
                "Give me name and birthday please.\nExample - add-birthday John 15.06.1990"
            }
            Command::ShowBirthday => "Give me a name please.\nExample - show-birthday John",
            Command::Delete => "Give me a name please.\nExample - delete John",
            Command::RemovePhone => {
                "Give me name and phone please.\nExample - remove-phone John 1234567890"
            }
            Command::Hello | Command::All | Command::Birthdays | Command::Exit => self.keyword(),
        }
    }
}

/// Error returned when a word is not a known command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCommand(pub String);

impl fmt::Display for UnknownCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown command: {}", self.0)
    }
}

impl std::error::Error for UnknownCommand {}

impl FromStr for Command {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let word = s.trim().to_lowercase();
        if word == "close" {
            return Ok(Command::Exit);
        }
        Command::ALL
            .iter()
            .copied()
            .find(|c| c.keyword() == word)
            .ok_or(UnknownCommand(word))
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.keyword())
    }
}

/// Split a line into its command word and arguments on whitespace.
///
/// Returns `None` for a blank line.
pub fn parse_input(line: &str) -> Option<(&str, Vec<&str>)> {
    let mut words = line.split_whitespace();
    let command = words.next()?;
    Some((command, words.collect()))
}
