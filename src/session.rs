//! Interactive session: owns the directory and drives the read-eval-print loop.
//!
//! [`Session::handle_line`] is synchronous and does no I/O, so the whole
//! command surface can be tested with plain strings. [`run`] wraps it with
//! buffered async line input and output.

use crate::commands::{self, parse_input, Command};
use crate::error::CommandResult;
use crate::models::Directory;
use chrono::{Local, NaiveDate};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, warn};

/// Printed once when the loop starts.
pub const GREETING: &str = "Welcome to the assistant bot!";

/// Source of "today" for the birthday report.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Reads the local system date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always returns the same date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Outcome of handling one line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print the text and keep reading.
    Continue(String),
    /// Print the text and stop.
    Exit(String),
}

impl Reply {
    pub fn text(&self) -> &str {
        match self {
            Reply::Continue(text) | Reply::Exit(text) => text,
        }
    }
}

/// One user's session with the assistant.
#[derive(Debug)]
pub struct Session<C: Clock = SystemClock> {
    book: Directory,
    clock: C,
    window_days: u32,
}

impl<C: Clock> Session<C> {
    pub fn new(clock: C, window_days: u32) -> Self {
        Self::with_directory(Directory::new(), clock, window_days)
    }

    pub fn with_directory(book: Directory, clock: C, window_days: u32) -> Self {
        Self {
            book,
            clock,
            window_days,
        }
    }

    pub fn directory(&self) -> &Directory {
        &self.book
    }

    /// Handle one line of input and produce the reply.
    pub fn handle_line(&mut self, line: &str) -> Reply {
        let Some((word, args)) = parse_input(line) else {
            return Reply::Continue("Invalid command.".to_string());
        };

        let command = match word.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                debug!(error = %e, "Rejected input");
                return Reply::Continue("Invalid command.".to_string());
            }
        };

        match command {
            Command::Exit => Reply::Exit("Good bye!".to_string()),
            Command::Hello => Reply::Continue("How can I help you?".to_string()),
            _ => {
                let text = match self.execute(command, &args) {
                    Ok(text) => text,
                    Err(e) => {
                        warn!(command = %command, error = %e, "Command failed");
                        e.user_message()
                    }
                };
                Reply::Continue(text)
            }
        }
    }

    fn execute(&mut self, command: Command, args: &[&str]) -> CommandResult<String> {
        let book = &mut self.book;
        match command {
            Command::Add => commands::add_contact(args, book),
            Command::Change => commands::change_contact(args, book),
            Command::Phone => commands::show_phone(args, book),
            Command::All => Ok(commands::show_all(book)),
            Command::AddBirthday => commands::add_birthday(args, book),
            Command::ShowBirthday => commands::show_birthday(args, book),
            Command::Birthdays => Ok(commands::birthdays(
                book,
                self.clock.today(),
                self.window_days,
            )),
            Command::Delete => commands::delete_contact(args, book),
            Command::RemovePhone => commands::remove_phone(args, book),
            Command::Hello | Command::Exit => Ok(String::new()),
        }
    }
}

/// Run the read-eval-print loop until an exit command or end of input.
///
/// Writes the greeting, then for every line prints `prompt`, reads the
/// line, and writes the reply followed by a newline.
pub async fn run<C, R, W>(
    session: &mut Session<C>,
    mut reader: R,
    mut writer: W,
    prompt: &str,
) -> std::io::Result<()>
where
    C: Clock,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    writer.write_all(format!("{}\n", GREETING).as_bytes()).await?;

    let mut line = String::new();
    loop {
        writer.write_all(prompt.as_bytes()).await?;
        writer.flush().await?;

        line.clear();
        if reader.read_line(&mut line).await? == 0 {
            info!("End of input, stopping");
            break;
        }

        let reply = session.handle_line(&line);
        writer.write_all(reply.text().as_bytes()).await?;
        writer.write_all(b"\n").await?;

        if let Reply::Exit(_) = reply {
            break;
        }
    }

    writer.flush().await
}
