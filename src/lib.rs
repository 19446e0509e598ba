//! Address Book - an interactive assistant bot for contacts and birthdays.
//!
//! This library keeps names, phone numbers and birthdays in memory and
//! answers line-oriented commands to add, update, query and list contacts,
//! including a report of birthdays in the coming week.
//!
//! # Architecture
//!
//! - **domain**: Validated fields (name, phone, birthday)
//! - **models**: `Record` (one contact) and `Directory` (all contacts by name)
//! - **birthdays**: Upcoming-birthday window with weekend shift
//! - **commands**: Input tokenizing and one handler per command
//! - **session**: Read-eval-print loop and the `Clock` seam for "today"
//! - **shared**: Mutex-guarded directory handle for multiple callers
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod birthdays;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod session;
pub mod shared;

// Re-export commonly used types
pub use birthdays::{upcoming_birthdays, UpcomingBirthday, DEFAULT_WINDOW_DAYS};
pub use commands::{parse_input, Command};
pub use config::Config;
pub use domain::{Birthday, Name, Phone, ValidationError};
pub use error::{CommandError, ConfigError, RecordError};
pub use models::{Directory, Record};
pub use session::{run, Clock, FixedClock, Reply, Session, SystemClock};
pub use shared::SharedDirectory;
