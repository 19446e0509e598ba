//! Error types for the address book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Field validation failures live in [`crate::domain::ValidationError`]; the enums
//! here wrap them for record operations, the command layer, and configuration.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when mutating or querying a single record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// A phone or birthday argument failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The phone number to edit is not stored on the record
    #[error("Old phone number not found: {0}")]
    PhoneNotFound(String),
}

/// Errors surfaced by command handlers.
///
/// Each variant maps to one kind of user-facing reply, see
/// [`CommandError::user_message`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The command was given fewer arguments than it needs
    #[error("Missing arguments, usage: {usage}")]
    MissingArguments { usage: &'static str },

    /// No record is stored under the given name
    #[error("Contact {0} not found.")]
    ContactNotFound(String),

    /// A record operation failed
    #[error(transparent)]
    Record(#[from] RecordError),
}

impl From<ValidationError> for CommandError {
    fn from(err: ValidationError) -> Self {
        CommandError::Record(RecordError::Validation(err))
    }
}

impl CommandError {
    /// Text printed to the user in place of a command's normal reply.
    pub fn user_message(&self) -> String {
        match self {
            CommandError::MissingArguments { usage } => (*usage).to_string(),
            CommandError::ContactNotFound(_) => self.to_string(),
            CommandError::Record(err) => {
                format!("An error occurred. Please check your input.\n{}", err)
            }
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Failed to load .env file
    #[error("Failed to load .env file: {0}")]
    DotenvError(String),
}

/// Convenience type alias for Results with RecordError
pub type RecordResult<T> = Result<T, RecordError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
