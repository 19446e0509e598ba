//! Domain value objects and types.
//!
//! This module contains the validated fields a contact is made of: names,
//! phone numbers, and birthdays. Each value object checks its input at
//! construction time, so a `Record` can never hold malformed data.

pub mod birthday;
pub mod errors;
pub mod name;
pub mod phone;

pub use birthday::{Birthday, DATE_FORMAT};
pub use errors::ValidationError;
pub use name::Name;
pub use phone::{Phone, MIN_PHONE_DIGITS};
