//! Lexical validation for catalog records.
//!
//! - [`MovieValidator`] is stateless.
//! - [`UserValidator`] remembers every id it accepted so that a second user
//!   with the same id is rejected. Use one instance per batch, or call
//!   [`UserValidator::reset`] between batches.
//!
//! Every check returns `Ok(())` or the first [`ValidationError`] it hits.
//!
//! [`ValidationError`]: crate::error::ValidationError

pub mod movie;
pub mod user;

pub use movie::MovieValidator;
pub use user::UserValidator;
