//! Error types for the data-loader crate.
//!
//! Two classes of failure are kept apart:
//! - [`ValidationError`]: a record broke a format or lexical rule. Its
//!   `Display` text is the exact message written to the error report.
//! - [`DataLoadError`]: everything a load can return, where I/O problems
//!   stay separate from validation failures.

use thiserror::Error;

/// Coarse classification of a [`ValidationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed record structure (missing separator, missing detail line)
    Format,
    /// A title, id or name broke its lexical rule
    Field,
    /// A user id was already used earlier in the same batch
    Uniqueness,
}

/// A record was rejected.
///
/// The `#[error(...)]` strings are part of the output contract and must not
/// change: the report writer prints them verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("ERROR: Movie Title {{{title}}} is wrong")]
    MovieTitle { title: String },

    /// Letters of the id don't spell the title's capitals, or trailing junk
    #[error("ERROR: Movie Id letters {{{id}}} are wrong")]
    MovieIdLetters { id: String },

    /// Digit suffix isn't exactly three distinct digits
    #[error("ERROR: Movie Id numbers {{{id}}} aren't unique")]
    MovieIdNumbers { id: String },

    #[error("ERROR: User Name {{{name}}} is wrong")]
    UserName { name: String },

    #[error("ERROR: User Id {{{id}}} is wrong")]
    UserId { id: String },

    /// Same text as [`ValidationError::UserId`]; only the kind differs.
    #[error("ERROR: User Id {{{id}}} is wrong")]
    DuplicateUserId { id: String },

    /// Header line had no comma. `line` is 1-based and counts blank lines.
    #[error("ERROR: Invalid format at line {line}")]
    InvalidFormat { line: usize },

    #[error("ERROR: Missing genre line for movie: {title}")]
    MissingGenres { title: String },

    #[error("ERROR: Missing movie IDs line for user: {name}")]
    MissingLikedMovies { name: String },
}

impl ValidationError {
    /// Which part of the taxonomy this failure belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ValidationError::InvalidFormat { .. }
            | ValidationError::MissingGenres { .. }
            | ValidationError::MissingLikedMovies { .. } => ErrorKind::Format,
            ValidationError::DuplicateUserId { .. } => ErrorKind::Uniqueness,
            ValidationError::MovieTitle { .. }
            | ValidationError::MovieIdLetters { .. }
            | ValidationError::MovieIdNumbers { .. }
            | ValidationError::UserName { .. }
            | ValidationError::UserId { .. } => ErrorKind::Field,
        }
    }
}

/// Errors that can occur while loading a catalog
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// File could not be found or opened
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading a source
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// A record was rejected; the message is the validator's
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl DataLoadError {
    /// Returns the validation failure, if this is one.
    ///
    /// Callers use this to route rejected input to the error report while
    /// letting I/O failures propagate.
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            DataLoadError::Validation(err) => Some(err),
            _ => None,
        }
    }
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
