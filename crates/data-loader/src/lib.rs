//! # Data Loader Crate
//!
//! Loads and validates the two flat-text catalogs: movies and users.
//!
//! ## Main Components
//!
//! - **types**: `Movie` and `User`, immutable and compared by id
//! - **validator**: lexical rules for titles, names and ids
//! - **parser**: fail-fast readers for the two-line record format
//! - **error**: `ValidationError` (rejected input) and `DataLoadError`
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::{MovieParser, UserParser};
//! use std::path::Path;
//!
//! let movies = MovieParser::default().parse_file(Path::new("input/movies.txt"))?;
//! let users = UserParser::default().parse_file(Path::new("input/users.txt"))?;
//!
//! println!("{} movies, {} users", movies.len(), users.len());
//! ```

// Public modules
pub mod error;
pub mod parser;
pub mod types;
pub mod validator;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, ErrorKind, Result, ValidationError};
pub use parser::{MovieParser, UserParser};
pub use types::{Movie, MovieId, User, UserId};
pub use validator::{MovieValidator, UserValidator};

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_serialize_catalog() {
        let movies = MovieParser::default()
            .parse(Cursor::new("The Dark Knight,TDK123\nAction\n"))
            .unwrap();

        let json = serde_json::to_value(&movies).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                { "title": "The Dark Knight", "id": "TDK123", "genres": ["action"] }
            ])
        );
    }

    #[test]
    fn test_serialize_user() {
        let user = User::new("John Doe", "123456789", vec!["TDK123".to_string()]);

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["liked_movie_ids"][0], "TDK123");
        assert_eq!(json["name"], "John Doe");
    }
}
