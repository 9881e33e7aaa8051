//! Text rendering of the success and error reports.
//!
//! Success: one two-line block per user, in user order:
//! ```text
//! John Doe,123456789
//! Movie B,Movie C
//! ```
//! Error: the literal `Error` followed by the validation message.
//!
//! Titles are joined as-is; a comma inside a title is not escaped.

use crate::engine::UserRecommendations;
use data_loader::{User, ValidationError};
use std::io::{self, Write};

/// First line of every error report
pub const ERROR_HEADER: &str = "Error";

/// `name,id` line followed by the comma-joined titles (empty line if none).
pub fn format_recommendations(user: &User, titles: &[String]) -> String {
    format!("{},{}\n{}\n", user.name(), user.id(), titles.join(","))
}

/// Concatenate every user's block.
pub fn render_report(recommendations: &[UserRecommendations<'_>]) -> String {
    recommendations
        .iter()
        .map(|rec| format_recommendations(rec.user, &rec.titles))
        .collect()
}

/// `Error\n<message>\n`
pub fn render_error(error: &ValidationError) -> String {
    format!("{ERROR_HEADER}\n{error}\n")
}

pub fn write_report<W: Write>(sink: &mut W, recommendations: &[UserRecommendations<'_>]) -> io::Result<()> {
    sink.write_all(render_report(recommendations).as_bytes())?;
    sink.flush()
}

pub fn write_error_report<W: Write>(sink: &mut W, error: &ValidationError) -> io::Result<()> {
    sink.write_all(render_error(error).as_bytes())?;
    sink.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_with_titles() {
        let user = User::new("John Doe", "123456789", vec![]);
        let titles = vec!["Movie B".to_string(), "Movie C".to_string()];

        assert_eq!(
            format_recommendations(&user, &titles),
            "John Doe,123456789\nMovie B,Movie C\n"
        );
    }

    #[test]
    fn test_format_without_titles_keeps_empty_line() {
        let user = User::new("Mina", "12345678A", vec![]);
        assert_eq!(format_recommendations(&user, &[]), "Mina,12345678A\n\n");
    }

    #[test]
    fn test_titles_with_commas_are_not_escaped() {
        let user = User::new("Mina", "12345678A", vec![]);
        let titles = vec!["Love, Actually".to_string()];

        assert_eq!(format_recommendations(&user, &titles), "Mina,12345678A\nLove, Actually\n");
    }

    #[test]
    fn test_report_concatenates_blocks_in_order() {
        let first = User::new("Zed", "900000000", vec![]);
        let second = User::new("Amy", "100000000", vec![]);
        let recs = vec![
            UserRecommendations { user: &first, titles: vec!["Up".to_string()] },
            UserRecommendations { user: &second, titles: vec![] },
        ];

        let mut out = Vec::new();
        write_report(&mut out, &recs).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "Zed,900000000\nUp\nAmy,100000000\n\n");
    }

    #[test]
    fn test_error_report() {
        let err = ValidationError::UserId { id: "12A45".to_string() };

        let mut out = Vec::new();
        write_error_report(&mut out, &err).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "Error\nERROR: User Id {12A45} is wrong\n");
    }
}
