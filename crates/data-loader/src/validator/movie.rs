//! Rules for movie header fields (`Title,ID`).

use crate::error::ValidationError;
use std::collections::HashSet;

/// Number of digits a movie id must end with
const ID_DIGITS: usize = 3;

/// Validates movie titles and ids.
#[derive(Debug, Clone, Copy, Default)]
pub struct MovieValidator;

impl MovieValidator {
    pub fn new() -> Self {
        Self
    }

    /// Every whitespace-separated word must start with an uppercase letter.
    ///
    /// Only ASCII whitespace separates words, so a no-break space stays
    /// inside its word. Titles that lead with a digit ("2001 A Space
    /// Odyssey") are rejected.
    pub fn validate_title(&self, title: &str) -> Result<(), ValidationError> {
        let mut words = title
            .split(is_word_separator)
            .filter(|word| !word.is_empty())
            .peekable();
        if words.peek().is_none() {
            return Err(title_error(title));
        }

        let all_capitalised = words.all(|word| word.chars().next().is_some_and(char::is_uppercase));
        if !all_capitalised {
            return Err(title_error(title));
        }
        Ok(())
    }

    /// Checks that `id` is the title's capitals followed by three distinct
    /// digits, e.g. `TDK123` for "The Dark Knight".
    pub fn validate_id(&self, id: &str, title: &str) -> Result<(), ValidationError> {
        if id.trim().is_empty() {
            return Err(letters_error(id));
        }

        let expected: String = title.chars().filter(|c| c.is_uppercase()).collect();

        let letters_end = id
            .char_indices()
            .find(|(_, c)| !c.is_alphabetic())
            .map_or(id.len(), |(idx, _)| idx);
        let (letters, rest) = id.split_at(letters_end);

        let digits_end = rest
            .char_indices()
            .find(|(_, c)| !c.is_ascii_digit())
            .map_or(rest.len(), |(idx, _)| idx);
        let (digits, trailing) = rest.split_at(digits_end);

        if !trailing.is_empty() || letters != expected {
            return Err(letters_error(id));
        }

        // digits are ASCII, so byte length is the digit count
        if digits.len() != ID_DIGITS {
            return Err(numbers_error(id));
        }
        let mut seen = HashSet::with_capacity(ID_DIGITS);
        if !digits.chars().all(|d| seen.insert(d)) {
            return Err(numbers_error(id));
        }

        Ok(())
    }

    /// Title first, then id. A bad title hides any id problem.
    pub fn validate_movie(&self, title: &str, id: &str) -> Result<(), ValidationError> {
        self.validate_title(title)?;
        self.validate_id(id, title)
    }
}

/// Space, tab, line feed, vertical tab, form feed, carriage return
fn is_word_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

fn title_error(title: &str) -> ValidationError {
    ValidationError::MovieTitle {
        title: title.to_string(),
    }
}

fn letters_error(id: &str) -> ValidationError {
    ValidationError::MovieIdLetters { id: id.to_string() }
}

fn numbers_error(id: &str) -> ValidationError {
    ValidationError::MovieIdNumbers { id: id.to_string() }
}
