//! Rules for user header fields (`Name,ID`), plus id uniqueness.

use crate::error::ValidationError;
use std::collections::HashSet;

/// Exact number of characters in a user id
const USER_ID_LEN: usize = 9;

/// Validates user names and ids, and tracks ids already accepted.
///
/// The seen-id set belongs to this instance only. It is not safe to share
/// one validator across independent batches without calling [`reset`].
///
/// [`reset`]: UserValidator::reset
#[derive(Debug, Clone, Default)]
pub struct UserValidator {
    used_ids: HashSet<String>,
}

impl UserValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Letters and spaces only, non-empty, no leading space.
    pub fn validate_name(&self, name: &str) -> Result<(), ValidationError> {
        let well_formed = !name.is_empty()
            && !name.starts_with(' ')
            && name.chars().all(|c| c.is_alphabetic() || c == ' ');

        if well_formed {
            Ok(())
        } else {
            Err(ValidationError::UserName {
                name: name.to_string(),
            })
        }
    }

    /// Nine characters: digits, optionally ending in one uppercase letter.
    ///
    /// The first character must be a digit. Does not consult the seen-id set.
    pub fn validate_id(&self, id: &str) -> Result<(), ValidationError> {
        let chars: Vec<char> = id.chars().collect();
        if chars.len() != USER_ID_LEN || !chars.first().is_some_and(char::is_ascii_digit) {
            return Err(id_error(id));
        }

        let last = chars.len() - 1;
        for (idx, c) in chars.iter().enumerate() {
            let allowed = if c.is_alphabetic() {
                idx == last && c.is_uppercase()
            } else {
                c.is_ascii_digit()
            };
            if !allowed {
                return Err(id_error(id));
            }
        }
        Ok(())
    }

    /// Fails if `id` was accepted before; otherwise records it.
    pub fn check_unique_user_id(&mut self, id: &str) -> Result<(), ValidationError> {
        if self.used_ids.contains(id) {
            return Err(ValidationError::DuplicateUserId { id: id.to_string() });
        }
        self.used_ids.insert(id.to_string());
        Ok(())
    }

    /// Name, then id format, then uniqueness.
    ///
    /// The id is only recorded when all three pass.
    pub fn validate_user(&mut self, name: &str, id: &str) -> Result<(), ValidationError> {
        self.validate_name(name)?;
        self.validate_id(id)?;
        self.check_unique_user_id(id)
    }

    /// Forget every id seen so far.
    pub fn reset(&mut self) {
        self.used_ids.clear();
    }

    /// Number of ids accepted since the last reset
    pub fn seen_count(&self) -> usize {
        self.used_ids.len()
    }
}

fn id_error(id: &str) -> ValidationError {
    ValidationError::UserId { id: id.to_string() }
}
