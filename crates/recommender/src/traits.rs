//! Core trait for the candidate filtering stage.

use crate::profile::UserProfile;
use data_loader::Movie;

/// A step that narrows a list of candidate movies for one user.
///
/// Filters take ownership of the candidate list and return what survives,
/// keeping the relative order of the input.
pub trait Filter {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to `candidates` for the user described by `profile`.
    fn apply<'a>(&self, candidates: Vec<&'a Movie>, profile: &UserProfile<'_>) -> Vec<&'a Movie>;
}
