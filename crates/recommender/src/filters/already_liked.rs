//! Filter to remove movies the user already liked.

use crate::profile::UserProfile;
use crate::traits::Filter;
use data_loader::Movie;

/// Drops any candidate whose id is in the user's liked list.
///
/// Matches on id, so every catalog entry sharing a liked id is removed.
pub struct AlreadyLikedFilter;

impl Filter for AlreadyLikedFilter {
    fn name(&self) -> &str {
        "AlreadyLikedFilter"
    }

    fn apply<'a>(&self, candidates: Vec<&'a Movie>, profile: &UserProfile<'_>) -> Vec<&'a Movie> {
        candidates
            .into_iter()
            .filter(|movie| !profile.has_liked(movie.id()))
            .collect()
    }
}
