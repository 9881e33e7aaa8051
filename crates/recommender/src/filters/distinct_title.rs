//! Filter to collapse candidates that share a title.

use crate::profile::UserProfile;
use crate::traits::Filter;
use data_loader::Movie;
use std::collections::HashSet;

/// Keeps the first candidate for each title and drops the rest.
pub struct DistinctTitleFilter;

impl Filter for DistinctTitleFilter {
    fn name(&self) -> &str {
        "DistinctTitleFilter"
    }

    fn apply<'a>(&self, candidates: Vec<&'a Movie>, _profile: &UserProfile<'_>) -> Vec<&'a Movie> {
        let mut seen = HashSet::new();
        candidates
            .into_iter()
            .filter(|movie| seen.insert(movie.title()))
            .collect()
    }
}
