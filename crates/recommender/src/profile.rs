//! Per-user view used while recommending.
//!
//! Gathers what the filters need once up front: the liked ids as a set and
//! the union of genres over every liked movie that exists in the catalog.

use crate::index::CatalogIndex;
use data_loader::User;
use std::collections::HashSet;

/// Liked ids and liked-genre union for one user.
#[derive(Debug, Clone, Default)]
pub struct UserProfile<'a> {
    pub liked_ids: HashSet<&'a str>,
    pub liked_genres: HashSet<&'a str>,
}

impl UserProfile<'_> {
    pub fn has_liked(&self, movie_id: &str) -> bool {
        self.liked_ids.contains(movie_id)
    }
}

/// Build a [`UserProfile`] for `user` against `index`.
///
/// Liked ids that match no movie still count as liked but add no genres.
pub fn build_user_profile<'a>(index: &CatalogIndex<'a>, user: &'a User) -> UserProfile<'a> {
    let liked_ids: HashSet<&'a str> = user.liked_movie_ids().iter().map(String::as_str).collect();

    let liked_genres = liked_ids
        .iter()
        .filter_map(|id| index.get_movie(id))
        .flat_map(|movie| movie.genres().iter().map(String::as_str))
        .collect();

    UserProfile {
        liked_ids,
        liked_genres,
    }
}
