//! # Genre-overlap recommendation engine
//!
//! For one user:
//! 1. Look up every liked id in the catalog index and union their genres
//! 2. Pull every movie sharing one of those genres from the genre index
//! 3. Drop movies the user already liked
//! 4. Keep one movie per title
//!
//! Titles come back in catalog order of first appearance. That order is a
//! by-product of the genre index; callers should treat the result as a set.

use crate::filter_pipeline::FilterPipeline;
use crate::filters::{AlreadyLikedFilter, DistinctTitleFilter};
use crate::index::CatalogIndex;
use crate::profile::build_user_profile;
use data_loader::{Movie, User};
use tracing::debug;

/// Recommendation titles for one user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecommendations<'u> {
    pub user: &'u User,
    pub titles: Vec<String>,
}

/// Recommends movies from one catalog to any number of users.
///
/// Holds a read-only index; recommending for one user never affects another.
pub struct Recommender<'a> {
    index: CatalogIndex<'a>,
    filter_pipeline: FilterPipeline,
}

impl<'a> Recommender<'a> {
    /// Index `movies` and set up the standard filter pipeline.
    pub fn new(movies: &'a [Movie]) -> Self {
        let index = CatalogIndex::build(movies);
        debug!(
            "Indexed {} movies across {} genres",
            movies.len(),
            index.genre_count()
        );

        let filter_pipeline = FilterPipeline::new()
            .add_filter(AlreadyLikedFilter)
            .add_filter(DistinctTitleFilter);

        Self {
            index,
            filter_pipeline,
        }
    }

    /// Titles of unliked movies sharing a genre with something `user` liked.
    pub fn recommend(&self, user: &User) -> Vec<String> {
        let profile = build_user_profile(&self.index, user);
        if profile.liked_genres.is_empty() {
            debug!("User {} has no liked genres", user.id());
            return Vec::new();
        }

        let candidates = self
            .index
            .movies_with_any_genre(profile.liked_genres.iter().copied());
        let kept = self.filter_pipeline.apply(candidates, &profile);

        debug!(
            "User {}: {} liked genres, {} recommendations",
            user.id(),
            profile.liked_genres.len(),
            kept.len()
        );
        kept.into_iter().map(|movie| movie.title().to_string()).collect()
    }

    /// Recommend for each user independently, keeping the users' order.
    pub fn generate_for_all<'u>(&self, users: &'u [User]) -> Vec<UserRecommendations<'u>> {
        users
            .iter()
            .map(|user| UserRecommendations {
                user,
                titles: self.recommend(user),
            })
            .collect()
    }
}

/// One-off recommendation for `user` against `all_movies`.
pub fn recommend(user: &User, all_movies: &[Movie]) -> Vec<String> {
    Recommender::new(all_movies).recommend(user)
}

/// Recommendations for every user against the same catalog.
pub fn generate_for_all<'u>(users: &'u [User], movies: &[Movie]) -> Vec<UserRecommendations<'u>> {
    Recommender::new(movies).generate_for_all(users)
}
