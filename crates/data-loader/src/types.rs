//! Core domain types for the movie and user catalogs.
//!
//! Both entities are immutable once built: fields are private and only
//! readable through accessors. Identity is the id alone, so equality and
//! hashing are written by hand instead of derived.

use serde::Serialize;
use std::hash::{Hash, Hasher};

// =============================================================================
// Type Aliases
// =============================================================================

/// Movie code such as `TDK123` (title capitals + three distinct digits)
pub type MovieId = String;

/// Nine-character user code such as `12345678A`
pub type UserId = String;

// =============================================================================
// Movie
// =============================================================================

/// A movie from the movies source.
#[derive(Debug, Clone, Serialize)]
pub struct Movie {
    title: String,
    id: MovieId,
    /// Lowercase genre tokens, in source order
    genres: Vec<String>,
}

impl Movie {
    /// Builds a movie from already-validated fields.
    pub fn new(title: impl Into<String>, id: impl Into<MovieId>, genres: Vec<String>) -> Self {
        Self {
            title: title.into(),
            id: id.into(),
            genres,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn genres(&self) -> &[String] {
        &self.genres
    }

    /// Case-insensitive genre membership
    pub fn has_genre(&self, genre: &str) -> bool {
        let genre = genre.to_lowercase();
        self.genres.iter().any(|g| g.to_lowercase() == genre)
    }
}

impl PartialEq for Movie {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Movie {}

impl Hash for Movie {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

// =============================================================================
// User
// =============================================================================

/// A user from the users source.
#[derive(Debug, Clone, Serialize)]
pub struct User {
    name: String,
    id: UserId,
    /// Liked movie ids in source order. Duplicates and unknown ids are kept.
    liked_movie_ids: Vec<MovieId>,
}

impl User {
    /// Builds a user from already-validated fields.
    pub fn new(name: impl Into<String>, id: impl Into<UserId>, liked_movie_ids: Vec<MovieId>) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            liked_movie_ids,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn liked_movie_ids(&self) -> &[MovieId] {
        &self.liked_movie_ids
    }

    pub fn has_liked(&self, movie_id: &str) -> bool {
        self.liked_movie_ids.iter().any(|id| id == movie_id)
    }
}

impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for User {}

impl Hash for User {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
