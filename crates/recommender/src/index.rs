//! Lookup structures over a parsed movie catalog.
//!
//! The index borrows the catalog; it is built once per run and then only
//! read, so every user's recommendation sees the same view.

use data_loader::Movie;
use std::collections::{BTreeSet, HashMap};

/// Borrowed view of the movie catalog with id and genre lookups.
#[derive(Debug)]
pub struct CatalogIndex<'a> {
    movies: &'a [Movie],
    /// Later movies replace earlier ones sharing an id
    by_id: HashMap<&'a str, &'a Movie>,
    /// Catalog positions per genre, ascending
    genre_index: HashMap<&'a str, Vec<usize>>,
}

impl<'a> CatalogIndex<'a> {
    /// Index `movies` by id and by genre.
    pub fn build(movies: &'a [Movie]) -> Self {
        let mut by_id = HashMap::with_capacity(movies.len());
        let mut genre_index: HashMap<&'a str, Vec<usize>> = HashMap::new();

        for (position, movie) in movies.iter().enumerate() {
            by_id.insert(movie.id(), movie);

            for genre in movie.genres() {
                let positions = genre_index.entry(genre.as_str()).or_default();
                // a genre listed twice on one movie is indexed once
                if positions.last() != Some(&position) {
                    positions.push(position);
                }
            }
        }

        Self {
            movies,
            by_id,
            genre_index,
        }
    }

    pub fn get_movie(&self, id: &str) -> Option<&'a Movie> {
        self.by_id.get(id).copied()
    }

    /// Catalog positions of movies carrying `genre`
    pub fn get_positions_by_genre(&self, genre: &str) -> &[usize] {
        self.genre_index
            .get(genre)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Every movie sharing at least one of `genres`, in catalog order.
    pub fn movies_with_any_genre<'g, I>(&self, genres: I) -> Vec<&'a Movie>
    where
        I: IntoIterator<Item = &'g str>,
    {
        let positions: BTreeSet<usize> = genres
            .into_iter()
            .flat_map(|genre| self.get_positions_by_genre(genre).iter().copied())
            .collect();

        positions
            .into_iter()
            .filter_map(|position| self.movies.get(position))
            .collect()
    }

    /// Number of distinct genres seen in the catalog
    pub fn genre_count(&self) -> usize {
        self.genre_index.len()
    }
}
