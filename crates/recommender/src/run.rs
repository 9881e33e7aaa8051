//! # End-to-end run over streams
//!
//! Parses movies, then users, recommends, and writes one report to the
//! sink:
//! 1. Parse the movies source (fail fast)
//! 2. Parse the users source with a fresh user validator (fail fast)
//! 3. Recommend for every user
//! 4. Write the recommendation report, or `Error\n<message>\n` if step 1
//!    or 2 rejected a record
//!
//! I/O failures are returned as errors and nothing is written for them.
//! The report is rendered in full before the first byte reaches the sink.

use crate::engine::Recommender;
use crate::report::{write_error_report, write_report};
use data_loader::{DataLoadError, Movie, MovieParser, User, UserParser, ValidationError};
use std::io::{BufRead, Write};
use tracing::{info, warn};

/// What a completed run wrote to the sink
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// A recommendation report was written
    Recommended { movies: usize, users: usize },
    /// An error report was written for this rejected record
    Rejected(ValidationError),
}

/// Parse both sources and write the resulting report to `sink`.
pub fn process<M, U, W>(movies: M, users: U, sink: &mut W) -> Result<RunOutcome, DataLoadError>
where
    M: BufRead,
    U: BufRead,
    W: Write,
{
    let (movies, users) = match load(movies, users) {
        Ok(loaded) => loaded,
        Err(DataLoadError::Validation(err)) => {
            warn!("Input rejected: {}", err);
            write_error_report(sink, &err)?;
            return Ok(RunOutcome::Rejected(err));
        }
        Err(err) => return Err(err),
    };

    let recommender = Recommender::new(&movies);
    let recommendations = recommender.generate_for_all(&users);

    write_report(sink, &recommendations)?;

    info!(
        "Wrote recommendations for {} users from {} movies",
        users.len(),
        movies.len()
    );
    Ok(RunOutcome::Recommended {
        movies: movies.len(),
        users: users.len(),
    })
}

/// Parse both sources; the first failure in either wins.
pub fn load<M: BufRead, U: BufRead>(movies: M, users: U) -> Result<(Vec<Movie>, Vec<User>), DataLoadError> {
    let movies = MovieParser::default().parse(movies)?;
    let users = UserParser::default().parse(users)?;
    Ok((movies, users))
}
