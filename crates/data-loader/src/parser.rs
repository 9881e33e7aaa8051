//! Parsers for the movies and users sources.
//!
//! Both sources use the same two-line record layout:
//! - movies: `Title,ID` then `genre1,genre2,...`
//! - users: `Name,ID` then `likedId1,likedId2,...`
//!
//! Blank lines between records are skipped. The header is split on its
//! first comma only and validated before the detail line is read. The first
//! problem aborts the whole parse: callers get every record or an error,
//! never a partial list.

use crate::error::{DataLoadError, Result, ValidationError};
use crate::types::{Movie, User};
use crate::validator::{MovieValidator, UserValidator};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, warn};

/// Header line of a record, split and trimmed
#[derive(Debug)]
struct Header {
    /// Title or name
    label: String,
    id: String,
}

/// Forward-only reader over paired header/detail lines.
///
/// Keeps the 1-based physical line number so format errors can point at
/// the offending line. Bytes that are not valid UTF-8 are replaced with
/// U+FFFD instead of failing the read.
struct RecordLines<R> {
    reader: R,
    buf: Vec<u8>,
    line_no: usize,
}

impl<R: BufRead> RecordLines<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            line_no: 0,
        }
    }

    fn next_line(&mut self) -> Result<Option<String>> {
        self.buf.clear();
        if self.reader.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(None);
        }
        self.line_no += 1;

        // strip "\n" or "\r\n"
        if self.buf.last() == Some(&b'\n') {
            self.buf.pop();
            if self.buf.last() == Some(&b'\r') {
                self.buf.pop();
            }
        }
        Ok(Some(String::from_utf8_lossy(&self.buf).into_owned()))
    }

    /// Next non-blank line, split on its first comma.
    fn next_header(&mut self) -> Result<Option<Header>> {
        while let Some(line) = self.next_line()? {
            if line.trim().is_empty() {
                continue;
            }
            let (label, id) = line
                .split_once(',')
                .ok_or(ValidationError::InvalidFormat { line: self.line_no })?;
            return Ok(Some(Header {
                label: label.trim().to_string(),
                id: id.trim().to_string(),
            }));
        }
        Ok(None)
    }

    /// The line right after a header, blank or not.
    fn detail_line(&mut self) -> Result<Option<String>> {
        self.next_line()
    }
}

/// Split a detail line on commas, trimming and dropping empty tokens.
fn split_tokens(line: &str) -> impl Iterator<Item = &str> {
    line.split(',').map(str::trim).filter(|token| !token.is_empty())
}

/// Genres are lowercased so later membership checks are case-free.
fn parse_genres(line: &str) -> Vec<String> {
    split_tokens(line).map(str::to_lowercase).collect()
}

fn parse_movie_ids(line: &str) -> Vec<String> {
    split_tokens(line).map(str::to_string).collect()
}

fn open(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).map_err(|err| match err.kind() {
        std::io::ErrorKind::NotFound => DataLoadError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => DataLoadError::IoError(err),
    })?;
    Ok(BufReader::new(file))
}

// =============================================================================
// Movies
// =============================================================================

/// Reads `Title,ID` / genres record pairs into [`Movie`]s.
#[derive(Debug, Clone, Default)]
pub struct MovieParser {
    validator: MovieValidator,
}

impl MovieParser {
    pub fn new(validator: MovieValidator) -> Self {
        Self { validator }
    }

    /// Parse every movie from `reader`, stopping at the first bad record.
    pub fn parse<R: BufRead>(&self, reader: R) -> Result<Vec<Movie>> {
        let result = self.parse_records(RecordLines::new(reader));
        match &result {
            Ok(movies) => debug!("Parsed {} movies", movies.len()),
            Err(err) => warn!("Rejected movies source: {}", err),
        }
        result
    }

    /// Open `path` and parse it. A missing file is [`DataLoadError::FileNotFound`].
    pub fn parse_file(&self, path: &Path) -> Result<Vec<Movie>> {
        debug!("Reading movies from {}", path.display());
        self.parse(open(path)?)
    }

    fn parse_records<R: BufRead>(&self, mut lines: RecordLines<R>) -> Result<Vec<Movie>> {
        let mut movies = Vec::new();

        while let Some(Header { label: title, id }) = lines.next_header()? {
            self.validator.validate_movie(&title, &id)?;

            let genre_line = lines
                .detail_line()?
                .ok_or_else(|| ValidationError::MissingGenres { title: title.clone() })?;

            movies.push(Movie::new(title, id, parse_genres(&genre_line)));
        }

        Ok(movies)
    }
}

// =============================================================================
// Users
// =============================================================================

/// Reads `Name,ID` / liked-ids record pairs into [`User`]s.
///
/// Owns a [`UserValidator`], so ids must be unique across everything this
/// parser has accepted since construction or the last [`reset`].
///
/// [`reset`]: UserParser::reset
#[derive(Debug, Clone, Default)]
pub struct UserParser {
    validator: UserValidator,
}

impl UserParser {
    pub fn new(validator: UserValidator) -> Self {
        Self { validator }
    }

    /// Parse every user from `reader`, stopping at the first bad record.
    pub fn parse<R: BufRead>(&mut self, reader: R) -> Result<Vec<User>> {
        let result = self.parse_records(RecordLines::new(reader));
        match &result {
            Ok(users) => debug!("Parsed {} users", users.len()),
            Err(err) => warn!("Rejected users source: {}", err),
        }
        result
    }

    /// Open `path` and parse it. A missing file is [`DataLoadError::FileNotFound`].
    pub fn parse_file(&mut self, path: &Path) -> Result<Vec<User>> {
        debug!("Reading users from {}", path.display());
        let reader = open(path)?;
        self.parse(reader)
    }

    /// Start a fresh batch: previously accepted ids become available again.
    pub fn reset(&mut self) {
        self.validator.reset();
    }

    fn parse_records<R: BufRead>(&mut self, mut lines: RecordLines<R>) -> Result<Vec<User>> {
        let mut users = Vec::new();

        while let Some(Header { label: name, id }) = lines.next_header()? {
            self.validator.validate_user(&name, &id)?;

            let liked_line = lines
                .detail_line()?
                .ok_or_else(|| ValidationError::MissingLikedMovies { name: name.clone() })?;

            users.push(User::new(name, id, parse_movie_ids(&liked_line)));
        }

        Ok(users)
    }
}
