// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Loading of the club and competition JSON feeds.
//!
//! Feed records carry counts as JSON integers or as strings holding
//! integers. Every count and date is converted exactly once here, so the
//! rest of the system only sees typed values.

use gudlft::{Catalog, CoreError};
use gudlft_domain::{
    Club, Competition, DomainError, count_from_integer, parse_competition_date, parse_count,
};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;
use time::PrimitiveDateTime;

/// Errors raised while loading the feeds at startup.
#[derive(Debug, Error)]
pub enum FeedError {
    /// The feed file could not be read.
    #[error("Failed to read feed '{source_name}': {error}")]
    Io {
        /// The feed being read.
        source_name: String,
        /// The underlying I/O error.
        #[source]
        error: std::io::Error,
    },
    /// The feed is not valid JSON of the expected shape.
    #[error("Failed to parse feed '{source_name}': {error}")]
    Json {
        /// The feed being parsed.
        source_name: String,
        /// The underlying JSON error.
        #[source]
        error: serde_json::Error,
    },
    /// A record carries a value that cannot be converted.
    #[error("Invalid record {index} in feed '{source_name}': {error}")]
    Record {
        /// The feed being converted.
        source_name: String,
        /// The zero-based position of the record.
        index: usize,
        /// The conversion failure.
        #[source]
        error: DomainError,
    },
    /// The converted records do not form a valid catalog.
    #[error("Invalid catalog: {0}")]
    Catalog(#[from] CoreError),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CountValue {
    Integer(i64),
    Text(String),
}

impl CountValue {
    fn to_count(&self, field: &'static str) -> Result<u32, DomainError> {
        match self {
            Self::Integer(value) => count_from_integer(field, *value),
            Self::Text(value) => parse_count(field, value),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ClubsFeed {
    clubs: Vec<ClubRecord>,
}

#[derive(Debug, Deserialize)]
struct ClubRecord {
    name: String,
    email: String,
    points: CountValue,
}

#[derive(Debug, Deserialize)]
struct CompetitionsFeed {
    competitions: Vec<CompetitionRecord>,
}

#[derive(Debug, Deserialize)]
struct CompetitionRecord {
    name: String,
    date: String,
    #[serde(rename = "numberOfPlaces")]
    number_of_places: CountValue,
}

/// Parses a clubs feed document.
///
/// # Arguments
///
/// * `source_name` - A label for the feed, used in error messages
/// * `json` - The feed document
///
/// # Errors
///
/// Returns an error if the document is not valid JSON or a points value
/// is not a non-negative whole number.
pub fn parse_clubs_feed(source_name: &str, json: &str) -> Result<Vec<Club>, FeedError> {
    let feed: ClubsFeed = serde_json::from_str(json).map_err(|error| FeedError::Json {
        source_name: source_name.to_string(),
        error,
    })?;

    feed.clubs
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let points: u32 = record
                .points
                .to_count("points")
                .map_err(|error| FeedError::Record {
                    source_name: source_name.to_string(),
                    index,
                    error,
                })?;
            Ok(Club::new(&record.name, &record.email, points))
        })
        .collect()
}

/// Parses a competitions feed document.
///
/// Each competition's `is_past` flag is computed against `loaded_at`.
///
/// # Arguments
///
/// * `source_name` - A label for the feed, used in error messages
/// * `json` - The feed document
/// * `loaded_at` - The time the feed is considered loaded
///
/// # Errors
///
/// Returns an error if the document is not valid JSON, a date does not
/// match `YYYY-MM-DD HH:MM:SS`, or a place count is not a non-negative
/// whole number.
pub fn parse_competitions_feed(
    source_name: &str,
    json: &str,
    loaded_at: PrimitiveDateTime,
) -> Result<Vec<Competition>, FeedError> {
    let feed: CompetitionsFeed = serde_json::from_str(json).map_err(|error| FeedError::Json {
        source_name: source_name.to_string(),
        error,
    })?;

    feed.competitions
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let to_feed_error = |error: DomainError| FeedError::Record {
                source_name: source_name.to_string(),
                index,
                error,
            };

            let date: PrimitiveDateTime =
                parse_competition_date(&record.date).map_err(to_feed_error)?;
            let remaining_places: u32 = record
                .number_of_places
                .to_count("numberOfPlaces")
                .map_err(to_feed_error)?;

            Ok(Competition::new(
                &record.name,
                date,
                remaining_places,
                loaded_at,
            ))
        })
        .collect()
}

/// Reads both feed files and builds the catalog.
///
/// # Arguments
///
/// * `clubs_path` - Path to the clubs feed
/// * `competitions_path` - Path to the competitions feed
/// * `loaded_at` - The load time used to flag past competitions
///
/// # Errors
///
/// Returns an error if either file cannot be read or parsed, or if the
/// records violate catalog rules such as duplicate emails.
pub fn load_catalog(
    clubs_path: &Path,
    competitions_path: &Path,
    loaded_at: PrimitiveDateTime,
) -> Result<Catalog, FeedError> {
    let clubs: Vec<Club> =
        parse_clubs_feed(&clubs_path.display().to_string(), &read_feed(clubs_path)?)?;
    let competitions: Vec<Competition> = parse_competitions_feed(
        &competitions_path.display().to_string(),
        &read_feed(competitions_path)?,
        loaded_at,
    )?;

    tracing::info!(
        clubs = clubs.len(),
        competitions = competitions.len(),
        "Loaded feeds"
    );

    Ok(Catalog::new(clubs, competitions)?)
}

fn read_feed(path: &Path) -> Result<String, FeedError> {
    std::fs::read_to_string(path).map_err(|error| FeedError::Io {
        source_name: path.display().to_string(),
        error,
    })
}
