// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Time-based classification of competitions.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use time::PrimitiveDateTime;
use time::format_description::BorrowedFormatItem;

/// Date format used by the competition feed, e.g. `2020-03-27 10:00:00`.
pub const COMPETITION_DATE_FORMAT: &[BorrowedFormatItem<'_>] =
    time::macros::format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

/// Whether a competition has already taken place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompetitionStatus {
    /// The competition date has not been reached. Booking is offered.
    Upcoming,
    /// The competition date is in the past. Booking is not offered.
    Past,
}

impl CompetitionStatus {
    /// Converts this status to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Upcoming => "Upcoming",
            Self::Past => "Past",
        }
    }

    /// Returns whether the competition has already taken place.
    #[must_use]
    pub const fn is_past(&self) -> bool {
        matches!(self, Self::Past)
    }

    /// Returns whether booking is offered for a competition with this status.
    #[must_use]
    pub const fn is_bookable(&self) -> bool {
        matches!(self, Self::Upcoming)
    }
}

impl std::fmt::Display for CompetitionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classifies a competition date relative to `now`.
///
/// A competition is past only when its date is strictly earlier than `now`.
#[must_use]
pub fn classify(date: PrimitiveDateTime, now: PrimitiveDateTime) -> CompetitionStatus {
    if date < now {
        CompetitionStatus::Past
    } else {
        CompetitionStatus::Upcoming
    }
}

/// Parses a competition date in the feed format.
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if the string does not match
/// [`COMPETITION_DATE_FORMAT`].
pub fn parse_competition_date(date_string: &str) -> Result<PrimitiveDateTime, DomainError> {
    PrimitiveDateTime::parse(date_string.trim(), COMPETITION_DATE_FORMAT).map_err(|e| {
        DomainError::DateParseError {
            date_string: date_string.to_string(),
            error: e.to_string(),
        }
    })
}

/// Formats a competition date in the feed format.
#[must_use]
pub fn format_competition_date(date: PrimitiveDateTime) -> String {
    date.format(COMPETITION_DATE_FORMAT)
        .unwrap_or_else(|_| date.to_string())
}
