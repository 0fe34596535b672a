// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation and booking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Club name is empty or invalid.
    InvalidClubName(String),
    /// Club email is empty or invalid.
    InvalidEmail(String),
    /// Competition name is empty or invalid.
    InvalidCompetitionName(String),
    /// A points or places count could not be converted to a non-negative integer.
    InvalidCount {
        /// The field being converted.
        field: &'static str,
        /// The raw value that failed conversion.
        value: String,
    },
    /// The requested number of places is not a positive whole number.
    ///
    /// This is a caller error, not a booking rejection.
    InvalidPlaces {
        /// The raw input as supplied by the caller.
        input: String,
        /// Why the input was refused.
        reason: &'static str,
    },
    /// Failed to parse a competition date.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
    /// No club is registered with this email.
    ClubEmailNotFound(String),
    /// No club is registered with this name.
    ClubNotFound(String),
    /// No competition exists with this name.
    CompetitionNotFound(String),
    /// The booking page could not be resolved.
    ///
    /// Raised when either the competition or the club is missing; the two
    /// cases are deliberately not distinguished.
    BookingContextNotFound {
        /// The competition name that was requested.
        competition: String,
        /// The club name that was requested.
        club: String,
    },
    /// Two clubs share the same email.
    DuplicateClubEmail(String),
    /// Two clubs share the same name.
    DuplicateClubName(String),
    /// Two competitions share the same name.
    DuplicateCompetition(String),
    /// An allocation would drive a balance below zero.
    ///
    /// Only reachable when an approval is executed against state that changed
    /// after it was evaluated.
    AllocationUnderflow {
        /// The club name.
        club: String,
        /// The competition name.
        competition: String,
        /// The number of places that could not be allocated.
        places: u32,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidClubName(msg) => write!(f, "Invalid club name: {msg}"),
            Self::InvalidEmail(msg) => write!(f, "Invalid email: {msg}"),
            Self::InvalidCompetitionName(msg) => write!(f, "Invalid competition name: {msg}"),
            Self::InvalidCount { field, value } => {
                write!(
                    f,
                    "Invalid {field} value '{value}': must be a non-negative whole number"
                )
            }
            Self::InvalidPlaces { input, reason } => {
                write!(f, "Invalid number of places '{input}': {reason}")
            }
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
            Self::ClubEmailNotFound(email) => {
                write!(f, "No club is registered with email '{email}'")
            }
            Self::ClubNotFound(name) => write!(f, "Club '{name}' not found"),
            Self::CompetitionNotFound(name) => write!(f, "Competition '{name}' not found"),
            Self::BookingContextNotFound { competition, club } => {
                write!(
                    f,
                    "Could not resolve booking for competition '{competition}' and club '{club}'"
                )
            }
            Self::DuplicateClubEmail(email) => {
                write!(f, "A club with email '{email}' already exists")
            }
            Self::DuplicateClubName(name) => write!(f, "Club '{name}' already exists"),
            Self::DuplicateCompetition(name) => {
                write!(f, "Competition '{name}' already exists")
            }
            Self::AllocationUnderflow {
                club,
                competition,
                places,
            } => {
                write!(
                    f,
                    "Allocating {places} places of '{competition}' to '{club}' would leave a negative balance"
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}
