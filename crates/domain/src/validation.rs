// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{Club, Competition};

/// Converts a textual count from a feed into a non-negative integer.
///
/// Feeds may store points and places as strings. They are converted once,
/// here, so the rest of the system works with integers.
///
/// # Arguments
///
/// * `field` - The field name, used in the error
/// * `value` - The raw text (surrounding whitespace is ignored)
///
/// # Errors
///
/// Returns `DomainError::InvalidCount` if the value is not a non-negative
/// whole number that fits in a `u32`.
pub fn parse_count(field: &'static str, value: &str) -> Result<u32, DomainError> {
    value
        .trim()
        .parse::<u32>()
        .map_err(|_| DomainError::InvalidCount {
            field,
            value: value.to_string(),
        })
}

/// Converts an integer count from a feed into a non-negative integer.
///
/// # Errors
///
/// Returns `DomainError::InvalidCount` if the value is negative or does not
/// fit in a `u32`.
pub fn count_from_integer(field: &'static str, value: i64) -> Result<u32, DomainError> {
    u32::try_from(value).map_err(|_| DomainError::InvalidCount {
        field,
        value: value.to_string(),
    })
}

/// Validates that a club's basic field constraints are met.
///
/// This does NOT check for uniqueness (that requires the whole catalog).
///
/// # Errors
///
/// Returns an error if:
/// - The club name is empty
/// - The email is empty or has no `@`
pub fn validate_club_fields(club: &Club) -> Result<(), DomainError> {
    // Rule: name must not be empty
    if club.name().is_empty() {
        return Err(DomainError::InvalidClubName(String::from(
            "Club name cannot be empty",
        )));
    }

    // Rule: email must look like an address
    if club.email().is_empty() {
        return Err(DomainError::InvalidEmail(String::from(
            "Email cannot be empty",
        )));
    }
    if !club.email().contains('@') {
        return Err(DomainError::InvalidEmail(format!(
            "'{}' is not an email address",
            club.email()
        )));
    }

    Ok(())
}

/// Validates that a competition's basic field constraints are met.
///
/// # Errors
///
/// Returns `DomainError::InvalidCompetitionName` if the name is empty.
pub fn validate_competition_fields(competition: &Competition) -> Result<(), DomainError> {
    if competition.name().is_empty() {
        return Err(DomainError::InvalidCompetitionName(String::from(
            "Competition name cannot be empty",
        )));
    }
    Ok(())
}
