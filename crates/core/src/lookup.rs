// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only lookups used by the login and booking-page flows.

use crate::catalog::Catalog;
use gudlft_domain::{Club, Competition, DomainError};

/// A resolved (club, competition) pair for the booking page.
///
/// Both references point into the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingContext<'a> {
    /// The club making the booking.
    pub club: &'a Club,
    /// The competition being booked.
    pub competition: &'a Competition,
}

/// Resolves a club by email.
///
/// There is no authentication: logging in is an email lookup. An unknown
/// email is an expected outcome, not a fault.
///
/// # Errors
///
/// Returns `DomainError::ClubEmailNotFound` if no club has this email.
pub fn login<'a>(catalog: &'a Catalog, email: &str) -> Result<&'a Club, DomainError> {
    catalog.find_club_by_email(email)
}

/// Resolves the club and competition shown on the booking page.
///
/// Both must resolve. If either is missing the call fails as a whole and
/// no partial result is returned.
///
/// # Arguments
///
/// * `catalog` - The catalog to search
/// * `competition_name` - The competition name
/// * `club_name` - The club name
///
/// # Errors
///
/// Returns `DomainError::BookingContextNotFound` if the club, the
/// competition, or both are missing.
pub fn resolve_booking_context<'a>(
    catalog: &'a Catalog,
    competition_name: &str,
    club_name: &str,
) -> Result<BookingContext<'a>, DomainError> {
    let not_found = || DomainError::BookingContextNotFound {
        competition: competition_name.to_string(),
        club: club_name.to_string(),
    };

    let club: &Club = catalog.find_club_by_name(club_name).map_err(|_| not_found())?;
    let competition: &Competition = catalog
        .find_competition_by_name(competition_name)
        .map_err(|_| not_found())?;

    Ok(BookingContext { club, competition })
}
