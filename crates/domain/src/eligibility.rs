// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking eligibility rules.
//!
//! Evaluation is pure: it reads a club and a competition and decides whether
//! a requested number of places may be purchased. Nothing is mutated here.

use crate::error::DomainError;
use crate::types::{Club, Competition};
use serde::{Deserialize, Serialize};

/// The maximum number of places a club may purchase in a single booking.
pub const MAX_PLACES_PER_BOOKING: u32 = 12;

/// Why a booking request was refused.
///
/// Each variant carries the bound that the request exceeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rejection {
    /// More places were requested than the competition has left.
    ExceedsRemainingPlaces {
        /// Places remaining in the competition.
        remaining: u32,
    },
    /// More places were requested than the club has points.
    ExceedsClubPoints {
        /// The club's points balance.
        points: u32,
    },
    /// More places were requested than a single booking allows.
    ExceedsBookingMaximum {
        /// The per-booking maximum.
        maximum: u32,
    },
}

impl Rejection {
    /// Returns a stable identifier for the rule that failed.
    #[must_use]
    pub const fn rule(&self) -> &'static str {
        match self {
            Self::ExceedsRemainingPlaces { .. } => "remaining_places",
            Self::ExceedsClubPoints { .. } => "club_points",
            Self::ExceedsBookingMaximum { .. } => "booking_maximum",
        }
    }

    /// Returns a short description of the failed rule.
    #[must_use]
    pub const fn reason(&self) -> &'static str {
        match self {
            Self::ExceedsRemainingPlaces { .. } => "exceeds remaining places",
            Self::ExceedsClubPoints { .. } => "exceeds club points",
            Self::ExceedsBookingMaximum { .. } => "exceeds per-booking maximum",
        }
    }

    /// Returns the numeric bound the request exceeded.
    #[must_use]
    pub const fn limit(&self) -> u32 {
        match self {
            Self::ExceedsRemainingPlaces { remaining } => *remaining,
            Self::ExceedsClubPoints { points } => *points,
            Self::ExceedsBookingMaximum { maximum } => *maximum,
        }
    }
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ExceedsRemainingPlaces { remaining } => {
                write!(f, "Cannot book more places than remaining ({remaining}).")
            }
            Self::ExceedsClubPoints { points } => {
                write!(f, "Cannot book more places than points you have ({points}).")
            }
            Self::ExceedsBookingMaximum { maximum } => {
                write!(f, "Cannot book more than max limit ({maximum}).")
            }
        }
    }
}

/// Proof that a number of places was approved by [`evaluate`].
///
/// Only the evaluator can create one, and executing it consumes it, so an
/// allocation cannot run without a fresh approval.
#[derive(Debug, PartialEq, Eq)]
pub struct ApprovedPlaces {
    places: u32,
}

impl ApprovedPlaces {
    /// Returns the approved number of places.
    #[must_use]
    pub const fn places(&self) -> u32 {
        self.places
    }

    /// Consumes the approval, yielding the approved number of places.
    pub(crate) const fn into_places(self) -> u32 {
        self.places
    }
}

/// The result of evaluating a booking request.
#[derive(Debug, PartialEq, Eq)]
pub enum Eligibility {
    /// The request may be executed.
    Approved(ApprovedPlaces),
    /// The request violates a booking rule.
    Rejected(Rejection),
}

impl Eligibility {
    /// Returns whether the request was approved.
    #[must_use]
    pub const fn is_approved(&self) -> bool {
        matches!(self, Self::Approved(_))
    }
}

/// Parses a requested number of places supplied as text.
///
/// # Errors
///
/// Returns `DomainError::InvalidPlaces` if the input is empty, not a whole
/// number, zero, negative, or too large.
pub fn parse_requested_places(input: &str) -> Result<u32, DomainError> {
    let trimmed: &str = input.trim();
    let invalid = |reason: &'static str| DomainError::InvalidPlaces {
        input: input.to_string(),
        reason,
    };

    if trimmed.is_empty() {
        return Err(invalid("a number of places is required"));
    }

    let requested: i64 = trimmed
        .parse::<i64>()
        .map_err(|_| invalid("must be a whole number"))?;

    if requested < 1 {
        return Err(invalid("must be at least 1"));
    }

    u32::try_from(requested).map_err(|_| invalid("is too large"))
}

/// Evaluates whether a club may purchase the requested places.
///
/// Rules are checked in a fixed order and the first failure wins:
///
/// 1. The request may not exceed the competition's remaining places.
/// 2. The request may not exceed the club's points.
/// 3. The request may not exceed [`MAX_PLACES_PER_BOOKING`].
///
/// # Arguments
///
/// * `club` - The club making the booking
/// * `competition` - The competition being booked
/// * `requested_places` - The requested place count as supplied by the caller
///
/// # Returns
///
/// * `Ok(Eligibility::Approved)` if every rule passes
/// * `Ok(Eligibility::Rejected)` with the first failed rule otherwise
///
/// # Errors
///
/// Returns `DomainError::InvalidPlaces` if `requested_places` is malformed.
/// Malformed input is never treated as a rejection.
pub fn evaluate(
    club: &Club,
    competition: &Competition,
    requested_places: &str,
) -> Result<Eligibility, DomainError> {
    let requested: u32 = parse_requested_places(requested_places)?;
    Ok(evaluate_places(club, competition, requested))
}

/// Returns the largest request that would currently be approved.
///
/// This is the smallest of the remaining places, the club's points and
/// [`MAX_PLACES_PER_BOOKING`]. Zero means nothing can be booked.
#[must_use]
pub fn max_bookable_places(club: &Club, competition: &Competition) -> u32 {
    competition
        .remaining_places()
        .min(club.points())
        .min(MAX_PLACES_PER_BOOKING)
}

fn evaluate_places(club: &Club, competition: &Competition, requested: u32) -> Eligibility {
    // Rule 1: remaining places
    if requested > competition.remaining_places() {
        return Eligibility::Rejected(Rejection::ExceedsRemainingPlaces {
            remaining: competition.remaining_places(),
        });
    }

    // Rule 2: club points
    if requested > club.points() {
        return Eligibility::Rejected(Rejection::ExceedsClubPoints {
            points: club.points(),
        });
    }

    // Rule 3: per-booking maximum
    if requested > MAX_PLACES_PER_BOOKING {
        return Eligibility::Rejected(Rejection::ExceedsBookingMaximum {
            maximum: MAX_PLACES_PER_BOOKING,
        });
    }

    Eligibility::Approved(ApprovedPlaces { places: requested })
}
