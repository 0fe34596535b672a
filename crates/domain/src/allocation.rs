// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::eligibility::ApprovedPlaces;
use crate::error::DomainError;
use crate::types::{Club, Competition};
use serde::{Deserialize, Serialize};

/// The post-allocation balances of a completed booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    /// The club that made the booking.
    pub club_name: String,
    /// The competition that was booked.
    pub competition_name: String,
    /// The number of places purchased.
    pub places_booked: u32,
    /// The club's points after the booking.
    pub points_remaining: u32,
    /// The competition's remaining places after the booking.
    pub places_remaining: u32,
}

/// Allocates approved places, debiting the club and the competition together.
///
/// The approval is not re-validated. Both new balances are computed before
/// either is written, so the allocation applies completely or not at all.
///
/// # Arguments
///
/// * `club` - The club making the booking
/// * `competition` - The competition being booked
/// * `approved` - The approval returned by `evaluate` for this pair
///
/// # Errors
///
/// Returns `DomainError::AllocationUnderflow` if either balance would go
/// below zero. Neither balance is modified in that case.
pub fn execute(
    club: &mut Club,
    competition: &mut Competition,
    approved: ApprovedPlaces,
) -> Result<Receipt, DomainError> {
    let places: u32 = approved.into_places();

    let (Some(points_remaining), Some(places_remaining)) = (
        club.points().checked_sub(places),
        competition.remaining_places().checked_sub(places),
    ) else {
        return Err(DomainError::AllocationUnderflow {
            club: club.name().to_string(),
            competition: competition.name().to_string(),
            places,
        });
    };

    club.set_points(points_remaining);
    competition.set_remaining_places(places_remaining);

    Ok(Receipt {
        club_name: club.name().to_string(),
        competition_name: competition.name().to_string(),
        places_booked: places,
        points_remaining,
        places_remaining,
    })
}
