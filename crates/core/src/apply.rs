// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::catalog::Catalog;
use crate::command::BookingRequest;
use crate::error::CoreError;
use crate::outcome::BookingOutcome;
use gudlft_domain::{DomainError, Eligibility, Receipt, evaluate, execute};

/// Applies a booking request to the catalog.
///
/// The club and competition are resolved, the request is evaluated, and an
/// approved request is executed. All three steps run under a single
/// exclusive borrow of the catalog, so no other booking can interleave
/// between evaluation and execution.
///
/// # Arguments
///
/// * `catalog` - The catalog to book against
/// * `request` - The booking request
///
/// # Returns
///
/// * `Ok(BookingOutcome::Booked)` with the post-booking balances
/// * `Ok(BookingOutcome::Rejected)` if a booking rule failed; nothing changes
///
/// # Errors
///
/// Returns an error if:
/// - The club or the competition does not exist
/// - The requested place count is malformed
/// - The allocation would break a balance invariant
pub fn apply(catalog: &mut Catalog, request: &BookingRequest) -> Result<BookingOutcome, CoreError> {
    let Some((club, competition)) = catalog.booking_pair_mut(&request.competition, &request.club)
    else {
        return Err(CoreError::DomainViolation(
            DomainError::BookingContextNotFound {
                competition: request.competition.clone(),
                club: request.club.clone(),
            },
        ));
    };

    match evaluate(club, competition, &request.places)? {
        Eligibility::Rejected(rejection) => Ok(BookingOutcome::Rejected(rejection)),
        Eligibility::Approved(approved) => {
            let receipt: Receipt = execute(club, competition, approved)?;
            Ok(BookingOutcome::Booked(receipt))
        }
    }
}
