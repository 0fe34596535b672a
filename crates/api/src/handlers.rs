// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! One handler per user flow.
//!
//! Handlers take the catalog explicitly. Reads borrow it shared; a
//! purchase borrows it exclusively for its whole evaluate-then-allocate
//! sequence, so callers sharing a catalog must hold their lock across the
//! call.

use crate::error::{ApiError, translate_core_error, translate_domain_error, translate_rejection};
use crate::request_response::{
    BookingContextRequest, BookingContextResponse, ClubInfo, CompetitionInfo, ListClubsResponse,
    ListCompetitionsResponse, LoginRequest, LoginResponse, LogoutResponse, PurchasePlacesRequest,
    PurchasePlacesResponse,
};
use gudlft::{BookingContext, BookingOutcome, BookingRequest, Catalog};
use gudlft_domain::{Club, max_bookable_places};

/// Message returned with every completed booking.
pub const BOOKING_COMPLETE_MESSAGE: &str = "Great-booking complete!";

fn competition_infos(catalog: &Catalog) -> Vec<CompetitionInfo> {
    catalog
        .competitions()
        .iter()
        .map(CompetitionInfo::from)
        .collect()
}

/// Logs a club in by email.
///
/// # Arguments
///
/// * `catalog` - The catalog to search
/// * `request` - The login request
///
/// # Returns
///
/// The club together with every competition.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if no club has this email.
pub fn login(catalog: &Catalog, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
    let club: &Club = gudlft::login(catalog, &request.email).map_err(|err| {
        tracing::warn!(email = %request.email, "Login with unknown email");
        translate_domain_error(err)
    })?;

    tracing::info!(club = club.name(), "Club logged in");

    Ok(LoginResponse {
        club: ClubInfo::from(club),
        competitions: competition_infos(catalog),
    })
}

/// Resolves the club and competition shown on the booking page.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if the club or the competition
/// does not exist.
pub fn get_booking_context(
    catalog: &Catalog,
    request: &BookingContextRequest,
) -> Result<BookingContextResponse, ApiError> {
    let context: BookingContext<'_> =
        gudlft::resolve_booking_context(catalog, &request.competition, &request.club).map_err(
            |err| {
                tracing::warn!(
                    competition = %request.competition,
                    club = %request.club,
                    "Booking page lookup failed"
                );
                translate_domain_error(err)
            },
        )?;

    tracing::debug!(
        competition = context.competition.name(),
        club = context.club.name(),
        "Resolved booking context"
    );

    Ok(BookingContextResponse {
        club: ClubInfo::from(context.club),
        competition: CompetitionInfo::from(context.competition),
        bookable: !context.competition.is_past(),
        max_places: max_bookable_places(context.club, context.competition),
    })
}

/// Purchases places for a club in a competition.
///
/// Competitions flagged as past are refused before any rule is evaluated.
/// Otherwise the request is evaluated and, if approved, allocated in one
/// step against the exclusively borrowed catalog.
///
/// # Arguments
///
/// * `catalog` - The catalog to book against
/// * `request` - The purchase request, with the place count as submitted
///
/// # Returns
///
/// The receipt, the updated club and every competition.
///
/// # Errors
///
/// Returns an error if:
/// - The club or the competition does not exist
/// - The competition has already taken place
/// - The place count is empty, not a whole number or below 1
/// - An eligibility rule refuses the request
/// - The allocation would break a balance invariant
pub fn purchase_places(
    catalog: &mut Catalog,
    request: &PurchasePlacesRequest,
) -> Result<PurchasePlacesResponse, ApiError> {
    let context: BookingContext<'_> =
        gudlft::resolve_booking_context(catalog, &request.competition, &request.club)
            .map_err(translate_domain_error)?;

    // Rule: past competitions are closed for booking
    if context.competition.is_past() {
        tracing::warn!(
            competition = context.competition.name(),
            club = context.club.name(),
            "Booking refused for past competition"
        );
        return Err(ApiError::DomainRuleViolation {
            rule: String::from("competition_closed"),
            message: format!(
                "Competition '{}' has already taken place",
                context.competition.name()
            ),
        });
    }

    let command: BookingRequest =
        BookingRequest::new(&request.competition, &request.club, &request.places);

    let outcome: BookingOutcome = gudlft::apply(catalog, &command).map_err(|err| {
        let api_err: ApiError = translate_core_error(err);
        if matches!(api_err, ApiError::Internal { .. }) {
            tracing::error!(error = %api_err, "Booking failed");
        } else {
            tracing::warn!(error = %api_err, "Booking request invalid");
        }
        api_err
    })?;

    match outcome {
        BookingOutcome::Booked(receipt) => {
            tracing::info!(
                club = %receipt.club_name,
                competition = %receipt.competition_name,
                places = receipt.places_booked,
                points_remaining = receipt.points_remaining,
                places_remaining = receipt.places_remaining,
                "Booking complete"
            );

            let club: &Club = catalog
                .find_club_by_name(&receipt.club_name)
                .map_err(translate_domain_error)?;

            Ok(PurchasePlacesResponse {
                message: String::from(BOOKING_COMPLETE_MESSAGE),
                club: ClubInfo::from(club),
                competitions: competition_infos(catalog),
                receipt,
            })
        }
        BookingOutcome::Rejected(rejection) => {
            tracing::warn!(
                club = %request.club,
                competition = %request.competition,
                places = %request.places,
                rule = rejection.rule(),
                limit = rejection.limit(),
                "Booking rejected"
            );
            Err(translate_rejection(rejection))
        }
    }
}

/// Lists every club with its current points.
#[must_use]
pub fn list_clubs(catalog: &Catalog) -> ListClubsResponse {
    ListClubsResponse {
        clubs: catalog.clubs().iter().map(ClubInfo::from).collect(),
    }
}

/// Lists every competition with its remaining places.
#[must_use]
pub fn list_competitions(catalog: &Catalog) -> ListCompetitionsResponse {
    ListCompetitionsResponse {
        competitions: competition_infos(catalog),
    }
}

/// Logs out. There is no session, so this always succeeds.
#[must_use]
pub fn logout() -> LogoutResponse {
    LogoutResponse {
        redirect: String::from("/"),
    }
}
