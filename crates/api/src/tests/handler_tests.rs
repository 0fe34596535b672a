// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Handler tests organized by flow.

use gudlft::Catalog;

use crate::{
    ApiError, BOOKING_COMPLETE_MESSAGE, BookingContextRequest, BookingContextResponse,
    ListClubsResponse, ListCompetitionsResponse, LoginRequest, LoginResponse, LogoutResponse,
    PurchasePlacesResponse, get_booking_context, list_clubs, list_competitions, login, logout,
    purchase_places,
};

use super::helpers::{club_points, create_purchase_request, create_test_catalog, remaining_places};

fn booking_request(competition: &str, club: &str) -> BookingContextRequest {
    BookingContextRequest {
        competition: competition.to_string(),
        club: club.to_string(),
    }
}

// ============================================================================
// Login
// ============================================================================

#[test]
fn test_login_returns_club_and_all_competitions() {
    let catalog: Catalog = create_test_catalog();
    let request: LoginRequest = LoginRequest {
        email: String::from("john@simplylift.co"),
    };

    let response: LoginResponse = login(&catalog, &request).unwrap();

    assert_eq!(response.club.name, "Simply Lift");
    assert_eq!(response.club.points, 13);
    assert_eq!(response.competitions.len(), 2);
    assert_eq!(response.competitions[0].name, "Spring Festival");
    assert_eq!(response.competitions[0].date, "2026-03-27 10:00:00");
    assert!(!response.competitions[0].is_past);
    assert!(response.competitions[1].is_past);
}

#[test]
fn test_login_matches_email_exactly() {
    let catalog: Catalog = create_test_catalog();
    let exact: LoginRequest = LoginRequest {
        email: String::from("kate@shelifts.co.uk"),
    };
    let shouted: LoginRequest = LoginRequest {
        email: String::from("KATE@SHELIFTS.CO.UK"),
    };

    let response: LoginResponse = login(&catalog, &exact).unwrap();
    assert_eq!(response.club.name, "She Lifts");

    let result: Result<LoginResponse, ApiError> = login(&catalog, &shouted);
    assert!(matches!(result, Err(ApiError::ResourceNotFound { .. })));
}

#[test]
fn test_login_unknown_email_is_not_found() {
    let catalog: Catalog = create_test_catalog();
    let before: Catalog = catalog.clone();
    let request: LoginRequest = LoginRequest {
        email: String::from("nobody@example.com"),
    };

    let result: Result<LoginResponse, ApiError> = login(&catalog, &request);

    assert_eq!(
        result.unwrap_err(),
        ApiError::ResourceNotFound {
            resource_type: String::from("Club"),
            message: String::from("Sorry, that email wasn't found."),
        }
    );
    assert_eq!(catalog, before);
}

// ============================================================================
// Booking page
// ============================================================================

#[test]
fn test_booking_context_for_upcoming_competition() {
    let catalog: Catalog = create_test_catalog();

    let response: BookingContextResponse = get_booking_context(
        &catalog,
        &booking_request("Spring Festival", "Iron Temple"),
    )
    .unwrap();

    assert_eq!(response.club.name, "Iron Temple");
    assert_eq!(response.competition.name, "Spring Festival");
    assert!(response.bookable);
    assert_eq!(response.max_places, 4);
}

#[test]
fn test_booking_context_for_past_competition_is_not_bookable() {
    let catalog: Catalog = create_test_catalog();

    let response: BookingContextResponse =
        get_booking_context(&catalog, &booking_request("Fall Classic", "Simply Lift")).unwrap();

    assert!(!response.bookable);
    assert!(response.competition.is_past);
}

#[test]
fn test_booking_context_unknown_names_fail_with_retry_message() {
    let catalog: Catalog = create_test_catalog();

    for (competition, club) in [
        ("Winter Open", "Simply Lift"),
        ("Spring Festival", "Unknown Club"),
        ("Winter Open", "Unknown Club"),
    ] {
        let result: Result<BookingContextResponse, ApiError> =
            get_booking_context(&catalog, &booking_request(competition, club));
        assert_eq!(
            result.unwrap_err(),
            ApiError::ResourceNotFound {
                resource_type: String::from("Booking"),
                message: String::from("Something went wrong-please try again"),
            }
        );
    }
}

// ============================================================================
// Purchase
// ============================================================================

#[test]
fn test_purchase_debits_club_and_competition() {
    let mut catalog: Catalog = create_test_catalog();

    let response: PurchasePlacesResponse = purchase_places(
        &mut catalog,
        &create_purchase_request("Spring Festival", "Simply Lift", "1"),
    )
    .unwrap();

    assert_eq!(response.message, BOOKING_COMPLETE_MESSAGE);
    assert_eq!(response.receipt.places_booked, 1);
    assert_eq!(response.receipt.points_remaining, 12);
    assert_eq!(response.receipt.places_remaining, 24);
    assert_eq!(response.club.points, 12);
    assert_eq!(response.competitions[0].remaining_places, 24);
    assert_eq!(club_points(&catalog, "Simply Lift"), 12);
    assert_eq!(remaining_places(&catalog, "Spring Festival"), 24);
}

#[test]
fn test_purchase_rejection_reports_rule_and_limit() {
    let mut catalog: Catalog = create_test_catalog();
    let before: Catalog = catalog.clone();

    let result: Result<PurchasePlacesResponse, ApiError> = purchase_places(
        &mut catalog,
        &create_purchase_request("Spring Festival", "Iron Temple", "14"),
    );

    assert_eq!(
        result.unwrap_err(),
        ApiError::BookingRejected {
            rule: String::from("club_points"),
            message: String::from("Cannot book more places than points you have (4)."),
            limit: 4,
        }
    );
    assert_eq!(catalog, before);
}

#[test]
fn test_purchase_over_maximum_is_rejected() {
    let mut catalog: Catalog = create_test_catalog();

    let result: Result<PurchasePlacesResponse, ApiError> = purchase_places(
        &mut catalog,
        &create_purchase_request("Spring Festival", "Simply Lift", "13"),
    );

    assert!(matches!(
        result.unwrap_err(),
        ApiError::BookingRejected { ref rule, limit: 12, .. } if rule == "booking_maximum"
    ));
    assert_eq!(club_points(&catalog, "Simply Lift"), 13);
}

#[test]
fn test_purchase_malformed_places_is_invalid_input() {
    let mut catalog: Catalog = create_test_catalog();
    let before: Catalog = catalog.clone();

    for places in ["", "abc", "0", "-2", "1.5"] {
        let result: Result<PurchasePlacesResponse, ApiError> = purchase_places(
            &mut catalog,
            &create_purchase_request("Spring Festival", "Simply Lift", places),
        );
        assert!(
            matches!(result, Err(ApiError::InvalidInput { ref field, .. }) if field == "places"),
            "input {places:?} should be invalid"
        );
    }
    assert_eq!(catalog, before);
}

#[test]
fn test_purchase_past_competition_is_closed() {
    let mut catalog: Catalog = create_test_catalog();
    let before: Catalog = catalog.clone();

    let result: Result<PurchasePlacesResponse, ApiError> = purchase_places(
        &mut catalog,
        &create_purchase_request("Fall Classic", "Simply Lift", "1"),
    );

    assert!(matches!(
        result.unwrap_err(),
        ApiError::DomainRuleViolation { ref rule, .. } if rule == "competition_closed"
    ));
    assert_eq!(catalog, before);
}

#[test]
fn test_purchase_unknown_club_is_not_found() {
    let mut catalog: Catalog = create_test_catalog();
    let before: Catalog = catalog.clone();

    let result: Result<PurchasePlacesResponse, ApiError> = purchase_places(
        &mut catalog,
        &create_purchase_request("Spring Festival", "Unknown Club", "1"),
    );

    assert!(matches!(
        result.unwrap_err(),
        ApiError::ResourceNotFound { .. }
    ));
    assert_eq!(catalog, before);
}

#[test]
fn test_repeated_purchases_stop_at_points_balance() {
    let mut catalog: Catalog = create_test_catalog();

    for _ in 0..4 {
        purchase_places(
            &mut catalog,
            &create_purchase_request("Spring Festival", "Iron Temple", "1"),
        )
        .unwrap();
    }

    let result: Result<PurchasePlacesResponse, ApiError> = purchase_places(
        &mut catalog,
        &create_purchase_request("Spring Festival", "Iron Temple", "1"),
    );

    assert!(matches!(
        result.unwrap_err(),
        ApiError::BookingRejected { limit: 0, .. }
    ));
    assert_eq!(club_points(&catalog, "Iron Temple"), 0);
    assert_eq!(remaining_places(&catalog, "Spring Festival"), 21);
}

// ============================================================================
// Boards and logout
// ============================================================================

#[test]
fn test_list_clubs_reflects_bookings() {
    let mut catalog: Catalog = create_test_catalog();
    purchase_places(
        &mut catalog,
        &create_purchase_request("Spring Festival", "She Lifts", "5"),
    )
    .unwrap();

    let response: ListClubsResponse = list_clubs(&catalog);

    let points: Vec<(&str, u32)> = response
        .clubs
        .iter()
        .map(|club| (club.name.as_str(), club.points))
        .collect();
    assert_eq!(
        points,
        vec![("Simply Lift", 13), ("Iron Temple", 4), ("She Lifts", 7)]
    );
}

#[test]
fn test_list_competitions_is_idempotent() {
    let catalog: Catalog = create_test_catalog();

    let first: ListCompetitionsResponse = list_competitions(&catalog);
    let second: ListCompetitionsResponse = list_competitions(&catalog);

    assert_eq!(first, second);
    assert_eq!(first.competitions.len(), 2);
}

#[test]
fn test_logout_redirects_to_start() {
    let response: LogoutResponse = logout();
    assert_eq!(response.redirect, "/");
}
