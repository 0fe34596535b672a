// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{create_test_club, test_loaded_at};
use crate::{Club, Competition, CompetitionStatus};
use time::macros::datetime;

#[test]
fn test_club_creation() {
    let club: Club = Club::new("Iron Temple", "admin@irontemple.com", 4);
    assert_eq!(club.name(), "Iron Temple");
    assert_eq!(club.email(), "admin@irontemple.com");
    assert_eq!(club.points(), 4);
}

#[test]
fn test_club_fields_are_trimmed() {
    let club: Club = Club::new("  She Lifts ", " kate@shelifts.co.uk ", 12);
    assert_eq!(club.name(), "She Lifts");
    assert_eq!(club.email(), "kate@shelifts.co.uk");
}

#[test]
fn test_club_email_keeps_its_case() {
    let club: Club = Club::new("Simply Lift", "John@SimplyLift.co", 13);
    assert_eq!(club.email(), "John@SimplyLift.co");
}

#[test]
fn test_has_email_matches_exactly() {
    let club: Club = create_test_club(13);
    assert!(club.has_email("john@simplylift.co"));
    assert!(club.has_email(" john@simplylift.co "));
    assert!(!club.has_email("JOHN@simplylift.co"));
    assert!(!club.has_email("kate@shelifts.co.uk"));
}

#[test]
fn test_past_competition_is_flagged_at_load() {
    let competition: Competition = Competition::new(
        "Spring Festival",
        datetime!(2020-03-27 10:00:00),
        25,
        test_loaded_at(),
    );
    assert!(competition.is_past());
    assert_eq!(competition.status(), CompetitionStatus::Past);
}

#[test]
fn test_future_competition_is_not_flagged() {
    let competition: Competition = Competition::new(
        "Fall Classic",
        datetime!(2026-10-22 13:30:00),
        13,
        test_loaded_at(),
    );
    assert!(!competition.is_past());
    assert_eq!(competition.status(), CompetitionStatus::Upcoming);
    assert_eq!(competition.remaining_places(), 13);
}

#[test]
fn test_stored_status_does_not_follow_the_clock() {
    let competition: Competition = Competition::new(
        "Fall Classic",
        datetime!(2026-10-22 13:30:00),
        13,
        test_loaded_at(),
    );

    let later = datetime!(2027-01-01 00:00:00);
    assert_eq!(competition.status_at(later), CompetitionStatus::Past);
    assert_eq!(competition.status(), CompetitionStatus::Upcoming);
    assert!(!competition.is_past());
}
