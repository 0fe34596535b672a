// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use gudlft::Catalog;
use time::PrimitiveDateTime;
use time::macros::datetime;

use crate::{PurchasePlacesRequest, parse_clubs_feed, parse_competitions_feed};

pub const CLUBS_JSON: &str = r#"{
    "clubs": [
        { "name": "Simply Lift", "email": "john@simplylift.co", "points": "13" },
        { "name": "Iron Temple", "email": "admin@irontemple.com", "points": "4" },
        { "name": "She Lifts", "email": "kate@shelifts.co.uk", "points": "12" }
    ]
}"#;

pub const COMPETITIONS_JSON: &str = r#"{
    "competitions": [
        { "name": "Spring Festival", "date": "2026-03-27 10:00:00", "numberOfPlaces": "25" },
        { "name": "Fall Classic", "date": "2025-10-22 13:30:00", "numberOfPlaces": "13" }
    ]
}"#;

pub const fn test_loaded_at() -> PrimitiveDateTime {
    datetime!(2026-01-01 00:00:00)
}

pub fn create_test_catalog() -> Catalog {
    let clubs = parse_clubs_feed("clubs", CLUBS_JSON).unwrap();
    let competitions =
        parse_competitions_feed("competitions", COMPETITIONS_JSON, test_loaded_at()).unwrap();
    Catalog::new(clubs, competitions).unwrap()
}

pub fn create_purchase_request(
    competition: &str,
    club: &str,
    places: &str,
) -> PurchasePlacesRequest {
    PurchasePlacesRequest {
        competition: competition.to_string(),
        club: club.to_string(),
        places: places.to_string(),
    }
}

pub fn club_points(catalog: &Catalog, name: &str) -> u32 {
    catalog.find_club_by_name(name).unwrap().points()
}

pub fn remaining_places(catalog: &Catalog, name: &str) -> u32 {
    catalog
        .find_competition_by_name(name)
        .unwrap()
        .remaining_places()
}
