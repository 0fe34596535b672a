// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::Catalog;
use gudlft_domain::{Club, Competition};
use time::PrimitiveDateTime;
use time::macros::datetime;

pub fn test_loaded_at() -> PrimitiveDateTime {
    datetime!(2026-01-01 00:00:00)
}

pub fn create_test_clubs() -> Vec<Club> {
    vec![
        Club::new("Simply Lift", "john@simplylift.co", 13),
        Club::new("Iron Temple", "admin@irontemple.com", 4),
        Club::new("She Lifts", "kate@shelifts.co.uk", 12),
    ]
}

pub fn create_test_competitions() -> Vec<Competition> {
    vec![
        Competition::new(
            "Spring Festival",
            datetime!(2026-03-27 10:00:00),
            25,
            test_loaded_at(),
        ),
        Competition::new(
            "Fall Classic",
            datetime!(2025-10-22 13:30:00),
            13,
            test_loaded_at(),
        ),
    ]
}

pub fn create_test_catalog() -> Catalog {
    Catalog::new(create_test_clubs(), create_test_competitions()).unwrap()
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
