// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Club, Competition};
use time::PrimitiveDateTime;
use time::macros::datetime;

pub fn test_loaded_at() -> PrimitiveDateTime {
    datetime!(2026-01-01 00:00:00)
}

pub fn create_test_club(points: u32) -> Club {
    Club::new("Simply Lift", "john@simplylift.co", points)
}

pub fn create_test_competition(remaining_places: u32) -> Competition {
    Competition::new(
        "Spring Festival",
        datetime!(2026-03-27 10:00:00),
        remaining_places,
        test_loaded_at(),
    )
}
