// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use chrono::{Local, NaiveDateTime};
use gudlft_domain::{Competition, format_competition_date};
use time::PrimitiveDateTime;
use time::macros::datetime;

use crate::{local_now, wall_clock_at};

fn instant() -> i64 {
    datetime!(2026-10-18 21:58:14 UTC).unix_timestamp()
}

#[test]
fn test_wall_clock_at_applies_offset() {
    assert_eq!(
        wall_clock_at(instant(), 9 * 3600).unwrap(),
        datetime!(2026-10-19 06:58:14)
    );
    assert_eq!(
        wall_clock_at(instant(), -5 * 3600).unwrap(),
        datetime!(2026-10-18 16:58:14)
    );
    assert_eq!(
        wall_clock_at(instant(), 0).unwrap(),
        datetime!(2026-10-18 21:58:14)
    );
}

#[test]
fn test_wall_clock_at_rejects_impossible_offset() {
    assert!(wall_clock_at(instant(), 100_000).is_err());
}

#[test]
fn test_offset_decides_past_flag() {
    let date: PrimitiveDateTime = datetime!(2026-10-19 05:00:00);

    let in_tokyo: Competition =
        Competition::new("Dawn Meet", date, 10, wall_clock_at(instant(), 9 * 3600).unwrap());
    let in_utc: Competition =
        Competition::new("Dawn Meet", date, 10, wall_clock_at(instant(), 0).unwrap());

    assert!(in_tokyo.is_past());
    assert!(!in_utc.is_past());
}

#[test]
fn test_local_now_matches_local_wall_clock() {
    let as_text = |value: NaiveDateTime| value.format("%Y-%m-%d %H:%M:%S").to_string();

    let before: String = as_text(Local::now().naive_local());
    let now: String = format_competition_date(local_now().unwrap());
    let after: String = as_text(Local::now().naive_local());

    assert!(before <= now, "{before} should not be after {now}");
    assert!(now <= after, "{now} should not be after {after}");
}
