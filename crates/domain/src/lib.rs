// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod allocation;
mod competition_status;
mod eligibility;
mod error;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use allocation::{Receipt, execute};
pub use competition_status::{
    COMPETITION_DATE_FORMAT, CompetitionStatus, classify, format_competition_date,
    parse_competition_date,
};
pub use eligibility::{
    ApprovedPlaces, Eligibility, MAX_PLACES_PER_BOOKING, Rejection, evaluate,
    max_bookable_places, parse_requested_places,
};

// Re-export public types
pub use error::DomainError;
pub use types::{Club, Competition};
pub use validation::{
    count_from_integer, parse_count, validate_club_fields, validate_competition_fields,
};
