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

mod clock;
mod error;
mod feed;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use clock::{local_now, wall_clock_at};
pub use error::{ApiError, translate_core_error, translate_domain_error, translate_rejection};
pub use feed::{FeedError, load_catalog, parse_clubs_feed, parse_competitions_feed};
pub use handlers::{
    BOOKING_COMPLETE_MESSAGE, get_booking_context, list_clubs, list_competitions, login, logout,
    purchase_places,
};
pub use request_response::{
    BookingContextRequest, BookingContextResponse, ClubInfo, CompetitionInfo, ListClubsResponse,
    ListCompetitionsResponse, LoginRequest, LoginResponse, LogoutResponse, PurchasePlacesRequest,
    PurchasePlacesResponse,
};
