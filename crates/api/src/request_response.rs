// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use gudlft_domain::{Club, Competition, Receipt, format_competition_date};

/// A club as presented to API callers.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ClubInfo {
    /// The club's display name.
    pub name: String,
    /// The club's login email.
    pub email: String,
    /// The club's current points balance.
    pub points: u32,
}

impl From<&Club> for ClubInfo {
    fn from(club: &Club) -> Self {
        Self {
            name: club.name().to_string(),
            email: club.email().to_string(),
            points: club.points(),
        }
    }
}

/// A competition as presented to API callers.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CompetitionInfo {
    /// The competition name.
    pub name: String,
    /// The competition date, formatted as `YYYY-MM-DD HH:MM:SS`.
    pub date: String,
    /// The number of places still available.
    pub remaining_places: u32,
    /// Whether the competition had already taken place when the feeds were loaded.
    pub is_past: bool,
}

impl From<&Competition> for CompetitionInfo {
    fn from(competition: &Competition) -> Self {
        Self {
            name: competition.name().to_string(),
            date: format_competition_date(competition.date()),
            remaining_places: competition.remaining_places(),
            is_past: competition.is_past(),
        }
    }
}

/// API request to log in as a club.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginRequest {
    /// The email the club registered with.
    pub email: String,
}

/// API response for a successful login.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LoginResponse {
    /// The club that logged in.
    pub club: ClubInfo,
    /// Every competition, in feed order.
    pub competitions: Vec<CompetitionInfo>,
}

/// API request to open the booking page for a club and competition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingContextRequest {
    /// The competition name.
    pub competition: String,
    /// The club name.
    pub club: String,
}

/// API response for the booking page.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BookingContextResponse {
    /// The club making the booking.
    pub club: ClubInfo,
    /// The competition being booked.
    pub competition: CompetitionInfo,
    /// Whether bookings are offered for this competition.
    pub bookable: bool,
    /// The largest request that would currently be approved.
    pub max_places: u32,
}

/// API request to purchase places.
///
/// `places` is the raw text the caller submitted. It is parsed by the
/// booking evaluator, never coerced here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurchasePlacesRequest {
    /// The competition name.
    pub competition: String,
    /// The club name.
    pub club: String,
    /// The requested number of places, as submitted.
    pub places: String,
}

/// API response for a completed booking.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PurchasePlacesResponse {
    /// A success message.
    pub message: String,
    /// The balances after the booking.
    pub receipt: Receipt,
    /// The club, with its updated points.
    pub club: ClubInfo,
    /// Every competition, with updated remaining places.
    pub competitions: Vec<CompetitionInfo>,
}

/// API response listing every club and its points.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ListClubsResponse {
    /// All clubs, in feed order.
    pub clubs: Vec<ClubInfo>,
}

/// API response listing every competition.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ListCompetitionsResponse {
    /// All competitions, in feed order.
    pub competitions: Vec<CompetitionInfo>,
}

/// API response for logout.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LogoutResponse {
    /// Where the caller should go next.
    pub redirect: String,
}
