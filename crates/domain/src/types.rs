// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::competition_status::{CompetitionStatus, classify};
use serde::{Deserialize, Serialize};
use time::PrimitiveDateTime;

/// A member club holding a points budget for bookings.
///
/// A club is identified by its email. Its name is also unique and is the
/// key used by the booking flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Club {
    /// The display name.
    name: String,
    /// The login email, exactly as registered.
    email: String,
    /// The spendable points balance. One place costs one point.
    points: u32,
}

impl Club {
    /// Creates a new `Club`.
    ///
    /// Surrounding whitespace is trimmed from the name and the email. The
    /// email is otherwise kept exactly as given.
    ///
    /// # Arguments
    ///
    /// * `name` - The display name
    /// * `email` - The login email
    /// * `points` - The starting points balance
    #[must_use]
    pub fn new(name: &str, email: &str, points: u32) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            points,
        }
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the login email.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the current points balance.
    #[must_use]
    pub const fn points(&self) -> u32 {
        self.points
    }

    /// Returns whether this club is registered under the given email.
    ///
    /// Matching is exact apart from surrounding whitespace.
    #[must_use]
    pub fn has_email(&self, email: &str) -> bool {
        self.email == email.trim()
    }

    pub(crate) const fn set_points(&mut self, points: u32) {
        self.points = points;
    }
}

/// An event with a fixed date and a shrinking pool of places.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Competition {
    /// The unique competition name.
    name: String,
    /// When the competition takes place.
    date: PrimitiveDateTime,
    /// Places still available for booking.
    remaining_places: u32,
    /// Whether the date had passed when the catalog was loaded.
    ///
    /// Fixed at construction and never recomputed.
    is_past: bool,
}

impl Competition {
    /// Creates a new `Competition`, classifying it against the load time.
    ///
    /// # Arguments
    ///
    /// * `name` - The competition name (trimmed)
    /// * `date` - When the competition takes place
    /// * `remaining_places` - The places available for booking
    /// * `loaded_at` - The catalog load time used to compute `is_past`
    #[must_use]
    pub fn new(
        name: &str,
        date: PrimitiveDateTime,
        remaining_places: u32,
        loaded_at: PrimitiveDateTime,
    ) -> Self {
        Self {
            name: name.trim().to_string(),
            date,
            remaining_places,
            is_past: classify(date, loaded_at).is_past(),
        }
    }

    /// Returns the competition name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the competition date.
    #[must_use]
    pub const fn date(&self) -> PrimitiveDateTime {
        self.date
    }

    /// Returns the number of places still available.
    #[must_use]
    pub const fn remaining_places(&self) -> u32 {
        self.remaining_places
    }

    /// Returns whether the competition had already taken place at load time.
    #[must_use]
    pub const fn is_past(&self) -> bool {
        self.is_past
    }

    /// Returns the status recorded at load time.
    #[must_use]
    pub const fn status(&self) -> CompetitionStatus {
        if self.is_past {
            CompetitionStatus::Past
        } else {
            CompetitionStatus::Upcoming
        }
    }

    /// Returns the live status relative to `now`.
    ///
    /// This does not update the stored load-time flag, so the two may
    /// disagree in a long-running process.
    #[must_use]
    pub fn status_at(&self, now: PrimitiveDateTime) -> CompetitionStatus {
        classify(self.date, now)
    }

    pub(crate) const fn set_remaining_places(&mut self, remaining_places: u32) {
        self.remaining_places = remaining_places;
    }
}
