// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// A request to purchase places, expressed as data only.
///
/// The place count is kept as the caller supplied it; converting it is the
/// evaluator's job. A request is never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRequest {
    /// The competition name.
    pub competition: String,
    /// The club name.
    pub club: String,
    /// The requested number of places, as text.
    pub places: String,
}

impl BookingRequest {
    /// Creates a new `BookingRequest`.
    #[must_use]
    pub fn new(competition: &str, club: &str, places: &str) -> Self {
        Self {
            competition: competition.to_string(),
            club: club.to_string(),
            places: places.to_string(),
        }
    }
}
