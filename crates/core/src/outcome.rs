// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use gudlft_domain::{Receipt, Rejection};

/// The result of applying a well-formed booking request.
///
/// A rejection is a normal outcome, not an error: the catalog is unchanged
/// and the caller is told which rule failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingOutcome {
    /// The places were allocated.
    Booked(Receipt),
    /// A booking rule refused the request.
    Rejected(Rejection),
}

impl BookingOutcome {
    /// Returns the receipt if the booking went through.
    #[must_use]
    pub const fn receipt(&self) -> Option<&Receipt> {
        match self {
            Self::Booked(receipt) => Some(receipt),
            Self::Rejected(_) => None,
        }
    }

    /// Returns the rejection if the booking was refused.
    #[must_use]
    pub const fn rejection(&self) -> Option<&Rejection> {
        match self {
            Self::Booked(_) => None,
            Self::Rejected(rejection) => Some(rejection),
        }
    }
}
