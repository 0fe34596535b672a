// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use gudlft_domain::DomainError;

/// Errors that can occur while building the catalog or applying a booking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated or a lookup failed.
    DomainViolation(DomainError),
    /// A balance invariant would have been broken.
    ///
    /// This is a defect, not a user-facing outcome.
    InvariantViolation(DomainError),
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::InvariantViolation(err) => write!(f, "Invariant violation: {err}"),
        }
    }
}

impl std::error::Error for CoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::DomainViolation(err) | Self::InvariantViolation(err) => Some(err),
        }
    }
}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::AllocationUnderflow { .. } => Self::InvariantViolation(err),
            _ => Self::DomainViolation(err),
        }
    }
}
