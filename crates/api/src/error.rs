// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use gudlft::CoreError;
use gudlft_domain::{DomainError, Rejection};

/// Message shown when a login email does not match any club.
pub const UNKNOWN_EMAIL_MESSAGE: &str = "Sorry, that email wasn't found.";

/// Message shown when the booking page cannot resolve its club or competition.
pub const BOOKING_LOOKUP_FAILED_MESSAGE: &str = "Something went wrong-please try again";

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A booking request was refused by one of the eligibility rules.
    BookingRejected {
        /// The rule that refused the request.
        rule: String,
        /// A human-readable description of the refusal.
        message: String,
        /// The bound that triggered the refusal.
        limit: u32,
    },
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BookingRejected { rule, message, .. } => {
                write!(f, "Booking rejected ({rule}): {message}")
            }
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a domain error into an API error.
///
/// Lookup failures become `ResourceNotFound` with the user-facing retry
/// messages. Malformed values become `InvalidInput` naming the field.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidClubName(msg) => ApiError::InvalidInput {
            field: String::from("club"),
            message: msg,
        },
        DomainError::InvalidEmail(msg) => ApiError::InvalidInput {
            field: String::from("email"),
            message: msg,
        },
        DomainError::InvalidCompetitionName(msg) => ApiError::InvalidInput {
            field: String::from("competition"),
            message: msg,
        },
        DomainError::InvalidCount { field, value } => ApiError::InvalidInput {
            field: field.to_string(),
            message: format!("'{value}' is not a non-negative whole number"),
        },
        DomainError::InvalidPlaces { input, reason } => ApiError::InvalidInput {
            field: String::from("places"),
            message: format!("Invalid number of places '{input}': {reason}"),
        },
        DomainError::DateParseError { date_string, error } => ApiError::InvalidInput {
            field: String::from("date"),
            message: format!("Failed to parse date '{date_string}': {error}"),
        },
        DomainError::ClubEmailNotFound(_) => ApiError::ResourceNotFound {
            resource_type: String::from("Club"),
            message: String::from(UNKNOWN_EMAIL_MESSAGE),
        },
        DomainError::ClubNotFound(name) => ApiError::ResourceNotFound {
            resource_type: String::from("Club"),
            message: format!("Club '{name}' does not exist"),
        },
        DomainError::CompetitionNotFound(name) => ApiError::ResourceNotFound {
            resource_type: String::from("Competition"),
            message: format!("Competition '{name}' does not exist"),
        },
        DomainError::BookingContextNotFound { .. } => ApiError::ResourceNotFound {
            resource_type: String::from("Booking"),
            message: String::from(BOOKING_LOOKUP_FAILED_MESSAGE),
        },
        DomainError::DuplicateClubEmail(email) => ApiError::DomainRuleViolation {
            rule: String::from("unique_club_email"),
            message: format!("A club with email '{email}' already exists"),
        },
        DomainError::DuplicateClubName(name) => ApiError::DomainRuleViolation {
            rule: String::from("unique_club_name"),
            message: format!("Club '{name}' already exists"),
        },
        DomainError::DuplicateCompetition(name) => ApiError::DomainRuleViolation {
            rule: String::from("unique_competition_name"),
            message: format!("Competition '{name}' already exists"),
        },
        err @ DomainError::AllocationUnderflow { .. } => ApiError::Internal {
            message: err.to_string(),
        },
    }
}

/// Translates a core error into an API error.
///
/// Invariant violations are always internal errors, never user-facing.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::InvariantViolation(domain_err) => ApiError::Internal {
            message: domain_err.to_string(),
        },
    }
}

/// Translates an eligibility rejection into an API error.
#[must_use]
pub fn translate_rejection(rejection: Rejection) -> ApiError {
    ApiError::BookingRejected {
        rule: rejection.rule().to_string(),
        message: rejection.to_string(),
        limit: rejection.limit(),
    }
}
