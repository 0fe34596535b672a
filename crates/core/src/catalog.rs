// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use gudlft_domain::{
    Club, Competition, DomainError, validate_club_fields, validate_competition_fields,
};
use std::collections::HashSet;

/// The in-memory store of clubs and competitions.
///
/// The catalog exclusively owns both collections. Lookups hand out borrowed
/// references, so a booking applied through [`crate::apply`] is visible to
/// every later read. Source order is preserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    /// All clubs, in feed order.
    clubs: Vec<Club>,
    /// All competitions, in feed order.
    competitions: Vec<Competition>,
}

impl Catalog {
    /// Creates a catalog from already-converted club and competition records.
    ///
    /// # Arguments
    ///
    /// * `clubs` - The clubs, in display order
    /// * `competitions` - The competitions, in display order
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Any club or competition fails field validation
    /// - Two clubs share an email or a name
    /// - Two competitions share a name
    pub fn new(clubs: Vec<Club>, competitions: Vec<Competition>) -> Result<Self, CoreError> {
        let mut emails: HashSet<&str> = HashSet::new();
        let mut club_names: HashSet<&str> = HashSet::new();
        for club in &clubs {
            validate_club_fields(club)?;

            // Rule: email is the club's identity
            if !emails.insert(club.email()) {
                return Err(DomainError::DuplicateClubEmail(club.email().to_string()).into());
            }

            // Rule: booking flows look clubs up by name
            if !club_names.insert(club.name()) {
                return Err(DomainError::DuplicateClubName(club.name().to_string()).into());
            }
        }

        let mut competition_names: HashSet<&str> = HashSet::new();
        for competition in &competitions {
            validate_competition_fields(competition)?;

            if !competition_names.insert(competition.name()) {
                return Err(
                    DomainError::DuplicateCompetition(competition.name().to_string()).into(),
                );
            }
        }

        Ok(Self {
            clubs,
            competitions,
        })
    }

    /// Returns all clubs in source order.
    #[must_use]
    pub fn clubs(&self) -> &[Club] {
        &self.clubs
    }

    /// Returns all competitions in source order.
    #[must_use]
    pub fn competitions(&self) -> &[Competition] {
        &self.competitions
    }

    /// Finds a club by its email. Matching is exact apart from surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ClubEmailNotFound` if no club has this email.
    pub fn find_club_by_email(&self, email: &str) -> Result<&Club, DomainError> {
        self.clubs
            .iter()
            .find(|club| club.has_email(email))
            .ok_or_else(|| DomainError::ClubEmailNotFound(email.to_string()))
    }

    /// Finds a club by its display name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ClubNotFound` if no club has this name.
    pub fn find_club_by_name(&self, name: &str) -> Result<&Club, DomainError> {
        self.clubs
            .iter()
            .find(|club| club.name() == name.trim())
            .ok_or_else(|| DomainError::ClubNotFound(name.to_string()))
    }

    /// Finds a competition by its name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::CompetitionNotFound` if no competition has this name.
    pub fn find_competition_by_name(&self, name: &str) -> Result<&Competition, DomainError> {
        self.competitions
            .iter()
            .find(|competition| competition.name() == name.trim())
            .ok_or_else(|| DomainError::CompetitionNotFound(name.to_string()))
    }

    /// Borrows a club and a competition mutably at the same time.
    ///
    /// Returns `None` if either name does not resolve.
    pub(crate) fn booking_pair_mut(
        &mut self,
        competition_name: &str,
        club_name: &str,
    ) -> Option<(&mut Club, &mut Competition)> {
        let club: &mut Club = self
            .clubs
            .iter_mut()
            .find(|club| club.name() == club_name.trim())?;
        let competition: &mut Competition = self
            .competitions
            .iter_mut()
            .find(|competition| competition.name() == competition_name.trim())?;
        Some((club, competition))
    }
}
