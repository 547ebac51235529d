//! Tournament state, Phase, and TournamentError.

use crate::models::game::Schedule;
use crate::models::points::PointsTable;
use crate::models::team::{Team, TeamId};
use serde::{Deserialize, Serialize};

/// Errors that can occur during tournament operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TournamentError {
    /// Round-robin requested with fewer than 2 teams.
    InsufficientTeams,
    /// Knockout requested with a team count that is 0 or not a power of two.
    InvalidBracketSize(usize),
    /// Winner selection referenced a match that does not exist.
    MatchNotFound,
    /// Winner selection on a match that already has a winner.
    MatchAlreadyCompleted,
    /// Selected winner is not one of the match's two teams.
    InvalidWinner(String),
    /// Team name is empty after trimming.
    EmptyTeamName,
    /// A team with this name already exists (names are unique, case-insensitive).
    DuplicateTeamName,
    /// Team not found in the registry.
    TeamNotFound(TeamId),
    /// Action not valid in the current tournament phase.
    InvalidPhase,
}

impl std::fmt::Display for TournamentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentError::InsufficientTeams => {
                write!(f, "Need at least 2 teams to generate a schedule")
            }
            TournamentError::InvalidBracketSize(n) => {
                write!(f, "Number of teams must be a power of 2 for knockout stage (got {})", n)
            }
            TournamentError::MatchNotFound => write!(f, "Match not found"),
            TournamentError::MatchAlreadyCompleted => {
                write!(f, "Match already has a winner")
            }
            TournamentError::InvalidWinner(name) => {
                write!(f, "'{}' is not playing in this match", name)
            }
            TournamentError::EmptyTeamName => write!(f, "Team name cannot be empty"),
            TournamentError::DuplicateTeamName => write!(f, "Team name already exists"),
            TournamentError::TeamNotFound(_) => write!(f, "Team not found"),
            TournamentError::InvalidPhase => write!(f, "Action not valid in the current phase"),
        }
    }
}

/// Current stage of the tournament. Forward-only; reset to Group whenever a
/// schedule is (re)generated.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Round-robin group stage; wins accumulate points.
    #[default]
    Group,
    /// Knockout semifinals, seeded from the group-stage ranking.
    Semi,
    /// The final match is set; its winner is the champion.
    Final,
}

/// Full engine state: team registry, both fixture trees, points, and phase.
///
/// The shared match store is deliberately not a field; every operation that
/// persists takes it as an explicit `&dyn MatchStore` argument.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Tournament {
    /// Registered teams, in registration order.
    pub teams: Vec<Team>,
    pub schedule: Schedule,
    pub points: PointsTable,
    pub phase: Phase,
}

impl Tournament {
    /// New tournament with no teams, empty schedule, Group phase.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tournament pre-loaded with teams (e.g. for tests).
    pub fn with_teams(teams: Vec<Team>) -> Self {
        Self {
            teams,
            ..Self::new()
        }
    }

    /// Register a team. Names are trimmed, must be non-empty, and unique
    /// case-insensitively. Returns the new team's id.
    pub fn register_team(&mut self, name: impl Into<String>) -> Result<TeamId, TournamentError> {
        let name = name.into();
        let name_trimmed = name.trim();
        if name_trimmed.is_empty() {
            return Err(TournamentError::EmptyTeamName);
        }
        let is_duplicate = self
            .teams
            .iter()
            .any(|t| t.name.eq_ignore_ascii_case(name_trimmed));
        if is_duplicate {
            return Err(TournamentError::DuplicateTeamName);
        }
        let team = Team::new(name_trimmed);
        let id = team.id;
        self.teams.push(team);
        Ok(id)
    }

    /// Remove a team by id. The current schedule is unaffected until the
    /// next generation.
    pub fn delete_team(&mut self, team_id: TeamId) -> Result<(), TournamentError> {
        let idx = self
            .teams
            .iter()
            .position(|t| t.id == team_id)
            .ok_or(TournamentError::TeamNotFound(team_id))?;
        self.teams.remove(idx);
        Ok(())
    }
}
