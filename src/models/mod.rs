//! Data structures for the tournament: teams, matches, points, phase.

mod game;
mod points;
mod team;
mod tournament;

pub use game::{rounds_from_flat, Match, Round, Schedule};
pub use points::{PointsTable, TeamPoints, WIN_POINTS};
pub use team::{Team, TeamId};
pub use tournament::{Phase, Tournament, TournamentError};
