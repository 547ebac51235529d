//! Schedule generation and tournament reset.

use crate::models::{PointsTable, Phase, Schedule, Tournament, TournamentError};
use crate::store::MatchStore;

use super::knockout::generate_knockout;
use super::round_robin::generate_round_robin;

/// Generate both fixture trees from the registered teams.
///
/// Both generators must succeed before anything is mutated: a failure
/// (`InsufficientTeams`, `InvalidBracketSize`) leaves schedule, points,
/// phase, and the shared store exactly as they were. On success the points
/// table is re-initialized to zero, the phase returns to Group, and the
/// flattened knockout skeleton is written to the store for the bracket view.
pub fn generate_schedule(
    tournament: &mut Tournament,
    store: &dyn MatchStore,
) -> Result<(), TournamentError> {
    let round_robin = generate_round_robin(&tournament.teams)?;
    let knockout = generate_knockout(&tournament.teams)?;

    tournament.points = PointsTable::initialize(&tournament.teams);
    tournament.phase = Phase::Group;
    tournament.schedule = Schedule {
        round_robin,
        knockout,
    };
    store.save(&tournament.schedule.knockout_flat());
    Ok(())
}

/// Reset the tournament: schedule, points, and phase back to initial, shared
/// store emptied. All-or-nothing; registered teams survive.
pub fn reset_tournament(tournament: &mut Tournament, store: &dyn MatchStore) {
    tournament.schedule = Schedule::default();
    tournament.points = PointsTable::default();
    tournament.phase = Phase::Group;
    store.clear();
}
