//! Group stage: result recording, points, and semifinal seeding.

use crate::models::{Match, Phase, Tournament, TournamentError, WIN_POINTS};
use crate::store::MatchStore;

/// Record a group-stage result by match id and award points.
///
/// Round-robin matches carry no bracket position, so the group flow keys by
/// id. A match that already has a result cannot be replayed
/// (`MatchAlreadyCompleted`), so each win is awarded exactly once. When the
/// last group match completes, the knockout stage is reseeded
/// from the points ranking and the phase advances; the shared store is
/// overwritten with the seeded matches so the bracket view picks them up.
///
/// Errors leave the tournament and the store unchanged.
pub fn record_group_winner(
    tournament: &mut Tournament,
    store: &dyn MatchStore,
    match_id: &str,
    winning_team: &str,
) -> Result<(), TournamentError> {
    if tournament.phase != Phase::Group {
        return Err(TournamentError::InvalidPhase);
    }
    let m = tournament
        .schedule
        .round_robin
        .iter_mut()
        .flatten()
        .find(|m| m.id == match_id)
        .ok_or(TournamentError::MatchNotFound)?;
    if m.completed {
        return Err(TournamentError::MatchAlreadyCompleted);
    }
    if !m.has_team(winning_team) {
        return Err(TournamentError::InvalidWinner(winning_team.to_string()));
    }
    m.winner = Some(winning_team.to_string());
    m.completed = true;
    tournament.points.award(winning_team, WIN_POINTS);

    let group_complete = tournament
        .schedule
        .round_robin
        .iter()
        .flatten()
        .all(|m| m.completed);
    if group_complete {
        seed_knockout_from_points(tournament, store);
    }
    Ok(())
}

/// Replace the knockout tree with a bracket seeded from the group ranking:
/// rank 1 vs rank 4 and rank 2 vs rank 3. With fewer than four teams the top
/// two go straight to a final. Overwrites the shared store wholesale.
fn seed_knockout_from_points(tournament: &mut Tournament, store: &dyn MatchStore) {
    let ranked = tournament.points.rank();
    let seeded: Vec<Match> = if ranked.len() >= 4 {
        vec![
            Match::knockout("SF1", 1, 1, &ranked[0], &ranked[3]),
            Match::knockout("SF2", 1, 2, &ranked[1], &ranked[2]),
        ]
    } else {
        vec![Match::knockout("Final", 1, 1, &ranked[0], &ranked[1])]
    };
    tournament.phase = if seeded.len() == 2 {
        Phase::Semi
    } else {
        Phase::Final
    };
    tournament.schedule.knockout = vec![seeded.clone()];
    store.save(&seeded);
}
