//! Bracket state machine: winner selection, slot propagation, phase advance.
//!
//! `record_winner` is the pure machine over a flat match list; it is the one
//! implementation behind both the tabular schedule flow and the graphical
//! bracket flow. `select_winner` is the persisting wrapper that reads the
//! shared store, applies the machine, and writes the whole list back.

use crate::models::{rounds_from_flat, Match, Phase, Tournament, TournamentError};
use crate::store::MatchStore;

/// Which side of a next-round match a winner advances into.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Slot {
    Home,
    Away,
}

/// Map a match position to the next-round slot its winner feeds.
///
/// Positions 1 and 2 feed position 1 of the next round (home and away),
/// positions 3 and 4 feed position 2, and so on: the odd position of each
/// pair is the home side of the parent match.
pub fn parent_slot(position: u32) -> (u32, Slot) {
    let next_position = position.div_ceil(2);
    let slot = if position % 2 == 1 {
        Slot::Home
    } else {
        Slot::Away
    };
    (next_position, slot)
}

/// The tournament champion, if the bracket has reached its terminal state:
/// the highest round holds exactly one match and it is completed.
pub fn champion(matches: &[Match]) -> Option<&str> {
    let last_round = matches.iter().map(|m| m.round).max()?;
    let mut finals = matches.iter().filter(|m| m.round == last_round);
    match (finals.next(), finals.next()) {
        (Some(m), None) if m.completed => m.winner.as_deref(),
        _ => None,
    }
}

/// True once the last round is a single match with both entrants known.
fn final_ready(matches: &[Match]) -> bool {
    let Some(last_round) = matches.iter().map(|m| m.round).max() else {
        return false;
    };
    let finals: Vec<&Match> = matches.iter().filter(|m| m.round == last_round).collect();
    finals.len() == 1 && !finals[0].home_team.is_empty() && !finals[0].away_team.is_empty()
}

fn winner_at(matches: &[Match], round: u32, position: u32) -> Option<String> {
    matches
        .iter()
        .find(|m| m.round == round && m.position == Some(position))
        .and_then(|m| m.winner.clone())
}

/// Record a winner for the knockout match at `(round, position)` and advance
/// the bracket.
///
/// 1. The match must still be open (`MatchAlreadyCompleted` otherwise:
///    re-deciding a match would overwrite slots already propagated into the
///    next round). The named team must be one of the match's assigned teams
///    (`InvalidWinner` otherwise; an unassigned slot can never be won).
/// 2. When this completes a two-match round with no following round, the
///    final is synthesized: id `"Final"`, both semifinal winners seated.
/// 3. The winner is written into its parent slot (`parent_slot`) whenever
///    that next-round match exists.
///
/// Errors leave `matches` unmodified.
pub fn record_winner(
    matches: &mut Vec<Match>,
    round: u32,
    position: u32,
    winning_team: &str,
) -> Result<(), TournamentError> {
    let idx = matches
        .iter()
        .position(|m| m.round == round && m.position == Some(position))
        .ok_or(TournamentError::MatchNotFound)?;
    if matches[idx].completed {
        return Err(TournamentError::MatchAlreadyCompleted);
    }
    if !matches[idx].has_team(winning_team) {
        return Err(TournamentError::InvalidWinner(winning_team.to_string()));
    }
    matches[idx].winner = Some(winning_team.to_string());
    matches[idx].completed = true;

    // Semifinal boundary: a completed two-match round with nothing after it
    // gets its final created from the recorded winners.
    let round_complete = matches
        .iter()
        .filter(|m| m.round == round)
        .all(|m| m.completed);
    let round_size = matches.iter().filter(|m| m.round == round).count();
    let next_round_exists = matches.iter().any(|m| m.round == round + 1);
    if round_complete && round_size == 2 && !next_round_exists {
        if let (Some(home), Some(away)) = (
            winner_at(matches, round, 1),
            winner_at(matches, round, 2),
        ) {
            matches.push(Match::knockout("Final", round + 1, 1, home, away));
        }
    }

    // Advance the winner into its parent slot, if that match exists yet.
    let (next_position, slot) = parent_slot(position);
    let winner = winning_team.to_string();
    if let Some(next) = matches
        .iter_mut()
        .find(|m| m.round == round + 1 && m.position == Some(next_position))
    {
        match slot {
            Slot::Home => next.home_team = winner,
            Slot::Away => next.away_team = winner,
        }
    }

    Ok(())
}

/// Select a knockout winner through the shared store: load, apply
/// `record_winner`, advance the phase, mirror the rounds back into the
/// schedule, persist, and return the updated list for redisplay.
///
/// On error nothing is persisted and the tournament is unchanged.
pub fn select_winner(
    tournament: &mut Tournament,
    store: &dyn MatchStore,
    round: u32,
    position: u32,
    winning_team: &str,
) -> Result<Vec<Match>, TournamentError> {
    let mut matches = store.load();
    record_winner(&mut matches, round, position, winning_team)?;

    // Forward-only: the phase moves to Final once the final match is seated.
    // During the group stage the pre-seeded bracket may be played ahead, but
    // the phase stays Group until the group stage itself completes.
    if tournament.phase == Phase::Semi && final_ready(&matches) {
        tournament.phase = Phase::Final;
    }

    tournament.schedule.knockout = rounds_from_flat(&matches);
    store.save(&matches);
    Ok(matches)
}
