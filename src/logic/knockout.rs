//! Single-elimination bracket generation.

use crate::models::{Match, Round, Team, TournamentError};

/// Generate a knockout skeleton for a power-of-two team count.
///
/// Round 1 pairs consecutive registrants `(1,2), (3,4), ...`. Every later
/// round is emitted with empty team slots: entrants are filled in by winner
/// propagation as matches complete, never precomputed from the entrant list.
/// Ids are `K<round>M<position>`; `log2(n)` rounds total, the last holding
/// the single final. One team yields zero rounds (a pre-crowned champion).
pub fn generate_knockout(teams: &[Team]) -> Result<Vec<Round>, TournamentError> {
    let n = teams.len();
    if n == 0 || !n.is_power_of_two() {
        return Err(TournamentError::InvalidBracketSize(n));
    }

    let mut rounds = Vec::new();
    let mut entrants: Vec<String> = teams.iter().map(|t| t.name.clone()).collect();
    let mut round_number: u32 = 1;

    while entrants.len() > 1 {
        let matches: Round = entrants
            .chunks(2)
            .enumerate()
            .map(|(i, pair)| {
                Match::knockout(
                    format!("K{}M{}", round_number, i + 1),
                    round_number,
                    (i + 1) as u32,
                    &pair[0],
                    &pair[1],
                )
            })
            .collect();
        // Next round's slots stay empty until winners advance into them.
        entrants = vec![String::new(); entrants.len() / 2];
        rounds.push(matches);
        round_number += 1;
    }

    Ok(rounds)
}
