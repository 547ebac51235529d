//! Round-robin fixture generation (circle method).

use crate::models::{Match, Round, Team, TournamentError};

/// Generate a full round-robin: every pair of teams meets exactly once.
///
/// Circle method: slot indices `[0..slots-1]`, pairing slot `k` against slot
/// `slots-1-k` each round, then rotating every index except the first. Odd
/// team counts get one padding slot; a pairing that touches it is the bye
/// and emits no match. Ids are `R<round>M<match>` with both numbers 1-based;
/// match numbers count emitted matches so they stay contiguous past a bye.
///
/// Yields `n-1` rounds for even `n`, `n` rounds for odd `n`.
pub fn generate_round_robin(teams: &[Team]) -> Result<Vec<Round>, TournamentError> {
    if teams.len() < 2 {
        return Err(TournamentError::InsufficientTeams);
    }

    let n = teams.len();
    let slots = if n % 2 == 0 { n } else { n + 1 };
    let mut indices: Vec<usize> = (0..slots).collect();

    let mut rounds = Vec::with_capacity(slots - 1);
    for round in 0..slots - 1 {
        let mut matches: Round = Vec::with_capacity(n / 2);
        for pair in 0..slots / 2 {
            let home = indices[pair];
            let away = indices[slots - 1 - pair];
            if home >= n || away >= n {
                continue; // bye: the padding slot sits out
            }
            matches.push(Match::round_robin(
                format!("R{}M{}", round + 1, matches.len() + 1),
                (round + 1) as u32,
                &teams[home].name,
                &teams[away].name,
            ));
        }
        // Rotate all slots except the first: last moves to index 1.
        indices[1..].rotate_right(1);
        rounds.push(matches);
    }

    Ok(rounds)
}
