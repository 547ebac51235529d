//! Integration tests for the bracket state machine: winner recording,
//! slot propagation, final synthesis, and champion detection.

use tournament_bracket_web::{
    champion, generate_knockout, parent_slot, record_winner, Match, Slot, Team, TournamentError,
};

/// Seeded semifinals as the group stage produces them.
fn seeded_semis() -> Vec<Match> {
    vec![
        Match::knockout("SF1", 1, 1, "A", "D"),
        Match::knockout("SF2", 1, 2, "B", "C"),
    ]
}

#[test]
fn parent_slot_maps_pairs_to_home_and_away() {
    assert_eq!(parent_slot(1), (1, Slot::Home));
    assert_eq!(parent_slot(2), (1, Slot::Away));
    assert_eq!(parent_slot(3), (2, Slot::Home));
    assert_eq!(parent_slot(4), (2, Slot::Away));
    assert_eq!(parent_slot(7), (4, Slot::Home));
    assert_eq!(parent_slot(8), (4, Slot::Away));
}

#[test]
fn selecting_both_semifinal_winners_creates_the_final() {
    let mut matches = seeded_semis();
    record_winner(&mut matches, 1, 1, "A").unwrap();
    // One semi done: no final yet.
    assert_eq!(matches.len(), 2);

    record_winner(&mut matches, 1, 2, "B").unwrap();
    assert_eq!(matches.len(), 3);

    let final_match = &matches[2];
    assert_eq!(final_match.id, "Final");
    assert_eq!(final_match.round, 2);
    assert_eq!(final_match.position, Some(1));
    assert_eq!(final_match.home_team, "A");
    assert_eq!(final_match.away_team, "B");
    assert!(!final_match.completed);
    assert_eq!(final_match.winner, None);
}

#[test]
fn semifinal_order_does_not_change_final_seating() {
    // Position 1's winner is always home, regardless of selection order.
    let mut matches = seeded_semis();
    record_winner(&mut matches, 1, 2, "C").unwrap();
    record_winner(&mut matches, 1, 1, "D").unwrap();

    let final_match = matches.iter().find(|m| m.id == "Final").unwrap();
    assert_eq!(final_match.home_team, "D");
    assert_eq!(final_match.away_team, "C");
}

#[test]
fn winners_propagate_by_slot_parity_in_a_full_bracket() {
    let teams: Vec<Team> = ["A", "B", "C", "D", "E", "F", "G", "H"]
        .into_iter()
        .map(Team::new)
        .collect();
    let mut matches: Vec<Match> = generate_knockout(&teams)
        .unwrap()
        .into_iter()
        .flatten()
        .collect();

    record_winner(&mut matches, 1, 1, "A").unwrap();
    record_winner(&mut matches, 1, 2, "C").unwrap();
    record_winner(&mut matches, 1, 3, "F").unwrap();
    record_winner(&mut matches, 1, 4, "G").unwrap();

    // Odd positions land home, even positions land away.
    let r2p1 = matches
        .iter()
        .find(|m| m.round == 2 && m.position == Some(1))
        .unwrap();
    assert_eq!(r2p1.home_team, "A");
    assert_eq!(r2p1.away_team, "C");

    let r2p2 = matches
        .iter()
        .find(|m| m.round == 2 && m.position == Some(2))
        .unwrap();
    assert_eq!(r2p2.home_team, "F");
    assert_eq!(r2p2.away_team, "G");

    // No extra round was synthesized: round 3 already exists in the skeleton.
    assert_eq!(matches.len(), 7);

    record_winner(&mut matches, 2, 1, "C").unwrap();
    record_winner(&mut matches, 2, 2, "G").unwrap();
    let r3 = matches
        .iter()
        .find(|m| m.round == 3 && m.position == Some(1))
        .unwrap();
    assert_eq!(r3.home_team, "C");
    assert_eq!(r3.away_team, "G");

    record_winner(&mut matches, 3, 1, "G").unwrap();
    assert_eq!(champion(&matches), Some("G"));
}

#[test]
fn unknown_match_is_rejected() {
    let mut matches = seeded_semis();
    assert_eq!(
        record_winner(&mut matches, 5, 1, "A"),
        Err(TournamentError::MatchNotFound)
    );
    assert_eq!(
        record_winner(&mut matches, 1, 3, "A"),
        Err(TournamentError::MatchNotFound)
    );
}

#[test]
fn winner_must_be_one_of_the_two_teams() {
    let mut matches = seeded_semis();
    assert_eq!(
        record_winner(&mut matches, 1, 1, "B"),
        Err(TournamentError::InvalidWinner("B".to_string()))
    );
    // Nothing was mutated.
    assert!(!matches[0].completed);
    assert_eq!(matches[0].winner, None);
}

#[test]
fn unassigned_slot_cannot_be_won() {
    // A later-round skeleton match has empty teams; an empty "winner" must
    // not complete it.
    let teams: Vec<Team> = ["A", "B", "C", "D"].into_iter().map(Team::new).collect();
    let mut matches: Vec<Match> = generate_knockout(&teams)
        .unwrap()
        .into_iter()
        .flatten()
        .collect();
    assert!(matches!(
        record_winner(&mut matches, 2, 1, ""),
        Err(TournamentError::InvalidWinner(_))
    ));
}

#[test]
fn completed_match_cannot_be_redecided() {
    let mut matches = seeded_semis();
    record_winner(&mut matches, 1, 1, "A").unwrap();
    record_winner(&mut matches, 1, 2, "B").unwrap();
    record_winner(&mut matches, 2, 1, "A").unwrap();
    assert_eq!(champion(&matches), Some("A"));

    // Re-deciding a semifinal after the Final is played would overwrite the
    // Final's home slot while its recorded winner stayed "A", leaving a
    // winner that is no longer one of the match's teams.
    assert_eq!(
        record_winner(&mut matches, 1, 1, "D"),
        Err(TournamentError::MatchAlreadyCompleted)
    );

    let final_match = matches.iter().find(|m| m.id == "Final").unwrap();
    assert_eq!(final_match.home_team, "A");
    assert_eq!(final_match.away_team, "B");
    assert_eq!(final_match.winner.as_deref(), Some("A"));
    assert_eq!(champion(&matches), Some("A"));

    // The semifinal itself is also untouched.
    assert_eq!(matches[0].winner.as_deref(), Some("A"));
}

#[test]
fn champion_requires_a_completed_final() {
    let mut matches = seeded_semis();
    assert_eq!(champion(&matches), None);

    record_winner(&mut matches, 1, 1, "A").unwrap();
    record_winner(&mut matches, 1, 2, "B").unwrap();
    // Final exists but is not played.
    assert_eq!(champion(&matches), None);

    record_winner(&mut matches, 2, 1, "A").unwrap();
    assert_eq!(champion(&matches), Some("A"));
}
