//! Match, Round, and Schedule for the round-robin and knockout trees.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single match in either tree.
///
/// Field names follow the stored JSON format exactly
/// (`id, round, position, homeTeam, awayTeam, completed, winner`).
/// Round-robin matches are identified by `id` and carry no `position`;
/// knockout matches always have one (their slot within the round).
/// An empty team string means the slot is not yet decided (a later
/// knockout round waiting for a winner to propagate into it).
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: String,
    /// 1-based round number within the tree.
    pub round: u32,
    /// 1-based slot within the round; knockout only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,
    pub home_team: String,
    pub away_team: String,
    pub completed: bool,
    /// None until a winner is selected; always one of the two team names.
    pub winner: Option<String>,
}

impl Match {
    /// A round-robin fixture: no position, identified by id.
    pub fn round_robin(
        id: impl Into<String>,
        round: u32,
        home_team: impl Into<String>,
        away_team: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            round,
            position: None,
            home_team: home_team.into(),
            away_team: away_team.into(),
            completed: false,
            winner: None,
        }
    }

    /// A knockout match at a bracket slot. Team slots may be empty.
    pub fn knockout(
        id: impl Into<String>,
        round: u32,
        position: u32,
        home_team: impl Into<String>,
        away_team: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            round,
            position: Some(position),
            home_team: home_team.into(),
            away_team: away_team.into(),
            completed: false,
            winner: None,
        }
    }

    /// True when `name` is one of the match's assigned teams.
    /// Always false for an empty name, so an unassigned slot can never match.
    pub fn has_team(&self, name: &str) -> bool {
        !name.is_empty() && (self.home_team == name || self.away_team == name)
    }
}

/// Matches sharing one round number, in slot order.
pub type Round = Vec<Match>;

/// The two fixture trees. The round-robin result seeds the knockout tree,
/// but the trees are otherwise independent.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    pub round_robin: Vec<Round>,
    pub knockout: Vec<Round>,
}

impl Schedule {
    pub fn is_empty(&self) -> bool {
        self.round_robin.is_empty() && self.knockout.is_empty()
    }

    /// Knockout matches as the flat list the shared store holds.
    pub fn knockout_flat(&self) -> Vec<Match> {
        self.knockout.iter().flatten().cloned().collect()
    }
}

/// Group a flat match list (as the shared store holds it) back into rounds,
/// ascending by round number.
pub fn rounds_from_flat(matches: &[Match]) -> Vec<Round> {
    let mut by_round: BTreeMap<u32, Round> = BTreeMap::new();
    for m in matches {
        by_round.entry(m.round).or_default().push(m.clone());
    }
    by_round.into_values().collect()
}
