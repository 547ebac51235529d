//! Group-stage points table: accumulated score per team, in registration order.

use crate::models::team::Team;
use serde::{Deserialize, Serialize};

/// Points awarded for a group-stage win.
pub const WIN_POINTS: u32 = 3;

/// One row of the points table.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TeamPoints {
    pub team: String,
    pub points: u32,
}

/// Accumulated score per team name.
///
/// Rows keep registration order; `rank` sorts stably, so tied teams keep
/// their first-appearance order. That order is the seeding tiebreak, which
/// is why this is a row vector rather than a hash map.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PointsTable {
    rows: Vec<TeamPoints>,
}

impl PointsTable {
    /// One zero-point row per registered team, in registration order.
    pub fn initialize(teams: &[Team]) -> Self {
        Self {
            rows: teams
                .iter()
                .map(|t| TeamPoints {
                    team: t.name.clone(),
                    points: 0,
                })
                .collect(),
        }
    }

    /// Add points to a team's row. Unknown names are ignored (winners always
    /// come from a generated match, whose teams have rows).
    pub fn award(&mut self, team: &str, points: u32) {
        if let Some(row) = self.rows.iter_mut().find(|r| r.team == team) {
            row.points += points;
        }
    }

    pub fn get(&self, team: &str) -> Option<u32> {
        self.rows.iter().find(|r| r.team == team).map(|r| r.points)
    }

    /// Team names by descending points; ties keep insertion order.
    pub fn rank(&self) -> Vec<String> {
        let mut rows = self.rows.clone();
        rows.sort_by(|a, b| b.points.cmp(&a.points));
        rows.into_iter().map(|r| r.team).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
