//! Tournament bracket web app: scheduling and bracket-progression engine.
//!
//! The engine generates round-robin and knockout fixtures from a team
//! registry, tracks group-stage points, and advances a single-elimination
//! bracket as winners are selected. Both UI flows (tabular schedule and
//! graphical bracket) drive the same state machine through one shared
//! match store.

pub mod logic;
pub mod models;
pub mod store;

pub use logic::{
    champion, generate_knockout, generate_round_robin, generate_schedule, parent_slot,
    record_group_winner, record_winner, reset_tournament, select_winner, Slot,
};
pub use models::{
    rounds_from_flat, Match, Phase, PointsTable, Round, Schedule, Team, TeamId, TeamPoints,
    Tournament, TournamentError, WIN_POINTS,
};
pub use store::{MatchStore, MemoryMatchStore};
