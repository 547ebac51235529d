//! Tournament engine logic: generators, group play, bracket state machine.

mod bracket;
mod group_play;
mod knockout;
mod round_robin;
mod setup;

pub use bracket::{champion, parent_slot, record_winner, select_winner, Slot};
pub use group_play::record_group_winner;
pub use knockout::generate_knockout;
pub use round_robin::generate_round_robin;
pub use setup::{generate_schedule, reset_tournament};
