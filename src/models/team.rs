//! Team data structure for the registry.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a registered team.
pub type TeamId = Uuid;

/// A registered team. Immutable after registration (delete and re-add to rename).
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
}

impl Team {
    /// Create a new team with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }
}
