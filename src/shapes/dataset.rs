use crate::shapes::{player::PlayerEntry, team::TeamEntry};
use serde::{Deserialize, Serialize};

/// Initial content of the catalog.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Dataset {
    #[serde(default)]
    pub players: Vec<PlayerEntry>,
    #[serde(default)]
    pub teams: Vec<TeamEntry>,
}
