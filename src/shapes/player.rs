use crate::shapes::{
    enums::{FootEnum, PositionEnum},
    team::TeamId,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

pub type PlayerId = u32;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerStatsEntry {
    #[serde(default)]
    pub goals: u32,
    #[serde(default)]
    pub assists: u32,
    #[serde(default)]
    pub matches: u32,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PlayerEntry {
    pub id: PlayerId,
    pub name: String,
    pub age: u8,
    pub position: PositionEnum,
    pub nationality: String,
    #[serde(default)]
    pub team_id: Option<TeamId>,
    pub market_value: u64,
    #[serde(default)]
    pub contract_until: Option<NaiveDate>,
    #[serde(default)]
    pub shirt_number: Option<u8>,
    #[serde(default)]
    pub height: Option<u16>,
    #[serde(default)]
    pub weight: Option<u16>,
    #[serde(default)]
    pub foot: FootEnum,
    #[serde(default)]
    pub stats: PlayerStatsEntry,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_added: Option<DateTime<Utc>>,
}

impl PlayerEntry {
    /// Case-insensitive substring match on name, position label and nationality.
    /// `needle` must already be lowercase.
    pub fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.position.to_string().to_lowercase().contains(needle)
            || self.nationality.to_lowercase().contains(needle)
    }
}

impl std::fmt::Display for PlayerEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.shirt_number {
            Some(number) => write!(f, "{} ({})", self.name, number),
            None => write!(f, "{}", self.name),
        }
    }
}
