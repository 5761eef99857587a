use serde::{Deserialize, Serialize};

pub type TeamId = u32;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TeamEntry {
    pub id: TeamId,
    pub name: String,
    #[serde(default)]
    pub logo: Option<String>,
}

impl std::fmt::Display for TeamEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
