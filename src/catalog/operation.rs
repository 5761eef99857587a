use std::{fmt, time::Duration};

/// Operations exposed by the catalog service that go through the latency policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatalogOperation {
    ListPlayers,
    GetPlayer,
    ListTeams,
    GetTeam,
    ListPlayersByTeam,
    SearchPlayers,
    AddPlayer,
    ValidateShirtNumber,
}

impl CatalogOperation {
    /// Latency a remote backend would roughly have for this call.
    pub fn simulated_delay(&self) -> Duration {
        let millis = match self {
            CatalogOperation::ListPlayers => 500,
            CatalogOperation::GetPlayer => 300,
            CatalogOperation::ListTeams => 300,
            CatalogOperation::GetTeam => 200,
            CatalogOperation::ListPlayersByTeam => 400,
            CatalogOperation::SearchPlayers => 300,
            CatalogOperation::AddPlayer => 800,
            CatalogOperation::ValidateShirtNumber => 200,
        };
        Duration::from_millis(millis)
    }
}

impl fmt::Display for CatalogOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CatalogOperation::ListPlayers => "error fetching players",
            CatalogOperation::GetPlayer => "error fetching player",
            CatalogOperation::ListTeams => "error fetching teams",
            CatalogOperation::GetTeam => "error fetching team",
            CatalogOperation::ListPlayersByTeam => "error fetching team players",
            CatalogOperation::SearchPlayers => "error searching players",
            CatalogOperation::AddPlayer => "error adding player",
            CatalogOperation::ValidateShirtNumber => "error validating shirt number",
        };
        write!(f, "{}", label)
    }
}
