use crate::shapes::player::PlayerEntry;

/// Aggregate figures over the whole player collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogStats {
    pub total_players: usize,
    pub last_added_player: Option<PlayerEntry>,
    /// Mean age rounded to the nearest year, 0 for an empty catalog.
    pub average_age: u32,
    pub total_market_value: u64,
}
