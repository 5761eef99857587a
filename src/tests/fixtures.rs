use crate::{
    catalog::{latency::LatencyPolicy, CatalogService},
    errors::{AppError, IOError},
    providers::favorites_writer::FavoritesWriter,
    shapes::{
        dataset::Dataset,
        draft::PlayerDraft,
        enums::{FootEnum, PositionEnum},
        favorites::FavoritesSet,
        player::{PlayerEntry, PlayerId, PlayerStatsEntry},
        team::{TeamEntry, TeamId},
    },
};
use async_trait::async_trait;
use std::sync::Mutex;

pub fn make_player(
    id: PlayerId,
    name: &str,
    age: u8,
    position: PositionEnum,
    nationality: &str,
    team_id: Option<TeamId>,
    market_value: u64,
    shirt_number: Option<u8>,
) -> PlayerEntry {
    PlayerEntry {
        id,
        name: name.to_string(),
        age,
        position,
        nationality: nationality.to_string(),
        team_id,
        market_value,
        contract_until: None,
        shirt_number,
        height: None,
        weight: None,
        foot: FootEnum::Right,
        stats: PlayerStatsEntry::default(),
        image: None,
        date_added: None,
    }
}

pub fn make_team(id: TeamId, name: &str) -> TeamEntry {
    TeamEntry {
        id,
        name: name.to_string(),
        logo: None,
    }
}

pub fn sample_dataset() -> Dataset {
    Dataset {
        teams: vec![
            make_team(1, "Inter Miami"),
            make_team(2, "Manchester City"),
            make_team(3, "Empty United"),
        ],
        players: vec![
            make_player(
                3,
                "Lionel Messi",
                37,
                PositionEnum::RightWinger,
                "Argentina",
                Some(1),
                30_000_000,
                Some(10),
            ),
            make_player(
                7,
                "Erling Haaland",
                24,
                PositionEnum::CentreForward,
                "Norway",
                Some(2),
                180_000_000,
                Some(9),
            ),
            make_player(
                5,
                "Luis Suárez",
                37,
                PositionEnum::CentreForward,
                "Uruguay",
                Some(1),
                3_000_000,
                Some(9),
            ),
            make_player(
                11,
                "Rodri",
                28,
                PositionEnum::DefensiveMidfield,
                "Spain",
                Some(2),
                110_000_000,
                Some(16),
            ),
            make_player(
                2,
                "Free Agent",
                30,
                PositionEnum::Goalkeeper,
                "Spain",
                None,
                750_000,
                None,
            ),
        ],
    }
}

pub fn sample_service() -> CatalogService {
    CatalogService::new(sample_dataset(), LatencyPolicy::Disabled)
}

pub fn sample_draft() -> PlayerDraft {
    PlayerDraft {
        name: "Pedri".to_string(),
        age: "22".to_string(),
        position: "Central Midfield".to_string(),
        nationality: "Spain".to_string(),
        team_id: "2".to_string(),
        market_value: "80000000".to_string(),
        contract_until: "2030-06-30".to_string(),
        shirt_number: "8".to_string(),
        height: "174".to_string(),
        weight: "60".to_string(),
        foot: "right".to_string(),
    }
}

/// Keeps every saved set in memory.
#[derive(Debug, Default)]
pub struct RecordingFavoritesWriter {
    pub saved: Mutex<Vec<FavoritesSet>>,
}

impl RecordingFavoritesWriter {
    pub fn last_saved(&self) -> Option<FavoritesSet> {
        self.saved.lock().expect("poisoned lock").last().cloned()
    }
}

#[async_trait]
impl FavoritesWriter for RecordingFavoritesWriter {
    async fn save(&self, favorites: &FavoritesSet) -> Result<(), AppError> {
        self.saved
            .lock()
            .expect("poisoned lock")
            .push(favorites.clone());
        Ok(())
    }
}

/// Fails every save.
#[derive(Debug, Default)]
pub struct FailingFavoritesWriter;

#[async_trait]
impl FavoritesWriter for FailingFavoritesWriter {
    async fn save(&self, _: &FavoritesSet) -> Result<(), AppError> {
        Err(AppError::IO(IOError::Msg("storage unavailable".to_string())))
    }
}
