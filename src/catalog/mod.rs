pub mod format;
pub mod id;
pub mod latency;
pub mod operation;

use crate::{
    catalog::{id::IdInput, latency::LatencyPolicy, operation::CatalogOperation},
    constants::UNKNOWN_TEAM_LABEL,
    errors::{AppError, CatalogError, EntityKind},
    logging::logger::log_info,
    providers::dataset_reader::DatasetReader,
    shapes::{
        dataset::Dataset,
        draft::PlayerDraft,
        player::{PlayerEntry, PlayerId},
        stats::CatalogStats,
        team::{TeamEntry, TeamId},
    },
};
use chrono::Utc;

/// In-memory player and team catalog.
///
/// Every async operation first waits for the configured [`LatencyPolicy`],
/// then answers from the collections loaded at construction. Players can
/// only be appended; teams are read-only.
#[derive(Debug)]
pub struct CatalogService {
    players: Vec<PlayerEntry>,
    teams: Vec<TeamEntry>,
    next_player_id: PlayerId,
    latency: LatencyPolicy,
}

impl CatalogService {
    pub fn new(dataset: Dataset, latency: LatencyPolicy) -> Self {
        let next_player_id = dataset
            .players
            .iter()
            .map(|p| p.id)
            .max()
            .map_or(1, |max| max.saturating_add(1));
        Self {
            players: dataset.players,
            teams: dataset.teams,
            next_player_id,
            latency,
        }
    }

    pub async fn from_reader<DR: DatasetReader + Send + Sync>(
        reader: &DR,
        latency: LatencyPolicy,
    ) -> Result<Self, AppError> {
        let dataset = reader.read().await?;
        log_info(&format!(
            "catalog loaded: {} players, {} teams",
            dataset.players.len(),
            dataset.teams.len()
        ));
        Ok(Self::new(dataset, latency))
    }

    pub fn latency(&self) -> LatencyPolicy {
        self.latency
    }

    pub fn next_player_id(&self) -> PlayerId {
        self.next_player_id
    }

    pub async fn list_players(&self) -> Result<Vec<PlayerEntry>, AppError> {
        self.latency.wait(CatalogOperation::ListPlayers).await;
        Ok(self.players.clone())
    }

    pub async fn get_player<I: IdInput + Send>(&self, id: I) -> Result<PlayerEntry, AppError> {
        self.latency.wait(CatalogOperation::GetPlayer).await;
        id.to_id()
            .and_then(|id| self.players.iter().find(|p| p.id == id))
            .cloned()
            .ok_or_else(|| {
                AppError::Catalog(CatalogError::NotFound {
                    operation: CatalogOperation::GetPlayer,
                    entity: EntityKind::Player,
                    id: id.to_string(),
                })
            })
    }

    pub async fn list_teams(&self) -> Result<Vec<TeamEntry>, AppError> {
        self.latency.wait(CatalogOperation::ListTeams).await;
        Ok(self.teams.clone())
    }

    pub async fn get_team_by_id<I: IdInput + Send>(&self, id: I) -> Result<TeamEntry, AppError> {
        self.latency.wait(CatalogOperation::GetTeam).await;
        id.to_id()
            .and_then(|id| self.get_team(id))
            .cloned()
            .ok_or_else(|| {
                AppError::Catalog(CatalogError::NotFound {
                    operation: CatalogOperation::GetTeam,
                    entity: EntityKind::Team,
                    id: id.to_string(),
                })
            })
    }

    /// Synchronous lookup for presentation code that tolerates missing teams.
    pub fn get_team(&self, id: TeamId) -> Option<&TeamEntry> {
        self.teams.iter().find(|t| t.id == id)
    }

    pub fn team_label(&self, id: Option<TeamId>) -> String {
        id.and_then(|id| self.get_team(id))
            .map(|t| t.name.clone())
            .unwrap_or_else(|| UNKNOWN_TEAM_LABEL.to_string())
    }

    pub async fn list_players_by_team<I: IdInput + Send>(
        &self,
        team_id: I,
    ) -> Result<Vec<PlayerEntry>, AppError> {
        self.latency
            .wait(CatalogOperation::ListPlayersByTeam)
            .await;
        let Some(team_id) = team_id.to_id() else {
            return Ok(vec![]);
        };
        Ok(self
            .players
            .iter()
            .filter(|p| p.team_id == Some(team_id))
            .cloned()
            .collect())
    }

    /// An empty query matches every player.
    pub async fn search_players(&self, query: &str) -> Result<Vec<PlayerEntry>, AppError> {
        self.latency.wait(CatalogOperation::SearchPlayers).await;
        let needle = query.to_lowercase();
        Ok(self
            .players
            .iter()
            .filter(|p| p.matches(&needle))
            .cloned()
            .collect())
    }

    /// Appends a new player built from `draft`.
    ///
    /// Only structural coercion can fail here. Range checks and shirt-number
    /// uniqueness are the caller's business, see [`PlayerDraft::validate`]
    /// and [`CatalogService::validate_shirt_number`].
    pub async fn add_player(&mut self, draft: &PlayerDraft) -> Result<PlayerEntry, AppError> {
        self.latency.wait(CatalogOperation::AddPlayer).await;
        let id = self.next_player_id;
        let next = id.checked_add(1).ok_or_else(|| {
            AppError::Catalog(CatalogError::Failed {
                operation: CatalogOperation::AddPlayer,
                message: "player identifiers exhausted".to_string(),
            })
        })?;
        let player = draft.to_entry(id, Utc::now()).map_err(|message| {
            AppError::Catalog(CatalogError::Failed {
                operation: CatalogOperation::AddPlayer,
                message,
            })
        })?;
        self.players.push(player.clone());
        self.next_player_id = next;
        log_info(&format!("player {} added with id {}", player.name, player.id));
        Ok(player)
    }

    /// Whether `shirt_number` is free among the players of `team_id`,
    /// ignoring `exclude` if given. Inputs that are not integers never collide.
    pub async fn validate_shirt_number<T: IdInput + Send, N: IdInput + Send>(
        &self,
        team_id: T,
        shirt_number: N,
        exclude: Option<PlayerId>,
    ) -> Result<bool, AppError> {
        self.latency
            .wait(CatalogOperation::ValidateShirtNumber)
            .await;
        let (Some(team_id), Some(number)) = (team_id.to_id(), shirt_number.to_id()) else {
            return Ok(true);
        };
        let taken = self.players.iter().any(|p| {
            p.team_id == Some(team_id)
                && p.shirt_number.map(u32::from) == Some(number)
                && exclude != Some(p.id)
        });
        Ok(!taken)
    }

    pub fn format_market_value(&self, value: u64) -> String {
        format::format_market_value(value)
    }

    pub fn player_stats(&self) -> CatalogStats {
        let total_players = self.players.len();
        let total_age: u64 = self.players.iter().map(|p| u64::from(p.age)).sum();
        let average_age = if total_players == 0 {
            0
        } else {
            (total_age as f64 / total_players as f64).round() as u32
        };
        CatalogStats {
            total_players,
            last_added_player: self.players.last().cloned(),
            average_age,
            total_market_value: self
                .players
                .iter()
                .fold(0u64, |acc, p| acc.saturating_add(p.market_value)),
        }
    }
}
