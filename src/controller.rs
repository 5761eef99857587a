use crate::{
    catalog::CatalogService,
    errors::AppError,
    logging::logger::{log_error, log_warn},
    providers::{favorites_reader::FavoritesReader, favorites_writer::FavoritesWriter},
    shapes::{
        draft::{FieldError, PlayerDraft},
        favorites::FavoritesSet,
        player::{PlayerEntry, PlayerId},
        team::{TeamEntry, TeamId},
    },
};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoritesView {
    /// No favorites saved, nothing changed.
    Empty,
    /// Favorites listed, with how many of them are still in the catalog.
    Shown(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Added(PlayerEntry),
    Invalid(Vec<FieldError>),
    ShirtNumberTaken,
    Busy,
    Failed(String),
}

/// State the player list view renders from, and the commands that change it.
#[derive(Debug)]
pub struct CatalogController<FW: FavoritesWriter + Send + Sync> {
    service: CatalogService,
    favorites_writer: Arc<FW>,
    players: Vec<PlayerEntry>,
    loading: bool,
    error: Option<String>,
    search_query: String,
    favorites: FavoritesSet,
    showing_favorites: bool,
    selected_player: Option<PlayerEntry>,
    submitting: bool,
}

impl<FW: FavoritesWriter + Send + Sync> CatalogController<FW> {
    pub fn new(service: CatalogService, favorites: FavoritesSet, favorites_writer: Arc<FW>) -> Self {
        Self {
            service,
            favorites_writer,
            players: vec![],
            loading: false,
            error: None,
            search_query: String::new(),
            favorites,
            showing_favorites: false,
            selected_player: None,
            submitting: false,
        }
    }

    /// Reads the saved favorites and loads the full player list.
    pub async fn start<FR: FavoritesReader + Send + Sync>(
        service: CatalogService,
        favorites_reader: &FR,
        favorites_writer: Arc<FW>,
    ) -> Self {
        let favorites = match favorites_reader.load().await {
            Ok(favorites) => favorites,
            Err(e) => {
                log_error(&format!("could not load favorites: {}", e));
                FavoritesSet::default()
            }
        };
        let mut controller = Self::new(service, favorites, favorites_writer);
        controller.load_all_players().await;
        controller
    }

    pub fn service(&self) -> &CatalogService {
        &self.service
    }

    pub fn players(&self) -> &[PlayerEntry] {
        &self.players
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn favorites(&self) -> &FavoritesSet {
        &self.favorites
    }

    pub fn showing_favorites(&self) -> bool {
        self.showing_favorites
    }

    pub fn selected_player(&self) -> Option<&PlayerEntry> {
        self.selected_player.as_ref()
    }

    pub fn submitting(&self) -> bool {
        self.submitting
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    fn finish(&mut self, result: Result<Vec<PlayerEntry>, AppError>) -> bool {
        self.loading = false;
        match result {
            Ok(players) => {
                self.players = players;
                true
            }
            Err(e) => {
                log_error(&e.to_string());
                self.error = Some(e.to_string());
                false
            }
        }
    }

    pub async fn load_all_players(&mut self) {
        self.begin();
        let result = self.service.list_players().await;
        if self.finish(result) {
            self.search_query.clear();
            self.showing_favorites = false;
        }
    }

    /// Lists the players matching `query`. An empty query lists everyone.
    pub async fn search(&mut self, query: &str) {
        self.begin();
        self.search_query = query.to_string();
        self.showing_favorites = false;
        let result = self.service.search_players(query).await;
        self.finish(result);
    }

    /// Search box submission: surrounding blanks are dropped and blank terms ignored.
    pub async fn submit_search(&mut self, term: &str) -> bool {
        let term = term.trim();
        if term.is_empty() {
            return false;
        }
        self.search(term).await;
        true
    }

    pub async fn filter_by_team(&mut self, team_id: TeamId) {
        self.begin();
        self.showing_favorites = false;
        let result = self.service.list_players_by_team(team_id).await;
        if self.finish(result) {
            self.search_query.clear();
        }
    }

    pub async fn select_team_filter(&mut self, team_id: Option<TeamId>) {
        match team_id {
            Some(id) => self.filter_by_team(id).await,
            None => self.load_all_players().await,
        }
    }

    /// Teams for the filter selector; failures are logged and yield no teams.
    pub async fn load_teams(&self) -> Vec<TeamEntry> {
        match self.service.list_teams().await {
            Ok(teams) => teams,
            Err(e) => {
                log_error(&format!("could not load teams: {}", e));
                vec![]
            }
        }
    }

    /// Flips `player_id` in the favorites and saves the whole set.
    /// The in-memory change stands even when saving fails.
    pub async fn toggle_favorite(&mut self, player_id: PlayerId) -> bool {
        let is_favorite = self.favorites.toggle(player_id);
        if let Err(e) = self.favorites_writer.save(&self.favorites).await {
            log_error(&format!("could not save favorites: {}", e));
        }
        is_favorite
    }

    pub async fn show_favorites(&mut self) -> FavoritesView {
        if self.favorites.is_empty() {
            return FavoritesView::Empty;
        }
        self.begin();
        self.search_query.clear();
        self.showing_favorites = true;
        let result = self.service.list_players().await.map(|players| {
            players
                .into_iter()
                .filter(|p| self.favorites.contains(p.id))
                .collect::<Vec<_>>()
        });
        if self.finish(result) {
            FavoritesView::Shown(self.players.len())
        } else {
            FavoritesView::Shown(0)
        }
    }

    pub fn select_player(&mut self, player: PlayerEntry) {
        self.selected_player = Some(player);
    }

    pub fn close_profile(&mut self) {
        self.selected_player = None;
    }

    /// Add-player form submission: form rules, then the shirt-number check,
    /// then the insert. The full list is reloaded after a successful insert.
    pub async fn submit_player(&mut self, draft: &PlayerDraft) -> SubmitOutcome {
        if self.submitting {
            return SubmitOutcome::Busy;
        }
        let errors = draft.validate();
        if !errors.is_empty() {
            return SubmitOutcome::Invalid(errors);
        }
        self.submitting = true;
        let outcome = self.add_checked(draft).await;
        self.submitting = false;
        if let SubmitOutcome::Added(_) = outcome {
            self.load_all_players().await;
        }
        outcome
    }

    async fn add_checked(&mut self, draft: &PlayerDraft) -> SubmitOutcome {
        if !draft.shirt_number.trim().is_empty() {
            match self
                .service
                .validate_shirt_number(draft.team_id.as_str(), draft.shirt_number.as_str(), None)
                .await
            {
                Ok(true) => {}
                Ok(false) => {
                    log_warn(&format!(
                        "shirt number {} already taken in team {}",
                        draft.shirt_number, draft.team_id
                    ));
                    return SubmitOutcome::ShirtNumberTaken;
                }
                Err(e) => {
                    log_error(&e.to_string());
                    return SubmitOutcome::Failed(e.to_string());
                }
            }
        }
        match self.service.add_player(draft).await {
            Ok(player) => SubmitOutcome::Added(player),
            Err(e) => {
                log_error(&e.to_string());
                SubmitOutcome::Failed(e.to_string())
            }
        }
    }
}
