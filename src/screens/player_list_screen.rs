use crate::{
    constants::{NO_FAVORITES_MESSAGE, SUBMIT_FAILED_MESSAGE},
    controller::{CatalogController, FavoritesView, SubmitOutcome},
    providers::favorites_writer::FavoritesWriter,
    screens::{
        components::{
            navigation_footer::render_key_hints,
            notify_banner::NotifyBanner,
            player_form::{FormAction, PlayerForm},
            player_profile::render_profile,
            text_box::TextBox,
        },
        screen::{AppAction, ScreenAsync},
    },
    shapes::{
        draft::{DraftField, FieldError},
        enums::MarketValueTier,
        player::PlayerEntry,
        team::TeamEntry,
    },
};
use async_trait::async_trait;
use ratatui::{
    crossterm::event::{KeyCode, KeyEvent},
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Browse,
    Search,
    Profile,
    AddPlayer,
}

pub struct PlayerListScreen<FW: FavoritesWriter + Send + Sync> {
    controller: CatalogController<FW>,
    teams: Vec<TeamEntry>,
    team_filter: Option<usize>,
    list_state: ListState,
    mode: Mode,
    search_box: TextBox,
    form: Option<PlayerForm>,
    notify_message: NotifyBanner,
}

#[async_trait]
impl<FW: FavoritesWriter + Send + Sync + 'static> ScreenAsync for PlayerListScreen<FW> {
    fn render(&mut self, f: &mut Frame, body: Rect, footer_left: Rect, footer_right: Rect) {
        self.notify_message.render(f, footer_right);
        self.render_footer(f, footer_left);
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(1),
            ])
            .split(body);
        f.render_widget(
            Paragraph::new(self.view_title()).style(Style::default().add_modifier(Modifier::BOLD)),
            rows[0],
        );
        if self.mode == Mode::Search {
            self.search_box.render(f, rows[1]);
        }
        self.render_stats(f, rows[2]);
        self.render_list(f, rows[3]);
        match self.mode {
            Mode::Profile => {
                if let Some(player) = self.controller.selected_player() {
                    render_profile(
                        f,
                        centered_rect(60, 80, body),
                        player,
                        self.controller.service(),
                        self.controller.favorites().contains(player.id),
                    );
                }
            }
            Mode::AddPlayer => {
                if let Some(form) = &self.form {
                    form.render(f, centered_rect(70, 95, body));
                }
            }
            _ => {}
        }
    }

    async fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        if self.notify_message.has_value() && self.mode == Mode::Browse {
            self.notify_message.reset();
            return AppAction::None;
        }
        match self.mode {
            Mode::Browse => return self.handle_browse_key(key).await,
            Mode::Search => self.handle_search_key(key).await,
            Mode::Profile => self.handle_profile_key(key).await,
            Mode::AddPlayer => self.handle_form_key(key).await,
        }
        AppAction::None
    }

    async fn refresh_data(&mut self) {
        self.teams = self.controller.load_teams().await;
        self.after_command();
    }
}

impl<FW: FavoritesWriter + Send + Sync + 'static> PlayerListScreen<FW> {
    pub fn new(controller: CatalogController<FW>) -> Self {
        let mut screen = Self {
            controller,
            teams: vec![],
            team_filter: None,
            list_state: ListState::default(),
            mode: Mode::Browse,
            search_box: TextBox::new("search", false),
            form: None,
            notify_message: NotifyBanner::new(),
        };
        screen.after_command();
        screen
    }

    fn selected_player(&self) -> Option<&PlayerEntry> {
        self.list_state
            .selected()
            .and_then(|i| self.controller.players().get(i))
    }

    // surfaces controller errors and keeps the selection inside the list
    fn after_command(&mut self) {
        if let Some(error) = self.controller.error() {
            self.notify_message.set_error(error.to_string());
        }
        let len = self.controller.players().len();
        match self.list_state.selected() {
            _ if len == 0 => self.list_state.select(None),
            Some(i) if i >= len => self.list_state.select(Some(len - 1)),
            None => self.list_state.select(Some(0)),
            _ => {}
        }
    }

    async fn handle_browse_key(&mut self, key: KeyEvent) -> AppAction {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return AppAction::Quit(Ok(())),
            KeyCode::Down | KeyCode::Char('j') => self.next_player(),
            KeyCode::Up | KeyCode::Char('k') => self.previous_player(),
            KeyCode::Enter => {
                if let Some(player) = self.selected_player().cloned() {
                    self.controller.select_player(player);
                    self.mode = Mode::Profile;
                }
            }
            KeyCode::Char('/') => {
                self.search_box.clear();
                self.search_box.writing_mode = true;
                self.mode = Mode::Search;
            }
            KeyCode::Char('t') => self.cycle_team_filter().await,
            KeyCode::Char('a') => {
                self.team_filter = None;
                self.controller.load_all_players().await;
                self.after_command();
            }
            KeyCode::Char('f') => {
                if let Some(id) = self.selected_player().map(|p| p.id) {
                    self.controller.toggle_favorite(id).await;
                }
            }
            KeyCode::Char('v') => {
                if self.controller.show_favorites().await == FavoritesView::Empty {
                    self.notify_message
                        .set_info(NO_FAVORITES_MESSAGE.to_string());
                } else {
                    self.team_filter = None;
                    self.list_state.select(None);
                }
                self.after_command();
            }
            KeyCode::Char('n') => {
                self.form = Some(PlayerForm::new(self.teams.clone()));
                self.mode = Mode::AddPlayer;
            }
            _ => {}
        }
        AppAction::None
    }

    async fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.search_box.writing_mode = false;
                self.mode = Mode::Browse;
            }
            KeyCode::Enter => {
                let term = self.search_box.value().to_string();
                self.search_box.writing_mode = false;
                self.mode = Mode::Browse;
                if self.controller.submit_search(&term).await {
                    self.team_filter = None;
                    self.list_state.select(None);
                    self.after_command();
                }
            }
            KeyCode::Char(c) => self.search_box.handle_char(c),
            KeyCode::Backspace => self.search_box.handle_backspace(),
            _ => {}
        }
    }

    async fn handle_profile_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => {
                self.controller.close_profile();
                self.mode = Mode::Browse;
            }
            KeyCode::Char('f') => {
                if let Some(id) = self.controller.selected_player().map(|p| p.id) {
                    self.controller.toggle_favorite(id).await;
                }
            }
            _ => {}
        }
    }

    async fn handle_form_key(&mut self, key: KeyEvent) {
        let Some(form) = self.form.as_mut() else {
            self.mode = Mode::Browse;
            return;
        };
        match form.handle_key(key) {
            FormAction::None => {}
            FormAction::Cancel => {
                self.form = None;
                self.mode = Mode::Browse;
            }
            FormAction::Submit => {
                let draft = form.to_draft();
                match self.controller.submit_player(&draft).await {
                    SubmitOutcome::Added(player) => {
                        self.form = None;
                        self.mode = Mode::Browse;
                        self.team_filter = None;
                        self.notify_message.set_info(format!(
                            "{} added with id {}",
                            player.name, player.id
                        ));
                        let len = self.controller.players().len();
                        self.list_state.select(len.checked_sub(1));
                        self.after_command();
                    }
                    SubmitOutcome::Invalid(errors) => {
                        if let Some(form) = self.form.as_mut() {
                            form.set_errors(errors);
                        }
                    }
                    SubmitOutcome::ShirtNumberTaken => {
                        if let Some(form) = self.form.as_mut() {
                            form.set_errors(vec![FieldError::new(
                                DraftField::ShirtNumber,
                                "shirt number already taken in this team",
                            )]);
                        }
                    }
                    SubmitOutcome::Busy => {}
                    SubmitOutcome::Failed(message) => {
                        if let Some(form) = self.form.as_mut() {
                            form.set_submit_error(format!(
                                "{} ({})",
                                SUBMIT_FAILED_MESSAGE, message
                            ));
                        }
                    }
                }
            }
        }
    }

    async fn cycle_team_filter(&mut self) {
        if self.teams.is_empty() {
            return;
        }
        self.team_filter = match self.team_filter {
            None => Some(0),
            Some(i) if i + 1 < self.teams.len() => Some(i + 1),
            Some(_) => None,
        };
        let team_id = self
            .team_filter
            .and_then(|i| self.teams.get(i))
            .map(|t| t.id);
        self.controller.select_team_filter(team_id).await;
        self.list_state.select(None);
        self.after_command();
    }

    fn next_player(&mut self) {
        let len = self.controller.players().len();
        if len == 0 {
            return;
        }
        let next = self.list_state.selected().map_or(0, |i| (i + 1) % len);
        self.list_state.select(Some(next));
    }

    fn previous_player(&mut self) {
        let len = self.controller.players().len();
        if len == 0 {
            return;
        }
        let previous = match self.list_state.selected() {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        self.list_state.select(Some(previous));
    }

    fn view_title(&self) -> String {
        if self.controller.showing_favorites() {
            format!("favorites ({})", self.controller.players().len())
        } else if !self.controller.search_query().is_empty() {
            format!("results for: \"{}\"", self.controller.search_query())
        } else if let Some(team) = self.team_filter.and_then(|i| self.teams.get(i)) {
            format!("team: {}", team.name)
        } else {
            "all players".to_string()
        }
    }

    fn render_stats(&self, f: &mut Frame, area: Rect) {
        let service = self.controller.service();
        let stats = service.player_stats();
        let text = format!(
            "{} players · average age {} · total value {} · {} favorites",
            stats.total_players,
            stats.average_age,
            service.format_market_value(stats.total_market_value),
            self.controller.favorites().len(),
        );
        f.render_widget(
            Paragraph::new(text).style(Style::default().fg(Color::DarkGray)),
            area,
        );
    }

    fn render_list(&mut self, f: &mut Frame, area: Rect) {
        let service = self.controller.service();
        let favorites = self.controller.favorites();
        let items: Vec<ListItem> = self
            .controller
            .players()
            .iter()
            .map(|p| {
                let star = if favorites.contains(p.id) { "★" } else { " " };
                let value_color = match MarketValueTier::of(p.market_value) {
                    MarketValueTier::High => Color::Red,
                    MarketValueTier::Medium => Color::Yellow,
                    MarketValueTier::Standard => Color::Green,
                };
                ListItem::new(Line::from(vec![
                    Span::styled(star, Style::default().fg(Color::Yellow)),
                    Span::raw(format!(
                        " {:<26} {:<20} {:<22} ",
                        p.name,
                        p.position.to_string(),
                        service.team_label(p.team_id)
                    )),
                    Span::styled(
                        service.format_market_value(p.market_value),
                        Style::default().fg(value_color),
                    ),
                ]))
            })
            .collect();
        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL))
            .highlight_style(
                Style::default()
                    .add_modifier(Modifier::BOLD)
                    .add_modifier(Modifier::REVERSED),
            )
            .highlight_symbol(">> ");
        f.render_stateful_widget(list, area, &mut self.list_state);
    }

    fn render_footer(&self, f: &mut Frame, area: Rect) {
        let entries: &[(&str, &str)] = match self.mode {
            Mode::Browse => &[
                ("↑/↓", "move"),
                ("enter", "profile"),
                ("/", "search"),
                ("t", "next team"),
                ("a", "all players"),
                ("f", "favorite"),
                ("v", "favorites"),
                ("n", "new player"),
                ("q", "quit"),
            ],
            Mode::Search => &[("enter", "search"), ("esc", "cancel")],
            Mode::Profile => &[("f", "favorite"), ("esc", "close")],
            Mode::AddPlayer => &[
                ("tab", "next field"),
                ("↑/↓", "change"),
                ("enter", "save"),
                ("esc", "cancel"),
            ],
        };
        render_key_hints(f, area, entries);
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
