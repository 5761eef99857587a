use crate::{
    screens::components::{
        select::Select,
        text_box::{date_chars, digits_only, TextBox},
    },
    shapes::{
        draft::{DraftField, FieldError, PlayerDraft},
        enums::{FootEnum, PositionEnum},
        team::TeamEntry,
    },
};
use ratatui::{
    crossterm::event::{KeyCode, KeyEvent},
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const FIELD_COUNT: usize = 11;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    None,
    Submit,
    Cancel,
}

/// Modal form collecting a [`PlayerDraft`].
#[derive(Debug)]
pub struct PlayerForm {
    name: TextBox,
    age: TextBox,
    position: Select<PositionEnum>,
    nationality: TextBox,
    team: Select<TeamEntry>,
    market_value: TextBox,
    contract_until: TextBox,
    shirt_number: TextBox,
    height: TextBox,
    weight: TextBox,
    foot: Select<FootEnum>,
    field: usize,
    errors: Vec<FieldError>,
    submit_error: Option<String>,
}

impl PlayerForm {
    pub fn new(teams: Vec<TeamEntry>) -> Self {
        let mut form = Self {
            name: TextBox::new("name", false),
            age: TextBox::with_filter("age", false, digits_only),
            position: Select::new("position", PositionEnum::ALL.to_vec(), false),
            nationality: TextBox::new("nationality", false),
            team: Select::new("team", teams, false),
            market_value: TextBox::with_filter("market value (€)", false, digits_only),
            contract_until: TextBox::with_filter("contract until (YYYY-MM-DD)", false, date_chars),
            shirt_number: TextBox::with_filter("shirt number", false, digits_only),
            height: TextBox::with_filter("height (cm)", false, digits_only),
            weight: TextBox::with_filter("weight (kg)", false, digits_only),
            foot: Select::new("foot", FootEnum::ALL.to_vec(), false),
            field: 0,
            errors: vec![],
            submit_error: None,
        };
        form.focus(0);
        form
    }

    pub fn to_draft(&self) -> PlayerDraft {
        PlayerDraft {
            name: self.name.value().to_string(),
            age: self.age.value().to_string(),
            position: self
                .position
                .get_selected_value()
                .map(|p| p.to_string())
                .unwrap_or_default(),
            nationality: self.nationality.value().to_string(),
            team_id: self
                .team
                .get_selected_value()
                .map(|t| t.id.to_string())
                .unwrap_or_default(),
            market_value: self.market_value.value().to_string(),
            contract_until: self.contract_until.value().to_string(),
            shirt_number: self.shirt_number.value().to_string(),
            height: self.height.value().to_string(),
            weight: self.weight.value().to_string(),
            foot: self
                .foot
                .get_selected_value()
                .map(|f| f.to_string())
                .unwrap_or_default(),
        }
    }

    pub fn set_errors(&mut self, errors: Vec<FieldError>) {
        self.errors = errors;
        self.submit_error = None;
    }

    pub fn set_submit_error(&mut self, message: String) {
        self.errors.clear();
        self.submit_error = Some(message);
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> FormAction {
        match key.code {
            KeyCode::Esc => FormAction::Cancel,
            KeyCode::Enter => FormAction::Submit,
            KeyCode::Tab => {
                self.focus((self.field + 1) % FIELD_COUNT);
                FormAction::None
            }
            KeyCode::BackTab => {
                self.focus((self.field + FIELD_COUNT - 1) % FIELD_COUNT);
                FormAction::None
            }
            KeyCode::Up => {
                self.handle_up();
                FormAction::None
            }
            KeyCode::Down => {
                self.handle_down();
                FormAction::None
            }
            KeyCode::Char(c) => {
                if let Some(text_box) = self.current_text_box() {
                    text_box.handle_char(c);
                    self.clear_field_error();
                }
                FormAction::None
            }
            KeyCode::Backspace => {
                if let Some(text_box) = self.current_text_box() {
                    text_box.handle_backspace();
                    self.clear_field_error();
                }
                FormAction::None
            }
            _ => FormAction::None,
        }
    }

    fn field_kind(index: usize) -> DraftField {
        match index {
            0 => DraftField::Name,
            1 => DraftField::Age,
            2 => DraftField::Position,
            3 => DraftField::Nationality,
            4 => DraftField::TeamId,
            5 => DraftField::MarketValue,
            6 => DraftField::ContractUntil,
            7 => DraftField::ShirtNumber,
            8 => DraftField::Height,
            9 => DraftField::Weight,
            _ => DraftField::Foot,
        }
    }

    fn clear_field_error(&mut self) {
        let field = Self::field_kind(self.field);
        self.errors.retain(|e| e.field != field);
    }

    fn focus(&mut self, index: usize) {
        self.field = index;
        for (i, text_box) in [
            (0, &mut self.name),
            (1, &mut self.age),
            (3, &mut self.nationality),
            (5, &mut self.market_value),
            (6, &mut self.contract_until),
            (7, &mut self.shirt_number),
            (8, &mut self.height),
            (9, &mut self.weight),
        ] {
            text_box.writing_mode = i == index;
        }
        self.position.writing_mode = index == 2;
        self.team.writing_mode = index == 4;
        self.foot.writing_mode = index == 10;
    }

    fn current_text_box(&mut self) -> Option<&mut TextBox> {
        match self.field {
            0 => Some(&mut self.name),
            1 => Some(&mut self.age),
            3 => Some(&mut self.nationality),
            5 => Some(&mut self.market_value),
            6 => Some(&mut self.contract_until),
            7 => Some(&mut self.shirt_number),
            8 => Some(&mut self.height),
            9 => Some(&mut self.weight),
            _ => None,
        }
    }

    fn handle_up(&mut self) {
        match self.field {
            2 => self.position.handle_up(),
            4 => self.team.handle_up(),
            10 => self.foot.handle_up(),
            _ => {}
        }
    }

    fn handle_down(&mut self) {
        match self.field {
            2 => self.position.handle_down(),
            4 => self.team.handle_down(),
            10 => self.foot.handle_down(),
            _ => {}
        }
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        f.render_widget(Clear, area);
        let block = Block::default().borders(Borders::ALL).title("new player");
        let inner = block.inner(area);
        f.render_widget(block, area);
        let mut constraints = vec![Constraint::Length(1); FIELD_COUNT];
        constraints.push(Constraint::Min(1));
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints(constraints)
            .split(inner);
        self.name.render(f, rows[0]);
        self.age.render(f, rows[1]);
        self.position.render(f, rows[2]);
        self.nationality.render(f, rows[3]);
        self.team.render(f, rows[4]);
        self.market_value.render(f, rows[5]);
        self.contract_until.render(f, rows[6]);
        self.shirt_number.render(f, rows[7]);
        self.height.render(f, rows[8]);
        self.weight.render(f, rows[9]);
        self.foot.render(f, rows[10]);
        let messages: Vec<Line> = self
            .submit_error
            .iter()
            .cloned()
            .chain(self.errors.iter().map(|e| e.to_string()))
            .map(Line::from)
            .collect();
        let errors = Paragraph::new(messages)
            .style(Style::default().fg(Color::Red))
            .wrap(Wrap { trim: true });
        f.render_widget(errors, rows[FIELD_COUNT]);
    }
}
