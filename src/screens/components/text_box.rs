use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Decides whether `c` may be appended to the current value.
pub type CharFilter = fn(&str, char) -> bool;

pub fn any_char(_: &str, _: char) -> bool {
    true
}

pub fn digits_only(value: &str, c: char) -> bool {
    c.is_ascii_digit() && value.len() < 12
}

pub fn date_chars(value: &str, c: char) -> bool {
    (c.is_ascii_digit() || c == '-') && value.len() < 10
}

#[derive(Debug, Clone)]
pub struct TextBox {
    value: String,
    pub writing_mode: bool,
    label: String,
    filter: CharFilter,
}

impl TextBox {
    pub fn new(label: &str, writing_mode: bool) -> Self {
        Self::with_filter(label, writing_mode, any_char)
    }

    pub fn with_filter(label: &str, writing_mode: bool, filter: CharFilter) -> Self {
        Self {
            value: String::new(),
            writing_mode,
            label: label.to_string(),
            filter,
        }
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        let style = if self.writing_mode {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        let line = Line::from(vec![
            Span::styled(
                format!("{}: ", self.label),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(self.value.clone()),
        ]);
        f.render_widget(Paragraph::new(line).style(style), area);
    }

    pub fn handle_char(&mut self, c: char) {
        if self.writing_mode && (self.filter)(&self.value, c) {
            self.value.push(c);
        }
    }

    pub fn handle_backspace(&mut self) {
        if self.writing_mode {
            self.value.pop();
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }
}
