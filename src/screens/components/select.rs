use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use std::fmt::Display;

/// One-line picker cycling through a fixed list of values.
#[derive(Debug, Clone)]
pub struct Select<T>
where
    T: Display + Clone,
{
    selected: Option<usize>,
    pub writing_mode: bool,
    label: String,
    values: Vec<T>,
}

impl<T: Display + Clone> Select<T> {
    pub fn new(label: &str, values: Vec<T>, writing_mode: bool) -> Self {
        Self {
            selected: if values.is_empty() { None } else { Some(0) },
            writing_mode,
            label: label.to_string(),
            values,
        }
    }

    pub fn get_selected_value(&self) -> Option<T> {
        self.selected.and_then(|i| self.values.get(i)).cloned()
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        let value = self
            .get_selected_value()
            .map(|v| v.to_string())
            .unwrap_or_default();
        let value = if self.writing_mode {
            format!("< {} >", value)
        } else {
            value
        };
        let line = Line::from(vec![
            Span::styled(
                format!("{}: ", self.label),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(value),
        ]);
        let style = if self.writing_mode {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        f.render_widget(Paragraph::new(line).style(style), area);
    }

    pub fn handle_up(&mut self) {
        if !self.writing_mode || self.values.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            Some(0) | None => self.values.len() - 1,
            Some(i) => i - 1,
        });
    }

    pub fn handle_down(&mut self) {
        if !self.writing_mode || self.values.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            Some(i) => (i + 1) % self.values.len(),
            None => 0,
        });
    }
}
