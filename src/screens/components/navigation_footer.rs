use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

/// Key hints, wrapped onto as many lines as the area needs.
pub fn render_key_hints(f: &mut Frame, area: Rect, entries: &[(&str, &str)]) {
    let max_width = area.width as usize;
    let mut lines = Vec::new();
    let mut current = Vec::new();
    let mut width = 0;
    for (key, action) in entries {
        // "key = action" plus the gap to the next entry
        let span_len = key.len() + action.len() + 6;
        if width + span_len > max_width && !current.is_empty() {
            lines.push(Line::from(std::mem::take(&mut current)));
            width = 0;
        }
        current.push(Span::styled(key.to_string(), Style::default().fg(Color::Cyan)));
        current.push(Span::raw(" = "));
        current.push(Span::styled(
            action.to_string(),
            Style::default().fg(Color::White),
        ));
        current.push(Span::raw("   "));
        width += span_len;
    }
    if !current.is_empty() {
        lines.push(Line::from(current));
    }
    let paragraph = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .borders(Borders::NONE)
                .padding(Padding::new(1, 0, 0, 0)),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}
