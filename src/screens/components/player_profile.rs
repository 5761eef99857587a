use crate::{catalog::CatalogService, shapes::player::PlayerEntry};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

fn row(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{:<16}", label),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(value),
    ])
}

fn or_dash<T: ToString>(value: Option<T>, unit: &str) -> String {
    value
        .map(|v| format!("{}{}", v.to_string(), unit))
        .unwrap_or_else(|| "-".to_string())
}

pub fn render_profile(
    f: &mut Frame,
    area: Rect,
    player: &PlayerEntry,
    service: &CatalogService,
    is_favorite: bool,
) {
    f.render_widget(Clear, area);
    let title = if is_favorite {
        format!("★ {}", player)
    } else {
        player.to_string()
    };
    let lines = vec![
        row("team", service.team_label(player.team_id)),
        row("position", player.position.to_string()),
        row("age", player.age.to_string()),
        row("nationality", player.nationality.clone()),
        row("market value", service.format_market_value(player.market_value)),
        row(
            "contract until",
            or_dash(player.contract_until.map(|d| d.format("%Y-%m-%d")), ""),
        ),
        row("shirt number", or_dash(player.shirt_number, "")),
        row("height", or_dash(player.height, " cm")),
        row("weight", or_dash(player.weight, " kg")),
        row("foot", player.foot.to_string()),
        row("matches", player.stats.matches.to_string()),
        row("goals", player.stats.goals.to_string()),
        row("assists", player.stats.assists.to_string()),
        row(
            "added",
            or_dash(
                player.date_added.map(|d| d.format("%Y-%m-%d %H:%M")),
                "",
            ),
        ),
    ];
    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(widget, area);
}
