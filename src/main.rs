use player_catalog::{
    catalog::{latency::LatencyPolicy, CatalogService},
    controller::CatalogController,
    logging::logger::{init_logger, log_error, log_info},
    providers::{
        embedded::dataset_reader::EmbeddedDatasetReader,
        fs::{
            dataset_reader::FileSystemDatasetReader,
            favorites_reader::FileSystemFavoritesReader,
            favorites_writer::FileSystemFavoritesWriter,
            path::{get_base_path, get_favorites_file_path, get_log_file_path},
            settings_reader::FileSystemSettingsReader,
        },
        settings_reader::SettingsReader,
    },
    screens::{
        player_list_screen::PlayerListScreen,
        screen::{AppAction, ScreenAsync},
    },
    shapes::settings::Settings,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    widgets::Paragraph,
    Terminal,
};
use std::{error::Error, sync::Arc};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = std::env::args().collect();
    if args.iter().any(|a| a == "--version" || a == "-V") {
        println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        return Ok(());
    }
    let base_dir = get_base_path()?;
    init_logger(get_log_file_path(&base_dir));
    let settings = match FileSystemSettingsReader::new(&base_dir).read().await {
        Ok(settings) => settings,
        Err(e) => {
            log_error(&format!("invalid settings, using defaults: {}", e));
            Settings::default()
        }
    };
    let latency = if settings.simulate_latency {
        LatencyPolicy::Simulated
    } else {
        LatencyPolicy::Disabled
    };
    let service = match &settings.dataset_path {
        Some(path) => {
            CatalogService::from_reader(&FileSystemDatasetReader::new(path), latency).await?
        }
        None => CatalogService::from_reader(&EmbeddedDatasetReader::new(), latency).await?,
    };
    let favorites_path = get_favorites_file_path(&base_dir);
    let controller = CatalogController::start(
        service,
        &FileSystemFavoritesReader::new(&favorites_path),
        Arc::new(FileSystemFavoritesWriter::new(&favorites_path)),
    )
    .await;
    let mut screen = PlayerListScreen::new(controller);
    screen.refresh_data().await;
    log_info("player catalog started");

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    let res = run_app(&mut terminal, &mut screen).await;
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    if let Err(err) = res {
        println!("{:?}", err)
    }
    Ok(())
}

/// The main structure is the following one:
///
/// |----------------------------|
/// |          header            |
/// |----------------------------|
/// |                            |
/// |           body             |
/// |                            |
/// |----------------------------|
/// | footer_left | footer_right |
/// |----------------------------|
async fn run_app<B: Backend, S: ScreenAsync>(
    terminal: &mut Terminal<B>,
    screen: &mut S,
) -> std::io::Result<()> {
    loop {
        terminal.draw(|f| {
            let size = f.area();
            let container = Layout::default()
                .direction(Direction::Vertical)
                .margin(1)
                .constraints([
                    Constraint::Length(1),
                    Constraint::Min(1),
                    Constraint::Length(3),
                ])
                .split(size);
            let footer = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(container[2]);
            let header = Paragraph::new("⚽ player catalog")
                .style(Style::default().add_modifier(Modifier::BOLD));
            f.render_widget(header, container[0]);
            screen.render(f, container[1], footer[0], footer[1]);
        })?;
        if event::poll(std::time::Duration::from_millis(200))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Release {
                    continue;
                }
                match screen.handle_key(key).await {
                    AppAction::None => {}
                    AppAction::Quit(result) => return result,
                }
            }
        }
    }
}
